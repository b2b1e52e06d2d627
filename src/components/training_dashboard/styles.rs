use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;

pub const STYLE_ID: &str = "training-dashboard-styles";

const CSS: &str = r#"
.training-dashboard{display:flex;min-height:100vh;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif;color:#212529;background:#f8f9fa}
.training-dashboard .hidden{display:none!important}
.dashboard-sidebar{width:240px;flex-shrink:0;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);color:#fff;padding:24px 16px}
.dashboard-sidebar h2{font-size:18px;margin:0 0 24px}
.dashboard-sidebar ul{list-style:none;margin:0;padding:0}
.nav-link{display:block;width:100%;text-align:left;background:none;border:none;color:rgba(255,255,255,.85);padding:10px 14px;margin-bottom:4px;border-radius:8px;cursor:pointer;font-size:14px}
.nav-link:hover{background:rgba(255,255,255,.1);color:#fff}
.nav-link.active{background:rgba(255,255,255,.2);color:#fff}
.dashboard-main{flex:1;padding:24px;overflow-x:auto}
.content-section{display:none}
.content-section.active{display:block}
.content-section h2{margin-top:0}
.stat-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:16px;margin-bottom:24px}
.card{background:#fff;border-radius:12px;box-shadow:0 2px 8px rgba(0,0,0,.08);padding:20px;margin-bottom:16px}
.stat-value{font-size:32px;font-weight:700;color:#667eea}
.stat-label{color:#6c757d;font-size:14px}
.rag-status.ready .stat-value{color:#16a34a}
.toolbar{display:flex;align-items:center;gap:12px;margin-bottom:16px;flex-wrap:wrap}
.count-label{margin-left:auto;color:#6c757d;font-size:14px}
.btn{border:none;border-radius:6px;padding:8px 14px;cursor:pointer;font-size:14px;background:#e9ecef;color:#212529}
.btn-primary{background:#667eea;color:#fff}
.btn-primary:hover{background:#5a67d8}
.btn-outline{background:#fff;border:1px solid #667eea;color:#667eea}
.btn-sm{padding:4px 10px;font-size:13px}
.data-table{width:100%;border-collapse:collapse;background:#fff}
.data-table th,.data-table td{padding:10px;border-bottom:1px solid #e9ecef;text-align:left;vertical-align:top}
.data-table td.placeholder{text-align:center;color:#6c757d}
.data-table td.placeholder.failed{color:#dc2626}
.cell-preview{max-width:300px;overflow:hidden;text-overflow:ellipsis}
.badge{display:inline-block;padding:2px 8px;border-radius:10px;font-size:12px;background:#6c757d;color:#fff}
.badge-info{background:#0ea5e9}
.form-group{margin-bottom:12px;display:flex;flex-direction:column;gap:4px}
.form-group label{font-size:13px;color:#495057}
.form-group input,.form-group textarea,.form-group select,.toolbar select{border:1px solid #ced4da;border-radius:6px;padding:8px 10px;font-size:14px}
.form-group textarea{min-height:120px;resize:vertical}
.import-grid{display:grid;grid-template-columns:repeat(auto-fit,minmax(280px,1fr));gap:16px}
.rag-prompt{white-space:pre-wrap;background:#f1f3f5;border-radius:6px;padding:12px;font-size:13px}
.rag-source{border:1px solid #e9ecef;border-radius:8px;padding:12px;margin-bottom:8px}
.rag-source h4{margin:0 0 6px;font-size:14px}
.rag-source p{margin:0 0 6px;color:#6c757d;font-size:13px}
.text-muted{color:#6c757d}
.modal{position:fixed;inset:0;background:rgba(0,0,0,.45);display:flex;align-items:center;justify-content:center;z-index:1000}
.modal-content{background:#fff;border-radius:12px;width:min(560px,92vw);max-height:90vh;display:flex;flex-direction:column;overflow:hidden}
.modal-header{display:flex;align-items:center;justify-content:space-between;padding:16px 20px;border-bottom:1px solid #e9ecef}
.modal-title{margin:0;font-size:16px}
.modal-close{background:none;border:none;font-size:16px;cursor:pointer}
.modal-body{padding:20px;overflow-y:auto}
.modal-footer{display:flex;justify-content:flex-end;gap:8px;padding:12px 20px;border-top:1px solid #e9ecef}
.document-viewer-content{white-space:pre-wrap;font-size:14px}
"#;

pub fn inject(document: &Document) -> Result<(), JsValue> {
    dom_utils::inject_style(document, STYLE_ID, CSS)
}
