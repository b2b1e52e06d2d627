use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::dom_utils;

pub const STYLE_ID: &str = "chatbot-widget-styles";

const CSS: &str = r#"
.chatbot-widget{position:fixed;z-index:9999;font-family:-apple-system,BlinkMacSystemFont,'Segoe UI',Roboto,sans-serif}
.chatbot-widget.bottom-right{bottom:20px;right:20px}
.chatbot-widget.bottom-left{bottom:20px;left:20px}
.chatbot-widget.top-right{top:20px;right:20px}
.chatbot-widget.top-left{top:20px;left:20px}
.chatbot-toggle{width:60px;height:60px;border-radius:50%;background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);border:none;cursor:pointer;display:flex;align-items:center;justify-content:center;color:#fff;font-size:24px;box-shadow:0 4px 12px rgba(0,0,0,.2);transition:all .3s ease}
.chatbot-toggle:hover{transform:scale(1.1);box-shadow:0 6px 16px rgba(0,0,0,.3)}
.chatbot-container{position:absolute;bottom:70px;right:0;width:350px;height:500px;background:#fff;border-radius:12px;box-shadow:0 8px 32px rgba(0,0,0,.2);display:flex;flex-direction:column;overflow:hidden}
.chatbot-container.hidden{display:none}
.chatbot-widget.top-right .chatbot-container,.chatbot-widget.top-left .chatbot-container{bottom:auto;top:70px}
.chatbot-widget.bottom-left .chatbot-container,.chatbot-widget.top-left .chatbot-container{right:auto;left:0}
.chatbot-header{background:linear-gradient(135deg,#667eea 0%,#764ba2 100%);color:#fff;padding:16px;display:flex;align-items:center;justify-content:space-between}
.chatbot-title{font-weight:600;font-size:16px}
.chatbot-close{background:none;border:none;color:#fff;font-size:18px;cursor:pointer;padding:4px}
.chatbot-messages{flex:1;overflow-y:auto;padding:16px;background-color:#f8f9fa}
.chatbot-message{margin-bottom:12px;animation:chatbot-fade-in .3s ease}
.chatbot-message.user{text-align:right}
.chatbot-message .message-content{border-radius:18px;padding:12px 16px;display:inline-block;max-width:80%;word-wrap:break-word}
.chatbot-message.user .message-content{background:#007bff;color:#fff;border-bottom-right-radius:4px}
.chatbot-message.ai .message-content{background:#fff;color:#333;border-bottom-left-radius:4px;box-shadow:0 2px 4px rgba(0,0,0,.1)}
.chatbot-input-area{padding:16px;background:#fff;border-top:1px solid #e9ecef;display:flex;gap:8px}
.chatbot-input{flex:1;border:1px solid #ddd;border-radius:20px;padding:8px 16px;outline:none;font-size:14px}
.chatbot-input:focus{border-color:#007bff}
.chatbot-send{background:#007bff;color:#fff;border:none;border-radius:50%;width:36px;height:36px;cursor:pointer;display:flex;align-items:center;justify-content:center;font-size:16px}
.chatbot-send:hover{background:#0056b3}
.chatbot-send:disabled{background:#ccc;cursor:not-allowed}
.typing-indicator{display:flex;align-items:center;gap:4px;padding:12px 16px;background:#fff;border-radius:18px 18px 18px 4px;box-shadow:0 2px 4px rgba(0,0,0,.1);max-width:80%}
.typing-dot{width:6px;height:6px;border-radius:50%;background:#666;animation:chatbot-typing 1.4s infinite}
.typing-dot:nth-child(2){animation-delay:.2s}
.typing-dot:nth-child(3){animation-delay:.4s}
@keyframes chatbot-typing{0%,60%,100%{transform:scale(1);opacity:.5}30%{transform:scale(1.2);opacity:1}}
@keyframes chatbot-fade-in{from{opacity:0;transform:translateY(10px)}to{opacity:1;transform:translateY(0)}}
.chatbot-widget.dark .chatbot-container{background:#2c3e50}
.chatbot-widget.dark .chatbot-messages{background:#34495e}
.chatbot-widget.dark .chatbot-message.ai .message-content{background:#3c4c5c;color:#ecf0f1}
.chatbot-widget.dark .chatbot-input-area{background:#2c3e50;border-color:#5a6c7d}
.chatbot-widget.dark .chatbot-input{background:#34495e;border-color:#5a6c7d;color:#ecf0f1}
@media (max-width:480px){.chatbot-container{width:300px;height:400px}}
"#;

/// Add the widget stylesheet to the page unless an earlier widget did.
pub fn inject(document: &Document) -> Result<(), JsValue> {
    dom_utils::inject_style(document, STYLE_ID, CSS)
}
