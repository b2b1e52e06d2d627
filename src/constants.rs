// Chat widget defaults - these are the single source of truth for defaults
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_MODEL: &str = "mistralai/mistral-7b-instruct";
pub const DEFAULT_WIDGET_TITLE: &str = "AI Assistant";
pub const DEFAULT_PLACEHOLDER: &str = "Type your message...";

// Canned transcript entries
pub const WELCOME_MESSAGE: &str = "Hello! I'm your AI assistant. How can I help you today?";
pub const HTTP_FAILURE_MESSAGE: &str = "Sorry, I encountered an error. Please try again.";
pub const TRANSPORT_FAILURE_MESSAGE: &str = "Sorry, I'm having trouble connecting. Please try again.";

// Dashboard
pub const DEFAULT_TRAINING_API_BASE: &str = "/training/api";
pub const DASHBOARD_ROOT_ID: &str = "training-dashboard";
pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_CSV_CATEGORY: &str = "imported";
pub const DEFAULT_URL_CATEGORY: &str = "web";
pub const ALL_CATEGORIES_LABEL: &str = "All Categories";
pub const PREVIEW_MAX_CHARS: usize = 100;

// Notices
pub const NOTICE_DISMISS_MS: u32 = 5_000;
