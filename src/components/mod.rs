pub mod chat_widget;
pub mod modal;
pub mod training_dashboard;

// Re-export commonly used items
pub use chat_widget::ChatbotWidget;
pub use training_dashboard::mount_training_dashboard;
