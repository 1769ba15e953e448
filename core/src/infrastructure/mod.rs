pub mod dish;
pub mod editor;
pub mod llm;
pub mod notification;
pub mod settings;
