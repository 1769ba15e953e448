pub mod aesthetic;
pub mod common;
pub mod dish;
pub mod editor;
pub mod notification;
pub mod settings;
