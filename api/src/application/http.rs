pub mod aesthetic;
pub mod dish;
pub mod editor;
pub mod health;
pub mod menu;
pub mod notification;
pub mod server;
pub mod settings;
