pub mod get_settings;
pub mod update_settings;
