pub mod get_sample_menu;
pub mod parse_menu;
