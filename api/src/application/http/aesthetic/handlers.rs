pub mod get_aesthetics;
pub mod get_aspect_ratios;
