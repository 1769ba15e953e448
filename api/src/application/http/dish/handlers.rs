pub mod clear_dishes;
pub mod download_dish_image;
pub mod generate_all_dishes;
pub mod generate_dish_image;
pub mod get_dish;
pub mod get_dishes;
pub mod set_dish_aspect_ratio;
pub mod upload_dish_image;
