use crate::application::http::{
    aesthetic::router::AestheticApiDoc, dish::router::DishApiDoc, editor::router::EditorApiDoc,
    menu::router::MenuApiDoc, notification::router::NotificationApiDoc,
    settings::router::SettingsApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Lumina Feast API"
    ),
    nest(
        (path = "", api = AestheticApiDoc),
        (path = "/settings", api = SettingsApiDoc),
        (path = "/menu", api = MenuApiDoc),
        (path = "/dishes", api = DishApiDoc),
        (path = "", api = EditorApiDoc),
        (path = "/notifications", api = NotificationApiDoc),
    )
)]
pub struct ApiDoc;
