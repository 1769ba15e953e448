use std::sync::LazyLock;

use base64::{Engine as _, engine::general_purpose};
use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

static DATA_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:(?P<mime>[\w.+-]+/[\w.+-]+);base64,(?P<payload>.*)$")
        .expect("data uri pattern is valid")
});

static EDITABLE_IMAGE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/(png|jpeg|jpg|webp);base64,").expect("image prefix pattern is valid")
});

static IMAGE_MIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^image/[\w.+-]+$").expect("image mime pattern is valid"));

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]").expect("slug pattern is valid"));

pub const DOWNLOAD_PREFIX: &str = "lumina-feast";

/// Builds a `data:` URI from a mime type and base64 payload.
pub fn data_uri(mime_type: &str, base64_payload: &str) -> String {
    format!("data:{mime_type};base64,{base64_payload}")
}

pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    data_uri(mime_type, &general_purpose::STANDARD.encode(bytes))
}

/// Bare `type/subtype` of an image content type, without parameters. `None` for anything
/// that is not an image.
pub fn image_mime_essence(content_type: &str) -> Option<String> {
    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    IMAGE_MIME.is_match(&essence).then_some(essence)
}

/// Splits a `data:` URI into its mime type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> Result<(String, Vec<u8>), CoreError> {
    let captures = DATA_URI
        .captures(uri)
        .ok_or_else(|| CoreError::InvalidInput("image is not a base64 data uri".to_string()))?;

    let bytes = general_purpose::STANDARD
        .decode(&captures["payload"])
        .map_err(|e| CoreError::InvalidInput(format!("invalid base64 image payload: {e}")))?;

    Ok((captures["mime"].to_string(), bytes))
}

/// Raw base64 payload of an image data URI, as the edit model expects it.
pub fn strip_image_data_uri(image: &str) -> &str {
    match EDITABLE_IMAGE_PREFIX.find(image) {
        Some(prefix) => &image[prefix.end()..],
        None => image,
    }
}

pub fn extension_for_mime(mime_type: &str) -> &'static str {
    match mime_type {
        "image/png" => "png",
        "image/webp" => "webp",
        "image/gif" => "gif",
        _ => "jpg",
    }
}

/// `lumina-feast-<slug>.<ext>` where the slug is the lowercased dish name with every
/// non-alphanumeric character replaced by `-`.
pub fn download_file_name(dish_name: &str, mime_type: &str) -> String {
    let slug = NON_ALPHANUMERIC
        .replace_all(dish_name, "-")
        .to_lowercase();

    format!("{DOWNLOAD_PREFIX}-{slug}.{}", extension_for_mime(mime_type))
}
