use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::aesthetic::{AestheticType, AspectRatio};

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Clone, Debug)]
pub struct LuminaConfig {
    pub llm: LLMConfig,
    pub studio: StudioConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub api_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub edit_model: String,
    pub request_timeout_secs: u64,
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            gemini_api_key: String::new(),
            api_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            text_model: "gemini-2.5-flash".to_string(),
            image_model: "imagen-4.0-generate-001".to_string(),
            edit_model: "gemini-2.5-flash-image".to_string(),
            request_timeout_secs: 120,
        }
    }
}

#[derive(Clone, Debug)]
pub struct StudioConfig {
    pub default_style: AestheticType,
    pub default_aspect_ratio: AspectRatio,
    pub notification_capacity: usize,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            default_style: AestheticType::Rustic,
            default_aspect_ratio: AspectRatio::default(),
            notification_capacity: 50,
        }
    }
}

pub fn generate_timestamp() -> DateTime<Utc> {
    Utc::now()
}

/// Time-ordered identifier, monotonic within the process.
pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
