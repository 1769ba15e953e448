use clap::Parser;
use lumina_core::domain::{
    aesthetic::{AestheticType, AspectRatio},
    common::{DEFAULT_GEMINI_BASE_URL, LLMConfig, LuminaConfig, StudioConfig},
};

#[derive(Debug, Clone, Parser)]
#[command(name = "lumina-api", version, about = "Lumina Feast virtual food studio")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub studio: StudioArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(Debug, Clone, clap::Args)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix mounted in front of every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LlmArgs {
    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    /// Legacy name for the Gemini credential.
    #[arg(long = "api-key", env = "API_KEY", hide = true, hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub api_base_url: String,

    #[arg(long = "text-model", env = "GEMINI_TEXT_MODEL", default_value = "gemini-2.5-flash")]
    pub text_model: String,

    #[arg(
        long = "image-model",
        env = "GEMINI_IMAGE_MODEL",
        default_value = "imagen-4.0-generate-001"
    )]
    pub image_model: String,

    #[arg(
        long = "edit-model",
        env = "GEMINI_EDIT_MODEL",
        default_value = "gemini-2.5-flash-image"
    )]
    pub edit_model: String,

    #[arg(long = "llm-timeout-secs", env = "GEMINI_TIMEOUT_SECS", default_value_t = 120)]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, clap::Args)]
pub struct StudioArgs {
    #[arg(long = "default-style", env = "DEFAULT_STYLE", default_value = "RUSTIC")]
    pub default_style: AestheticType,

    #[arg(long = "default-aspect-ratio", env = "DEFAULT_ASPECT_RATIO", default_value = "4:3")]
    pub default_aspect_ratio: AspectRatio,

    #[arg(long = "notification-capacity", env = "NOTIFICATION_CAPACITY", default_value_t = 50)]
    pub notification_capacity: usize,
}

#[derive(Debug, Clone, clap::Args)]
pub struct LogArgs {
    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,

    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,
}

impl LlmArgs {
    pub fn resolved_api_key(&self) -> String {
        self.gemini_api_key
            .as_deref()
            .or(self.api_key.as_deref())
            .unwrap_or_default()
            .to_string()
    }
}

impl From<Args> for LuminaConfig {
    fn from(args: Args) -> Self {
        LuminaConfig {
            llm: LLMConfig {
                gemini_api_key: args.llm.resolved_api_key(),
                api_base_url: args.llm.api_base_url,
                text_model: args.llm.text_model,
                image_model: args.llm.image_model,
                edit_model: args.llm.edit_model,
                request_timeout_secs: args.llm.request_timeout_secs,
            },
            studio: StudioConfig {
                default_style: args.studio.default_style,
                default_aspect_ratio: args.studio.default_aspect_ratio,
                notification_capacity: args.studio.notification_capacity,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_convert_into_core_config() {
        let args = Args::parse_from([
            "lumina-api",
            "--gemini-api-key",
            "secret",
            "--default-style",
            "social",
            "--default-aspect-ratio",
            "9:16",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(args.server.allowed_origins, vec!["http://a.test", "http://b.test"]);

        let config = LuminaConfig::from(args);
        assert_eq!(config.llm.gemini_api_key, "secret");
        assert_eq!(config.studio.default_style, AestheticType::Social);
        assert_eq!(config.studio.default_aspect_ratio, AspectRatio::Story);
    }

    #[test]
    fn legacy_key_is_used_when_primary_is_missing() {
        let args = Args::parse_from(["lumina-api", "--api-key", "legacy"]);
        assert_eq!(args.llm.resolved_api_key(), "legacy");
    }
}
