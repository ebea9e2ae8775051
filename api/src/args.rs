use clap::Parser;
use eatitude_core::domain::common::{
    DEFAULT_ARK_BASE_URL, DEFAULT_IMAGE_MODEL, DEFAULT_TEXT_MODEL, EatitudeConfig, LLMConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "eatitude-api", about, version)]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(
        long = "server-allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,

    #[arg(long = "server-host", env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 8000)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Request body limit in bytes. Base64 image payloads are about a third
    /// larger than the image itself.
    #[arg(
        long = "server-max-body-size",
        env = "MAX_BODY_SIZE",
        default_value_t = 16 * 1024 * 1024
    )]
    pub max_body_size: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "ark-api-key", env = "ARK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long = "ark-base-url", env = "ARK_BASE_URL", default_value = DEFAULT_ARK_BASE_URL)]
    pub base_url: String,

    #[arg(long = "ark-text-model", env = "ARK_TEXT_MODEL", default_value = DEFAULT_TEXT_MODEL)]
    pub text_model: String,

    #[arg(long = "ark-image-model", env = "ARK_IMAGE_MODEL", default_value = DEFAULT_IMAGE_MODEL)]
    pub image_model: String,

    #[arg(long = "ark-timeout-secs", env = "ARK_TIMEOUT_SECS", default_value_t = 300)]
    pub timeout_secs: u64,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

impl From<Args> for EatitudeConfig {
    fn from(args: Args) -> Self {
        EatitudeConfig {
            llm: LLMConfig {
                api_key: args.llm.api_key,
                base_url: args.llm.base_url,
                text_model: args.llm.text_model,
                image_model: args.llm.image_model,
                timeout_secs: args.llm.timeout_secs,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_follow_ark_models() {
        let args = Args::try_parse_from(["eatitude-api", "--ark-api-key", "secret"]).unwrap();
        let config = EatitudeConfig::from(args.clone());

        assert_eq!(args.server.allowed_origins, vec!["*".to_string()]);
        assert_eq!(config.llm.api_key, "secret");
        assert_eq!(config.llm.text_model, "deepseek-r1-250528");
        assert_eq!(config.llm.image_model, "seed-1-6-250615");
        assert_eq!(config.llm.timeout_secs, 300);
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::try_parse_from([
            "eatitude-api",
            "--ark-api-key",
            "secret",
            "--server-allowed-origins",
            "http://localhost:8081,https://eatitude.id",
        ])
        .unwrap();

        assert_eq!(
            args.server.allowed_origins,
            vec![
                "http://localhost:8081".to_string(),
                "https://eatitude.id".to_string()
            ]
        );
    }
}
