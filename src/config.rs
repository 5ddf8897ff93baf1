use tracing::Level;

/// Endpoint used when neither `--api-url` nor `NEUROVISION_API_URL` is set.
pub const DEFAULT_API_URL: &str = "https://api.neurovision.andy-chen.dev";
pub const API_URL_ENV: &str = "NEUROVISION_API_URL";

/// Runtime settings resolved from the command line and environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_url: String,
    pub verbose: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            verbose: false,
        }
    }
}

impl Settings {
    pub fn new(api_url: Option<String>, verbose: bool) -> Self {
        let api_url = api_url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self { api_url, verbose }
    }

    pub fn log_level(&self) -> Level {
        if self.verbose { Level::DEBUG } else { Level::INFO }
    }
}

/// Install the global fmt subscriber.
pub fn init_logging(settings: &Settings) {
    tracing_subscriber::fmt()
        .with_max_level(settings.log_level())
        .with_target(false)
        .init();
}
