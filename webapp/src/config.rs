use log::LevelFilter;
use serde::Deserialize;

/// Page-level settings, read once at start-up.
///
/// Every field has a default matching the tweets app, so the `<body>` only
/// needs a `data-like-config` JSON attribute to override what differs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LikeConfig {
    pub cookie_name: String,
    pub csrf_header: String,
    pub namespace: String,
    pub log_level: String,
}

impl Default for LikeConfig {
    fn default() -> Self {
        Self {
            cookie_name: "csrftoken".to_string(),
            csrf_header: "X-CSRFToken".to_string(),
            namespace: "tweets".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl LikeConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
