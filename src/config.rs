/// Driver configuration parsed from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
    /// Draw pieces with Unicode chess glyphs instead of letters.
    pub unicode: bool,
    /// Print the legal destinations of a selected piece.
    pub show_hints: bool,
}

impl AppConfig {
    /// Load configuration from environment variables with defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; unparseable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = AppConfig::default();
        AppConfig {
            log_filter: lookup("CHESS_LOG").unwrap_or(defaults.log_filter),
            unicode: lookup("CHESS_UNICODE")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.unicode),
            show_hints: lookup("CHESS_SHOW_HINTS")
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.show_hints),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "chess_rules=info".to_string(),
            unicode: false,
            show_hints: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
