use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub backend: BackendConfig,
    pub session: SessionConfig,
    pub editor: EditorConfig,
    pub filter: FilterConfig,
    pub logs: LogsConfig,
}

/// Where the intranet backend lives and how requests reach it
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    /// Header that carries `Bearer <token>`
    pub auth_header: String,
    /// No timeout is applied unless one is configured
    pub request_timeout: Option<Duration>,
}

#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    pub access_token: Option<String>,
}

/// Drag-and-drop tuning for the category tree editor
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// How long the pointer must rest on a card before it becomes a nesting target
    pub hover_dwell: Duration,
    /// Leftward displacement (px) past which a drop promotes the node one level
    pub unnest_threshold_px: f64,
}

/// Group/unit selection used to scope category fetches
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    pub group_ids: Vec<i64>,
    pub unit_ids: Vec<i64>,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub page_size: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.to_string().contains("not found") {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            backend: BackendConfig::from_env()?,
            session: SessionConfig::from_env()?,
            editor: EditorConfig::from_env()?,
            filter: FilterConfig::from_env()?,
            logs: LogsConfig::from_env()?,
        })
    }
}

impl BackendConfig {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8080/";
    const DEFAULT_AUTH_HEADER: &'static str = "token";

    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var("INTRANET_BACKEND_URL")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let auth_header = env::var("INTRANET_AUTH_HEADER")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_AUTH_HEADER.to_string());

        let request_timeout = match env::var("INTRANET_REQUEST_TIMEOUT_SECS") {
            Ok(raw) if !raw.is_empty() => Some(Duration::from_secs(
                raw.parse::<u64>()
                    .map_err(|_| "INTRANET_REQUEST_TIMEOUT_SECS must be a valid number".to_string())?,
            )),
            _ => None,
        };

        Ok(Self {
            base_url,
            auth_header,
            request_timeout,
        })
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            auth_header: Self::DEFAULT_AUTH_HEADER.to_string(),
            request_timeout: None,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Result<Self, String> {
        let access_token = env::var("INTRANET_ACCESS_TOKEN")
            .ok()
            .filter(|s| !s.is_empty());

        Ok(Self { access_token })
    }
}

impl EditorConfig {
    pub const DEFAULT_HOVER_DWELL_MS: u64 = 500;
    pub const DEFAULT_UNNEST_THRESHOLD_PX: f64 = 36.0;

    pub fn from_env() -> Result<Self, String> {
        let hover_dwell_ms = env::var("INTRANET_HOVER_DWELL_MS")
            .unwrap_or_else(|_| Self::DEFAULT_HOVER_DWELL_MS.to_string())
            .parse::<u64>()
            .map_err(|_| "INTRANET_HOVER_DWELL_MS must be a valid number".to_string())?;

        let unnest_threshold_px = env::var("INTRANET_UNNEST_THRESHOLD_PX")
            .unwrap_or_else(|_| Self::DEFAULT_UNNEST_THRESHOLD_PX.to_string())
            .parse::<f64>()
            .map_err(|_| "INTRANET_UNNEST_THRESHOLD_PX must be a valid number".to_string())?;

        if !unnest_threshold_px.is_finite() || unnest_threshold_px < 0.0 {
            return Err("INTRANET_UNNEST_THRESHOLD_PX must be a non-negative number".to_string());
        }

        Ok(Self {
            hover_dwell: Duration::from_millis(hover_dwell_ms),
            unnest_threshold_px,
        })
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hover_dwell: Duration::from_millis(Self::DEFAULT_HOVER_DWELL_MS),
            unnest_threshold_px: Self::DEFAULT_UNNEST_THRESHOLD_PX,
        }
    }
}

impl FilterConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            group_ids: parse_id_list("INTRANET_GROUP_IDS")?,
            unit_ids: parse_id_list("INTRANET_UNIT_IDS")?,
        })
    }
}

impl LogsConfig {
    const DEFAULT_PAGE_SIZE: i64 = 10;

    pub fn from_env() -> Result<Self, String> {
        let page_size = env::var("INTRANET_LOGS_PAGE_SIZE")
            .unwrap_or_else(|_| Self::DEFAULT_PAGE_SIZE.to_string())
            .parse::<i64>()
            .map_err(|_| "INTRANET_LOGS_PAGE_SIZE must be a valid number".to_string())?;

        Ok(Self { page_size })
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Parse a comma-separated list of ids from an environment variable
fn parse_id_list(var: &str) -> Result<Vec<i64>, String> {
    let raw = env::var(var).unwrap_or_default();
    split_ids(&raw).map_err(|e| format!("{} must be a comma-separated list of ids: {}", var, e))
}

fn split_ids(raw: &str) -> Result<Vec<i64>, std::num::ParseIntError> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<i64>())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_ids() {
        assert_eq!(split_ids("").unwrap(), Vec::<i64>::new());
        assert_eq!(split_ids("1, 2,3 ,").unwrap(), vec![1, 2, 3]);
        assert!(split_ids("1,x").is_err());
    }

    #[test]
    fn test_editor_defaults() {
        let editor = EditorConfig::default();
        assert_eq!(editor.hover_dwell, Duration::from_millis(500));
        assert_eq!(editor.unnest_threshold_px, 36.0);
    }
}
