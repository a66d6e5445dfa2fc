use serde::Deserialize;
use utoipa::IntoParams;

/// Default number of items per page.
const DEFAULT_ENTRIES: u64 = 10;

/// Query parameters for paginated listings.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParam {
    /// Zero-indexed page number (default: 0)
    #[serde(default)]
    pub page: u64,
    /// Items per page (default: 10, max: 100)
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    DEFAULT_ENTRIES
}
