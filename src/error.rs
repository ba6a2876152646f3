// src/error.rs
use thiserror::Error;

/// Every failure the scraper can report.
///
/// Catalog-level variants (`Fetch`, `CatalogFormat`, `NavigationTimeout`) are
/// fatal for a run. `SessionCrashed` and `Page` are contained to a single
/// train by the harvest loop.
#[derive(Error, Debug)]
pub enum HarvestError {
    #[error("fetching {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected catalog format: {0}")]
    CatalogFormat(String),

    #[error("timed out waiting for {selector:?}")]
    NavigationTimeout { selector: String },

    #[error("browser session is gone: {0}")]
    SessionCrashed(String),

    #[error("page error: {0}")]
    Page(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Csv(#[from] ::csv::Error),
}

impl HarvestError {
    /// True when the browser behind the driver can no longer be used and the
    /// session has to be rebuilt before the next lookup.
    pub fn is_session_lost(&self) -> bool {
        matches!(self, HarvestError::SessionCrashed(_))
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, HarvestError::NavigationTimeout { .. })
    }
}

pub type Result<T, E = HarvestError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_session_crash_counts_as_lost() {
        assert!(HarvestError::SessionCrashed(s!("closed")).is_session_lost());
        assert!(!HarvestError::Page(s!("stale element")).is_session_lost());
        assert!(!HarvestError::NavigationTimeout { selector: s!("table") }.is_session_lost());
    }

    #[test]
    fn timeout_message_names_selector() {
        let e = HarvestError::NavigationTimeout { selector: s!("input[name='trainNo']") };
        assert!(e.is_timeout());
        assert!(e.to_string().contains("trainNo"));
    }
}
