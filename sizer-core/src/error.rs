use thiserror::Error;

/// Errors surfaced by the sizing core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("search index is not ready: catalog still loading")]
    IndexNotReady,

    #[error("catalog error: {0}")]
    Catalog(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_not_ready_display() {
        let display = format!("{}", Error::IndexNotReady);
        assert!(display.contains("not ready"));
    }

    #[test]
    fn catalog_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Catalog(_)));
        assert!(error.to_string().starts_with("catalog error"));
    }
}
