use crate::error::FetchError;

/// Result of a single upstream fetch.
///
/// Keeps apart the three cases the compatibility entry points fold together:
/// data came back, the upstream answered with nothing, or the call failed.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Fetched(T),
    Empty,
    Failed(FetchError),
}

impl<T> FetchOutcome<T> {
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Failed(e) => Some(e),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchOutcome<U> {
        match self {
            Self::Fetched(t) => FetchOutcome::Fetched(f(t)),
            Self::Empty => FetchOutcome::Empty,
            Self::Failed(e) => FetchOutcome::Failed(e),
        }
    }
}

impl<T: Default> FetchOutcome<T> {
    /// Collapse into the legacy shape: decode failures become an empty
    /// result, transport failures are still returned as errors.
    pub fn into_compat(self) -> Result<T, FetchError> {
        match self {
            Self::Fetched(t) => Ok(t),
            Self::Empty => Ok(T::default()),
            Self::Failed(e) if e.is_transport() => Err(e),
            Self::Failed(_) => Ok(T::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn unavailable() -> FetchError {
        FetchError::Status {
            url: "https://api.boardgameatlas.com/api/search".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    #[test]
    fn test_into_compat() {
        assert_eq!(FetchOutcome::Fetched(vec![1]).into_compat().unwrap(), vec![1]);
        assert!(FetchOutcome::<Vec<i32>>::Empty.into_compat().unwrap().is_empty());

        let decode = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let outcome = FetchOutcome::<Vec<i32>>::Failed(decode.into());
        assert!(outcome.into_compat().unwrap().is_empty());

        let outcome = FetchOutcome::<Vec<i32>>::Failed(FetchError::MissingField("games"));
        assert!(outcome.into_compat().unwrap().is_empty());

        let outcome = FetchOutcome::<Vec<i32>>::Failed(unavailable());
        assert!(outcome.into_compat().unwrap_err().is_transport());
    }

    #[test]
    fn test_map_keeps_tag() {
        assert!(matches!(
            FetchOutcome::Fetched(2).map(|n| n * 2),
            FetchOutcome::Fetched(4)
        ));
        assert!(matches!(
            FetchOutcome::<i32>::Empty.map(|n| n * 2),
            FetchOutcome::Empty
        ));

        let failed = FetchOutcome::<i32>::Failed(unavailable()).map(|n| n * 2);
        assert_eq!(failed.error().map(FetchError::as_str), Some("HTTP_STATUS_ERROR"));
    }
}
