use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}")]
    Status { url: String, status: StatusCode },

    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("required field `{0}` is missing")]
    MissingField(&'static str),

    #[error("field `{field}` has an unexpected shape, expected {expected}")]
    Shape {
        field: &'static str,
        expected: &'static str,
    },
}

impl FetchError {
    /// Network and HTTP failures, as opposed to problems with the body.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Status { .. })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Status { .. } => "HTTP_STATUS_ERROR",
            Self::Decode(_) => "DECODE_ERROR",
            Self::MissingField(_) => "MISSING_FIELD",
            Self::Shape { .. } => "UNEXPECTED_SHAPE",
        }
    }
}
