/// Why a catalog could not be loaded.
///
/// Cloneable so one memoized failure can be handed to every caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The request failed, or the server answered with a non-success status.
    #[error("Network error: {message}")]
    Network { status: Option<u16>, message: String },

    /// The body is not JSON, or not a JSON array.
    #[error("Format error: {0}")]
    Format(String),
}

impl LoadError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network {
            status: None,
            message: msg.into(),
        }
    }

    pub fn http_status(status: u16, location: &str) -> Self {
        Self::Network {
            status: Some(status),
            message: format!("HTTP {status} from {location}"),
        }
    }

    pub fn format(msg: impl Into<String>) -> Self {
        Self::Format(msg.into())
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// HTTP status, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Network { status, .. } => *status,
            Self::Format(_) => None,
        }
    }
}
