#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Could not reach the payment provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected payment provider response: {0}")]
    Decode(String),
}

impl ProviderError {
    /// Status reported by the provider, 500 when it never answered
    pub fn status(&self) -> u16 {
        match self {
            ProviderError::Api { status, .. } => *status,
            ProviderError::Transport(e) => e.status().map(|s| s.as_u16()).unwrap_or(500),
            ProviderError::Decode(_) => 500,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Invalid action")]
    UnknownAction,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RelayError {
    pub fn missing(what: &str) -> Self {
        Self::InvalidInput(what.to_string())
    }

    pub fn status(&self) -> rocket::http::Status {
        use rocket::http::Status;

        match self {
            RelayError::InvalidInput(_) | RelayError::UnknownAction | RelayError::Signature(_) => {
                Status::BadRequest
            }
            RelayError::Provider(_) | RelayError::Internal(_) => Status::InternalServerError,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("No stripe-signature header value was provided")]
    MissingHeader,

    #[error("Unable to extract timestamp and signatures from header")]
    Malformed,

    #[error("No signatures found matching the expected signature for payload")]
    NoMatch,

    #[error("Timestamp outside the tolerance zone")]
    Expired,

    #[error("The webhook secret is not configured")]
    NoSecret,
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Could not reach the backend: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("The backend answered with status {0}")]
    Status(u16),
}
