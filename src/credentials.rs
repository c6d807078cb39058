use std::fmt;

/// Supplies the client id the upstream API expects on every request.
pub trait CredentialProvider: Send + Sync {
    fn client_id(&self) -> &str;
}

#[derive(Clone)]
pub struct Secrets {
    client_id: String,
}

impl Secrets {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
        }
    }
}

impl CredentialProvider for Secrets {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl fmt::Debug for Secrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Secrets")
            .field("client_id", &"<redacted>")
            .finish()
    }
}
