use crate::error::NotifyError;

/// Tells the user backend that someone paid
#[async_trait::async_trait]
pub trait UpgradeNotifier: Send + Sync {
    async fn upgrade_user(&self, email: &str) -> Result<(), NotifyError>;
}

/// `POST {backend}/upgrade-user` with `{ "email": ... }`
pub struct HttpUpgradeNotifier {
    http: reqwest::Client,
    backend_url: String,
}

impl HttpUpgradeNotifier {
    pub fn new(backend_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            backend_url: backend_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/upgrade-user", self.backend_url)
    }
}

#[async_trait::async_trait]
impl UpgradeNotifier for HttpUpgradeNotifier {
    async fn upgrade_user(&self, email: &str) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(self.endpoint())
            .json(&shared::payment::UpgradeUser {
                email: email.to_string(),
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        Ok(())
    }
}
