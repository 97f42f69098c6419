use {
    crate::{config::PaymentConfig, notify::UpgradeNotifier, payment::PaymentProvider},
    std::sync::Arc,
};

/// Shared by every relay handler, nothing in here is mutated after launch
pub struct Relay {
    pub provider: Arc<dyn PaymentProvider>,
    pub notifier: Arc<dyn UpgradeNotifier>,
    pub config: PaymentConfig,
}

impl Relay {
    pub fn from_config(config: PaymentConfig) -> Self {
        use crate::{notify::HttpUpgradeNotifier, payment::StripeClient};

        Self {
            provider: Arc::new(StripeClient::new(config.api_base(), &config.secret_key)),
            notifier: Arc::new(HttpUpgradeNotifier::new(config.backend_url())),
            config,
        }
    }
}
