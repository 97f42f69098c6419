/// Payment relay settings, read from the `payment` table of Rocket.toml
///
/// The usual provider env vars win over the file so secrets never have to be written down
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PaymentConfig {
    #[serde(default)]
    pub secret_key: String,
    #[serde(default)]
    pub webhook_secret: String,
    #[serde(default = "default_backend_url")]
    pub backend_url: String,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_allowed_countries")]
    pub allowed_countries: Vec<String>,
    #[serde(default = "default_signature_tolerance_s")]
    pub signature_tolerance_s: u64,
}

fn default_backend_url() -> String {
    String::from("http://localhost:5000")
}

fn default_api_base() -> String {
    String::from("https://api.stripe.com")
}

fn default_allowed_countries() -> Vec<String> {
    [
        "US", "CA", "GB", "AU", "DE", "FR", "ES", "IT", "NL", "SE", "DK", "NO", "FI",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_signature_tolerance_s() -> u64 {
    300
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            secret_key: String::new(),
            webhook_secret: String::new(),
            backend_url: default_backend_url(),
            api_base: default_api_base(),
            allowed_countries: default_allowed_countries(),
            signature_tolerance_s: default_signature_tolerance_s(),
        }
    }
}

impl PaymentConfig {
    pub fn from_figment(figment: &rocket::figment::Figment) -> Self {
        let mut config = match figment.extract_inner::<Self>("payment") {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not read the payment config, using defaults: {e}");
                Self::default()
            }
        };

        config.apply_env(|key| std::env::var(key).ok());
        config.check();
        config
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(secret_key) = non_empty("STRIPE_SECRET_KEY") {
            self.secret_key = secret_key;
        }
        if let Some(webhook_secret) = non_empty("STRIPE_WEBHOOK_SECRET") {
            self.webhook_secret = webhook_secret;
        }
        if let Some(backend_url) = non_empty("BACKEND_URL").or_else(|| non_empty("NEXT_PUBLIC_BACKEND_URL")) {
            self.backend_url = backend_url;
        }
    }

    fn check(&self) {
        if self.secret_key.is_empty() {
            warn!("No payment secret key configured, every provider call will fail");
        }
        if self.webhook_secret.is_empty() {
            warn!("No webhook secret configured, every webhook delivery will be rejected");
        }
    }

    pub fn backend_url(&self) -> &str {
        self.backend_url.trim_end_matches('/')
    }

    pub fn api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use {super::PaymentConfig, rocket::figment::{providers::Serialized, Figment}};

    #[test]
    fn reads_payment_table_with_defaults() {
        let figment = Figment::new().merge(Serialized::default(
            "payment",
            serde_json::json!({
                "secret_key": "sk_test",
                "backend_url": "https://backend.example/",
            }),
        ));

        let config = figment.extract_inner::<PaymentConfig>("payment").unwrap();

        assert_eq!(config.secret_key, "sk_test");
        assert_eq!(config.backend_url(), "https://backend.example");
        assert_eq!(config.api_base(), "https://api.stripe.com");
        assert_eq!(config.signature_tolerance_s, 300);
        assert_eq!(config.allowed_countries.len(), 13);
    }

    #[test]
    fn env_overrides_file() {
        let mut config = PaymentConfig {
            secret_key: String::from("from_file"),
            ..Default::default()
        };

        config.apply_env(|key| match key {
            "STRIPE_SECRET_KEY" => Some(String::from("from_env")),
            "STRIPE_WEBHOOK_SECRET" => Some(String::from("  ")),
            "NEXT_PUBLIC_BACKEND_URL" => Some(String::from("https://api.example")),
            _ => None,
        });

        assert_eq!(config.secret_key, "from_env");
        assert_eq!(config.webhook_secret, "");
        assert_eq!(config.backend_url, "https://api.example");
    }
}
