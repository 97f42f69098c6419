use {
    crate::error::ProviderError,
    serde_json::Value,
    shared::payment::{CheckoutMode, CheckoutSessionSummary},
};

/// Everything needed to open a hosted checkout
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutParams {
    pub price_id: String,
    pub mode: CheckoutMode,
    pub email: Option<String>,
    pub success_url: String,
    pub cancel_url: String,
    pub allowed_countries: Vec<String>,
}

impl CheckoutParams {
    /// Urls are built from the origin of the page that asked for the checkout
    pub fn new(
        price_id: String,
        mode: CheckoutMode,
        email: Option<String>,
        origin: &str,
        allowed_countries: Vec<String>,
    ) -> Self {
        let cancel_url = match mode {
            CheckoutMode::Payment => format!("{origin}/?canceled=true"),
            CheckoutMode::Subscription => format!("{origin}/pricing"),
        };

        Self {
            price_id,
            mode,
            email: email.filter(|email| !email.trim().is_empty()),
            success_url: format!("{origin}/success?session_id={{CHECKOUT_SESSION_ID}}"),
            cancel_url,
            allowed_countries,
        }
    }

    /// Form encoded body, the provider wants nested fields flattened with brackets
    pub fn form(&self) -> Vec<(String, String)> {
        let mut form = vec![
            ("payment_method_types[0]".to_string(), "card".to_string()),
            ("line_items[0][price]".to_string(), self.price_id.clone()),
            ("line_items[0][quantity]".to_string(), "1".to_string()),
            ("mode".to_string(), self.mode.as_str().to_string()),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
            (
                "billing_address_collection".to_string(),
                "required".to_string(),
            ),
        ];

        form.extend(self.allowed_countries.iter().enumerate().map(|(i, country)| {
            (
                format!("shipping_address_collection[allowed_countries][{i}]"),
                country.clone(),
            )
        }));

        if let Some(email) = &self.email {
            form.push(("customer_email".to_string(), email.clone()));
        }

        form
    }
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct CheckoutSession {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct PortalSession {
    pub url: String,
}

pub struct StripeClient {
    http: reqwest::Client,
    api_base: String,
    secret_key: String,
}

impl StripeClient {
    pub fn new(api_base: &str, secret_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            secret_key: secret_key.to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/v1{path}", self.api_base)
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<Value, ProviderError> {
        let response = request.bearer_auth(&self.secret_key).send().await?;

        let status = response.status();

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if !status.is_success() {
            let message = body
                .pointer("/error/message")
                .and_then(Value::as_str)
                .unwrap_or("Unknown payment provider error")
                .to_string();

            return Err(ProviderError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(body)
    }

    async fn send_as<T: serde::de::DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ProviderError> {
        let body = self.send(request).await?;

        serde_json::from_value(body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[async_trait::async_trait]
impl super::PaymentProvider for StripeClient {
    async fn create_checkout_session(
        &self,
        params: &CheckoutParams,
    ) -> Result<CheckoutSession, ProviderError> {
        let request = self
            .http
            .post(self.url("/checkout/sessions"))
            .form(&params.form());

        self.send_as(request).await
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionSummary, ProviderError> {
        let request = self
            .http
            .get(self.url(&format!("/checkout/sessions/{session_id}")));

        self.send_as(request).await
    }

    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError> {
        let request = self
            .http
            .post(self.url("/billing_portal/sessions"))
            .form(&[("customer", customer_id), ("return_url", return_url)]);

        self.send_as(request).await
    }

    async fn set_cancel_at_period_end(
        &self,
        subscription_id: &str,
        cancel: bool,
    ) -> Result<Value, ProviderError> {
        let request = self
            .http
            .post(self.url(&format!("/subscriptions/{subscription_id}")))
            .form(&[("cancel_at_period_end", if cancel { "true" } else { "false" })]);

        self.send(request).await
    }

    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Value, ProviderError> {
        let request = self
            .http
            .get(self.url(&format!("/subscriptions/{subscription_id}")));

        self.send(request).await
    }
}
