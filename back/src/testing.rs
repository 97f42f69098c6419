//! Recording stand-ins for the payment provider and the user backend

use {
    crate::{
        config::PaymentConfig,
        error::{NotifyError, ProviderError},
        notify::UpgradeNotifier,
        payment::{CheckoutParams, CheckoutSession, PaymentProvider, PortalSession},
        state::Relay,
    },
    rocket::local::asynchronous::Client,
    serde_json::{json, Value},
    shared::payment::CheckoutSessionSummary,
    std::sync::{Arc, Mutex},
};

pub const WEBHOOK_SECRET: &str = "whsec_test_secret";

#[derive(Clone, Default)]
pub struct FakeProvider {
    calls: Arc<Mutex<Vec<String>>>,
    checkouts: Arc<Mutex<Vec<CheckoutParams>>>,
    failure: Option<(u16, String)>,
}

impl FakeProvider {
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_checkout(&self) -> Option<CheckoutParams> {
        self.checkouts.lock().unwrap().last().cloned()
    }

    fn record(&self, call: String) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(call);

        match &self.failure {
            Some((status, message)) => Err(ProviderError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

#[async_trait::async_trait]
impl PaymentProvider for FakeProvider {
    async fn create_checkout_session(
        &self,
        params: &CheckoutParams,
    ) -> Result<CheckoutSession, ProviderError> {
        self.checkouts.lock().unwrap().push(params.clone());
        self.record(format!("create_checkout_session {}", params.price_id))?;

        Ok(CheckoutSession {
            id: String::from("cs_test_123"),
            url: Some(String::from("https://checkout.test/cs_test_123")),
        })
    }

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionSummary, ProviderError> {
        self.record(format!("retrieve_checkout_session {session_id}"))?;

        Ok(CheckoutSessionSummary {
            id: session_id.to_string(),
            amount_total: Some(999),
            currency: Some(String::from("usd")),
            payment_status: Some(String::from("paid")),
            payment_method_types: vec![String::from("card")],
            ..Default::default()
        })
    }

    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError> {
        self.record(format!("create_portal_session {customer_id} {return_url}"))?;

        Ok(PortalSession {
            url: format!("https://billing.test/{customer_id}"),
        })
    }

    async fn set_cancel_at_period_end(
        &self,
        subscription_id: &str,
        cancel: bool,
    ) -> Result<Value, ProviderError> {
        self.record(format!("set_cancel_at_period_end {subscription_id} {cancel}"))?;

        Ok(json!({ "id": subscription_id, "cancel_at_period_end": cancel }))
    }

    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Value, ProviderError> {
        self.record(format!("retrieve_subscription {subscription_id}"))?;

        Ok(json!({ "id": subscription_id, "status": "active" }))
    }
}

#[derive(Clone, Default)]
pub struct FakeNotifier {
    emails: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl FakeNotifier {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn emails(&self) -> Vec<String> {
        self.emails.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl UpgradeNotifier for FakeNotifier {
    async fn upgrade_user(&self, email: &str) -> Result<(), NotifyError> {
        self.emails.lock().unwrap().push(email.to_string());

        if self.fail {
            return Err(NotifyError::Status(503));
        }
        Ok(())
    }
}

pub async fn client(provider: FakeProvider, notifier: FakeNotifier) -> Client {
    let relay = Relay {
        provider: Arc::new(provider),
        notifier: Arc::new(notifier),
        config: PaymentConfig {
            webhook_secret: WEBHOOK_SECRET.to_string(),
            ..Default::default()
        },
    };

    let rocket = crate::build_rocket_with(rocket::Config::figment(), relay)
        .await
        .expect("valid rocket instance");

    Client::tracked(rocket).await.expect("valid rocket instance")
}
