/*
    Everything that talks to the payment provider lives here:
    - stripe: the http client, one method per provider call the relay needs
    - signature: webhook signature verification
    - event: the part of a webhook event we read

    Handlers only see the PaymentProvider trait so tests can swap the real client out.
*/

mod event;
pub mod signature;
mod stripe;

pub use event::Event;
pub use stripe::{CheckoutParams, CheckoutSession, PortalSession, StripeClient};

use {crate::error::ProviderError, serde_json::Value, shared::payment::CheckoutSessionSummary};

pub const CHECKOUT_COMPLETED: &str = "checkout.session.completed";

#[async_trait::async_trait]
pub trait PaymentProvider: Send + Sync {
    async fn create_checkout_session(
        &self,
        params: &CheckoutParams,
    ) -> Result<CheckoutSession, ProviderError>;

    async fn retrieve_checkout_session(
        &self,
        session_id: &str,
    ) -> Result<CheckoutSessionSummary, ProviderError>;

    async fn create_portal_session(
        &self,
        customer_id: &str,
        return_url: &str,
    ) -> Result<PortalSession, ProviderError>;

    /// Returns the updated subscription object as the provider sent it
    async fn set_cancel_at_period_end(
        &self,
        subscription_id: &str,
        cancel: bool,
    ) -> Result<Value, ProviderError>;

    async fn retrieve_subscription(&self, subscription_id: &str) -> Result<Value, ProviderError>;
}
