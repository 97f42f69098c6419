//! Bodies exchanged between the app and the payment relay
//!
//! Field names follow what the browser sends (camelCase) and what the relay echoes
//! back from the provider (snake_case).

use serde_json::Value;

/// A field of the wrong type reads as missing instead of failing the whole body
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    let value = <Value as serde::Deserialize>::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: serde::de::DeserializeOwned + Default,
{
    Ok(lenient(deserializer)?.unwrap_or_default())
}

/// Keeps whatever was sent as text so an odd value can be reported back, null reads as missing
fn as_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match <Value as serde::Deserialize>::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckoutMode {
    Payment,
    #[default]
    Subscription,
}

impl CheckoutMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckoutMode::Payment => "payment",
            CheckoutMode::Subscription => "subscription",
        }
    }
}

impl std::str::FromStr for CheckoutMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "payment" => Ok(CheckoutMode::Payment),
            "subscription" => Ok(CheckoutMode::Subscription),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCheckoutRequest {
    #[serde(default, deserialize_with = "lenient")]
    pub price_id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Missing means subscription, anything else than the known modes is refused by the relay
    #[serde(default, deserialize_with = "as_text", skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub redirect_to_checkout: bool,
}

impl CreateCheckoutRequest {
    /// `Err` holds the mode as it was sent
    pub fn checkout_mode(&self) -> Result<CheckoutMode, &str> {
        match self.mode.as_deref() {
            None => Ok(CheckoutMode::default()),
            Some(mode) => mode.parse().map_err(|()| mode),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutCreated {
    pub session_id: String,
    pub url: String,
}

/// What the success page gets to know about a finished checkout
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CheckoutSessionSummary {
    pub id: String,
    #[serde(default)]
    pub amount_total: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub customer_details: Option<Value>,
    #[serde(default)]
    pub payment_method_types: Vec<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub subscription: Option<Value>,
}

impl CheckoutSessionSummary {
    pub fn customer_email(&self) -> Option<&str> {
        self.customer_details
            .as_ref()
            .and_then(|details| details.get("email"))
            .and_then(Value::as_str)
    }

    /// "12.34 EUR"
    pub fn formatted_amount(&self) -> Option<String> {
        let amount = self.amount_total?;
        let currency = self.currency.as_deref().unwrap_or_default().to_uppercase();
        let sign = if amount < 0 { "-" } else { "" };
        let amount = amount.unsigned_abs();
        Some(format!("{sign}{}.{:02} {currency}", amount / 100, amount % 100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionAction {
    CreatePortal,
    CancelSubscription,
    ReactivateSubscription,
    GetSubscription,
}

impl SubscriptionAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubscriptionAction::CreatePortal => "create_portal",
            SubscriptionAction::CancelSubscription => "cancel_subscription",
            SubscriptionAction::ReactivateSubscription => "reactivate_subscription",
            SubscriptionAction::GetSubscription => "get_subscription",
        }
    }
}

impl std::str::FromStr for SubscriptionAction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_portal" => Ok(SubscriptionAction::CreatePortal),
            "cancel_subscription" => Ok(SubscriptionAction::CancelSubscription),
            "reactivate_subscription" => Ok(SubscriptionAction::ReactivateSubscription),
            "get_subscription" => Ok(SubscriptionAction::GetSubscription),
            _ => Err(()),
        }
    }
}

/// The action stays a plain string so an unknown one can be told apart from a malformed body
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManageSubscriptionRequest {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PortalCreated {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SubscriptionReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub subscription: Value,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UpgradeUser {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WebhookAck {
    pub received: bool,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(
        default,
        rename = "statusCode",
        skip_serializing_if = "Option::is_none"
    )]
    pub status_code: Option<u16>,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            status_code: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{
            CheckoutMode, CheckoutSessionSummary, CreateCheckoutRequest, ErrorBody,
            ManageSubscriptionRequest, UpgradeUser,
        },
        pretty_assertions::assert_eq,
        rstest::rstest,
        serde_json::json,
    };

    #[test]
    fn checkout_request_defaults() {
        let request: CreateCheckoutRequest = serde_json::from_value(json!({ "priceId": "price_1" })).unwrap();

        assert_eq!(request.price_id.as_deref(), Some("price_1"));
        assert_eq!(request.checkout_mode(), Ok(CheckoutMode::Subscription));
        assert!(!request.redirect_to_checkout);
        assert_eq!(request.email, None);

        let empty: CreateCheckoutRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.price_id, None);
    }

    #[test]
    fn error_body_status_code_is_optional() {
        assert_eq!(
            serde_json::to_value(ErrorBody::new("Missing priceId")).unwrap(),
            json!({ "error": "Missing priceId" })
        );
    }

    #[test]
    fn summary_helpers() {
        let summary = CheckoutSessionSummary {
            id: String::from("cs_test"),
            amount_total: Some(1299),
            currency: Some(String::from("usd")),
            customer_details: Some(json!({ "email": "a@b.com" })),
            ..Default::default()
        };

        assert_eq!(summary.formatted_amount().as_deref(), Some("12.99 USD"));
        assert_eq!(summary.customer_email(), Some("a@b.com"));
    }

    #[rstest]
    #[case(json!({ "priceId": "price_1", "mode": null }), Ok(CheckoutMode::Subscription), false)]
    #[case(json!({ "priceId": "price_1", "mode": "payment", "redirectToCheckout": null }), Ok(CheckoutMode::Payment), false)]
    #[case(json!({ "priceId": "price_1", "mode": "setup", "redirectToCheckout": true }), Err("setup"), true)]
    #[case(json!({ "priceId": "price_1", "mode": 3, "redirectToCheckout": "yes" }), Err("3"), false)]
    fn checkout_request_keeps_the_price(
        #[case] body: serde_json::Value,
        #[case] mode: Result<CheckoutMode, &str>,
        #[case] redirect: bool,
    ) {
        let request: CreateCheckoutRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.price_id.as_deref(), Some("price_1"));
        assert_eq!(request.checkout_mode(), mode);
        assert_eq!(request.redirect_to_checkout, redirect);
    }

    #[test]
    fn mistyped_subscription_fields_read_as_missing() {
        let request: ManageSubscriptionRequest = serde_json::from_value(json!({
            "action": "cancel_subscription",
            "subscriptionId": 123,
            "customerId": null,
        }))
        .unwrap();

        assert_eq!(request.action, "cancel_subscription");
        assert_eq!(request.subscription_id, None);
        assert_eq!(request.customer_id, None);

        let request: ManageSubscriptionRequest = serde_json::from_value(json!({ "action": 7 })).unwrap();
        assert_eq!(request.action, "");
    }

    #[test]
    fn upgrade_user_wire_body() {
        assert_eq!(
            serde_json::to_value(UpgradeUser {
                email: String::from("a@b.com"),
            })
            .unwrap(),
            json!({ "email": "a@b.com" })
        );
    }

    #[rstest]
    #[case(1299, "12.99 USD")]
    #[case(5, "0.05 USD")]
    #[case(-5, "-0.05 USD")]
    #[case(-1299, "-12.99 USD")]
    fn formatted_amount_keeps_the_sign(#[case] amount: i64, #[case] expected: &str) {
        let summary = CheckoutSessionSummary {
            amount_total: Some(amount),
            currency: Some(String::from("usd")),
            ..Default::default()
        };

        assert_eq!(summary.formatted_amount().as_deref(), Some(expected));
    }
}
