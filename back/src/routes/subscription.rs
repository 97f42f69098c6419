use {
    crate::{error::RelayError, guards::RequestOrigin, response::Response, state::Relay},
    rocket::{http::Status, serde::json::Json},
    shared::payment::{ManageSubscriptionRequest, PortalCreated, SubscriptionAction, SubscriptionReply},
};

#[rocket::post("/manage-subscription", data = "<body>")]
pub async fn manage_subscription(
    body: Option<Json<ManageSubscriptionRequest>>,
    origin: RequestOrigin,
    relay: &rocket::State<Relay>,
) -> Response {
    let id = uuid::Uuid::new_v4();
    let start_timer = std::time::Instant::now();

    // An unreadable body has no action, which is an invalid one
    let request = body.map(Json::into_inner).unwrap_or_default();

    let response = match manage(id, request, &origin, relay).await {
        Ok(response) => response,
        Err(e) => super::report(id, e),
    };

    debug!(
        "[{id}] Subscription management answered {} in {}",
        response.status(),
        time::format(start_timer.elapsed(), 2)
    );

    response
}

fn required<'a>(value: &'a Option<String>, what: &str) -> Result<&'a str, RelayError> {
    let Some(value) = value.as_deref().filter(|value| !value.is_empty()) else {
        return Err(RelayError::InvalidInput(format!("{what} is required")));
    };

    super::checked_identifier(value, what)
}

async fn manage(
    id: uuid::Uuid,
    request: ManageSubscriptionRequest,
    origin: &RequestOrigin,
    relay: &Relay,
) -> Result<Response, RelayError> {
    let action = request
        .action
        .parse::<SubscriptionAction>()
        .map_err(|()| RelayError::UnknownAction)?;

    trace!("[{id}] Subscription action: {}", action.as_str());

    match action {
        SubscriptionAction::CreatePortal => {
            let customer_id = required(&request.customer_id, "Customer ID")?;

            let portal = relay
                .provider
                .create_portal_session(customer_id, &format!("{origin}/dashboard"))
                .await?;

            info!("[{id}] Opened a billing portal for {customer_id}");

            Ok(Response::json(Status::Ok, &PortalCreated { url: portal.url }))
        }
        SubscriptionAction::CancelSubscription | SubscriptionAction::ReactivateSubscription => {
            let subscription_id = required(&request.subscription_id, "Subscription ID")?;
            let cancel = action == SubscriptionAction::CancelSubscription;

            let subscription = relay
                .provider
                .set_cancel_at_period_end(subscription_id, cancel)
                .await?;

            let message = if cancel {
                "Subscription will be cancelled at the end of the billing period"
            } else {
                "Subscription reactivated"
            };

            info!("[{id}] {subscription_id}: {message}");

            Ok(Response::json(
                Status::Ok,
                &SubscriptionReply {
                    message: Some(message.to_string()),
                    subscription,
                },
            ))
        }
        SubscriptionAction::GetSubscription => {
            let subscription_id = required(&request.subscription_id, "Subscription ID")?;

            let subscription = relay.provider.retrieve_subscription(subscription_id).await?;

            Ok(Response::json(
                Status::Ok,
                &SubscriptionReply {
                    message: None,
                    subscription,
                },
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::testing::{client, FakeNotifier, FakeProvider},
        rocket::http::{ContentType, Header, Status},
        serde_json::{json, Value},
    };

    #[rocket::async_test]
    async fn unknown_action_never_reaches_the_provider() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        for body in [r#"{"action":"delete_everything","subscriptionId":"sub_1"}"#, "{}", "garbage"] {
            let response = client
                .post("/api/manage-subscription")
                .header(ContentType::JSON)
                .body(body)
                .dispatch()
                .await;

            assert_eq!(response.status(), Status::BadRequest);
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body, json!({ "error": "Invalid action" }));
        }

        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn portal_returns_to_the_dashboard() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .header(Header::new("Origin", "https://pdfville.com"))
            .body(r#"{"action":"create_portal","customerId":"cus_42"}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "url": "https://billing.test/cus_42" }));
        assert_eq!(
            provider.calls(),
            vec![String::from("create_portal_session cus_42 https://pdfville.com/dashboard")]
        );
    }

    #[rocket::async_test]
    async fn cancel_and_reactivate() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"cancel_subscription","subscriptionId":"sub_7"}"#)
            .dispatch()
            .await;
        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(
            body["message"],
            "Subscription will be cancelled at the end of the billing period"
        );
        assert_eq!(body["subscription"]["cancel_at_period_end"], true);

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"reactivate_subscription","subscriptionId":"sub_7"}"#)
            .dispatch()
            .await;
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["message"], "Subscription reactivated");
        assert_eq!(body["subscription"]["cancel_at_period_end"], false);

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"get_subscription","subscriptionId":"sub_7"}"#)
            .dispatch()
            .await;
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body.get("message"), None);
        assert_eq!(body["subscription"]["id"], "sub_7");
    }

    #[rocket::async_test]
    async fn known_action_without_identifier() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"cancel_subscription"}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "error": "Subscription ID is required" }));
        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn mistyped_identifier_is_not_an_invalid_action() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"get_subscription","subscriptionId":123}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "error": "Subscription ID is required" }));
        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn provider_errors_only_carry_the_message() {
        let client = client(FakeProvider::failing(404, "No such subscription"), FakeNotifier::default()).await;

        let response = client
            .post("/api/manage-subscription")
            .header(ContentType::JSON)
            .body(r#"{"action":"get_subscription","subscriptionId":"sub_7"}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::InternalServerError);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "error": "No such subscription" }));
    }
}
