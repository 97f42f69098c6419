use {
    crate::{
        error::{ProviderError, RelayError},
        guards::RequestOrigin,
        payment::CheckoutParams,
        response::Response,
        state::Relay,
    },
    rocket::{http::Status, serde::json::Json},
    shared::payment::{CheckoutCreated, CreateCheckoutRequest, ErrorBody},
};

#[rocket::post("/create-checkout-session", data = "<body>")]
pub async fn create_checkout_session(
    body: Option<Json<CreateCheckoutRequest>>,
    origin: RequestOrigin,
    relay: &rocket::State<Relay>,
) -> Response {
    let id = uuid::Uuid::new_v4();
    let start_timer = std::time::Instant::now();

    // Only a body that is not json at all ends up here without its price
    let request = body.map(Json::into_inner).unwrap_or_default();

    let response = match create(id, request, &origin, relay).await {
        Ok(response) => response,
        Err(RelayError::Provider(e)) => provider_failure(id, e),
        Err(e) => super::report(id, e),
    };

    debug!(
        "[{id}] Checkout creation answered {} in {}",
        response.status(),
        time::format(start_timer.elapsed(), 2)
    );

    response
}

/// The checkout page shows the provider's own status next to its message
fn provider_failure(id: uuid::Uuid, error: ProviderError) -> Response {
    error!("[{id}] Relay call failed: {error}");

    Response::json(
        Status::InternalServerError,
        &ErrorBody {
            error: error.to_string(),
            status_code: Some(error.status()),
        },
    )
}

async fn create(
    id: uuid::Uuid,
    request: CreateCheckoutRequest,
    origin: &RequestOrigin,
    relay: &Relay,
) -> Result<Response, RelayError> {
    let Some(price_id) = request.price_id.clone().filter(|price| !price.trim().is_empty()) else {
        return Err(RelayError::missing("Missing priceId"));
    };
    super::checked_identifier(&price_id, "priceId")?;

    let mode = request
        .checkout_mode()
        .map_err(|mode| RelayError::InvalidInput(format!("Invalid mode: {mode}")))?;

    let params = CheckoutParams::new(
        price_id,
        mode,
        request.email,
        origin.as_str(),
        relay.config.allowed_countries.clone(),
    );

    trace!(
        "[{id}] Opening a {} checkout for {} from {origin}",
        params.mode.as_str(),
        params.price_id
    );

    let session = relay.provider.create_checkout_session(&params).await?;

    let Some(url) = session.url else {
        return Err(ProviderError::Decode(format!("checkout session {} has no url", session.id)).into());
    };

    info!("[{id}] Created checkout session {}", session.id);

    if request.redirect_to_checkout {
        return Ok(Response::redirect(&url, Status::SeeOther));
    }

    Ok(Response::json(
        Status::Ok,
        &CheckoutCreated {
            session_id: session.id,
            url,
        },
    ))
}

#[cfg(test)]
mod tests {
    use {
        crate::testing::{client, FakeNotifier, FakeProvider},
        rocket::http::{ContentType, Header, Status},
        serde_json::{json, Value},
        shared::payment::CheckoutMode,
    };

    #[rocket::async_test]
    async fn missing_price_is_rejected_before_the_provider() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        for body in ["{}", r#"{"priceId":""}"#, "not json"] {
            let response = client
                .post("/api/create-checkout-session")
                .header(ContentType::JSON)
                .body(body)
                .dispatch()
                .await;

            assert_eq!(response.status(), Status::BadRequest);
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body, json!({ "error": "Missing priceId" }));
        }

        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn loose_fields_keep_the_price() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        for body in [
            r#"{"priceId":"price_123","mode":null}"#,
            r#"{"priceId":"price_123","redirectToCheckout":null}"#,
            r#"{"priceId":"price_123","email":null,"redirectToCheckout":"no"}"#,
        ] {
            let response = client
                .post("/api/create-checkout-session")
                .header(ContentType::JSON)
                .body(body)
                .dispatch()
                .await;

            assert_eq!(response.status(), Status::Ok, "{body}");
            let params = provider.last_checkout().unwrap();
            assert_eq!(params.price_id, "price_123");
            assert_eq!(params.mode, CheckoutMode::Subscription);
        }

        assert_eq!(provider.calls().len(), 3);
    }

    #[rocket::async_test]
    async fn unknown_mode_is_rejected_before_the_provider() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        for (body, error) in [
            (r#"{"priceId":"price_123","mode":"setup"}"#, "Invalid mode: setup"),
            (r#"{"priceId":"price_123","mode":4}"#, "Invalid mode: 4"),
        ] {
            let response = client
                .post("/api/create-checkout-session")
                .header(ContentType::JSON)
                .body(body)
                .dispatch()
                .await;

            assert_eq!(response.status(), Status::BadRequest);
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body, json!({ "error": error }));
        }

        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn creates_a_session() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .post("/api/create-checkout-session")
            .header(ContentType::JSON)
            .header(Header::new("Origin", "https://pdfville.com"))
            .body(r#"{"priceId":"price_123","mode":"payment","email":"a@b.com"}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["sessionId"], "cs_test_123");
        assert_eq!(body["url"], "https://checkout.test/cs_test_123");

        let params = provider.last_checkout().unwrap();
        assert_eq!(params.price_id, "price_123");
        assert_eq!(params.email.as_deref(), Some("a@b.com"));
        assert_eq!(params.cancel_url, "https://pdfville.com/?canceled=true");
        assert_eq!(
            params.success_url,
            "https://pdfville.com/success?session_id={CHECKOUT_SESSION_ID}"
        );
    }

    #[rocket::async_test]
    async fn redirects_when_asked() {
        let client = client(FakeProvider::default(), FakeNotifier::default()).await;

        let response = client
            .post("/api/create-checkout-session")
            .header(ContentType::JSON)
            .body(r#"{"priceId":"price_123","redirectToCheckout":true}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::SeeOther);
        assert_eq!(
            response.headers().get_one("Location"),
            Some("https://checkout.test/cs_test_123")
        );
    }

    #[rocket::async_test]
    async fn provider_errors_carry_their_status() {
        let client = client(FakeProvider::failing(402, "Your card was declined"), FakeNotifier::default()).await;

        let response = client
            .post("/api/create-checkout-session")
            .header(ContentType::JSON)
            .body(r#"{"priceId":"price_123"}"#)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::InternalServerError);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(
            body,
            json!({ "error": "Your card was declined", "statusCode": 402 })
        );
    }
}
