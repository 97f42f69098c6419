use {
    crate::{error::RelayError, response::Response, state::Relay},
    rocket::http::Status,
};

#[rocket::get("/checkout-session?<session_id>")]
pub async fn checkout_session(session_id: Option<&str>, relay: &rocket::State<Relay>) -> Response {
    let id = uuid::Uuid::new_v4();
    let start_timer = std::time::Instant::now();

    let response = match retrieve(id, session_id, relay).await {
        Ok(response) => response,
        Err(e) => super::report(id, e),
    };

    debug!(
        "[{id}] Checkout lookup answered {} in {}",
        response.status(),
        time::format(start_timer.elapsed(), 2)
    );

    response
}

async fn retrieve(id: uuid::Uuid, session_id: Option<&str>, relay: &Relay) -> Result<Response, RelayError> {
    let Some(session_id) = session_id.filter(|session_id| !session_id.is_empty()) else {
        return Err(RelayError::missing("Session ID is required"));
    };
    let session_id = super::checked_identifier(session_id, "session id")?;

    trace!("[{id}] Looking up checkout session {session_id}");

    let summary = relay.provider.retrieve_checkout_session(session_id).await?;

    Ok(Response::json(Status::Ok, &summary))
}

#[cfg(test)]
mod tests {
    use {
        crate::testing::{client, FakeNotifier, FakeProvider},
        rocket::http::Status,
        serde_json::{json, Value},
    };

    #[rocket::async_test]
    async fn session_id_is_required() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        for uri in ["/api/checkout-session", "/api/checkout-session?session_id="] {
            let response = client.get(uri).dispatch().await;

            assert_eq!(response.status(), Status::BadRequest);
            let body: Value = response.into_json().await.unwrap();
            assert_eq!(body, json!({ "error": "Session ID is required" }));
        }

        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn returns_the_session() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .get("/api/checkout-session?session_id=cs_test_123")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body["id"], "cs_test_123");
        assert_eq!(body["payment_status"], "paid");
        assert_eq!(provider.calls(), vec![String::from("retrieve_checkout_session cs_test_123")]);
    }

    #[rocket::async_test]
    async fn odd_ids_never_reach_the_provider() {
        let provider = FakeProvider::default();
        let client = client(provider.clone(), FakeNotifier::default()).await;

        let response = client
            .get("/api/checkout-session?session_id=..%2Fcustomers")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert!(provider.calls().is_empty());
    }

    #[rocket::async_test]
    async fn provider_errors_only_carry_the_message() {
        let client = client(FakeProvider::failing(404, "No such checkout.session"), FakeNotifier::default()).await;

        let response = client
            .get("/api/checkout-session?session_id=cs_test_123")
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::InternalServerError);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "error": "No such checkout.session" }));
    }
}
