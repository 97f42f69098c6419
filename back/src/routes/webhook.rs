use {
    crate::{
        error::RelayError,
        guards::SignatureHeader,
        payment::{signature, Event, CHECKOUT_COMPLETED},
        response::Response,
        state::Relay,
    },
    rocket::{
        data::{Data, ToByteUnit},
        http::{ContentType, Status},
    },
    shared::payment::WebhookAck,
};

/// Deliveries are small json documents
const WEBHOOK_BODY_LIMIT_MIB: u64 = 1;

fn webhook_error(message: impl std::fmt::Display) -> Response {
    Response::builder()
        .with_status(Status::BadRequest)
        .with_content(format!("Webhook Error: {message}"))
        .with_content_type(ContentType::Text)
        .build()
}

#[rocket::post("/webhook", data = "<data>")]
pub async fn webhook(
    data: Data<'_>,
    signature: SignatureHeader,
    relay: &rocket::State<Relay>,
) -> Response {
    let id = uuid::Uuid::new_v4();
    let start_timer = std::time::Instant::now();

    let payload = match data
        .open(WEBHOOK_BODY_LIMIT_MIB.mebibytes())
        .into_bytes()
        .await
    {
        Ok(capped) if capped.is_complete() => capped.into_inner(),
        Ok(_) => {
            warn!("[{id}] Webhook body is larger than {WEBHOOK_BODY_LIMIT_MIB} MiB");
            return webhook_error("Payload too large");
        }
        Err(e) => {
            return super::report(id, RelayError::Internal(format!("Could not read webhook body: {e}")));
        }
    };

    if let Err(e) = signature::verify(
        &payload,
        signature.as_deref(),
        &relay.config.webhook_secret,
        relay.config.signature_tolerance_s,
    ) {
        return super::report(id, RelayError::from(e));
    }

    let event = match serde_json::from_slice::<Event>(&payload) {
        Ok(event) => event,
        Err(e) => {
            warn!("[{id}] Signed webhook body is not an event: {e}");
            return webhook_error(e);
        }
    };

    debug!("[{id}] Received event {} ({})", event.display_id(), event.kind);

    if event.kind == CHECKOUT_COMPLETED {
        match event.customer_email() {
            Some(email) => match relay.notifier.upgrade_user(email).await {
                Ok(()) => info!("[{id}] Upgraded {email}"),
                // The provider does not need to know, the payment went through
                Err(e) => error!("[{id}] Failed to upgrade {email}: {e}"),
            },
            None => warn!("[{id}] Completed checkout {} has no customer email", event.display_id()),
        }
    }

    trace!(
        "[{id}] Webhook handled in {}",
        time::format(start_timer.elapsed(), 2)
    );

    Response::json(Status::Ok, &WebhookAck { received: true })
}

#[cfg(test)]
mod tests {
    use {
        crate::{
            payment::signature::signed_header,
            testing::{client, FakeNotifier, FakeProvider, WEBHOOK_SECRET},
        },
        rocket::http::{ContentType, Header, Status},
        serde_json::{json, Value},
    };

    fn now() -> i64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_secs() as i64
    }

    const COMPLETED: &str = r#"{"id":"evt_1","type":"checkout.session.completed","data":{"object":{"id":"cs_1","customer_email":"paid@pdfville.com"}}}"#;

    #[rocket::async_test]
    async fn completed_checkout_upgrades_once() {
        let notifier = FakeNotifier::default();
        let client = client(FakeProvider::default(), notifier.clone()).await;

        let response = client
            .post("/api/webhook")
            .header(ContentType::JSON)
            .header(Header::new(
                "stripe-signature",
                signed_header(COMPLETED.as_bytes(), WEBHOOK_SECRET, now()),
            ))
            .body(COMPLETED)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        let body: Value = response.into_json().await.unwrap();
        assert_eq!(body, json!({ "received": true }));
        assert_eq!(notifier.emails(), vec![String::from("paid@pdfville.com")]);
    }

    #[rocket::async_test]
    async fn bad_signature_has_no_side_effect() {
        let notifier = FakeNotifier::default();
        let client = client(FakeProvider::default(), notifier.clone()).await;

        let response = client
            .post("/api/webhook")
            .header(ContentType::JSON)
            .header(Header::new(
                "stripe-signature",
                signed_header(COMPLETED.as_bytes(), "whsec_someone_else", now()),
            ))
            .body(COMPLETED)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert!(response
            .into_string()
            .await
            .unwrap()
            .starts_with("Webhook Error: "));
        assert!(notifier.emails().is_empty());

        let response = client
            .post("/api/webhook")
            .header(ContentType::JSON)
            .body(COMPLETED)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::BadRequest);
        assert!(notifier.emails().is_empty());
    }

    #[rocket::async_test]
    async fn upgrade_failure_is_still_acknowledged() {
        let notifier = FakeNotifier::failing();
        let client = client(FakeProvider::default(), notifier.clone()).await;

        let response = client
            .post("/api/webhook")
            .header(Header::new(
                "stripe-signature",
                signed_header(COMPLETED.as_bytes(), WEBHOOK_SECRET, now()),
            ))
            .body(COMPLETED)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(notifier.emails(), vec![String::from("paid@pdfville.com")]);
    }

    #[rocket::async_test]
    async fn other_events_are_acknowledged_silently() {
        let notifier = FakeNotifier::default();
        let client = client(FakeProvider::default(), notifier.clone()).await;

        let body = r#"{"id":"evt_2","type":"invoice.paid","data":{"object":{"customer_email":"a@b.com"}}}"#;
        let response = client
            .post("/api/webhook")
            .header(Header::new(
                "stripe-signature",
                signed_header(body.as_bytes(), WEBHOOK_SECRET, now()),
            ))
            .body(body)
            .dispatch()
            .await;

        assert_eq!(response.status(), Status::Ok);
        assert!(notifier.emails().is_empty());
    }
}
