use {
    crate::{
        api::{self, FetchState},
        component::LoadingSpinner,
        route::Route,
    },
    gloo::storage::{LocalStorage, Storage as _},
    shared::payment::CheckoutSessionSummary,
    yew::{function_component, html, use_effect_with, use_state, Html},
    yew_router::{components::Link, hooks::use_location},
};

pub const SUBSCRIPTION_KEY: &str = "subscriptionId";

#[derive(Debug, Default, Clone, PartialEq, serde::Deserialize)]
struct SuccessQuery {
    #[serde(default)]
    session_id: Option<String>,
}

/// Remembers the subscription for the dashboard
fn remember(summary: &CheckoutSessionSummary) {
    let Some(subscription) = summary
        .subscription
        .as_ref()
        .and_then(|subscription| subscription.as_str())
    else {
        return;
    };

    if let Err(e) = LocalStorage::set(SUBSCRIPTION_KEY, subscription) {
        warn!(format!("Could not store the subscription id: {e}"));
    }
}

#[function_component]
pub fn Success() -> Html {
    let session_id = use_location()
        .and_then(|location| location.query::<SuccessQuery>().ok())
        .and_then(|query| query.session_id)
        .filter(|session_id| !session_id.is_empty());

    let session = use_state(|| FetchState::<CheckoutSessionSummary>::NotFetching);

    {
        let session = session.clone();
        use_effect_with(session_id.clone(), move |session_id| {
            if let Some(session_id) = session_id.clone() {
                session.set(FetchState::Fetching);

                wasm_bindgen_futures::spawn_local(async move {
                    let url = format!(
                        "/api/checkout-session?session_id={}",
                        String::from(js_sys::encode_uri_component(&session_id))
                    );

                    match api::get_json::<CheckoutSessionSummary>(&url).await {
                        Ok(summary) => {
                            remember(&summary);
                            session.set(FetchState::Success(summary));
                        }
                        Err(e) => {
                            error!(format!("Could not load checkout session {session_id}: {e}"));
                            session.set(FetchState::Failed(e.to_string()));
                        }
                    }
                });
            }
        });
    }

    let body = match &*session {
        FetchState::NotFetching => html! {
            <p>{ "No checkout to show. " }<Link<Route> to={Route::Pricing}>{ "See plans" }</Link<Route>></p>
        },
        FetchState::Fetching => html! {
            <div class="success_loading"><LoadingSpinner color="#333333" />{ "Checking your payment..." }</div>
        },
        FetchState::Success(summary) if summary.payment_status.as_deref() == Some("paid") => html! {<>
            <h1>{ "Payment successful" }</h1>
            <p>{ "Thank you for subscribing to PDFVille Premium! Your account has been upgraded." }</p>
            <ul class="success_details">
                if let Some(amount) = summary.formatted_amount() {
                    <li>{ format!("Amount: {amount}") }</li>
                }
                if let Some(email) = summary.customer_email() {
                    <li>{ format!("Receipt sent to: {email}") }</li>
                }
                <li>{ format!("Reference: {}", summary.id) }</li>
            </ul>
            <Link<Route> to={Route::Dashboard} classes={yew::classes!("success_button")}>{ "Go to dashboard" }</Link<Route>>
        </>},
        FetchState::Success(summary) => html! {<>
            <h1>{ "Payment pending" }</h1>
            <p>{ format!(
                "Your payment is {}, we'll upgrade your account as soon as it goes through.",
                summary.payment_status.as_deref().unwrap_or("being processed")
            ) }</p>
            <Link<Route> to={Route::Home}>{ "Back home" }</Link<Route>>
        </>},
        FetchState::Failed(e) => html! {<>
            <h1>{ "Something went wrong" }</h1>
            <p>{ format!("We could not confirm your payment: {e}") }</p>
            <Link<Route> to={Route::Pricing}>{ "Back to pricing" }</Link<Route>>
        </>},
    };

    html! {<div class="success">{ body }</div>}
}
