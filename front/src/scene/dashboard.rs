use {
    crate::{
        api,
        component::{push_notification, LoadingSpinner, Notification},
        route::Route,
        session::use_session,
    },
    gloo::storage::{LocalStorage, Storage as _},
    serde_json::Value,
    shared::payment::{ManageSubscriptionRequest, PortalCreated, SubscriptionAction, SubscriptionReply},
    yew::{function_component, html, use_state, Callback, Html, TargetCast as _},
    yew_router::components::Link,
};

const CUSTOMER_KEY: &str = "customerId";

fn stored(key: &str) -> String {
    LocalStorage::get::<String>(key).unwrap_or_default()
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

async fn manage(
    action: SubscriptionAction,
    customer_id: Option<String>,
    subscription_id: Option<String>,
) -> Result<Option<SubscriptionReply>, api::ApiError> {
    let request = ManageSubscriptionRequest {
        customer_id,
        subscription_id,
        action: action.as_str().to_string(),
    };

    if action == SubscriptionAction::CreatePortal {
        let portal: PortalCreated = api::post_json("/api/manage-subscription", &request).await?;
        gloo::utils::window().location().set_href(&portal.url)?;
        return Ok(None);
    }

    Ok(Some(api::post_json("/api/manage-subscription", &request).await?))
}

fn describe(subscription: &Value) -> Html {
    let field = |name: &str| {
        subscription
            .get(name)
            .map(|value| match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| String::from("-"))
    };

    html! {<dl class="dashboard_subscription">
        <dt>{ "Subscription" }</dt><dd>{ field("id") }</dd>
        <dt>{ "Status" }</dt><dd>{ field("status") }</dd>
        <dt>{ "Cancels at period end" }</dt><dd>{ field("cancel_at_period_end") }</dd>
    </dl>}
}

#[function_component]
pub fn Dashboard() -> Html {
    let (session, _) = use_session();

    let customer_id = use_state(|| stored(CUSTOMER_KEY));
    let subscription_id = use_state(|| stored(super::success::SUBSCRIPTION_KEY));
    let busy = use_state(|| Option::<SubscriptionAction>::None);
    let subscription = use_state(|| Option::<Value>::None);

    if !session.is_authenticated() {
        return html! {<div class="dashboard">
            <h1>{ "Dashboard" }</h1>
            <p>
                { "Please " }
                <Link<Route> to={Route::Login}>{ "log in" }</Link<Route>>
                { " to manage your subscription." }
            </p>
        </div>};
    }

    let edit = |handle: &yew::UseStateHandle<String>, key: &'static str| {
        let handle = handle.clone();
        Callback::from(move |event: yew::Event| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            let value = input.value();
            if let Err(e) = LocalStorage::set(key, &value) {
                warn!(format!("Could not store {key}: {e}"));
            }
            handle.set(value);
        })
    };

    let run = |action: SubscriptionAction| {
        let customer_id = customer_id.clone();
        let subscription_id = subscription_id.clone();
        let busy = busy.clone();
        let subscription = subscription.clone();

        Callback::from(move |_: yew::MouseEvent| {
            if busy.is_some() {
                return;
            }
            busy.set(Some(action));

            let customer_id = optional(&customer_id);
            let subscription_id = optional(&subscription_id);
            let busy = busy.clone();
            let subscription = subscription.clone();

            wasm_bindgen_futures::spawn_local(async move {
                match manage(action, customer_id, subscription_id).await {
                    Ok(Some(reply)) => {
                        if let Some(message) = &reply.message {
                            push_notification(Notification::info("Subscription", vec![message.clone()], 4.));
                        }
                        subscription.set(Some(reply.subscription));
                    }
                    Ok(None) => (),
                    Err(e) => {
                        error!(format!("{} failed: {e}", action.as_str()));
                        push_notification(Notification::error("Subscription", vec![e.to_string()], 5.));
                    }
                }
                busy.set(None);
            });
        })
    };

    let button = |action: SubscriptionAction, label: &'static str| {
        html! {
            <button class="dashboard_button" disabled={busy.is_some()} onclick={run(action)}>
                if *busy == Some(action) {
                    <><LoadingSpinner size={16} />{ label }</>
                } else {
                    { label }
                }
            </button>
        }
    };

    html! {<div class="dashboard">
        <h1>{ "Dashboard" }</h1>

        <section class="dashboard_ids">
            <label>
                { "Customer ID" }
                <input type="text" value={(*customer_id).clone()} onchange={edit(&customer_id, CUSTOMER_KEY)} />
            </label>
            <label>
                { "Subscription ID" }
                <input type="text" value={(*subscription_id).clone()} onchange={edit(&subscription_id, super::success::SUBSCRIPTION_KEY)} />
            </label>
        </section>

        <section class="dashboard_actions">
            { button(SubscriptionAction::GetSubscription, "Refresh status") }
            { button(SubscriptionAction::CreatePortal, "Manage billing") }
            { button(SubscriptionAction::CancelSubscription, "Cancel at period end") }
            { button(SubscriptionAction::ReactivateSubscription, "Reactivate") }
        </section>

        if let Some(subscription) = &*subscription {
            { describe(subscription) }
        }
    </div>}
}
