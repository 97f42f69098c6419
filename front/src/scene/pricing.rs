use {
    crate::{
        api,
        component::{push_notification, LoadingSpinner, Notification},
        route::Route,
        session::EMAIL_KEY,
    },
    gloo::storage::{LocalStorage, Storage as _},
    shared::payment::{CheckoutCreated, CheckoutMode, CreateCheckoutRequest},
    yew::{function_component, html, use_state, Callback, Html},
    yew_router::components::Link,
};

const PREMIUM_PRICE_ID: &str = match option_env!("PREMIUM_PRICE_ID") {
    Some(price_id) => price_id,
    None => "price_1RysTKSGlE9lg1kM7ONgaYqG",
};

#[derive(Clone, Copy, PartialEq)]
enum Offer {
    Free,
    Checkout(&'static str),
    Contact,
}

struct Plan {
    name: &'static str,
    price: &'static str,
    features: &'static [&'static str],
    offer: Offer,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Basic",
        price: "Free",
        features: &["Limited daily usage", "All essential tools", "Files up to the upload limit"],
        offer: Offer::Free,
    },
    Plan {
        name: "Premium",
        price: "₹200 / month",
        features: &["Unlimited usage", "Every tool", "Priority processing", "Cancel anytime"],
        offer: Offer::Checkout(PREMIUM_PRICE_ID),
    },
    Plan {
        name: "Business",
        price: "Let's Talk",
        features: &["Everything in Premium", "Team accounts", "Dedicated support"],
        offer: Offer::Contact,
    },
];

async fn open_checkout(price_id: &str) -> Result<(), api::ApiError> {
    let request = CreateCheckoutRequest {
        price_id: Some(price_id.to_string()),
        email: LocalStorage::get::<String>(EMAIL_KEY).ok(),
        mode: Some(CheckoutMode::Subscription.as_str().to_string()),
        redirect_to_checkout: false,
    };

    let created: CheckoutCreated = api::post_json("/api/create-checkout-session", &request).await?;

    debug!(format!("Checkout session {} created", created.session_id));

    gloo::utils::window().location().set_href(&created.url)?;
    Ok(())
}

#[function_component]
pub fn Pricing() -> Html {
    // Price id of the checkout being opened
    let pending = use_state(|| Option::<&'static str>::None);

    let subscribe = |price_id: &'static str| {
        let pending = pending.clone();
        Callback::from(move |_| {
            if pending.is_some() {
                return;
            }
            pending.set(Some(price_id));

            let pending = pending.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(e) = open_checkout(price_id).await {
                    error!(format!("Checkout failed: {e}"));
                    push_notification(Notification::error(
                        "Checkout",
                        vec![String::from("Could not open the checkout"), e.to_string()],
                        5.,
                    ));
                }
                pending.set(None);
            });
        })
    };

    html! {<div class="pricing">
        <h1>{ "Choose your plan" }</h1>
        <div class="pricing_plans">{
            for PLANS.iter().map(|plan| html! {
                <div class="pricing_plan">
                    <h2 class="pricing_plan_name">{ plan.name }</h2>
                    <p class="pricing_plan_price">{ plan.price }</p>
                    <ul class="pricing_plan_features">{
                        for plan.features.iter().map(|feature| html! { <li>{ *feature }</li> })
                    }</ul>
                    {
                        match plan.offer {
                            Offer::Free => html! {
                                <Link<Route> to={Route::Tools} classes={yew::classes!("pricing_button")}>{ "Get started" }</Link<Route>>
                            },
                            Offer::Checkout(price_id) => html! {
                                <button class="pricing_button" disabled={pending.is_some()} onclick={subscribe(price_id)}>
                                    if *pending == Some(price_id) {
                                        <><LoadingSpinner size={18} />{ "Redirecting..." }</>
                                    } else {
                                        { "Subscribe" }
                                    }
                                </button>
                            },
                            Offer::Contact => html! {
                                <a class="pricing_button" href="mailto:sales@pdfville.com">{ "Contact sales" }</a>
                            },
                        }
                    }
                </div>
            })
        }</div>
    </div>}
}
