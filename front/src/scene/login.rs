use {
    crate::{
        api,
        component::{push_notification, LoadingSpinner, Notification},
        route::Route,
        session::use_session,
    },
    yew::{function_component, html, use_state, Callback, Html, SubmitEvent, TargetCast as _},
    yew_router::hooks::use_navigator,
};

#[derive(serde::Serialize)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(serde::Deserialize)]
struct Token {
    access_token: String,
}

#[function_component]
pub fn Login() -> Html {
    let (_, store) = use_session();
    let navigator = use_navigator();

    let email = use_state(String::new);
    let password = use_state(String::new);
    let pending = use_state(|| false);

    let input = |handle: &yew::UseStateHandle<String>| {
        let handle = handle.clone();
        Callback::from(move |event: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            handle.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let pending = pending.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *pending {
                return;
            }

            let Some(store) = store.clone() else {
                error!("Failed to retrieve the session store");
                return;
            };

            let credentials = Credentials {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            let navigator = navigator.clone();
            let pending = pending.clone();
            pending.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                let url = format!("{}/login", api::api_base());

                match api::post_json::<_, Token>(&url, &credentials).await {
                    Ok(token) => {
                        store.sign_in(token.access_token, &credentials.email);
                        match &navigator {
                            Some(navigator) => navigator.push(&Route::Home),
                            None => error!("Failed to retrieve the navigator"),
                        }
                    }
                    Err(e) => {
                        warn!(format!("Login failed: {e}"));
                        push_notification(Notification::error("Login failed", vec![e.to_string()], 4.));
                    }
                }
                pending.set(false);
            });
        })
    };

    html! {<div class="login">
        <h1>{ "Log in" }</h1>
        <form class="login_form" {onsubmit}>
            <label>
                { "Email" }
                <input type="email" required={true} value={(*email).clone()} oninput={input(&email)} />
            </label>
            <label>
                { "Password" }
                <input type="password" required={true} value={(*password).clone()} oninput={input(&password)} />
            </label>
            <button type="submit" class="login_button" disabled={*pending}>
                if *pending {
                    <><LoadingSpinner size={16} />{ "Logging in..." }</>
                } else {
                    { "Log in" }
                }
            </button>
        </form>
    </div>}
}
