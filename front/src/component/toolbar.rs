use {
    crate::{route::Route, session::use_session},
    yew::{function_component, html, use_state, Callback, Html},
    yew_router::{
        components::Link,
        hooks::{use_navigator, use_route},
    },
};

const LINKS: [(Route, &str); 4] = [
    (Route::Home, "Home"),
    (Route::Tools, "Tools"),
    (Route::Pricing, "Pricing"),
    (Route::Dashboard, "Dashboard"),
];

#[function_component]
pub fn Toolbar() -> Html {
    let (session, store) = use_session();
    let current = use_route::<Route>();
    let menu_open = use_state(|| false);
    let navigator = use_navigator();

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| menu_open.set(!*menu_open))
    };

    let logout = {
        let menu_open = menu_open.clone();
        Callback::from(move |_| {
            if let Some(store) = &store {
                store.sign_out();
            } else {
                error!("Failed to retrieve the session store");
            }

            menu_open.set(false);

            match &navigator {
                Some(navigator) => navigator.push(&Route::Login),
                None => error!("Failed to retrieve the navigator"),
            }
        })
    };

    html! {
        <nav id="toolbar">
            <Link<Route> to={Route::Home} classes={yew::classes!("toolbar_brand")}>
                <img src="/resources/logo.webp" alt="PDFVille logo" class="icon" />
                { "PDFVille" }
            </Link<Route>>

            <button class="toolbar_menu_toggle" onclick={toggle_menu}>{ if *menu_open { "✕" } else { "☰" } }</button>

            <div class={format!("toolbar_links{}", if *menu_open { " open" } else { "" })}>
                {
                    for LINKS.iter().map(|(route, label)| {
                        let is_current = current.as_ref() == Some(route);

                        html! {
                            <Link<Route> to={*route} classes={yew::classes!("toolbar_link", is_current.then_some("current"))}>{ *label }</Link<Route>>
                        }
                    })
                }
                if session.is_authenticated() {
                    <button class="toolbar_link toolbar_logout" onclick={logout}>{ "Logout" }</button>
                } else {
                    <Link<Route> to={Route::Login} classes={yew::classes!("toolbar_link", "toolbar_login")}>{ "Login" }</Link<Route>>
                }
            </div>
        </nav>
    }
}
