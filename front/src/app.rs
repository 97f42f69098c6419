use {
    crate::{
        component::{NotificationManager, Toolbar},
        route::{switch, Route},
        session::SessionStore,
    },
    yew::{function_component, html, use_state, ContextProvider, Html},
    yew_router::{components::Link, BrowserRouter, Switch},
};

#[function_component]
pub fn App() -> Html {
    let session = use_state(SessionStore::load);

    html! {
        <BrowserRouter>
        <ContextProvider<SessionStore> context={(*session).clone()}>
            <div id="global">
                <Toolbar />
                <div id="content">
                    <Switch<Route> render={switch} />
                    <NotificationManager />
                </div>
                <footer>
                    <p>{ format!("© {} PDFVille", js_sys::Date::new_0().get_full_year()) }</p>
                    <nav class="footer_links">
                        <Link<Route> to={Route::Features}>{ "Features" }</Link<Route>>
                        <Link<Route> to={Route::Faq}>{ "FAQ" }</Link<Route>>
                        <Link<Route> to={Route::PrivacyPolicy}>{ "Privacy" }</Link<Route>>
                        <Link<Route> to={Route::Security}>{ "Security" }</Link<Route>>
                        <Link<Route> to={Route::Cookies}>{ "Cookies" }</Link<Route>>
                    </nav>
                </footer>
            </div>
        </ContextProvider<SessionStore>>
        </BrowserRouter>
    }
}
