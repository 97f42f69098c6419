use {
    crate::route::Route,
    yew::{function_component, html, Html},
    yew_router::components::Link,
};

#[function_component]
pub fn NotFound() -> Html {
    html! {<div class="not_found">
        <h1>{ "404" }</h1>
        <p>{ "This page does not exist." }</p>
        <Link<Route> to={Route::Home}>{ "Back to the home page" }</Link<Route>>
    </div>}
}
