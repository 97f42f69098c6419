mod dashboard;
mod home;
mod info;
mod login;
mod not_found;
mod pricing;
mod success;
mod tool;
mod tools;

pub use {
    dashboard::Dashboard,
    home::Home,
    info::{Cookies, Faq, Features, PrivacyPolicy, Security},
    login::Login,
    not_found::NotFound,
    pricing::Pricing,
    success::Success,
    tool::ToolPage,
    tools::Tools,
};

/// Titled page made of (heading, paragraph) sections
fn article(title: &str, sections: &[(&str, &str)]) -> yew::Html {
    yew::html! {<div class="article">
        <h1 class="article_title">{ title }</h1>
        {
            for sections.iter().map(|(heading, text)| yew::html! {
                <section class="article_section">
                    <h2>{ *heading }</h2>
                    <p>{ *text }</p>
                </section>
            })
        }
    </div>}
}
