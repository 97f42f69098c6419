use {
    crate::route::Route,
    shared::{Format, Tool},
    yew::{function_component, html, Html},
    yew_router::components::Link,
};

const POPULAR: [Tool; 6] = [
    Tool::Merge,
    Tool::Split,
    Tool::Compress,
    Tool::Convert(Format::Word),
    Tool::ConvertToPdf(Format::Jpg),
    Tool::Watermark,
];

#[function_component]
pub fn Home() -> Html {
    html! {<div class="home">
        <section class="home_hero">
            <h1 class="home_main_title">{ "Every tool you need to work with PDFs" }</h1>
            <p class="home_subtitle">{
                format!(
                    "Merge, split, compress, convert and protect documents up to {} right from your browser.",
                    crate::format_size(crate::max_upload_size())
                )
            }</p>
            <Link<Route> to={Route::Tools} classes={yew::classes!("home_cta")}>{ "Browse all tools" }</Link<Route>>
        </section>

        <section class="home_section">
            <h2 class="home_section_title">{ "Popular tools" }</h2>
            <div class="tool_grid">{
                for POPULAR.into_iter().map(super::tools::tool_card)
            }</div>
        </section>

        <section class="home_section">
            <h2 class="home_section_title">{ "Need more?" }</h2>
            <p class="home_section_text">
                { "Premium removes the limits of the free plan. " }
                <Link<Route> to={Route::Pricing}>{ "See pricing" }</Link<Route>>
            </p>
        </section>
    </div>}
}
