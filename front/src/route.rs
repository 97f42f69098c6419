use {
    shared::{Format, Tool},
    yew::{html, Html},
    yew_router::Routable,
};

#[derive(Clone, Copy, Debug, PartialEq, Routable)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tools")]
    Tools,
    #[at("/tools/merge")]
    Merge,
    #[at("/tools/split")]
    Split,
    #[at("/tools/compress")]
    Compress,
    #[at("/tools/convert")]
    Convert,
    #[at("/tools/convert_to_pdf")]
    ConvertToPdf,
    #[at("/tools/secure")]
    Secure,
    #[at("/pdf_add_watermark")]
    Watermark,
    #[at("/rotate_pdf")]
    Rotate,
    #[at("/remove_pages")]
    RemovePages,
    #[at("/pdf_add_page_numbers")]
    PageNumbers,
    #[at("/unlock_pdf")]
    Unlock,
    #[at("/repair_pdf")]
    Repair,
    #[at("/pdf_to_pdfa")]
    PdfA,
    #[at("/features")]
    Features,
    #[at("/faq")]
    Faq,
    #[at("/privacy_policy")]
    PrivacyPolicy,
    #[at("/security")]
    Security,
    #[at("/cookies")]
    Cookies,
    #[at("/pricing")]
    Pricing,
    #[at("/success")]
    Success,
    #[at("/dashboard")]
    Dashboard,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Where a tool lives, the format goes in the query
    pub fn of_tool(tool: Tool) -> Self {
        match tool {
            Tool::Merge => Route::Merge,
            Tool::Split => Route::Split,
            Tool::Compress => Route::Compress,
            Tool::Convert(_) => Route::Convert,
            Tool::ConvertToPdf(_) => Route::ConvertToPdf,
            Tool::Secure => Route::Secure,
            Tool::Watermark => Route::Watermark,
            Tool::Rotate => Route::Rotate,
            Tool::RemovePages => Route::RemovePages,
            Tool::PageNumbers => Route::PageNumbers,
            Tool::Unlock => Route::Unlock,
            Tool::Repair => Route::Repair,
            Tool::PdfA => Route::PdfA,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl FormatQuery {
    pub fn of_tool(tool: Tool) -> Self {
        let format = match tool {
            Tool::Convert(format) | Tool::ConvertToPdf(format) => Some(format.as_str().to_string()),
            _ => None,
        };

        Self { format }
    }
}

fn tool_page(tool: Tool) -> Html {
    use crate::scene::ToolPage;

    html! { <ToolPage key={tool.title()} {tool} /> }
}

fn query_format() -> Option<Format> {
    let search = gloo::utils::window().location().search().unwrap_or_default();

    shared::route::tool_at(&format!("/tools/convert{search}")).and_then(|tool| match tool {
        Tool::Convert(format) => Some(format),
        _ => None,
    })
}

pub fn switch(route: Route) -> Html {
    use crate::scene::{
        Cookies, Dashboard, Faq, Features, Home, Login, NotFound, Pricing, PrivacyPolicy,
        Security, Success, Tools,
    };

    match route {
        Route::Home => html! { <Home /> },
        Route::Tools => html! { <Tools /> },
        Route::Merge => tool_page(Tool::Merge),
        Route::Split => tool_page(Tool::Split),
        Route::Compress => tool_page(Tool::Compress),
        Route::Convert => tool_page(Tool::Convert(query_format().unwrap_or(Format::Word))),
        Route::ConvertToPdf => tool_page(Tool::ConvertToPdf(
            query_format().unwrap_or(Format::Jpg),
        )),
        Route::Secure => tool_page(Tool::Secure),
        Route::Watermark => tool_page(Tool::Watermark),
        Route::Rotate => tool_page(Tool::Rotate),
        Route::RemovePages => tool_page(Tool::RemovePages),
        Route::PageNumbers => tool_page(Tool::PageNumbers),
        Route::Unlock => tool_page(Tool::Unlock),
        Route::Repair => tool_page(Tool::Repair),
        Route::PdfA => tool_page(Tool::PdfA),
        Route::Features => html! { <Features /> },
        Route::Faq => html! { <Faq /> },
        Route::PrivacyPolicy => html! { <PrivacyPolicy /> },
        Route::Security => html! { <Security /> },
        Route::Cookies => html! { <Cookies /> },
        Route::Pricing => html! { <Pricing /> },
        Route::Success => html! { <Success /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::Login => html! { <Login /> },
        Route::NotFound => {
            // Aliases like /merge_pdf are not routes, they render their destination
            let path = gloo::utils::window().location().pathname().unwrap_or_default();

            let Some(destination) = shared::route::resolve(&path) else {
                return html! { <NotFound /> };
            };

            if let Some(tool) = shared::route::tool_at(destination) {
                return tool_page(tool);
            }

            match Route::recognize(destination) {
                Some(route) if route != Route::NotFound => switch(route),
                _ => html! { <NotFound /> },
            }
        }
    }
}
