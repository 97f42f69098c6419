use {
    crate::route::{FormatQuery, Route},
    shared::Tool,
    yew::{function_component, html, Html},
    yew_router::components::Link,
};

pub fn tool_card(tool: Tool) -> Html {
    html! {
        <Link<Route, FormatQuery>
            to={Route::of_tool(tool)}
            query={Some(FormatQuery::of_tool(tool))}
            classes={yew::classes!("tool_card")}
        >
            <h3 class="tool_card_title">{ tool.title() }</h3>
            <p class="tool_card_accept">{ tool.accept().to_string() }</p>
        </Link<Route, FormatQuery>>
    }
}

#[function_component]
pub fn Tools() -> Html {
    html! {<div class="tools">
        <h1>{ "All PDF tools" }</h1>
        <div class="tool_grid">{
            for Tool::catalogue().into_iter().map(tool_card)
        }</div>
    </div>}
}
