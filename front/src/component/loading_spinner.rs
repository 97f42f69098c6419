use yew::{function_component, html, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct Props {
    #[prop_or(24)]
    pub size: u32,
    #[prop_or(yew::AttrValue::Static("white"))]
    pub color: yew::AttrValue,
    #[prop_or_default]
    pub class: yew::Classes,
}

#[function_component]
pub fn LoadingSpinner(props: &Props) -> Html {
    // The ring is a faded version of the spinning arc
    let ring = if props.color.as_str() == "white" {
        "255, 255, 255"
    } else {
        "51, 51, 51"
    };

    let style = format!(
        "width: {size}px; height: {size}px; border: 3px solid rgba({ring}, 0.3); border-top: 3px solid {color};",
        size = props.size,
        color = props.color,
    );

    html! {
        <div class={yew::classes!("spinner", props.class.clone())} {style}></div>
    }
}
