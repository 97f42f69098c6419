use {
    shared::ProtectOptions,
    yew::{function_component, html, Callback, Html, Properties, TargetCast as _},
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub options: ProtectOptions,
    pub on_change: Callback<ProtectOptions>,
}

/// Password and permission inputs of the protect tool
#[function_component]
pub fn ProtectSettings(props: &Props) -> Html {
    let text = |apply: fn(&mut ProtectOptions, String)| {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            let mut next = options.clone();
            apply(&mut next, input.value());
            on_change.emit(next);
        })
    };

    let toggle = |apply: fn(&mut ProtectOptions, bool)| {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::Event| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            let mut next = options.clone();
            apply(&mut next, input.checked());
            on_change.emit(next);
        })
    };

    let options = &props.options;

    html! {<div class="protect_settings">
        <label class="protect_field">
            { "Password" }
            <input
                type="password"
                value={options.password.clone()}
                oninput={text(|options, value| options.password = value)}
            />
        </label>
        if let Some(strength) = options.strength() {
            <p class={format!("protect_strength protect_strength_{}", strength.as_str())}>
                { format!("Password strength: {}", strength.as_str()) }
            </p>
        }
        <label class="protect_field">
            { "Confirm password" }
            <input
                type="password"
                value={options.confirm_password.clone()}
                oninput={text(|options, value| options.confirm_password = value)}
            />
        </label>

        <fieldset class="protect_permissions">
            <legend>{ "Permissions" }</legend>
            <label>
                <input type="checkbox" checked={options.allow_print} onchange={toggle(|options, value| options.allow_print = value)} />
                { "Allow printing" }
            </label>
            <label>
                <input type="checkbox" checked={options.allow_copy} onchange={toggle(|options, value| options.allow_copy = value)} />
                { "Allow copying text" }
            </label>
            <label>
                <input type="checkbox" checked={options.allow_modify} onchange={toggle(|options, value| options.allow_modify = value)} />
                { "Allow modifications" }
            </label>
            <label>
                <input type="checkbox" checked={options.allow_annotate} onchange={toggle(|options, value| options.allow_annotate = value)} />
                { "Allow annotations" }
            </label>
        </fieldset>
    </div>}
}
