use {
    shared::{
        watermark::{Position, Setting, FONT_SIZE_RANGE, OPACITY_RANGE, ROTATION_RANGE},
        WatermarkSettings,
    },
    yew::{function_component, html, Callback, Html, Properties, TargetCast as _},
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub settings: WatermarkSettings,
    pub on_change: Callback<WatermarkSettings>,
}

/// Controlled inputs for the watermark tool
#[function_component]
pub fn WatermarkSettingsForm(props: &Props) -> Html {
    let edit = |setting: Setting| {
        let settings = props.settings.clone();
        let on_change = props.on_change.clone();

        Callback::from(move |event: yew::Event| {
            let raw = if setting == Setting::Position {
                event.target_unchecked_into::<web_sys::HtmlSelectElement>().value()
            } else {
                event.target_unchecked_into::<web_sys::HtmlInputElement>().value()
            };

            let mut next = settings.clone();
            if next.update(setting, &raw) {
                on_change.emit(next);
            } else {
                debug!(format!("Ignored watermark {setting:?} value: {raw}"));
            }
        })
    };

    let settings = &props.settings;

    html! {<div class="watermark_settings">
        <h3>{ "Watermark Settings" }</h3>

        <label class="watermark_field">
            { "Watermark Text" }
            <input
                type="text"
                value={settings.text.clone()}
                placeholder="Enter watermark text"
                onchange={edit(Setting::Text)}
            />
        </label>

        <label class="watermark_field">
            { "Position" }
            <select onchange={edit(Setting::Position)}>{
                for Position::ALL.iter().map(|position| html! {
                    <option value={position.as_str()} selected={*position == settings.position}>
                        { position.label() }
                    </option>
                })
            }</select>
        </label>

        <label class="watermark_field">
            { format!("Opacity: {}%", settings.opacity_percent()) }
            <input
                type="range"
                min={OPACITY_RANGE.0.to_string()}
                max={OPACITY_RANGE.1.to_string()}
                step={OPACITY_RANGE.2.to_string()}
                value={settings.opacity.to_string()}
                onchange={edit(Setting::Opacity)}
            />
        </label>

        <label class="watermark_field">
            { format!("Rotation: {}°", settings.rotation) }
            <input
                type="range"
                min={ROTATION_RANGE.0.to_string()}
                max={ROTATION_RANGE.1.to_string()}
                step={ROTATION_RANGE.2.to_string()}
                value={settings.rotation.to_string()}
                onchange={edit(Setting::Rotation)}
            />
        </label>

        <label class="watermark_field">
            { format!("Font Size: {}px", settings.font_size) }
            <input
                type="range"
                min={FONT_SIZE_RANGE.0.to_string()}
                max={FONT_SIZE_RANGE.1.to_string()}
                step={FONT_SIZE_RANGE.2.to_string()}
                value={settings.font_size.to_string()}
                onchange={edit(Setting::FontSize)}
            />
        </label>

        <label class="watermark_field">
            { "Color" }
            <input type="color" value={settings.color.clone()} onchange={edit(Setting::Color)} />
        </label>
    </div>}
}
