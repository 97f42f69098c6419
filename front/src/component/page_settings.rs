use {
    shared::{
        organize::{NumberPosition, NumberSetting, RepairMode, RotationAngle, NUMBER_FONT_SIZE_RANGE},
        PageNumberOptions, RemovePagesOptions, RepairOptions, RotateOptions, UnlockOptions,
    },
    yew::{function_component, html, Callback, Html, Properties, TargetCast as _},
};

fn input_value(event: &yew::Event) -> String {
    event.target_unchecked_into::<web_sys::HtmlInputElement>().value()
}

fn select_value(event: &yew::Event) -> String {
    event.target_unchecked_into::<web_sys::HtmlSelectElement>().value()
}

fn checked(event: &yew::Event) -> bool {
    event.target_unchecked_into::<web_sys::HtmlInputElement>().checked()
}

#[derive(PartialEq, Properties)]
pub struct RotateProps {
    pub options: RotateOptions,
    pub on_change: Callback<RotateOptions>,
}

#[function_component]
pub fn RotateSettings(props: &RotateProps) -> Html {
    let edit = |apply: fn(&mut RotateOptions, &yew::Event)| {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::Event| {
            let mut next = options.clone();
            apply(&mut next, &event);
            on_change.emit(next);
        })
    };

    let options = &props.options;

    html! {<div class="page_settings">
        <h3>{ "Rotation Settings" }</h3>

        <label class="page_field">
            { "Rotation" }
            <select onchange={edit(|options, event| {
                if let Ok(angle) = select_value(event).parse() {
                    options.angle = angle;
                }
            })}>{
                for RotationAngle::ALL.iter().map(|angle| html! {
                    <option value={angle.degrees().to_string()} selected={*angle == options.angle}>
                        { angle.label() }
                    </option>
                })
            }</select>
        </label>

        <label class="page_toggle">
            <input
                type="checkbox"
                checked={options.all_pages}
                onchange={edit(|options, event| options.all_pages = checked(event))}
            />
            { "Rotate all pages" }
        </label>

        if !options.all_pages {
            <label class="page_field">
                { "Pages to rotate" }
                <input
                    type="text"
                    value={options.pages.clone()}
                    placeholder="e.g. 1,3,5-7"
                    onchange={edit(|options, event| options.pages = input_value(event))}
                />
            </label>
        }
    </div>}
}

#[derive(PartialEq, Properties)]
pub struct RemovePagesProps {
    pub options: RemovePagesOptions,
    pub on_change: Callback<RemovePagesOptions>,
}

#[function_component]
pub fn RemovePagesSettings(props: &RemovePagesProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::Event| {
            on_change.emit(RemovePagesOptions {
                pages: input_value(&event),
            })
        })
    };

    html! {<div class="page_settings">
        <label class="page_field">
            { "Pages to remove" }
            <input
                type="text"
                value={props.options.pages.clone()}
                placeholder="e.g. 1,3,5-7,10"
                {onchange}
            />
        </label>
        <p class="page_hint">{ "Separate pages with commas, use a dash for ranges" }</p>
    </div>}
}

#[derive(PartialEq, Properties)]
pub struct PageNumberProps {
    pub options: PageNumberOptions,
    pub on_change: Callback<PageNumberOptions>,
}

#[function_component]
pub fn PageNumberSettings(props: &PageNumberProps) -> Html {
    let edit = |setting: NumberSetting| {
        let options = props.options.clone();
        let on_change = props.on_change.clone();

        Callback::from(move |event: yew::Event| {
            let raw = if setting == NumberSetting::Position {
                select_value(&event)
            } else {
                input_value(&event)
            };

            let mut next = options.clone();
            if next.update(setting, &raw) {
                on_change.emit(next);
            } else {
                debug!(format!("Ignored page number {setting:?} value: {raw}"));
            }
        })
    };

    let options = &props.options;

    html! {<div class="page_settings">
        <h3>{ "Page Number Settings" }</h3>

        <label class="page_field">
            { "Position" }
            <select onchange={edit(NumberSetting::Position)}>{
                for NumberPosition::ALL.iter().map(|position| html! {
                    <option value={position.as_str()} selected={*position == options.position}>
                        { position.label() }
                    </option>
                })
            }</select>
        </label>

        <label class="page_field">
            { "Start number" }
            <input
                type="number"
                min="1"
                value={options.start_number.to_string()}
                onchange={edit(NumberSetting::StartNumber)}
            />
        </label>

        <label class="page_field">
            { format!("Font size: {}px", options.font_size) }
            <input
                type="range"
                min={NUMBER_FONT_SIZE_RANGE.0.to_string()}
                max={NUMBER_FONT_SIZE_RANGE.1.to_string()}
                value={options.font_size.to_string()}
                onchange={edit(NumberSetting::FontSize)}
            />
        </label>

        <label class="page_field">
            { "Color" }
            <input type="color" value={options.color.clone()} onchange={edit(NumberSetting::Color)} />
        </label>
    </div>}
}

#[derive(PartialEq, Properties)]
pub struct UnlockProps {
    pub options: UnlockOptions,
    pub on_change: Callback<UnlockOptions>,
}

#[function_component]
pub fn UnlockSettings(props: &UnlockProps) -> Html {
    let oninput = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = event.target_unchecked_into();
            on_change.emit(UnlockOptions {
                password: input.value(),
            })
        })
    };

    html! {<div class="page_settings">
        <label class="page_field">
            { "Password (optional)" }
            <input type="password" value={props.options.password.clone()} {oninput} />
        </label>
        <p class="page_hint">{ "Leave empty if the file only restricts printing or copying" }</p>
    </div>}
}

#[derive(PartialEq, Properties)]
pub struct RepairProps {
    pub options: RepairOptions,
    pub on_change: Callback<RepairOptions>,
}

#[function_component]
pub fn RepairSettings(props: &RepairProps) -> Html {
    let edit = |apply: fn(&mut RepairOptions, &yew::Event)| {
        let options = props.options.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |event: yew::Event| {
            let mut next = options.clone();
            apply(&mut next, &event);
            on_change.emit(next);
        })
    };

    let options = &props.options;

    html! {<div class="page_settings">
        <h3>{ "Repair Settings" }</h3>

        <label class="page_field">
            { "Repair mode" }
            <select onchange={edit(|options, event| {
                if let Ok(mode) = select_value(event).parse::<RepairMode>() {
                    options.mode = mode;
                }
            })}>{
                for RepairMode::ALL.iter().map(|mode| html! {
                    <option value={mode.as_str()} selected={*mode == options.mode}>
                        { mode.label() }
                    </option>
                })
            }</select>
        </label>

        <label class="page_toggle">
            <input
                type="checkbox"
                checked={options.preserve_bookmarks}
                onchange={edit(|options, event| options.preserve_bookmarks = checked(event))}
            />
            { "Preserve bookmarks" }
        </label>
        <label class="page_toggle">
            <input
                type="checkbox"
                checked={options.preserve_metadata}
                onchange={edit(|options, event| options.preserve_metadata = checked(event))}
            />
            { "Preserve metadata" }
        </label>
    </div>}
}
