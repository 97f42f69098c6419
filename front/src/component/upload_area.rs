use {
    super::{push_notification, BrowserFile, FileSelection, Notification},
    shared::{intake::ingest, AcceptSpec, DragPhase, DropTarget, Intake, NamedFile as _},
    yew::{
        function_component, html, use_state, Callback, DragEvent, Html, Properties, TargetCast as _,
        UseStateHandle,
    },
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub selection: UseStateHandle<FileSelection>,
    #[prop_or(yew::AttrValue::Static(".pdf"))]
    pub accept: yew::AttrValue,
    #[prop_or(yew::AttrValue::Static("Drop files here or click to browse"))]
    pub upload_text: yew::AttrValue,
    #[prop_or(yew::AttrValue::Static("Select files to upload"))]
    pub upload_subtext: yew::AttrValue,
}

fn report_rejections(rejected: Vec<String>) {
    if rejected.is_empty() {
        return;
    }

    debug!(format!("Skipped {} dropped file(s)", rejected.len()));

    push_notification(Notification::error(
        "Unsupported file type",
        rejected
            .into_iter()
            .map(|name| format!("{name} was not added"))
            .collect(),
        5.,
    ));
}

/// Drop zone with the list of selected files under it
#[function_component]
pub fn UploadArea(props: &Props) -> Html {
    let target = use_state(|| DropTarget::new(true));
    let accept = AcceptSpec::parse(&props.accept);

    let on_drag = |phase: DragPhase| {
        let target = target.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();

            let mut next = *target;
            next.drag(phase);
            if next != *target {
                target.set(next);
            }
        })
    };

    let feed = {
        let selection = props.selection.clone();
        let target = target.clone();
        move |intake: Intake<BrowserFile>| {
            let mut next_target = *target;
            next_target.drag(DragPhase::Leave);
            target.set(next_target);

            let mut next = (*selection).clone();
            let report = ingest(&mut next, &accept, intake);

            if report.accepted > 0 {
                selection.set(next);
            }
            report_rejections(report.rejected);
        }
    };

    let ondrop = {
        let feed = feed.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();

            let files = super::files_of(event.data_transfer().and_then(|transfer| transfer.files()));
            feed(Intake::from_drag(files.into_iter().map(BrowserFile)));
        })
    };

    let onchange = Callback::from(move |event: yew::Event| {
        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
        let files = super::files_of(input.files());
        input.set_value("");

        feed(Intake::from_picker(files.into_iter().map(BrowserFile)));
    });

    let remove_all = {
        let selection = props.selection.clone();
        Callback::from(move |_| {
            let mut next = (*selection).clone();
            next.clear();
            selection.set(next);
        })
    };

    let count = props.selection.len();

    html! {<div class="upload_area">
        <label
            class={format!("drop_zone{}", if target.is_active() { " drop_zone_active" } else { "" })}
            ondragenter={on_drag(DragPhase::Enter)}
            ondragover={on_drag(DragPhase::Over)}
            ondragleave={on_drag(DragPhase::Leave)}
            {ondrop}
        >
            <input
                class="drop_zone_input"
                type="file"
                multiple={true}
                accept={props.accept.clone()}
                {onchange}
            />
            <div class="upload_icon">{ if count > 0 { "📄" } else { "📁" } }</div>
            <p class="upload_text">{
                if count > 0 {
                    format!("{count} files selected")
                } else {
                    props.upload_text.to_string()
                }
            }</p>
            <p class="upload_subtext">{ &props.upload_subtext }</p>
        </label>

        if count > 0 {
            <div class="upload_file_list">
                <div class="upload_file_list_header">
                    <h3>{ format!("Selected Files ({count})") }</h3>
                    <button class="upload_remove_all" onclick={remove_all}>{ "Remove All" }</button>
                </div>
                {
                    for props.selection.iter().enumerate().map(|(index, file)| {
                        let selection = props.selection.clone();
                        let onclick = Callback::from(move |_| {
                            let mut next = (*selection).clone();
                            if next.remove_at(index).is_some() {
                                selection.set(next);
                            }
                        });

                        html! {<div class="upload_file_item">
                            <span class="upload_file_icon">{ "📄" }</span>
                            <span class="upload_file_name">{ file.name() }</span>
                            <span class="upload_file_size">{ crate::format_size(file.size()) }</span>
                            <button class="upload_file_remove" {onclick}>{ "✕" }</button>
                        </div>}
                    })
                }
            </div>
        }
    </div>}
}
