use {
    crate::{
        api,
        component::{
            push_notification, BrowserFile, DropZone, FileSelection, LoadingSpinner, Notification,
            PageNumberSettings, ProtectSettings, RemovePagesSettings, RepairSettings,
            RotateSettings, UnlockSettings, UploadArea, WatermarkSettingsForm,
        },
    },
    shared::{
        Delivery, NamedFile as _, PageNumberOptions, ProtectOptions, RemovePagesOptions,
        RepairOptions, RotateOptions, Tool, UnlockOptions, WatermarkSettings,
    },
    yew::{function_component, html, use_state, Callback, Html, Properties},
};

#[derive(PartialEq, Properties)]
pub struct Props {
    pub tool: Tool,
}

/// Options a tool page edits, only the ones of the current tool are sent
#[derive(Debug, Clone, PartialEq, Default)]
struct ToolOptions {
    watermark: WatermarkSettings,
    protect: ProtectOptions,
    rotate: RotateOptions,
    remove_pages: RemovePagesOptions,
    page_numbers: PageNumberOptions,
    unlock: UnlockOptions,
    repair: RepairOptions,
}

impl ToolOptions {
    fn problem(&self, tool: Tool) -> Option<&'static str> {
        match tool {
            Tool::Secure => self.protect.problem(),
            Tool::Rotate => self.rotate.problem(),
            Tool::RemovePages => self.remove_pages.problem(),
            _ => None,
        }
    }

    fn form_fields(&self, tool: Tool) -> Vec<(&'static str, String)> {
        let mut fields = tool.extra_fields();
        match tool {
            Tool::Watermark => fields.extend(self.watermark.form_fields()),
            Tool::Secure => fields.extend(self.protect.form_fields()),
            Tool::Rotate => fields.extend(self.rotate.form_fields()),
            Tool::RemovePages => fields.extend(self.remove_pages.form_fields()),
            Tool::PageNumbers => fields.extend(self.page_numbers.form_fields()),
            Tool::Unlock => fields.extend(self.unlock.form_fields()),
            Tool::Repair => fields.extend(self.repair.form_fields()),
            _ => (),
        }
        fields
    }
}

/// Why the current selection can't be sent, if anything
fn problem(tool: Tool, selection: &FileSelection, options: &ToolOptions) -> Option<String> {
    if selection.len() < tool.min_files() {
        return Some(match tool.min_files() {
            1 => String::from("Please select a file first"),
            n => format!("Please select at least {n} files"),
        });
    }

    let total = selection.iter().map(|file| file.size()).sum::<u64>();
    if total > crate::max_upload_size() {
        return Some(format!(
            "Files are too large ({}), the limit is {}",
            crate::format_size(total),
            crate::format_size(crate::max_upload_size())
        ));
    }

    options.problem(tool).map(String::from)
}

async fn process(tool: Tool, files: Vec<web_sys::File>, fields: Vec<(&'static str, String)>) -> Result<String, api::ApiError> {
    let form = api::form_data(tool.file_field(files.len()), &files, &fields)?;

    let url = format!("{}{}", api::api_base(), tool.endpoint());
    log!(format!("Sending {} file(s) to {url}", files.len()));

    let blob = api::post_form(&url, &form).await?;

    let first_name = files.first().map(|file| file.name());
    let download_name = tool.download_name(first_name.as_deref(), files.len());

    api::download(&blob, &download_name)?;

    Ok(download_name)
}

#[function_component]
pub fn ToolPage(props: &Props) -> Html {
    let tool = props.tool;

    let selection = use_state(FileSelection::new);
    let options = use_state(ToolOptions::default);
    let processing = use_state(|| false);

    let on_process = {
        let selection = selection.clone();
        let options = options.clone();
        let processing = processing.clone();

        Callback::from(move |_| {
            if *processing {
                return;
            }

            if let Some(problem) = problem(tool, &selection, &options) {
                push_notification(Notification::error(tool.title(), vec![problem], 4.));
                return;
            }

            let fields = options.form_fields(tool);

            let files = selection.iter().map(|file| file.0.clone()).collect::<Vec<_>>();
            let processing = processing.clone();
            processing.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match process(tool, files, fields).await {
                    Ok(download_name) => push_notification(Notification::info(
                        tool.title(),
                        vec![format!("{download_name} is ready")],
                        3.,
                    )),
                    Err(e) => {
                        error!(format!("{} failed: {e}", tool.title()));
                        push_notification(Notification::error(
                            tool.title(),
                            vec![String::from("Processing failed, please try again"), e.to_string()],
                            5.,
                        ))
                    }
                }
                processing.set(false);
            });
        })
    };

    let picker = if tool.multiple() {
        html! {
            <UploadArea
                selection={selection.clone()}
                accept={tool.accept().to_string()}
                upload_subtext={format!("Accepted: {}", tool.accept())}
            />
        }
    } else {
        let on_files = {
            let selection = selection.clone();
            Callback::from(move |delivery: Delivery<web_sys::File>| {
                selection.set(delivery.into_vec().into_iter().map(BrowserFile).collect());
            })
        };
        let clear = {
            let selection = selection.clone();
            Callback::from(move |_| selection.set(FileSelection::new()))
        };

        html! {<>
            <DropZone accept={tool.accept().to_string()} {on_files}>
                <div class="upload_icon">{ "📁" }</div>
                <p class="upload_text">{ "Drop a file here or click to browse" }</p>
            </DropZone>
            if let Some(file) = selection.get(0) {
                <div class="upload_file_item">
                    <span class="upload_file_name">{ file.name() }</span>
                    <span class="upload_file_size">{ crate::format_size(file.size()) }</span>
                    <button class="upload_file_remove" onclick={clear}>{ "✕" }</button>
                </div>
            }
        </>}
    };

    // Each form edits its own part of the options
    fn edit<T: 'static>(
        options: &yew::UseStateHandle<ToolOptions>,
        apply: fn(&mut ToolOptions, T),
    ) -> Callback<T> {
        let options = options.clone();
        Callback::from(move |value: T| {
            let mut next = (*options).clone();
            apply(&mut next, value);
            options.set(next);
        })
    }

    let settings = match tool {
        Tool::Watermark => html! {
            <WatermarkSettingsForm
                settings={options.watermark.clone()}
                on_change={edit(&options, |next, value: WatermarkSettings| next.watermark = value)}
            />
        },
        Tool::Secure => html! {
            <ProtectSettings
                options={options.protect.clone()}
                on_change={edit(&options, |next, value: ProtectOptions| next.protect = value)}
            />
        },
        Tool::Rotate => html! {
            <RotateSettings
                options={options.rotate.clone()}
                on_change={edit(&options, |next, value: RotateOptions| next.rotate = value)}
            />
        },
        Tool::RemovePages => html! {
            <RemovePagesSettings
                options={options.remove_pages.clone()}
                on_change={edit(&options, |next, value: RemovePagesOptions| next.remove_pages = value)}
            />
        },
        Tool::PageNumbers => html! {
            <PageNumberSettings
                options={options.page_numbers.clone()}
                on_change={edit(&options, |next, value: PageNumberOptions| next.page_numbers = value)}
            />
        },
        Tool::Unlock => html! {
            <UnlockSettings
                options={options.unlock.clone()}
                on_change={edit(&options, |next, value: UnlockOptions| next.unlock = value)}
            />
        },
        Tool::Repair => html! {
            <RepairSettings
                options={options.repair.clone()}
                on_change={edit(&options, |next, value: RepairOptions| next.repair = value)}
            />
        },
        _ => html! {},
    };

    html! {<div class="tool_page">
        <h1 class="tool_title">{ tool.title() }</h1>
        { picker }
        { settings }
        <button
            class="tool_process"
            disabled={*processing || selection.len() < tool.min_files()}
            onclick={on_process}
        >
            if *processing {
                <>
                    <LoadingSpinner size={20} />
                    { "Processing..." }
                </>
            } else {
                { tool.title() }
            }
        </button>
    </div>}
}
