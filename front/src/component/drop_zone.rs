use {
    shared::{Delivery, DragPhase, DropTarget, Intake},
    yew::{function_component, html, use_state, Callback, Children, DragEvent, Html, Properties, TargetCast as _},
};

#[derive(PartialEq, Properties)]
pub struct Props {
    /// `accept` attribute of the picker
    #[prop_or(yew::AttrValue::Static(".pdf"))]
    pub accept: yew::AttrValue,
    #[prop_or_default]
    pub multiple: bool,
    /// One file, or all of them when `multiple` is set
    pub on_files: Callback<Delivery<web_sys::File>>,
    #[prop_or_default]
    pub children: Children,
}

/// A drop target with a hidden picker on top of it
#[function_component]
pub fn DropZone(props: &Props) -> Html {
    let target = use_state(|| DropTarget::new(props.multiple));

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

    let deliver = {
        let target = target.clone();
        let on_files = props.on_files.clone();
        move |intake: Intake<web_sys::File>| {
            let mut next = *target;
            let delivery = next.receive(intake);
            target.set(next);

            if let Some(delivery) = delivery {
                on_files.emit(delivery);
            }
        }
    };

    let ondrop = {
        let deliver = deliver.clone();
        Callback::from(move |event: DragEvent| {
            event.prevent_default();
            event.stop_propagation();

            let files = super::files_of(event.data_transfer().and_then(|transfer| transfer.files()));
            deliver(Intake::from_drag(files));
        })
    };

    let onchange = Callback::from(move |event: yew::Event| {
        let input: web_sys::HtmlInputElement = event.target_unchecked_into();
        let files = super::files_of(input.files());

        // Picking the same file twice in a row must fire again
        input.set_value("");

        deliver(Intake::from_picker(files));
    });

    html! {
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
                accept={props.accept.clone()}
                multiple={props.multiple}
                {onchange}
            />
            { props.children.clone() }
        </label>
    }
}
