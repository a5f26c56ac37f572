use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(into)] id: String,
    #[props(default = "text".to_string(), into)] r#type: String,
    #[props(default, into)] value: String,
    #[props(default)] disabled: bool,
    #[props(default, into)] placeholder: String,
    oninput: Option<EventHandler<FormEvent>>,
    onblur: Option<EventHandler<FocusEvent>>,
) -> Element {
    rsx! {
        input {
            class: "input",
            id: "{id}",
            name: "{id}",
            r#type: "{r#type}",
            value: "{value}",
            placeholder: "{placeholder}",
            disabled,
            oninput: move |evt| {
                if let Some(handler) = oninput {
                    handler.call(evt);
                }
            },
            onblur: move |evt| {
                if let Some(handler) = onblur {
                    handler.call(evt);
                }
            },
        }
    }
}
