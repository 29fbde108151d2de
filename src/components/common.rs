use dioxus::prelude::*;
use crate::state::{clear_notification, dismiss_notification, NotificationType, UI_STATE};

const TOAST_MILLIS: u32 = 4000;

#[component]
pub fn Notification() -> Element {
    let notification = UI_STATE.read().notification.clone();

    // Auto-dismiss notification after 4 seconds
    use_effect(move || {
        let shown = UI_STATE.read().visible_toast();
        if let Some(id) = shown {
            spawn(async move {
                #[cfg(target_arch = "wasm32")]
                {
                    gloo_timers::future::TimeoutFuture::new(TOAST_MILLIS).await;
                }
                #[cfg(not(target_arch = "wasm32"))]
                {
                    tokio::time::sleep(std::time::Duration::from_millis(TOAST_MILLIS as u64)).await;
                }
                dismiss_notification(id);
            });
        }
    });

    if let Some(toast) = notification {
        let color_class = toast.notification_type.color_class();
        let icon = match toast.notification_type {
            NotificationType::Success => "\u{2705}",
            NotificationType::Error => "\u{274C}",
        };
        rsx! {
            div {
                class: "fixed top-4 right-4 z-50 {color_class} text-white px-6 py-4 rounded-lg shadow-xl max-w-sm animate-slide-in",
                div { class: "flex items-start gap-3",
                    span { class: "text-xl flex-shrink-0", "{icon}" }
                    div { class: "flex-1",
                        p { class: "font-medium", "{toast.title}" }
                        if !toast.description.is_empty() {
                            p { class: "text-sm mt-1", "{toast.description}" }
                        }
                    }
                    button {
                        class: "ml-2 text-white hover:text-gray-200 flex-shrink-0",
                        onclick: move |_| {
                            clear_notification();
                        },
                        "\u{2715}"
                    }
                }
            }
        }
    } else {
        rsx! {}
    }
}

#[component]
pub fn Input(
    id: String,
    value: String,
    oninput: EventHandler<FormEvent>,
    #[props(default = "text".to_string())]
    input_type: String,
    #[props(default = "".to_string())]
    placeholder: String,
    #[props(default = "".to_string())]
    label: String,
    #[props(default = false)]
    required: bool,
    #[props(default = false)]
    disabled: bool,
    #[props(default = 0)]
    min_length: usize,
) -> Element {
    rsx! {
        div { class: "space-y-2",
            if !label.is_empty() {
                label { class: "block text-sm font-medium text-gray-700",
                    r#for: "{id}",
                    "{label}"
                }
            }
            input {
                class: "w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500 disabled:bg-gray-100",
                id: "{id}",
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                required: required,
                disabled: disabled,
                minlength: "{min_length}",
                oninput: move |e| oninput.call(e),
            }
        }
    }
}
