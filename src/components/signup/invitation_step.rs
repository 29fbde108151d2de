use dioxus::prelude::*;
use crate::api;
use crate::components::common::Input;
use crate::flow;
use crate::models::FormField;
use crate::state::{show_notification, Action, InvitationMode, SignupEvent, SignupState};
use super::dispatch;

const TAB_ACTIVE: &str = "flex-1 py-2 rounded-md bg-white shadow text-gray-900 font-medium";
const TAB_IDLE: &str = "flex-1 py-2 rounded-md text-gray-500 hover:text-gray-700";

/// Invitation gate for project managers: enter a code, or ask for one
#[component]
pub fn InvitationStep(state: Signal<SignupState>) -> Element {
    let snapshot = state.read().clone();
    let mode = snapshot.invitation_mode;
    let code = snapshot.form.invitation_code.clone();
    let email = snapshot.form.email.clone();
    let verifying = snapshot.is_pending(Action::VerifyInvitation);
    let requesting = snapshot.is_pending(Action::RequestInvitation);
    let submitted = snapshot.request_submitted;

    let verify = move |_: MouseEvent| {
        spawn(async move {
            let mut store = state;
            if let Some(toast) = flow::verify_invitation_code(&mut store, api::api_client()).await {
                show_notification(toast);
            }
        });
    };

    let request = move |_: MouseEvent| {
        spawn(async move {
            let mut store = state;
            if let Some(toast) = flow::request_invitation(&mut store, api::api_client()).await {
                show_notification(toast);
            }
        });
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md",
                button {
                    r#type: "button",
                    class: "text-sm text-gray-600 hover:underline mb-4",
                    onclick: move |_| {
                        let mut store = state;
                        flow::back(&mut store);
                    },
                    "\u{2190} Back"
                }

                h2 { class: "text-2xl font-bold mb-2", "Project manager access" }
                p { class: "text-gray-500 mb-6",
                    "Project manager accounts need an invitation code."
                }

                // Mode toggle
                div { class: "flex gap-1 p-1 bg-gray-100 rounded-lg mb-6",
                    button {
                        r#type: "button",
                        class: if mode == InvitationMode::Enter { TAB_ACTIVE } else { TAB_IDLE },
                        onclick: move |_| dispatch(state, SignupEvent::ModeChanged(InvitationMode::Enter)),
                        "I have a code"
                    }
                    button {
                        r#type: "button",
                        class: if mode == InvitationMode::Request { TAB_ACTIVE } else { TAB_IDLE },
                        onclick: move |_| dispatch(state, SignupEvent::ModeChanged(InvitationMode::Request)),
                        "Request an invitation"
                    }
                }

                match mode {
                    InvitationMode::Enter => rsx! {
                        div { class: "space-y-4",
                            Input {
                                id: "invitationCode",
                                label: "Invitation code",
                                value: code.clone(),
                                placeholder: "Enter your invitation code",
                                required: true,
                                oninput: move |e: FormEvent| {
                                    dispatch(state, SignupEvent::FieldChanged(FormField::InvitationCode, e.value()))
                                },
                            }
                            button {
                                r#type: "button",
                                class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                                disabled: verifying || code.trim().is_empty(),
                                onclick: verify,
                                if verifying { "Verifying..." } else { "Verify code" }
                            }
                        }
                    },
                    InvitationMode::Request => rsx! {
                        div { class: "space-y-4",
                            Input {
                                id: "email",
                                label: "Email",
                                input_type: "email",
                                value: email.clone(),
                                placeholder: "Enter your email",
                                required: true,
                                disabled: snapshot.email_locked(),
                                oninput: move |e: FormEvent| {
                                    dispatch(state, SignupEvent::FieldChanged(FormField::Email, e.value()))
                                },
                            }
                            button {
                                r#type: "button",
                                class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                                disabled: submitted || requesting || email.trim().is_empty(),
                                onclick: request,
                                if submitted {
                                    "Request submitted"
                                } else if requesting {
                                    "Sending..."
                                } else {
                                    "Request invitation"
                                }
                            }
                            if submitted {
                                div { class: "bg-green-50 border border-green-200 text-green-700 px-4 py-3 rounded-lg text-sm",
                                    "Your request is in. Once approved, the invitation code will be sent to {email}."
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
