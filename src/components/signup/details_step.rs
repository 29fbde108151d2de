use dioxus::prelude::*;
use crate::api;
use crate::components::combobox::{Combobox, MultiCombobox};
use crate::components::common::Input;
use crate::flow;
use crate::models::{domain_options, language_options, location_options, FormField, Role};
use crate::routes::Route;
use crate::state::{show_notification, Action, SignupEvent, SignupState};
use super::dispatch;

#[component]
pub fn DetailsStep(state: Signal<SignupState>) -> Element {
    let nav = navigator();
    let snapshot = state.read().clone();
    let form = snapshot.form.clone();
    let is_annotator = snapshot.role() == Some(Role::Annotator);
    let submitting = snapshot.is_pending(Action::Submit);

    let domains = use_hook(domain_options);
    let languages = use_hook(language_options);
    let locations = use_hook(location_options);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        spawn(async move {
            let mut store = state;
            let outcome = flow::submit(&mut store, api::api_client()).await;
            if let Some(toast) = outcome.toast {
                show_notification(toast);
            }
            if outcome.signed_up {
                nav.push(Route::Login {});
            }
        });
    };

    let text_input = move |field: FormField| {
        move |e: FormEvent| dispatch(state, SignupEvent::FieldChanged(field, e.value()))
    };

    let (width, columns, wide) = if is_annotator {
        ("max-w-xl", "grid-cols-2", "col-span-2")
    } else {
        ("max-w-md", "grid-cols-1", "")
    };

    rsx! {
        div { class: "min-h-screen flex items-center justify-center p-4",
            div { class: "bg-white p-8 {width} w-full",
                h2 { class: "text-4xl font-bold text-center mb-6", "Sign Up" }

                form { class: "grid {columns} gap-6",
                    onsubmit: on_submit,

                    Input {
                        id: "name",
                        label: "Name",
                        value: form.name.clone(),
                        placeholder: "Enter your name",
                        required: true,
                        oninput: text_input(FormField::Name),
                    }
                    Input {
                        id: "email",
                        label: "Email",
                        input_type: "email",
                        value: form.email.clone(),
                        placeholder: "Enter your email",
                        required: true,
                        disabled: snapshot.email_locked(),
                        oninput: text_input(FormField::Email),
                    }
                    Input {
                        id: "password",
                        label: "Password",
                        input_type: "password",
                        value: form.password.clone(),
                        placeholder: "Enter your password",
                        required: true,
                        min_length: 6,
                        oninput: text_input(FormField::Password),
                    }

                    if is_annotator {
                        Input {
                            id: "phone",
                            label: "Phone number",
                            input_type: "tel",
                            value: form.phone.clone(),
                            placeholder: "Enter your phone number",
                            required: true,
                            oninput: text_input(FormField::Phone),
                        }
                        div { class: "space-y-2",
                            label { class: "block text-sm font-medium text-gray-700", r#for: "domain", "Domain" }
                            MultiCombobox {
                                id: "domain",
                                options: domains.clone(),
                                value: form.domain.clone(),
                                placeholder: "Select domain",
                                allow_custom: true,
                                onchange: move |values: Vec<String>| dispatch(state, SignupEvent::DomainChanged(values)),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "block text-sm font-medium text-gray-700", r#for: "lang", "Language" }
                            MultiCombobox {
                                id: "lang",
                                options: languages.clone(),
                                value: form.lang.clone(),
                                placeholder: "Select language",
                                onchange: move |values: Vec<String>| dispatch(state, SignupEvent::LangChanged(values)),
                            }
                        }
                        div { class: "space-y-2",
                            label { class: "block text-sm font-medium text-gray-700", r#for: "location", "Location" }
                            Combobox {
                                id: "location",
                                options: locations.clone(),
                                value: form.location.clone(),
                                placeholder: "Select location",
                                onchange: move |value: String| {
                                    dispatch(state, SignupEvent::FieldChanged(FormField::Location, value))
                                },
                            }
                        }
                    }

                    div { class: "{wide}",
                        button {
                            class: "w-full py-3 bg-blue-600 text-white rounded-lg hover:bg-blue-700 font-medium disabled:opacity-50",
                            r#type: "submit",
                            disabled: submitting,
                            if submitting { "Signing up..." } else { "Sign Up" }
                        }
                    }
                }

                div { class: "mt-4 text-center",
                    button {
                        r#type: "button",
                        class: "text-sm text-gray-600 hover:underline",
                        onclick: move |_| {
                            nav.push(Route::Login {});
                        },
                        "Already have an account? Login"
                    }
                }
            }
        }
    }
}
