//! Single and multi-value pickers over a fixed option list

use dioxus::prelude::*;
use crate::models::{label_for, SelectOption};

const SELECT_CLASS: &str = "w-full px-3 py-2 border border-gray-300 rounded-md bg-white focus:outline-none focus:ring-2 focus:ring-blue-500";

fn with_value(values: &[String], value: String) -> Vec<String> {
    let mut next = values.to_vec();
    if !next.contains(&value) {
        next.push(value);
    }
    next
}

fn without_value(values: &[String], value: &str) -> Vec<String> {
    values.iter().filter(|v| v.as_str() != value).cloned().collect()
}

#[component]
pub fn Combobox(
    id: String,
    options: Vec<SelectOption>,
    value: String,
    onchange: EventHandler<String>,
    #[props(default = "Select...".to_string())]
    placeholder: String,
) -> Element {
    rsx! {
        select {
            class: SELECT_CLASS,
            id: "{id}",
            onchange: move |e| onchange.call(e.value()),
            option { value: "", disabled: true, selected: value.is_empty(), "{placeholder}" }
            for opt in options.iter() {
                option {
                    key: "{opt.value}",
                    value: "{opt.value}",
                    selected: opt.value == value,
                    "{opt.label}"
                }
            }
        }
    }
}

#[component]
pub fn MultiCombobox(
    id: String,
    options: Vec<SelectOption>,
    value: Vec<String>,
    onchange: EventHandler<Vec<String>>,
    #[props(default = "Select...".to_string())]
    placeholder: String,
    #[props(default = false)]
    allow_custom: bool,
) -> Element {
    let mut custom = use_signal(String::new);

    let remaining: Vec<SelectOption> = options
        .iter()
        .filter(|o| !value.contains(&o.value))
        .cloned()
        .collect();

    let on_pick = {
        let current = value.clone();
        move |e: FormEvent| {
            let picked = e.value();
            if !picked.is_empty() {
                onchange.call(with_value(&current, picked));
            }
        }
    };

    let add_custom = {
        let current = value.clone();
        move |_: MouseEvent| {
            let entry = custom().trim().to_string();
            if !entry.is_empty() {
                onchange.call(with_value(&current, entry));
                custom.set(String::new());
            }
        }
    };

    rsx! {
        div { class: "space-y-2",
            if !value.is_empty() {
                div { class: "flex flex-wrap gap-2",
                    for selected in value.iter() {
                        span {
                            key: "{selected}",
                            class: "inline-flex items-center gap-1 px-2.5 py-0.5 rounded-full text-xs font-medium bg-blue-100 text-blue-800",
                            {label_for(&options, selected).to_string()}
                            button {
                                r#type: "button",
                                class: "hover:text-blue-600",
                                onclick: {
                                    let next = without_value(&value, selected);
                                    move |_: MouseEvent| onchange.call(next.clone())
                                },
                                "\u{2715}"
                            }
                        }
                    }
                }
            }

            select {
                class: SELECT_CLASS,
                id: "{id}",
                onchange: on_pick,
                option { value: "", selected: true, "{placeholder}" }
                for opt in remaining.iter() {
                    option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                }
            }

            if allow_custom {
                div { class: "flex gap-2",
                    input {
                        class: "flex-1 px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500",
                        r#type: "text",
                        placeholder: "Add your own",
                        value: "{custom}",
                        oninput: move |e| custom.set(e.value()),
                    }
                    button {
                        r#type: "button",
                        class: "px-3 py-2 bg-gray-200 hover:bg-gray-300 text-gray-800 rounded-md",
                        onclick: add_custom,
                        "Add"
                    }
                }
            }
        }
    }
}
