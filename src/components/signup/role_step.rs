use dioxus::prelude::*;
use crate::models::Role;

struct RoleCard {
    role: Role,
    icon: &'static str,
    title: &'static str,
    tagline: &'static str,
    perks: &'static [(&'static str, &'static str)],
    accent: &'static str,
}

const ROLE_CARDS: [RoleCard; 2] = [
    RoleCard {
        role: Role::Annotator,
        icon: "\u{270F}",
        title: "Annotator",
        tagline: "I'm ready to earn money",
        perks: &[
            ("\u{2705}", "Complete simple tasks and get paid"),
            ("\u{1F4B5}", "Earn money whenever you want"),
            ("\u{23F0}", "Work on your own schedule"),
        ],
        accent: "text-green-500",
    },
    RoleCard {
        role: Role::ProjectManager,
        icon: "\u{1F3E2}",
        title: "Project Manager",
        tagline: "I need data for my projects",
        perks: &[
            ("\u{1F5C4}", "Get data labeled"),
            ("\u{1F4CA}", "Run surveys"),
            ("\u{1F310}", "Collect online data"),
            ("\u{1F4CD}", "Gather field data"),
        ],
        accent: "text-blue-500",
    },
];

#[component]
pub fn RoleStep(on_select: EventHandler<Role>) -> Element {
    rsx! {
        div { class: "h-screen flex justify-center items-center",
            div {
                h1 { class: "text-4xl font-bold text-left mb-8", "Choose your role" }
                p { class: "text-left mb-8 text-gray-500", "You can't switch roles with the same account" }

                div { class: "grid md:grid-cols-2 gap-6",
                    for card in ROLE_CARDS.iter() {
                        button {
                            key: "{card.title}",
                            r#type: "button",
                            class: "text-left bg-white rounded-lg shadow-md p-6 border-2 border-transparent hover:border-blue-600 cursor-pointer",
                            onclick: {
                                let role = card.role;
                                move |_: MouseEvent| on_select.call(role)
                            },
                            div { class: "flex items-center text-xl font-semibold",
                                span { class: "mr-2 text-2xl", "{card.icon}" }
                                "{card.title}"
                            }
                            p { class: "text-gray-500 mt-1", "{card.tagline}" }
                            ul { class: "mt-4 space-y-2",
                                for (icon, perk) in card.perks.iter() {
                                    li { key: "{perk}", class: "flex items-center",
                                        span { class: "mr-2 {card.accent}", "{icon}" }
                                        "{perk}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
