use dioxus::prelude::*;
use crate::routes::Route;

/// Where a finished sign-up lands. Signing in is handled by the auth service.
#[component]
pub fn LoginPage() -> Element {
    rsx! {
        div { class: "min-h-screen flex items-center justify-center bg-gray-100",
            div { class: "bg-white rounded-lg shadow-lg p-8 w-full max-w-md text-center",
                h1 { class: "text-2xl font-bold", "Log in" }
                p { class: "text-gray-500 mt-2",
                    "Use the email and password you signed up with."
                }
                div { class: "mt-6 text-sm text-gray-600",
                    "Don't have an account? "
                    Link {
                        class: "text-blue-600 hover:text-blue-700 font-medium",
                        to: Route::Signup {},
                        "Sign up"
                    }
                }
            }
        }
    }
}
