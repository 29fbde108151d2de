use dioxus::prelude::*;

use crate::components::{login::LoginPage, signup::SignupPage};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[redirect("/", || Route::Signup {})]
    #[route("/auth/signup")]
    Signup {},

    #[route("/auth/login")]
    Login {},
}

// Route handler components
#[component]
fn Signup() -> Element {
    rsx! {
        SignupPage {}
    }
}

#[component]
fn Login() -> Element {
    rsx! {
        LoginPage {}
    }
}
