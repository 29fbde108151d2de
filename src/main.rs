//! LabelMarket Sign-up - Dioxus Web Client
//!
//! Multi-step account creation for the labeling marketplace: annotators fill
//! in their profile directly, project managers go through an invitation code
//! first. Talks to the marketplace auth API over JSON.

mod api;
mod components;
mod config;
mod flow;
mod models;
mod routes;
mod state;

use dioxus::prelude::*;
use components::common::Notification;
use config::AppConfig;
use routes::Route;

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        if let Err(e) = init_tracing() {
            eprintln!("Failed to initialise logging: {}", e);
        }
    }

    if let Err(e) = run_app() {
        tracing::error!("Failed to start sign-up client: {:#}", e);

        #[cfg(not(target_arch = "wasm32"))]
        std::process::exit(1);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("labelmarket_signup=info".parse()?))
        .try_init()?;
    Ok(())
}

fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize API client
    api::init_api_client(&config)?;
    tracing::info!("Using auth API at {}", api::api_client().base_url());

    // Launch the Dioxus app
    dioxus::launch(App);
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global styles
        style { {include_str!("../assets/styles.css")} }

        // Notification toast
        Notification {}

        Router::<Route> {}
    }
}
