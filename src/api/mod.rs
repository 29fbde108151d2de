pub mod client;
pub mod auth;


pub use client::*;
pub use auth::AuthApi;
