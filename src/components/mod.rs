pub mod combobox;
pub mod common;
pub mod login;
pub mod signup;
