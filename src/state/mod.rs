pub mod signup;
pub mod ui;

pub use signup::*;
pub use ui::*;
