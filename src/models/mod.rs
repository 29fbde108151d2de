pub mod signup;
pub mod options;

pub use signup::*;
pub use options::*;
