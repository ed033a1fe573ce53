pub mod form;
pub mod password;

pub use form::*;
pub use password::*;
