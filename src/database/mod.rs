pub mod actor;
pub mod connection;
#[cfg(test)]
pub mod mock;

pub use actor::*;
pub use connection::*;
