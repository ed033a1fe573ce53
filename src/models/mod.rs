pub mod cash_operation;
pub mod cheque;
pub mod common;
pub mod locality;
pub mod lot;
pub mod message;
pub mod producer;
pub mod stock;
pub mod user;
pub mod validation;

pub use cash_operation::*;
pub use cheque::*;
pub use common::*;
pub use locality::*;
pub use lot::*;
pub use message::*;
pub use producer::*;
pub use stock::*;
pub use user::*;
pub use validation::*;
