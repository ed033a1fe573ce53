pub mod audit_service;
pub mod auth_service;
pub mod cheque_service;
pub mod ledger_service;
pub mod locality_service;
pub mod lot_service;
pub mod message_service;
pub mod producer_service;
pub mod stock_service;
pub mod user_service;
pub mod validation_service;

pub use audit_service::*;
pub use auth_service::*;
pub use cheque_service::*;
pub use ledger_service::*;
pub use locality_service::*;
pub use lot_service::*;
pub use message_service::*;
pub use producer_service::*;
pub use stock_service::*;
pub use user_service::*;
pub use validation_service::*;
