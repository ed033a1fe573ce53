pub mod arrondissements;
pub mod audit_logs;
pub mod cash_operations;
pub mod cheques;
pub mod departements;
pub mod lot_stock;
pub mod lots;
pub mod messages;
pub mod producers;
pub mod regions;
pub mod stock_movements;
pub mod users;
pub mod validations;

pub use arrondissements as arrondissement_entity;
pub use audit_logs as audit_log_entity;
pub use cash_operations as cash_operation_entity;
pub use cheques as cheque_entity;
pub use departements as departement_entity;
pub use lot_stock as lot_stock_entity;
pub use lots as lot_entity;
pub use messages as message_entity;
pub use producers as producer_entity;
pub use regions as region_entity;
pub use stock_movements as stock_movement_entity;
pub use users as user_entity;
pub use validations as validation_entity;

pub use cash_operations::OperationType;
pub use stock_movements::MovementType;
pub use validations::ValidationStatus;

pub type AuditLogEntry = audit_logs::Model;
pub type CashOperation = cash_operations::Model;
pub type Cheque = cheques::Model;
pub type Lot = lots::Model;
pub type LotStock = lot_stock::Model;
pub type Message = messages::Model;
pub type Producer = producers::Model;
pub type StockMovement = stock_movements::Model;
pub type User = users::Model;
pub type Validation = validations::Model;
