// Billing subsystem
//
// A CategoryRegistry says which charge categories exist, a ChargeItem is one
// billed line, and a Bill is the ordered charge history for one patient.

pub mod bill;
pub mod category;
pub mod charge;

pub use bill::Bill;
pub use category::CategoryRegistry;
pub use charge::ChargeItem;
