mod contact;
mod crm;
mod decisions;
mod health;
mod monitoring;
mod transactions;

pub use contact::*;
pub use crm::*;
pub use decisions::*;
pub use health::*;
pub use monitoring::*;
pub use transactions::*;
