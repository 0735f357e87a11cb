//! API endpoints module.

pub mod appointments;
pub mod chat;
pub mod lawyers;
pub mod payments;

pub use appointments::{create_appointment, delete_appointment, list_appointments};
pub use chat::chat;
pub use lawyers::{get_lawyer, list_lawyers};
pub use payments::{confirm_payment, create_payment_intent};
