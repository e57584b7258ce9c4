//! M-Pesa STK-push initiation.

pub mod initiator;
pub mod phone;
pub mod prompt;
pub mod whatsapp;

pub use initiator::{PaymentInitiator, PaymentOutcome};
pub use phone::normalize_phone;
pub use prompt::{FixedPhone, PhonePrompt};
pub use whatsapp::whatsapp_link;
