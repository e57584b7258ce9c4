pub mod notice;
pub mod payment;
pub mod plan;
pub mod tip;
pub mod user;

pub use notice::{Notice, NoticeLevel};
pub use payment::PaymentRequest;
pub use plan::{parse_display_amount, Plan};
pub use tip::{parse_kickoff, Tip, TipStatus};
pub use user::User;
