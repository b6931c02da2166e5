pub mod confirmation_notifier;
pub mod email_sender;

pub use confirmation_notifier::{ConfirmationNotificationError, ConfirmationNotifier};
pub use email_sender::{EmailSender, OutgoingEmail};
