mod config;
mod registry;

pub use config::ConfirmationConfig;
pub(crate) use config::parse_flag;
pub use registry::{ConfirmationRegistry, ConfirmationRegistryError};
