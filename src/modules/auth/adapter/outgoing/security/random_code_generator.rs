use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;

use crate::auth::application::ports::outgoing::code_generator::ConfirmationCodeGenerator;

pub const CONFIRMATION_CODE_LENGTH: usize = 16;

/// `[A-Za-z0-9]{16}` drawn from the operating system RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl ConfirmationCodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(CONFIRMATION_CODE_LENGTH)
            .map(char::from)
            .collect()
    }
}
