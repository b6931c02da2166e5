pub trait ConfirmationCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}
