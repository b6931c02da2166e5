use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

use crate::email::application::ports::outgoing::{
    ConfirmationNotificationError, ConfirmationNotifier, EmailSender, OutgoingEmail,
};

pub const CONFIRMATION_SUBJECT: &str = "YamDB activation code";

/// Renders and sends the confirmation-code message.
#[derive(Clone)]
pub struct ConfirmationEmailService {
    sender: Arc<dyn EmailSender + Send + Sync>,
    html_enabled: bool,
}

impl fmt::Debug for ConfirmationEmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfirmationEmailService")
            .field("sender", &"<dyn EmailSender>")
            .field("html_enabled", &self.html_enabled)
            .finish()
    }
}

impl ConfirmationEmailService {
    pub fn new(sender: Arc<dyn EmailSender + Send + Sync>, html_enabled: bool) -> Self {
        Self {
            sender,
            html_enabled,
        }
    }

    fn render(&self, email: &str, code: &str) -> OutgoingEmail {
        let body_html = self.html_enabled.then(|| {
            format!(
                r#"<p>Hi,</p>
<p>Use this code for YamDB login:</p>
<p style="font-size:20px;font-weight:bold;letter-spacing:2px">{code}</p>
<p>If you did not request it, you can ignore this email.</p>"#
            )
        });

        OutgoingEmail {
            to: email.to_string(),
            subject: CONFIRMATION_SUBJECT.to_string(),
            body_text: format!("Hi, use this code for YamDB login: {code}"),
            body_html,
        }
    }
}

#[async_trait]
impl ConfirmationNotifier for ConfirmationEmailService {
    async fn send_confirmation_code(
        &self,
        email: &str,
        code: &str,
    ) -> Result<(), ConfirmationNotificationError> {
        let message = self.render(email, code);

        self.sender
            .send_email(&message)
            .await
            .map_err(ConfirmationNotificationError::EmailSendingFailed)
    }
}
