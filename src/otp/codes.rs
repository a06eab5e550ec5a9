use crate::constants::MSG_SERVER_CONFIGURATION;
use crate::error::QuoteError;
use tracing::error;

// Twilio error codes with a user-facing meaning
pub const INVALID_PARAMETER: u32 = 20003;
pub const NOT_FOUND: u32 = 20404;
pub const INVALID_PHONE_NUMBER: u32 = 60200;
pub const MAX_CHECK_ATTEMPTS: u32 = 60202;
pub const INVALID_CODE: u32 = 60203;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpAction {
    Send,
    Verify,
}

impl OtpAction {
    fn generic_failure(self) -> &'static str {
        match self {
            OtpAction::Send => "Failed to send verification code",
            OtpAction::Verify => "Failed to verify code",
        }
    }

    fn known_code(self, code: u32) -> Option<(u16, &'static str)> {
        match (self, code) {
            (OtpAction::Send, INVALID_PARAMETER) => Some((400, "Invalid phone number format")),
            (OtpAction::Send, NOT_FOUND) => Some((400, "The phone number is not valid")),
            (OtpAction::Send, INVALID_PHONE_NUMBER) => Some((400, "Invalid phone number")),
            (OtpAction::Verify, NOT_FOUND) => {
                Some((400, "Verification code has expired or is invalid"))
            }
            (OtpAction::Verify, MAX_CHECK_ATTEMPTS) => {
                Some((429, "Maximum number of verification attempts reached"))
            }
            (OtpAction::Verify, INVALID_CODE) => Some((400, "Invalid verification code")),
            _ => None,
        }
    }
}

/// Turns a verification-provider failure into the error shown to the caller.
pub fn map_provider_error(action: OtpAction, err: QuoteError) -> QuoteError {
    error!(?action, error = %err, "Verification provider call failed");
    match err {
        QuoteError::Configuration(_) => {
            QuoteError::Configuration(MSG_SERVER_CONFIGURATION.to_string())
        }
        QuoteError::Provider { code: Some(code), .. } => match action.known_code(code) {
            Some((status, message)) => QuoteError::Verification {
                status,
                message: message.to_string(),
            },
            None => QuoteError::Upstream(action.generic_failure().to_string()),
        },
        _ => QuoteError::Upstream(action.generic_failure().to_string()),
    }
}
