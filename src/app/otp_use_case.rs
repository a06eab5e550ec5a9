use std::sync::Arc;
use tracing::{info, instrument};

use crate::app::ports::VerificationPort;
use crate::error::{QuoteError, Result};
use crate::otp::{map_provider_error, OtpAction, SendOtpResponse, VerifyOtpResponse};
use crate::constants::VERIFY_STATUS_APPROVED;
use crate::phone;

/// Use case for sending and checking one-time passcodes
pub struct OtpUseCase {
    verifier: Arc<dyn VerificationPort>,
    default_country_code: String,
}

impl OtpUseCase {
    pub fn new(verifier: Arc<dyn VerificationPort>, default_country_code: impl Into<String>) -> Self {
        Self {
            verifier,
            default_country_code: default_country_code.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn send(&self, phone_number: &str) -> Result<SendOtpResponse> {
        if phone_number.trim().is_empty() {
            return Err(QuoteError::InvalidRequest("Phone number is required".to_string()));
        }
        let to = phone::to_e164(phone_number, &self.default_country_code);

        let ticket = self
            .verifier
            .send_code(&to)
            .await
            .map_err(|e| map_provider_error(OtpAction::Send, e))?;

        info!(sid = %ticket.sid, status = %ticket.status, "Verification code sent");
        Ok(SendOtpResponse {
            success: true,
            sid: ticket.sid,
            status: ticket.status,
        })
    }

    #[instrument(skip(self, code))]
    pub async fn verify(&self, phone_number: &str, code: &str) -> Result<VerifyOtpResponse> {
        if phone_number.trim().is_empty() || code.trim().is_empty() {
            return Err(QuoteError::InvalidRequest(
                "Phone number and verification code are required".to_string(),
            ));
        }
        let to = phone::to_e164(phone_number, &self.default_country_code);

        let ticket = self
            .verifier
            .check_code(&to, code.trim())
            .await
            .map_err(|e| map_provider_error(OtpAction::Verify, e))?;

        let valid = ticket.status == VERIFY_STATUS_APPROVED;
        info!(status = %ticket.status, valid, "Verification code checked");
        Ok(VerifyOtpResponse {
            success: true,
            status: ticket.status,
            valid,
        })
    }
}
