use crate::app::ports::{VerificationPort, VerificationTicket};
use crate::config::TwilioCredentials;
use crate::constants::VERIFY_CHANNEL_SMS;
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{instrument, warn};

/// Error body returned by Twilio on non-2xx responses
#[derive(Debug, Default, Deserialize)]
struct TwilioErrorBody {
    #[serde(default)]
    code: Option<u32>,
    #[serde(default)]
    message: Option<String>,
}

/// Twilio Verify v2 client
pub struct TwilioVerifyClient {
    client: reqwest::Client,
    credentials: TwilioCredentials,
    base_url: String,
}

impl TwilioVerifyClient {
    pub fn new(credentials: TwilioCredentials, base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            credentials,
            base_url: base_url.into(),
        }
    }

    pub fn service_url(&self, verify_sid: &str, resource: &str) -> String {
        format!(
            "{}/v2/Services/{}/{}",
            self.base_url.trim_end_matches('/'),
            verify_sid,
            resource
        )
    }

    async fn post_form(&self, resource: &str, form: &[(&str, &str)]) -> Result<VerificationTicket> {
        let (account_sid, auth_token, verify_sid) = match (
            self.credentials.account_sid.as_deref(),
            self.credentials.auth_token.as_deref(),
            self.credentials.verify_sid.as_deref(),
        ) {
            (Some(account), Some(token), Some(service)) => (account, token, service),
            _ => {
                return Err(QuoteError::Configuration(
                    "Missing Twilio credentials".to_string(),
                ))
            }
        };

        let response = self
            .client
            .post(self.service_url(verify_sid, resource))
            .basic_auth(account_sid, Some(auth_token))
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: TwilioErrorBody = response.json().await.unwrap_or_default();
            warn!(status = status.as_u16(), code = ?body.code, "Twilio Verify rejected request");
            return Err(QuoteError::Provider {
                code: body.code,
                message: body
                    .message
                    .unwrap_or_else(|| format!("Twilio Verify error: {}", status.as_u16())),
            });
        }

        Ok(response.json::<VerificationTicket>().await?)
    }
}

#[async_trait]
impl VerificationPort for TwilioVerifyClient {
    #[instrument(skip(self))]
    async fn send_code(&self, to: &str) -> Result<VerificationTicket> {
        self.post_form("Verifications", &[("To", to), ("Channel", VERIFY_CHANNEL_SMS)])
            .await
    }

    #[instrument(skip(self, code))]
    async fn check_code(&self, to: &str, code: &str) -> Result<VerificationTicket> {
        self.post_form("VerificationCheck", &[("To", to), ("Code", code)])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_url_joins_base_and_resource() {
        let client = TwilioVerifyClient::new(TwilioCredentials::default(), "https://verify.twilio.com/");
        assert_eq!(
            client.service_url("VA42", "VerificationCheck"),
            "https://verify.twilio.com/v2/Services/VA42/VerificationCheck"
        );
    }

    #[tokio::test]
    async fn incomplete_credentials_are_a_configuration_error() {
        let credentials = TwilioCredentials {
            account_sid: Some("AC1".to_string()),
            auth_token: None,
            verify_sid: Some("VA1".to_string()),
        };
        let client = TwilioVerifyClient::new(credentials, "http://127.0.0.1:9");

        let err = client.send_code("+447700900123").await.unwrap_err();
        assert!(matches!(err, QuoteError::Configuration(_)));
    }

    #[test]
    fn error_body_tolerates_missing_fields() {
        let body: TwilioErrorBody = serde_json::from_str(r#"{"status": 429}"#).unwrap();
        assert_eq!(body.code, None);
        let body: TwilioErrorBody =
            serde_json::from_str(r#"{"code": 60202, "message": "Max check attempts reached"}"#)
                .unwrap();
        assert_eq!(body.code, Some(60202));
    }
}
