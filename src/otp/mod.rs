//! One-time-passcode verification, passed straight through to the SMS
//! verification provider. Nothing is stored locally.

pub mod codes;
pub mod types;

pub use codes::{map_provider_error, OtpAction};
pub use types::{SendOtpRequest, SendOtpResponse, VerifyOtpRequest, VerifyOtpResponse};
