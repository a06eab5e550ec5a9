use crate::address::RawPlaceResult;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Outbound seam to the places-search provider.
///
/// Implementations report a missing credential as
/// [`QuoteError::Configuration`](crate::error::QuoteError::Configuration)
/// before attempting any network I/O.
#[async_trait]
pub trait PlacesSearchPort: Send + Sync {
    async fn search_text(&self, query: &str) -> Result<Vec<RawPlaceResult>>;
}

/// Outbound seam to the SMS verification provider.
///
/// Provider rejections come back as
/// [`QuoteError::Provider`](crate::error::QuoteError::Provider) carrying the
/// provider's numeric code.
#[async_trait]
pub trait VerificationPort: Send + Sync {
    async fn send_code(&self, to: &str) -> Result<VerificationTicket>;
    async fn check_code(&self, to: &str, code: &str) -> Result<VerificationTicket>;
}

/// What the verification provider reports about a verification attempt
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerificationTicket {
    #[serde(default)]
    pub sid: String,
    #[serde(default)]
    pub status: String,
}
