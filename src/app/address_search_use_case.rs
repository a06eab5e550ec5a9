use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::address::{normalize_places, NormalizedAddress};
use crate::app::ports::PlacesSearchPort;
use crate::constants::{MSG_POSTCODE_REQUIRED, MSG_SEARCH_FAILED};
use crate::error::{QuoteError, Result};

/// Use case for resolving a free-text postcode into canonical addresses
pub struct AddressSearchUseCase {
    places: Arc<dyn PlacesSearchPort>,
}

impl AddressSearchUseCase {
    pub fn new(places: Arc<dyn PlacesSearchPort>) -> Self {
        Self { places }
    }

    /// Searches the places provider and normalizes the results.
    ///
    /// Provider failures are logged and surfaced as [`QuoteError::Upstream`];
    /// a missing credential stays a [`QuoteError::Configuration`]. Either way
    /// nothing partial is returned.
    #[instrument(skip(self))]
    pub async fn normalize(&self, query: &str) -> Result<Vec<NormalizedAddress>> {
        if query.is_empty() {
            return Err(QuoteError::InvalidRequest(MSG_POSTCODE_REQUIRED.to_string()));
        }

        let places = match self.places.search_text(query).await {
            Ok(places) => places,
            Err(QuoteError::Configuration(message)) => {
                error!(%message, "Places search is not configured");
                return Err(QuoteError::Configuration(message));
            }
            Err(e) => {
                error!(error = %e, "Places search failed");
                return Err(QuoteError::Upstream(MSG_SEARCH_FAILED.to_string()));
            }
        };

        let addresses = normalize_places(query, &places);
        info!(
            results = places.len(),
            usable = addresses.len(),
            "Address search completed"
        );
        Ok(addresses)
    }
}
