use crate::address::{PlacesResponse, RawPlaceResult};
use crate::app::ports::PlacesSearchPort;
use crate::config::{BoundingBox, PlacesSettings};
use crate::constants::{
    MSG_PLACES_NOT_CONFIGURED, PLACES_API_KEY_HEADER, PLACES_FIELD_MASK, PLACES_FIELD_MASK_HEADER,
};
use crate::error::{QuoteError, Result};
use async_trait::async_trait;
use serde::Serialize;
use tracing::{debug, instrument, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchTextRequest {
    pub text_query: String,
    pub location_bias: LocationBias,
    pub max_result_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationBias {
    pub rectangle: Rectangle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rectangle {
    pub low: LatLng,
    pub high: LatLng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLng {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<BoundingBox> for Rectangle {
    fn from(bounds: BoundingBox) -> Self {
        Self {
            low: LatLng {
                latitude: bounds.low_latitude,
                longitude: bounds.low_longitude,
            },
            high: LatLng {
                latitude: bounds.high_latitude,
                longitude: bounds.high_longitude,
            },
        }
    }
}

/// Google Places (New) text search client
pub struct GooglePlacesClient {
    client: reqwest::Client,
    api_key: Option<String>,
    settings: PlacesSettings,
}

impl GooglePlacesClient {
    pub fn new(api_key: Option<String>, settings: PlacesSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            settings,
        }
    }

    pub fn request_body(&self, query: &str) -> SearchTextRequest {
        SearchTextRequest {
            text_query: query.to_string(),
            location_bias: LocationBias {
                rectangle: self.settings.location_bias.into(),
            },
            max_result_count: self.settings.max_result_count,
        }
    }
}

#[async_trait]
impl PlacesSearchPort for GooglePlacesClient {
    #[instrument(skip(self))]
    async fn search_text(&self, query: &str) -> Result<Vec<RawPlaceResult>> {
        // Checked before any network I/O
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| QuoteError::Configuration(MSG_PLACES_NOT_CONFIGURED.to_string()))?;

        let response = self
            .client
            .post(&self.settings.endpoint)
            .header(PLACES_API_KEY_HEADER, api_key)
            .header(PLACES_FIELD_MASK_HEADER, PLACES_FIELD_MASK)
            .json(&self.request_body(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), %body, "Places search returned an error status");
            return Err(QuoteError::Upstream(format!(
                "Google Places API error: {}",
                status.as_u16()
            )));
        }

        let payload: PlacesResponse = response.json().await?;
        debug!("Places search returned {} results", payload.places.len());
        Ok(payload.places)
    }
}
