/// Places provider and verification provider constants shared across the codebase

// Google Places (New) text search
pub const PLACES_SEARCH_ENDPOINT: &str = "https://places.googleapis.com/v1/places:searchText";
pub const PLACES_API_KEY_HEADER: &str = "X-Goog-Api-Key";
pub const PLACES_FIELD_MASK_HEADER: &str = "X-Goog-FieldMask";
pub const PLACES_FIELD_MASK: &str =
    "places.displayName,places.formattedAddress,places.addressComponents,places.types";
pub const PLACES_MAX_RESULT_COUNT: u32 = 20;

// Location bias rectangle covering the United Kingdom (SW corner, NE corner)
pub const UK_LOW_LATITUDE: f64 = 49.5;
pub const UK_LOW_LONGITUDE: f64 = -10.5;
pub const UK_HIGH_LATITUDE: f64 = 60.9;
pub const UK_HIGH_LONGITUDE: f64 = 1.8;

pub const DEFAULT_COUNTRY: &str = "United Kingdom";

// Twilio Verify v2
pub const VERIFY_BASE_URL: &str = "https://verify.twilio.com";
pub const VERIFY_CHANNEL_SMS: &str = "sms";
pub const VERIFY_STATUS_APPROVED: &str = "approved";

// Environment variables holding provider credentials
pub const ENV_PLACES_API_KEY: &str = "GOOGLE_PLACES_API_KEY";
pub const ENV_TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
pub const ENV_TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
pub const ENV_TWILIO_VERIFY_SID: &str = "TWILIO_VERIFY_SID";

// User-facing messages
pub const MSG_PLACES_NOT_CONFIGURED: &str = "Google Places API key not configured";
pub const MSG_SEARCH_FAILED: &str = "Failed to search addresses";
pub const MSG_POSTCODE_REQUIRED: &str = "Postcode is required";
pub const MSG_SERVER_CONFIGURATION: &str = "Server configuration error";
