// Outbound adapters implementing the application ports

pub mod places_client;
pub mod twilio_verify;

pub use places_client::GooglePlacesClient;
pub use twilio_verify::TwilioVerifyClient;
