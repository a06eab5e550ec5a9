// Address search: provider wire types and the normalization transform

pub mod normalizer;
pub mod types;

pub use normalizer::{normalize_place, normalize_places};
pub use types::{AddressComponent, NormalizedAddress, PlacesResponse, RawPlaceResult};
