pub mod api_client;
pub mod geolocation;
pub mod matching_service;

pub use api_client::ApiClient;
pub use geolocation::{resolve_center, LocationResolver};
pub use matching_service::{MatchQuery, MatchingService};
