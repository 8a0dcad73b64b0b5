pub mod map_viewmodel;
pub mod route_viewmodel;
pub mod trail_viewmodel;

pub use map_viewmodel::MapViewModel;
pub use route_viewmodel::RouteViewModel;
pub use trail_viewmodel::{LoadOutcome, TrailViewModel};
