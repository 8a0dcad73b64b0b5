// Módulo de mapas: trait común + implementación Mapbox GL JS

pub mod route_layer;
pub mod traits;
pub mod web;

pub use route_layer::{remove_route, route_layer_spec, show_route};
pub use traits::{ErrorSlots, RouteLayerHost};
pub use web::WebRouteMap;
