pub mod coordinate;
pub mod drawing;
pub mod matching;
pub mod trail;

pub use coordinate::{Coordinate, LineString};
pub use drawing::{DrawnFeature, DrawnGeometry, FeatureCollection};
pub use matching::{Leg, Maneuver, MatchResponse, Matching, Step, TravelProfile};
pub use trail::{
    FieldErrors, NewNoteRequest, Note, NoteResponse, RenameTrailRequest, StoredTrail,
    StoredTrailResponse, TrailList, TrailRecord, TripStats,
};
