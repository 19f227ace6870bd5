//! Recorded HTTP interactions.
//!
//! # Module Structure
//!
//! - `method` - HTTP verb parsing (case-insensitive, defaults to GET)
//! - `types` - `Track`, `TrackRequest`, `TrackResponse`
//! - `fixture` - serde fixture records and conversion into tracks

mod fixture;
mod method;
mod types;

pub use fixture::{BodySchema, FixtureRequest, FixtureResponse, FixtureTrack};
pub use method::Method;
pub use types::{Headers, Track, TrackRequest, TrackResponse};
