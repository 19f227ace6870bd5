//! Request matching between recorded tracks and incoming requests.
//!
//! A policy is an ordered list of [`MatchType`]s; a track matches when every
//! entry accepts the (recorded, incoming) pair. Predicates are pure, so the
//! evaluation order never changes the outcome.
//!
//! # Module Structure
//!
//! - `request` - `PlaybackRequest` view and the host's `IncomingRequest`
//! - `match_type` - `MatchType` variants and their dispatch
//! - `query` - sorted query parameter extraction

mod match_type;
mod query;
mod request;

pub use match_type::{all_match, CustomMatcher, MatchType};
pub use query::{query_matches, sorted_query_items};
pub use request::{IncomingRequest, PlaybackRequest};
