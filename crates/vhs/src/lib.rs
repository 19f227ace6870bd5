//! VHS: replay recorded HTTP interactions from JSON fixtures.
//!
//! A fixture loads into a [`Cassette`] of [`Track`]s. A [`Vcr`] plays a
//! cassette back, choosing the track for each incoming request by cassette
//! order or by a list of [`MatchType`]s, once or in a loop.
//!
//! ```no_run
//! use vhs::{FixtureStore, IncomingRequest, MatchType, PlaybackOrder, ReplayMode, Vcr};
//!
//! # fn main() -> Result<(), vhs::VcrError> {
//! let cassette = FixtureStore::from_env().load("vinyl_method_path_and_headers")?;
//! let vcr = Vcr::new(
//!     &cassette,
//!     PlaybackOrder::matching([MatchType::Method, MatchType::Path]),
//!     ReplayMode::Once,
//! )?;
//! let response = vcr.play(&IncomingRequest::get("http://api.test1.com/get/with/no/headers")?)?;
//! assert_eq!(response.status, Some(200));
//! # Ok(())
//! # }
//! ```

pub mod cassette;
pub mod config;
pub mod content;
pub mod error;
pub mod predicate;
pub mod response;
pub mod sequence;
pub mod track;
pub mod vcr;

pub use cassette::{Cassette, FixtureStore};
pub use config::PlaybackConfig;
pub use content::ContentKind;
pub use error::VcrError;
pub use predicate::{IncomingRequest, MatchType, PlaybackRequest};
pub use response::MatchedResponse;
pub use sequence::{PlaybackOrder, ReplayMode, Sequencer};
pub use track::{BodySchema, Method, Track};
pub use vcr::{DataTask, TaskIdentifiers, TaskOutcome, TaskState, Vcr};
