//! Response materialization.
//!
//! - `materialize` - sequencer decision to `MatchedResponse` or `RecordNotFound`
//! - `builder` - `hyper` response construction

mod builder;
mod materialize;

pub use builder::ResponseBuilder;
pub use materialize::{materialize, not_found_response, MatchedResponse};
