//! Review conversation domain module.
//!
//! Vocabulary of one review session: the steps it walks through, the
//! per-session state machine, the texts sent to the customer, the error
//! taxonomy and the summary of a finished session. The orchestration itself
//! lives in the application layer, where the ports are wired in.

mod errors;
mod messages;
mod state;
mod step;
mod summary;

pub use errors::ReviewError;
pub use messages::{ask_for_review_message, closing_message, welcome_message};
pub use state::{ReviewProgress, ReviewSessionState};
pub use step::ReviewStep;
pub use summary::{ProductReview, ReviewSessionSummary};
