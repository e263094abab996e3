//! Review conversation handlers.

mod prepare_review;
mod review_conversation;

pub use prepare_review::{PrepareReviewHandler, PrepareReviewQuery, PreparedReview};
pub use review_conversation::{ReviewConversationEngine, ReviewSettings};
