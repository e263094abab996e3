//! Steps of a review session, used to label failures and log lines.

use std::fmt;

/// One step of the review protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewStep {
    SendWelcome,
    AskForReview,
    AwaitReview,
    AnalyzeSentiment,
    RecordScore,
    GenerateReply,
    SendReply,
    UpdateStatus,
    SendClosing,
}

impl ReviewStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStep::SendWelcome => "send_welcome",
            ReviewStep::AskForReview => "ask_for_review",
            ReviewStep::AwaitReview => "await_review",
            ReviewStep::AnalyzeSentiment => "analyze_sentiment",
            ReviewStep::RecordScore => "record_score",
            ReviewStep::GenerateReply => "generate_reply",
            ReviewStep::SendReply => "send_reply",
            ReviewStep::UpdateStatus => "update_status",
            ReviewStep::SendClosing => "send_closing",
        }
    }
}

impl fmt::Display for ReviewStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
