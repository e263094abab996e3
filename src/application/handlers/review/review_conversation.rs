//! ReviewConversationEngine - drives one review session over a channel.
//!
//! For one completed order it greets the customer, then for each purchased
//! line in listing order asks for a review, waits for the answer, scores it,
//! stores the score, generates a reply and sends it back in the same frame
//! type the customer used. Afterwards the order is marked `reviewed` and a
//! closing message is sent.
//!
//! The first failing step aborts the session. Scores already stored stay
//! stored and the order keeps its previous status.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::Instrument;

use crate::domain::foundation::{OrderProductId, OrderStatus};
use crate::domain::order::{Order, OrderProduct};
use crate::domain::review::{
    ask_for_review_message, closing_message, welcome_message, ProductReview, ReviewError,
    ReviewProgress, ReviewSessionState, ReviewSessionSummary, ReviewStep,
};
use crate::ports::{
    ChannelError, Frame, OrderRepository, ResponseGenerator, ReviewChannel, SentimentAnalyzer,
};

/// Per-engine settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReviewSettings {
    /// Longest wait for a customer's answer. `None` waits indefinitely.
    pub read_timeout: Option<Duration>,
}

/// Runs review sessions. Holds no per-session state, so one engine serves
/// any number of concurrent connections.
#[derive(Clone)]
pub struct ReviewConversationEngine {
    repository: Arc<dyn OrderRepository>,
    analyzer: Arc<dyn SentimentAnalyzer>,
    generator: Arc<dyn ResponseGenerator>,
    settings: ReviewSettings,
}

impl ReviewConversationEngine {
    pub fn new(
        repository: Arc<dyn OrderRepository>,
        analyzer: Arc<dyn SentimentAnalyzer>,
        generator: Arc<dyn ResponseGenerator>,
        settings: ReviewSettings,
    ) -> Self {
        Self {
            repository,
            analyzer,
            generator,
            settings,
        }
    }

    /// Runs one complete review session for `order` over `channel`.
    ///
    /// `products` must be the order's lines in the order they should be
    /// solicited. Cancelling `cancel` makes the next channel operation fail
    /// with [`ReviewError::Cancelled`].
    pub async fn run_review_session<C>(
        &self,
        order: &Order,
        products: &[OrderProduct],
        channel: &mut C,
        cancel: &CancellationToken,
    ) -> Result<ReviewSessionSummary, ReviewError>
    where
        C: ReviewChannel + ?Sized,
    {
        let span = tracing::info_span!(
            "review_session",
            order_id = %order.id,
            products = products.len()
        );

        async move {
            let mut progress = ReviewProgress::new(products.len());
            let result = self
                .converse(order, products, channel, cancel, &mut progress)
                .await;

            match &result {
                Ok(summary) => {
                    tracing::info!(
                        reviews = summary.reviews.len(),
                        average_score = ?summary.average_score(),
                        "Review session completed"
                    );
                }
                Err(e) => {
                    let at = progress.state();
                    progress.abort();
                    tracing::warn!(
                        error = %e,
                        kind = e.kind(),
                        step = %e.step(),
                        state = %at,
                        "Review session aborted"
                    );
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    async fn converse<C>(
        &self,
        order: &Order,
        products: &[OrderProduct],
        channel: &mut C,
        cancel: &CancellationToken,
        progress: &mut ReviewProgress,
    ) -> Result<ReviewSessionSummary, ReviewError>
    where
        C: ReviewChannel + ?Sized,
    {
        let mut summary = ReviewSessionSummary::new(order.id);

        self.send(
            channel,
            cancel,
            Frame::text(welcome_message(order)),
            ReviewStep::SendWelcome,
            None,
        )
        .await?;
        mark(progress, ReviewSessionState::WelcomeSent);

        for (index, line) in products.iter().enumerate() {
            let review = self
                .review_line(index, line, channel, cancel, progress)
                .await?;
            summary.reviews.push(review);
        }

        self.repository
            .update_order_status(&order.id, OrderStatus::Reviewed)
            .await
            .map_err(|e| ReviewError::from_gateway(ReviewStep::UpdateStatus, None, e))?;
        mark(progress, ReviewSessionState::StatusUpdated);

        self.send(
            channel,
            cancel,
            Frame::text(closing_message(order)),
            ReviewStep::SendClosing,
            None,
        )
        .await?;
        mark(progress, ReviewSessionState::Closed);

        Ok(summary)
    }

    async fn review_line<C>(
        &self,
        index: usize,
        line: &OrderProduct,
        channel: &mut C,
        cancel: &CancellationToken,
        progress: &mut ReviewProgress,
    ) -> Result<ProductReview, ReviewError>
    where
        C: ReviewChannel + ?Sized,
    {
        self.send(
            channel,
            cancel,
            Frame::text(ask_for_review_message(line)),
            ReviewStep::AskForReview,
            Some(line.id),
        )
        .await?;
        mark(progress, ReviewSessionState::AwaitingReview(index));

        let inbound = self.receive(channel, cancel, line.id).await?;
        let review_text = inbound.to_text();

        let sentiment = self
            .analyzer
            .process(&review_text)
            .await
            .map_err(|source| ReviewError::Analysis {
                order_product_id: line.id,
                source,
            })?;

        self.repository
            .record_review(&line.id, sentiment.sentiment_score)
            .await
            .map_err(|e| ReviewError::from_gateway(ReviewStep::RecordScore, Some(line.id), e))?;
        mark(progress, ReviewSessionState::ScoreRecorded(index));

        tracing::debug!(
            order_product_id = %line.id,
            product = line.product_name(),
            score = sentiment.sentiment_score,
            "Review scored"
        );

        let reply = self
            .generator
            .generate(&sentiment, line.product_name())
            .await
            .map_err(|source| ReviewError::Generation {
                order_product_id: line.id,
                source,
            })?;

        self.send(
            channel,
            cancel,
            Frame::with_kind(inbound.kind, reply.response.clone()),
            ReviewStep::SendReply,
            Some(line.id),
        )
        .await?;
        mark(progress, ReviewSessionState::ReplySent(index));

        Ok(ProductReview {
            order_product_id: line.id,
            product_name: line.product_name().to_string(),
            score: sentiment.sentiment_score,
            reply: reply.response,
        })
    }

    async fn send<C>(
        &self,
        channel: &mut C,
        cancel: &CancellationToken,
        frame: Frame,
        step: ReviewStep,
        order_product_id: Option<OrderProductId>,
    ) -> Result<(), ReviewError>
    where
        C: ReviewChannel + ?Sized,
    {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReviewError::Cancelled { step, order_product_id }),
            result = channel.send(frame) => result.map_err(|source| ReviewError::Transport {
                step,
                order_product_id,
                source,
            }),
        }
    }

    async fn receive<C>(
        &self,
        channel: &mut C,
        cancel: &CancellationToken,
        order_product_id: OrderProductId,
    ) -> Result<Frame, ReviewError>
    where
        C: ReviewChannel + ?Sized,
    {
        let step = ReviewStep::AwaitReview;
        let read_timeout = self.settings.read_timeout;
        let read = async move {
            match read_timeout {
                Some(limit) => match tokio::time::timeout(limit, channel.receive()).await {
                    Ok(result) => result,
                    Err(_) => Err(ChannelError::Timeout(limit)),
                },
                None => channel.receive().await,
            }
        };

        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ReviewError::Cancelled {
                step,
                order_product_id: Some(order_product_id),
            }),
            result = read => result.map_err(|source| ReviewError::Transport {
                step,
                order_product_id: Some(order_product_id),
                source,
            }),
        }
    }
}

/// Records a state change. The engine drives the states in sequence, so a
/// rejected transition is a bug worth logging but not worth failing over.
fn mark(progress: &mut ReviewProgress, state: ReviewSessionState) {
    match progress.advance(state) {
        Ok(()) => tracing::trace!(state = %state, "Review session state changed"),
        Err(e) => tracing::error!(error = %e, "Review session state out of sequence"),
    }
}
