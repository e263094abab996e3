//! Integration tests for the review conversation over the in-memory store.
//!
//! These tests run the real engine, analyzer and generator against
//! `InMemoryOrderRepository` and verify:
//! 1. Every purchased product is scored and answered
//! 2. The order ends up `reviewed` exactly when the session completes
//! 3. A failed session leaves earlier scores in place

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

use reviewbot::adapters::{
    BinaryResponseGenerator, GradedResponseGenerator, InMemoryOrderRepository,
    LengthHeuristicAnalyzer, LexiconSentimentAnalyzer,
};
use reviewbot::application::{
    PrepareReviewHandler, PrepareReviewQuery, ReviewConversationEngine, ReviewSettings,
};
use reviewbot::domain::foundation::OrderStatus;
use reviewbot::domain::order::{Customer, Order, OrderProduct, Product};
use reviewbot::domain::review::ReviewError;
use reviewbot::ports::{ChannelError, Frame, OrderRepository, ReviewChannel};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Channel that answers from a script and keeps everything sent to it.
struct ScriptedCustomer {
    answers: VecDeque<Frame>,
    sent: Vec<Frame>,
}

impl ScriptedCustomer {
    fn answering(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| Frame::text(*a)).collect(),
            sent: Vec::new(),
        }
    }

    fn sent_texts(&self) -> Vec<String> {
        self.sent.iter().map(Frame::to_text).collect()
    }
}

#[async_trait]
impl ReviewChannel for ScriptedCustomer {
    async fn send(&mut self, frame: Frame) -> Result<(), ChannelError> {
        self.sent.push(frame);
        Ok(())
    }

    async fn receive(&mut self) -> Result<Frame, ChannelError> {
        self.answers.pop_front().ok_or(ChannelError::Closed)
    }
}

async fn seeded_order(
    repository: &InMemoryOrderRepository,
    status: OrderStatus,
    product_names: &[&str],
) -> Order {
    let order = Order::new(Customer::new("Jane", "Doe", "jane@example.com"), status);
    let lines = product_names
        .iter()
        .map(|name| OrderProduct::new(order.id, 1, Product::named(*name)))
        .collect();
    repository.seed(order.clone(), lines).await;
    order
}

fn length_engine(repository: Arc<InMemoryOrderRepository>) -> ReviewConversationEngine {
    ReviewConversationEngine::new(
        repository,
        Arc::new(LengthHeuristicAnalyzer::new()),
        Arc::new(BinaryResponseGenerator::new()),
        ReviewSettings::default(),
    )
}

// =============================================================================
// Sessions
// =============================================================================

#[tokio::test]
async fn completed_order_is_reviewed_product_by_product() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order = seeded_order(&repository, OrderStatus::Completed, &["Tyre", "Wiper"]).await;

    let prepared = PrepareReviewHandler::new(repository.clone())
        .handle(PrepareReviewQuery { order_id: order.id })
        .await
        .unwrap();
    let mut customer = ScriptedCustomer::answering(&["ok", "bad"]);

    let summary = length_engine(repository.clone())
        .run_review_session(
            &prepared.order,
            &prepared.products,
            &mut customer,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    let scores: Vec<i64> = summary.reviews.iter().map(|r| r.score).collect();
    assert_eq!(scores, vec![1, -1]);
    for (review, line) in summary.reviews.iter().zip(&prepared.products) {
        assert_eq!(
            repository.review_score(&line.id).await,
            Some(review.score)
        );
    }
    assert_eq!(
        repository.order_status(&order.id).await,
        Some(OrderStatus::Reviewed)
    );

    let texts = customer.sent_texts();
    assert_eq!(texts.len(), 6);
    assert!(texts[0].starts_with("Hey Jane!"));
    assert!(texts[1].contains("Tyre"));
    assert_eq!(texts[2], "Happy to hear that!");
    assert!(texts[3].contains("Wiper"));
    assert_eq!(texts[4], "Sorry to hear that.");
    assert!(texts[5].ends_with("Hope to see you again Doe!"));
}

#[tokio::test]
async fn lexicon_and_graded_replies_name_the_product() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order = seeded_order(&repository, OrderStatus::Completed, &["Brake pads"]).await;
    let prepared = PrepareReviewHandler::new(repository.clone())
        .handle(PrepareReviewQuery { order_id: order.id })
        .await
        .unwrap();

    let engine = ReviewConversationEngine::new(
        repository.clone(),
        Arc::new(LexiconSentimentAnalyzer::new()),
        Arc::new(GradedResponseGenerator::new()),
        ReviewSettings::default(),
    );
    let mut customer = ScriptedCustomer::answering(&["They are great, I love them"]);

    let summary = engine
        .run_review_session(
            &prepared.order,
            &prepared.products,
            &mut customer,
            &CancellationToken::new(),
        )
        .await
        .unwrap();

    assert!(summary.reviews[0].score > 0);
    assert_eq!(summary.reviews[0].reply, "Happy to hear you enjoy Brake pads!");
}

#[tokio::test]
async fn disconnect_midway_keeps_earlier_scores_and_status() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order = seeded_order(&repository, OrderStatus::Completed, &["Tyre", "Wiper"]).await;
    let products = repository.find_order_products(&order.id).await.unwrap();
    let mut customer = ScriptedCustomer::answering(&["ok"]);

    let err = length_engine(repository.clone())
        .run_review_session(&order, &products, &mut customer, &CancellationToken::new())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReviewError::Transport {
            source: ChannelError::Closed,
            ..
        }
    ));
    assert_eq!(err.order_product_id(), Some(products[1].id));
    assert_eq!(repository.review_score(&products[0].id).await, Some(1));
    assert_eq!(repository.review_score(&products[1].id).await, None);
    assert_eq!(
        repository.order_status(&order.id).await,
        Some(OrderStatus::Completed)
    );
}

#[tokio::test]
async fn rerun_overwrites_previous_scores() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order = seeded_order(&repository, OrderStatus::Completed, &["Tyre"]).await;
    let products = repository.find_order_products(&order.id).await.unwrap();
    let engine = length_engine(repository.clone());

    let mut first = ScriptedCustomer::answering(&["ok"]);
    engine
        .run_review_session(&order, &products, &mut first, &CancellationToken::new())
        .await
        .unwrap();
    let mut second = ScriptedCustomer::answering(&["bad"]);
    engine
        .run_review_session(&order, &products, &mut second, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(repository.review_score(&products[0].id).await, Some(-1));
    assert_eq!(repository.review_count().await, 1);
}

#[tokio::test]
async fn orders_that_are_not_completed_cannot_be_prepared() {
    let repository = Arc::new(InMemoryOrderRepository::new());
    let order = seeded_order(&repository, OrderStatus::Sending, &["Tyre"]).await;

    let result = PrepareReviewHandler::new(repository.clone())
        .handle(PrepareReviewQuery { order_id: order.id })
        .await;

    assert!(result.is_err());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_product_gets_exactly_one_score(answers in prop::collection::vec("[a-z ]{0,12}", 0..8)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async {
            let repository = Arc::new(InMemoryOrderRepository::new());
            let names: Vec<String> = (0..answers.len()).map(|i| format!("Product {i}")).collect();
            let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let order = seeded_order(&repository, OrderStatus::Completed, &name_refs).await;
            let products = repository.find_order_products(&order.id).await.unwrap();

            let answer_refs: Vec<&str> = answers.iter().map(String::as_str).collect();
            let mut customer = ScriptedCustomer::answering(&answer_refs);
            let summary = length_engine(repository.clone())
                .run_review_session(&order, &products, &mut customer, &CancellationToken::new())
                .await
                .unwrap();

            prop_assert_eq!(summary.reviews.len(), answers.len());
            prop_assert_eq!(repository.review_count().await, answers.len());
            prop_assert_eq!(customer.sent.len(), 2 + 2 * answers.len());
            for (review, answer) in summary.reviews.iter().zip(&answers) {
                prop_assert_eq!(review.score, (answer.len() % 3) as i64 - 1);
            }
            prop_assert_eq!(
                repository.order_status(&order.id).await,
                Some(OrderStatus::Reviewed)
            );
            Ok(())
        })?;
    }
}
