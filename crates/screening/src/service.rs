//! Screening Orchestrator
//!
//! Received → Validated → Scored → Disposed → Persisted, or Rejected on a
//! validation error. Disposition is computed fully before the single atomic
//! write of the transaction and its alert.

use crate::alert::AlertPublisher;
use crate::config::ScreeningConfig;
use crate::engine::RuleEngine;
use crate::error::ScreeningResult;
use amlguard_core::{
    validate, Alert, Clock, Disposition, SystemClock, Transaction, TransactionRequest,
    ValidatedTransaction,
};
use amlguard_persistence::TransactionStore;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Screens transactions against the rule set and persists the outcome
pub struct ScreeningService<S> {
    store: Arc<S>,
    engine: RuleEngine,
    publisher: AlertPublisher,
    clock: Arc<dyn Clock>,
    feed: broadcast::Sender<Transaction>,
}

impl<S: TransactionStore> ScreeningService<S> {
    /// Service with the standard rule set and the wall clock
    pub fn new(store: Arc<S>, config: &ScreeningConfig) -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let (feed, _) = broadcast::channel(config.feed_capacity.max(1));

        Self {
            store,
            engine: RuleEngine::new(config),
            publisher: AlertPublisher::new(clock.clone()),
            clock,
            feed,
        }
    }

    /// Replace the time source used for default timestamps and alerts
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.publisher = AlertPublisher::new(clock.clone());
        self.clock = clock;
        self
    }

    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Receive every screened transaction after it is committed
    pub fn subscribe(&self) -> broadcast::Receiver<Transaction> {
        self.feed.subscribe()
    }

    /// Validate, score, dispose and persist one transaction.
    ///
    /// On a validation error nothing is read or written. On a store error
    /// neither the transaction nor its alert is committed.
    pub async fn screen(&self, request: TransactionRequest) -> ScreeningResult<Transaction> {
        let (transaction, alert) = self.dispose(request).await?;

        let record = self
            .store
            .commit_screening(&transaction, alert.as_ref())
            .await
            .inspect_err(|e| tracing::error!(error = %e, "Failed to persist screening"))?;

        tracing::info!(
            id = record.transaction.id,
            account = %record.transaction.account_number,
            suspicious = record.transaction.suspicious,
            status = %record.transaction.status,
            alert_id = record.alert.as_ref().and_then(|a| a.id),
            "Screening completed"
        );

        if self.feed.send(record.transaction.clone()).is_err() {
            tracing::trace!(id = record.transaction.id, "No live feed subscribers");
        }

        Ok(record.transaction)
    }

    /// Screen without persisting: the returned transaction has no identity
    /// and no alert is raised.
    pub async fn preview(&self, request: TransactionRequest) -> ScreeningResult<Transaction> {
        let (transaction, _) = self.dispose(request).await?;
        Ok(transaction)
    }

    pub async fn list_all(&self) -> ScreeningResult<Vec<Transaction>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn list_suspicious(&self) -> ScreeningResult<Vec<Transaction>> {
        Ok(self.store.find_suspicious().await?)
    }

    pub async fn list_alerts(&self) -> ScreeningResult<Vec<Alert>> {
        Ok(self.store.find_alerts().await?)
    }

    async fn dispose(
        &self,
        request: TransactionRequest,
    ) -> ScreeningResult<(Transaction, Option<Alert>)> {
        let validated = validate(request, self.clock.now())
            .inspect_err(|e| tracing::warn!(error = %e, "Transaction rejected"))?;

        let reasons = self.score(&validated).await?;

        let transaction = validated.into_transaction(Disposition::from_reasons(&reasons));
        let alert = self.publisher.create_alert(&transaction);
        Ok((transaction, alert))
    }

    async fn score(&self, validated: &ValidatedTransaction) -> ScreeningResult<Vec<String>> {
        let evaluation = self
            .engine
            .evaluate(validated, self.store.as_ref())
            .await
            .inspect_err(|e| {
                tracing::error!(
                    account = %validated.account_number,
                    error = %e,
                    "History lookup failed"
                )
            })?;

        for rule in &evaluation.triggered {
            tracing::info!(
                rule = rule.code,
                account = %validated.account_number,
                amount = %validated.amount,
                "Rule triggered"
            );
        }

        Ok(evaluation.reasons())
    }
}
