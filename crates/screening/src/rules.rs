//! AML detection rules
//!
//! Each rule is a stateless predicate over one validated transaction plus
//! read access to the account's stored history:
//! - [`LargeAmountRule`] - amount above a threshold
//! - [`HighFrequencyRule`] - too many stored transactions in a short window
//! - [`RapidMovementRule`] - withdrawal matching a recent deposit
//! - [`RoundAmountRule`] - whole-valued amount

use amlguard_core::{ValidatedTransaction, DEPOSIT, WITHDRAWAL};
use amlguard_persistence::{HistoryAccessor, PersistenceResult};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// One detection heuristic
#[async_trait]
pub trait Rule: Send + Sync {
    /// Stable identifier for logs
    fn code(&self) -> &'static str;

    /// Human-readable text recorded when the rule fires
    fn reason(&self) -> String;

    /// Whether the rule fires for `tx`
    async fn triggered(
        &self,
        tx: &ValidatedTransaction,
        history: &dyn HistoryAccessor,
    ) -> PersistenceResult<bool>;
}

/// Exclusive lower bound of a look-back window ending at `ts`.
///
/// A window reaching past the earliest representable instant covers all history.
fn window_start(ts: DateTime<Utc>, window: Duration) -> DateTime<Utc> {
    ts.checked_sub_signed(window)
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

// =============================================================================
// LargeAmountRule
// =============================================================================

pub struct LargeAmountRule {
    threshold: Decimal,
}

impl LargeAmountRule {
    pub fn new(threshold: Decimal) -> Self {
        Self { threshold }
    }
}

#[async_trait]
impl Rule for LargeAmountRule {
    fn code(&self) -> &'static str {
        "LARGE_AMOUNT"
    }

    fn reason(&self) -> String {
        format!("Large transaction (>{})", self.threshold)
    }

    async fn triggered(
        &self,
        tx: &ValidatedTransaction,
        _history: &dyn HistoryAccessor,
    ) -> PersistenceResult<bool> {
        Ok(tx.amount > self.threshold)
    }
}

// =============================================================================
// HighFrequencyRule
// =============================================================================

/// Fires when the account already has `min_count` stored transactions
/// strictly inside the window ending at the transaction's timestamp.
///
/// The transaction under screening is not stored yet and never counts itself.
pub struct HighFrequencyRule {
    min_count: usize,
    window: Duration,
}

impl HighFrequencyRule {
    pub fn new(min_count: usize, window: Duration) -> Self {
        Self { min_count, window }
    }
}

#[async_trait]
impl Rule for HighFrequencyRule {
    fn code(&self) -> &'static str {
        "HIGH_FREQUENCY"
    }

    fn reason(&self) -> String {
        "High frequency transaction pattern".to_string()
    }

    async fn triggered(
        &self,
        tx: &ValidatedTransaction,
        history: &dyn HistoryAccessor,
    ) -> PersistenceResult<bool> {
        let recent = history
            .find_recent_by_account(&tx.account_number, window_start(tx.timestamp, self.window))
            .await?;
        Ok(recent.len() >= self.min_count)
    }
}

// =============================================================================
// RapidMovementRule
// =============================================================================

/// Withdrawal of exactly the amount deposited into the same account within
/// the window.
pub struct RapidMovementRule {
    window: Duration,
}

impl RapidMovementRule {
    pub fn new(window: Duration) -> Self {
        Self { window }
    }
}

#[async_trait]
impl Rule for RapidMovementRule {
    fn code(&self) -> &'static str {
        "RAPID_MOVEMENT"
    }

    fn reason(&self) -> String {
        "Rapid funds movement detected".to_string()
    }

    async fn triggered(
        &self,
        tx: &ValidatedTransaction,
        history: &dyn HistoryAccessor,
    ) -> PersistenceResult<bool> {
        if !tx.is_type(WITHDRAWAL) {
            return Ok(false);
        }

        history
            .exists_matching_deposit(
                &tx.account_number,
                DEPOSIT,
                tx.amount,
                window_start(tx.timestamp, self.window),
            )
            .await
    }
}

// =============================================================================
// RoundAmountRule
// =============================================================================

/// Any whole-valued amount, regardless of magnitude.
pub struct RoundAmountRule;

#[async_trait]
impl Rule for RoundAmountRule {
    fn code(&self) -> &'static str {
        "ROUND_AMOUNT"
    }

    fn reason(&self) -> String {
        "Suspicious round amount".to_string()
    }

    async fn triggered(
        &self,
        tx: &ValidatedTransaction,
        _history: &dyn HistoryAccessor,
    ) -> PersistenceResult<bool> {
        Ok((tx.amount % Decimal::ONE).is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amlguard_core::{Disposition, Transaction};
    use amlguard_persistence::{MemoryStore, TransactionStore};
    use chrono::{DateTime, TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap()
    }

    fn validated(amount: Decimal, kind: &str, ts: DateTime<Utc>) -> ValidatedTransaction {
        ValidatedTransaction {
            account_number: "ACC1".to_string(),
            amount,
            transaction_type: Some(kind.to_string()),
            timestamp: ts,
        }
    }

    fn stored(amount: Decimal, kind: &str, ts: DateTime<Utc>) -> Transaction {
        validated(amount, kind, ts).into_transaction(Disposition::from_reasons(&[]))
    }

    async fn seed(store: &MemoryStore, count: usize, ts: DateTime<Utc>) {
        for _ in 0..count {
            store.save(&stored(dec!(10.10), "DEPOSIT", ts)).await.unwrap();
        }
    }

    #[tokio::test]
    async fn test_large_amount_is_strict() {
        let store = MemoryStore::new();
        let rule = LargeAmountRule::new(dec!(10000));

        assert!(rule.triggered(&validated(dec!(10000.01), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(!rule.triggered(&validated(dec!(10000), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(!rule.triggered(&validated(dec!(10000.00), "DEPOSIT", t0()), &store).await.unwrap());
        assert_eq!(rule.reason(), "Large transaction (>10000)");
    }

    #[tokio::test]
    async fn test_round_amount() {
        let store = MemoryStore::new();
        let rule = RoundAmountRule;

        assert!(rule.triggered(&validated(dec!(500), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(rule.triggered(&validated(dec!(500.00), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(rule.triggered(&validated(dec!(3), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(!rule.triggered(&validated(dec!(500.50), "DEPOSIT", t0()), &store).await.unwrap());
        assert!(!rule.triggered(&validated(dec!(0.01), "DEPOSIT", t0()), &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_high_frequency_threshold() {
        let rule = HighFrequencyRule::new(5, Duration::minutes(5));
        let current = validated(dec!(10.10), "DEPOSIT", t0());

        let store = MemoryStore::new();
        seed(&store, 4, t0() - Duration::minutes(2)).await;
        assert!(!rule.triggered(&current, &store).await.unwrap());

        seed(&store, 1, t0() - Duration::minutes(4)).await;
        assert!(rule.triggered(&current, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_high_frequency_window_is_exclusive() {
        let rule = HighFrequencyRule::new(5, Duration::minutes(5));
        let store = MemoryStore::new();
        seed(&store, 4, t0() - Duration::minutes(1)).await;
        // exactly at the window edge: not counted
        seed(&store, 1, t0() - Duration::minutes(5)).await;

        let current = validated(dec!(10.10), "DEPOSIT", t0());
        assert!(!rule.triggered(&current, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_high_frequency_ignores_other_accounts() {
        let rule = HighFrequencyRule::new(1, Duration::minutes(5));
        let store = MemoryStore::new();
        let mut other = stored(dec!(1.50), "DEPOSIT", t0() - Duration::minutes(1));
        other.account_number = "ACC2".to_string();
        store.save(&other).await.unwrap();

        let current = validated(dec!(10.10), "DEPOSIT", t0());
        assert!(!rule.triggered(&current, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_rapid_movement() {
        let rule = RapidMovementRule::new(Duration::hours(1));
        let withdrawal = validated(dec!(200), "WITHDRAWAL", t0());

        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "DEPOSIT", t0() - Duration::minutes(30))).await.unwrap();
        assert!(rule.triggered(&withdrawal, &store).await.unwrap());

        // lower-case type still counts as a withdrawal
        let lower = validated(dec!(200), "withdrawal", t0());
        assert!(rule.triggered(&lower, &store).await.unwrap());

        // a deposit never triggers, even with a matching prior deposit
        let deposit = validated(dec!(200), "DEPOSIT", t0());
        assert!(!rule.triggered(&deposit, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_rapid_movement_requires_exact_deposit() {
        let rule = RapidMovementRule::new(Duration::hours(1));
        let withdrawal = validated(dec!(200), "WITHDRAWAL", t0());

        let store = MemoryStore::new();
        store.save(&stored(dec!(150), "DEPOSIT", t0() - Duration::minutes(30))).await.unwrap();
        assert!(!rule.triggered(&withdrawal, &store).await.unwrap());

        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "WITHDRAWAL", t0() - Duration::minutes(30))).await.unwrap();
        assert!(!rule.triggered(&withdrawal, &store).await.unwrap());

        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "DEPOSIT", t0() - Duration::minutes(61))).await.unwrap();
        assert!(!rule.triggered(&withdrawal, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_rapid_movement_window_edge() {
        let rule = RapidMovementRule::new(Duration::hours(1));
        let withdrawal = validated(dec!(200), "WITHDRAWAL", t0());

        // exactly one hour before: outside the window
        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "DEPOSIT", t0() - Duration::minutes(60))).await.unwrap();
        assert!(!rule.triggered(&withdrawal, &store).await.unwrap());

        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "DEPOSIT", t0() - Duration::seconds(3599))).await.unwrap();
        assert!(rule.triggered(&withdrawal, &store).await.unwrap());
    }

    #[tokio::test]
    async fn test_window_past_earliest_instant_covers_all_history() {
        let early = Utc.with_ymd_and_hms(0, 1, 1, 0, 0, 0).unwrap();
        let store = MemoryStore::new();
        store.save(&stored(dec!(200), "DEPOSIT", early)).await.unwrap();

        let rule = RapidMovementRule::new(Duration::MAX);
        let withdrawal = validated(dec!(200), "WITHDRAWAL", early + Duration::minutes(1));
        assert!(rule.triggered(&withdrawal, &store).await.unwrap());

        let rule = HighFrequencyRule::new(1, Duration::MAX);
        assert!(rule.triggered(&withdrawal, &store).await.unwrap());
    }

    #[test]
    fn test_window_start_saturates() {
        assert_eq!(window_start(t0(), Duration::minutes(5)), t0() - Duration::minutes(5));
        assert_eq!(window_start(DateTime::<Utc>::MIN_UTC, Duration::minutes(5)), DateTime::<Utc>::MIN_UTC);
    }
}
