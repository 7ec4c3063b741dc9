use crate::amount::Amount;
use crate::status::TransactionStatus;
use crate::types::Transaction;

/// Dashboard summary derived from a list of transactions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransactionSummary {
    /// Transactions whose status is in the active-like set.
    pub active_count: usize,
    /// Transactions with status `completed`.
    pub completed_count: usize,
    /// Sum of amounts over the escrow-like set.
    pub escrow_total: Amount,
}

impl TransactionSummary {
    /// Currency rendering of the escrow total, `£0.00` when empty.
    pub fn escrow_total_display(&self) -> String {
        self.escrow_total.format_gbp()
    }
}

/// Single-pass reduction over a list of transactions.
///
/// Deterministic for a fixed input list; ordering of the input is irrelevant.
pub fn summarize(transactions: &[Transaction]) -> TransactionSummary {
    let mut summary = TransactionSummary::default();
    for tx in transactions {
        if tx.status.is_active_like() {
            summary.active_count += 1;
        }
        if tx.status == TransactionStatus::Completed {
            summary.completed_count += 1;
        }
        if tx.status.is_escrow_like() {
            summary.escrow_total = summary.escrow_total.saturating_add(tx.amount);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn dt(ts: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(ts, 0).single().unwrap()
    }

    fn tx(status: TransactionStatus, amount_major: i64) -> Transaction {
        Transaction::new(
            "fixture",
            Amount::from_major(amount_major),
            "GBP",
            "buyer-1",
            "seller-1",
            dt(1_754_000_000),
        )
        .with_status(status)
    }

    #[test]
    fn empty_input_yields_zero_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.active_count, 0);
        assert_eq!(summary.completed_count, 0);
        assert_eq!(summary.escrow_total_display(), "£0.00");
    }

    #[test]
    fn counts_and_sums_by_status_set() {
        let transactions = vec![
            tx(TransactionStatus::Completed, 100),
            tx(TransactionStatus::Escrow, 100),
        ];
        let summary = summarize(&transactions);
        assert_eq!(summary.completed_count, 1);
        assert_eq!(summary.active_count, 1);
        assert_eq!(summary.escrow_total_display(), "£100.00");
    }

    #[test]
    fn escrow_like_includes_disputed_holds() {
        let transactions = vec![
            tx(TransactionStatus::Escrow, 40),
            tx(TransactionStatus::Disputed, 10),
            tx(TransactionStatus::Completed, 999),
            tx(TransactionStatus::Cancelled, 999),
        ];
        let summary = summarize(&transactions);
        assert_eq!(summary.escrow_total, Amount::from_major(50));
        assert_eq!(summary.escrow_total_display(), "£50.00");
    }

    #[test]
    fn active_like_set_is_exactly_active_processing_escrow() {
        let transactions = vec![
            tx(TransactionStatus::Active, 1),
            tx(TransactionStatus::Processing, 1),
            tx(TransactionStatus::Escrow, 1),
            tx(TransactionStatus::Pending, 1),
            tx(TransactionStatus::Completed, 1),
            tx(TransactionStatus::Unknown, 1),
        ];
        assert_eq!(summarize(&transactions).active_count, 3);
    }

    #[test]
    fn order_independent() {
        let mut transactions = vec![
            tx(TransactionStatus::Escrow, 25),
            tx(TransactionStatus::Completed, 75),
            tx(TransactionStatus::Active, 5),
        ];
        let forward = summarize(&transactions);
        transactions.reverse();
        assert_eq!(summarize(&transactions), forward);
    }
}
