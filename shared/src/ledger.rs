//! The transaction ledger: an append-only, newest-first record list with
//! filtered and paginated views for the history table.

use crate::{Transaction, TransactionKind, TransactionStatus};
use serde::{Deserialize, Serialize};

/// Rows shown per page of the transaction history table.
pub const PAGE_SIZE: usize = 5;

/// Filter criteria for a ledger view. `None` on kind/status means "all".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionQuery {
    pub search: String,
    pub kind: Option<TransactionKind>,
    pub status: Option<TransactionStatus>,
}

impl TransactionQuery {
    fn matches(&self, transaction: &Transaction) -> bool {
        let search = self.search.trim();
        let matches_search = search.is_empty()
            || transaction
                .description
                .to_lowercase()
                .contains(&search.to_lowercase())
            || transaction.account_number.contains(search);
        let matches_kind = self.kind.map_or(true, |kind| transaction.kind == kind);
        let matches_status = self
            .status
            .map_or(true, |status| transaction.status == status);

        matches_search && matches_kind && matches_status
    }
}

/// One page of query results, with the page index already clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerPage {
    pub transactions: Vec<Transaction>,
    pub page: usize,
    pub total_pages: usize,
    pub match_count: usize,
}

/// Ordered collection of all transactions, newest first. Records are
/// immutable once appended; the only mutation is inserting at the head.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Append a new record at the head of the ledger.
    pub fn record(&mut self, transaction: Transaction) {
        self.transactions.insert(0, transaction);
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// The ordered subsequence matching the query. All criteria are
    /// conjunctive.
    pub fn query(&self, query: &TransactionQuery) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| query.matches(transaction))
            .collect()
    }

    /// Number of pages a result set occupies; an empty result still renders
    /// one (empty) page.
    pub fn total_pages(match_count: usize) -> usize {
        match_count.div_ceil(PAGE_SIZE).max(1)
    }

    /// One page of the query results. A requested page outside
    /// `[1, total_pages]` is clamped, never an out-of-range slice.
    pub fn page(&self, query: &TransactionQuery, requested_page: usize) -> LedgerPage {
        let matches = self.query(query);
        let total_pages = Self::total_pages(matches.len());
        let page = requested_page.clamp(1, total_pages);

        let start = (page - 1) * PAGE_SIZE;
        let transactions = matches
            .iter()
            .skip(start)
            .take(PAGE_SIZE)
            .map(|t| (*t).clone())
            .collect();

        LedgerPage {
            transactions,
            page,
            total_pages,
            match_count: matches.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn transaction(
        id: u64,
        description: &str,
        kind: TransactionKind,
        status: TransactionStatus,
        account_number: &str,
    ) -> Transaction {
        Transaction {
            id: Transaction::generate_id(kind, id),
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            amount: 10_000,
            kind,
            status,
            description: description.to_string(),
            account_number: account_number.to_string(),
            reference: None,
        }
    }

    fn sample_ledger() -> Ledger {
        Ledger::new(vec![
            transaction(
                1,
                "Salary deposit",
                TransactionKind::Deposit,
                TransactionStatus::Completed,
                "1234-5678-9012-3456",
            ),
            transaction(
                2,
                "ATM withdrawal",
                TransactionKind::Withdrawal,
                TransactionStatus::Completed,
                "9876-5432-1098-7654",
            ),
            transaction(
                3,
                "Transfer to savings",
                TransactionKind::Transfer,
                TransactionStatus::Completed,
                "1234-5678-9012-3456",
            ),
            transaction(
                4,
                "Transfer to investment account",
                TransactionKind::Transfer,
                TransactionStatus::Pending,
                "1234-5678-9012-3456",
            ),
            transaction(
                5,
                "Failed transaction",
                TransactionKind::Withdrawal,
                TransactionStatus::Failed,
                "9876-5432-1098-7654",
            ),
        ])
    }

    #[test]
    fn test_record_inserts_at_head() {
        let mut ledger = sample_ledger();
        let newest = transaction(
            6,
            "Client payment",
            TransactionKind::Deposit,
            TransactionStatus::Completed,
            "5678-1234-5678-9012",
        );
        ledger.record(newest.clone());

        assert_eq!(ledger.len(), 6);
        assert_eq!(ledger.transactions()[0], newest);
    }

    #[test]
    fn test_search_is_case_insensitive_on_description() {
        let ledger = sample_ledger();
        let query = TransactionQuery {
            search: "salary".to_string(),
            ..Default::default()
        };

        let matches = ledger.query(&query);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].description, "Salary deposit");
    }

    #[test]
    fn test_search_matches_account_number_substring() {
        let ledger = sample_ledger();
        let query = TransactionQuery {
            search: "9876-5432".to_string(),
            ..Default::default()
        };

        assert_eq!(ledger.query(&query).len(), 2);
    }

    #[test]
    fn test_kind_filter_returns_only_that_kind() {
        let ledger = sample_ledger();
        let query = TransactionQuery {
            kind: Some(TransactionKind::Deposit),
            ..Default::default()
        };

        let matches = ledger.query(&query);
        assert_eq!(matches.len(), 1);
        assert!(matches
            .iter()
            .all(|t| t.kind == TransactionKind::Deposit));
    }

    #[test]
    fn test_combined_filters_are_conjunctive() {
        let ledger = sample_ledger();

        // "Transfer" + pending matches exactly the pending transfer.
        let query = TransactionQuery {
            search: "Transfer".to_string(),
            status: Some(TransactionStatus::Pending),
            ..Default::default()
        };
        let matches = ledger.query(&query);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].description, "Transfer to investment account");

        // A conjunction with no satisfying record returns nothing.
        let query = TransactionQuery {
            search: "Salary".to_string(),
            status: Some(TransactionStatus::Failed),
            ..Default::default()
        };
        assert!(ledger.query(&query).is_empty());
    }

    #[test]
    fn test_pagination_splits_at_page_size() {
        let mut ledger = sample_ledger();
        ledger.record(transaction(
            6,
            "Interest credit",
            TransactionKind::Deposit,
            TransactionStatus::Completed,
            "1234-5678-9012-3456",
        ));
        ledger.record(transaction(
            7,
            "Bill payment",
            TransactionKind::Withdrawal,
            TransactionStatus::Completed,
            "9876-5432-1098-7654",
        ));

        let query = TransactionQuery::default();
        let first = ledger.page(&query, 1);
        assert_eq!(first.transactions.len(), PAGE_SIZE);
        assert_eq!(first.total_pages, 2);
        assert_eq!(first.match_count, 7);

        let second = ledger.page(&query, 2);
        assert_eq!(second.transactions.len(), 2);
    }

    #[test]
    fn test_page_request_beyond_last_is_clamped() {
        let ledger = sample_ledger();
        let query = TransactionQuery::default();

        let page = ledger.page(&query, 99);
        assert_eq!(page.page, 1);
        assert_eq!(page.transactions.len(), 5);

        let page = ledger.page(&query, 0);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn test_empty_result_still_has_one_page() {
        let ledger = sample_ledger();
        let query = TransactionQuery {
            search: "no such description".to_string(),
            ..Default::default()
        };

        let page = ledger.page(&query, 3);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.transactions.is_empty());
        assert_eq!(page.match_count, 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(Ledger::total_pages(0), 1);
        assert_eq!(Ledger::total_pages(5), 1);
        assert_eq!(Ledger::total_pages(6), 2);
        assert_eq!(Ledger::total_pages(11), 3);
    }
}
