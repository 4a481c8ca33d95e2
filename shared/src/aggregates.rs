//! Dashboard aggregates computed over the store.
//!
//! Each figure is a pure function of the accounts, the ledger, and an
//! explicit `today`, so the "last 30 days" window is deterministic in tests.

use crate::{
    ledger::Ledger, store::AccountStore, Account, AccountStatus, TransactionKind,
    TransactionStatus,
};
use chrono::{Days, NaiveDate};

/// The headline figures shown on the dashboard overview cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub total_balance: i64,
    pub monthly_income: i64,
    pub monthly_expenses: i64,
    pub active_accounts: usize,
}

impl Summary {
    pub fn compute(store: &AccountStore, today: NaiveDate) -> Self {
        Self {
            total_balance: total_balance(store.accounts()),
            monthly_income: monthly_income(store.ledger(), today),
            monthly_expenses: monthly_expenses(store.ledger(), today),
            active_accounts: active_accounts(store.accounts()),
        }
    }
}

/// Sum of all account balances, closed accounts included.
pub fn total_balance(accounts: &[Account]) -> i64 {
    accounts.iter().map(|account| account.balance).sum()
}

pub fn active_accounts(accounts: &[Account]) -> usize {
    accounts
        .iter()
        .filter(|account| account.status == AccountStatus::Active)
        .count()
}

/// Completed deposits dated within the trailing 30 days, inclusive of both
/// the window start and `today`.
pub fn monthly_income(ledger: &Ledger, today: NaiveDate) -> i64 {
    windowed_total(ledger, today, |kind| kind == TransactionKind::Deposit)
}

/// Completed withdrawals and transfers within the same trailing window.
/// Transfers count as money leaving, matching their one-sided recording.
pub fn monthly_expenses(ledger: &Ledger, today: NaiveDate) -> i64 {
    windowed_total(ledger, today, |kind| {
        matches!(kind, TransactionKind::Withdrawal | TransactionKind::Transfer)
    })
}

fn windowed_total(
    ledger: &Ledger,
    today: NaiveDate,
    include: impl Fn(TransactionKind) -> bool,
) -> i64 {
    let window_start = today
        .checked_sub_days(Days::new(30))
        .unwrap_or(NaiveDate::MIN);
    ledger
        .transactions()
        .iter()
        .filter(|t| t.status == TransactionStatus::Completed)
        .filter(|t| include(t.kind))
        .filter(|t| t.date >= window_start && t.date <= today)
        .map(|t| t.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock;

    fn june_15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()
    }

    #[test]
    fn test_total_balance_sums_all_accounts() {
        // 12,500.75 + 4,750.25 + 35,000.00
        assert_eq!(total_balance(&mock::accounts()), 5_225_100);
    }

    #[test]
    fn test_total_balance_includes_closed_accounts() {
        let mut accounts = mock::accounts();
        accounts[0].status = AccountStatus::Closed;
        assert_eq!(total_balance(&accounts), 5_225_100);
        assert_eq!(active_accounts(&accounts), 2);
    }

    #[test]
    fn test_monthly_income_counts_completed_deposits_only() {
        let ledger = Ledger::new(mock::transactions());
        // Salary deposit (500.00) + client payment (2,500.00); the pending
        // transfer and the failed withdrawal are out regardless of window.
        assert_eq!(monthly_income(&ledger, june_15()), 300_000);
    }

    #[test]
    fn test_monthly_expenses_count_withdrawals_and_transfers() {
        let ledger = Ledger::new(mock::transactions());
        // ATM 120.50 + online purchase 75.25 + completed transfer 1,000.00.
        assert_eq!(monthly_expenses(&ledger, june_15()), 119_575);
    }

    #[test]
    fn test_window_is_inclusive_at_both_ends() {
        let ledger = Ledger::new(mock::transactions());

        // The Jun 12 purchase sits exactly 30 days before Jul 12 and still
        // counts.
        let today = NaiveDate::from_ymd_opt(2023, 7, 12).unwrap();
        assert_eq!(monthly_expenses(&ledger, today), 119_575);

        // One day later it falls out of the window.
        let today = NaiveDate::from_ymd_opt(2023, 7, 13).unwrap();
        assert_eq!(monthly_expenses(&ledger, today), 112_050);
    }

    #[test]
    fn test_future_dated_records_are_excluded() {
        let ledger = Ledger::new(mock::transactions());
        let today = NaiveDate::from_ymd_opt(2023, 6, 9).unwrap();
        // Only the Jun 5 and Jun 8 records are on or before "today": the
        // transfer is pending and the withdrawal failed, so nothing counts.
        assert_eq!(monthly_income(&ledger, today), 0);
        assert_eq!(monthly_expenses(&ledger, today), 0);
    }

    #[test]
    fn test_summary_over_seeded_store() {
        let store = AccountStore::seeded();
        let summary = Summary::compute(&store, june_15());
        assert_eq!(summary.total_balance, 5_225_100);
        assert_eq!(summary.monthly_income, 300_000);
        assert_eq!(summary.monthly_expenses, 119_575);
        assert_eq!(summary.active_accounts, 3);
    }
}
