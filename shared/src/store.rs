//! The account store: accounts plus the ledger, with every balance change
//! funneled through a recorded transaction.
//!
//! Mutations return typed errors instead of silently doing nothing, so the
//! UI can render the reason a submission was rejected. On any `Err` the
//! store is left exactly as it was: no balance change and no ledger entry.

use crate::{
    ledger::Ledger,
    money, Account, AccountStatus, AccountType, Transaction, TransactionKind, TransactionStatus,
};
use chrono::{NaiveDate, Utc};
use log::info;
use thiserror::Error;

/// Minimum opening deposit for a new account: $25.00.
pub const MIN_OPENING_DEPOSIT: i64 = 2_500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Amount must be greater than zero")]
    AmountNotPositive,
    #[error(
        "Insufficient funds: requested {}, available {}",
        money::format_usd(*requested),
        money::format_usd(*balance)
    )]
    InsufficientFunds { requested: i64, balance: i64 },
    #[error("This account is closed")]
    AccountClosed,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Select a destination account")]
    MissingDestination,
    #[error("Destination account not found")]
    UnknownDestination,
    #[error("Cannot transfer into the same account")]
    SameAccountTransfer,
    #[error("Opening an account requires a deposit of at least $25.00")]
    BelowMinimumDeposit,
}

/// In-memory store of accounts and their transaction ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountStore {
    accounts: Vec<Account>,
    ledger: Ledger,
    /// Millisecond timestamp of the last generated transaction ID; IDs are
    /// kept strictly increasing so rapid submissions never collide.
    last_id_millis: u64,
}

impl AccountStore {
    pub fn new(accounts: Vec<Account>, ledger: Ledger) -> Self {
        Self {
            accounts,
            ledger,
            last_id_millis: 0,
        }
    }

    /// Store preloaded with the demo accounts and transaction history.
    pub fn seeded() -> Self {
        Self::new(crate::mock::accounts(), Ledger::new(crate::mock::transactions()))
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn account_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_by_number(&self, account_number: &str) -> Option<&Account> {
        self.accounts
            .iter()
            .find(|account| account.account_number == account_number)
    }

    /// Add `amount` cents to the account and record a completed deposit at
    /// the head of the ledger.
    pub fn deposit(&mut self, account_id: &str, amount: i64) -> Result<Transaction, StoreError> {
        let index = self.mutable_account_index(account_id)?;
        if amount <= 0 {
            return Err(StoreError::AmountNotPositive);
        }

        let account = &self.accounts[index];
        let description = format!("Deposit to {}", account.account_type.label());
        let account_number = account.account_number.clone();
        let transaction =
            self.build_transaction(TransactionKind::Deposit, amount, description, account_number, None);

        self.apply(index, amount, transaction.clone());
        info!(
            "Deposited {} into account {}",
            money::format_usd(amount),
            account_id
        );
        Ok(transaction)
    }

    /// Remove `amount` cents from the account and record a completed
    /// withdrawal. Fails without effect when the balance does not cover it.
    pub fn withdraw(&mut self, account_id: &str, amount: i64) -> Result<Transaction, StoreError> {
        let index = self.mutable_account_index(account_id)?;
        if amount <= 0 {
            return Err(StoreError::AmountNotPositive);
        }

        let account = &self.accounts[index];
        if amount > account.balance {
            return Err(StoreError::InsufficientFunds {
                requested: amount,
                balance: account.balance,
            });
        }

        let description = format!("Withdrawal from {}", account.account_type.label());
        let account_number = account.account_number.clone();
        let transaction = self.build_transaction(
            TransactionKind::Withdrawal,
            amount,
            description,
            account_number,
            None,
        );

        self.apply(index, -amount, transaction.clone());
        info!(
            "Withdrew {} from account {}",
            money::format_usd(amount),
            account_id
        );
        Ok(transaction)
    }

    /// Move `amount` cents out of the account toward `destination`, recording
    /// the destination number as the transaction reference. Only the source
    /// side is adjusted; the destination balance is untouched.
    pub fn transfer(
        &mut self,
        account_id: &str,
        destination: &str,
        amount: i64,
    ) -> Result<Transaction, StoreError> {
        let index = self.mutable_account_index(account_id)?;
        if destination.is_empty() {
            return Err(StoreError::MissingDestination);
        }
        if amount <= 0 {
            return Err(StoreError::AmountNotPositive);
        }

        let account = &self.accounts[index];
        if destination == account.account_number {
            return Err(StoreError::SameAccountTransfer);
        }
        if self.account_by_number(destination).is_none() {
            return Err(StoreError::UnknownDestination);
        }

        let account = &self.accounts[index];
        if amount > account.balance {
            return Err(StoreError::InsufficientFunds {
                requested: amount,
                balance: account.balance,
            });
        }

        let description = format!("Transfer to {}", destination);
        let account_number = account.account_number.clone();
        let transaction = self.build_transaction(
            TransactionKind::Transfer,
            amount,
            description,
            account_number,
            Some(destination.to_string()),
        );

        self.apply(index, -amount, transaction.clone());
        info!(
            "Transferred {} from account {} to {}",
            money::format_usd(amount),
            account_id,
            destination
        );
        Ok(transaction)
    }

    /// Open a new active account with an initial deposit, recorded in the
    /// ledger like any other balance change.
    pub fn open_account(
        &mut self,
        account_type: AccountType,
        initial_deposit: i64,
    ) -> Result<Account, StoreError> {
        if initial_deposit < MIN_OPENING_DEPOSIT {
            return Err(StoreError::BelowMinimumDeposit);
        }

        let today = today();
        let millis = self.next_id_millis();
        let account = Account {
            id: (self.accounts.len() + 1).to_string(),
            account_type,
            balance: initial_deposit,
            account_number: generate_account_number(millis),
            status: AccountStatus::Active,
            opened_date: today,
            interest_rate: Some(account_type.interest_rate()),
            last_transaction: Some(today),
        };

        let transaction = Transaction {
            id: Transaction::generate_id(TransactionKind::Deposit, millis),
            date: today,
            amount: initial_deposit,
            kind: TransactionKind::Deposit,
            status: TransactionStatus::Completed,
            description: format!("Initial deposit to {}", account_type.label()),
            account_number: account.account_number.clone(),
            reference: None,
        };

        self.accounts.push(account.clone());
        self.ledger.record(transaction);
        info!(
            "Opened {} {} with {}",
            account_type.label(),
            account.account_number,
            money::format_usd(initial_deposit)
        );
        Ok(account)
    }

    /// Mark an account closed. Closed accounts reject all further mutating
    /// operations.
    pub fn close_account(&mut self, account_id: &str) -> Result<(), StoreError> {
        let index = self.mutable_account_index(account_id)?;
        self.accounts[index].status = AccountStatus::Closed;
        info!("Closed account {}", account_id);
        Ok(())
    }

    fn mutable_account_index(&self, account_id: &str) -> Result<usize, StoreError> {
        let index = self
            .accounts
            .iter()
            .position(|account| account.id == account_id)
            .ok_or(StoreError::AccountNotFound)?;
        if self.accounts[index].is_closed() {
            return Err(StoreError::AccountClosed);
        }
        Ok(index)
    }

    fn build_transaction(
        &mut self,
        kind: TransactionKind,
        amount: i64,
        description: String,
        account_number: String,
        reference: Option<String>,
    ) -> Transaction {
        let millis = self.next_id_millis();
        Transaction {
            id: Transaction::generate_id(kind, millis),
            date: today(),
            amount,
            kind,
            status: TransactionStatus::Completed,
            description,
            account_number,
            reference,
        }
    }

    fn apply(&mut self, index: usize, delta: i64, transaction: Transaction) {
        let account = &mut self.accounts[index];
        account.balance += delta;
        account.last_transaction = Some(transaction.date);
        self.ledger.record(transaction);
    }

    fn next_id_millis(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last_id_millis = now.max(self.last_id_millis + 1);
        self.last_id_millis
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Derive a "dddd-dddd-dddd-dddd" account number from a timestamp seed.
fn generate_account_number(seed: u64) -> String {
    let mut state = seed ^ 0x5DEE_CE66_D00D_CAFE;
    let mut groups = Vec::with_capacity(4);
    for _ in 0..4 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        groups.push(format!("{}", 1000 + (state >> 33) % 9000));
    }
    groups.join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_store() -> AccountStore {
        AccountStore::seeded()
    }

    #[test]
    fn test_deposit_adds_exact_amount() {
        let mut store = AccountStore::new(
            vec![Account {
                id: "1".to_string(),
                account_type: AccountType::Savings,
                balance: 528_042, // $5,280.42
                account_number: "ACCT-12345".to_string(),
                status: AccountStatus::Active,
                opened_date: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
                interest_rate: Some(2.5),
                last_transaction: None,
            }],
            Ledger::default(),
        );

        let transaction = store.deposit("1", 50_000).unwrap();

        let account = store.account_by_id("1").unwrap();
        assert_eq!(account.balance, 578_042); // exactly $5,780.42
        assert_eq!(transaction.kind, TransactionKind::Deposit);
        assert_eq!(transaction.amount, 50_000);
        assert_eq!(transaction.status, TransactionStatus::Completed);
        assert_eq!(store.ledger().transactions()[0], transaction);
        assert_eq!(account.last_transaction, Some(transaction.date));
    }

    #[test]
    fn test_deposit_rejects_non_positive_amount() {
        let mut store = test_store();
        let before = store.clone();

        assert_eq!(store.deposit("1", 0), Err(StoreError::AmountNotPositive));
        assert_eq!(store.deposit("1", -100), Err(StoreError::AmountNotPositive));
        assert_eq!(store, before);
    }

    #[test]
    fn test_overdraw_leaves_store_unchanged() {
        let mut store = test_store();
        let balance = store.account_by_id("2").unwrap().balance;
        let ledger_len = store.ledger().len();

        let result = store.withdraw("2", balance + 1);
        assert_eq!(
            result,
            Err(StoreError::InsufficientFunds {
                requested: balance + 1,
                balance,
            })
        );
        assert_eq!(store.account_by_id("2").unwrap().balance, balance);
        assert_eq!(store.ledger().len(), ledger_len);
    }

    #[test]
    fn test_withdraw_whole_balance() {
        let mut store = test_store();
        let balance = store.account_by_id("2").unwrap().balance;

        let transaction = store.withdraw("2", balance).unwrap();
        assert_eq!(store.account_by_id("2").unwrap().balance, 0);
        assert_eq!(transaction.kind, TransactionKind::Withdrawal);
        assert_eq!(transaction.description, "Withdrawal from Checking Account");
    }

    #[test]
    fn test_transfer_deducts_source_only() {
        let mut store = test_store();
        let source_balance = store.account_by_id("1").unwrap().balance;
        let destination = store.account_by_id("3").unwrap().account_number.clone();
        let destination_balance = store.account_by_id("3").unwrap().balance;

        let transaction = store.transfer("1", &destination, 100_000).unwrap();

        assert_eq!(
            store.account_by_id("1").unwrap().balance,
            source_balance - 100_000
        );
        // One-sided semantics: the destination is referenced, not credited.
        assert_eq!(store.account_by_id("3").unwrap().balance, destination_balance);
        assert_eq!(transaction.reference, Some(destination.clone()));
        assert_eq!(transaction.description, format!("Transfer to {}", destination));
    }

    #[test]
    fn test_transfer_validates_destination() {
        let mut store = test_store();
        let before = store.clone();
        let own_number = store.account_by_id("1").unwrap().account_number.clone();

        assert_eq!(
            store.transfer("1", "", 10_000),
            Err(StoreError::MissingDestination)
        );
        assert_eq!(
            store.transfer("1", "0000-0000-0000-0000", 10_000),
            Err(StoreError::UnknownDestination)
        );
        assert_eq!(
            store.transfer("1", &own_number, 10_000),
            Err(StoreError::SameAccountTransfer)
        );
        assert_eq!(store, before);
    }

    #[test]
    fn test_closed_account_rejects_mutations() {
        let mut store = test_store();
        store.close_account("1").unwrap();
        let destination = store.account_by_id("2").unwrap().account_number.clone();

        assert_eq!(store.deposit("1", 100), Err(StoreError::AccountClosed));
        assert_eq!(store.withdraw("1", 100), Err(StoreError::AccountClosed));
        assert_eq!(
            store.transfer("1", &destination, 100),
            Err(StoreError::AccountClosed)
        );
        assert_eq!(store.close_account("1"), Err(StoreError::AccountClosed));
    }

    #[test]
    fn test_unknown_account() {
        let mut store = test_store();
        assert_eq!(store.deposit("99", 100), Err(StoreError::AccountNotFound));
    }

    #[test]
    fn test_open_account_enforces_minimum_deposit() {
        let mut store = test_store();
        assert_eq!(
            store.open_account(AccountType::Checking, 2_499),
            Err(StoreError::BelowMinimumDeposit)
        );

        let account = store.open_account(AccountType::Checking, 2_500).unwrap();
        assert_eq!(account.balance, 2_500);
        assert_eq!(account.status, AccountStatus::Active);
        assert_eq!(account.interest_rate, Some(0.1));
        // Opening is itself a recorded transaction.
        let head = &store.ledger().transactions()[0];
        assert_eq!(head.kind, TransactionKind::Deposit);
        assert_eq!(head.account_number, account.account_number);
    }

    #[test]
    fn test_generated_account_number_format() {
        let number = generate_account_number(1686830400000);
        let groups: Vec<&str> = number.split('-').collect();
        assert_eq!(groups.len(), 4);
        for group in groups {
            assert_eq!(group.len(), 4);
            assert!(group.parse::<u32>().unwrap() >= 1000);
        }
    }

    #[test]
    fn test_transaction_ids_are_unique_under_rapid_mutation() {
        let mut store = test_store();
        let first = store.deposit("1", 100).unwrap();
        let second = store.deposit("1", 100).unwrap();
        let third = store.withdraw("1", 100).unwrap();

        assert_ne!(first.id, second.id);
        assert_ne!(second.id, third.id);
    }
}
