//! Demo seed data. The dashboard boots from these fixtures; everything is
//! rebuilt in memory on every page load.

use crate::{
    Account, AccountStatus, AccountType, Address, FaqEntry, MembershipTier, Notification,
    NotificationKind, SecurityLevel, SupportTicket, TicketPriority, TicketStatus, Transaction,
    TransactionKind, TransactionStatus, UserProfile,
};
use chrono::{NaiveDate, NaiveDateTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    date(year, month, day)
        .and_hms_opt(hour, minute, 0)
        .expect("valid fixture time")
}

pub fn accounts() -> Vec<Account> {
    vec![
        Account {
            id: "1".to_string(),
            account_type: AccountType::Savings,
            balance: 1_250_075, // $12,500.75
            account_number: "1234-5678-9012-3456".to_string(),
            status: AccountStatus::Active,
            opened_date: date(2022, 1, 15),
            interest_rate: Some(2.5),
            last_transaction: Some(date(2023, 6, 15)),
        },
        Account {
            id: "2".to_string(),
            account_type: AccountType::Checking,
            balance: 475_025, // $4,750.25
            account_number: "9876-5432-1098-7654".to_string(),
            status: AccountStatus::Active,
            opened_date: date(2021, 8, 20),
            interest_rate: Some(0.1),
            last_transaction: Some(date(2023, 6, 14)),
        },
        Account {
            id: "3".to_string(),
            account_type: AccountType::Investment,
            balance: 3_500_000, // $35,000.00
            account_number: "5678-1234-5678-9012".to_string(),
            status: AccountStatus::Active,
            opened_date: date(2020, 3, 10),
            interest_rate: Some(4.2),
            last_transaction: Some(date(2023, 6, 10)),
        },
    ]
}

pub fn transactions() -> Vec<Transaction> {
    let entry = |millis: u64,
                 year: i32,
                 month: u32,
                 day: u32,
                 amount: i64,
                 kind: TransactionKind,
                 status: TransactionStatus,
                 description: &str,
                 account_number: &str,
                 reference: Option<&str>| Transaction {
        id: Transaction::generate_id(kind, millis),
        date: date(year, month, day),
        amount,
        kind,
        status,
        description: description.to_string(),
        account_number: account_number.to_string(),
        reference: reference.map(str::to_string),
    };

    vec![
        entry(
            1686830400000,
            2023,
            6,
            15,
            50_000,
            TransactionKind::Deposit,
            TransactionStatus::Completed,
            "Salary deposit",
            "1234-5678-9012-3456",
            None,
        ),
        entry(
            1686744000000,
            2023,
            6,
            14,
            12_050,
            TransactionKind::Withdrawal,
            TransactionStatus::Completed,
            "ATM withdrawal",
            "9876-5432-1098-7654",
            None,
        ),
        entry(
            1686657600000,
            2023,
            6,
            13,
            100_000,
            TransactionKind::Transfer,
            TransactionStatus::Completed,
            "Transfer to savings",
            "1234-5678-9012-3456",
            Some("5678-1234-5678-9012"),
        ),
        entry(
            1686571200000,
            2023,
            6,
            12,
            7_525,
            TransactionKind::Withdrawal,
            TransactionStatus::Completed,
            "Online purchase",
            "9876-5432-1098-7654",
            None,
        ),
        entry(
            1686398400000,
            2023,
            6,
            10,
            250_000,
            TransactionKind::Deposit,
            TransactionStatus::Completed,
            "Client payment",
            "5678-1234-5678-9012",
            None,
        ),
        entry(
            1686225600000,
            2023,
            6,
            8,
            35_000,
            TransactionKind::Transfer,
            TransactionStatus::Pending,
            "Transfer to investment account",
            "1234-5678-9012-3456",
            Some("5678-1234-5678-9012"),
        ),
        entry(
            1685966400000,
            2023,
            6,
            5,
            18_000,
            TransactionKind::Withdrawal,
            TransactionStatus::Failed,
            "Failed transaction",
            "9876-5432-1098-7654",
            None,
        ),
    ]
}

pub fn notifications() -> Vec<Notification> {
    let entry = |id: &str,
                 kind: NotificationKind,
                 title: &str,
                 message: &str,
                 at: NaiveDateTime,
                 read: bool| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        timestamp: at,
        read,
    };

    vec![
        entry(
            "1",
            NotificationKind::Transaction,
            "Deposit Successful",
            "Your deposit of $500.00 has been processed successfully.",
            timestamp(2023, 6, 15, 10, 30),
            false,
        ),
        entry(
            "2",
            NotificationKind::Security,
            "New Login Detected",
            "A new login was detected from Chicago, IL. Was this you?",
            timestamp(2023, 6, 14, 18, 45),
            false,
        ),
        entry(
            "3",
            NotificationKind::Transaction,
            "Transfer Complete",
            "Your transfer of $250.00 to Account #4589 is complete.",
            timestamp(2023, 6, 14, 14, 20),
            true,
        ),
        entry(
            "4",
            NotificationKind::Security,
            "Password Changed",
            "Your account password was changed successfully.",
            timestamp(2023, 6, 13, 9, 15),
            true,
        ),
        entry(
            "5",
            NotificationKind::Transaction,
            "Withdrawal Processed",
            "Your withdrawal of $200.00 has been processed.",
            timestamp(2023, 6, 12, 16, 30),
            true,
        ),
    ]
}

pub fn tickets() -> Vec<SupportTicket> {
    vec![
        SupportTicket {
            id: "TKT-001".to_string(),
            subject: "Unable to transfer funds".to_string(),
            status: TicketStatus::InProgress,
            priority: TicketPriority::High,
            category: "Technical Issue".to_string(),
            created_date: date(2023, 6, 14),
            last_updated: date(2023, 6, 15),
        },
        SupportTicket {
            id: "TKT-002".to_string(),
            subject: "Question about account fees".to_string(),
            status: TicketStatus::Resolved,
            priority: TicketPriority::Medium,
            category: "Account Inquiry".to_string(),
            created_date: date(2023, 6, 10),
            last_updated: date(2023, 6, 12),
        },
        SupportTicket {
            id: "TKT-003".to_string(),
            subject: "Request for account statement".to_string(),
            status: TicketStatus::Closed,
            priority: TicketPriority::Low,
            category: "Document Request".to_string(),
            created_date: date(2023, 6, 5),
            last_updated: date(2023, 6, 8),
        },
    ]
}

pub fn faq_entries() -> Vec<FaqEntry> {
    let entry = |question: &str, answer: &str| FaqEntry {
        question: question.to_string(),
        answer: answer.to_string(),
    };

    vec![
        entry(
            "How do I transfer money between my accounts?",
            "You can transfer money between your accounts by going to the Dashboard, \
             selecting the account you want to transfer from, and clicking the 'Transfer' \
             button. Enter the amount and select the destination account.",
        ),
        entry(
            "What are the daily transaction limits?",
            "Daily transaction limits vary by account type: Basic accounts have a $1,000 \
             daily limit, Premium accounts have a $5,000 limit, and VIP accounts have a \
             $10,000 limit.",
        ),
        entry(
            "How do I update my personal information?",
            "You can update your personal information by going to the Profile page and \
             clicking the 'Edit Profile' button. Make your changes and click 'Save Changes' \
             to update your information.",
        ),
        entry(
            "What should I do if I suspect fraudulent activity?",
            "If you suspect fraudulent activity on your account, immediately contact our \
             security team at (555) 123-FRAUD or use the emergency contact option. We'll \
             help secure your account and investigate the issue.",
        ),
        entry(
            "How do I set up two-factor authentication?",
            "You can enable two-factor authentication in the Settings page under Security \
             Settings. Toggle the 'Two-Factor Authentication' switch and follow the setup \
             instructions.",
        ),
    ]
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: "USR-001".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        email: "john.doe@email.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        address: Address {
            street: "123 Main Street".to_string(),
            city: "New York".to_string(),
            state: "NY".to_string(),
            zip_code: "10001".to_string(),
            country: "United States".to_string(),
        },
        date_of_birth: date(1990, 5, 15),
        tier: MembershipTier::Premium,
        member_since: date(2020, 1, 15),
        last_login: timestamp(2023, 6, 15, 10, 30),
        security_level: SecurityLevel::Enhanced,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_counts() {
        assert_eq!(accounts().len(), 3);
        assert_eq!(transactions().len(), 7);
        assert_eq!(notifications().len(), 5);
        assert_eq!(tickets().len(), 3);
        assert_eq!(faq_entries().len(), 5);
    }

    #[test]
    fn test_transactions_are_newest_first() {
        let transactions = transactions();
        for pair in transactions.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn test_transaction_ids_parse() {
        for transaction in transactions() {
            let (kind, _) = Transaction::parse_id(&transaction.id).unwrap();
            assert_eq!(kind, transaction.kind);
        }
    }

    #[test]
    fn test_transfers_carry_references() {
        for transaction in transactions() {
            assert_eq!(
                transaction.reference.is_some(),
                transaction.kind == TransactionKind::Transfer
            );
        }
    }

    #[test]
    fn test_ticket_categories_are_offered_by_the_form() {
        for ticket in tickets() {
            assert!(SupportTicket::CATEGORIES.contains(&ticket.category.as_str()));
        }
    }

    #[test]
    fn test_unread_notification_count() {
        let unread = notifications().iter().filter(|n| !n.read).count();
        assert_eq!(unread, 2);
    }
}
