use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub mod aggregates;
pub mod dates;
pub mod ledger;
pub mod mock;
pub mod money;
pub mod store;
pub mod validate;

/// Badge styling variants used across the dashboard. Every enum that the UI
/// renders as a badge maps itself onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BadgeVariant {
    Default,
    Secondary,
    Outline,
    Destructive,
}

impl BadgeVariant {
    pub fn css_class(&self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge badge-default",
            BadgeVariant::Secondary => "badge badge-secondary",
            BadgeVariant::Outline => "badge badge-outline",
            BadgeVariant::Destructive => "badge badge-destructive",
        }
    }
}

/// Category of bank account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountType {
    Savings,
    Checking,
    Investment,
}

impl AccountType {
    pub const ALL: [AccountType; 3] = [
        AccountType::Savings,
        AccountType::Checking,
        AccountType::Investment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings Account",
            AccountType::Checking => "Checking Account",
            AccountType::Investment => "Investment Account",
        }
    }

    /// Default annual interest rate (percent) granted when an account of
    /// this type is opened.
    pub fn interest_rate(&self) -> f64 {
        match self {
            AccountType::Savings => 2.5,
            AccountType::Checking => 0.1,
            AccountType::Investment => 4.2,
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
    Closed,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
            AccountStatus::Closed => "Closed",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            AccountStatus::Active => BadgeVariant::Default,
            AccountStatus::Inactive => BadgeVariant::Secondary,
            AccountStatus::Closed => BadgeVariant::Destructive,
        }
    }
}

/// A balance-holding account. The balance is stored in cents and is never
/// mutated outside a recorded transaction; closed accounts accept no further
/// mutating operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub account_type: AccountType,
    /// Current balance in cents.
    pub balance: i64,
    /// Opaque formatted account number ("1234-5678-9012-3456").
    pub account_number: String,
    pub status: AccountStatus,
    pub opened_date: NaiveDate,
    /// Annual interest rate in percent, when the product carries one.
    pub interest_rate: Option<f64>,
    /// Date of the most recent transaction against this account.
    pub last_transaction: Option<NaiveDate>,
}

impl Account {
    pub fn is_closed(&self) -> bool {
        self.status == AccountStatus::Closed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
    Transfer,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 3] = [
        TransactionKind::Deposit,
        TransactionKind::Withdrawal,
        TransactionKind::Transfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::Transfer => "Transfer",
        }
    }

    fn id_segment(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
            TransactionKind::Transfer => "transfer",
        }
    }

    fn from_id_segment(segment: &str) -> Option<TransactionKind> {
        match segment {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            "transfer" => Some(TransactionKind::Transfer),
            _ => None,
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            TransactionKind::Deposit => BadgeVariant::Secondary,
            TransactionKind::Withdrawal => BadgeVariant::Outline,
            TransactionKind::Transfer => BadgeVariant::Default,
        }
    }

    /// Deposits add money; withdrawals and transfers remove it.
    pub fn is_credit(&self) -> bool {
        matches!(self, TransactionKind::Deposit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub const ALL: [TransactionStatus; 3] = [
        TransactionStatus::Completed,
        TransactionStatus::Pending,
        TransactionStatus::Failed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TransactionStatus::Completed => "Completed",
            TransactionStatus::Pending => "Pending",
            TransactionStatus::Failed => "Failed",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            TransactionStatus::Completed => BadgeVariant::Default,
            TransactionStatus::Pending => BadgeVariant::Secondary,
            TransactionStatus::Failed => BadgeVariant::Destructive,
        }
    }
}

/// An immutable record of a balance-affecting event.
///
/// Transaction ID format: "txn::<deposit|withdrawal|transfer>::epoch_millis"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    /// Always positive, in cents; the kind says which way the money moved.
    pub amount: i64,
    pub kind: TransactionKind,
    pub status: TransactionStatus,
    pub description: String,
    /// Number of the account the transaction was applied to.
    pub account_number: String,
    /// Destination account number for transfers.
    pub reference: Option<String>,
}

impl Transaction {
    /// Generate a transaction ID from the kind and a millisecond timestamp.
    pub fn generate_id(kind: TransactionKind, epoch_millis: u64) -> String {
        format!("txn::{}::{}", kind.id_segment(), epoch_millis)
    }

    /// Parse a transaction ID back into its kind and timestamp.
    pub fn parse_id(id: &str) -> Result<(TransactionKind, u64), TransactionIdError> {
        let parts: Vec<&str> = id.split("::").collect();
        if parts.len() != 3 || parts[0] != "txn" {
            return Err(TransactionIdError::InvalidFormat);
        }

        let kind =
            TransactionKind::from_id_segment(parts[1]).ok_or(TransactionIdError::InvalidKind)?;
        let epoch_millis = parts[2]
            .parse::<u64>()
            .map_err(|_| TransactionIdError::InvalidTimestamp)?;

        Ok((kind, epoch_millis))
    }

    /// Extract the epoch timestamp from this transaction's ID.
    pub fn extract_timestamp(&self) -> Result<u64, TransactionIdError> {
        Self::parse_id(&self.id).map(|(_, timestamp)| timestamp)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransactionIdError {
    #[error("Invalid transaction ID format")]
    InvalidFormat,
    #[error("Invalid transaction kind")]
    InvalidKind,
    #[error("Invalid timestamp in transaction ID")]
    InvalidTimestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Transaction,
    Security,
}

/// An in-app notification shown in the slide-in panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl TicketStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::InProgress => "In-progress",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            TicketStatus::Open => BadgeVariant::Default,
            TicketStatus::InProgress => BadgeVariant::Secondary,
            TicketStatus::Resolved => BadgeVariant::Outline,
            TicketStatus::Closed => BadgeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            TicketPriority::Low => BadgeVariant::Outline,
            TicketPriority::Medium => BadgeVariant::Secondary,
            TicketPriority::High => BadgeVariant::Default,
            TicketPriority::Urgent => BadgeVariant::Destructive,
        }
    }
}

/// Support ticket ID format: "TKT-nnn", zero-padded to three digits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub id: String,
    pub subject: String,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub category: String,
    pub created_date: NaiveDate,
    pub last_updated: NaiveDate,
}

impl SupportTicket {
    /// Ticket categories offered by the support form.
    pub const CATEGORIES: [&'static str; 6] = [
        "Technical Issue",
        "Account Inquiry",
        "Transaction Problem",
        "Document Request",
        "Security Concern",
        "Other",
    ];

    pub fn generate_id(sequence: usize) -> String {
        format!("TKT-{:03}", sequence)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MembershipTier {
    Basic,
    Premium,
    Vip,
}

impl MembershipTier {
    pub const ALL: [MembershipTier; 3] = [
        MembershipTier::Basic,
        MembershipTier::Premium,
        MembershipTier::Vip,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MembershipTier::Basic => "Basic",
            MembershipTier::Premium => "Premium",
            MembershipTier::Vip => "VIP",
        }
    }

    pub fn badge(&self) -> BadgeVariant {
        match self {
            MembershipTier::Basic => BadgeVariant::Secondary,
            MembershipTier::Premium => BadgeVariant::Default,
            MembershipTier::Vip => BadgeVariant::Destructive,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityLevel {
    Standard,
    Enhanced,
}

impl SecurityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            SecurityLevel::Standard => "Standard",
            SecurityLevel::Enhanced => "Enhanced",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The customer's profile record, editable from the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub date_of_birth: NaiveDate,
    pub tier: MembershipTier,
    pub member_since: NaiveDate,
    pub last_login: NaiveDateTime,
    pub security_level: SecurityLevel,
}

impl UserProfile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Initials for the avatar fallback.
    pub fn initials(&self) -> String {
        let first = self.first_name.chars().next();
        let last = self.last_name.chars().next();
        first.into_iter().chain(last).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
    pub transaction_alerts: bool,
    pub security_alerts: bool,
    pub marketing_emails: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecuritySettings {
    pub two_factor_enabled: bool,
    pub biometric_enabled: bool,
    /// Inactivity timeout in minutes.
    pub session_timeout: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Light,
    Dark,
    System,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
            Theme::System => "System",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceSettings {
    pub theme: Theme,
    pub language: String,
    pub currency: String,
    pub timezone: String,
}

/// Per-user settings edited on the settings page. Independently mutable UI
/// state with no cross-entity invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub notifications: NotificationSettings,
    pub security: SecuritySettings,
    pub preferences: PreferenceSettings,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: NotificationSettings {
                email: true,
                sms: true,
                push: true,
                transaction_alerts: true,
                security_alerts: true,
                marketing_emails: false,
            },
            security: SecuritySettings {
                two_factor_enabled: true,
                biometric_enabled: false,
                session_timeout: 30,
            },
            preferences: PreferenceSettings {
                theme: Theme::Light,
                language: "en".to_string(),
                currency: "USD".to_string(),
                timezone: "America/New_York".to_string(),
            },
        }
    }
}

/// A question/answer pair for the support page FAQ accordion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_transaction_id() {
        let deposit_id = Transaction::generate_id(TransactionKind::Deposit, 1686830400000);
        assert_eq!(deposit_id, "txn::deposit::1686830400000");

        let transfer_id = Transaction::generate_id(TransactionKind::Transfer, 1686830405000);
        assert_eq!(transfer_id, "txn::transfer::1686830405000");
    }

    #[test]
    fn test_parse_transaction_id() {
        let (kind, timestamp) = Transaction::parse_id("txn::withdrawal::1686830400000").unwrap();
        assert_eq!(kind, TransactionKind::Withdrawal);
        assert_eq!(timestamp, 1686830400000);

        assert_eq!(
            Transaction::parse_id("txn::deposit"),
            Err(TransactionIdError::InvalidFormat)
        );
        assert_eq!(
            Transaction::parse_id("payment::deposit::123"),
            Err(TransactionIdError::InvalidFormat)
        );
        assert_eq!(
            Transaction::parse_id("txn::refund::123"),
            Err(TransactionIdError::InvalidKind)
        );
        assert_eq!(
            Transaction::parse_id("txn::deposit::soon"),
            Err(TransactionIdError::InvalidTimestamp)
        );
    }

    #[test]
    fn test_extract_timestamp() {
        let transaction = Transaction {
            id: "txn::deposit::1686830400000".to_string(),
            date: NaiveDate::from_ymd_opt(2023, 6, 15).unwrap(),
            amount: 50_000,
            kind: TransactionKind::Deposit,
            status: TransactionStatus::Completed,
            description: "Salary deposit".to_string(),
            account_number: "1234-5678-9012-3456".to_string(),
            reference: None,
        };

        assert_eq!(transaction.extract_timestamp().unwrap(), 1686830400000);
    }

    #[test]
    fn test_status_badges() {
        assert_eq!(TransactionStatus::Completed.badge(), BadgeVariant::Default);
        assert_eq!(TransactionStatus::Pending.badge(), BadgeVariant::Secondary);
        assert_eq!(TransactionStatus::Failed.badge(), BadgeVariant::Destructive);
    }

    #[test]
    fn test_kind_badges() {
        assert_eq!(TransactionKind::Deposit.badge(), BadgeVariant::Secondary);
        assert_eq!(TransactionKind::Withdrawal.badge(), BadgeVariant::Outline);
        assert_eq!(TransactionKind::Transfer.badge(), BadgeVariant::Default);
    }

    #[test]
    fn test_ticket_id_padding() {
        assert_eq!(SupportTicket::generate_id(4), "TKT-004");
        assert_eq!(SupportTicket::generate_id(123), "TKT-123");
    }

    #[test]
    fn test_interest_rate_by_type() {
        assert_eq!(AccountType::Savings.interest_rate(), 2.5);
        assert_eq!(AccountType::Checking.interest_rate(), 0.1);
        assert_eq!(AccountType::Investment.interest_rate(), 4.2);
    }

    #[test]
    fn test_profile_initials() {
        let profile = mock::profile();
        assert_eq!(profile.initials(), "JD");
        assert_eq!(profile.full_name(), "John Doe");
    }

    #[test]
    fn test_default_settings_match_mock_state() {
        let settings = UserSettings::default();
        assert!(settings.security.two_factor_enabled);
        assert!(!settings.security.biometric_enabled);
        assert_eq!(settings.security.session_timeout, 30);
        assert!(!settings.notifications.marketing_emails);
        assert_eq!(settings.preferences.theme, Theme::Light);
    }
}
