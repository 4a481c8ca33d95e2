pub mod accounts_page;
pub mod profile_page;
pub mod settings_page;
pub mod support_page;

pub use accounts_page::AccountsPage;
pub use profile_page::ProfilePage;
pub use settings_page::SettingsPage;
pub use support_page::SupportPage;
