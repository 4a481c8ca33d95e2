pub mod dashboard;
pub mod pages;
pub mod sidebar;

pub use dashboard::Dashboard;
pub use pages::{AccountsPage, ProfilePage, SettingsPage, SupportPage};
pub use sidebar::Sidebar;
