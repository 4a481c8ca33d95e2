pub mod account_summary_card;
pub mod notifications_panel;
pub mod overview_stats;
pub mod transaction_history;

pub use account_summary_card::AccountSummaryCard;
pub use notifications_panel::NotificationsPanel;
pub use overview_stats::OverviewStats;
pub use transaction_history::TransactionHistory;

use crate::hooks::StoreHandle;
use chrono::Utc;
use shared::{aggregates::Summary, Notification};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub store: StoreHandle,
    pub notifications: Vec<Notification>,
    pub on_mark_read: Callback<String>,
    pub on_mark_all_read: Callback<()>,
    pub on_delete_notification: Callback<String>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let show_notifications = use_state(|| false);

    let summary = Summary::compute(&props.store.store, Utc::now().date_naive());
    let unread = props.notifications.iter().filter(|n| !n.read).count();

    let toggle_notifications = {
        let show_notifications = show_notifications.clone();
        Callback::from(move |_| show_notifications.set(!*show_notifications))
    };

    let close_notifications = {
        let show_notifications = show_notifications.clone();
        Callback::from(move |_: ()| show_notifications.set(false))
    };

    html! {
        <div class="dashboard">
            <header class="dashboard-header">
                <h1>{"Dashboard"}</h1>
                <button class="btn btn-icon notifications-toggle" onclick={toggle_notifications}>
                    {"🔔"}
                    {if unread > 0 {
                        html! { <span class="unread-badge">{unread}</span> }
                    } else { html! {} }}
                </button>
            </header>

            {if *show_notifications {
                html! {
                    <NotificationsPanel
                        notifications={props.notifications.clone()}
                        on_mark_read={props.on_mark_read.clone()}
                        on_mark_all_read={props.on_mark_all_read.clone()}
                        on_delete={props.on_delete_notification.clone()}
                        on_close={close_notifications}
                    />
                }
            } else { html! {} }}

            <OverviewStats summary={summary} />

            <section class="account-cards">
                {for props.store.store.accounts().iter().map(|account| {
                    html! {
                        <AccountSummaryCard
                            key={account.id.clone()}
                            account={account.clone()}
                            store={props.store.clone()}
                        />
                    }
                })}
            </section>

            <TransactionHistory ledger={props.store.store.ledger().clone()} />
        </div>
    }
}
