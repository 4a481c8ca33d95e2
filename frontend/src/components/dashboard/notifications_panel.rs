use shared::{dates, Notification, NotificationKind};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationsPanelProps {
    pub notifications: Vec<Notification>,
    pub on_mark_read: Callback<String>,
    pub on_mark_all_read: Callback<()>,
    pub on_delete: Callback<String>,
    pub on_close: Callback<()>,
}

fn kind_icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Transaction => "💸",
        NotificationKind::Security => "🔒",
    }
}

#[function_component(NotificationsPanel)]
pub fn notifications_panel(props: &NotificationsPanelProps) -> Html {
    let unread = props.notifications.iter().filter(|n| !n.read).count();

    let on_mark_all = {
        let on_mark_all_read = props.on_mark_all_read.clone();
        Callback::from(move |_| on_mark_all_read.emit(()))
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <aside class="notifications-panel">
            <header class="notifications-header">
                <h3>{format!("Notifications ({} unread)", unread)}</h3>
                <div>
                    <button class="btn btn-link" disabled={unread == 0} onclick={on_mark_all}>
                        {"Mark all read"}
                    </button>
                    <button class="btn btn-icon" onclick={on_close}>{"✕"}</button>
                </div>
            </header>

            {if props.notifications.is_empty() {
                html! { <p class="empty-state">{"You're all caught up."}</p> }
            } else {
                html! {
                    <ul class="notifications-list">
                        {for props.notifications.iter().map(|notification| {
                            let mark_read = {
                                let on_mark_read = props.on_mark_read.clone();
                                let id = notification.id.clone();
                                Callback::from(move |_| on_mark_read.emit(id.clone()))
                            };
                            let delete = {
                                let on_delete = props.on_delete.clone();
                                let id = notification.id.clone();
                                Callback::from(move |_| on_delete.emit(id.clone()))
                            };
                            let class = if notification.read {
                                "notification"
                            } else {
                                "notification unread"
                            };
                            html! {
                                <li key={notification.id.clone()} class={class}>
                                    <span class="notification-icon">{kind_icon(notification.kind)}</span>
                                    <div class="notification-body">
                                        <strong>{&notification.title}</strong>
                                        <p>{&notification.message}</p>
                                        <time>{dates::format_timestamp(notification.timestamp)}</time>
                                    </div>
                                    <div class="notification-actions">
                                        {if !notification.read {
                                            html! {
                                                <button class="btn btn-link" onclick={mark_read}>
                                                    {"Mark read"}
                                                </button>
                                            }
                                        } else { html! {} }}
                                        <button class="btn btn-link" onclick={delete}>{"Delete"}</button>
                                    </div>
                                </li>
                            }
                        })}
                    </ul>
                }
            }}
        </aside>
    }
}
