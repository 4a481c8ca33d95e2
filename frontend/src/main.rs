use shared::{mock, Notification};
use yew::prelude::*;

mod components;
mod hooks;

use components::{AccountsPage, Dashboard, ProfilePage, SettingsPage, Sidebar, SupportPage};
use hooks::use_store;

/// Top-level navigation target. Plain local state, no router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Accounts,
    Profile,
    Settings,
    Support,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Dashboard,
        Page::Accounts,
        Page::Profile,
        Page::Settings,
        Page::Support,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Accounts => "Accounts",
            Page::Profile => "Profile",
            Page::Settings => "Settings",
            Page::Support => "Support",
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    let page = use_state(|| Page::Dashboard);
    let store = use_store();
    let notifications = use_state(mock::notifications);

    let on_navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    let on_mark_read = {
        let notifications = notifications.clone();
        Callback::from(move |id: String| {
            let updated: Vec<Notification> = notifications
                .iter()
                .cloned()
                .map(|mut n| {
                    if n.id == id {
                        n.read = true;
                    }
                    n
                })
                .collect();
            notifications.set(updated);
        })
    };

    let on_mark_all_read = {
        let notifications = notifications.clone();
        Callback::from(move |_: ()| {
            let updated: Vec<Notification> = notifications
                .iter()
                .cloned()
                .map(|mut n| {
                    n.read = true;
                    n
                })
                .collect();
            notifications.set(updated);
        })
    };

    let on_delete_notification = {
        let notifications = notifications.clone();
        Callback::from(move |id: String| {
            let updated: Vec<Notification> = notifications
                .iter()
                .filter(|n| n.id != id)
                .cloned()
                .collect();
            notifications.set(updated);
        })
    };

    html! {
        <div class="app-layout">
            <Sidebar current={*page} on_navigate={on_navigate} />
            <main class="app-content">
                {match *page {
                    Page::Dashboard => html! {
                        <Dashboard
                            store={store.clone()}
                            notifications={(*notifications).clone()}
                            on_mark_read={on_mark_read}
                            on_mark_all_read={on_mark_all_read}
                            on_delete_notification={on_delete_notification}
                        />
                    },
                    Page::Accounts => html! { <AccountsPage store={store.clone()} /> },
                    Page::Profile => html! { <ProfilePage /> },
                    Page::Settings => html! { <SettingsPage /> },
                    Page::Support => html! { <SupportPage /> },
                }}
            </main>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
