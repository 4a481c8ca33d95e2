use shared::{
    validate::{self, PasswordError},
    Theme, UserSettings,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

fn theme_from_value(value: &str) -> Theme {
    match value {
        "dark" => Theme::Dark,
        "system" => Theme::System,
        _ => Theme::Light,
    }
}

fn theme_value(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
        Theme::System => "system",
    }
}

#[function_component(SettingsPage)]
pub fn settings_page() -> Html {
    let settings = use_state(UserSettings::default);
    let show_password_dialog = use_state(|| false);
    let current_password = use_state(String::new);
    let new_password = use_state(String::new);
    let confirm_password = use_state(String::new);
    let password_error = use_state(|| None::<PasswordError>);
    let password_success = use_state(|| false);

    // Toggle handlers all rewrite the settings state with one flag flipped.
    let toggle = |apply: fn(&mut UserSettings, bool)| {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut updated = (*settings).clone();
            apply(&mut updated, input.checked());
            settings.set(updated);
        })
    };

    let select_field = |apply: fn(&mut UserSettings, String)| {
        let settings = settings.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut updated = (*settings).clone();
            apply(&mut updated, select.value());
            settings.set(updated);
        })
    };

    let open_password_dialog = {
        let show_password_dialog = show_password_dialog.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let password_error = password_error.clone();
        Callback::from(move |_| {
            current_password.set(String::new());
            new_password.set(String::new());
            confirm_password.set(String::new());
            password_error.set(None);
            show_password_dialog.set(true);
        })
    };

    let close_password_dialog = {
        let show_password_dialog = show_password_dialog.clone();
        Callback::from(move |_| show_password_dialog.set(false))
    };

    let password_field = |state: UseStateHandle<String>| {
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    let submit_password = {
        let show_password_dialog = show_password_dialog.clone();
        let current_password = current_password.clone();
        let new_password = new_password.clone();
        let confirm_password = confirm_password.clone();
        let password_error = password_error.clone();
        let password_success = password_success.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match validate::validate_password_change(
                &current_password,
                &new_password,
                &confirm_password,
            ) {
                Ok(()) => {
                    password_error.set(None);
                    show_password_dialog.set(false);
                    password_success.set(true);

                    let password_success = password_success.clone();
                    spawn_local(async move {
                        gloo::timers::future::TimeoutFuture::new(3000).await;
                        password_success.set(false);
                    });
                }
                Err(error) => password_error.set(Some(error)),
            }
        })
    };

    html! {
        <div class="settings-page">
            <header class="page-header">
                <h1>{"Settings"}</h1>
            </header>

            {if *password_success {
                html! { <div class="form-message success">{"Password changed"}</div> }
            } else { html! {} }}

            <section class="settings-section">
                <h2>{"Notifications"}</h2>
                <label class="switch-row">
                    <span>{"Email notifications"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.email}
                        onchange={toggle(|s, v| s.notifications.email = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"SMS notifications"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.sms}
                        onchange={toggle(|s, v| s.notifications.sms = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"Push notifications"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.push}
                        onchange={toggle(|s, v| s.notifications.push = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"Transaction alerts"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.transaction_alerts}
                        onchange={toggle(|s, v| s.notifications.transaction_alerts = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"Security alerts"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.security_alerts}
                        onchange={toggle(|s, v| s.notifications.security_alerts = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"Marketing emails"}</span>
                    <input
                        type="checkbox"
                        checked={settings.notifications.marketing_emails}
                        onchange={toggle(|s, v| s.notifications.marketing_emails = v)}
                    />
                </label>
            </section>

            <section class="settings-section">
                <h2>{"Security"}</h2>
                <label class="switch-row">
                    <span>{"Two-factor authentication"}</span>
                    <input
                        type="checkbox"
                        checked={settings.security.two_factor_enabled}
                        onchange={toggle(|s, v| s.security.two_factor_enabled = v)}
                    />
                </label>
                <label class="switch-row">
                    <span>{"Biometric login"}</span>
                    <input
                        type="checkbox"
                        checked={settings.security.biometric_enabled}
                        onchange={toggle(|s, v| s.security.biometric_enabled = v)}
                    />
                </label>
                <div class="form-group">
                    <label for="session-timeout">{"Session timeout"}</label>
                    <select
                        id="session-timeout"
                        onchange={select_field(|s, v| {
                            s.security.session_timeout = v.parse().unwrap_or(30);
                        })}
                    >
                        {for [15u32, 30, 60].iter().map(|minutes| {
                            html! {
                                <option
                                    value={minutes.to_string()}
                                    selected={settings.security.session_timeout == *minutes}
                                >
                                    {format!("{} minutes", minutes)}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <button class="btn btn-secondary" onclick={open_password_dialog}>
                    {"Change Password"}
                </button>
            </section>

            <section class="settings-section">
                <h2>{"Preferences"}</h2>
                <div class="form-group">
                    <label for="theme">{"Theme"}</label>
                    <select
                        id="theme"
                        onchange={select_field(|s, v| s.preferences.theme = theme_from_value(&v))}
                    >
                        {for Theme::ALL.iter().map(|theme| {
                            html! {
                                <option
                                    value={theme_value(*theme)}
                                    selected={settings.preferences.theme == *theme}
                                >
                                    {theme.label()}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="language">{"Language"}</label>
                    <select
                        id="language"
                        onchange={select_field(|s, v| s.preferences.language = v)}
                    >
                        {for [("en", "English"), ("es", "Spanish"), ("fr", "French")].iter().map(|(value, label)| {
                            html! {
                                <option
                                    value={*value}
                                    selected={settings.preferences.language == *value}
                                >
                                    {*label}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="currency">{"Currency"}</label>
                    <select
                        id="currency"
                        onchange={select_field(|s, v| s.preferences.currency = v)}
                    >
                        {for ["USD", "EUR", "GBP"].iter().map(|currency| {
                            html! {
                                <option
                                    value={*currency}
                                    selected={settings.preferences.currency == *currency}
                                >
                                    {*currency}
                                </option>
                            }
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label for="timezone">{"Timezone"}</label>
                    <select
                        id="timezone"
                        onchange={select_field(|s, v| s.preferences.timezone = v)}
                    >
                        {for [
                            "America/New_York",
                            "America/Chicago",
                            "America/Denver",
                            "America/Los_Angeles",
                        ].iter().map(|timezone| {
                            html! {
                                <option
                                    value={*timezone}
                                    selected={settings.preferences.timezone == *timezone}
                                >
                                    {*timezone}
                                </option>
                            }
                        })}
                    </select>
                </div>
            </section>

            {if *show_password_dialog {
                html! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h4>{"Change Password"}</h4>

                            {if let Some(error) = password_error.as_ref() {
                                html! { <div class="form-message error">{error.to_string()}</div> }
                            } else { html! {} }}

                            <form onsubmit={submit_password}>
                                <div class="form-group">
                                    <label for="current-password">{"Current password"}</label>
                                    <input
                                        type="password"
                                        id="current-password"
                                        value={(*current_password).clone()}
                                        onchange={password_field(current_password.clone())}
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="new-password">{"New password"}</label>
                                    <input
                                        type="password"
                                        id="new-password"
                                        value={(*new_password).clone()}
                                        onchange={password_field(new_password.clone())}
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="confirm-password">{"Confirm new password"}</label>
                                    <input
                                        type="password"
                                        id="confirm-password"
                                        value={(*confirm_password).clone()}
                                        onchange={password_field(confirm_password.clone())}
                                    />
                                </div>
                                <div class="dialog-actions">
                                    <button
                                        type="button"
                                        class="btn btn-secondary"
                                        onclick={close_password_dialog}
                                    >
                                        {"Cancel"}
                                    </button>
                                    <button type="submit" class="btn btn-primary">{"Update Password"}</button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
