use crate::hooks::{OpenAccountRequest, StoreHandle};
use shared::{dates, money, Account, AccountType};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AccountsPageProps {
    pub store: StoreHandle,
}

fn account_type_from_value(value: &str) -> AccountType {
    match value {
        "checking" => AccountType::Checking,
        "investment" => AccountType::Investment,
        _ => AccountType::Savings,
    }
}

fn account_type_value(account_type: AccountType) -> &'static str {
    match account_type {
        AccountType::Savings => "savings",
        AccountType::Checking => "checking",
        AccountType::Investment => "investment",
    }
}

#[function_component(AccountsPage)]
pub fn accounts_page(props: &AccountsPageProps) -> Html {
    let show_create = use_state(|| false);
    let new_type = use_state(|| "savings".to_string());
    let new_deposit = use_state(String::new);
    let viewing = use_state(|| None::<Account>);

    let open_create = {
        let show_create = show_create.clone();
        let new_type = new_type.clone();
        let new_deposit = new_deposit.clone();
        let clear_messages = props.store.clear_messages.clone();
        Callback::from(move |_| {
            new_type.set("savings".to_string());
            new_deposit.set(String::new());
            clear_messages.emit(());
            show_create.set(true);
        })
    };

    let close_create = {
        let show_create = show_create.clone();
        let clear_messages = props.store.clear_messages.clone();
        Callback::from(move |_| {
            clear_messages.emit(());
            show_create.set(false);
        })
    };

    let on_type_change = {
        let new_type = new_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            new_type.set(select.value());
        })
    };

    let on_deposit_change = {
        let new_deposit = new_deposit.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_deposit.set(input.value());
        })
    };

    let on_create = {
        let new_type = new_type.clone();
        let new_deposit = new_deposit.clone();
        let open_account = props.store.open_account.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            open_account.emit(OpenAccountRequest {
                account_type: account_type_from_value(&new_type),
                initial_deposit: (*new_deposit).clone(),
            });
        })
    };

    let close_view = {
        let viewing = viewing.clone();
        Callback::from(move |_| viewing.set(None))
    };

    html! {
        <div class="accounts-page">
            <header class="page-header">
                <h1>{"Accounts"}</h1>
                <button class="btn btn-primary" onclick={open_create}>{"Open New Account"}</button>
            </header>

            {if let Some(success) = props.store.form_success.as_ref() {
                html! { <div class="form-message success">{success}</div> }
            } else { html! {} }}

            <div class="accounts-grid">
                {for props.store.store.accounts().iter().map(|account| {
                    let view = {
                        let viewing = viewing.clone();
                        let details = account.clone();
                        Callback::from(move |_| viewing.set(Some(details.clone())))
                    };
                    let close = {
                        let close_account = props.store.close_account.clone();
                        let id = account.id.clone();
                        Callback::from(move |_| close_account.emit(id.clone()))
                    };
                    html! {
                        <div key={account.id.clone()} class="account-card">
                            <div class="account-card-header">
                                <h3>{account.account_type.label()}</h3>
                                <span class={account.status.badge().css_class()}>
                                    {account.status.label()}
                                </span>
                            </div>
                            <p class="account-number">{&account.account_number}</p>
                            <p class="account-balance">{money::format_usd(account.balance)}</p>
                            {if let Some(rate) = account.interest_rate {
                                html! { <p class="account-rate">{format!("{}% APY", rate)}</p> }
                            } else { html! {} }}
                            <div class="account-card-actions">
                                <button class="btn btn-secondary" onclick={view}>{"View Details"}</button>
                                <button
                                    class="btn btn-destructive"
                                    disabled={account.is_closed()}
                                    onclick={close}
                                >
                                    {"Close Account"}
                                </button>
                            </div>
                        </div>
                    }
                })}
            </div>

            {if *show_create {
                html! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h4>{"Open New Account"}</h4>
                            <p class="dialog-subtitle">
                                {"A minimum opening deposit of $25.00 is required."}
                            </p>

                            {if let Some(error) = props.store.form_error.as_ref() {
                                html! { <div class="form-message error">{error}</div> }
                            } else { html! {} }}
                            {if let Some(success) = props.store.form_success.as_ref() {
                                html! { <div class="form-message success">{success}</div> }
                            } else { html! {} }}

                            <form onsubmit={on_create}>
                                <div class="form-group">
                                    <label for="account-type">{"Account type"}</label>
                                    <select id="account-type" onchange={on_type_change}>
                                        {for AccountType::ALL.iter().map(|account_type| {
                                            let value = account_type_value(*account_type);
                                            html! {
                                                <option value={value} selected={*new_type == value}>
                                                    {format!(
                                                        "{} ({}% APY)",
                                                        account_type.label(),
                                                        account_type.interest_rate()
                                                    )}
                                                </option>
                                            }
                                        })}
                                    </select>
                                </div>
                                <div class="form-group">
                                    <label for="initial-deposit">{"Initial deposit (dollars)"}</label>
                                    <input
                                        type="number"
                                        id="initial-deposit"
                                        placeholder="25.00"
                                        step="0.01"
                                        min="25"
                                        value={(*new_deposit).clone()}
                                        onchange={on_deposit_change}
                                    />
                                </div>
                                <div class="dialog-actions">
                                    <button type="button" class="btn btn-secondary" onclick={close_create}>
                                        {"Close"}
                                    </button>
                                    <button type="submit" class="btn btn-primary">{"Open Account"}</button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            } else { html! {} }}

            {if let Some(account) = (*viewing).clone() {
                html! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h4>{account.account_type.label()}</h4>
                            <dl class="detail-list">
                                <dt>{"Account number"}</dt>
                                <dd>{&account.account_number}</dd>
                                <dt>{"Balance"}</dt>
                                <dd>{money::format_usd(account.balance)}</dd>
                                <dt>{"Status"}</dt>
                                <dd>
                                    <span class={account.status.badge().css_class()}>
                                        {account.status.label()}
                                    </span>
                                </dd>
                                <dt>{"Opened"}</dt>
                                <dd>{dates::format_long_date(account.opened_date)}</dd>
                                {if let Some(rate) = account.interest_rate {
                                    html! {
                                        <>
                                            <dt>{"Interest rate"}</dt>
                                            <dd>{format!("{}%", rate)}</dd>
                                        </>
                                    }
                                } else { html! {} }}
                                {if let Some(date) = account.last_transaction {
                                    html! {
                                        <>
                                            <dt>{"Last transaction"}</dt>
                                            <dd>{dates::format_short_date(date)}</dd>
                                        </>
                                    }
                                } else { html! {} }}
                            </dl>
                            <div class="dialog-actions">
                                <button class="btn btn-primary" onclick={close_view}>{"Close"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
