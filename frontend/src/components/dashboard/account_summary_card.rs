use crate::hooks::{StoreHandle, TransactionRequest, TransferRequest};
use shared::{dates, money, Account};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Dialog {
    Deposit,
    Withdraw,
    Transfer,
}

impl Dialog {
    fn title(&self) -> &'static str {
        match self {
            Dialog::Deposit => "Make a Deposit",
            Dialog::Withdraw => "Make a Withdrawal",
            Dialog::Transfer => "Transfer Funds",
        }
    }

    fn submit_label(&self) -> &'static str {
        match self {
            Dialog::Deposit => "Deposit",
            Dialog::Withdraw => "Withdraw",
            Dialog::Transfer => "Transfer",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccountSummaryCardProps {
    pub account: Account,
    pub store: StoreHandle,
}

#[function_component(AccountSummaryCard)]
pub fn account_summary_card(props: &AccountSummaryCardProps) -> Html {
    let dialog = use_state(|| None::<Dialog>);
    let amount = use_state(String::new);
    let destination = use_state(String::new);

    let account = &props.account;
    let closed = account.is_closed();

    let open_dialog = |kind: Dialog| {
        let dialog = dialog.clone();
        let amount = amount.clone();
        let destination = destination.clone();
        let clear_messages = props.store.clear_messages.clone();
        Callback::from(move |_| {
            amount.set(String::new());
            destination.set(String::new());
            clear_messages.emit(());
            dialog.set(Some(kind));
        })
    };

    let close_dialog = {
        let dialog = dialog.clone();
        let clear_messages = props.store.clear_messages.clone();
        Callback::from(move |_| {
            clear_messages.emit(());
            dialog.set(None);
        })
    };

    let on_amount_change = {
        let amount = amount.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(input.value());
        })
    };

    let on_destination_change = {
        let destination = destination.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            destination.set(select.value());
        })
    };

    let on_submit = {
        let dialog = dialog.clone();
        let amount = amount.clone();
        let destination = destination.clone();
        let account_id = account.id.clone();
        let deposit = props.store.deposit.clone();
        let withdraw = props.store.withdraw.clone();
        let transfer = props.store.transfer.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match *dialog {
                Some(Dialog::Deposit) => deposit.emit(TransactionRequest {
                    account_id: account_id.clone(),
                    amount: (*amount).clone(),
                }),
                Some(Dialog::Withdraw) => withdraw.emit(TransactionRequest {
                    account_id: account_id.clone(),
                    amount: (*amount).clone(),
                }),
                Some(Dialog::Transfer) => transfer.emit(TransferRequest {
                    account_id: account_id.clone(),
                    destination: (*destination).clone(),
                    amount: (*amount).clone(),
                }),
                None => {}
            }
        })
    };

    // Destination choices are the other accounts in the store.
    let destinations: Vec<Account> = props
        .store
        .store
        .accounts()
        .iter()
        .filter(|candidate| candidate.id != account.id && !candidate.is_closed())
        .cloned()
        .collect();

    html! {
        <div class="account-card">
            <div class="account-card-header">
                <h3>{account.account_type.label()}</h3>
                <span class={account.status.badge().css_class()}>
                    {account.status.label()}
                </span>
            </div>
            <p class="account-number">{&account.account_number}</p>
            <p class="account-balance">{money::format_usd(account.balance)}</p>
            {if let Some(date) = account.last_transaction {
                html! {
                    <p class="account-last-transaction">
                        {format!("Last transaction: {}", dates::format_short_date(date))}
                    </p>
                }
            } else { html! {} }}

            <div class="account-card-actions">
                <button class="btn btn-primary" disabled={closed} onclick={open_dialog(Dialog::Deposit)}>
                    {"Deposit"}
                </button>
                <button class="btn btn-secondary" disabled={closed} onclick={open_dialog(Dialog::Withdraw)}>
                    {"Withdraw"}
                </button>
                <button class="btn btn-secondary" disabled={closed} onclick={open_dialog(Dialog::Transfer)}>
                    {"Transfer"}
                </button>
            </div>

            {if let Some(kind) = *dialog {
                html! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h4>{kind.title()}</h4>
                            <p class="dialog-subtitle">
                                {format!(
                                    "{} · {}",
                                    account.account_type.label(),
                                    money::format_usd(account.balance)
                                )}
                            </p>

                            {if let Some(error) = props.store.form_error.as_ref() {
                                html! { <div class="form-message error">{error}</div> }
                            } else { html! {} }}
                            {if let Some(success) = props.store.form_success.as_ref() {
                                html! { <div class="form-message success">{success}</div> }
                            } else { html! {} }}

                            <form onsubmit={on_submit.clone()}>
                                {if kind == Dialog::Transfer {
                                    html! {
                                        <div class="form-group">
                                            <label for="destination">{"Destination account"}</label>
                                            <select
                                                id="destination"
                                                onchange={on_destination_change.clone()}
                                            >
                                                <option value="" selected={destination.is_empty()}>
                                                    {"Select an account"}
                                                </option>
                                                {for destinations.iter().map(|candidate| {
                                                    html! {
                                                        <option
                                                            value={candidate.account_number.clone()}
                                                            selected={*destination == candidate.account_number}
                                                        >
                                                            {format!(
                                                                "{} ({})",
                                                                candidate.account_type.label(),
                                                                candidate.account_number
                                                            )}
                                                        </option>
                                                    }
                                                })}
                                            </select>
                                        </div>
                                    }
                                } else { html! {} }}

                                <div class="form-group">
                                    <label for="amount">{"Amount (dollars)"}</label>
                                    <input
                                        type="number"
                                        id="amount"
                                        placeholder="0.00"
                                        step="0.01"
                                        min="0.01"
                                        value={(*amount).clone()}
                                        onchange={on_amount_change.clone()}
                                    />
                                </div>

                                <div class="dialog-actions">
                                    <button type="button" class="btn btn-secondary" onclick={close_dialog.clone()}>
                                        {"Close"}
                                    </button>
                                    <button type="submit" class="btn btn-primary">
                                        {kind.submit_label()}
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}
