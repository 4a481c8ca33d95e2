use shared::{
    dates,
    ledger::{Ledger, TransactionQuery},
    money, Transaction, TransactionKind, TransactionStatus,
};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TransactionHistoryProps {
    pub ledger: Ledger,
}

fn kind_from_filter(value: &str) -> Option<TransactionKind> {
    match value {
        "deposit" => Some(TransactionKind::Deposit),
        "withdrawal" => Some(TransactionKind::Withdrawal),
        "transfer" => Some(TransactionKind::Transfer),
        _ => None,
    }
}

fn status_from_filter(value: &str) -> Option<TransactionStatus> {
    match value {
        "completed" => Some(TransactionStatus::Completed),
        "pending" => Some(TransactionStatus::Pending),
        "failed" => Some(TransactionStatus::Failed),
        _ => None,
    }
}

fn signed_amount(transaction: &Transaction) -> Html {
    let formatted = money::format_usd(transaction.amount);
    if transaction.kind.is_credit() {
        html! { <span class="amount-positive">{format!("+{}", formatted)}</span> }
    } else {
        html! { <span class="amount-negative">{format!("-{}", formatted)}</span> }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_values_map_to_query_fields() {
        assert_eq!(kind_from_filter("deposit"), Some(TransactionKind::Deposit));
        assert_eq!(kind_from_filter("transfer"), Some(TransactionKind::Transfer));
        assert_eq!(kind_from_filter("all"), None);
        assert_eq!(
            status_from_filter("pending"),
            Some(TransactionStatus::Pending)
        );
        assert_eq!(status_from_filter("all"), None);
    }
}

#[function_component(TransactionHistory)]
pub fn transaction_history(props: &TransactionHistoryProps) -> Html {
    let search = use_state(String::new);
    let kind_filter = use_state(|| "all".to_string());
    let status_filter = use_state(|| "all".to_string());
    let page = use_state(|| 1usize);
    let selected = use_state(|| None::<Transaction>);

    let query = TransactionQuery {
        search: (*search).clone(),
        kind: kind_from_filter(&kind_filter),
        status: status_from_filter(&status_filter),
    };
    let current = props.ledger.page(&query, *page);

    // Any filter change snaps back to the first page.
    let on_search_change = {
        let search = search.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            search.set(input.value());
            page.set(1);
        })
    };

    let on_kind_change = {
        let kind_filter = kind_filter.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            kind_filter.set(select.value());
            page.set(1);
        })
    };

    let on_status_change = {
        let status_filter = status_filter.clone();
        let page = page.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            status_filter.set(select.value());
            page.set(1);
        })
    };

    let on_reset = {
        let search = search.clone();
        let kind_filter = kind_filter.clone();
        let status_filter = status_filter.clone();
        let page = page.clone();
        Callback::from(move |_| {
            search.set(String::new());
            kind_filter.set("all".to_string());
            status_filter.set("all".to_string());
            page.set(1);
        })
    };

    let on_prev = {
        let page = page.clone();
        let current_page = current.page;
        Callback::from(move |_| page.set(current_page.saturating_sub(1).max(1)))
    };

    let on_next = {
        let page = page.clone();
        let current_page = current.page;
        let total_pages = current.total_pages;
        Callback::from(move |_| page.set((current_page + 1).min(total_pages)))
    };

    let close_details = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <section class="transaction-history">
            <header class="transaction-history-header">
                <h2>{"Transaction History"}</h2>
                <div class="transaction-filters">
                    <input
                        type="text"
                        class="search-input"
                        placeholder="Search transactions..."
                        value={(*search).clone()}
                        onchange={on_search_change}
                    />
                    <select onchange={on_kind_change}>
                        <option value="all" selected={*kind_filter == "all"}>{"All Types"}</option>
                        <option value="deposit" selected={*kind_filter == "deposit"}>{"Deposit"}</option>
                        <option value="withdrawal" selected={*kind_filter == "withdrawal"}>{"Withdrawal"}</option>
                        <option value="transfer" selected={*kind_filter == "transfer"}>{"Transfer"}</option>
                    </select>
                    <select onchange={on_status_change}>
                        <option value="all" selected={*status_filter == "all"}>{"All Statuses"}</option>
                        <option value="completed" selected={*status_filter == "completed"}>{"Completed"}</option>
                        <option value="pending" selected={*status_filter == "pending"}>{"Pending"}</option>
                        <option value="failed" selected={*status_filter == "failed"}>{"Failed"}</option>
                    </select>
                    <button class="btn btn-secondary" onclick={on_reset}>{"Reset"}</button>
                </div>
            </header>

            {if current.transactions.is_empty() {
                html! { <p class="empty-state">{"No transactions match your filters."}</p> }
            } else {
                html! {
                    <table class="transaction-table">
                        <thead>
                            <tr>
                                <th>{"Date"}</th>
                                <th>{"Description"}</th>
                                <th>{"Type"}</th>
                                <th>{"Amount"}</th>
                                <th>{"Status"}</th>
                                <th></th>
                            </tr>
                        </thead>
                        <tbody>
                            {for current.transactions.iter().map(|transaction| {
                                let selected = selected.clone();
                                let details = transaction.clone();
                                html! {
                                    <tr key={transaction.id.clone()}>
                                        <td>{dates::format_short_date(transaction.date)}</td>
                                        <td>{&transaction.description}</td>
                                        <td>
                                            <span class={transaction.kind.badge().css_class()}>
                                                {transaction.kind.label()}
                                            </span>
                                        </td>
                                        <td>{signed_amount(transaction)}</td>
                                        <td>
                                            <span class={transaction.status.badge().css_class()}>
                                                {transaction.status.label()}
                                            </span>
                                        </td>
                                        <td>
                                            <button
                                                class="btn btn-link"
                                                onclick={Callback::from(move |_| selected.set(Some(details.clone())))}
                                            >
                                                {"View"}
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })}
                        </tbody>
                    </table>
                }
            }}

            <footer class="transaction-pagination">
                <span>
                    {format!(
                        "Page {} of {} ({} transactions)",
                        current.page, current.total_pages, current.match_count
                    )}
                </span>
                <div class="pagination-buttons">
                    <button class="btn btn-secondary" disabled={current.page <= 1} onclick={on_prev}>
                        {"Previous"}
                    </button>
                    <button
                        class="btn btn-secondary"
                        disabled={current.page >= current.total_pages}
                        onclick={on_next}
                    >
                        {"Next"}
                    </button>
                </div>
            </footer>

            {if let Some(transaction) = (*selected).clone() {
                html! {
                    <div class="dialog-backdrop">
                        <div class="dialog">
                            <h4>{"Transaction Details"}</h4>
                            <dl class="detail-list">
                                <dt>{"ID"}</dt>
                                <dd>{&transaction.id}</dd>
                                <dt>{"Date"}</dt>
                                <dd>{dates::format_long_date(transaction.date)}</dd>
                                <dt>{"Description"}</dt>
                                <dd>{&transaction.description}</dd>
                                <dt>{"Amount"}</dt>
                                <dd>{signed_amount(&transaction)}</dd>
                                <dt>{"Status"}</dt>
                                <dd>
                                    <span class={transaction.status.badge().css_class()}>
                                        {transaction.status.label()}
                                    </span>
                                </dd>
                                <dt>{"Account"}</dt>
                                <dd>{&transaction.account_number}</dd>
                                {if let Some(reference) = transaction.reference.as_ref() {
                                    html! {
                                        <>
                                            <dt>{"Reference"}</dt>
                                            <dd>{reference}</dd>
                                        </>
                                    }
                                } else { html! {} }}
                            </dl>
                            <div class="dialog-actions">
                                <button class="btn btn-primary" onclick={close_details}>{"Close"}</button>
                            </div>
                        </div>
                    </div>
                }
            } else { html! {} }}
        </section>
    }
}
