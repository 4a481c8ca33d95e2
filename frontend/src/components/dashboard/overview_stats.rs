use shared::{aggregates::Summary, money};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct OverviewStatsProps {
    pub summary: Summary,
}

/// The four headline cards: total balance, trailing-30-day income and
/// expenses, active account count. Recomputed by the parent on every render.
#[function_component(OverviewStats)]
pub fn overview_stats(props: &OverviewStatsProps) -> Html {
    let summary = &props.summary;

    html! {
        <section class="overview-stats">
            <div class="stat-card">
                <span class="stat-label">{"Total Balance"}</span>
                <span class="stat-value">{money::format_usd(summary.total_balance)}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Monthly Income"}</span>
                <span class="stat-value stat-positive">
                    {format!("+{}", money::format_usd(summary.monthly_income))}
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Monthly Expenses"}</span>
                <span class="stat-value stat-negative">
                    {format!("-{}", money::format_usd(summary.monthly_expenses))}
                </span>
            </div>
            <div class="stat-card">
                <span class="stat-label">{"Active Accounts"}</span>
                <span class="stat-value">{summary.active_accounts}</span>
            </div>
        </section>
    }
}
