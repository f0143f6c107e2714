use contracts::dashboards::d400_sales_overview::KpiCard as KpiCardModel;
use leptos::prelude::*;

/// Headline value with an optional hint below it
#[component]
pub fn KpiCard(card: KpiCardModel) -> impl IntoView {
    let KpiCardModel { title, value, hint } = card;

    view! {
        <div class="card kpi-card">
            <div class="kpi-top">
                <p class="kpi-title">{title}</p>
                <p class="kpi-value">{value}</p>
            </div>
            {hint.map(|hint| view! { <p class="kpi-hint">{hint}</p> })}
        </div>
    }
}
