use crate::dashboards::d400_sales_overview::api;
use crate::shared::charts::{BarChart, LineChart, PieChart};
use crate::shared::components::{DataTable, KpiCard};
use contracts::dashboards::d400_sales_overview::{build_kpi_cards, SalesOverview};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Sales Overview Dashboard component
#[component]
pub fn SalesOverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<SalesOverview>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    // Load data on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::get_sales_overview().await {
                Ok(response) => {
                    set_data.set(Some(response));
                }
                Err(e) => {
                    log::error!("Failed to load D400 sales overview: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div id="d400_sales_overview--dashboard" class="app-wrap">
            <header class="header" style="text-align: center">
                <h1 class="title">"Sales & Revenue Dashboard"</h1>
                <h2 class="subtitle">"Insights for Electronics & Software Products"</h2>
            </header>

            {move || {
                if loading.get() {
                    view! {
                        <div class="d400-loading">
                            <span>"Loading data..."</span>
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || {
                if let Some(err) = error.get() {
                    view! {
                        <div class="d400-error">
                            <strong>"⚠ Error: "</strong>
                            {err}
                        </div>
                    }.into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            {move || data.get().map(|overview| view! { <SalesOverviewContent overview=overview /> })}
        </div>
    }
}

#[component]
fn SalesOverviewContent(overview: SalesOverview) -> impl IntoView {
    let cards = build_kpi_cards(&overview)
        .into_iter()
        .map(|card| view! { <KpiCard card=card /> })
        .collect_view();

    let SalesOverview {
        monthly_sales,
        top_products,
        top_customers,
        product_share,
        months_count,
        records_count,
        ..
    } = overview;

    view! {
        <div class="summary">
            <div class="summary-item">
                <span class="summary-value">{records_count.to_string()}</span>
                <span class="summary-label">"Records"</span>
            </div>
            <div class="summary-item">
                <span class="summary-value">{months_count.to_string()}</span>
                <span class="summary-label">"Months"</span>
            </div>
        </div>

        <section class="kpi-grid">{cards}</section>

        <section class="charts">
            <div class="card large">
                <h3 class="card-title">"Monthly Sales vs Target"</h3>
                <LineChart months=monthly_sales />
            </div>

            <div class="card small pie-card">
                <h3 class="card-title">"Product Share"</h3>
                <PieChart slices=product_share />
            </div>
        </section>

        <section class="charts">
            <div class="card full-bar">
                <h3 class="card-title">"Top 5 Customers by Revenue"</h3>
                <BarChart entries=top_customers.clone() />
            </div>
        </section>

        <section class="table-grid">
            <DataTable
                title="Top 5 Products"
                name_label="Product"
                value_label="Revenue"
                rows=top_products
            />
            <DataTable
                title="Top 5 Customers"
                name_label="Customer"
                value_label="Revenue"
                rows=top_customers
            />
        </section>
    }
}
