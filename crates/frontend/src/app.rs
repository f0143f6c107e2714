use crate::dashboards::d400_sales_overview::SalesOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <SalesOverviewDashboard />
    }
}
