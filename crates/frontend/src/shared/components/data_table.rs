use contracts::dashboards::d400_sales_overview::RankedEntry;
use contracts::shared::number_format::format_money;
use leptos::prelude::*;

/// Two-column table of a ranking: name and money-formatted revenue.
/// Shows a "No data" row when `rows` is empty.
#[component]
pub fn DataTable(
    #[prop(into)] title: String,
    #[prop(into)] name_label: String,
    #[prop(into)] value_label: String,
    rows: Vec<RankedEntry>,
) -> impl IntoView {
    let body = if rows.is_empty() {
        view! {
            <tr>
                <td colspan="2" class="muted">"No data"</td>
            </tr>
        }
        .into_any()
    } else {
        rows.into_iter()
            .map(|row| {
                view! {
                    <tr>
                        <td>{row.name}</td>
                        <td>{format_money(row.revenue)}</td>
                    </tr>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <div class="card">
            <div class="card-head">
                <h3 class="card-title">{title}</h3>
            </div>

            <table class="data-table">
                <thead>
                    <tr>
                        <th>{name_label}</th>
                        <th>{value_label}</th>
                    </tr>
                </thead>
                <tbody>{body}</tbody>
            </table>
        </div>
    }
}
