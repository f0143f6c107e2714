use contracts::dashboards::d400_sales_overview::MonthlySales;
use contracts::shared::number_format::format_number_with_decimals;
use contracts::shared::period::month_label;
use leptos::prelude::*;

use super::{coord, month_tooltip};
use super::geometry::{line_points, nice_max, points_attr, y_ticks, PlotArea};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 240.0;
const PADDING: f64 = 28.0;

const REVENUE_COLOR: &str = "#0ea5e9";
const TARGET_COLOR: &str = "#14b8a6";

/// Monthly revenue (solid) against target (dashed)
#[component]
pub fn LineChart(months: Vec<MonthlySales>) -> impl IntoView {
    let area = PlotArea::new(WIDTH, HEIGHT, PADDING);

    let revenues: Vec<f64> = months.iter().map(|m| m.revenue).collect();
    let targets: Vec<f64> = months.iter().map(|m| m.target).collect();
    let max = nice_max(revenues.iter().chain(targets.iter()).copied());

    let revenue_points = points_attr(&line_points(&revenues, max, &area));
    let target_points = points_attr(&line_points(&targets, max, &area));

    let grid = y_ticks(max, 4)
        .into_iter()
        .map(|tick| {
            let y = area.y_at(tick, max);
            view! {
                <line
                    x1=coord(area.left)
                    x2=coord(area.right())
                    y1=coord(y)
                    y2=coord(y)
                    stroke="#334155"
                    stroke-dasharray="3 3"
                />
                <text
                    x=coord(area.left - 6.0)
                    y=coord(y + 4.0)
                    text-anchor="end"
                    class="chart-tick"
                >
                    {format_number_with_decimals(tick, 0)}
                </text>
            }
        })
        .collect_view();

    let count = months.len();
    let labels = months
        .iter()
        .enumerate()
        .map(|(i, m)| {
            view! {
                <text
                    x=coord(area.x_at(i, count))
                    y=coord(area.bottom() + 18.0)
                    text-anchor="middle"
                    class="chart-tick"
                >
                    {month_label(&m.month)}
                </text>
            }
        })
        .collect_view();

    let points = months
        .iter()
        .enumerate()
        .map(|(i, m)| {
            view! {
                <circle
                    cx=coord(area.x_at(i, count))
                    cy=coord(area.y_at(m.revenue, max))
                    r="4"
                    fill=REVENUE_COLOR
                    class="chart-point"
                >
                    <title>{month_tooltip(m)}</title>
                </circle>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            {grid}
            {labels}
            <polyline
                points=target_points
                fill="none"
                stroke=TARGET_COLOR
                stroke-width="2"
                stroke-dasharray="5 5"
            />
            <polyline points=revenue_points fill="none" stroke=REVENUE_COLOR stroke-width="2" />
            {points}
        </svg>
        <div class="chart-legend">
            <span class="chart-legend__item">
                <span class="chart-legend__swatch" style=format!("background: {}", REVENUE_COLOR)></span>
                "revenue"
            </span>
            <span class="chart-legend__item">
                <span class="chart-legend__swatch" style=format!("background: {}", TARGET_COLOR)></span>
                "target"
            </span>
        </div>
    }
}
