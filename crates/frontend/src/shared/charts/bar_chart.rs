use contracts::dashboards::d400_sales_overview::RankedEntry;
use contracts::shared::number_format::{format_money, format_number_with_decimals};
use leptos::prelude::*;

use super::{coord, entry_tooltip};
use super::geometry::{bar_rects, nice_max, y_ticks, PlotArea};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 280.0;
const PADDING: f64 = 28.0;
const BAR_COLOR: &str = "#0ea5e9";
const CATEGORY_GAP: f64 = 0.3;

#[component]
pub fn BarChart(entries: Vec<RankedEntry>) -> impl IntoView {
    let area = PlotArea::new(WIDTH, HEIGHT, PADDING);
    let values: Vec<f64> = entries.iter().map(|e| e.revenue).collect();
    let max = nice_max(values.iter().copied());

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

    let bars = bar_rects(&values, max, &area, CATEGORY_GAP)
        .into_iter()
        .zip(entries)
        .map(|(rect, entry)| {
            view! {
                <rect
                    x=coord(rect.x)
                    y=coord(rect.y)
                    width=coord(rect.width)
                    height=coord(rect.height)
                    fill=BAR_COLOR
                    class="chart-bar"
                >
                    <title>{entry_tooltip(&entry.name, entry.revenue)}</title>
                </rect>
                <text
                    x=coord(rect.center_x())
                    y=coord(rect.y - 6.0)
                    text-anchor="middle"
                    class="chart-bar-value"
                >
                    {format_money(entry.revenue)}
                </text>
                <text
                    x=coord(rect.center_x())
                    y=coord(area.bottom() + 18.0)
                    text-anchor="middle"
                    class="chart-tick"
                >
                    {entry.name}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)>
            {grid}
            {bars}
        </svg>
    }
}
