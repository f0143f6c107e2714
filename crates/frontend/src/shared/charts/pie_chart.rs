use contracts::dashboards::d400_sales_overview::ShareEntry;
use contracts::shared::number_format::format_money;
use contracts::shared::palette::color_for;
use leptos::prelude::*;

use super::{coord, entry_tooltip};
use super::geometry::{percent_label, pie_slices, polar, slice_path};

const SIZE: f64 = 280.0;
const RADIUS: f64 = 100.0;

/// Share of each entry in the total, colored from the palette by position
#[component]
pub fn PieChart(slices: Vec<ShareEntry>) -> impl IntoView {
    let center = SIZE / 2.0;
    let values: Vec<f64> = slices.iter().map(|s| s.value).collect();
    let geometry = pie_slices(&values);

    let paths = geometry
        .iter()
        .zip(slices.iter())
        .enumerate()
        .map(|(i, (slice, entry))| {
            let (label_x, label_y) = polar(center, center, RADIUS * 0.65, slice.mid_angle());
            view! {
                <path d=slice_path(center, center, RADIUS, slice) fill=color_for(i)>
                    <title>{entry_tooltip(&entry.name, entry.value)}</title>
                </path>
                <text
                    x=coord(label_x)
                    y=coord(label_y)
                    text-anchor="middle"
                    class="chart-slice-label"
                >
                    {percent_label(slice.fraction)}
                </text>
            }
        })
        .collect_view();

    let legend = slices
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            view! {
                <li class="chart-legend__item">
                    <span class="chart-legend__swatch" style=format!("background: {}", color_for(i))></span>
                    <span class="chart-legend__name">{entry.name}</span>
                    <span class="chart-legend__value">{format_money(entry.value)}</span>
                </li>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--pie" viewBox=format!("0 0 {} {}", SIZE, SIZE)>
            {paths}
        </svg>
        <ul class="chart-legend">{legend}</ul>
    }
}
