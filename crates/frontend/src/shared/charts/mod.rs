pub mod bar_chart;
pub mod geometry;
pub mod line_chart;
pub mod pie_chart;

pub use bar_chart::BarChart;
pub use line_chart::LineChart;
pub use pie_chart::PieChart;

use contracts::dashboards::d400_sales_overview::MonthlySales;
use contracts::shared::number_format::format_money;
use contracts::shared::period::month_label;

/// SVG coordinate as attribute text
pub(crate) fn coord(value: f64) -> String {
    format!("{:.1}", value)
}

/// Hover text of a month point: "Jan 2024: revenue ₹150, target ₹100"
pub fn month_tooltip(month: &MonthlySales) -> String {
    format!(
        "{}: revenue {}, target {}",
        month_label(&month.month),
        format_money(month.revenue),
        format_money(month.target)
    )
}

/// Hover text of a pie slice or a bar: "Acme Corp: ₹300"
pub fn entry_tooltip(name: &str, value: f64) -> String {
    format!("{}: {}", name, format_money(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_tooltip() {
        let month = MonthlySales {
            month: "2024-01".to_string(),
            revenue: 150.0,
            target: 1000.0,
        };
        assert_eq!(
            month_tooltip(&month),
            "Jan 2024: revenue ₹150, target ₹1,000"
        );
    }

    #[test]
    fn test_entry_tooltip() {
        assert_eq!(entry_tooltip("Acme Corp", 48500.0), "Acme Corp: ₹48,500");
        assert_eq!(entry_tooltip("", 0.0), ": ₹0");
    }
}
