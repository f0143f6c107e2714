use super::dto::SalesOverview;
use crate::shared::number_format::{
    format_count, format_money, format_percent, format_signed_percent,
};

/// Display model of one KPI card
#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub title: String,
    /// Already formatted value
    pub value: String,
    /// Optional secondary text displayed below the value
    pub hint: Option<String>,
}

impl KpiCard {
    fn new(title: &str, value: String, hint: Option<String>) -> Self {
        Self {
            title: title.to_string(),
            value,
            hint,
        }
    }
}

/// Build the four headline cards of the sales overview
pub fn build_kpi_cards(overview: &SalesOverview) -> Vec<KpiCard> {
    let growth_hint = if overview.months_count >= 2 {
        "Last vs previous month"
    } else {
        "Not enough months"
    };

    vec![
        KpiCard::new(
            "Total Revenue",
            format_money(overview.total_revenue),
            Some(format!(
                "{} transactions",
                format_count(overview.records_count, ',')
            )),
        ),
        KpiCard::new("Total Target", format_money(overview.total_target), None),
        KpiCard::new(
            "Target Achievement",
            format_percent(overview.target_achievement),
            None,
        ),
        KpiCard::new(
            "Revenue Growth (MoM)",
            format_signed_percent(overview.revenue_growth_mom),
            Some(growth_hint.to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cards_for_two_months() {
        let overview = SalesOverview {
            total_revenue: 350.0,
            total_target: 250.0,
            target_achievement: 140.0,
            revenue_growth_mom: 100.0 / 3.0,
            months_count: 2,
            records_count: 3,
            ..Default::default()
        };

        let cards = build_kpi_cards(&overview);
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].value, "₹350");
        assert_eq!(cards[0].hint.as_deref(), Some("3 transactions"));
        assert_eq!(cards[1].value, "₹250");
        assert_eq!(cards[1].hint, None);
        assert_eq!(cards[2].value, "140.0%");
        assert_eq!(cards[3].value, "+33.3%");
        assert_eq!(cards[3].hint.as_deref(), Some("Last vs previous month"));
    }

    #[test]
    fn test_growth_card_for_decline() {
        let overview = SalesOverview {
            revenue_growth_mom: -12.54,
            months_count: 3,
            ..Default::default()
        };
        assert_eq!(build_kpi_cards(&overview)[3].value, "-12.5%");

        let overview = SalesOverview {
            revenue_growth_mom: -0.01,
            months_count: 3,
            ..Default::default()
        };
        assert_eq!(build_kpi_cards(&overview)[3].value, "-0.0%");
    }

    #[test]
    fn test_cards_for_empty_overview() {
        let cards = build_kpi_cards(&SalesOverview::default());
        assert_eq!(cards[0].value, "₹0");
        assert_eq!(cards[0].hint.as_deref(), Some("0 transactions"));
        assert_eq!(cards[2].value, "0.0%");
        assert_eq!(cards[3].value, "+0.0%");
        assert_eq!(cards[3].hint.as_deref(), Some("Not enough months"));
    }
}
