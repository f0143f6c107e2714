use serde::{Deserialize, Serialize};

/// Number of entries kept in the top products / top customers rankings
pub const TOP_N: usize = 5;

/// One sales transaction as it comes from the dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    /// Date in format "YYYY-MM-DD"
    #[serde(default)]
    pub date: String,
    /// Missing or null means zero
    #[serde(default)]
    pub revenue: Option<f64>,
    /// Missing or null means zero
    #[serde(default)]
    pub target: Option<f64>,
    #[serde(default)]
    pub product: String,
    #[serde(default)]
    pub client: String,
}

impl SalesRecord {
    pub fn revenue_or_zero(&self) -> f64 {
        self.revenue.unwrap_or(0.0)
    }

    pub fn target_or_zero(&self) -> f64 {
        self.target.unwrap_or(0.0)
    }

    /// Year-month key: the first 7 characters of the date ("2024-01-15" -> "2024-01").
    /// Shorter dates give a shorter key.
    pub fn month_key(&self) -> String {
        self.date.chars().take(7).collect()
    }
}

/// Revenue and target accumulated for one year-month key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySales {
    /// Period in format "YYYY-MM"
    pub month: String,
    pub revenue: f64,
    pub target: f64,
}

/// Entry of a top-N ranking (products or customers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub name: String,
    pub revenue: f64,
}

/// Slice of the product share chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareEntry {
    pub name: String,
    pub value: f64,
}

/// Response for the sales overview dashboard
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub total_revenue: f64,
    pub total_target: f64,
    /// total_revenue / total_target * 100, 0 when there is no target
    pub target_achievement: f64,
    /// Sorted ascending by month
    pub monthly_sales: Vec<MonthlySales>,
    /// Last month vs previous month, in percent
    #[serde(rename = "revenueGrowthMoM")]
    pub revenue_growth_mom: f64,
    /// Sorted descending by revenue, at most TOP_N entries
    pub top_products: Vec<RankedEntry>,
    /// Sorted descending by revenue, at most TOP_N entries
    pub top_customers: Vec<RankedEntry>,
    /// All products in first-seen order
    pub product_share: Vec<ShareEntry>,
    pub months_count: usize,
    pub records_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_missing_numbers_are_zero() {
        let json = r#"{"date":"2024-03-02","revenue":null,"product":"A","client":"X"}"#;
        let record: SalesRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.revenue, None);
        assert_eq!(record.revenue_or_zero(), 0.0);
        assert_eq!(record.target_or_zero(), 0.0);
    }

    #[test]
    fn test_month_key() {
        let mut record: SalesRecord =
            serde_json::from_str(r#"{"date":"2024-03-02","product":"A","client":"X"}"#).unwrap();
        assert_eq!(record.month_key(), "2024-03");

        record.date = "2024".to_string();
        assert_eq!(record.month_key(), "2024");

        record.date = String::new();
        assert_eq!(record.month_key(), "");

        record.date = "2024-ü3-01".to_string();
        assert_eq!(record.month_key(), "2024-ü3");
    }

    #[test]
    fn test_overview_serializes_camel_case() {
        let overview = SalesOverview::default();
        let value = serde_json::to_value(&overview).unwrap();
        assert!(value.get("totalRevenue").is_some());
        assert!(value.get("revenueGrowthMoM").is_some());
        assert!(value.get("monthsCount").is_some());
        assert!(value.get("productShare").is_some());
    }
}
