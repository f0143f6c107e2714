use contracts::dashboards::d400_sales_overview::{SalesOverview, SalesRecord};
use once_cell::sync::OnceCell;

use super::service;

/// Loaded records and the overview computed from them.
///
/// The records never change after startup, so the overview is computed
/// on first use and reused afterwards.
pub struct SalesOverviewState {
    records: Vec<SalesRecord>,
    overview: OnceCell<SalesOverview>,
}

impl SalesOverviewState {
    pub fn new(records: Vec<SalesRecord>) -> Self {
        Self {
            records,
            overview: OnceCell::new(),
        }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn overview(&self) -> &SalesOverview {
        self.overview.get_or_init(|| {
            let overview = service::aggregate(&self.records);
            tracing::info!(
                "D400 Dashboard: Computed overview for {} records over {} months",
                overview.records_count,
                overview.months_count
            );
            overview
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_is_computed_once() {
        let records = vec![SalesRecord {
            date: "2024-01-05".to_string(),
            revenue: Some(100.0),
            target: Some(50.0),
            product: "A".to_string(),
            client: "X".to_string(),
        }];
        let state = SalesOverviewState::new(records);

        let first = state.overview() as *const SalesOverview;
        let second = state.overview() as *const SalesOverview;
        assert_eq!(first, second);
        assert_eq!(state.overview().target_achievement, 200.0);
        assert_eq!(state.records().len(), 1);
    }
}
