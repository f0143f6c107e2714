use contracts::dashboards::d400_sales_overview::{
    MonthlySales, RankedEntry, SalesOverview, SalesRecord, ShareEntry, TOP_N,
};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Revenue accumulated per key, kept in the order keys were first seen
#[derive(Default)]
struct RevenueByKey {
    positions: HashMap<String, usize>,
    entries: Vec<(String, f64)>,
}

impl RevenueByKey {
    fn add(&mut self, key: &str, revenue: f64) {
        match self.positions.get(key) {
            Some(&pos) => self.entries[pos].1 += revenue,
            None => {
                self.positions.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), revenue));
            }
        }
    }

    /// Top `n` entries by revenue, descending. Equal revenues keep first-seen order.
    fn top(&self, n: usize) -> Vec<RankedEntry> {
        let mut ranked: Vec<RankedEntry> = self
            .entries
            .iter()
            .map(|(name, revenue)| RankedEntry {
                name: name.clone(),
                revenue: *revenue,
            })
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.revenue.partial_cmp(&a.revenue).unwrap_or(Ordering::Equal));
        ranked.truncate(n);
        ranked
    }

    fn share(&self) -> Vec<ShareEntry> {
        self.entries
            .iter()
            .map(|(name, value)| ShareEntry {
                name: name.clone(),
                value: *value,
            })
            .collect()
    }
}

/// Compute the sales overview for a set of records.
///
/// Pure: no I/O, no shared state. An empty slice gives an all-zero overview.
pub fn aggregate(records: &[SalesRecord]) -> SalesOverview {
    let mut total_revenue = 0.0;
    let mut total_target = 0.0;
    let mut monthly: HashMap<String, (f64, f64)> = HashMap::new();
    let mut products = RevenueByKey::default();
    let mut customers = RevenueByKey::default();

    for record in records {
        let revenue = record.revenue_or_zero();
        let target = record.target_or_zero();

        total_revenue += revenue;
        total_target += target;

        let month = monthly.entry(record.month_key()).or_insert((0.0, 0.0));
        month.0 += revenue;
        month.1 += target;

        products.add(&record.product, revenue);
        customers.add(&record.client, revenue);
    }

    let mut monthly_sales: Vec<MonthlySales> = monthly
        .into_iter()
        .map(|(month, (revenue, target))| MonthlySales {
            month,
            revenue,
            target,
        })
        .collect();
    monthly_sales.sort_by(|a, b| a.month.cmp(&b.month));

    SalesOverview {
        total_revenue,
        total_target,
        target_achievement: percent_of(total_revenue, total_target),
        revenue_growth_mom: month_over_month_growth(&monthly_sales),
        months_count: monthly_sales.len(),
        monthly_sales,
        top_products: products.top(TOP_N),
        top_customers: customers.top(TOP_N),
        product_share: products.share(),
        records_count: records.len(),
    }
}

/// value / base * 100, or 0 when base is 0
fn percent_of(value: f64, base: f64) -> f64 {
    if base == 0.0 {
        0.0
    } else {
        value / base * 100.0
    }
}

/// Revenue change of the last month against the previous one, in percent.
/// Expects `months` sorted ascending.
fn month_over_month_growth(months: &[MonthlySales]) -> f64 {
    match months {
        [.., prev, last] => percent_of(last.revenue - prev.revenue, prev.revenue),
        _ => 0.0,
    }
}
