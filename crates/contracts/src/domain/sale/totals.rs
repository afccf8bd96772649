use chrono::Datelike;

use super::aggregate::{PaymentMethod, SaleRecord};
use crate::shared::calendar::month_label;

/// Aggregates over one sale subset. Pure function of the subset; recomputed
/// whenever the subset changes.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SaleTotals {
    pub count: usize,
    pub amount: f64,
    pub cash: f64,
    pub online: f64,
}

impl SaleTotals {
    pub fn compute(sales: &[SaleRecord]) -> Self {
        let mut totals = SaleTotals {
            count: sales.len(),
            ..Default::default()
        };
        for sale in sales {
            totals.amount += sale.price;
            match sale.method {
                PaymentMethod::Cash => totals.cash += sale.price,
                PaymentMethod::Online => totals.online += sale.price,
            }
        }
        totals
    }
}

/// One bar-chart entry: per-method running totals for a calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyPoint {
    /// 1-based calendar month.
    pub month: u32,
    pub label: &'static str,
    pub cash: f64,
    pub online: f64,
}

impl MonthlyPoint {
    pub fn total(&self) -> f64 {
        self.cash + self.online
    }
}

/// Cash/online totals per calendar month, always twelve entries
/// (January..December). Records without a parseable date have no bucket and
/// are left out.
pub fn monthly_series(sales: &[SaleRecord]) -> Vec<MonthlyPoint> {
    let mut points: Vec<MonthlyPoint> = (1..=12)
        .map(|month| MonthlyPoint {
            month,
            label: month_label(month),
            cash: 0.0,
            online: 0.0,
        })
        .collect();

    for sale in sales {
        let Some(date) = sale.sold_on() else {
            continue;
        };
        let point = &mut points[date.month0() as usize];
        match sale.method {
            PaymentMethod::Cash => point.cash += sale.price,
            PaymentMethod::Online => point.online += sale.price,
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sale(price: f64, method: PaymentMethod, sold_at: &str) -> SaleRecord {
        SaleRecord {
            id: String::new(),
            product_id: String::new(),
            name: String::new(),
            description: String::new(),
            price,
            phone: None,
            sold_at: sold_at.to_string(),
            method,
        }
    }

    #[test]
    fn worked_example_from_two_sales() {
        let sales = vec![
            sale(100.0, PaymentMethod::Cash, "2024-01-05"),
            sale(50.0, PaymentMethod::Online, "2024-02-10"),
        ];

        let totals = SaleTotals::compute(&sales);
        assert_eq!(totals.count, 2);
        assert_eq!(totals.amount, 150.0);
        assert_eq!(totals.cash, 100.0);
        assert_eq!(totals.online, 50.0);

        let series = monthly_series(&sales);
        assert_eq!(series.len(), 12);
        assert_eq!(series[0].label, "January");
        assert_eq!((series[0].cash, series[0].online), (100.0, 0.0));
        assert_eq!((series[1].cash, series[1].online), (0.0, 50.0));
        for point in &series[2..] {
            assert_eq!(point.total(), 0.0);
        }
    }

    #[test]
    fn series_sums_to_the_subset_totals() {
        let sales = vec![
            sale(12.5, PaymentMethod::Cash, "2024-03-01"),
            sale(7.5, PaymentMethod::Online, "2024-03-15"),
            sale(80.0, PaymentMethod::Cash, "2024-11-30"),
            sale(19.99, PaymentMethod::Online, "2023-12-31"),
        ];

        let totals = SaleTotals::compute(&sales);
        let series = monthly_series(&sales);
        let series_sum: f64 = series.iter().map(MonthlyPoint::total).sum();
        assert!((series_sum - (totals.cash + totals.online)).abs() < 1e-9);
    }

    #[test]
    fn empty_subset_yields_zeroes() {
        assert_eq!(SaleTotals::compute(&[]), SaleTotals::default());
        assert!(monthly_series(&[]).iter().all(|p| p.total() == 0.0));
    }
}
