use chrono::{Datelike, NaiveDate};

use super::aggregate::SaleRecord;

/// Three independent optional selectors over the sale list.
///
/// All conditions are ANDed; an unset selector always matches. The day
/// selector is only meaningful once month and year are both chosen, so
/// changing either of them clears it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaleFilter {
    /// 1-based calendar month.
    pub month: Option<u32>,
    pub year: Option<i32>,
    /// Day of month, valid only while month and year are set.
    pub day: Option<u32>,
}

impl SaleFilter {
    pub fn set_month(&mut self, month: Option<u32>) {
        self.month = month;
        self.day = None;
    }

    pub fn set_year(&mut self, year: Option<i32>) {
        self.year = year;
        self.day = None;
    }

    pub fn set_day(&mut self, day: Option<u32>) {
        self.day = day;
    }

    /// True when any selector is set.
    pub fn is_active(&self) -> bool {
        self.month.is_some() || self.year.is_some() || self.day.is_some()
    }

    /// Conjunction of the three per-field predicates.
    pub fn matches(&self, date: NaiveDate) -> bool {
        self.month.map_or(true, |m| date.month() == m)
            && self.year.map_or(true, |y| date.year() == y)
            && self.day.map_or(true, |d| date.day() == d)
    }

    /// Subset of `sales` matching the filter.
    ///
    /// A record without a parseable date can only pass while no selector is
    /// active; there is nothing to compare against once one is.
    pub fn apply(&self, sales: &[SaleRecord]) -> Vec<SaleRecord> {
        sales
            .iter()
            .filter(|sale| match sale.sold_on() {
                Some(date) => self.matches(date),
                None => !self.is_active(),
            })
            .cloned()
            .collect()
    }
}

/// The "today" view: with an active filter it is the filtered set itself,
/// otherwise the subset sold on `today`.
pub fn today_subset(sales: &[SaleRecord], filter: &SaleFilter, today: NaiveDate) -> Vec<SaleRecord> {
    if filter.is_active() {
        filter.apply(sales)
    } else {
        sales
            .iter()
            .filter(|sale| sale.sold_on() == Some(today))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sale::PaymentMethod;

    fn sale(id: &str, sold_at: &str) -> SaleRecord {
        SaleRecord {
            id: id.to_string(),
            product_id: String::new(),
            name: format!("item {id}"),
            description: String::new(),
            price: 10.0,
            phone: None,
            sold_at: sold_at.to_string(),
            method: PaymentMethod::Cash,
        }
    }

    fn sample() -> Vec<SaleRecord> {
        vec![
            sale("a", "2024-01-05"),
            sale("b", "2024-01-15"),
            sale("c", "2024-02-10"),
            sale("d", "2023-01-05"),
        ]
    }

    #[test]
    fn unset_filter_matches_everything() {
        let filter = SaleFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&sample()).len(), 4);
    }

    #[test]
    fn membership_is_the_conjunction_of_field_predicates() {
        let sales = sample();
        let mut filter = SaleFilter::default();
        filter.set_month(Some(1));
        let ids: Vec<_> = filter.apply(&sales).iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["a", "b", "d"]);

        filter.set_year(Some(2024));
        let ids: Vec<_> = filter.apply(&sales).iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["a", "b"]);

        filter.set_day(Some(5));
        let ids: Vec<_> = filter.apply(&sales).iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn filtered_set_is_a_subset() {
        let sales = sample();
        let filter = SaleFilter {
            month: Some(2),
            year: None,
            day: None,
        };
        for kept in filter.apply(&sales) {
            assert!(sales.contains(&kept));
        }
    }

    #[test]
    fn changing_month_or_year_resets_day() {
        let mut filter = SaleFilter::default();
        filter.set_month(Some(1));
        filter.set_year(Some(2024));
        filter.set_day(Some(5));
        assert_eq!(filter.day, Some(5));

        filter.set_month(Some(2));
        assert_eq!(filter.day, None);

        filter.set_day(Some(10));
        filter.set_year(Some(2023));
        assert_eq!(filter.day, None);
    }

    #[test]
    fn undated_records_pass_only_the_empty_filter() {
        let sales = vec![sale("x", "not a date")];
        assert_eq!(SaleFilter::default().apply(&sales).len(), 1);

        let mut filter = SaleFilter::default();
        filter.set_year(Some(2024));
        assert!(filter.apply(&sales).is_empty());
    }

    #[test]
    fn today_view_reuses_filtered_set_while_active() {
        let sales = sample();
        let mut filter = SaleFilter::default();
        filter.set_month(Some(2));
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(today_subset(&sales, &filter, today), filter.apply(&sales));
    }

    #[test]
    fn today_view_matches_the_exact_date_otherwise() {
        let sales = sample();
        let filter = SaleFilter::default();
        let today = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let ids: Vec<_> = today_subset(&sales, &filter, today)
            .iter()
            .map(|s| s.id.clone())
            .collect();
        assert_eq!(ids, ["a"]);
    }
}
