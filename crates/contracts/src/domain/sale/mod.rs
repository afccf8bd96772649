pub mod aggregate;
pub mod filter;
pub mod totals;

pub use aggregate::{PaymentMethod, SaleRecord};
pub use filter::{today_subset, SaleFilter};
pub use totals::{monthly_series, MonthlyPoint, SaleTotals};
