use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How the buyer paid. Drives every split aggregate and both chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Online,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Online => "Online",
        }
    }
}

/// One completed sale as stored in the realtime `sell` collection.
///
/// The store keys each record by an opaque identifier; `id` is not part of
/// the stored value and is injected from the key during snapshot decoding.
/// Scalar fields are decoded permissively: a record missing a field gets the
/// default instead of failing the whole snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    #[serde(skip_deserializing)]
    pub id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub phone: Option<String>,
    /// ISO-parseable timestamp of the sale, kept as received.
    #[serde(default)]
    pub sold_at: String,
    pub method: PaymentMethod,
}

impl SaleRecord {
    /// Calendar date of the sale, if the stored timestamp is parseable.
    ///
    /// Accepts both plain dates (`2024-01-05`) and full ISO timestamps
    /// (`2024-01-05T09:30:00Z`).
    pub fn sold_on(&self) -> Option<NaiveDate> {
        let date_part = self.sold_at.split('T').next().unwrap_or(&self.sold_at);
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sold_on_parses_date_and_timestamp() {
        let mut sale: SaleRecord =
            serde_json::from_str(r#"{"soldAt":"2024-01-05","method":"cash"}"#).unwrap();
        assert_eq!(sale.sold_on(), NaiveDate::from_ymd_opt(2024, 1, 5));

        sale.sold_at = "2024-02-10T14:02:26.123Z".to_string();
        assert_eq!(sale.sold_on(), NaiveDate::from_ymd_opt(2024, 2, 10));
    }

    #[test]
    fn sold_on_rejects_garbage() {
        let sale: SaleRecord =
            serde_json::from_str(r#"{"soldAt":"yesterday","method":"online"}"#).unwrap();
        assert_eq!(sale.sold_on(), None);
    }

    #[test]
    fn missing_fields_decode_with_defaults() {
        let sale: SaleRecord = serde_json::from_str(r#"{"method":"cash"}"#).unwrap();
        assert_eq!(sale.price, 0.0);
        assert_eq!(sale.name, "");
        assert_eq!(sale.phone, None);
    }

    #[test]
    fn unknown_payment_method_is_an_error() {
        let result = serde_json::from_str::<SaleRecord>(r#"{"method":"cheque"}"#);
        assert!(result.is_err());
    }
}
