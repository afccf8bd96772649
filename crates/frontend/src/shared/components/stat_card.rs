use crate::shared::icons::icon;
use crate::shared::number_format::{format_count, format_rupees};
use contracts::shared::indicators::{IndicatorStatus, ValueFormat};
use leptos::prelude::*;

fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } if currency == "Rs." => format_rupees(val),
        ValueFormat::Money { currency } => {
            format!("{} {:.2}", currency, val)
        }
        ValueFormat::Integer => format_count(val),
    }
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    label: String,
    /// Icon name from the icon() helper
    icon_name: String,
    /// Primary numeric value (None = no data yet)
    #[prop(into)]
    value: Signal<Option<f64>>,
    /// How to format the value
    format: ValueFormat,
    /// Visual status
    #[prop(optional)]
    status: Option<IndicatorStatus>,
) -> impl IntoView {
    let status_class = match status.unwrap_or(IndicatorStatus::Neutral) {
        IndicatorStatus::Good => "stat-card stat-card--success",
        IndicatorStatus::Bad => "stat-card stat-card--error",
        IndicatorStatus::Neutral => "stat-card",
    };

    let formatted = move || match value.get() {
        Some(v) => format_value(v, &format),
        None => "\u{2014}".to_string(),
    };

    view! {
        <div class=status_class>
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_format_uses_the_rupee_prefix() {
        assert_eq!(format_value(150.0, &ValueFormat::rupees()), "Rs. 150.00");
    }

    #[test]
    fn integer_format_has_no_decimals() {
        assert_eq!(format_value(42.0, &ValueFormat::Integer), "42");
    }
}
