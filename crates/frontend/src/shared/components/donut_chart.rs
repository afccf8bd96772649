use leptos::prelude::*;

use crate::shared::number_format::format_rupees;

const RADIUS: f64 = 45.0;
const CIRCUMFERENCE: f64 = 2.0 * std::f64::consts::PI * RADIUS;

/// Arc length (in dash units) for one slice of the ring.
fn arc_length(part: f64, total: f64) -> f64 {
    if total <= 0.0 || part <= 0.0 {
        return 0.0;
    }
    (part / total) * CIRCUMFERENCE
}

/// Donut chart splitting the selection's revenue into cash and online.
#[component]
pub fn PaymentSplitChart(
    #[prop(into)] cash: Signal<f64>,
    #[prop(into)] online: Signal<f64>,
) -> impl IntoView {
    let cash_dash = move || {
        let len = arc_length(cash.get(), cash.get() + online.get());
        format!("{} {}", len, CIRCUMFERENCE)
    };
    let online_dash = move || {
        let len = arc_length(online.get(), cash.get() + online.get());
        format!("{} {}", len, CIRCUMFERENCE)
    };
    // The online slice starts where the cash slice ends.
    let online_offset = move || -arc_length(cash.get(), cash.get() + online.get());

    let cash_label = move || format!("Cash: {}", format_rupees(cash.get()));
    let online_label = move || format!("Online: {}", format_rupees(online.get()));
    let total_label = move || format_rupees(cash.get() + online.get());

    view! {
        <div class="chart-panel">
            <div class="chart-panel__title">"Payment split"</div>
            <svg viewBox="0 0 120 120" class="donut-chart" role="img">
                <g transform="rotate(-90 60 60)">
                    <circle
                        class="donut-chart__track"
                        cx="60"
                        cy="60"
                        r=RADIUS
                        fill="none"
                        stroke-width="14"
                    />
                    <circle
                        class="donut-chart__slice donut-chart__slice--cash"
                        cx="60"
                        cy="60"
                        r=RADIUS
                        fill="none"
                        stroke-width="14"
                        stroke-dasharray=cash_dash
                    />
                    <circle
                        class="donut-chart__slice donut-chart__slice--online"
                        cx="60"
                        cy="60"
                        r=RADIUS
                        fill="none"
                        stroke-width="14"
                        stroke-dasharray=online_dash
                        stroke-dashoffset=online_offset
                    />
                </g>
                <text x="60" y="64" text-anchor="middle" class="donut-chart__total">
                    {total_label}
                </text>
            </svg>
            <div class="chart-panel__legend">
                <span class="legend__swatch legend__swatch--cash"></span>
                <span>{cash_label}</span>
                <span class="legend__swatch legend__swatch--online"></span>
                <span>{online_label}</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slices_cover_the_whole_ring() {
        let cash = arc_length(100.0, 150.0);
        let online = arc_length(50.0, 150.0);
        assert!((cash + online - CIRCUMFERENCE).abs() < 1e-9);
    }

    #[test]
    fn zero_total_draws_nothing() {
        assert_eq!(arc_length(0.0, 0.0), 0.0);
    }
}
