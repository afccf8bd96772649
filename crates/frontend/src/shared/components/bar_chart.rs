use contracts::domain::sale::MonthlyPoint;
use leptos::prelude::*;

use crate::shared::number_format::format_rupees;

const PLOT_WIDTH: f64 = 600.0;
const PLOT_HEIGHT: f64 = 180.0;
const AXIS_HEIGHT: f64 = 20.0;
const GROUP_GAP: f64 = 10.0;

/// Pixel height of one bar, scaled against the series maximum.
fn bar_height(value: f64, max: f64) -> f64 {
    if max <= 0.0 || value <= 0.0 {
        return 0.0;
    }
    (value / max) * PLOT_HEIGHT
}

/// Grouped bar chart: one group per calendar month, a cash bar and an online
/// bar in each.
#[component]
pub fn MonthlyBarChart(
    /// Twelve points, January..December
    #[prop(into)]
    points: Signal<Vec<MonthlyPoint>>,
) -> impl IntoView {
    let bars = move || {
        let points = points.get();
        let max = points
            .iter()
            .flat_map(|p| [p.cash, p.online])
            .fold(0.0_f64, f64::max);
        let group_width = PLOT_WIDTH / points.len().max(1) as f64;
        let bar_width = (group_width - GROUP_GAP) / 2.0;

        points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let x0 = i as f64 * group_width + GROUP_GAP / 2.0;
                let x1 = x0 + bar_width;
                let cash_h = bar_height(point.cash, max);
                let online_h = bar_height(point.online, max);
                let cash_y = PLOT_HEIGHT - cash_h;
                let online_y = PLOT_HEIGHT - online_h;
                let label_y = PLOT_HEIGHT + AXIS_HEIGHT - 6.0;
                let cash_title = format!("{} Cash: {}", point.label, format_rupees(point.cash));
                let online_title =
                    format!("{} Online: {}", point.label, format_rupees(point.online));
                let short_label = point.label[..3].to_string();

                view! {
                    <g>
                        <rect
                            class="bar-chart__bar bar-chart__bar--cash"
                            x=x0
                            y=cash_y
                            width=bar_width
                            height=cash_h
                        >
                            <title>{cash_title}</title>
                        </rect>
                        <rect
                            class="bar-chart__bar bar-chart__bar--online"
                            x=x1
                            y=online_y
                            width=bar_width
                            height=online_h
                        >
                            <title>{online_title}</title>
                        </rect>
                        <text
                            class="bar-chart__label"
                            x=x1
                            y=label_y
                            text-anchor="middle"
                        >
                            {short_label}
                        </text>
                    </g>
                }
            })
            .collect_view()
    };

    view! {
        <div class="chart-panel">
            <div class="chart-panel__title">"Monthly sales by payment method"</div>
            <svg
                viewBox=format!("0 0 {} {}", PLOT_WIDTH, PLOT_HEIGHT + AXIS_HEIGHT)
                class="bar-chart"
                role="img"
            >
                {bars}
            </svg>
            <div class="chart-panel__legend">
                <span class="legend__swatch legend__swatch--cash"></span>
                <span>"Cash"</span>
                <span class="legend__swatch legend__swatch--online"></span>
                <span>"Online"</span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_height_scales_linearly() {
        assert_eq!(bar_height(50.0, 100.0), PLOT_HEIGHT / 2.0);
        assert_eq!(bar_height(100.0, 100.0), PLOT_HEIGHT);
    }

    #[test]
    fn empty_series_never_divides_by_zero() {
        assert_eq!(bar_height(0.0, 0.0), 0.0);
        assert_eq!(bar_height(10.0, 0.0), 0.0);
    }
}
