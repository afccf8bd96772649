use std::cmp::Ordering;

use chrono::{Datelike, Local};
use contracts::domain::sale::{monthly_series, today_subset, SaleFilter, SaleRecord, SaleTotals};
use contracts::shared::calendar::{self, MONTH_LABELS};
use contracts::shared::indicators::ValueFormat;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::backend::{backend, Subscription};
use crate::shared::components::bar_chart::MonthlyBarChart;
use crate::shared::components::donut_chart::PaymentSplitChart;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Select;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::number_format::format_rupees;
use crate::system::auth::context::{do_logout, use_session};

fn sort_indicator(current: &str, field: &str, ascending: bool) -> &'static str {
    if current == field {
        if ascending {
            " \u{2191}"
        } else {
            " \u{2193}"
        }
    } else {
        ""
    }
}

/// Sales dashboard: live sale list with month/year/day filters, aggregate
/// cards, two charts and a table.
#[component]
pub fn SalesDashboard() -> impl IntoView {
    let (session, set_session) = use_session();

    // Local sale list, replaced wholesale on every snapshot from the store.
    let (sales, set_sales) = signal(Vec::<SaleRecord>::new());
    let (filter, set_filter) = signal(SaleFilter::default());
    let (load_error, set_load_error) = signal(None::<String>);
    let (sort_field, set_sort_field) = signal("date");
    let (sort_ascending, set_sort_ascending) = signal(false);

    // One long-lived listener on the `sell` collection, cancelled on unmount.
    let subscription = StoredValue::new_local(None::<Subscription>);
    match backend()
        .store
        .subscribe_sales(move |snapshot| set_sales.set(snapshot))
    {
        Ok(sub) => subscription.set_value(Some(sub)),
        Err(err) => {
            log::error!("failed to open sales feed: {}", err);
            set_load_error.set(Some(err));
        }
    }
    on_cleanup(move || {
        if let Some(sub) = subscription.try_update_value(|slot| slot.take()).flatten() {
            sub.cancel();
        }
    });

    // Derived subsets and aggregates, recomputed on every filter change or
    // live update.
    let filtered = Memo::new(move |_| filter.get().apply(&sales.get()));
    // "Today" follows the user's wall clock, not UTC.
    let todays = Memo::new(move |_| {
        today_subset(&sales.get(), &filter.get(), Local::now().date_naive())
    });
    let overall_totals = Memo::new(move |_| SaleTotals::compute(&filtered.get()));
    let today_totals = Memo::new(move |_| SaleTotals::compute(&todays.get()));
    let series = Memo::new(move |_| monthly_series(&filtered.get()));

    // Filter options.
    let month_options = {
        let mut options = vec![(String::new(), "All months".to_string())];
        options.extend(
            MONTH_LABELS
                .iter()
                .enumerate()
                .map(|(i, label)| ((i + 1).to_string(), label.to_string())),
        );
        options
    };
    let year_options = Memo::new(move |_| {
        let mut years: Vec<i32> = sales
            .get()
            .iter()
            .filter_map(|s| s.sold_on())
            .map(|d| d.year())
            .collect();
        years.push(Local::now().date_naive().year());
        years.sort_unstable();
        years.dedup();
        years.reverse();

        let mut options = vec![(String::new(), "All years".to_string())];
        options.extend(years.into_iter().map(|y| (y.to_string(), y.to_string())));
        options
    });
    let day_options = Memo::new(move |_| {
        let f = filter.get();
        let mut options = vec![(String::new(), "All days".to_string())];
        options.extend(
            calendar::day_options(f.month, f.year)
                .into_iter()
                .map(|d| (d.to_string(), d.to_string())),
        );
        options
    });
    // Day filtering only makes sense once month and year are both chosen.
    let day_disabled = Signal::derive(move || day_options.get().len() <= 1);

    let toggle_sort = move |field: &'static str| {
        move |_| {
            if sort_field.get() == field {
                set_sort_ascending.update(|v| *v = !*v);
            } else {
                set_sort_field.set(field);
                set_sort_ascending.set(true);
            }
        }
    };

    let sorted_rows = move || {
        let mut rows = filtered.get();
        let field = sort_field.get();
        let ascending = sort_ascending.get();
        rows.sort_by(|a, b| {
            let cmp = match field {
                "date" => a.sold_at.cmp(&b.sold_at),
                "product" => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                "price" => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
                "method" => a.method.label().cmp(b.method.label()),
                _ => Ordering::Equal,
            };
            if ascending {
                cmp
            } else {
                cmp.reverse()
            }
        });
        rows
    };

    let avatar_initial = move || {
        session
            .get()
            .user
            .as_ref()
            .map(|u| u.avatar_initial())
            .unwrap_or_else(|| "?".to_string())
    };
    let user_email = move || {
        session
            .get()
            .user
            .as_ref()
            .map(|u| u.email.clone())
            .unwrap_or_default()
    };

    let on_logout = move |_| {
        spawn_local(async move {
            // A failed sign-out keeps the session and the dashboard as-is.
            if let Err(err) = do_logout(session, set_session).await {
                log::error!("sign-out failed: {}", err);
            }
        });
    };

    view! {
        <div class="dashboard">
            <PageHeader
                title="Sales Dashboard"
                subtitle="Live sales from the store".to_string()
            >
                <span class="avatar" title=user_email>{avatar_initial}</span>
                <button class="btn btn-secondary" on:click=on_logout>
                    {icon("logout")}
                    " Logout"
                </button>
            </PageHeader>

            {move || load_error.get().map(|err| view! {
                <div class="dashboard__empty-state">
                    <strong>"The live sales feed is unavailable. "</strong>
                    {err}
                </div>
            })}

            <div class="dashboard__filters">
                <Select
                    label="Month".to_string()
                    value=Signal::derive(move || {
                        filter.get().month.map(|m| m.to_string()).unwrap_or_default()
                    })
                    options=Signal::derive({
                        let month_options = month_options.clone();
                        move || month_options.clone()
                    })
                    on_change=Callback::new(move |val: String| {
                        set_filter.update(|f| f.set_month(val.parse().ok()));
                    })
                />
                <Select
                    label="Year".to_string()
                    value=Signal::derive(move || {
                        filter.get().year.map(|y| y.to_string()).unwrap_or_default()
                    })
                    options=year_options
                    on_change=Callback::new(move |val: String| {
                        set_filter.update(|f| f.set_year(val.parse().ok()));
                    })
                />
                <Select
                    label="Day".to_string()
                    value=Signal::derive(move || {
                        filter.get().day.map(|d| d.to_string()).unwrap_or_default()
                    })
                    options=day_options
                    disabled=day_disabled
                    on_change=Callback::new(move |val: String| {
                        set_filter.update(|f| f.set_day(val.parse().ok()));
                    })
                />
            </div>

            <div class="indicator-set">
                <div class="indicator-set__title">"Selection"</div>
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    <StatCard
                        label="Sales".to_string()
                        icon_name="sales".to_string()
                        value=Signal::derive(move || Some(overall_totals.get().count as f64))
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Revenue".to_string()
                        icon_name="amount".to_string()
                        value=Signal::derive(move || Some(overall_totals.get().amount))
                        format=ValueFormat::rupees()
                    />
                    <StatCard
                        label="Cash".to_string()
                        icon_name="cash".to_string()
                        value=Signal::derive(move || Some(overall_totals.get().cash))
                        format=ValueFormat::rupees()
                    />
                    <StatCard
                        label="Online".to_string()
                        icon_name="online".to_string()
                        value=Signal::derive(move || Some(overall_totals.get().online))
                        format=ValueFormat::rupees()
                    />
                </div>
            </div>

            <div class="indicator-set">
                <div class="indicator-set__title">"Today"</div>
                <div class="indicator-set__grid indicator-set__grid--cols-4">
                    <StatCard
                        label="Sales".to_string()
                        icon_name="calendar".to_string()
                        value=Signal::derive(move || Some(today_totals.get().count as f64))
                        format=ValueFormat::Integer
                    />
                    <StatCard
                        label="Revenue".to_string()
                        icon_name="amount".to_string()
                        value=Signal::derive(move || Some(today_totals.get().amount))
                        format=ValueFormat::rupees()
                    />
                    <StatCard
                        label="Cash".to_string()
                        icon_name="cash".to_string()
                        value=Signal::derive(move || Some(today_totals.get().cash))
                        format=ValueFormat::rupees()
                    />
                    <StatCard
                        label="Online".to_string()
                        icon_name="online".to_string()
                        value=Signal::derive(move || Some(today_totals.get().online))
                        format=ValueFormat::rupees()
                    />
                </div>
            </div>

            <div class="dashboard__charts">
                <MonthlyBarChart points=series />
                <PaymentSplitChart
                    cash=Signal::derive(move || overall_totals.get().cash)
                    online=Signal::derive(move || overall_totals.get().online)
                />
            </div>

            <div class="table-container">
                <table>
                    <thead>
                        <tr>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("date") title="Sort">
                                {move || format!("Date{}", sort_indicator(sort_field.get(), "date", sort_ascending.get()))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("product") title="Sort">
                                {move || format!("Product{}", sort_indicator(sort_field.get(), "product", sort_ascending.get()))}
                            </th>
                            <th>"Description"</th>
                            <th>"Phone"</th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("method") title="Sort">
                                {move || format!("Method{}", sort_indicator(sort_field.get(), "method", sort_ascending.get()))}
                            </th>
                            <th class="cursor-pointer user-select-none" on:click=toggle_sort("price") title="Sort">
                                {move || format!("Price{}", sort_indicator(sort_field.get(), "price", sort_ascending.get()))}
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            sorted_rows().into_iter().map(|sale| {
                                let phone = sale.phone.clone().unwrap_or_else(|| "\u{2014}".to_string());
                                view! {
                                    <tr>
                                        <td>{format_date(&sale.sold_at)}</td>
                                        <td>{sale.name.clone()}</td>
                                        <td>{sale.description.clone()}</td>
                                        <td>{phone}</td>
                                        <td>{sale.method.label()}</td>
                                        <td class="cell--money">{format_rupees(sale.price)}</td>
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
