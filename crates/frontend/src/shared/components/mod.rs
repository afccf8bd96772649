pub mod bar_chart;
pub mod donut_chart;
pub mod page_header;
pub mod stat_card;
pub mod ui;
