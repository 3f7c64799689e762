pub mod calendar_view;
pub mod date_banner;
pub mod door;
pub mod grid;
pub mod modal;
pub mod reward;
pub mod stats_bar;
