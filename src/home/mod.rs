//! The home page: the weekly spending summary.

mod home_page;
mod week;

pub use home_page::get_home_page;
pub use week::{format_clock, format_month_day, week_bounds};
