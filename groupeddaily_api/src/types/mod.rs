mod grouped_daily;
pub use self::grouped_daily::{Bar, GroupedDailyResponse};
