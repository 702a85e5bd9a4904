mod perf;
mod time_utils;

pub use perf::AppInstant;
pub use time_utils::TimeUtils;
