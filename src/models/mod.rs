pub mod break_interval;
pub mod compliance;
pub mod day_summary;
pub mod location;
pub mod session_state;
pub mod work_session;
