pub mod join_code;
pub mod rate_limit;
