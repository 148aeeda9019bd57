//----------------------------------------
// power mod
//----------------------------------------
pub mod compute_power;
pub mod error;
pub mod types;
