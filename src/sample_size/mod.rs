//----------------------------------------
// sample size mod
//----------------------------------------
pub mod compute_ss;
pub mod error;
