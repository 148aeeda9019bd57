//----------------------------------------
// effect size mod
//----------------------------------------
pub mod compute_mde;
