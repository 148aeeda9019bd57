//----------------------------------------
// compute mod
//----------------------------------------
pub mod types;

pub use crate::effect_size::compute_mde::min_detectable_effect;
pub use crate::power::compute_power::{SIGNIFICANCE_LEVEL, power};
pub use crate::power_sim::simulate_power;
pub use crate::sample_size::compute_ss::{DEFAULT_DESIRED_POWER, min_sample_size};
