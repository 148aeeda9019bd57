use crate::error::AbpowerErr;
use crate::power::compute_power::{SIGNIFICANCE_LEVEL, alternative_rate, power_from_rates};
use crate::power::error::ArgumentErr;
use crate::power::types::EffectKind;
use crate::sample_size::error::DegenerateErr;
use crate::util::error::RootFindErr;
use crate::util::root_find::root_find_monotonic;
use crate::util::std_normal::std_normal_quantile;

/// Power targeted when the caller does not specify one
pub const DEFAULT_DESIRED_POWER: f64 = 0.8;

/// Per-arm sample size where the search for the desired power begins
const INITIAL_SAMPLE_SIZE_GUESS: f64 = 1000.0;

/// Absolute tolerance on achieved power at the returned sample size
const POWER_TOL: f64 = 1e-6;

/// Computes the smallest per-arm sample size at which a two-sided
/// two-proportion z-test detects `min_effect` with the desired power
/// (0.8 when `maybe_desired_power` is `None`).
/// Power is monotonically increasing in the sample size, so the search
/// brackets the target power starting from a window around
/// INITIAL_SAMPLE_SIZE_GUESS and bisects. The converged sample size is
/// truncated to a whole number of subjects
pub fn min_sample_size(
    baseline: f64,
    min_effect: f64,
    kind: EffectKind,
    maybe_desired_power: Option<f64>,
) -> Result<usize, AbpowerErr> {
    //----------------------------------------
    // Check arguments
    if !(baseline > 0.0 && baseline < 1.0) {
        return Err(ArgumentErr::BaselineOutOfBounds(baseline).into());
    }
    let desired_power = maybe_desired_power.unwrap_or(DEFAULT_DESIRED_POWER);
    if !(desired_power > 0.0 && desired_power < 1.0) {
        return Err(ArgumentErr::DesiredPowerOutOfBounds(desired_power).into());
    }
    let alternative = alternative_rate(baseline, min_effect, kind)?;
    if alternative == baseline {
        return Err(DegenerateErr::ZeroEffect.into());
    }

    //----------------------------------------
    // Invert power over the per-arm sample size
    let z_crit = std_normal_quantile(1.0 - SIGNIFICANCE_LEVEL / 2.0)?;
    let power_at = |n: f64| power_from_rates(baseline, alternative, n, z_crit);
    let root = root_find_monotonic(
        power_at,
        INITIAL_SAMPLE_SIZE_GUESS,
        desired_power,
        POWER_TOL,
    )?;
    // usize::MAX as f64 rounds up to 2^64; a root at or above it would
    // saturate the cast below
    if !root.is_finite() || root < 0.0 || root >= usize::MAX as f64 {
        return Err(RootFindErr::InvalidRoot(root).into());
    }
    Ok(root as usize)
}
