use crate::error::AbpowerErr;
use crate::power::compute_power::{SIGNIFICANCE_LEVEL, power_from_rates};
use crate::power::error::ArgumentErr;
use crate::power::types::EffectKind;
use crate::sample_size::compute_ss::DEFAULT_DESIRED_POWER;
use crate::util::root_find::root_find_bracketed;
use crate::util::std_normal::std_normal_quantile;

/// Absolute tolerance on achieved power at the returned effect
const POWER_TOL: f64 = 1e-6;

/// Computes the smallest effect a two-sided two-proportion z-test detects
/// with the desired power (0.8 when `maybe_desired_power` is `None`) at
/// the given per-arm sample size.
/// Power rises continuously from the significance level toward 1 as the
/// alternative rate moves from the baseline toward 1, so the search
/// bisects the alternative rate over that interval and then maps the
/// converged rate back through `kind`
pub fn min_detectable_effect(
    baseline: f64,
    sample_size: f64,
    kind: EffectKind,
    maybe_desired_power: Option<f64>,
) -> Result<f64, AbpowerErr> {
    //----------------------------------------
    // Check arguments
    if !(baseline > 0.0 && baseline < 1.0) {
        return Err(ArgumentErr::BaselineOutOfBounds(baseline).into());
    }
    if !(sample_size.is_finite() && sample_size > 0.0) {
        return Err(ArgumentErr::BadSampleSize(sample_size).into());
    }
    let desired_power = maybe_desired_power.unwrap_or(DEFAULT_DESIRED_POWER);
    if !(desired_power > 0.0 && desired_power < 1.0) {
        return Err(ArgumentErr::DesiredPowerOutOfBounds(desired_power).into());
    }

    //----------------------------------------
    // Invert power over the alternative rate, then recover the effect
    let z_crit = std_normal_quantile(1.0 - SIGNIFICANCE_LEVEL / 2.0)?;
    let power_at = |alternative: f64| power_from_rates(baseline, alternative, sample_size, z_crit);
    let alternative = root_find_bracketed(power_at, baseline, 1.0, desired_power, POWER_TOL)?;

    match kind {
        EffectKind::Absolute => Ok(alternative - baseline),
        EffectKind::Relative => Ok((alternative - baseline) / baseline),
    }
}
