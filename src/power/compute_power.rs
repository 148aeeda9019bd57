use crate::error::AbpowerErr;
use crate::power::error::ArgumentErr;
use crate::power::types::EffectKind;
use crate::util::std_normal::{std_normal_cdf, std_normal_quantile};

/// Two-sided significance level of the underlying z-test
pub const SIGNIFICANCE_LEVEL: f64 = 0.05;

/// Computes the power of a two-sided two-proportion z-test under a normal
/// approximation, i.e. the probability of detecting a true difference of
/// `min_effect` between the arms.
/// `baseline` is the control arm conversion rate, `sample_size` is the
/// number of subjects per arm, and `kind` determines whether `min_effect`
/// is an absolute difference in rates or a lift relative to `baseline`.
/// The test rejects when the observed difference in rates falls outside
/// the interval the null distribution assigns probability
/// 1 - SIGNIFICANCE_LEVEL; power is the probability the alternative
/// distribution assigns to the outside of that interval.
/// Note that the null distribution uses the baseline variance for both
/// arms, while the alternative uses each arm's own variance
pub fn power(
    baseline: f64,
    min_effect: f64,
    sample_size: f64,
    kind: EffectKind,
) -> Result<f64, AbpowerErr> {
    //----------------------------------------
    // Check arguments
    if !(baseline > 0.0 && baseline < 1.0) {
        return Err(ArgumentErr::BaselineOutOfBounds(baseline).into());
    }
    if !(sample_size.is_finite() && sample_size > 0.0) {
        return Err(ArgumentErr::BadSampleSize(sample_size).into());
    }
    let alternative = alternative_rate(baseline, min_effect, kind)?;

    //----------------------------------------
    // Compute power
    let z_crit = std_normal_quantile(1.0 - SIGNIFICANCE_LEVEL / 2.0)?;
    let computed_power = power_from_rates(baseline, alternative, sample_size, z_crit);
    // Sample sizes small enough to overflow the variance terms degrade
    // the result to NaN
    if !computed_power.is_finite() {
        return Err(ArgumentErr::BadSampleSize(sample_size).into());
    }
    Ok(computed_power)
}

/// Treatment arm rate implied by the baseline rate and the minimum effect
pub(crate) fn alternative_rate(
    baseline: f64,
    min_effect: f64,
    kind: EffectKind,
) -> Result<f64, AbpowerErr> {
    let alternative = match kind {
        EffectKind::Absolute => baseline + min_effect,
        EffectKind::Relative => baseline + min_effect * baseline,
    };
    if !(alternative > 0.0 && alternative < 1.0) {
        return Err(
            ArgumentErr::AlternativeRateOutOfBounds(baseline, min_effect, alternative).into(),
        );
    }
    Ok(alternative)
}

/// Half-width of the acceptance region for the difference in sample rates,
/// computed under the null hypothesis where both arms convert at the
/// baseline rate
pub(crate) fn null_reject_bound(baseline: f64, sample_size: f64, z_crit: f64) -> f64 {
    z_crit * (2.0 * baseline * (1.0 - baseline) / sample_size).sqrt()
}

// Validation happens in the callers; rates must be in (0, 1) and the
// sample size must be positive by the time this runs
pub(crate) fn power_from_rates(
    baseline: f64,
    alternative: f64,
    sample_size: f64,
    z_crit: f64,
) -> f64 {
    let reject_bound = null_reject_bound(baseline, sample_size, z_crit);
    let mean_alt = alternative - baseline;
    let sd_alt = (baseline * (1.0 - baseline) / sample_size
        + alternative * (1.0 - alternative) / sample_size)
        .sqrt();

    // Mass of the alternative distribution outside [-reject_bound, reject_bound]
    1.0 - std_normal_cdf((reject_bound - mean_alt) / sd_alt)
        + std_normal_cdf((-reject_bound - mean_alt) / sd_alt)
}
