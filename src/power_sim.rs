use rand::{SeedableRng, rngs};
use rand_distr::{Binomial, Distribution};

use crate::error::AbpowerErr;
use crate::power::compute_power::{SIGNIFICANCE_LEVEL, alternative_rate, null_reject_bound};
use crate::power::error::ArgumentErr;
use crate::power::types::EffectKind;
use crate::util::std_normal::std_normal_quantile;

/// Estimates the power of a two-sided two-proportion z-test by simulation:
/// draws `n_sims` trials of `sample_size` subjects per arm, with the
/// control arm converting at `baseline` and the treatment arm at the rate
/// implied by `min_effect` and `kind`, and returns the fraction of trials
/// where the difference in sample rates lands outside the acceptance
/// region the analytic formula uses. Deterministic for a fixed seed
pub fn simulate_power(
    baseline: f64,
    min_effect: f64,
    sample_size: usize,
    kind: EffectKind,
    n_sims: usize,
    seed: u64,
) -> Result<f64, AbpowerErr> {
    //----------------------------------------
    // Check arguments
    if !(baseline > 0.0 && baseline < 1.0) {
        return Err(ArgumentErr::BaselineOutOfBounds(baseline).into());
    }
    if sample_size == 0 {
        return Err(ArgumentErr::BadSampleSize(0.0).into());
    }
    if n_sims == 0 {
        return Err(ArgumentErr::NoSimulations.into());
    }
    let alternative = alternative_rate(baseline, min_effect, kind)?;

    //----------------------------------------
    // Acceptance region under the null, matching the analytic formula
    let n = sample_size as f64;
    let z_crit = std_normal_quantile(1.0 - SIGNIFICANCE_LEVEL / 2.0)?;
    let reject_bound = null_reject_bound(baseline, n, z_crit);

    //----------------------------------------
    // Draw both arms and count rejections
    let mut rng = rngs::StdRng::seed_from_u64(seed);
    let ctrl_binom = Binomial::new(sample_size as u64, baseline).unwrap();
    let trt_binom = Binomial::new(sample_size as u64, alternative).unwrap();
    let mut n_rejections = 0;
    for _ in 0..n_sims {
        let ctrl_rate = ctrl_binom.sample(&mut rng) as f64 / n;
        let trt_rate = trt_binom.sample(&mut rng) as f64 / n;
        if (trt_rate - ctrl_rate).abs() > reject_bound {
            n_rejections += 1;
        }
    }
    Ok(n_rejections as f64 / n_sims as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::power::compute_power::power;

    #[test]
    fn simulated_power_matches_analytic() {
        let simulated =
            simulate_power(0.1, 0.02, 1000, EffectKind::Absolute, 40_000, 24601).unwrap();
        let analytic = power(0.1, 0.02, 1000.0, EffectKind::Absolute).unwrap();
        assert!((simulated - analytic).abs() < 0.02);
    }

    #[test]
    fn simulated_null_rejection_near_significance_level() {
        let simulated =
            simulate_power(0.1, 0.0, 1000, EffectKind::Absolute, 40_000, 24601).unwrap();
        assert!((simulated - SIGNIFICANCE_LEVEL).abs() < 0.01);
    }

    #[test]
    fn simulation_deterministic_for_seed() {
        let first = simulate_power(0.2, 0.05, 500, EffectKind::Absolute, 5_000, 7).unwrap();
        let second = simulate_power(0.2, 0.05, 500, EffectKind::Absolute, 5_000, 7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn simulated_relative_effect() {
        let simulated =
            simulate_power(0.1, 0.5, 599, EffectKind::Relative, 40_000, 24601).unwrap();
        assert!((simulated - 0.8).abs() < 0.02);
    }

    #[test]
    fn simulation_no_sims_error() {
        if let Err(e) = simulate_power(0.1, 0.02, 1000, EffectKind::Absolute, 0, 1) {
            assert_eq!(
                String::from("invalid argument: number of simulations was zero"),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn simulation_argument_errors() {
        assert!(simulate_power(0.1, 0.02, 0, EffectKind::Absolute, 100, 1).is_err());
        assert!(simulate_power(1.2, 0.02, 1000, EffectKind::Absolute, 100, 1).is_err());
        assert!(simulate_power(0.5, 0.6, 1000, EffectKind::Absolute, 100, 1).is_err());
        let res = simulate_power(f64::NAN, 0.02, 1000, EffectKind::Absolute, 100, 1);
        assert!(res.is_err_and(|e| format!("{}", e).starts_with("invalid argument: baseline")));
    }
}
