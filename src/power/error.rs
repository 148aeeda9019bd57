//----------------------------------------
// power errors
//----------------------------------------
use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArgumentErr {
    #[error("baseline rate should be in (0, 1); got {0}")]
    BaselineOutOfBounds(f64),
    #[error("sample size should be positive and finite; got {0}")]
    BadSampleSize(f64),
    #[error("desired power should be in (0, 1); got {0}")]
    DesiredPowerOutOfBounds(f64),
    #[error("alternative rate should be in (0, 1); got {2} (baseline: {0}, effect: {1})")]
    AlternativeRateOutOfBounds(f64, f64, f64),
    #[error("effect kind should be \"absolute\" or \"relative\"; got \"{0}\"")]
    UnknownEffectKind(String),
    #[error("number of simulations was zero")]
    NoSimulations,
}

impl Into<AbpowerErr> for ArgumentErr {
    fn into(self) -> AbpowerErr {
        AbpowerErr::InvalidArgument(self)
    }
}
