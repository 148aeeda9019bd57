//----------------------------------------
// power mod types
//----------------------------------------
use std::str::FromStr;

use crate::error::AbpowerErr;
use crate::power::error::ArgumentErr;

/// How the minimum effect of interest is expressed: as an absolute
/// difference in conversion rates, or as a lift relative to the baseline
/// rate (so a baseline of 0.1 with a relative effect of 0.5 means an
/// alternative rate of 0.15)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EffectKind {
    #[default]
    Absolute,
    Relative,
}

impl FromStr for EffectKind {
    type Err = AbpowerErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "absolute" => Ok(EffectKind::Absolute),
            "relative" => Ok(EffectKind::Relative),
            _ => Err(ArgumentErr::UnknownEffectKind(s.to_string()).into()),
        }
    }
}
