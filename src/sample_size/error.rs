//----------------------------------------
// sample size errors
//----------------------------------------
use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DegenerateErr {
    #[error("effect size of zero cannot reach the desired power at any sample size")]
    ZeroEffect,
}

impl Into<AbpowerErr> for DegenerateErr {
    fn into(self) -> AbpowerErr {
        AbpowerErr::DegenerateInput(self)
    }
}
