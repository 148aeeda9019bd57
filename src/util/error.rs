//----------------------------------------
// util errors
//----------------------------------------
use crate::error::AbpowerErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("failed to bracket the target value after {0} window expansions")]
    FailedToBracket(usize),
    #[error("failed to converge (achieved: {0}, target: {1}, tolerance: {2})")]
    FailedToConverge(f64, f64, f64),
    #[error("search produced an invalid root; got {0}")]
    InvalidRoot(f64),
}

impl Into<AbpowerErr> for RootFindErr {
    fn into(self) -> AbpowerErr {
        AbpowerErr::SolverDidNotConverge(self)
    }
}

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be in [0, 1]; got {0}")]
    QuantileOutOfBounds(f64),
}

impl Into<AbpowerErr> for NormalDistErr {
    fn into(self) -> AbpowerErr {
        AbpowerErr::NormalDist(self)
    }
}
