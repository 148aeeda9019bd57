//----------------------------------------
// Crate error type
//----------------------------------------
use thiserror::Error;

pub use crate::power::error::ArgumentErr;
pub use crate::sample_size::error::DegenerateErr;
pub use crate::util::error::{NormalDistErr, RootFindErr};

#[derive(Error, Debug)]
pub enum AbpowerErr {
    #[error("invalid argument: {0}")]
    InvalidArgument(ArgumentErr),
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateErr),
    #[error("while searching for root: {0}")]
    SolverDidNotConverge(RootFindErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
}
