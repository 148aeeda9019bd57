use statrs::distribution::{ContinuousCDF, Normal};

use crate::error::AbpowerErr;
use crate::util::error::NormalDistErr;

pub fn std_normal_cdf(z: f64) -> f64 {
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    std_normal.cdf(z)
}

pub fn std_normal_quantile(p: f64) -> Result<f64, AbpowerErr> {
    if p < 0.0 || p > 1.0 {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    Ok(std_normal.inverse_cdf(p))
}
