use crate::error::AbpowerErr;
use crate::util::error::RootFindErr;

/// Window expansions allowed before bracketing is abandoned
const MAX_EXPANSIONS: usize = 64;

/// Bisection iterations allowed once the target is bracketed
const MAX_ITERATIONS: usize = 200;

/// Given a monotonically increasing function f(x) over positive x and an
/// initial guess, widens a window around the guess until it brackets the
/// target value, then bisects to find x' such that f(x') = target
pub fn root_find_monotonic<F>(
    f: F,
    initial_guess: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbpowerErr>
where
    F: Fn(f64) -> f64,
{
    //----------------------------------------
    // Set window for search
    let mut lower_bound = initial_guess;
    let mut upper_bound = initial_guess;
    let mut expansions = 0;
    while f(upper_bound) < target {
        if expansions >= MAX_EXPANSIONS {
            return Err(RootFindErr::FailedToBracket(MAX_EXPANSIONS).into());
        }
        upper_bound *= 2.0;
        expansions += 1;
    }
    while f(lower_bound) >= target {
        if expansions >= MAX_EXPANSIONS {
            return Err(RootFindErr::FailedToBracket(MAX_EXPANSIONS).into());
        }
        lower_bound /= 2.0;
        expansions += 1;
    }

    //----------------------------------------
    // Perform search
    bisect(&f, lower_bound, upper_bound, target, tol)
}

/// Given a monotonically increasing function f(x) and a window already
/// known to contain the target value, bisects to find x' such that
/// f(x') = target. The window endpoints themselves are never evaluated
pub fn root_find_bracketed<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbpowerErr>
where
    F: Fn(f64) -> f64,
{
    bisect(&f, lower_bound, upper_bound, target, tol)
}

fn bisect<F>(
    f: &F,
    mut lower_bound: f64,
    mut upper_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbpowerErr>
where
    F: Fn(f64) -> f64,
{
    let mut x = (lower_bound + upper_bound) / 2.0;
    let mut y = f(x);
    let mut iterations = 0;
    while (y - target).abs() > tol && iterations < MAX_ITERATIONS {
        if y <= target {
            lower_bound = x;
        } else {
            upper_bound = x;
        }
        x = (lower_bound + upper_bound) / 2.0;
        y = f(x);
        iterations += 1;
    }
    // The negated form also catches a NaN function value
    if !((y - target).abs() <= tol) {
        return Err(RootFindErr::FailedToConverge(y, target, tol).into());
    }
    Ok(x)
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn basic_linear_root_find() {
        let f = |x| x;
        let res =
            root_find_monotonic(f, 1.0, 3.0, 0.001).expect("failed to perform linear root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn basic_quadratic_root_find() {
        let f = |x| x * x;
        let res =
            root_find_monotonic(f, 1.0, 9.0, 0.001).expect("failed to perform quadratic root find");
        assert!((res - 3.0).abs() < 0.001);
    }

    #[test]
    fn root_find_below_initial_guess() {
        let f = |x| x;
        let res = root_find_monotonic(f, 1000.0, 0.125, 0.0001)
            .expect("failed to find root below initial guess");
        assert!((res - 0.125).abs() < 0.0001);
    }

    #[test]
    fn root_find_flat_function_error() {
        let f = |_x: f64| 0.5;
        if let Err(e) = root_find_monotonic(f, 1.0, 2.0, 0.001) {
            assert_eq!(
                String::from(
                    "while searching for root: failed to bracket the target \
                    value after 64 window expansions"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }

    #[test]
    fn bracketed_root_find() {
        let f = |x: f64| x.powi(3);
        let res = root_find_bracketed(f, 0.0, 2.0, 1.0, 1e-9)
            .expect("failed to perform bracketed root find");
        assert!((res - 1.0).abs() < 1e-6);
    }

    #[test]
    fn bracketed_root_find_convergence_error() {
        // Step function never comes within tolerance of the target
        let f = |x: f64| if x < 5.0 { 0.0 } else { 1.0 };
        if let Err(AbpowerErr::SolverDidNotConverge(RootFindErr::FailedToConverge(
            achieved,
            target,
            tol,
        ))) = root_find_bracketed(f, 0.0, 10.0, 0.5, 0.001)
        {
            assert!(achieved == 0.0 || achieved == 1.0);
            assert_eq!(target, 0.5);
            assert_eq!(tol, 0.001);
        } else {
            panic!()
        }
    }

    #[test]
    fn bracketed_root_find_nan_function_error() {
        // Square root of a negative number, so every evaluation is NaN
        let f = |x: f64| (x - 5.0).sqrt();
        if let Err(AbpowerErr::SolverDidNotConverge(RootFindErr::FailedToConverge(
            achieved,
            target,
            tol,
        ))) = root_find_bracketed(f, 0.0, 1.0, 0.5, 0.001)
        {
            assert!(achieved.is_nan());
            assert_eq!(target, 0.5);
            assert_eq!(tol, 0.001);
        } else {
            panic!()
        }
    }
}
