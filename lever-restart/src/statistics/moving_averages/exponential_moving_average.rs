// Exponential moving average with the bias correction described in "Evaluating CDCL Restart
// Schemes" by Biere and Fröhlich (2015). Without correction the first terms are pulled towards
// the initial value of zero; dividing by `1 - beta^i` removes that pull.
//
// biased_{i+1} = biased_i + alpha * (g_i - biased_i)
// value_{i+1}  = biased_{i+1} / (1 - beta^{i+1}),  beta = 1 - alpha

use std::fmt::Debug;

use num::cast::AsPrimitive;

use super::MovingAverage;
use crate::lever_assert_simple;

#[derive(Debug, Copy, Clone)]
pub struct ExponentialMovingAverage {
    alpha: f64,
    beta: f64,
    biased: f64,
    /// `beta^i` after `i` terms; reaches zero (and stays there) once it underflows.
    exp: f64,
    value: f64,
}

impl ExponentialMovingAverage {
    /// Creates an average which weighs the new term with `1 / window`.
    pub fn new(window: u64) -> ExponentialMovingAverage {
        lever_assert_simple!(window > 0);
        let alpha = 1.0 / window as f64;
        ExponentialMovingAverage {
            alpha,
            beta: 1.0 - alpha,
            biased: 0.0,
            exp: 1.0,
            value: 0.0,
        }
    }
}

impl<Term> MovingAverage<Term> for ExponentialMovingAverage
where
    Term: Debug + AsPrimitive<f64>,
{
    fn add_term(&mut self, new_term: Term) {
        self.biased += self.alpha * (new_term.as_() - self.biased);
        if self.exp > 0.0 {
            self.exp *= self.beta;
            let divisor = 1.0 - self.exp;
            self.value = self.biased / divisor;
        } else {
            self.value = self.biased;
        }
    }

    fn value(&self) -> f64 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let average = ExponentialMovingAverage::new(33);
        assert_eq!(MovingAverage::<u32>::value(&average), 0.0);
    }

    #[test]
    fn first_term_is_not_biased_towards_zero() {
        let mut average = ExponentialMovingAverage::new(100_000);
        average.add_term(7_u32);
        assert!((MovingAverage::<u32>::value(&average) - 7.0).abs() < 1e-6);
    }

    #[test]
    fn test_constant_value() {
        let mut average = ExponentialMovingAverage::new(33);
        for _ in 0..1000 {
            average.add_term(5_u32);
            assert!((MovingAverage::<u32>::value(&average) - 5.0).abs() < 1e-9);
        }
    }

    #[test]
    fn short_window_follows_recent_terms_faster() {
        let mut fast = ExponentialMovingAverage::new(2);
        let mut slow = ExponentialMovingAverage::new(1000);
        for _ in 0..100 {
            fast.add_term(2_u32);
            slow.add_term(2_u32);
        }
        for _ in 0..10 {
            fast.add_term(10_u32);
            slow.add_term(10_u32);
        }
        assert!(MovingAverage::<u32>::value(&fast) > 9.9);
        assert!(MovingAverage::<u32>::value(&slow) < 3.0);
    }
}
