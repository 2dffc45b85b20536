use std::fmt::Debug;

use rand::Rng;
use rand::SeedableRng;

use crate::lever_assert_moderate;

/// Abstraction for randomness, in order to swap out different source of randomness.
///
/// The restart subsystem only draws floats (when perturbing variable activities after a
/// [`Lever::Reset`]), but going through this trait allows tests to script the exact values
/// which are drawn.
///
/// # Testing
/// There is an implementation of this trait which takes as input a list of `f64`s and returns
/// them in that order. This allows the user to define deterministic test-cases while the
/// implementation makes use of an implementation of the [`Random`] trait.
///
/// [`Lever::Reset`]: crate::Lever::Reset
pub trait Random: Debug {
    /// Generate a random float in the range 0..1.
    fn generate_f64(&mut self) -> f64;

    /// Generates a random float in the provided range with equal probability; this can be seen as
    /// sampling from a uniform distribution in the range `[lb, ub)`. It should hold that
    /// `lb < ub`.
    ///
    /// # Example
    /// ```rust
    /// # use rand::rngs::SmallRng;
    /// # use rand::SeedableRng;
    /// # use lever_restart::Random;
    /// let mut rng = SmallRng::seed_from_u64(42);
    /// let value = rng.generate_f64_in_range(0.0, 1e-5);
    /// assert!((0.0..1e-5).contains(&value));
    /// ```
    fn generate_f64_in_range(&mut self, lb: f64, ub: f64) -> f64;
}

// We provide a blanket implementation of the trait for any type which implements `SeedableRng`,
// `Rng` and `Debug` to ensure that we can use any "regular" random generator where we expect an
// implementation of Random.
impl<T> Random for T
where
    T: SeedableRng + Rng + Debug,
{
    fn generate_f64(&mut self) -> f64 {
        self.gen_range(0.0..1.0)
    }

    fn generate_f64_in_range(&mut self, lb: f64, ub: f64) -> f64 {
        lever_assert_moderate!(lb < ub, "It should hold that {lb} < {ub}");
        self.gen_range(lb..ub)
    }
}
