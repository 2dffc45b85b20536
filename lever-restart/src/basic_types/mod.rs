mod random;
pub(crate) mod sequence_generators;
pub(crate) mod time;

pub use random::Random;
#[cfg(test)]
pub(crate) use random::tests::TestRandom;
