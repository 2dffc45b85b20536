mod cumulative_moving_average;
mod exponential_moving_average;
mod moving_average;

pub use cumulative_moving_average::CumulativeMovingAverage;
pub use exponential_moving_average::ExponentialMovingAverage;
pub use moving_average::MovingAverage;
