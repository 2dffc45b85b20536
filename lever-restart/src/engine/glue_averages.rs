use crate::statistics::moving_averages::ExponentialMovingAverage;
use crate::statistics::moving_averages::MovingAverage;

/// Fast and slow moving averages over the glue of the learned clauses.
///
/// The fast average tracks the recent clause quality whereas the slow average tracks the
/// long-term trend; in focused mode a restart is triggered when the former is no better than a
/// margin above the latter.
#[derive(Debug, Clone, Copy)]
pub struct GlueAverages {
    fast: ExponentialMovingAverage,
    slow: ExponentialMovingAverage,
}

impl GlueAverages {
    pub fn new(fast_window: u64, slow_window: u64) -> Self {
        GlueAverages {
            fast: ExponentialMovingAverage::new(fast_window),
            slow: ExponentialMovingAverage::new(slow_window),
        }
    }

    /// Adds the glue of a newly learned clause to both averages.
    pub fn update(&mut self, glue: u32) {
        self.fast.add_term(glue);
        self.slow.add_term(glue);
    }

    pub fn fast(&self) -> f64 {
        MovingAverage::<u32>::value(&self.fast)
    }

    pub fn slow(&self) -> f64 {
        MovingAverage::<u32>::value(&self.slow)
    }
}

#[cfg(test)]
mod tests {
    use super::GlueAverages;

    #[test]
    fn fast_average_reacts_to_worse_glue_first() {
        let mut averages = GlueAverages::new(33, 100_000);
        for _ in 0..2000 {
            averages.update(3);
        }
        for _ in 0..150 {
            averages.update(9);
        }
        assert!(averages.fast() > 8.0);
        assert!(averages.slow() < 4.0);
    }
}
