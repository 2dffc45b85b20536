use crate::basic_types::sequence_generators::LubySequence;
use crate::basic_types::sequence_generators::SequenceGenerator;
use crate::lever_assert_simple;

/// Paces the restarts in stable mode following the Luby sequence \[1\] (computed with Knuth's
/// reluctant doubling formula), scaled by a period.
///
/// Every conflict ticks a countdown; when the countdown runs out a trigger is raised and the
/// countdown is reloaded with the next element of the sequence. Once an element would exceed
/// `limit` conflicts, the sequence starts over.
///
/// # Bibliography
/// \[1\] M. Luby, A. Sinclair, and D. Zuckerman, ‘Optimal speedup of Las Vegas algorithms’,
/// Information Processing Letters, vol. 47, no. 4, pp. 173–180, 1993.
#[derive(Debug, Clone, Copy)]
pub struct ReluctantDoubling {
    sequence: LubySequence,
    period: u64,
    /// A value of 0 means that the sequence is never restarted.
    limit: u64,
    countdown: u64,
    trigger: bool,
}

impl ReluctantDoubling {
    pub fn new(period: u64, limit: u64) -> Self {
        lever_assert_simple!(period > 0);
        let mut sequence = LubySequence::new(period);
        let countdown = sequence.next();
        ReluctantDoubling {
            sequence,
            period,
            limit,
            countdown,
            trigger: false,
        }
    }

    /// Notifies the schedule that a conflict has taken place.
    pub fn tick(&mut self) {
        if self.trigger {
            return;
        }

        self.countdown -= 1;
        if self.countdown > 0 {
            return;
        }

        let mut wait = self.sequence.next();
        if self.limit > 0 && wait > self.limit {
            self.sequence = LubySequence::new(self.period);
            wait = self.sequence.next();
        }
        self.countdown = wait;
        self.trigger = true;
    }

    /// Returns whether the trigger was raised, and lowers it.
    pub fn triggered(&mut self) -> bool {
        std::mem::take(&mut self.trigger)
    }
}
