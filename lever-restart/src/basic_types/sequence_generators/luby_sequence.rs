use super::SequenceGenerator;

// The Luby sequence is a recursive sequence of the form:
// 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2....
//  The above sequence is multiplied with a given constant 'base_value'
// Generating the next element is computed in constant time using Knuth's 'reluctant doubling'
// formula. Note that overflows are not taken into account
#[derive(Debug, Copy, Clone)]
pub(crate) struct LubySequence {
    u: u64,
    v: u64,
    base_value: u64,
}

impl LubySequence {
    pub(crate) fn new(base_value: u64) -> LubySequence {
        LubySequence {
            u: 1,
            v: 1,
            base_value,
        }
    }
}

impl SequenceGenerator for LubySequence {
    fn next(&mut self) -> u64 {
        // `u & -u` isolates the lowest set bit of `u`
        let next_value = self.v;
        if (self.u & self.u.wrapping_neg()) == self.v {
            self.u += 1;
            self.v = 1;
        } else {
            self.v *= 2;
        }
        next_value * self.base_value
    }
}
