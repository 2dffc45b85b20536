mod luby_sequence;
mod sequence_generator;

pub(crate) use luby_sequence::LubySequence;
pub(crate) use sequence_generator::SequenceGenerator;
