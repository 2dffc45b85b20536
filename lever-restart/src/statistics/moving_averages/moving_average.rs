/// A running average over a stream of terms.
pub trait MovingAverage<Term> {
    fn add_term(&mut self, new_term: Term);

    /// Returns the moving average value; in case there are no terms, the convention is to return 0
    fn value(&self) -> f64;
}
