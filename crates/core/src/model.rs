/// A callable model that maps a typed input to a typed output.
///
/// Models must be deterministic, always producing the same result for a given
/// input. Sensitivity sweeps and reports rely on that to compare runs.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Calls the model with the given input.
    ///
    /// # Errors
    ///
    /// Each model defines its own `Error` type to represent domain-specific failures.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// A captured input/output pair from a model call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    /// Creates a new snapshot from input and output values.
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    struct Square;

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(input * input)
        }
    }

    #[test]
    fn snapshot_captures_call() {
        let input = 3.0;
        let output = Square.call(&input).unwrap();
        let snapshot = Snapshot::new(input, output);

        assert_eq!(snapshot.input, 3.0);
        assert_eq!(snapshot.output, 9.0);
    }
}
