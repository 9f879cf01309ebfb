//! Evaluates a model at a baseline input and at labelled variants of it.
//!
//! A sweep is the building block for one-at-a-time sensitivity studies:
//! each [`Variant`] perturbs the baseline input, and the resulting
//! [`Sweep`] keeps every call as a [`Snapshot`] so callers can compare any
//! output metric against the baseline.

use thiserror::Error;

use crate::{Model, Snapshot};

/// A labelled model input to evaluate alongside the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variant<I> {
    pub label: &'static str,
    pub input: I,
}

impl<I> Variant<I> {
    /// Creates a new labelled variant.
    pub fn new(label: &'static str, input: I) -> Self {
        Self { label, input }
    }
}

/// The captured results of a sweep.
#[derive(Debug, Clone, PartialEq)]
pub struct Sweep<I, O> {
    pub baseline: Snapshot<I, O>,
    pub variants: Vec<(&'static str, Snapshot<I, O>)>,
}

/// Errors that can occur while running a sweep.
#[derive(Debug, Error)]
pub enum SweepError<E> {
    /// The model call at the baseline input failed.
    #[error("baseline model call failed")]
    Baseline(#[source] E),
    /// The model call for a variant failed.
    #[error("model call for variant `{label}` failed")]
    Variant {
        label: &'static str,
        #[source]
        source: E,
    },
}

/// Calls `model` at `baseline` and at each variant, in order.
///
/// # Errors
///
/// Returns the first model error encountered, tagged with where it occurred.
pub fn sweep<M, V>(
    model: &M,
    baseline: M::Input,
    variants: V,
) -> Result<Sweep<M::Input, M::Output>, SweepError<M::Error>>
where
    M: Model,
    V: IntoIterator<Item = Variant<M::Input>>,
{
    let output = model.call(&baseline).map_err(SweepError::Baseline)?;
    let baseline = Snapshot::new(baseline, output);

    let variants = variants
        .into_iter()
        .map(|Variant { label, input }| {
            model
                .call(&input)
                .map(|output| (label, Snapshot::new(input, output)))
                .map_err(|source| SweepError::Variant { label, source })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Sweep { baseline, variants })
}

impl<I, O> Sweep<I, O> {
    /// Returns the percent change of `metric` for each variant relative to the baseline.
    ///
    /// The change is `None` when the baseline metric is zero.
    pub fn percent_changes<F>(&self, metric: F) -> Vec<(&'static str, f64, Option<f64>)>
    where
        F: Fn(&O) -> f64,
    {
        let base = metric(&self.baseline.output);

        self.variants
            .iter()
            .map(|(label, snapshot)| {
                let value = metric(&snapshot.output);
                let change = (base != 0.0).then(|| (value - base) / base.abs() * 100.0);
                (*label, value, change)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Linear {
        slope: f64,
    }

    impl Model for Linear {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(self.slope * input)
        }
    }

    #[derive(Debug, Error)]
    #[error("negative input")]
    struct NegativeInput;

    struct Sqrt;

    impl Model for Sqrt {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn call(&self, input: &f64) -> Result<f64, NegativeInput> {
            if *input < 0.0 {
                Err(NegativeInput)
            } else {
                Ok(input.sqrt())
            }
        }
    }

    #[test]
    fn captures_baseline_and_variants_in_order() {
        let result = sweep(
            &Linear { slope: 2.0 },
            1.0,
            [Variant::new("double", 2.0), Variant::new("half", 0.5)],
        )
        .unwrap();

        assert_eq!(result.baseline, Snapshot::new(1.0, 2.0));
        assert_eq!(result.variants.len(), 2);
        assert_eq!(result.variants[0], ("double", Snapshot::new(2.0, 4.0)));
        assert_eq!(result.variants[1], ("half", Snapshot::new(0.5, 1.0)));
    }

    #[test]
    fn percent_changes_relative_to_baseline() {
        let result = sweep(
            &Linear { slope: 3.0 },
            10.0,
            [Variant::new("up", 15.0), Variant::new("down", 5.0)],
        )
        .unwrap();

        let changes = result.percent_changes(|output| *output);
        assert_eq!(changes[0].0, "up");
        assert_relative_eq!(changes[0].1, 45.0);
        assert_relative_eq!(changes[0].2.unwrap(), 50.0);
        assert_relative_eq!(changes[1].2.unwrap(), -50.0);
    }

    #[test]
    fn zero_baseline_has_no_percent_change() {
        let result = sweep(&Linear { slope: 1.0 }, 0.0, [Variant::new("one", 1.0)]).unwrap();

        let changes = result.percent_changes(|output| *output);
        assert_eq!(changes[0].2, None);
    }

    #[test]
    fn reports_failing_variant() {
        let error = sweep(&Sqrt, 4.0, [Variant::new("negative", -1.0)]).unwrap_err();

        assert!(matches!(error, SweepError::Variant { label: "negative", .. }));
        assert_eq!(error.to_string(), "model call for variant `negative` failed");
    }

    #[test]
    fn reports_failing_baseline() {
        let error = sweep(&Sqrt, -4.0, Vec::<Variant<f64>>::new()).unwrap_err();

        assert!(matches!(error, SweepError::Baseline(NegativeInput)));
    }
}
