//! Primary/fallback strategy seam shared by the matcher, recommender and gap analyzer.
//!
//! A primary strategy always runs. If its output reports itself unusable the fallback runs
//! against the same input and its output is returned instead.

use crate::catalog::Catalog;

/// Output that can tell whether it carries any signal.
pub trait Usable {
    fn is_usable(&self) -> bool;
}

impl<T> Usable for Vec<T> {
    fn is_usable(&self) -> bool {
        !self.is_empty()
    }
}

pub trait Strategy<I: ?Sized> {
    type Output: Usable;

    /// Short name reported back to callers and logs.
    fn label(&self) -> &'static str;

    fn apply(&self, catalog: &Catalog, input: &I) -> Self::Output;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<T> {
    pub output: T,
    pub strategy: &'static str,
    pub fell_back: bool,
}

pub fn run_with_fallback<I, P, F>(
    primary: &P,
    fallback: &F,
    catalog: &Catalog,
    input: &I,
) -> Outcome<P::Output>
where
    I: ?Sized,
    P: Strategy<I>,
    F: Strategy<I, Output = P::Output>,
{
    let output = primary.apply(catalog, input);
    if output.is_usable() {
        return Outcome {
            output,
            strategy: primary.label(),
            fell_back: false,
        };
    }

    tracing::debug!(
        primary = primary.label(),
        fallback = fallback.label(),
        "primary strategy produced no usable output"
    );

    Outcome {
        output: fallback.apply(catalog, input),
        strategy: fallback.label(),
        fell_back: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(Vec<u32>, &'static str);

    impl Strategy<str> for Fixed {
        type Output = Vec<u32>;

        fn label(&self) -> &'static str {
            self.1
        }

        fn apply(&self, _catalog: &Catalog, _input: &str) -> Vec<u32> {
            self.0.clone()
        }
    }

    fn empty_catalog() -> Catalog {
        Catalog::new(vec![], vec![], vec![], vec![], vec![]).unwrap()
    }

    #[test]
    fn test_usable_primary_wins() {
        let outcome = run_with_fallback(
            &Fixed(vec![1], "primary"),
            &Fixed(vec![2], "fallback"),
            &empty_catalog(),
            "x",
        );
        assert_eq!(outcome.output, vec![1]);
        assert_eq!(outcome.strategy, "primary");
        assert!(!outcome.fell_back);
    }

    #[test]
    fn test_empty_primary_falls_back() {
        let outcome = run_with_fallback(
            &Fixed(vec![], "primary"),
            &Fixed(vec![2], "fallback"),
            &empty_catalog(),
            "x",
        );
        assert_eq!(outcome.output, vec![2]);
        assert_eq!(outcome.strategy, "fallback");
        assert!(outcome.fell_back);
    }
}
