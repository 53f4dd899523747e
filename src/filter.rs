//! Array transforms.  Each stage of the pipeline after generation
//! consumes a field and produces a new one of the same shape, so they
//! chain left to right:
//!
//! ```ignore
//! mandelbrot.generate()?
//!     .filter_pass(ToneFilter::high_contrast())
//!     .filter_pass(Quantizer)
//! ```

/// A whole-buffer transform that takes ownership of its input.
pub trait Filter<In> {
    /// What the transform produces.
    type Out;
    /// Runs the transform.
    fn filter(&self, input: In) -> Self::Out;
}

/// Lets a value be pushed through a filter in method position.
pub trait FilterPass<F>: Sized
where
    F: Filter<Self>,
{
    /// Equivalent to `filter.filter(self)`.
    fn filter_pass(self, filter: F) -> F::Out;
}

impl<T, F> FilterPass<F> for T
where
    F: Filter<T>,
{
    fn filter_pass(self, filter: F) -> F::Out {
        filter.filter(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Double;
    impl Filter<Vec<i32>> for Double {
        type Out = Vec<i32>;
        fn filter(&self, input: Vec<i32>) -> Vec<i32> {
            input.into_iter().map(|v| v * 2).collect()
        }
    }

    #[test]
    fn passes_chain_in_order() {
        assert_eq!(vec![1, 2, 3].filter_pass(Double).filter_pass(Double), vec![4, 8, 12]);
    }
}
