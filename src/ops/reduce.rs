//! Horizontal reductions over a vector's cells

use num_traits::{One, Zero};

use crate::dispatch::Span;
use crate::ops::{max_of, min_of};
use crate::scalar::Element;
use crate::vector::Vector;

impl<E: Element, const N: usize> Vector<E, N> {
    /// Sum of all elements; zero for an empty vector
    ///
    /// ```
    /// use trueno_fixed::Vector;
    ///
    /// assert_eq!(Vector::new([1, 2, 3]).sum(), 6);
    /// ```
    pub fn sum(&self) -> E::Value {
        self.sum_span(Span::Full)
    }

    /// Sum of the elements inside `span`
    pub fn sum_span(&self, span: Span) -> E::Value {
        self.data[span.clip(N)]
            .iter()
            .fold(<E::Value as Zero>::zero(), |acc, cell| acc + *cell.value())
    }

    /// Product of all elements; one for an empty vector
    pub fn product(&self) -> E::Value {
        self.iter().fold(<E::Value as One>::one(), |acc, &x| acc * x)
    }

    /// Smallest element, `None` for an empty vector
    ///
    /// NaN elements never win a comparison and are skipped unless first.
    pub fn min_element(&self) -> Option<E::Value> {
        self.iter().copied().reduce(min_of)
    }

    /// Largest element, `None` for an empty vector
    pub fn max_element(&self) -> Option<E::Value> {
        self.iter().copied().reduce(max_of)
    }
}
