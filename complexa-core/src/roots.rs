use std::f64::consts::PI;
use std::iter::FusedIterator;

use crate::complex::Complex;

/// Lazy sequence of the `n`-th roots of a complex number.
///
/// Created by [`Complex::all_roots`]. Root `i` is
/// `|z|^(1/n) · e^(i·(arg z / n + 2πi/n))`, produced for `i = 0, 1, …` while
/// `i < n`. A positive integer `n` gives exactly `n` roots; a fractional `n`
/// rounds the count up, and `n <= 0` or NaN gives an empty sequence.
///
/// The iterator owns all of its state, so cloning it (or calling
/// `all_roots` again) restarts the sequence independently.
#[derive(Debug, Clone)]
pub struct Roots {
    n: f64,
    root_modulus: f64,
    base_argument: f64,
    step: f64,
    index: u64,
}

impl Roots {
    pub(crate) fn new(z: Complex, n: f64) -> Self {
        Self {
            n,
            root_modulus: z.modulus().powf(1.0 / n),
            base_argument: z.argument() / n,
            step: 2.0 * PI / n,
            index: 0,
        }
    }

    /// The root at `index`, regardless of how far the iterator has advanced.
    #[inline]
    pub(crate) fn root_at(&self, index: u64) -> Complex {
        Complex::from_polar(
            self.root_modulus,
            self.base_argument + self.step * index as f64,
        )
    }

    /// The degree this sequence was built for.
    pub fn degree(&self) -> f64 {
        self.n
    }
}

impl Iterator for Roots {
    type Item = Complex;

    fn next(&mut self) -> Option<Complex> {
        if (self.index as f64) < self.n {
            let root = self.root_at(self.index);
            self.index += 1;
            Some(root)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // NaN degrees collapse to zero through `max`.
        let remaining = (self.n.ceil() - self.index as f64).max(0.0);
        if remaining <= usize::MAX as f64 {
            let remaining = remaining as usize;
            (remaining, Some(remaining))
        } else {
            (usize::MAX, None)
        }
    }
}

impl FusedIterator for Roots {}
