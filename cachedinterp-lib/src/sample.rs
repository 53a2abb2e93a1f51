use std::fmt::Debug;
use std::ops::Mul;

use num_traits::Zero;

#[cfg(feature = "complex")]
use num_complex::Complex64;

/// Element type of the value array.
///
/// Implemented for `f64`, and for `Complex64` behind the `complex` feature.
/// Coefficient construction runs on real arrays only, so complex samples
/// are split into their real and imaginary parts, each part is built as if
/// it were a real value array, and the two coefficient tables are
/// recombined.
pub trait Sample: Copy + Debug + Zero + Mul<f64, Output = Self> {
    /// Real parts and, for complex samples, imaginary parts.
    fn split(values: &[Self]) -> (Vec<f64>, Option<Vec<f64>>);

    /// Rebuild samples from the per-part rows produced by `split`.
    fn join(re: Vec<f64>, im: Option<Vec<f64>>) -> Vec<Self>;
}

impl Sample for f64 {
    fn split(values: &[Self]) -> (Vec<f64>, Option<Vec<f64>>) {
        (values.to_vec(), None)
    }

    fn join(re: Vec<f64>, _im: Option<Vec<f64>>) -> Vec<Self> {
        re
    }
}

#[cfg(feature = "complex")]
impl Sample for Complex64 {
    fn split(values: &[Self]) -> (Vec<f64>, Option<Vec<f64>>) {
        let re = values.iter().map(|v| v.re).collect();
        let im = values.iter().map(|v| v.im).collect();
        (re, Some(im))
    }

    fn join(re: Vec<f64>, im: Option<Vec<f64>>) -> Vec<Self> {
        let im = im.unwrap_or_else(|| vec![0.0; re.len()]);
        re.into_iter()
            .zip(im)
            .map(|(re, im)| Complex64::new(re, im))
            .collect()
    }
}
