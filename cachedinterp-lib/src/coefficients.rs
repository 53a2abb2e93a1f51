//! Per-interval polynomial coefficient construction.
//!
//! Coefficients are expressed in the local coordinate `d = x - x_j` of the
//! interval they belong to, so evaluation is a dot product with the cached
//! offset powers and never revisits the knot positions.

use crate::kind::Kind;
use crate::sample::Sample;

/// Coefficient table, shaped by the interpolation kind.
///
/// Nearest carries the value array itself, one entry per knot. The
/// polynomial kinds carry one row per polynomial order with one column per
/// interval: 2 rows for linear, 4 for cubic.
#[derive(Debug, Clone)]
pub enum CoefficientTable<T> {
    Nearest(Vec<T>),
    Poly { rows: Vec<Vec<T>> },
}

/// Build the coefficient table for `kind` over the given knots and values.
///
/// Knot ordering and length matching are validated by the caller. Complex
/// values are built per part: the real and imaginary rows are constructed
/// independently and recombined.
pub fn build_table<T: Sample>(knots: &[f64], values: &[T], kind: Kind) -> CoefficientTable<T> {
    match kind {
        Kind::Nearest => CoefficientTable::Nearest(values.to_vec()),
        Kind::Linear => CoefficientTable::Poly {
            rows: per_part_rows(knots, values, linear_rows),
        },
        Kind::Cubic => CoefficientTable::Poly {
            rows: per_part_rows(knots, values, natural_cubic_rows),
        },
    }
}

/// Run a real-valued row builder over each part of the samples and zip the
/// parts back together.
fn per_part_rows<T: Sample>(
    knots: &[f64],
    values: &[T],
    rows_of: fn(&[f64], &[f64]) -> Vec<Vec<f64>>,
) -> Vec<Vec<T>> {
    let (re, im) = T::split(values);
    let re_rows = rows_of(knots, &re);
    match im {
        None => re_rows.into_iter().map(|row| T::join(row, None)).collect(),
        Some(im) => {
            let im_rows = rows_of(knots, &im);
            re_rows
                .into_iter()
                .zip(im_rows)
                .map(|(re_row, im_row)| T::join(re_row, Some(im_row)))
                .collect()
        }
    }
}

/// Rows `[value, slope]` per interval.
fn linear_rows(knots: &[f64], values: &[f64]) -> Vec<Vec<f64>> {
    let n = knots.len();
    let mut value_row = Vec::with_capacity(n - 1);
    let mut slope_row = Vec::with_capacity(n - 1);
    for j in 0..n - 1 {
        value_row.push(values[j]);
        slope_row.push((values[j + 1] - values[j]) / (knots[j + 1] - knots[j]));
    }
    vec![value_row, slope_row]
}

/// Rows `[y, y', y''/2, y'''/6]` per interval for a natural cubic spline.
fn natural_cubic_rows(knots: &[f64], values: &[f64]) -> Vec<Vec<f64>> {
    let n = knots.len();
    let h: Vec<f64> = (0..n - 1).map(|j| knots[j + 1] - knots[j]).collect();
    let m = second_derivatives(&h, values);

    let mut value_row = Vec::with_capacity(n - 1);
    let mut slope_row = Vec::with_capacity(n - 1);
    let mut half_curv_row = Vec::with_capacity(n - 1);
    let mut sixth_jerk_row = Vec::with_capacity(n - 1);
    for j in 0..n - 1 {
        value_row.push(values[j]);
        slope_row.push((values[j + 1] - values[j]) / h[j] - h[j] * (2.0 * m[j] + m[j + 1]) / 6.0);
        half_curv_row.push(m[j] / 2.0);
        sixth_jerk_row.push((m[j + 1] - m[j]) / (6.0 * h[j]));
    }
    vec![value_row, slope_row, half_curv_row, sixth_jerk_row]
}

/// Second derivatives at the knots for a natural spline.
///
/// Zero at both ends; interior values solve the tridiagonal continuity
/// system with a Thomas forward-elimination / back-substitution pass. The
/// system is diagonally dominant for strictly increasing knots, so the
/// solve cannot break down.
fn second_derivatives(h: &[f64], values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut m = vec![0.0; n];
    if n == 2 {
        // Single interval: no interior rows, the spline degenerates to a
        // straight line.
        return m;
    }

    let interior = n - 2;
    let mut diag = Vec::with_capacity(interior);
    let mut rhs = Vec::with_capacity(interior);
    for j in 1..n - 1 {
        diag.push(2.0 * (h[j - 1] + h[j]));
        rhs.push(6.0 * ((values[j + 1] - values[j]) / h[j] - (values[j] - values[j - 1]) / h[j - 1]));
    }

    // Forward elimination. Sub-diagonal of row i is h[i], super-diagonal
    // is h[i + 1].
    let mut c_prime = vec![0.0; interior];
    let mut d_prime = vec![0.0; interior];
    c_prime[0] = h[1] / diag[0];
    d_prime[0] = rhs[0] / diag[0];
    for i in 1..interior {
        let denom = diag[i] - h[i] * c_prime[i - 1];
        c_prime[i] = h[i + 1] / denom;
        d_prime[i] = (rhs[i] - h[i] * d_prime[i - 1]) / denom;
    }

    // Back substitution into the knot-indexed result.
    m[n - 2] = d_prime[interior - 1];
    for j in (1..n - 2).rev() {
        m[j] = d_prime[j - 1] - c_prime[j - 1] * m[j + 1];
    }
    m
}
