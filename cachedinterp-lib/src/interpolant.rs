//! The caching interpolant.

use crate::backend::{Backend, CpuBackend};
use crate::coefficients::{CoefficientTable, build_table};
use crate::error::{InterpolateError, Result};
use crate::kind::Kind;
use crate::locate::LocatorCache;
use crate::sample::Sample;

/// Interpolant over a fixed knot set with cached query location.
///
/// Evaluating an interpolant has two stages: locating each query point
/// within the knot set, and combining the located offsets with polynomial
/// coefficients. When the same query batch is evaluated repeatedly against
/// changing function values, the first stage is redundant work; this type
/// caches it. Replacing the values rebuilds only the coefficient table and
/// reuses the cached locations.
///
/// ```
/// use cachedinterp::{CachingInterpolant, Kind};
///
/// let knots = [0.0, 1.0, 2.0, 3.0];
/// let mut interp = CachingInterpolant::new(&knots, &[0.0, 1.0, 0.0, 1.0], Kind::Linear)?;
///
/// let queries = [0.5, 2.5];
/// assert_eq!(interp.evaluate(&queries)?, vec![0.5, 0.5]);
///
/// // New values, same queries: the locator cache is reused.
/// let out = interp.evaluate_with(&queries, Some(&[1.0, 0.0, 1.0, 0.0]), true)?;
/// assert_eq!(out, vec![0.5, 0.5]);
/// # Ok::<(), cachedinterp::InterpolateError>(())
/// ```
///
/// Queries outside the knot domain are not an error: both boundary
/// intervals extend their polynomial past the domain (nearest clamps to
/// the closest knot).
#[derive(Debug, Clone)]
pub struct CachingInterpolant<T: Sample, B: Backend = CpuBackend> {
    knots: Vec<f64>,
    values: Vec<T>,
    kind: Kind,
    table: CoefficientTable<T>,
    cache: Option<LocatorCache>,
    backend: B,
}

impl<T: Sample> CachingInterpolant<T, CpuBackend> {
    /// Build an interpolant on the CPU backend.
    ///
    /// Knots must be strictly increasing, at least two of them, with one
    /// value per knot. The coefficient table is built eagerly; the locator
    /// cache fills on the first evaluation.
    pub fn new(knots: &[f64], values: &[T], kind: Kind) -> Result<Self> {
        Self::with_backend(knots, values, kind, CpuBackend)
    }
}

impl<T: Sample, B: Backend> CachingInterpolant<T, B> {
    /// Build an interpolant on a caller-supplied backend.
    pub fn with_backend(knots: &[f64], values: &[T], kind: Kind, backend: B) -> Result<Self> {
        validate_knots(knots)?;
        check_lengths(knots.len(), values.len())?;
        Ok(CachingInterpolant {
            knots: knots.to_vec(),
            values: values.to_vec(),
            kind,
            table: build_table(knots, values, kind),
            cache: None,
            backend,
        })
    }

    /// Evaluate at the given query points, reusing the locator cache when
    /// the batch matches the previous one.
    pub fn evaluate(&mut self, queries: &[f64]) -> Result<Vec<T>> {
        self.evaluate_with(queries, None, true)
    }

    /// Evaluate with optional value replacement and cache control.
    ///
    /// `new_values` replaces the value array and rebuilds the coefficient
    /// table; the locator cache is untouched by a value update. Passing
    /// `use_cache = false` forces the locator to run again, as does a
    /// query batch that differs from the cached one.
    pub fn evaluate_with(
        &mut self,
        queries: &[f64],
        new_values: Option<&[T]>,
        use_cache: bool,
    ) -> Result<Vec<T>> {
        if let Some(values) = new_values {
            self.set_values(values)?;
        }
        let cache = match self.cache.take() {
            Some(cache) if use_cache && cache.matches(queries) => cache,
            _ => LocatorCache::build(&self.backend, &self.knots, queries, self.kind),
        };
        let out = match &self.table {
            CoefficientTable::Nearest(values) => self.backend.gather(values, cache.indices()),
            CoefficientTable::Poly { rows } => {
                self.backend.dot_columns(rows, cache.indices(), cache.powers())
            }
        };
        self.cache = Some(cache);
        Ok(out)
    }

    /// Evaluate at a single query point.
    pub fn evaluate_one(&mut self, x: f64) -> Result<T> {
        let out = self.evaluate(&[x])?;
        Ok(out[0])
    }

    /// Replace the value array and rebuild the coefficient table.
    ///
    /// The locator cache survives: location depends only on knots and
    /// queries.
    pub fn set_values(&mut self, values: &[T]) -> Result<()> {
        check_lengths(self.knots.len(), values.len())?;
        self.values = values.to_vec();
        self.table = build_table(&self.knots, &self.values, self.kind);
        Ok(())
    }

    /// Switch the interpolation kind.
    ///
    /// Rebuilds the coefficient table and drops the locator cache: the
    /// power-table row count and the bracketing rule both depend on the
    /// kind, so a cache built under the old kind is unusable.
    pub fn set_kind(&mut self, kind: Kind) {
        self.kind = kind;
        self.table = build_table(&self.knots, &self.values, kind);
        self.cache = None;
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn knots(&self) -> &[f64] {
        &self.knots
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Whether a locator cache is currently held.
    pub fn is_cached(&self) -> bool {
        self.cache.is_some()
    }
}

fn validate_knots(knots: &[f64]) -> Result<()> {
    if knots.len() < 2 {
        return Err(InterpolateError::TooFewKnots {
            got: knots.len(),
            need: 2,
        });
    }
    for j in 0..knots.len() - 1 {
        if knots[j + 1] <= knots[j] {
            return Err(InterpolateError::KnotsNotIncreasing { index: j + 1 });
        }
    }
    Ok(())
}

fn check_lengths(knots: usize, values: usize) -> Result<()> {
    if knots != values {
        return Err(InterpolateError::LengthMismatch { knots, values });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_single_knot() {
        assert!(matches!(
            CachingInterpolant::new(&[1.0], &[1.0], Kind::Linear),
            Err(InterpolateError::TooFewKnots { got: 1, need: 2 })
        ));
    }

    #[test]
    fn test_rejects_unsorted_knots() {
        assert!(matches!(
            CachingInterpolant::new(&[0.0, 2.0, 1.0], &[0.0; 3], Kind::Linear),
            Err(InterpolateError::KnotsNotIncreasing { index: 2 })
        ));
    }

    #[test]
    fn test_rejects_duplicate_knots() {
        assert!(matches!(
            CachingInterpolant::new(&[0.0, 1.0, 1.0], &[0.0; 3], Kind::Cubic),
            Err(InterpolateError::KnotsNotIncreasing { index: 2 })
        ));
    }

    #[test]
    fn test_rejects_length_mismatch() {
        assert!(matches!(
            CachingInterpolant::new(&[0.0, 1.0, 2.0], &[0.0, 1.0], Kind::Cubic),
            Err(InterpolateError::LengthMismatch { knots: 3, values: 2 })
        ));
        let mut interp = CachingInterpolant::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], Kind::Cubic)
            .expect("valid construction");
        assert!(interp.set_values(&[1.0]).is_err());
    }

    #[test]
    fn test_cache_fills_on_first_evaluate() {
        let mut interp =
            CachingInterpolant::new(&[0.0, 1.0], &[0.0, 1.0], Kind::Linear).expect("valid");
        assert!(!interp.is_cached());
        interp.evaluate(&[0.5]).expect("in-domain evaluate");
        assert!(interp.is_cached());
    }

    #[test]
    fn test_set_kind_drops_cache_and_reshapes_table() {
        let mut interp =
            CachingInterpolant::new(&[0.0, 1.0, 2.0], &[0.0, 1.0, 0.0], Kind::Cubic).expect("valid");
        interp.evaluate(&[0.5, 1.5]).expect("cubic evaluate");
        assert!(interp.is_cached());
        interp.set_kind(Kind::Nearest);
        assert!(!interp.is_cached());
        assert_eq!(interp.kind(), Kind::Nearest);
        assert_eq!(interp.evaluate(&[0.4]).expect("nearest evaluate"), vec![0.0]);
    }
}
