//! Query-point location, cached across evaluations.
//!
//! Locating a query batch against the knot set is independent of the
//! function values, so the bracket indices and offset powers survive any
//! number of value updates. This is the expensive half of an evaluation
//! and the whole point of caching it.

use crate::backend::Backend;
use crate::kind::Kind;

/// Bracket indices and offset powers for one specific query batch.
///
/// A cache is only valid for the exact query array and kind it was built
/// from; the interpolant rebuilds it when either changes or when caching
/// is disabled for a call.
#[derive(Debug, Clone)]
pub struct LocatorCache {
    queries: Vec<f64>,
    indices: Vec<usize>,
    powers: Vec<Vec<f64>>,
}

impl LocatorCache {
    /// Locate every query against the knot set.
    ///
    /// Nearest kinds record the closest knot per query and no powers. The
    /// polynomial kinds record the bracketing interval and the rows
    /// `[1, d, ..]` up to the order the kind needs, where
    /// `d = query - knots[index]`.
    pub fn build<B: Backend>(backend: &B, knots: &[f64], queries: &[f64], kind: Kind) -> Self {
        let indices = match kind {
            Kind::Nearest => backend.nearest_indices(knots, queries),
            Kind::Linear | Kind::Cubic => backend.bracket_indices(knots, queries),
        };

        let mut powers = Vec::with_capacity(kind.power_rows());
        if kind.power_rows() > 0 {
            powers.push(backend.ones(queries.len()));
            powers.push(backend.offsets(knots, queries, &indices));
            while powers.len() < kind.power_rows() {
                let next = backend.product(&powers[powers.len() - 1], &powers[1]);
                powers.push(next);
            }
        }

        LocatorCache {
            queries: queries.to_vec(),
            indices,
            powers,
        }
    }

    /// Whether this cache was built from exactly this query array.
    pub fn matches(&self, queries: &[f64]) -> bool {
        self.queries == queries
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn powers(&self) -> &[Vec<f64>] {
        &self.powers
    }
}
