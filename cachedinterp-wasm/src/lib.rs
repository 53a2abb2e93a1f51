//! WASM bindings for cachedinterp.
//!
//! Build with:
//! ```sh
//! wasm-pack build -p cachedinterp-wasm
//! ```

use wasm_bindgen::prelude::*;

use cachedinterp::{CachingInterpolant, InterpolateError, Kind};

fn parse_kind(kind: &str) -> Result<Kind, JsError> {
    kind.parse().map_err(to_js)
}

fn to_js(e: InterpolateError) -> JsError {
    JsError::new(&e.to_string())
}

/// A caching interpolant over a fixed knot set.
///
/// `kind` is one of: "nearest", "linear", "cubic".
#[wasm_bindgen]
pub struct Interpolant {
    inner: CachingInterpolant<f64>,
}

#[wasm_bindgen]
impl Interpolant {
    #[wasm_bindgen(constructor)]
    pub fn new(knots: &[f64], values: &[f64], kind: &str) -> Result<Interpolant, JsError> {
        let kind = parse_kind(kind)?;
        let inner = CachingInterpolant::new(knots, values, kind).map_err(to_js)?;
        Ok(Interpolant { inner })
    }

    /// Evaluate at the given query points, reusing the cached locations
    /// when the batch matches the previous call.
    pub fn evaluate(&mut self, queries: &[f64]) -> Result<Vec<f64>, JsError> {
        self.inner.evaluate(queries).map_err(to_js)
    }

    /// Evaluate after replacing the value array; knot locations stay cached.
    pub fn evaluate_with_values(
        &mut self,
        queries: &[f64],
        values: &[f64],
    ) -> Result<Vec<f64>, JsError> {
        self.inner
            .evaluate_with(queries, Some(values), true)
            .map_err(to_js)
    }

    /// Evaluate with the locator cache disabled for this call.
    pub fn evaluate_uncached(&mut self, queries: &[f64]) -> Result<Vec<f64>, JsError> {
        self.inner.evaluate_with(queries, None, false).map_err(to_js)
    }

    /// Evaluate at a single query point.
    pub fn evaluate_one(&mut self, x: f64) -> Result<f64, JsError> {
        self.inner.evaluate_one(x).map_err(to_js)
    }

    /// Replace the value array without evaluating.
    pub fn set_values(&mut self, values: &[f64]) -> Result<(), JsError> {
        self.inner.set_values(values).map_err(to_js)
    }

    /// Switch the interpolation kind; drops the locator cache.
    pub fn set_kind(&mut self, kind: &str) -> Result<(), JsError> {
        self.inner.set_kind(parse_kind(kind)?);
        Ok(())
    }

    pub fn kind(&self) -> String {
        match self.inner.kind() {
            Kind::Nearest => "nearest".to_string(),
            Kind::Linear => "linear".to_string(),
            Kind::Cubic => "cubic".to_string(),
        }
    }
}
