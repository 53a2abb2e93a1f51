//! Cache-aware 1-D interpolation over a fixed knot set.
//!
//! Nearest-neighbour, linear, and natural cubic spline interpolation,
//! split so that the two halves of an evaluation are rebuilt
//! independently: locating query points within the knot set is cached per
//! query batch, and polynomial coefficients are rebuilt only when the
//! function values change. Evaluating many value arrays at the same query
//! points pays for the location once.
//!
//! The batched locate/evaluate arithmetic runs behind the [`Backend`]
//! trait so it can be moved onto an accelerator without touching the
//! control logic. Complex-valued interpolation is available behind the
//! `complex` feature.

pub mod backend;
pub mod coefficients;
pub mod error;
pub mod interpolant;
pub mod kind;
pub mod locate;
pub mod sample;

pub use backend::{Backend, CpuBackend};
pub use error::{InterpolateError, Result};
pub use interpolant::CachingInterpolant;
pub use kind::Kind;
pub use sample::Sample;
