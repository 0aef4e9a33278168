//! Pairwise weight (affinity) matrices for graph-based learning.
//!
//! Given `n` samples of dimension `d`, stored as the columns of a `d x n` matrix, we build the `n x n` matrix of weights between every pair of samples. Such a
//! matrix is the similarity graph needed by Laplacian eigenmaps, spectral clustering and related algorithms.
//!
//! ## Weight Types
//!
//! - [`WeightType::HeatKernel`]: `exp(‖x - y‖² / σ)`. This grows with distance, unlike the textbook heat kernel `exp(-‖x - y‖² / σ)`.
//! - [`WeightType::DotWeighting`]: `x · y`.
//!
//! Any other selector yields a matrix of zeros.
//!
//! ## Example
//!
//! ```
//! use ndarray::array;
//!
//! // Two samples, (0, 0) and (1, 0), as columns.
//! let x = array![[0.0_f64, 1.0], [0.0, 0.0]];
//! let w = affinities::compute_w(&x, "heat-kernel", Some(1.0));
//!
//! assert_eq!(w.dim(), (2, 2));
//! assert_eq!(w[[0, 0]], 1.0);
//! assert!((w[[0, 1]] - core::f64::consts::E).abs() < 1e-12);
//! ```
//!
//! ## Numerical Tolerance
//!
//! [`WeightMatrixBuilder::build`] and [`WeightMatrixBuilder::par_build`] run the same per-cell computation. Other backends may sum in a different order, so
//! comparisons against other implementations should use a relative tolerance rather than exact equality.

mod builder;
pub mod vectors;
mod weight_type;

pub use builder::{DEFAULT_SIGMA, WeightMatrixBuilder};
pub use weight_type::WeightType;

use ndarray::{Array2, ArrayBase, Data, Ix2};

/// Computes the weight matrix of the columns of `x`.
///
/// This is shorthand for building a [`WeightMatrixBuilder`] from `weight_type` and `sigma` and calling [`WeightMatrixBuilder::build`].
///
/// # Arguments
///
/// * `x`: The `d x n` matrix whose columns are the samples.
/// * `weight_type`: `"heat-kernel"` or `"dot-weighting"`. Anything else gives an `n x n` matrix of zeros.
/// * `sigma`: The bandwidth of the heat kernel. `None` uses [`DEFAULT_SIGMA`].
pub fn compute_w<S, T>(x: &ArrayBase<S, Ix2>, weight_type: &str, sigma: Option<T>) -> Array2<T>
where
    S: Data<Elem = T>,
    T: num_traits::Float,
{
    let builder = WeightMatrixBuilder::new(weight_type.into());
    let builder = match sigma {
        Some(sigma) => builder.with_sigma(sigma),
        None => builder,
    };
    builder.build(x)
}
