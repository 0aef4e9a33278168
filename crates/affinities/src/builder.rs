//! Building weight matrices from sample matrices.

use ndarray::{Array2, ArrayBase, Data, Ix2, Zip};

use crate::WeightType;

/// The default bandwidth of the heat kernel.
pub const DEFAULT_SIGMA: f64 = 0.3;

/// Returns [`DEFAULT_SIGMA`] as a `T`, computed as `3 / 10` so that it is the nearest `T` to `0.3`.
fn default_sigma<T: num_traits::Float>() -> T {
    let three = T::one() + T::one() + T::one();
    three / (three * three + T::one())
}

/// Builds the pairwise weight matrix of a set of samples.
///
/// The samples are the columns of a `d x n` matrix `X`, and the weight matrix `W` is `n x n` with `W[i, j] = w(X_i, X_j)` for the chosen [`WeightType`]. Both
/// defined weight types are symmetric, so `W` is symmetric by construction, but every cell is computed independently; there is no mirroring of the upper
/// triangle.
///
/// The builder holds only configuration. Each call to [`build`](Self::build) allocates a new matrix and does not retain its input.
///
/// # Type Parameters
///
/// - `T`: The element type of the sample and weight matrices.
#[must_use]
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(bound(deserialize = "T: num_traits::Float + serde::Deserialize<'de>"))]
pub struct WeightMatrixBuilder<T> {
    /// See [`WeightType`].
    weight_type: WeightType,
    /// The bandwidth of the heat kernel. Ignored by the other weight types.
    #[serde(default = "default_sigma")]
    sigma: T,
}

impl<T: num_traits::Float> Default for WeightMatrixBuilder<T> {
    fn default() -> Self {
        Self::new(WeightType::HeatKernel)
    }
}

impl<T: num_traits::Float> WeightMatrixBuilder<T> {
    /// Creates a new `WeightMatrixBuilder` with the given weight type and the default `sigma`.
    pub fn new(weight_type: WeightType) -> Self {
        Self {
            weight_type,
            sigma: default_sigma(),
        }
    }

    /// Sets the bandwidth of the heat kernel.
    ///
    /// The value is not checked. A `sigma` of zero or a negative `sigma` is used as given.
    pub fn with_sigma(mut self, sigma: T) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the weight type.
    pub fn with_weight_type(mut self, weight_type: WeightType) -> Self {
        self.weight_type = weight_type;
        self
    }

    /// Returns the weight type.
    pub const fn weight_type(&self) -> &WeightType {
        &self.weight_type
    }

    /// Returns the bandwidth of the heat kernel.
    pub fn sigma(&self) -> T {
        self.sigma
    }

    /// Builds the weight matrix of the columns of `x`.
    ///
    /// The result has shape `(n, n)` where `n = x.ncols()`, for every weight type. A matrix with no columns gives a `0 x 0` matrix.
    ///
    /// With [`WeightType::Unrecognized`], no weights are computed and the result is all zeros. A warning is logged.
    ///
    /// Non-finite entries in `x`, and a `sigma` of zero, propagate into the result as `NaN` or `±∞`.
    pub fn build<S>(&self, x: &ArrayBase<S, Ix2>) -> Array2<T>
    where
        S: Data<Elem = T>,
    {
        let n = x.ncols();
        let mut w = Array2::zeros((n, n));
        if !self.preflight(x) {
            return w;
        }

        Zip::indexed(&mut w).for_each(|(i, j), w_ij| {
            if let Some(v) = self.weight_type.weight(x.column(i), x.column(j), self.sigma) {
                *w_ij = v;
            }
        });

        w
    }

    /// Parallel version of [`build`](Self::build).
    ///
    /// Every cell runs the same computation as in `build`, so the two give the same matrix.
    pub fn par_build<S>(&self, x: &ArrayBase<S, Ix2>) -> Array2<T>
    where
        S: Data<Elem = T>,
        T: Send + Sync,
    {
        let n = x.ncols();
        let mut w = Array2::zeros((n, n));
        if !self.preflight(x) {
            return w;
        }

        let x = x.view();
        Zip::indexed(&mut w).par_for_each(|(i, j), w_ij| {
            if let Some(v) = self.weight_type.weight(x.column(i), x.column(j), self.sigma) {
                *w_ij = v;
            }
        });

        w
    }

    /// Builds the weight matrix of the given samples, each of which is a vector of features.
    ///
    /// This is the same as calling [`build`](Self::build) on the matrix whose columns are the `samples`. An empty slice gives a `0 x 0` matrix.
    ///
    /// # Errors
    ///
    /// - If the samples do not all have the same number of features.
    pub fn build_from_columns<V>(&self, samples: &[V]) -> Result<Array2<T>, String>
    where
        V: AsRef<[T]>,
    {
        let n = samples.len();
        let d = samples.first().map_or(0, |s| s.as_ref().len());
        if let Some((i, s)) = samples.iter().enumerate().find(|(_, s)| s.as_ref().len() != d) {
            let d_i = s.as_ref().len();
            return Err(format!("invalid dimensions: sample {i} has {d_i} features but sample 0 has {d}"));
        }

        let x = Array2::from_shape_fn((d, n), |(r, c)| samples[c].as_ref()[r]);
        Ok(self.build(&x))
    }

    /// Logs the shape of the build and returns whether any weights need to be computed.
    fn preflight<S>(&self, x: &ArrayBase<S, Ix2>) -> bool
    where
        S: Data<Elem = T>,
    {
        let (d, n) = x.dim();
        if self.weight_type.is_recognized() {
            ftlog::debug!("Building a {n}x{n} weight matrix with {} from {n} samples of dimension {d}.", self.weight_type);
            true
        } else {
            ftlog::warn!("Unrecognized weight type '{}'. Returning a {n}x{n} matrix of zeros.", self.weight_type);
            false
        }
    }
}
