//! How the weight between two samples is measured.

use ndarray::ArrayView1;

use crate::vectors;

/// The similarity measure used for the entries of a weight matrix.
///
/// A `WeightType` is usually parsed from its selector string, `"heat-kernel"` or `"dot-weighting"`. Parsing never fails: any other string becomes
/// [`WeightType::Unrecognized`], which produces an all-zero weight matrix.
///
/// In configuration files, a `WeightType` is (de)serialized as its selector string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WeightType {
    /// `w(x, y) = exp(‖x - y‖² / σ)`.
    ///
    /// Note the sign of the exponent. The textbook heat kernel is `exp(-‖x - y‖² / σ)`, which decays with distance. This one grows with distance.
    HeatKernel,
    /// `w(x, y) = x · y`.
    DotWeighting,
    /// Any other selector, kept verbatim for diagnostics.
    Unrecognized(String),
}

impl WeightType {
    /// The selector string for the heat kernel.
    pub const HEAT_KERNEL: &'static str = "heat-kernel";

    /// The selector string for dot-weighting.
    pub const DOT_WEIGHTING: &'static str = "dot-weighting";

    /// Whether this is one of the defined similarity measures.
    #[must_use]
    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// The selector string of this `WeightType`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HeatKernel => Self::HEAT_KERNEL,
            Self::DotWeighting => Self::DOT_WEIGHTING,
            Self::Unrecognized(s) => s,
        }
    }

    /// Computes the weight between two samples.
    ///
    /// `sigma` is only used by [`WeightType::HeatKernel`]. It is not checked: a `sigma` of zero gives `+∞` for distinct samples and `NaN` for identical ones,
    /// following IEEE-754 division.
    ///
    /// Returns `None` for [`WeightType::Unrecognized`].
    pub fn weight<T>(&self, x: ArrayView1<'_, T>, y: ArrayView1<'_, T>, sigma: T) -> Option<T>
    where
        T: num_traits::Float,
    {
        match self {
            Self::HeatKernel => Some((vectors::euclidean_sq(x, y) / sigma).exp()),
            Self::DotWeighting => Some(vectors::dot_product(x, y)),
            Self::Unrecognized(_) => None,
        }
    }
}

impl std::fmt::Display for WeightType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for WeightType {
    fn from(s: &str) -> Self {
        match s {
            Self::HEAT_KERNEL => Self::HeatKernel,
            Self::DOT_WEIGHTING => Self::DotWeighting,
            _ => Self::Unrecognized(s.to_string()),
        }
    }
}

impl From<String> for WeightType {
    fn from(s: String) -> Self {
        match s.as_str() {
            Self::HEAT_KERNEL => Self::HeatKernel,
            Self::DOT_WEIGHTING => Self::DotWeighting,
            _ => Self::Unrecognized(s),
        }
    }
}

impl From<WeightType> for String {
    fn from(weight_type: WeightType) -> Self {
        match weight_type {
            WeightType::Unrecognized(s) => s,
            w => w.as_str().to_string(),
        }
    }
}

impl std::str::FromStr for WeightType {
    type Err = core::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}
