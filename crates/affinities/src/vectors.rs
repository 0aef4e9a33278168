//! Primitives over pairs of samples.
//!
//! The columns of a sample matrix are not contiguous in memory, so these work on `ArrayView1`s rather than slices.

use ndarray::ArrayView1;

/// The dot-product of two vectors.
///
/// Vectors of unequal length are truncated to the shorter of the two.
pub fn dot_product<T>(x: ArrayView1<'_, T>, y: ArrayView1<'_, T>) -> T
where
    T: num_traits::Float,
{
    x.iter().zip(y).map(|(&a, &b)| a * b).fold(T::zero(), |acc, v| acc + v)
}

/// Squared Euclidean distance between two vectors.
///
/// Also known as the squared L2-norm of the difference, this is the sum of the squared differences between corresponding elements.
pub fn euclidean_sq<T>(x: ArrayView1<'_, T>, y: ArrayView1<'_, T>) -> T
where
    T: num_traits::Float,
{
    x.iter()
        .zip(y)
        .map(|(&a, &b)| a - b)
        .map(|d| d * d)
        .fold(T::zero(), |acc, v| acc + v)
}

/// Squared L2-norm (Squared Euclidean norm) of a vector.
pub fn norm_l2_sq<T>(x: ArrayView1<'_, T>) -> T
where
    T: num_traits::Float,
{
    x.iter().map(|&a| a * a).fold(T::zero(), |acc, v| acc + v)
}

/// L2-norm (Euclidean norm) of a vector.
pub fn norm_l2<T>(x: ArrayView1<'_, T>) -> T
where
    T: num_traits::Float,
{
    norm_l2_sq(x).sqrt()
}
