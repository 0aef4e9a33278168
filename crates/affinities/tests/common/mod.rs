//! Naive implementations and data generation for testing.

#![allow(dead_code)]

use ndarray::Array2;
use rand::prelude::*;

/// Computes the dot product of two vectors.
pub fn dot<F: num_traits::Float>(x: &[F], y: &[F]) -> F {
    x.iter().zip(y.iter()).map(|(&x, &y)| x * y).fold(F::zero(), |acc, p| acc + p)
}

/// Computes the Euclidean (L2) distance between two vectors.
pub fn l2<F: num_traits::Float>(x: &[F], y: &[F]) -> F {
    x.iter()
        .zip(y.iter())
        .map(|(&x, &y)| x - y)
        .map(|d| d * d)
        .fold(F::zero(), |acc, d2| acc + d2)
        .sqrt()
}

/// The weight matrix of `samples`, computed with nested loops over the squared norm of the difference.
pub fn heat_kernel_matrix<F: num_traits::Float>(samples: &[Vec<F>], sigma: F) -> Vec<Vec<F>> {
    samples
        .iter()
        .map(|x| samples.iter().map(|y| (l2(x, y).powi(2) / sigma).exp()).collect())
        .collect()
}

/// The weight matrix of `samples`, computed with nested loops over the dot product.
pub fn dot_weighting_matrix<F: num_traits::Float>(samples: &[Vec<F>]) -> Vec<Vec<F>> {
    samples.iter().map(|x| samples.iter().map(|y| dot(x, y)).collect()).collect()
}

/// Generates `car` random samples of dimension `dim`.
pub fn gen_data<F: num_traits::Float + rand::distr::uniform::SampleUniform>(car: usize, dim: usize, min_val: F, max_val: F, seed: u64) -> Vec<Vec<F>> {
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    (0..car)
        .map(|_| (0..dim).map(|_| rand::Rng::random_range(&mut rng, min_val..=max_val)).collect())
        .collect()
}

/// Stacks the samples as the columns of a `dim x car` matrix.
pub fn as_columns<F: num_traits::Float>(samples: &[Vec<F>]) -> Array2<F> {
    let dim = samples.first().map_or(0, Vec::len);
    Array2::from_shape_fn((dim, samples.len()), |(r, c)| samples[c][r])
}

/// The largest relative difference between corresponding entries. Entries where the expected value is zero are compared absolutely.
pub fn max_rel_diff<F: num_traits::Float>(expected: &[Vec<F>], actual: &Array2<F>) -> F {
    expected
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, &e)| (i, j, e)))
        .map(|(i, j, e)| {
            let a = actual[[i, j]];
            if e == F::zero() { (e - a).abs() } else { (e - a).abs() / e.abs() }
        })
        .fold(F::zero(), F::max)
}
