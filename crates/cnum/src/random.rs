//! Random tensor construction.
//!
//! This module provides functions for creating tensors with random values.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::element::Element;
use crate::tensor::Tensor;

/// Trait for types that can be randomly sampled from a uniform distribution.
pub trait RandomUniform: Element {
    /// Sample a random value from the uniform distribution [0, 1).
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

/// Trait for types that can be randomly sampled from a normal distribution.
pub trait RandomNormal: Element {
    /// Sample a random value from the standard normal distribution.
    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

impl RandomNormal for f32 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl RandomNormal for f64 {
    fn sample_normal<R: Rng>(rng: &mut R) -> Self {
        rng.sample(StandardNormal)
    }
}

impl<T: RandomUniform> Tensor<T> {
    /// Create a tensor with uniform random values in [0, 1).
    ///
    /// Storage length is the product of the shape's entries, so shape and
    /// data are congruent by construction.
    ///
    /// # Example
    ///
    /// ```
    /// use cnum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::random(&[2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    ///
    /// // All values are in [0, 1)
    /// for i in 0..t.len() {
    ///     let v = *t.get_linear(i).unwrap();
    ///     assert!(v >= 0.0 && v < 1.0);
    /// }
    /// ```
    pub fn random(shape: &[usize]) -> Self {
        Self::random_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with uniform random values using a specific RNG.
    ///
    /// This is useful for reproducible results with a seeded RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use cnum::Tensor;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t1: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut rng);
    ///
    /// // Reset RNG with same seed for reproducible results
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t2: Tensor<f64> = Tensor::random_with_rng(&[2, 3], &mut rng);
    ///
    /// assert_eq!(t1.data(), t2.data());
    /// ```
    pub fn random_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<T> = (0..len).map(|_| T::sample_uniform(rng)).collect();
        Self::new(data, shape)
    }
}

impl<T: RandomNormal> Tensor<T> {
    /// Create a tensor with standard normal random values.
    ///
    /// # Example
    ///
    /// ```
    /// use cnum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::randn(&[2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// ```
    pub fn randn(shape: &[usize]) -> Self {
        Self::randn_with_rng(shape, &mut rand::rng())
    }

    /// Create a tensor with standard normal random values using a specific RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use cnum::Tensor;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(42);
    /// let t: Tensor<f64> = Tensor::randn_with_rng(&[2, 3], &mut rng);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// ```
    pub fn randn_with_rng<R: Rng>(shape: &[usize], rng: &mut R) -> Self {
        let len: usize = shape.iter().product();
        let data: Vec<T> = (0..len).map(|_| T::sample_normal(rng)).collect();
        Self::new(data, shape)
    }
}
