//! Fixed-shape dense tensor type.
//!
//! A [`Tensor`] is a flat storage vector paired with a shape vector. The
//! shape describes how the storage is meant to be interpreted (row-major,
//! outermost dimension first), but the two are never cross-checked: all
//! arithmetic in this crate operates on storage order alone.

use crate::element::Element;

/// A fixed-shape dense tensor over a numeric element type.
///
/// Storage is a single flat `Vec<T>` in row-major order. Keeping
/// `data.len()` equal to the product of `shape` is the caller's
/// responsibility; no constructor or operation enforces it.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Element> {
    data: Vec<T>,
    shape: Vec<usize>,
}

/// Tensor of `u16` elements.
pub type USTensor = Tensor<u16>;
/// Tensor of `i16` elements.
pub type STensor = Tensor<i16>;
/// Tensor of `u32` elements.
pub type UITensor = Tensor<u32>;
/// Tensor of `i32` elements.
pub type ITensor = Tensor<i32>;
/// Tensor of `u64` elements.
pub type ULTensor = Tensor<u64>;
/// Tensor of `i64` elements.
pub type LTensor = Tensor<i64>;
/// Tensor of `f32` elements.
pub type FTensor = Tensor<f32>;
/// Tensor of `f64` elements.
pub type DTensor = Tensor<f64>;

impl<T: Element> Tensor<T> {
    /// Create a tensor from data and shape.
    ///
    /// The data vector is taken as-is and the shape is copied. No length
    /// check is performed against the shape product; callers wanting the
    /// usual dense layout should pass congruent arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use cnum::Tensor;
    ///
    /// let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
    /// assert_eq!(t.shape(), &[4]);
    /// assert_eq!(t.data(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn new(data: Vec<T>, shape: &[usize]) -> Self {
        Self {
            data,
            shape: shape.to_vec(),
        }
    }

    /// Create a tensor with the given shape and empty storage.
    ///
    /// Only the shape is set; the storage vector starts with zero elements
    /// and is NOT sized to the shape product. Use [`Tensor::zeros`] for a
    /// tensor whose storage matches its shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use cnum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::with_shape(&[2, 3]);
    /// assert_eq!(t.shape(), &[2, 3]);
    /// assert_eq!(t.len(), 0);
    /// ```
    pub fn with_shape(shape: &[usize]) -> Self {
        Self {
            data: Vec::new(),
            shape: shape.to_vec(),
        }
    }

    /// Create a new tensor with the given shape, zero-initialized.
    ///
    /// Storage length is the product of the shape's entries (one element
    /// for the empty shape, since the empty product is one).
    ///
    /// # Examples
    ///
    /// ```
    /// use cnum::Tensor;
    ///
    /// let t: Tensor<f64> = Tensor::zeros(&[2, 3, 4]);
    /// assert_eq!(t.shape(), &[2, 3, 4]);
    /// assert_eq!(t.len(), 24);
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        let len: usize = shape.iter().product();
        Self {
            data: vec![T::zero(); len],
            shape: shape.to_vec(),
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(shape: &[usize]) -> Self {
        let mut t = Self::zeros(shape);
        t.fill(T::one());
        t
    }

    /// Get the shape of the tensor.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the rank (number of dimensions).
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Get the number of elements in storage.
    ///
    /// This is the storage length, not the shape product; the two agree
    /// only when the tensor was constructed with congruent arguments.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if the tensor's storage is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get underlying data as slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Get underlying data as mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Get element by linear index.
    #[inline]
    pub fn get_linear(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Get mutable element by linear index.
    #[inline]
    pub fn get_linear_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    /// Fill all stored elements with a value.
    pub fn fill(&mut self, value: T) {
        for x in &mut self.data {
            *x = value;
        }
    }
}
