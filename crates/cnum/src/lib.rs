//! cnum - generic fixed-shape dense tensors with element-wise arithmetic.
//!
//! A [`Tensor`] is a flat, row-major storage vector paired with a shape
//! vector describing how that storage is meant to be read. The crate is a
//! numeric primitive, not an array-computing framework: there is no
//! reshaping, no coordinate indexing, and no broadcasting between
//! mismatched shapes.
//!
//! # Arithmetic contract
//!
//! The four operators `+ - * /` combine two tensors element-by-element in
//! storage order. The only precondition is equal storage length; shapes are
//! never compared, and the result always takes the left operand's shape.
//! A length mismatch panics ([`elementwise::apply_binary`] is the checked
//! alternative). The same four operators also accept a scalar right-hand
//! side, applied to every element with no precondition.
//!
//! Element-level behavior is whatever the element type's own arithmetic
//! does: integer division truncates toward zero and panics on a zero
//! divisor, float division yields infinities and NaNs per IEEE 754.
//!
//! # Example
//!
//! ```
//! use cnum::{DTensor, Tensor};
//!
//! let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
//! let b = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
//!
//! // Tensor-tensor forms pair elements in storage order
//! let sum = &a + &b;
//! assert_eq!(sum.data(), &[2.0, 4.0, 6.0, 8.0]);
//!
//! // Scalar forms apply to every element
//! let shifted = &a + 1.0;
//! assert_eq!(shifted.data(), &[2.0, 3.0, 4.0, 5.0]);
//!
//! // The alias family names the common element types
//! let grid: DTensor = DTensor::zeros(&[2, 2]);
//! assert_eq!(grid.len(), 4);
//! ```

pub mod element;
pub mod elementwise;
pub mod error;
pub mod random;
pub mod tensor;

pub use element::Element;
pub use error::TensorError;
pub use tensor::{
    DTensor, FTensor, ITensor, LTensor, STensor, Tensor, UITensor, ULTensor, USTensor,
};
