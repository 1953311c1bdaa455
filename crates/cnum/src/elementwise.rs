//! Element-wise tensor arithmetic.
//!
//! Binary operators pair two tensors element-by-element in storage order.
//! The only precondition is equal storage length; shapes are never compared,
//! and the result takes the left operand's shape. Violating the length
//! precondition panics. [`apply_binary`] is the checked variant returning a
//! [`TensorError`] instead.
//!
//! Scalar operators apply the scalar to every stored element and have no
//! precondition. All operators return a new tensor and leave their operands
//! untouched; element-level behavior (integer truncation, division by zero,
//! overflow) is whatever the element type's own arithmetic does.

use std::ops::{Add, Div, Mul, Sub};

use crate::element::Element;
use crate::error::TensorError;
use crate::tensor::Tensor;

/// Apply a function to each element, returning a new tensor.
///
/// # Example
///
/// ```
/// use cnum::Tensor;
/// use cnum::elementwise::apply;
///
/// let t = Tensor::new(vec![1.0, 4.0, 9.0], &[3]);
/// let ts = apply(&t, |x: f64| x.sqrt());
/// assert!((ts.data()[0] - 1.0).abs() < 1e-10);
/// assert!((ts.data()[1] - 2.0).abs() < 1e-10);
/// assert!((ts.data()[2] - 3.0).abs() < 1e-10);
/// ```
pub fn apply<T: Element, F>(tensor: &Tensor<T>, f: F) -> Tensor<T>
where
    F: Fn(T) -> T,
{
    let data: Vec<T> = tensor.data().iter().map(|&x| f(x)).collect();
    Tensor::new(data, tensor.shape())
}

/// Apply a function to each element in-place.
///
/// # Example
///
/// ```
/// use cnum::Tensor;
/// use cnum::elementwise::apply_inplace;
///
/// let mut t = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
/// apply_inplace(&mut t, |x| x * x);
/// assert_eq!(t.data(), &[1.0, 4.0, 9.0]);
/// ```
pub fn apply_inplace<T: Element, F>(tensor: &mut Tensor<T>, f: F)
where
    F: Fn(T) -> T,
{
    for x in tensor.data_mut() {
        *x = f(*x);
    }
}

/// Apply a binary function combining two tensors element-wise.
///
/// This is the checked counterpart of the arithmetic operators: instead of
/// panicking on mismatched storage lengths it returns an error. Like the
/// operators it compares lengths only, never shapes, and the result takes
/// the left operand's shape.
///
/// # Errors
///
/// Returns [`TensorError::LengthMismatch`] if the operands' storage lengths
/// differ.
///
/// # Example
///
/// ```
/// use cnum::Tensor;
/// use cnum::elementwise::apply_binary;
///
/// let a = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
/// let b = Tensor::new(vec![4.0, 5.0, 6.0], &[3]);
/// let c = apply_binary(&a, &b, |x, y| x + y).unwrap();
/// assert_eq!(c.data(), &[5.0, 7.0, 9.0]);
/// ```
pub fn apply_binary<T: Element, F>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    f: F,
) -> Result<Tensor<T>, TensorError>
where
    F: Fn(T, T) -> T,
{
    if a.len() != b.len() {
        return Err(TensorError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(zip_with(a, b, f))
}

/// Pair two tensors element-by-element in storage order.
///
/// The storage lengths must match and the result takes the left operand's
/// shape. Panics on a length mismatch.
fn zip_with<T: Element, F>(lhs: &Tensor<T>, rhs: &Tensor<T>, f: F) -> Tensor<T>
where
    F: Fn(T, T) -> T,
{
    assert_eq!(
        lhs.len(),
        rhs.len(),
        "length mismatch: left operand has {} elements, right operand has {}",
        lhs.len(),
        rhs.len()
    );
    let data: Vec<T> = lhs
        .data()
        .iter()
        .zip(rhs.data().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Tensor::new(data, lhs.shape())
}

macro_rules! impl_tensor_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element> $trait<&Tensor<T>> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                zip_with(self, rhs, |x, y| x $op y)
            }
        }

        impl<T: Element> $trait<Tensor<T>> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                zip_with(self, &rhs, |x, y| x $op y)
            }
        }

        impl<T: Element> $trait<&Tensor<T>> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: &Tensor<T>) -> Tensor<T> {
                zip_with(&self, rhs, |x, y| x $op y)
            }
        }

        impl<T: Element> $trait<Tensor<T>> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: Tensor<T>) -> Tensor<T> {
                zip_with(&self, &rhs, |x, y| x $op y)
            }
        }
    };
}

macro_rules! impl_scalar_binop {
    ($trait:ident, $method:ident, $op:tt) => {
        impl<T: Element> $trait<T> for &Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                apply(self, |x| x $op rhs)
            }
        }

        impl<T: Element> $trait<T> for Tensor<T> {
            type Output = Tensor<T>;

            fn $method(self, rhs: T) -> Tensor<T> {
                apply(&self, |x| x $op rhs)
            }
        }
    };
}

impl_tensor_binop!(Add, add, +);
impl_tensor_binop!(Sub, sub, -);
impl_tensor_binop!(Mul, mul, *);
impl_tensor_binop!(Div, div, /);

impl_scalar_binop!(Add, add, +);
impl_scalar_binop!(Sub, sub, -);
impl_scalar_binop!(Mul, mul, *);
impl_scalar_binop!(Div, div, /);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_apply() {
        let t = Tensor::new(vec![1.0, 4.0, 9.0], &[3]);
        let ts = apply(&t, |x: f64| x.sqrt());
        assert_relative_eq!(ts.data()[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(ts.data()[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(ts.data()[2], 3.0, epsilon = 1e-10);
    }

    #[test]
    fn test_apply_inplace() {
        let mut t = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
        apply_inplace(&mut t, |x| x * x);
        assert_eq!(t.data(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_apply_binary() {
        let a = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
        let b = Tensor::new(vec![4.0, 5.0, 6.0], &[3]);
        let c = apply_binary(&a, &b, |x, y| x + y).unwrap();
        assert_eq!(c.data(), &[5.0, 7.0, 9.0]);
    }

    #[test]
    fn test_apply_binary_length_mismatch() {
        let a = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
        let b = Tensor::new(vec![4.0, 5.0], &[2]);
        match apply_binary(&a, &b, |x, y| x + y) {
            Err(TensorError::LengthMismatch { left, right }) => {
                assert_eq!(left, 3);
                assert_eq!(right, 2);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_apply_binary_ignores_shape() {
        let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
        let b = Tensor::new(vec![10.0, 20.0, 30.0, 40.0], &[2, 2]);
        let c = apply_binary(&a, &b, |x, y| x + y).unwrap();
        assert_eq!(c.shape(), &[4]);
        assert_eq!(c.data(), &[11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn test_add_tensors() {
        let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
        let b = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
        let c = &a + &b;
        assert_eq!(c.data(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!(c.shape(), &[4]);
    }

    #[test]
    fn test_add_all_operand_forms() {
        let a = Tensor::new(vec![1, 2, 3], &[3]);
        let b = Tensor::new(vec![10, 20, 30], &[3]);
        let expected = Tensor::new(vec![11, 22, 33], &[3]);

        assert_eq!(&a + &b, expected);
        assert_eq!(&a + b.clone(), expected);
        assert_eq!(a.clone() + &b, expected);
        assert_eq!(a.clone() + b.clone(), expected);
    }

    #[test]
    fn test_sub_tensors() {
        let a = Tensor::new(vec![8.0, 9.0, 4.0], &[3]);
        let b = Tensor::new(vec![3.0, 3.0, 7.0], &[3]);
        let c = &a - &b;
        assert_eq!(c.data(), &[5.0, 6.0, -3.0]);
    }

    #[test]
    fn test_mul_tensors() {
        let a = Tensor::new(vec![6.0, 2.0], &[2]);
        let b = Tensor::new(vec![8.0, 7.0], &[2]);
        let c = &a * &b;
        assert_eq!(c.data(), &[48.0, 14.0]);
    }

    #[test]
    fn test_div_tensors() {
        let a = Tensor::new(vec![2.0, 9.0, 1.0, 4.0], &[4]);
        let b = Tensor::new(vec![4.0, 2.0, 2.0, 2.0], &[4]);
        let c = &a / &b;
        assert_eq!(c.data(), &[0.5, 4.5, 0.5, 2.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let t = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);

        assert_eq!((&t + 1.0).data(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!((&t - 1.0).data(), &[0.0, 1.0, 2.0, 3.0]);
        assert_eq!((&t * 2.0).data(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((&t / 4.0).data(), &[0.25, 0.5, 0.75, 1.0]);

        // Owned left-hand side works too.
        assert_eq!((t.clone() * 3.0).data(), &[3.0, 6.0, 9.0, 12.0]);
        assert_eq!((t + 1.0).shape(), &[4]);
    }

    #[test]
    fn test_scalar_ops_integer() {
        let t = Tensor::new(vec![1, 2, 3], &[3]);
        assert_eq!((&t + 1).data(), &[2, 3, 4]);
        assert_eq!((&t * 5).data(), &[5, 10, 15]);
        assert_eq!((&t / 2).data(), &[0, 1, 1]);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_add_length_mismatch_panics() {
        let a = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
        let b = Tensor::new(vec![1.0, 2.0, 3.0], &[3]);
        let _ = &a + &b;
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn test_div_length_mismatch_panics() {
        let a = Tensor::new(vec![1.0], &[1]);
        let b = Tensor::new(vec![1.0, 2.0], &[2]);
        let _ = &a / &b;
    }

    #[test]
    fn test_equal_length_different_shapes() {
        // Length is the only precondition; the result takes the left
        // operand's shape.
        let flat = Tensor::new(vec![1.0, 2.0, 3.0, 4.0], &[4]);
        let square = Tensor::new(vec![1.0, 1.0, 1.0, 1.0], &[2, 2]);

        let c = &flat + &square;
        assert_eq!(c.shape(), &[4]);
        assert_eq!(c.data(), &[2.0, 3.0, 4.0, 5.0]);

        let d = &square + &flat;
        assert_eq!(d.shape(), &[2, 2]);
        assert_eq!(d.data(), &[2.0, 3.0, 4.0, 5.0]);
    }

    #[test]
    fn test_integer_division_truncates() {
        let a = Tensor::new(vec![2, 9, 1, 4], &[4]);
        let b = Tensor::new(vec![4, 2, 2, 2], &[4]);
        let c = &a / &b;
        assert_eq!(c.data(), &[0, 4, 0, 2]);
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_integer_division_by_zero_panics() {
        let a = Tensor::new(vec![1, 2], &[2]);
        let b = Tensor::new(vec![1, 0], &[2]);
        let _ = &a / &b;
    }

    #[test]
    fn test_float_division_by_zero() {
        let a = Tensor::new(vec![1.0, -1.0, 0.0], &[3]);
        let b = Tensor::new(vec![0.0, 0.0, 0.0], &[3]);
        let c = &a / &b;
        assert_eq!(c.data()[0], f64::INFINITY);
        assert_eq!(c.data()[1], f64::NEG_INFINITY);
        assert!(c.data()[2].is_nan());
    }

    #[test]
    fn test_operands_unchanged() {
        let a = Tensor::new(vec![1.0, 2.0], &[2]);
        let b = Tensor::new(vec![3.0, 4.0], &[2]);
        let _ = &a + &b;
        let _ = &a * &b;
        let _ = &a * 10.0;
        assert_eq!(a.data(), &[1.0, 2.0]);
        assert_eq!(b.data(), &[3.0, 4.0]);
    }

    #[test]
    fn test_empty_storage_operands() {
        // Shape-only construction leaves storage empty; two such tensors
        // have matching lengths and combine into another empty tensor.
        let a: Tensor<f64> = Tensor::with_shape(&[2, 3]);
        let b: Tensor<f64> = Tensor::with_shape(&[6]);
        let c = &a + &b;
        assert_eq!(c.shape(), &[2, 3]);
        assert!(c.is_empty());
    }

    #[test]
    fn test_scalar_op_empty_storage() {
        let t: Tensor<f64> = Tensor::with_shape(&[2, 3]);
        let c = &t * 2.0;
        assert_eq!(c.shape(), &[2, 3]);
        assert!(c.is_empty());
    }
}
