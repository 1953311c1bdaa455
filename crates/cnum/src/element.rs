//! Element trait for tensor element types.

use num_traits::Num;
use std::fmt::Debug;

/// Trait for numeric types storable in a [`Tensor`](crate::Tensor).
///
/// This trait wraps `num_traits::Num` (the `+ - * /` operator set plus the
/// additive and multiplicative identities) with the additional bounds tensor
/// operations rely on. It is blanket-implemented, so every primitive integer
/// and float qualifies, as does any user-defined numeric type implementing
/// `Num`.
///
/// Arithmetic on tensor elements resolves statically through this bound;
/// there is no dynamic dispatch anywhere in the element path.
pub trait Element: Num + Copy + Debug + 'static {}

impl<T: Num + Copy + Debug + 'static> Element for T {}
