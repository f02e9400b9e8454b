use nalgebra::SVector;

/// Number of scalar components in every state and flux vector.
pub const NUM_VARS: usize = 7;

/// Fixed-size storage shared by the state and flux types.
pub type StateVector = SVector<f64, NUM_VARS>;

/// Implements the componentwise vector-space algebra for a newtype over [`StateVector`].
macro_rules! impl_vector_space {
    ($ty:ident) => {
        impl $ty {
            /// Returns the vector with every component zero.
            #[must_use]
            pub fn zero() -> Self {
                Self($crate::vector::StateVector::zeros())
            }

            /// Returns the components in their canonical order.
            #[must_use]
            pub fn as_slice(&self) -> &[f64] {
                self.0.as_slice()
            }

            /// Returns the underlying fixed-size vector.
            #[must_use]
            pub fn into_inner(self) -> $crate::vector::StateVector {
                self.0
            }
        }

        impl From<$crate::vector::StateVector> for $ty {
            fn from(data: $crate::vector::StateVector) -> Self {
                Self(data)
            }
        }

        impl From<[f64; $crate::vector::NUM_VARS]> for $ty {
            fn from(data: [f64; $crate::vector::NUM_VARS]) -> Self {
                Self($crate::vector::StateVector::from(data))
            }
        }

        impl std::ops::Index<usize> for $ty {
            type Output = f64;

            fn index(&self, index: usize) -> &f64 {
                &self.0[index]
            }
        }

        impl std::ops::Add for $ty {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self(self.0 + rhs.0)
            }
        }

        impl std::ops::Sub for $ty {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self(self.0 - rhs.0)
            }
        }

        impl std::ops::Neg for $ty {
            type Output = Self;

            fn neg(self) -> Self {
                Self(-self.0)
            }
        }

        impl std::ops::Mul<f64> for $ty {
            type Output = Self;

            fn mul(self, rhs: f64) -> Self {
                Self(self.0 * rhs)
            }
        }

        impl std::ops::Mul<$ty> for f64 {
            type Output = $ty;

            fn mul(self, rhs: $ty) -> $ty {
                $ty(rhs.0 * self)
            }
        }
    };
}

pub(crate) use impl_vector_space;
