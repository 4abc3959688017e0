//! Dot product across element types.
//!
//! The result type is the common type of the two element types, picked by
//! [`CommonType`]. Both operands are converted to it before multiplying.

use num_traits::AsPrimitive;

use crate::vector::{Scalar, Vec3};

/// The numeric type two element types meet at.
///
/// Widening is lossless wherever a primitive exists for it:
/// - same type: itself
/// - `f64` with anything: `f64`
/// - `f32` with any integer: `f32`
/// - integers of the same signedness: the wider one
/// - mixed signedness: the signed type if it is strictly wider, otherwise
///   the next signed type above the unsigned one (`u64` meets `i128`)
///
/// The relation is symmetric: `<T as CommonType<U>>::Output` and
/// `<U as CommonType<T>>::Output` are always the same type.
pub trait CommonType<U> {
    type Output: Scalar + 'static;
}

/// Shorthand for `<T as CommonType<U>>::Output`.
pub type Common<T, U> = <T as CommonType<U>>::Output;

macro_rules! common_type_same {
    ($($t:ty),* $(,)?) => {
        $(
            impl CommonType<$t> for $t {
                type Output = $t;
            }
        )*
    };
}

macro_rules! common_type {
    ($($a:ty, $b:ty => $out:ty;)*) => {
        $(
            impl CommonType<$b> for $a {
                type Output = $out;
            }

            impl CommonType<$a> for $b {
                type Output = $out;
            }
        )*
    };
}

common_type_same!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

common_type! {
    f64, f32 => f64;
    f64, i8 => f64;
    f64, i16 => f64;
    f64, i32 => f64;
    f64, i64 => f64;
    f64, u8 => f64;
    f64, u16 => f64;
    f64, u32 => f64;
    f64, u64 => f64;

    f32, i8 => f32;
    f32, i16 => f32;
    f32, i32 => f32;
    f32, i64 => f32;
    f32, u8 => f32;
    f32, u16 => f32;
    f32, u32 => f32;
    f32, u64 => f32;

    i8, i16 => i16;
    i8, i32 => i32;
    i8, i64 => i64;
    i16, i32 => i32;
    i16, i64 => i64;
    i32, i64 => i64;

    u8, u16 => u16;
    u8, u32 => u32;
    u8, u64 => u64;
    u16, u32 => u32;
    u16, u64 => u64;
    u32, u64 => u64;

    u8, i8 => i16;
    u8, i16 => i16;
    u8, i32 => i32;
    u8, i64 => i64;
    u16, i8 => i32;
    u16, i16 => i32;
    u16, i32 => i32;
    u16, i64 => i64;
    u32, i8 => i64;
    u32, i16 => i64;
    u32, i32 => i64;
    u32, i64 => i64;
    u64, i8 => i128;
    u64, i16 => i128;
    u64, i32 => i128;
    u64, i64 => i128;
}

/// Dot product of two vectors, computed in their common type.
///
/// # Examples
/// ```
/// use vec3::{dot, Vec3};
///
/// let a = Vec3::new(-1.0f32, 0.0, 1.0);
/// let b = Vec3::new(1.0f64, 2.0, 3.0);
/// let d: f64 = dot(&a, &b);
/// assert_eq!(d, 2.0);
/// assert_eq!(dot(&b, &a), d);
/// ```
pub fn dot<T, U>(a: &Vec3<T>, b: &Vec3<U>) -> Common<T, U>
where
    T: CommonType<U> + AsPrimitive<Common<T, U>>,
    U: AsPrimitive<Common<T, U>>,
{
    let xx = a.x.as_() * b.x.as_();
    let yy = a.y.as_() * b.y.as_();
    let zz = a.z.as_() * b.z.as_();
    xx + yy + zz
}
