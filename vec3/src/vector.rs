//! The `Vec3<T>` value type.
//!
//! Arithmetic is only defined between vectors of the same element type, or
//! between a vector and a scalar of that type. Mixing element types goes
//! through [`Vec3::cast`] / [`Vec3::convert_from`] or [`crate::dot::dot`].
//!
//! Nothing here validates values: division by zero, overflow and NaN behave
//! exactly as they do for a lone `T`.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{AsPrimitive, Float, Num};
use serde::{Deserialize, Serialize};

/// Element types a [`Vec3`] can do arithmetic with.
pub trait Scalar: Copy + Num {}

impl<T: Copy + Num> Scalar for T {}

/// A vector in Cartesian 3-space.
///
/// # Examples
/// ```
/// use vec3::Vec3;
///
/// let v = Vec3::new(3.0, 4.0, 0.0);
/// assert_eq!(v.squared_norm(), 25.0);
/// assert_eq!(v.norm(), 5.0);
/// assert_eq!(v.to_string(), "(3,4,0)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Vec3<T> {
    pub(crate) x: T,
    pub(crate) y: T,
    pub(crate) z: T,
}

impl<T> Vec3<T> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }
}

impl<T: Copy> Vec3<T> {
    pub fn x(&self) -> T {
        self.x
    }

    pub fn y(&self) -> T {
        self.y
    }

    pub fn z(&self) -> T {
        self.z
    }

    pub fn set_x(&mut self, x: T) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: T) {
        self.y = y;
    }

    pub fn set_z(&mut self, z: T) {
        self.z = z;
    }

    /// Unary plus. Returns an unchanged copy.
    pub fn pos(self) -> Self {
        self
    }

    /// Converts every component with `as` semantics. Narrowing is allowed
    /// and unchecked (`f64 -> f32` rounds, `f64 -> i32` saturates).
    pub fn cast<U>(self) -> Vec3<U>
    where
        T: AsPrimitive<U>,
        U: Copy + 'static,
    {
        Vec3::new(self.x.as_(), self.y.as_(), self.z.as_())
    }

    /// Builds a vector from one of another element type. Same conversion
    /// rules as [`Vec3::cast`].
    pub fn convert_from<U>(other: Vec3<U>) -> Self
    where
        U: AsPrimitive<T>,
        T: 'static,
    {
        other.cast()
    }
}

impl<T: Scalar> Vec3<T> {
    pub fn zero() -> Self {
        Self::new(T::zero(), T::zero(), T::zero())
    }

    /// `x² + y² + z²`, evaluated directly in `T`. Overflows where `T` does.
    pub fn squared_norm(&self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }
}

impl<T: Float> Vec3<T> {
    /// Euclidean length.
    ///
    /// Components are rescaled by the largest magnitude before squaring, so
    /// the result stays finite whenever the true length is representable,
    /// even when [`Vec3::squared_norm`] overflows or underflows.
    pub fn norm(&self) -> T {
        hypot3(self.x, self.y, self.z)
    }
}

/// Three-argument `hypot`. Infinity wins over NaN, as in C.
fn hypot3<T: Float>(x: T, y: T, z: T) -> T {
    let (ax, ay, az) = (x.abs(), y.abs(), z.abs());
    if ax.is_infinite() || ay.is_infinite() || az.is_infinite() {
        return T::infinity();
    }
    if ax.is_nan() || ay.is_nan() || az.is_nan() {
        return T::nan();
    }

    let max = ax.max(ay).max(az);
    if max == T::zero() {
        return T::zero();
    }

    let (sx, sy, sz) = (ax / max, ay / max, az / max);
    max * (sx * sx + sy * sy + sz * sz).sqrt()
}

impl<T> From<[T; 3]> for Vec3<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<(T, T, T)> for Vec3<T> {
    fn from((x, y, z): (T, T, T)) -> Self {
        Self::new(x, y, z)
    }
}

impl<T> From<Vec3<T>> for [T; 3] {
    fn from(v: Vec3<T>) -> Self {
        [v.x, v.y, v.z]
    }
}

// ─── Arithmetic ───

impl<T: Scalar + Neg<Output = T>> Neg for Vec3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: Scalar> AddAssign for Vec3<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.x = self.x + rhs.x;
        self.y = self.y + rhs.y;
        self.z = self.z + rhs.z;
    }
}

impl<T: Scalar> SubAssign for Vec3<T> {
    fn sub_assign(&mut self, rhs: Self) {
        self.x = self.x - rhs.x;
        self.y = self.y - rhs.y;
        self.z = self.z - rhs.z;
    }
}

impl<T: Scalar> MulAssign<T> for Vec3<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.x = self.x * rhs;
        self.y = self.y * rhs;
        self.z = self.z * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vec3<T> {
    fn div_assign(&mut self, rhs: T) {
        self.x = self.x / rhs;
        self.y = self.y / rhs;
        self.z = self.z / rhs;
    }
}

impl<T: Scalar> Add for Vec3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out += rhs;
        out
    }
}

impl<T: Scalar> Sub for Vec3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self;
        out -= rhs;
        out
    }
}

impl<T: Scalar> Mul<T> for Vec3<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar> Div<T> for Vec3<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        let mut out = self;
        out /= rhs;
        out
    }
}

/// `scalar * vector` needs one impl per concrete scalar type.
macro_rules! scalar_lhs_mul {
    ($($t:ty),* $(,)?) => {
        $(
            impl Mul<Vec3<$t>> for $t {
                type Output = Vec3<$t>;

                fn mul(self, rhs: Vec3<$t>) -> Self::Output {
                    let mut out = rhs;
                    out *= self;
                    out
                }
            }
        )*
    };
}

scalar_lhs_mul!(f32, f64, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
