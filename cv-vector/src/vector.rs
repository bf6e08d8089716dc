use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};
use derive_more::{From, Into};
// Supplies `sqrt`, `sin_cos` and friends on `no_std`. Toolchains with inherent
// `f32` math in `core` resolve those instead and leave this import unused.
#[allow(unused_imports)]
use num_traits::Float;

#[cfg(feature = "serde-serialize")]
use serde::{Deserialize, Serialize};

/// A point or direction in 3d euclidean space stored as three `f32` components.
///
/// This is a plain value type. Every operation except [`Vector3D::normalize_mut`]
/// returns a new vector and leaves the receiver untouched.
///
/// No operation validates its input. Anything that divides by the length
/// ([`Vector3D::normalize`], [`Vector3D::normalize_mut`], [`Vector3D::reflect`])
/// produces `NaN` or infinite components when handed a zero vector, and those values
/// propagate through whatever is computed afterwards. Check `length() > 0.0` first
/// if that matters to you.
///
/// Normalization follows nalgebra's naming rather than the usual C++ one:
/// [`Vector3D::normalize`] is the pure form that returns a new unit vector (what is
/// often called `getNormalized`), while [`Vector3D::normalize_mut`] rescales the
/// receiver in place. `normalize` is `#[must_use]`, so calling it for its side
/// effect is flagged by the compiler.
///
/// Equality is exact component comparison. Use the [`approx`] traits to compare
/// with a tolerance.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, From, Into)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Vector3D {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3D {
    /// Creates a vector from its components. No validation is performed.
    #[inline(always)]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The zero vector, same as [`Default::default`].
    #[inline(always)]
    pub const fn zeros() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    #[inline(always)]
    pub const fn x_axis() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    #[inline(always)]
    pub const fn y_axis() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    #[inline(always)]
    pub const fn z_axis() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Computes `x1*x2 + y1*y2 + z1*z2`.
    #[inline(always)]
    pub fn dot(self, rhs: Self) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Computes the right-handed cross product `self × rhs`.
    ///
    /// The result is orthogonal to both inputs and its length is `|a||b|sin(θ)`.
    /// The operation is anti-commutative: `a.cross(b) == -b.cross(a)`.
    #[must_use]
    #[inline(always)]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// The squared euclidean norm. Avoids the square root when only comparing lengths.
    #[inline(always)]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// The euclidean norm, computed in single precision.
    #[inline(always)]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales this vector in place to unit length.
    ///
    /// A zero vector becomes all `NaN`.
    #[inline]
    pub fn normalize_mut(&mut self) {
        let length = self.length();
        *self /= length;
    }

    /// Returns a unit vector pointing in the same direction, leaving `self` unmodified.
    ///
    /// A zero vector yields all `NaN` components.
    #[must_use]
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Reflects `self` about the surface `normal` using `r = v - 2(v·n̂)n̂`.
    ///
    /// The normal does not need to be unit length. It is normalized internally
    /// before anything else is computed, so only its direction matters. A zero
    /// normal produces `NaN` components.
    ///
    /// ```
    /// use cv_vector::Vector3D;
    ///
    /// let light = Vector3D::new(0.0, -1.0, 0.0);
    /// let floor = Vector3D::new(0.0, 5.0, 0.0);
    /// assert_eq!(light.reflect(floor), Vector3D::new(0.0, 1.0, 0.0));
    /// ```
    #[must_use]
    pub fn reflect(self, normal: Self) -> Self {
        let normal = normal.normalize();
        let dot = self.dot(normal);
        self - (normal * dot) * 2.0
    }

    /// Returns `true` if every component is neither infinite nor `NaN`.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl fmt::Display for Vector3D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<[f32; 3]> for Vector3D {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3D> for [f32; 3] {
    fn from(v: Vector3D) -> Self {
        [v.x, v.y, v.z]
    }
}

#[cfg(feature = "nalgebra")]
impl From<nalgebra::Vector3<f32>> for Vector3D {
    fn from(v: nalgebra::Vector3<f32>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(feature = "nalgebra")]
impl From<Vector3D> for nalgebra::Vector3<f32> {
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Neg for Vector3D {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vector3D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl SubAssign for Vector3D {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Mul<f32> for Vector3D {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl Mul<Vector3D> for f32 {
    type Output = Vector3D;

    fn mul(self, v: Vector3D) -> Vector3D {
        v * self
    }
}

impl MulAssign<f32> for Vector3D {
    fn mul_assign(&mut self, scale: f32) {
        *self = *self * scale;
    }
}

/// Division by zero is not guarded and follows IEEE rules (`inf` or `NaN`).
impl Div<f32> for Vector3D {
    type Output = Self;

    fn div(self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor, self.z / divisor)
    }
}

impl DivAssign<f32> for Vector3D {
    fn div_assign(&mut self, divisor: f32) {
        *self = *self / divisor;
    }
}

impl Sum for Vector3D {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Vector3D::zeros(), |a, b| a + b)
    }
}

impl AbsDiffEq for Vector3D {
    type Epsilon = f32;

    fn default_epsilon() -> f32 {
        f32::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3D {
    fn default_max_relative() -> f32 {
        f32::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f32, max_relative: f32) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl UlpsEq for Vector3D {
    fn default_max_ulps() -> u32 {
        f32::default_max_ulps()
    }

    fn ulps_eq(&self, other: &Self, epsilon: f32, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}
