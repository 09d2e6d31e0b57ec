//! 2D vector type used for positions, velocities and forces

use core::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Multiply every component by `n`
    #[inline]
    pub fn scalar_mul(self, n: f32) -> Self {
        Self::new(self.x * n, self.y * n)
    }

    /// Component-wise product
    #[inline]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }

    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Signed area of the parallelogram spanned by `self` and `other`
    #[inline]
    pub fn cross(self, other: Self) -> f32 {
        self.x * other.y - other.x * self.y
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Squared distance between two points
    #[inline]
    pub fn distance_squared(self, other: Self) -> f32 {
        (self - other).length_squared()
    }

    /// Unit vector in the same direction.
    ///
    /// A zero vector has no direction; the result is non-finite. Callers that
    /// can produce one must check first.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Counter-clockwise perpendicular, `(-y, x)`
    #[inline]
    pub fn perpendicular(self) -> Self {
        Self::new(-self.y, self.x)
    }

    /// Mirror about the plane with the given unit normal: `v - 2(v·n)n`
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        self + normal * (-2.0 * self.dot(normal))
    }

    /// Component of `self` along the unit vector `axis`
    #[inline]
    pub fn project_onto(self, axis: Self) -> Self {
        axis * axis.dot(self)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn to_array(self) -> [f32; 2] {
        [self.x, self.y]
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from(a: [f32; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

// Operator implementations for Vec2
impl Add for Vec2 {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self { Self::new(self.x + rhs.x, self.y + rhs.y) }
}
impl Sub for Vec2 {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self { Self::new(self.x - rhs.x, self.y - rhs.y) }
}
impl Mul<f32> for Vec2 {
    type Output = Self;
    #[inline] fn mul(self, rhs: f32) -> Self { self.scalar_mul(rhs) }
}
impl Mul<Vec2> for f32 {
    type Output = Vec2;
    #[inline] fn mul(self, rhs: Vec2) -> Vec2 { rhs.scalar_mul(self) }
}
impl Div<f32> for Vec2 {
    type Output = Self;
    #[inline] fn div(self, rhs: f32) -> Self { Self::new(self.x / rhs, self.y / rhs) }
}
impl Neg for Vec2 {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y) }
}
impl AddAssign for Vec2 {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}
impl SubAssign for Vec2 {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}
impl MulAssign<f32> for Vec2 {
    #[inline] fn mul_assign(&mut self, rhs: f32) { *self = *self * rhs; }
}
