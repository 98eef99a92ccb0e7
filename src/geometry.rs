use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn from_angle(angle: f32) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }

    pub fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }

    pub fn scale(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }

    pub fn div(self, divisor: f32) -> Self {
        Self::new(self.x / divisor, self.y / divisor)
    }

    pub fn dot(self, other: Self) -> f32 {
        (self.x * other.x) + (self.y * other.y)
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        self.sub(other).magnitude()
    }

    // Zero stays zero instead of turning into NaN.
    pub fn normalize(self) -> Self {
        let magnitude = self.magnitude();
        if magnitude <= f32::EPSILON {
            return Self::ZERO;
        }
        self.scale(1.0 / magnitude)
    }

    pub fn rotate(self, angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            (self.x * cos) - (self.y * sin),
            (self.x * sin) + (self.y * cos),
        )
    }

    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    pub fn trunc(self) -> Self {
        Self::new(self.x.trunc(), self.y.trunc())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2},{:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn arithmetic_is_componentwise() {
        let a = Vec2::new(3.0, -1.0);
        let b = Vec2::new(0.5, 2.0);

        assert_eq!(a.add(b), Vec2::new(3.5, 1.0));
        assert_eq!(a.sub(b), Vec2::new(2.5, -3.0));
        assert_eq!(a.scale(2.0), Vec2::new(6.0, -2.0));
        assert_eq!(a.div(2.0), Vec2::new(1.5, -0.5));
        assert_eq!(a.abs(), Vec2::new(3.0, 1.0));
        assert_abs_diff_eq!(a.dot(b), -0.5);
    }

    #[test]
    fn magnitude_and_distance() {
        assert_abs_diff_eq!(Vec2::new(3.0, 4.0).magnitude(), 5.0);
        assert_abs_diff_eq!(Vec2::new(1.0, 1.0).distance(Vec2::new(4.0, 5.0)), 5.0);
    }

    #[test]
    fn normalize_yields_unit_length_and_keeps_zero() {
        let unit = Vec2::new(10.0, -10.0).normalize();
        assert_abs_diff_eq!(unit.magnitude(), 1.0, epsilon = 1e-6);
        assert_eq!(Vec2::ZERO.normalize(), Vec2::ZERO);
    }

    #[test]
    fn rotate_quarter_turn_counter_clockwise() {
        let rotated = Vec2::new(1.0, 0.0).rotate(FRAC_PI_2);
        assert_abs_diff_eq!(rotated.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(rotated.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn from_angle_lies_on_unit_circle() {
        let v = Vec2::from_angle(-FRAC_PI_2);
        assert_abs_diff_eq!(v.x, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.y, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn trunc_and_display() {
        let v = Vec2::new(2.75, -1.25);
        assert_eq!(v.trunc(), Vec2::new(2.0, -1.0));
        assert_eq!(v.to_string(), "(2.75,-1.25)");
    }
}
