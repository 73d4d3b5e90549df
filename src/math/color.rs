use std::ops::{Add, AddAssign, Mul, MulAssign};

#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct RGBColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl RGBColor {
    pub const fn new(r: f32, g: f32, b: f32) -> RGBColor {
        RGBColor { r, g, b }
    }
    pub const fn grey(v: f32) -> RGBColor {
        RGBColor::new(v, v, v)
    }
    pub const BLACK: RGBColor = RGBColor::grey(0.0);
    pub const WHITE: RGBColor = RGBColor::grey(1.0);

    pub fn lerp(self, other: RGBColor, t: f32) -> RGBColor {
        self * (1.0 - t) + other * t
    }

    pub fn to_rgb8(self) -> [u8; 3] {
        let q = |c: f32| (c.clamp(0.0, 1.0) * 255.0 + 0.5) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }

    /// Packs into the `0RGB` layout minifb expects.
    pub fn to_u32(self) -> u32 {
        let [r, g, b] = self.to_rgb8();
        ((r as u32) << 16) | ((g as u32) << 8) | b as u32
    }

    pub fn from_u32(packed: u32) -> RGBColor {
        let c = |shift: u32| ((packed >> shift) & 0xff) as f32 / 255.0;
        RGBColor::new(c(16), c(8), c(0))
    }
}

impl Add for RGBColor {
    type Output = RGBColor;
    fn add(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }
}

impl AddAssign for RGBColor {
    fn add_assign(&mut self, other: RGBColor) {
        *self = *self + other;
    }
}

impl Mul for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        RGBColor::new(self.r * other.r, self.g * other.g, self.b * other.b)
    }
}

impl Mul<f32> for RGBColor {
    type Output = RGBColor;
    fn mul(self, other: f32) -> RGBColor {
        RGBColor::new(self.r * other, self.g * other, self.b * other)
    }
}

impl Mul<RGBColor> for f32 {
    type Output = RGBColor;
    fn mul(self, other: RGBColor) -> RGBColor {
        other * self
    }
}

impl MulAssign<f32> for RGBColor {
    fn mul_assign(&mut self, other: f32) {
        *self = *self * other;
    }
}

impl From<[f32; 3]> for RGBColor {
    fn from(other: [f32; 3]) -> RGBColor {
        RGBColor::new(other[0], other[1], other[2])
    }
}

impl From<RGBColor> for [f32; 3] {
    fn from(c: RGBColor) -> [f32; 3] {
        [c.r, c.g, c.b]
    }
}
