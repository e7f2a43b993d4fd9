use ggez::graphics;

pub mod gradient;

#[derive(Deref, DerefMut, Copy, Clone, Debug, PartialEq)]
pub struct Color(pub graphics::Color);

impl Color {
    pub const TRANSPARENT: Self = Self(graphics::Color::new(0., 0., 0., 0.));
    pub const WHITE: Self = Self(graphics::Color::WHITE);
    pub const BLACK: Self = Self(graphics::Color::BLACK);

    #[inline(always)]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(graphics::Color::new(r, g, b, a))
    }

    #[inline(always)]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.)
    }

    #[inline(always)]
    pub const fn gray(lightness: f32) -> Self {
        Self::rgb(lightness, lightness, lightness)
    }

    #[inline(always)]
    pub fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(graphics::Color::from_rgb(r, g, b))
    }

    #[must_use]
    pub fn with_alpha(mut self, a: f32) -> Self {
        self.a = a;
        self
    }

    /// Linear interpolation, `t = 0` is `self` and `t = 1` is `other`,
    /// alpha is interpolated too
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0., 1.);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Self::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }
}

impl From<Color> for graphics::Color {
    fn from(Color(color): Color) -> Self {
        color
    }
}

#[test]
fn test_color_math() {
    let a = Color::rgb(0., 0.5, 1.);
    let b = Color::rgb(1., 0.5, 0.);
    assert_eq!(a.lerp(b, 0.), a);
    assert_eq!(a.lerp(b, 1.), b);
    assert_eq!(a.lerp(b, 0.5), Color::rgb(0.5, 0.5, 0.5));
    // out of range factors are clamped
    assert_eq!(a.lerp(b, 2.), b);

    assert_eq!(Color::gray(1.), Color::WHITE);
    assert_eq!(Color::WHITE.with_alpha(0.).a, 0.);
}
