use crate::color::Color;

/// Vertical two-color gradient used for backgrounds
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Gradient {
    pub top: Color,
    pub bottom: Color,
}

impl Gradient {
    /// Number of horizontal color bands, enough that banding
    /// is not noticeable at window heights
    pub const BANDS: usize = 64;

    /// Color at relative height `f`, 0 is the top and 1 the bottom
    pub fn at(&self, f: f32) -> Color {
        self.top.lerp(self.bottom, f)
    }

    /// Colors of the bands from top to bottom, each band samples
    /// the gradient at its own index, the first band is exactly
    /// `top` and the last exactly `bottom`
    pub fn bands(&self) -> impl Iterator<Item = Color> + '_ {
        (0..Self::BANDS).map(|i| self.at(i as f32 / (Self::BANDS - 1) as f32))
    }
}

#[test]
fn test_gradient_bands() {
    let gradient = Gradient {
        top: Color::rgb(0., 0., 1.),
        bottom: Color::rgb(0.5, 0., 0.5),
    };
    let bands: Vec<_> = gradient.bands().collect();
    assert_eq!(bands.len(), Gradient::BANDS);
    assert_eq!(bands[0], gradient.top);
    assert_eq!(bands[Gradient::BANDS - 1], gradient.bottom);
    // red increases, blue decreases monotonically
    assert!(bands.windows(2).all(|w| w[0].r <= w[1].r && w[0].b >= w[1].b));
}
