use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::basic::Point;
use crate::color::gradient::Gradient;
use crate::error::{Error, ErrorConversion, Result};

/// Horizontal bands covering `dim`, top to bottom
pub fn band_rects(dim: Point, bands: usize) -> impl Iterator<Item = Rect> {
    let band_height = dim.y / bands as f32;
    (0..bands).map(move |i| {
        // slight overlap so no seams show between bands
        Rect::new(0., i as f32 * band_height, dim.x, band_height + 1.)
    })
}

/// Vertical gradient filling a `dim`-sized area at the origin,
/// only needs to be rebuilt when the size changes
pub fn background_mesh(gradient: &Gradient, dim: Point, ctx: &Context) -> Result<Mesh> {
    let mut builder = MeshBuilder::new();
    for (rect, color) in band_rects(dim, Gradient::BANDS).zip(gradient.bands()) {
        builder
            .rectangle(DrawMode::fill(), rect, *color)
            .map_err(Error::from)
            .with_trace_step("background_mesh")?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}

#[test]
fn test_band_rects_cover_area() {
    let dim = Point { x: 800., y: 480. };
    let rects: Vec<_> = band_rects(dim, 64).collect();
    assert_eq!(rects.len(), 64);
    assert_eq!(rects[0].y, 0.);
    assert!(rects[63].bottom() >= 480.);
    assert!(rects.windows(2).all(|w| w[0].bottom() >= w[1].y));
    assert!(rects.iter().all(|r| r.w == 800.));
}
