use ggez::graphics::{DrawMode, Mesh, MeshBuilder};
use ggez::Context;

use crate::apple::Apple;
use crate::basic::{Point, GRID_STEP};
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};

/// A disc filling the apple's cell
pub fn apple_mesh(apple: Apple, color: Color, ctx: &Context) -> Result<Mesh> {
    let radius = GRID_STEP as f32 / 2.;
    let center = Point::from(apple.pos) + Point::square(radius);

    let mut builder = MeshBuilder::new();
    builder
        .circle(DrawMode::fill(), center, radius, 0.1, *color)
        .map_err(Error::from)
        .with_trace_step("apple_mesh")?;
    Ok(Mesh::from_data(ctx, builder.build()))
}
