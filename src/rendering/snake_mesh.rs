use ggez::graphics::{DrawMode, Mesh, MeshBuilder, Rect};
use ggez::Context;

use crate::basic::GRID_STEP;
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};
use crate::snake::Snake;

pub fn snake_mesh(snake: &Snake, color: Color, ctx: &Context) -> Result<Mesh> {
    let side = GRID_STEP as f32;
    let mut builder = MeshBuilder::new();
    for cell in snake.cells() {
        let rect = Rect::new(cell.x as f32, cell.y as f32, side, side);
        builder
            .rectangle(DrawMode::fill(), rect, *color)
            .map_err(Error::from)
            .with_trace_step("snake_mesh")?;
    }
    Ok(Mesh::from_data(ctx, builder.build()))
}
