pub use apple_mesh::apple_mesh;
pub use background_mesh::background_mesh;
pub use snake_mesh::snake_mesh;

mod apple_mesh;
mod background_mesh;
mod snake_mesh;
