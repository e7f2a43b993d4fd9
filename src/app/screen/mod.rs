pub use game::GameScreen;
pub use menu::MenuScreen;

mod game;
mod menu;
