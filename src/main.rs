#[macro_use]
extern crate derive_more;

use clap::Parser;
use ggez::conf::{WindowMode, WindowSetup};
use ggez::{event, ContextBuilder};

use crate::app::App;
use crate::cli::Args;
use crate::error::{Error, ErrorConversion, Result};

mod app;
mod apple;
mod basic;
mod button;
mod cli;
mod color;
mod control;
mod dialog;
mod difficulty;
mod error;
mod game;
mod input;
mod message;
mod palette;
mod prefs;
mod rendering;
mod snake;
mod support;

fn main() -> Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let prefs = Args::parse().into_prefs()?;
    let window = prefs.board_dim.to_point();
    log::info!(
        "starting: {}x{} board, difficulty {}",
        prefs.board_dim.width,
        prefs.board_dim.height,
        prefs.difficulty
    );

    let (ctx, event_loop) = ContextBuilder::new("swipe_snake", "author")
        .window_setup(WindowSetup::default().title("Snake"))
        .window_mode(
            WindowMode::default()
                .dimensions(window.x, window.y)
                .resizable(false),
        )
        .build()
        .map_err(Error::from)
        .with_trace_step("main")?;

    let app = App::new(prefs)?;
    event::run(ctx, event_loop, app)
}
