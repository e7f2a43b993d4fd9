use std::ops::{Deref, DerefMut};
use std::rc::Rc;

use ggez::event::{ErrorOrigin, EventHandler, MouseButton};
use ggez::input::keyboard::KeyInput;
use ggez::winit::event::TouchPhase;
use ggez::Context;

use crate::app::screen::{GameScreen, MenuScreen};
use crate::difficulty::Difficulty;
use crate::error::{Error, ErrorConversion, Result};
use crate::palette::Palette;
use crate::prefs::Prefs;

pub mod screen;

/// Requests a screen makes to the `App`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Transition {
    StartGame(Difficulty),
    /// A new game with the last difficulty
    Restart,
    Menu,
    Quit,
}

pub enum Screen {
    Menu(MenuScreen),
    Game(GameScreen),
}

impl Deref for Screen {
    type Target = dyn EventHandler<Error>;

    fn deref(&self) -> &Self::Target {
        use Screen::*;
        match self {
            Menu(x) => x,
            Game(x) => x,
        }
    }
}

impl DerefMut for Screen {
    fn deref_mut(&mut self) -> &mut Self::Target {
        use Screen::*;
        match self {
            Menu(x) => x,
            Game(x) => x,
        }
    }
}

impl Screen {
    fn take_transition(&mut self) -> Option<Transition> {
        match self {
            Screen::Menu(menu) => menu.take_transition(),
            Screen::Game(game) => game.take_transition(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Screen::Menu(_) => "menu",
            Screen::Game(_) => "game",
        }
    }
}

pub struct App {
    screen: Screen,
    prefs: Prefs,
    palette: Rc<Palette>,
    /// Last difficulty picked in the menu, used by restarts
    /// and when coming back to the menu
    difficulty: Difficulty,
}

impl App {
    pub fn new(prefs: Prefs) -> Result<Self> {
        let palette = Rc::new(Palette::default());
        let difficulty = prefs.difficulty;
        let menu = MenuScreen::new(difficulty, prefs.board_dim.to_point(), Rc::clone(&palette))
            .with_trace_step("App::new")?;
        Ok(Self {
            screen: Screen::Menu(menu),
            prefs,
            palette,
            difficulty,
        })
    }

    fn new_game(&self) -> Result<Screen> {
        GameScreen::new(&self.prefs, self.difficulty, Rc::clone(&self.palette)).map(Screen::Game)
    }

    /// Switches screens, returns `false` when the transition asks to quit
    fn switch_screen(&mut self, transition: Transition) -> Result<bool> {
        let from = self.screen.name();
        match transition {
            Transition::StartGame(difficulty) => {
                self.difficulty = difficulty;
                self.screen = self.new_game()?;
            }
            Transition::Restart => {
                self.screen = self.new_game()?;
            }
            Transition::Menu => {
                let window = self.prefs.board_dim.to_point();
                self.screen =
                    Screen::Menu(MenuScreen::new(self.difficulty, window, Rc::clone(&self.palette))?);
            }
            Transition::Quit => return Ok(false),
        }
        log::info!(
            "{from} -> {} ({:?}, difficulty {})",
            self.screen.name(),
            transition,
            self.difficulty
        );
        Ok(true)
    }

    fn apply(&mut self, transition: Transition, ctx: &mut Context) -> Result {
        if !self.switch_screen(transition)? {
            log::info!("quitting");
            ctx.request_quit();
        }
        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, ctx: &mut Context) -> Result {
        self.screen.update(ctx)?;
        if let Some(transition) = self.screen.take_transition() {
            self.apply(transition, ctx).with_trace_step("App::update")?;
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        self.screen.draw(ctx)
    }

    fn mouse_button_down_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        self.screen.mouse_button_down_event(ctx, button, x, y)
    }

    fn mouse_button_up_event(&mut self, ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        self.screen.mouse_button_up_event(ctx, button, x, y)
    }

    fn mouse_motion_event(&mut self, ctx: &mut Context, x: f32, y: f32, dx: f32, dy: f32) -> Result {
        self.screen.mouse_motion_event(ctx, x, y, dx, dy)
    }

    fn touch_event(&mut self, ctx: &mut Context, phase: TouchPhase, x: f64, y: f64) -> Result {
        self.screen.touch_event(ctx, phase, x, y)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        self.screen.key_down_event(ctx, input, repeated)
    }

    fn on_error(&mut self, _ctx: &mut Context, _origin: ErrorOrigin, e: Error) -> bool {
        log::error!("{e}");
        // stop the event loop
        true
    }
}
