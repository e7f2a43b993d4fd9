use std::rc::Rc;

use ggez::event::EventHandler;
use ggez::graphics::{Canvas, DrawParam, Mesh, PxScale, Text, TextLayout};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::Context;

use crate::app::Transition;
use crate::basic::Point;
use crate::button::{Button, ButtonDataBuilder};
use crate::color::Color;
use crate::dialog::{ButtonStyle, Dialog};
use crate::difficulty::Difficulty;
use crate::error::{Error, ErrorConversion, Result};
use crate::palette::Palette;
use crate::rendering;
use crate::support::layout::centered_column;

pub const TITLE: &str = "A Simple Snake Game by UFG Channel";

pub const INSTRUCTIONS: &str = "\
- Swipe or use the arrow keys to change the snake's direction.
- Eat the red food to grow and increase your score.
- The game ends when the snake goes out of bounds.
- Select a difficulty to change the snake's speed.
- Space pauses the game.
- Use Quit to exit the game.";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum MenuAction {
    Play,
    Difficulty,
    Info,
    Quit,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum InfoAction {
    Close,
}

/// Where the title and the buttons go
#[derive(Debug, PartialEq)]
struct MenuLayout {
    title_center: Point,
    buttons: Vec<Point>,
}

impl MenuLayout {
    const PADDING: f32 = 50.;
    const SPACING: f32 = 20.;
    const BUTTON_SIZE: Point = Point { x: 240., y: 48. };
    /// Fraction of the window height taken by the title
    const TITLE_FRACTION: f32 = 0.2;

    fn new(window: Point, num_buttons: usize) -> Self {
        let title_height = window.y * Self::TITLE_FRACTION;
        let title_center = Point {
            x: window.x / 2.,
            y: Self::PADDING + title_height / 2.,
        };
        let buttons = centered_column(
            window,
            Self::BUTTON_SIZE,
            num_buttons,
            Self::PADDING + title_height + Self::SPACING,
            Self::SPACING,
        );
        Self { title_center, buttons }
    }
}

pub struct MenuScreen {
    difficulty: Difficulty,
    palette: Rc<Palette>,
    window: Point,

    layout: MenuLayout,
    title: Text,
    buttons: Vec<(MenuAction, Button)>,

    /// Cached, the window can't be resized
    background: Option<Mesh>,
    info: Option<Dialog<InfoAction>>,
    transition: Option<Transition>,
}

impl MenuScreen {
    const FONT_SIZE: f32 = 22.;
    const TITLE_FONT_SIZE: f32 = 36.;

    pub fn new(difficulty: Difficulty, window: Point, palette: Rc<Palette>) -> Result<Self> {
        let layout = MenuLayout::new(window, 4);

        let data = |label: &str| {
            ButtonDataBuilder::new()
                .size(MenuLayout::BUTTON_SIZE)
                .fill(palette.button_fill)
                .text(label, Self::FONT_SIZE, palette.button_text)
                .build()
        };
        let difficulty_options = Difficulty::ALL
            .iter()
            .map(|d| data(&format!("Difficulty: {d}")))
            .collect::<Result<Vec<_>>>()
            .with_trace_step("MenuScreen::new")?;

        let buttons = vec![
            (MenuAction::Play, Button::click(layout.buttons[0], data("Play")?)),
            (
                MenuAction::Difficulty,
                Button::rotate(layout.buttons[1], difficulty_options, difficulty.index())?,
            ),
            (MenuAction::Info, Button::click(layout.buttons[2], data("Info")?)),
            (MenuAction::Quit, Button::click(layout.buttons[3], data("Quit")?)),
        ];

        let mut title = Text::new(TITLE);
        title
            .set_scale(PxScale::from(Self::TITLE_FONT_SIZE))
            .set_layout(TextLayout::center());

        Ok(Self {
            difficulty,
            palette,
            window,
            layout,
            title,
            buttons,
            background: None,
            info: None,
            transition: None,
        })
    }

    #[cfg(test)]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[cfg(test)]
    pub fn info_open(&self) -> bool {
        self.info.is_some()
    }

    pub fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }

    pub fn select_difficulty(&mut self, difficulty: Difficulty) {
        if difficulty != self.difficulty {
            log::info!("difficulty: {difficulty}");
        }
        self.difficulty = difficulty;
        for (action, button) in &mut self.buttons {
            if *action == MenuAction::Difficulty {
                button.set_index(difficulty.index());
            }
        }
    }

    fn open_info(&mut self) {
        self.info = Some(
            Dialog::new("How to Play", INSTRUCTIONS).button(InfoAction::Close, "Close", ButtonStyle::Flat),
        );
        self.set_buttons_enabled(false);
    }

    fn close_info(&mut self) {
        self.info = None;
        self.set_buttons_enabled(true);
    }

    fn set_buttons_enabled(&mut self, enabled: bool) {
        for (_, button) in &mut self.buttons {
            button.enabled = enabled;
        }
    }

    fn handle_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::Play => self.transition = Some(Transition::StartGame(self.difficulty)),
            MenuAction::Difficulty => self.select_difficulty(self.difficulty.next()),
            MenuAction::Info => self.open_info(),
            MenuAction::Quit => self.transition = Some(Transition::Quit),
        }
    }
}

impl EventHandler<Error> for MenuScreen {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let mut canvas = Canvas::from_frame(ctx, *Color::BLACK);

        if self.background.is_none() {
            self.background = Some(rendering::background_mesh(
                &self.palette.menu_background,
                self.window,
                ctx,
            )?);
        }
        if let Some(background) = &self.background {
            canvas.draw(background, DrawParam::default());
        }

        canvas.draw(
            &self.title,
            DrawParam::default()
                .dest(self.layout.title_center)
                .color(*self.palette.title_color),
        );

        let mut clicked = None;
        for (action, button) in &mut self.buttons {
            if button.draw(&mut canvas, ctx)? {
                clicked = Some(*action);
            }
        }

        let mut close_info = false;
        if let Some(info) = &mut self.info {
            close_info = info.draw(&mut canvas, ctx, &self.palette)?.is_some();
        }

        canvas.finish(ctx).map_err(Error::from).with_trace_step("MenuScreen::draw")?;

        if close_info {
            self.close_info();
        }
        if let Some(action) = clicked {
            self.handle_action(action);
        }
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        let Some(key) = input.keycode else {
            return Ok(());
        };

        if self.info.is_some() {
            if matches!(key, KeyCode::Escape | KeyCode::Return) {
                self.close_info();
            }
            return Ok(());
        }

        match key {
            KeyCode::Return | KeyCode::Space => self.handle_action(MenuAction::Play),
            KeyCode::Key1 => self.select_difficulty(Difficulty::Easy),
            KeyCode::Key2 => self.select_difficulty(Difficulty::Medium),
            KeyCode::Key3 => self.select_difficulty(Difficulty::Hard),
            KeyCode::D => self.handle_action(MenuAction::Difficulty),
            KeyCode::I => self.handle_action(MenuAction::Info),
            KeyCode::Escape | KeyCode::Q => self.handle_action(MenuAction::Quit),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic::BoardDim;

    fn menu() -> MenuScreen {
        MenuScreen::new(
            Difficulty::Medium,
            BoardDim::DEFAULT.to_point(),
            Rc::new(Palette::default()),
        )
        .unwrap()
    }

    fn difficulty_button(menu: &MenuScreen) -> &Button {
        &menu
            .buttons
            .iter()
            .find(|(action, _)| *action == MenuAction::Difficulty)
            .unwrap()
            .1
    }

    #[test]
    fn layout_fits_the_window() {
        let window = BoardDim::DEFAULT.to_point();
        let layout = MenuLayout::new(window, 4);
        assert_eq!(layout.title_center.x, 400.);
        let last = layout.buttons[3];
        assert!(last.y + MenuLayout::BUTTON_SIZE.y <= window.y - MenuLayout::PADDING);
        assert!(layout.buttons.iter().all(|p| p.y > layout.title_center.y));
    }

    #[test]
    fn play_starts_with_selected_difficulty() {
        let mut menu = menu();
        assert_eq!(menu.take_transition(), None);
        menu.handle_action(MenuAction::Play);
        assert_eq!(menu.take_transition(), Some(Transition::StartGame(Difficulty::Medium)));
        assert_eq!(menu.take_transition(), None);
    }

    #[test]
    fn difficulty_cycles_and_stays_in_sync_with_button() {
        let mut menu = menu();
        assert_eq!(difficulty_button(&menu).index(), Difficulty::Medium.index());

        menu.handle_action(MenuAction::Difficulty);
        assert_eq!(menu.difficulty(), Difficulty::Hard);
        assert_eq!(difficulty_button(&menu).index(), Difficulty::Hard.index());

        menu.handle_action(MenuAction::Difficulty);
        assert_eq!(menu.difficulty(), Difficulty::Easy);

        menu.select_difficulty(Difficulty::Hard);
        assert_eq!(difficulty_button(&menu).index(), Difficulty::Hard.index());

        menu.handle_action(MenuAction::Play);
        assert_eq!(menu.take_transition(), Some(Transition::StartGame(Difficulty::Hard)));
    }

    #[test]
    fn info_dialog_disables_buttons() {
        let mut menu = menu();
        menu.handle_action(MenuAction::Info);
        assert!(menu.info_open());
        assert!(menu.buttons.iter().all(|(_, b)| !b.enabled));
        assert!(menu.info.as_ref().unwrap().body().contains("out of bounds"));

        menu.close_info();
        assert!(!menu.info_open());
        assert!(menu.buttons.iter().all(|(_, b)| b.enabled));
    }

    #[test]
    fn quit() {
        let mut menu = menu();
        menu.handle_action(MenuAction::Quit);
        assert_eq!(menu.take_transition(), Some(Transition::Quit));
    }
}
