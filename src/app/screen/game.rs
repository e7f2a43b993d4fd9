use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use ggez::event::{EventHandler, MouseButton};
use ggez::graphics::{Canvas, DrawParam, Mesh};
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::winit::event::TouchPhase;
use ggez::Context;

use crate::app::Transition;
use crate::basic::Point;
use crate::control::{Control, State};
use crate::dialog::{ButtonStyle, Dialog};
use crate::difficulty::Difficulty;
use crate::error::{Error, ErrorConversion, Result};
use crate::game::{GameState, Score, Tick};
use crate::input::{classify_swipe, key_dir, SwipeTracker};
use crate::message::{Message, MessageID, Position};
use crate::palette::Palette;
use crate::prefs::Prefs;
use crate::rendering;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum GameOverAction {
    Menu,
    PlayAgain,
}

fn game_over_dialog(score: Score) -> Dialog<GameOverAction> {
    Dialog::new("Game Over", format!("Your score: {score}"))
        .button(GameOverAction::Menu, "MENU", ButtonStyle::Flat)
        .button(GameOverAction::PlayAgain, "PLAY AGAIN", ButtonStyle::Raised)
}

pub struct GameScreen {
    game: GameState,
    control: Control,
    difficulty: Difficulty,

    palette: Rc<Palette>,
    window: Point,
    background: Option<Mesh>,

    message_duration: Duration,
    display_rates: bool,
    messages: HashMap<MessageID, Message>,

    swipe: SwipeTracker,
    game_over: Option<Dialog<GameOverAction>>,
    transition: Option<Transition>,
}

impl GameScreen {
    const SCORE_FONT_SIZE: f32 = 30.;
    const SMALL_FONT_SIZE: f32 = 18.;

    pub fn new(prefs: &Prefs, difficulty: Difficulty, palette: Rc<Palette>) -> Result<Self> {
        let game = GameState::new(prefs.board_dim, prefs.seed).with_trace_step("GameScreen::new")?;
        log::info!(
            "new game on a {}x{} board, difficulty {difficulty}, apple at {:?}",
            prefs.board_dim.width,
            prefs.board_dim.height,
            game.apple().pos
        );

        let mut this = Self {
            game,
            control: Control::new(difficulty.tick_duration()).with_trace_step("GameScreen::new")?,
            difficulty,
            palette,
            window: prefs.board_dim.to_point(),
            background: None,
            message_duration: prefs.message_duration,
            display_rates: prefs.display_rates,
            messages: HashMap::new(),
            swipe: SwipeTracker::default(),
            game_over: None,
            transition: None,
        };
        this.update_score_message();
        Ok(this)
    }

    pub fn take_transition(&mut self) -> Option<Transition> {
        self.transition.take()
    }

    #[cfg(test)]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[cfg(test)]
    pub fn score_label(&self) -> Option<&str> {
        self.messages.get(&MessageID::Score).map(|m| m.text.as_str())
    }

    fn update_score_message(&mut self) {
        let message = Message::new(
            format!("Score: {}", self.game.score()),
            Position::TopCenter,
            self.palette.text_color,
            None,
        )
        .font_size(Self::SCORE_FONT_SIZE);
        self.messages.insert(MessageID::Score, message);
    }

    fn update_rates_message(&mut self) {
        if !self.display_rates {
            self.messages.remove(&MessageID::Rates);
            return;
        }
        let text = format!(
            "u: {:.1} / {:.1}  g: {:.1}",
            self.control.measured_tick_rate(),
            1. / self.difficulty.tick_duration().as_secs_f64(),
            self.control.measured_draw_rate(),
        );
        let message = Message::new(text, Position::TopLeft, self.palette.text_color, None)
            .font_size(Self::SMALL_FONT_SIZE);
        self.messages.insert(MessageID::Rates, message);
    }

    fn notify(&mut self, text: &str) {
        let message = Message::new(
            text.to_string(),
            Position::TopRight,
            self.palette.text_color,
            Some(self.message_duration),
        )
        .font_size(Self::SMALL_FONT_SIZE);
        self.messages.insert(MessageID::Notification, message);
    }

    /// Runs one game tick and reacts to its outcome
    fn step(&mut self) {
        match self.game.tick() {
            Tick::Moved => {}
            Tick::Ate => self.update_score_message(),
            Tick::GameOver { score } => self.end_game(score),
        }
    }

    fn end_game(&mut self, score: Score) {
        if self.game_over.is_some() {
            return;
        }
        log::info!("game over, score {score}");
        self.control.game_over();
        self.swipe.end();
        self.game_over = Some(game_over_dialog(score));
    }

    fn toggle_pause(&mut self) {
        match self.control.state() {
            State::Playing => {
                self.control.pause();
                self.notify("Paused");
            }
            State::Paused => {
                self.control.play();
                self.notify("Resumed");
            }
            State::GameOver => {}
        }
    }

    fn steer(&mut self, delta: Point) {
        if self.control.state() != State::Playing {
            return;
        }
        if let Some(dir) = classify_swipe(delta) {
            self.game.set_dir(dir);
        }
    }

    fn handle_game_over_action(&mut self, action: GameOverAction) {
        self.transition = Some(match action {
            GameOverAction::Menu => Transition::Menu,
            GameOverAction::PlayAgain => Transition::Restart,
        });
    }
}

impl EventHandler<Error> for GameScreen {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        while self.control.can_update() {
            self.step();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        self.control.graphics_frame();
        self.update_rates_message();

        let mut canvas = Canvas::from_frame(ctx, *self.palette.game_background.top);

        if self.background.is_none() {
            self.background = Some(rendering::background_mesh(
                &self.palette.game_background,
                self.window,
                ctx,
            )?);
        }
        if let Some(background) = &self.background {
            canvas.draw(background, DrawParam::default());
        }

        let apple = rendering::apple_mesh(self.game.apple(), self.palette.apple_color, ctx)?;
        canvas.draw(&apple, DrawParam::default());
        let snake = rendering::snake_mesh(self.game.snake(), self.palette.snake_color, ctx)?;
        canvas.draw(&snake, DrawParam::default());

        // expired messages are dropped
        let mut expired = vec![];
        for (id, message) in &self.messages {
            match message.get_drawable(ctx) {
                Some(drawable) => drawable.draw(&mut canvas),
                None => expired.push(*id),
            }
        }
        for id in expired {
            self.messages.remove(&id);
        }

        let mut action = None;
        if let Some(dialog) = &mut self.game_over {
            action = dialog.draw(&mut canvas, ctx, &self.palette)?;
        }

        canvas.finish(ctx).map_err(Error::from).with_trace_step("GameScreen::draw")?;

        if let Some(action) = action {
            self.handle_game_over_action(action);
        }
        Ok(())
    }

    fn mouse_button_down_event(&mut self, _ctx: &mut Context, button: MouseButton, x: f32, y: f32) -> Result {
        if button == MouseButton::Left && self.game_over.is_none() {
            self.swipe.start(Point { x, y });
        }
        Ok(())
    }

    fn mouse_button_up_event(&mut self, _ctx: &mut Context, button: MouseButton, _x: f32, _y: f32) -> Result {
        if button == MouseButton::Left {
            self.swipe.end();
        }
        Ok(())
    }

    fn mouse_motion_event(&mut self, _ctx: &mut Context, x: f32, y: f32, _dx: f32, _dy: f32) -> Result {
        if let Some(delta) = self.swipe.moved(Point { x, y }) {
            self.steer(delta);
        }
        Ok(())
    }

    fn touch_event(&mut self, _ctx: &mut Context, phase: TouchPhase, x: f64, y: f64) -> Result {
        let pos = Point { x: x as f32, y: y as f32 };
        match phase {
            TouchPhase::Started if self.game_over.is_none() => self.swipe.start(pos),
            TouchPhase::Started => {}
            TouchPhase::Moved => {
                if let Some(delta) = self.swipe.moved(pos) {
                    self.steer(delta);
                }
            }
            TouchPhase::Ended | TouchPhase::Cancelled => self.swipe.end(),
        }
        Ok(())
    }

    fn key_down_event(&mut self, _ctx: &mut Context, input: KeyInput, _repeated: bool) -> Result {
        let Some(key) = input.keycode else {
            return Ok(());
        };

        if self.game_over.is_some() {
            match key {
                KeyCode::Return | KeyCode::Space => self.handle_game_over_action(GameOverAction::PlayAgain),
                KeyCode::Escape => self.handle_game_over_action(GameOverAction::Menu),
                _ => {}
            }
            return Ok(());
        }

        if let Some(dir) = key_dir(key) {
            if self.control.state() == State::Playing {
                self.game.set_dir(dir);
            }
            return Ok(());
        }

        match key {
            KeyCode::Space | KeyCode::P => self.toggle_pause(),
            KeyCode::F => {
                self.display_rates = !self.display_rates;
                log::info!("display rates: {}", self.display_rates);
            }
            KeyCode::Escape => self.transition = Some(Transition::Menu),
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apple::spawn::SpawnPolicy;
    use crate::basic::{BoardDim, Dir, GridPoint};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn screen() -> GameScreen {
        let prefs = Prefs::default().seed(Some(7));
        GameScreen::new(&prefs, Difficulty::Hard, Rc::new(Palette::default())).unwrap()
    }

    fn score_text(screen: &GameScreen) -> &str {
        screen.score_label().unwrap()
    }

    #[test]
    fn starts_with_score_label() {
        let screen = screen();
        assert_eq!(score_text(&screen), "Score: 0");
        assert_eq!(screen.control.state(), State::Playing);
        assert!(screen.game_over.is_none());
    }

    #[test]
    fn eating_updates_the_score_label() {
        let mut screen = screen();
        // right in front of the head, then far away
        screen.game = GameState::with_spawn_policy(
            BoardDim::DEFAULT,
            SpawnPolicy::scheduled(vec![GridPoint::new(120, 100), GridPoint::new(600, 400)]),
            StdRng::seed_from_u64(0),
        )
        .unwrap();

        screen.step();
        assert_eq!(screen.game.score(), 1);
        assert_eq!(score_text(&screen), "Score: 1");

        screen.step();
        assert_eq!(score_text(&screen), "Score: 1");
    }

    #[test]
    fn leaving_the_board_opens_game_over_dialog() {
        let mut screen = screen();
        screen.game.set_dir(Dir::U);
        // head starts at y = 100, five steps up reach y = 0
        for _ in 0..6 {
            assert!(screen.game_over.is_none());
            screen.step();
        }

        let dialog = screen.game_over.as_ref().unwrap();
        assert_eq!(dialog.title(), "Game Over");
        assert_eq!(dialog.body(), format!("Your score: {}", screen.game.score()));
        assert_eq!(
            dialog.actions().collect::<Vec<_>>(),
            vec![GameOverAction::Menu, GameOverAction::PlayAgain]
        );
        assert_eq!(screen.control.state(), State::GameOver);
        assert!(!screen.control.can_update());
    }

    #[test]
    fn game_over_actions_request_transitions() {
        let mut screen = screen();
        screen.end_game(3);
        screen.handle_game_over_action(GameOverAction::PlayAgain);
        assert_eq!(screen.take_transition(), Some(Transition::Restart));
        screen.handle_game_over_action(GameOverAction::Menu);
        assert_eq!(screen.take_transition(), Some(Transition::Menu));
        assert_eq!(screen.take_transition(), None);
    }

    #[test]
    fn steering_is_ignored_while_paused() {
        let mut screen = screen();
        screen.steer(Point { x: 0., y: 30. });
        assert_eq!(screen.game.snake().dir(), Dir::D);

        screen.toggle_pause();
        assert_eq!(screen.control.state(), State::Paused);
        assert!(screen.messages.contains_key(&MessageID::Notification));
        screen.steer(Point { x: -30., y: 0. });
        assert_eq!(screen.game.snake().dir(), Dir::D);

        screen.toggle_pause();
        assert_eq!(screen.control.state(), State::Playing);
        screen.steer(Point { x: -30., y: 0. });
        assert_eq!(screen.game.snake().dir(), Dir::L);
    }

    #[test]
    fn rates_message_follows_the_toggle() {
        let mut screen = screen();
        screen.update_rates_message();
        assert!(!screen.messages.contains_key(&MessageID::Rates));
        screen.display_rates = true;
        screen.update_rates_message();
        assert!(screen.messages.contains_key(&MessageID::Rates));
    }
}
