use crate::basic::Point;
use crate::button::{Button, ButtonDataBuilder, TriColor};
use crate::error::{Error, ErrorConversion, Result};
use crate::palette::Palette;
use crate::support::layout::{centered_rect, right_aligned_row};
use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, PxScale, Rect, Text, TextLayout};
use ggez::Context;

/// Whether a dialog button is drawn filled or only as text
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ButtonStyle {
    Raised,
    Flat,
}

/// Geometry of a dialog, independent of any drawing
#[derive(Clone, Debug, PartialEq)]
pub struct DialogLayout {
    pub panel: Rect,
    pub title_pos: Point,
    pub body_pos: Point,
    pub buttons: Vec<Point>,
}

impl DialogLayout {
    pub const WIDTH: f32 = 440.;
    pub const PADDING: f32 = 24.;
    pub const TITLE_SIZE: f32 = 30.;
    pub const BODY_SIZE: f32 = 20.;
    pub const LINE_HEIGHT: f32 = 26.;
    pub const BUTTON_SIZE: Point = Point { x: 130., y: 40. };
    pub const BUTTON_SPACING: f32 = 8.;

    /// Centered in the window, tall enough for `body_lines` lines of text
    /// and a row of `num_buttons` right-aligned buttons at the bottom
    pub fn new(window: Point, body_lines: usize, num_buttons: usize) -> Self {
        let width = Self::WIDTH.min(window.x - 2. * Self::PADDING).max(Self::BUTTON_SIZE.x);
        let height = Self::PADDING
            + Self::TITLE_SIZE
            + Self::PADDING / 2.
            + body_lines as f32 * Self::LINE_HEIGHT
            + Self::PADDING
            + Self::BUTTON_SIZE.y
            + Self::PADDING;
        let panel = centered_rect(window, Point { x: width, y: height });

        let title_pos = Point {
            x: panel.x + Self::PADDING,
            y: panel.y + Self::PADDING,
        };
        let body_pos = Point {
            x: title_pos.x,
            y: title_pos.y + Self::TITLE_SIZE + Self::PADDING / 2.,
        };
        let buttons = right_aligned_row(
            Self::BUTTON_SIZE,
            num_buttons,
            panel.x + panel.w - Self::PADDING,
            panel.y + panel.h - Self::PADDING - Self::BUTTON_SIZE.y,
            Self::BUTTON_SPACING,
        );

        Self { panel, title_pos, body_pos, buttons }
    }
}

/// A modal box with a title, some text and a row of buttons,
/// each button reports its action `A` when clicked
pub struct Dialog<A> {
    title: String,
    body: String,
    buttons: Vec<(A, String, ButtonStyle)>,
    /// Built on first draw, when the window size is known
    built: Option<(DialogLayout, Vec<Button>)>,
}

impl<A: Copy> Dialog<A> {
    pub fn new<T: ToString, B: ToString>(title: T, body: B) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            buttons: vec![],
            built: None,
        }
    }

    pub fn button<S: ToString>(mut self, action: A, label: S, style: ButtonStyle) -> Self {
        self.buttons.push((action, label.to_string(), style));
        self.built = None;
        self
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[cfg(test)]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[cfg(test)]
    pub fn actions(&self) -> impl Iterator<Item = A> + '_ {
        self.buttons.iter().map(|(action, ..)| *action)
    }

    fn build(&self, window: Point, palette: &Palette) -> Result<(DialogLayout, Vec<Button>)> {
        let layout = DialogLayout::new(window, self.body.lines().count(), self.buttons.len());
        let buttons = self
            .buttons
            .iter()
            .zip(&layout.buttons)
            .map(|((_, label, style), pos)| {
                let fill = match style {
                    ButtonStyle::Raised => palette.button_fill,
                    ButtonStyle::Flat => palette.flat_button_fill,
                };
                let text_color = match style {
                    ButtonStyle::Raised => palette.button_text,
                    ButtonStyle::Flat => TriColor::uniform(palette.button_fill.hover),
                };
                ButtonDataBuilder::new()
                    .size(DialogLayout::BUTTON_SIZE)
                    .fill(fill)
                    .text(label, DialogLayout::BODY_SIZE, text_color)
                    .build()
                    .map(|data| Button::click(*pos, data))
            })
            .collect::<Result<Vec<_>>>()
            .with_trace_step("Dialog::build")?;
        Ok((layout, buttons))
    }

    /// Draws on top of whatever is already on the canvas, returns the
    /// action of the button clicked this frame
    pub fn draw(&mut self, canvas: &mut Canvas, ctx: &Context, palette: &Palette) -> Result<Option<A>> {
        let (width, height) = ctx.gfx.drawable_size();
        let window = Point { x: width, y: height };

        if self.built.is_none() {
            self.built = Some(self.build(window, palette)?);
        }
        let Some((layout, buttons)) = &mut self.built else {
            return Ok(None);
        };

        let builder = &mut MeshBuilder::new();
        let draw_mode = DrawMode::fill();
        builder
            .rectangle(draw_mode, Rect::new(0., 0., width, height), *palette.dialog_backdrop)
            .and_then(|b| b.rounded_rectangle(draw_mode, layout.panel, 6., *palette.dialog_fill))
            .map_err(Error::from)
            .with_trace_step("Dialog::draw")?;
        canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());

        let mut title = Text::new(self.title.as_str());
        title
            .set_scale(PxScale::from(DialogLayout::TITLE_SIZE))
            .set_layout(TextLayout::top_left());
        canvas.draw(
            &title,
            DrawParam::default().dest(layout.title_pos).color(*palette.text_color),
        );

        let mut body = Text::new(self.body.as_str());
        body.set_scale(PxScale::from(DialogLayout::BODY_SIZE))
            .set_layout(TextLayout::top_left());
        canvas.draw(
            &body,
            DrawParam::default()
                .dest(layout.body_pos)
                .color(*palette.text_color.with_alpha(0.8)),
        );

        let mut clicked = None;
        for ((action, ..), button) in self.buttons.iter().zip(buttons.iter_mut()) {
            if button.draw(canvas, ctx)? {
                clicked = Some(*action);
            }
        }
        Ok(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_centered_and_buttons_fit() {
        let window = Point { x: 800., y: 480. };
        let layout = DialogLayout::new(window, 1, 2);

        let center_x = layout.panel.x + layout.panel.w / 2.;
        let center_y = layout.panel.y + layout.panel.h / 2.;
        assert_eq!(center_x, 400.);
        assert_eq!(center_y, 240.);

        assert_eq!(layout.buttons.len(), 2);
        for pos in &layout.buttons {
            let button = Rect::new(pos.x, pos.y, DialogLayout::BUTTON_SIZE.x, DialogLayout::BUTTON_SIZE.y);
            assert!(layout.panel.contains(Point { x: button.x, y: button.y }));
            assert!(layout.panel.contains(Point { x: button.right() - 1., y: button.bottom() - 1. }));
        }
        assert!(layout.buttons[0].x < layout.buttons[1].x);
    }

    #[test]
    fn more_text_makes_a_taller_panel() {
        let window = Point { x: 800., y: 480. };
        let short = DialogLayout::new(window, 1, 1);
        let long = DialogLayout::new(window, 7, 1);
        assert_eq!(long.panel.h - short.panel.h, 6. * DialogLayout::LINE_HEIGHT);
        assert!(long.body_pos.y < long.buttons[0].y);
    }

    #[test]
    fn narrow_window_shrinks_the_panel() {
        let layout = DialogLayout::new(Point { x: 300., y: 480. }, 1, 1);
        assert_eq!(layout.panel.w, 300. - 2. * DialogLayout::PADDING);
    }

    #[test]
    fn actions_in_order() {
        let dialog = Dialog::new("Game Over", "Your score: 3")
            .button(1, "MENU", ButtonStyle::Flat)
            .button(2, "PLAY AGAIN", ButtonStyle::Raised);
        assert_eq!(dialog.actions().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(dialog.title(), "Game Over");
        assert_eq!(dialog.body(), "Your score: 3");
    }
}
