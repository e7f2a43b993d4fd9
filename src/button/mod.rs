use crate::basic::Point;
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};
use ggez::event::MouseButton;
use ggez::graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder, PxScale, Rect, Text, TextLayout};
use ggez::Context;
use std::error;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum State {
    Normal,
    Hover,
    JustClicked,
    Clicked,
}

impl State {
    /// `mouse_pos` relative to the button's top-left corner
    pub fn of(size: Point, mouse_pos: Point, mouse_down: bool, just_clicked: bool) -> Self {
        let overlap = (0.0..size.x).contains(&mouse_pos.x) && (0.0..size.y).contains(&mouse_pos.y);
        if overlap {
            if just_clicked {
                State::JustClicked
            } else if mouse_down {
                State::Clicked
            } else {
                State::Hover
            }
        } else {
            State::Normal
        }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct TriColor {
    pub normal: Color,
    pub hover: Color,
    pub click: Color,
}

impl TriColor {
    pub const fn uniform(color: Color) -> Self {
        Self { normal: color, hover: color, click: color }
    }

    pub fn get(&self, state: State) -> Color {
        match state {
            State::Normal => self.normal,
            State::Hover => self.hover,
            State::JustClicked | State::Clicked => self.click,
        }
    }
}

// Very similar to `MessageDrawable`, always centered in the button
#[derive(Debug, Clone)]
struct ButtonText {
    text: Text,
    color: TriColor,
}

impl ButtonText {
    fn draw(&self, canvas: &mut Canvas, center: Point, state: State) {
        let dp = DrawParam::default().dest(center).color(*self.color.get(state));
        canvas.draw(&self.text, dp)
    }
}

#[derive(Debug, Clone)]
pub struct ButtonData {
    size: Point,
    corner_radius: f32,
    fill: TriColor,
    text: Option<ButtonText>,
}

impl ButtonData {
    fn draw(&self, canvas: &mut Canvas, ctx: &Context, pos: Point, state: State) -> Result {
        let rect = Rect::new(pos.x, pos.y, self.size.x, self.size.y);
        let builder = &mut MeshBuilder::new();
        builder
            .rounded_rectangle(DrawMode::fill(), rect, self.corner_radius, *self.fill.get(state))
            .map_err(Error::from)
            .with_trace_step("ButtonData::draw")?;
        canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());

        if let Some(text) = &self.text {
            text.draw(canvas, pos + self.size / 2., state)
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ButtonDataBuilder {
    size: Option<Point>,
    fill: Option<TriColor>,
    text: Option<ButtonText>,
}

#[derive(Debug)]
pub struct ButtonDataBuilderError(pub Box<ButtonDataBuilder>, pub &'static str);

impl Display for ButtonDataBuilderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "button data builder error: {}", self.1)?;
        write!(f, "builder: {:?}", self.0)
    }
}

impl error::Error for ButtonDataBuilderError {}

impl ButtonDataBuilder {
    pub const DEFAULT_CORNER_RADIUS: f32 = 4.;

    pub fn new() -> Self {
        Self {
            size: None,
            fill: None,
            text: None,
        }
    }

    pub fn size(mut self, size: Point) -> Self {
        self.size = Some(size);
        self
    }

    pub fn fill(mut self, fill: TriColor) -> Self {
        self.fill = Some(fill);
        self
    }

    pub fn text(mut self, text: &str, font_size: f32, color: TriColor) -> Self {
        let mut text = Text::new(text);
        text.set_scale(PxScale::from(font_size))
            .set_layout(TextLayout::center());

        self.text = Some(ButtonText { text, color });
        self
    }

    pub fn build(self) -> Result<ButtonData> {
        let Some(size) = self.size else {
            let res: Result<_> = Err(ButtonDataBuilderError(Box::new(self), "Size missing").into());
            return res.with_trace_step("ButtonDataBuilder::build");
        };
        if size.x <= 0. || size.y <= 0. {
            let res: Result<_> =
                Err(ButtonDataBuilderError(Box::new(self), "Size must be positive").into());
            return res.with_trace_step("ButtonDataBuilder::build");
        }
        Ok(ButtonData {
            size,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            fill: self.fill.unwrap_or(TriColor::uniform(Color::TRANSPARENT)),
            text: self.text,
        })
    }
}

#[derive(Debug, Clone)]
pub enum ButtonType {
    Click(ButtonData),
    /// Cycles through its options on each click
    Rotate {
        options: Vec<ButtonData>,
        index: usize,
    },
}

pub struct Button {
    pub pos: Point,
    pub button_type: ButtonType,
    /// Disabled buttons ignore the mouse
    pub enabled: bool,
}

impl Button {
    pub fn click(pos: Point, data: ButtonData) -> Self {
        Self { pos, button_type: ButtonType::Click(data), enabled: true }
    }

    /// Starts on option `index`, wrapped around the number of options
    pub fn rotate(pos: Point, options: Vec<ButtonData>, index: usize) -> Result<Self> {
        if options.is_empty() {
            let res: Result<_> = Err(Error::button("rotate button without options"));
            return res.with_trace_step("Button::rotate");
        }
        let index = index % options.len();
        Ok(Self {
            pos,
            button_type: ButtonType::Rotate { options, index },
            enabled: true,
        })
    }

    fn data(&self) -> &ButtonData {
        match &self.button_type {
            ButtonType::Click(data) => data,
            ButtonType::Rotate { options, index } => &options[*index],
        }
    }

    pub fn size(&self) -> Point {
        self.data().size
    }

    #[cfg(test)]
    pub fn rect(&self) -> Rect {
        let Point { x, y } = self.size();
        Rect::new(self.pos.x, self.pos.y, x, y)
    }

    /// Currently shown option of a rotate button, 0 for click buttons
    #[cfg(test)]
    pub fn index(&self) -> usize {
        match &self.button_type {
            ButtonType::Click(_) => 0,
            ButtonType::Rotate { index, .. } => *index,
        }
    }

    pub fn set_index(&mut self, new_index: usize) {
        if let ButtonType::Rotate { options, index } = &mut self.button_type {
            *index = new_index % options.len();
        }
    }

    fn state(&self, ctx: &Context) -> State {
        if !self.enabled {
            return State::Normal;
        }
        let mouse_pos = Point::from(ctx.mouse.position()) - self.pos;
        let mouse_down = ctx.mouse.button_pressed(MouseButton::Left);
        let just_clicked = ctx.mouse.button_just_pressed(MouseButton::Left);
        State::of(self.size(), mouse_pos, mouse_down, just_clicked)
    }

    /// Advance a rotate button, no-op for click buttons
    fn register_click(&mut self) {
        if let ButtonType::Rotate { options, index } = &mut self.button_type {
            *index = (*index + 1) % options.len();
        }
    }

    /// Returns whether the button was clicked this frame
    pub fn draw(&mut self, canvas: &mut Canvas, ctx: &Context) -> Result<bool> {
        let state = self.state(ctx);
        self.data()
            .draw(canvas, ctx, self.pos, state)
            .with_trace_step("Button::draw")?;

        let clicked = state == State::JustClicked;
        if clicked {
            self.register_click();
        }
        Ok(clicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;

    fn data() -> ButtonData {
        ButtonDataBuilder::new()
            .size(Point { x: 100., y: 40. })
            .build()
            .unwrap()
    }

    #[test]
    fn state_from_mouse() {
        let size = Point { x: 100., y: 40. };
        let inside = Point { x: 50., y: 20. };
        let outside = Point { x: 100., y: 20. };
        assert_eq!(State::of(size, inside, false, false), State::Hover);
        assert_eq!(State::of(size, inside, true, false), State::Clicked);
        assert_eq!(State::of(size, inside, true, true), State::JustClicked);
        assert_eq!(State::of(size, outside, true, true), State::Normal);
        assert_eq!(State::of(size, Point { x: -1., y: 0. }, false, false), State::Normal);
    }

    #[test]
    fn rotate_wraps_around() {
        let mut button = Button::rotate(Point::zero(), vec![data(), data(), data()], 1).unwrap();
        assert_eq!(button.index(), 1);
        button.register_click();
        assert_eq!(button.index(), 2);
        button.register_click();
        assert_eq!(button.index(), 0);
        button.set_index(4);
        assert_eq!(button.index(), 1);
    }

    #[test]
    fn rotate_needs_options() {
        let err = Button::rotate(Point::zero(), vec![], 0).err().unwrap();
        assert!(matches!(err.error_type(), ErrorType::ButtonError(_)));

        let button = Button::rotate(Point::zero(), vec![data(), data()], 5).unwrap();
        assert_eq!(button.index(), 1);
    }

    #[test]
    fn click_button_has_no_options() {
        let mut button = Button::click(Point { x: 10., y: 10. }, data());
        button.register_click();
        button.set_index(3);
        assert_eq!(button.index(), 0);
        assert_eq!(button.rect(), Rect::new(10., 10., 100., 40.));
    }

    #[test]
    fn builder_requires_size() {
        assert!(ButtonDataBuilder::new().build().is_err());
        assert!(ButtonDataBuilder::new()
            .size(Point { x: 0., y: 10. })
            .build()
            .is_err());
    }
}
