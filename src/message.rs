use crate::basic::Point;
use crate::color::Color;
use crate::support::text_layout::TextLayoutExtension;
use ggez::graphics::{Canvas, DrawParam, PxScale, Text, TextLayout};
use ggez::Context;
use std::time::{Duration, Instant};

/// Finite number of possible messages
#[derive(PartialEq, Eq, Hash, Copy, Clone, Debug)]
pub enum MessageID {
    /// Persistent score label
    Score,
    /// Measured tick and draw rates
    Rates,
    /// Temporary info when pausing, resuming,
    /// or other notifications
    Notification,
}

#[derive(Copy, Clone, Debug)]
pub enum Position {
    TopLeft,
    TopCenter,
    TopRight,
}

pub struct Message {
    pub text: String,

    pub position: Position,
    pub h_margin: f32,
    pub v_margin: f32,
    pub font_size: f32,
    pub color: Color,
    // None means unlimited duration
    pub disappear: Option<Instant>,
}

impl Message {
    pub const DEFAULT_MARGIN: f32 = 12.;
    pub const DEFAULT_FONT_SIZE: f32 = 24.;
    const FADE_MILLIS: u128 = 200;

    pub fn new(text: String, position: Position, color: Color, duration: Option<Duration>) -> Self {
        Self {
            text,
            position,
            h_margin: Self::DEFAULT_MARGIN,
            v_margin: Self::DEFAULT_MARGIN,
            font_size: Self::DEFAULT_FONT_SIZE,
            color,
            disappear: duration.map(|d| Instant::now() + d),
        }
    }

    #[must_use]
    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }

    /// Opacity at `now`, `None` once the message has expired,
    /// the last moments fade out linearly
    pub fn alpha_at(&self, now: Instant) -> Option<f32> {
        let Some(deadline) = self.disappear else {
            return Some(1.);
        };
        let time_left = deadline.checked_duration_since(now)?;
        if time_left.is_zero() {
            return None;
        }
        let millis = time_left.as_millis();
        Some(if millis < Self::FADE_MILLIS {
            millis as f32 / Self::FADE_MILLIS as f32
        } else {
            1.
        })
    }
}

pub struct MessageDrawable {
    pub text: Text,
    pub dest: Point,
    pub color: Color,
}

impl MessageDrawable {
    pub fn draw(&self, canvas: &mut Canvas) {
        let dp = DrawParam::default().dest(self.dest).color(*self.color);
        canvas.draw(&self.text, dp)
    }
}

impl Message {
    /// A return value of None signifies that the message has reached
    /// its end of life and should be removed
    pub fn get_drawable(&self, ctx: &Context) -> Option<MessageDrawable> {
        let (width, _) = ctx.gfx.drawable_size();

        let (dest, layout) = match self.position {
            Position::TopLeft => (
                Point { x: self.h_margin, y: self.v_margin },
                TextLayout::top_left(),
            ),
            Position::TopCenter => (
                Point { x: width / 2., y: self.v_margin },
                TextLayout::top_middle(),
            ),
            Position::TopRight => (
                Point { x: width - self.h_margin, y: self.v_margin },
                TextLayout::top_right(),
            ),
        };

        let alpha = self.alpha_at(Instant::now())?;
        let color = self.color.with_alpha(self.color.a * alpha);

        let mut text = Text::new(self.text.as_str());
        text.set_scale(PxScale::from(self.font_size)).set_layout(layout);

        Some(MessageDrawable { text, dest, color })
    }
}

#[test]
fn test_message_fade() {
    let persistent = Message::new("Score: 0".into(), Position::TopCenter, Color::WHITE, None);
    assert_eq!(persistent.alpha_at(Instant::now() + Duration::from_secs(3600)), Some(1.));

    let start = Instant::now();
    let mut temporary = Message::new("Paused".into(), Position::TopRight, Color::WHITE, None);
    temporary.disappear = Some(start + Duration::from_millis(1000));
    assert_eq!(temporary.alpha_at(start), Some(1.));
    assert_eq!(temporary.alpha_at(start + Duration::from_millis(900)), Some(0.5));
    assert_eq!(temporary.alpha_at(start + Duration::from_millis(1000)), None);
    assert_eq!(temporary.alpha_at(start + Duration::from_millis(1500)), None);
}
