use crate::button::TriColor;
use crate::color::gradient::Gradient;
use crate::color::Color;

pub struct Palette {
    pub menu_background: Gradient,
    pub game_background: Gradient,

    pub snake_color: Color,
    pub apple_color: Color,

    pub text_color: Color,
    pub title_color: Color,

    pub button_fill: TriColor,
    pub button_text: TriColor,
    /// Flat buttons only show a background when hovered
    pub flat_button_fill: TriColor,

    pub dialog_fill: Color,
    /// Darkens everything behind an open dialog
    pub dialog_backdrop: Color,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            // green to a darker green on top, light blue to blue on the bottom
            menu_background: Gradient {
                top: Color::rgb(0., 1., 0.5),
                bottom: Color::rgb(0., 0.5, 1.),
            },
            // blue to purple
            game_background: Gradient {
                top: Color::rgb(0., 0., 1.),
                bottom: Color::rgb(0.5, 0., 0.5),
            },

            snake_color: Color::rgb(0., 1., 0.),
            apple_color: Color::rgb(1., 0., 0.),

            text_color: Color::WHITE,
            title_color: Color::WHITE,

            button_fill: TriColor {
                normal: Color::from_rgb(33, 150, 243),
                hover: Color::from_rgb(66, 165, 245),
                click: Color::from_rgb(25, 118, 210),
            },
            button_text: TriColor::uniform(Color::WHITE),
            flat_button_fill: TriColor {
                normal: Color::TRANSPARENT,
                hover: Color::gray(1.).with_alpha(0.08),
                click: Color::gray(1.).with_alpha(0.16),
            },

            dialog_fill: Color::from_rgb(38, 38, 38),
            dialog_backdrop: Color::BLACK.with_alpha(0.5),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dark()
    }
}
