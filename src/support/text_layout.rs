use ggez::graphics::{TextAlign, TextLayout};

pub trait TextLayoutExtension {
    // top_left and center are provided by ggez
    fn top_middle() -> Self;
    fn top_right() -> Self;
}

impl TextLayoutExtension for TextLayout {
    fn top_middle() -> Self {
        TextLayout {
            h_align: TextAlign::Middle,
            v_align: TextAlign::Begin,
        }
    }

    fn top_right() -> Self {
        TextLayout {
            h_align: TextAlign::End,
            v_align: TextAlign::Begin,
        }
    }
}
