use crate::button::ButtonDataBuilderError;
use crate::snake;
use ggez::GameError;
use std::fmt::{Debug, Display, Formatter};
use std::{fmt, result};

#[derive(Debug)]
pub enum ErrorType {
    GameError(GameError),
    SnakeBuilderError(snake::BuilderError),
    ButtonDataBuilderError(ButtonDataBuilderError),
    /// A widget was put together with unusable parts
    ButtonError(&'static str),
    /// Invalid command line or preference values
    ConfigError(String),
}

impl Display for ErrorType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ErrorType::GameError(e) => write!(f, "ggez: {e}"),
            ErrorType::SnakeBuilderError(e) => write!(f, "{e}"),
            ErrorType::ButtonDataBuilderError(e) => write!(f, "{e}"),
            ErrorType::ButtonError(message) => write!(f, "button: {message}"),
            ErrorType::ConfigError(message) => write!(f, "configuration: {message}"),
        }
    }
}

/// The second member contains a trace in reverse order
#[must_use]
pub struct Error(ErrorType, Vec<String>);

impl From<GameError> for Error {
    fn from(e: GameError) -> Self {
        Self(ErrorType::GameError(e), vec![])
    }
}

impl From<snake::BuilderError> for Error {
    fn from(e: snake::BuilderError) -> Self {
        Self(ErrorType::SnakeBuilderError(e), vec![])
    }
}

impl From<ButtonDataBuilderError> for Error {
    fn from(e: ButtonDataBuilderError) -> Self {
        Self(ErrorType::ButtonDataBuilderError(e), vec![])
    }
}

impl Error {
    pub fn config<S: ToString>(message: S) -> Self {
        Self(ErrorType::ConfigError(message.to_string()), vec![])
    }

    pub fn button(message: &'static str) -> Self {
        Self(ErrorType::ButtonError(message), vec![])
    }

    #[cfg(test)]
    pub fn error_type(&self) -> &ErrorType {
        &self.0
    }

    pub fn with_trace_step<S: ToString>(mut self, s: S) -> Self {
        self.1.push(s.to_string());
        self
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error:\n{}\nTrace:", self.0)?;
        for t in (self.1).iter().rev() {
            writeln!(f, " in {}", t)?;
        }
        Ok(())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for Error {}

pub type Result<T = ()> = result::Result<T, Error>;

pub trait ErrorConversion {
    fn with_trace_step<S: ToString>(self, s: S) -> Self;
}

impl<T> ErrorConversion for Result<T> {
    fn with_trace_step<S: ToString>(self, s: S) -> Self {
        self.map_err(|e| e.with_trace_step(s.to_string()))
    }
}

#[test]
fn test_trace_order() {
    let res: Result = Err(Error::config("bad width"));
    let err = res
        .with_trace_step("inner")
        .with_trace_step("outer")
        .unwrap_err();

    assert!(matches!(err.error_type(), ErrorType::ConfigError(m) if m == "bad width"));
    let text = err.to_string();
    assert!(text.contains("configuration: bad width"), "{text}");
    let outer = text.find("in outer").unwrap();
    let inner = text.find("in inner").unwrap();
    assert!(outer < inner, "{text}");
}
