//! Abaco - a four-function terminal calculator.
//!
//! Abaco draws a display panel over a clickable keypad and keeps a running
//! total the way pocket calculators do: each operator resolves the pending
//! operation before becoming pending itself.
//!
//! # Features
//!
//! - Keyboard and mouse input
//! - Results rounded to 12 decimals to hide binary floating-point noise
//! - Locale-grouped display (`es-CO` by default)
//! - Configurable percent key and operator-repeat behavior
//! - Gruvbox color themes
//! - Clipboard integration
//!
//! # Example
//!
//! ```
//! use abaco::calc::{Calculator, Command, EngineConfig, Locale, Operator};
//!
//! let mut calc = Calculator::new(EngineConfig::default(), Locale::ES_CO);
//! calc.dispatch(Command::Digit(5));
//! calc.dispatch(Command::Operator(Operator::Add));
//! calc.dispatch(Command::Digit(3));
//! let text = calc.dispatch(Command::Equals);
//! assert_eq!(text.output, "8");
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod calc;
pub mod clipboard;
pub mod error;
pub mod keymap;
pub mod ui;

pub use error::{AbacoError, Result};
