//! Keypad calculator
//!
//! Four-function calculator independent of the currency logic. Holds two
//! buffers the way the keypad UI presents them: the pending operand
//! (`display`) and the accumulated expression prefix (`equation`).
//! Evaluation goes through the restricted infix parser in [`eval`].

pub mod eval;

pub use eval::{evaluate, EvalError};

const ERROR_DISPLAY: &str = "Error";

/// One keypad press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Digit(u8),
    Point,
    Add,
    Subtract,
    Multiply,
    Divide,
    Equals,
    Clear,
    Backspace,
}

/// Keypad calculator state machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    display: String,
    equation: String,
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            equation: String::new(),
        }
    }

    /// Pending operand buffer, or the error string after a failed evaluation
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Accumulated expression prefix shown above the display
    pub fn equation(&self) -> &str {
        &self.equation
    }

    /// Apply one keypad press
    pub fn press(&mut self, key: Key) {
        // Any press recovers from the error state
        if self.display == ERROR_DISPLAY && key != Key::Clear {
            self.display = "0".to_string();
            self.equation.clear();
        }

        match key {
            Key::Clear => {
                self.display = "0".to_string();
                self.equation.clear();
            }
            Key::Equals => {
                let expr = format!("{}{}", self.equation, self.display);
                match eval::evaluate(&expr) {
                    Ok(value) => {
                        self.display = value.to_string();
                        self.equation.clear();
                    }
                    Err(_) => {
                        self.display = ERROR_DISPLAY.to_string();
                        self.equation.clear();
                    }
                }
            }
            Key::Add | Key::Subtract | Key::Multiply | Key::Divide => {
                self.equation.push_str(&self.display);
                self.equation.push(operator_char(key));
                self.display = "0".to_string();
            }
            Key::Backspace => {
                self.display.pop();
                if self.display.is_empty() {
                    self.display = "0".to_string();
                }
            }
            Key::Digit(d) => {
                let d = d.min(9);
                let c = char::from(b'0' + d);
                if self.display == "0" {
                    self.display = c.to_string();
                } else {
                    self.display.push(c);
                }
            }
            Key::Point => {
                if self.display == "0" {
                    self.display = ".".to_string();
                } else {
                    self.display.push('.');
                }
            }
        }
    }

    /// Apply a sequence of presses
    pub fn press_all(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press(key);
        }
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

fn operator_char(key: Key) -> char {
    match key {
        Key::Add => '+',
        Key::Subtract => '-',
        Key::Multiply => '*',
        Key::Divide => '/',
        _ => unreachable!("not an operator key"),
    }
}
