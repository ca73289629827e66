//! Pin assignments for the boomerview Pro Micro LCD board
//!
//! The single source of truth for which Pro Micro pin drives which
//! function on the board: the LCD backlight PWM output and the six
//! lines of the HD44780-style LCD in 4-bit mode.
//!
//! ```text
//!  Pro Micro            LCD
//!  ┌────────┐         ┌──────────┐
//!  │     19 ├────────►│ RS       │
//!  │     18 ├────────►│ EN       │
//!  │     15 ├────────►│ D4       │
//!  │     14 ├────────►│ D5       │
//!  │     16 ├────────►│ D6       │
//!  │     10 ├────────►│ D7       │
//!  │      9 ├──PWM───►│ backlight│
//!  └────────┘         └──────────┘
//! ```
//!
//! Everything here is a `const`. The table is checked when the crate is
//! built: duplicate names, shared pins, pins that do not exist on the
//! board, or a backlight on a non-PWM pin are all compile errors.
//!
//! # Features
//!
//! - `defmt`: `defmt::Format` on all types, plus [`log_table`]
//! - `serde`: `Serialize` on the table types

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod board;
pub mod pins;
pub mod validate;

pub use board::ProMicro;
pub use pins::{
    function_at, lookup, LcdPins, Pin, PinAssignment, PinFunction, BACKLIGHT_MAX_DUTY,
    BACKLIGHT_PWM, LCD_D4, LCD_D5, LCD_D6, LCD_D7, LCD_EN, LCD_PINS, LCD_RS, PIN_TABLE,
};
pub use validate::{validate_table, PinError};

#[cfg(feature = "defmt")]
pub use pins::log_table;
