//! Pin table validation
//!
//! All checks are `const fn` so the board table is checked at build time.

use core::fmt;

use crate::board::ProMicro;
use crate::pins::{Pin, PinAssignment, PinFunction, PIN_TABLE};

/// Errors found in a pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Function assigned more than once
    DuplicateFunction(PinFunction),
    /// Pin shared by two functions
    DuplicatePin(Pin),
    /// Pin not broken out on the board
    InvalidPin(Pin),
    /// Function needs PWM but the pin has none
    NotPwmCapable(Pin),
}

impl fmt::Display for PinError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PinError::DuplicateFunction(func) => write!(f, "{} assigned twice", func.name()),
            PinError::DuplicatePin(pin) => write!(f, "pin {} used twice", pin),
            PinError::InvalidPin(pin) => write!(f, "pin {} is not a Pro Micro GPIO", pin),
            PinError::NotPwmCapable(pin) => write!(f, "pin {} has no PWM output", pin),
        }
    }
}

/// Check a pin table against the board
///
/// Checks, in order: duplicate functions, shared pins, off-board pins,
/// PWM capability. Returns the first failure.
pub const fn validate_table(table: &[PinAssignment]) -> Result<(), PinError> {
    let mut i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].function.as_u8() == table[j].function.as_u8() {
                return Err(PinError::DuplicateFunction(table[i].function));
            }
            j += 1;
        }
        i += 1;
    }

    i = 0;
    while i < table.len() {
        let mut j = i + 1;
        while j < table.len() {
            if table[i].pin == table[j].pin {
                return Err(PinError::DuplicatePin(table[i].pin));
            }
            j += 1;
        }
        i += 1;
    }

    i = 0;
    while i < table.len() {
        let entry = table[i];
        if !ProMicro::is_gpio(entry.pin) {
            return Err(PinError::InvalidPin(entry.pin));
        }
        if entry.function.requires_pwm() && !ProMicro::is_pwm(entry.pin) {
            return Err(PinError::NotPwmCapable(entry.pin));
        }
        i += 1;
    }

    Ok(())
}

// Build fails if the board table is inconsistent
const _: () = assert!(
    validate_table(&PIN_TABLE).is_ok(),
    "boomerview pin table failed validation"
);
