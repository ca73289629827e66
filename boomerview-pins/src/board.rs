//! Pro Micro pin capabilities
//!
//! ATmega32U4 board with Arduino numbering. A0-A3 are digital 18-21;
//! 11-13 and 17 are not broken out.

use crate::pins::Pin;

/// SparkFun-style Pro Micro (ATmega32U4, 5V/16MHz or 3.3V/8MHz)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ProMicro;

impl ProMicro {
    /// Pins usable as digital I/O, ascending
    pub const GPIO_PINS: [Pin; 18] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 14, 15, 16, 18, 19, 20, 21];

    /// Pins with a hardware PWM output, ascending
    pub const PWM_PINS: [Pin; 5] = [3, 5, 6, 9, 10];

    /// Check if a pin exists as digital I/O
    pub const fn is_gpio(pin: Pin) -> bool {
        contains(&Self::GPIO_PINS, pin)
    }

    /// Check if a pin can drive hardware PWM
    pub const fn is_pwm(pin: Pin) -> bool {
        contains(&Self::PWM_PINS, pin)
    }
}

const fn contains(pins: &[Pin], pin: Pin) -> bool {
    let mut i = 0;
    while i < pins.len() {
        if pins[i] == pin {
            return true;
        }
        i += 1;
    }
    false
}
