//! Pin definition table
//!
//! Pin numbers use Arduino Pro Micro numbering. The LCD runs in 4-bit
//! mode, so only D4..D7 are wired.

#[cfg(feature = "serde")]
use serde::Serialize;

/// Pin number on the host board
pub type Pin = u8;

/// LCD backlight brightness, PWM output (duty 0-255)
pub const BACKLIGHT_PWM: Pin = 9;

/// Upper end of the backlight duty range
pub const BACKLIGHT_MAX_DUTY: u8 = u8::MAX;

/// LCD register select
pub const LCD_RS: Pin = 19;
/// LCD enable strobe
pub const LCD_EN: Pin = 18;
/// LCD data line 4
pub const LCD_D4: Pin = 15;
/// LCD data line 5
pub const LCD_D5: Pin = 14;
/// LCD data line 6
pub const LCD_D6: Pin = 16;
/// LCD data line 7
pub const LCD_D7: Pin = 10;

/// Hardware function wired to a board pin
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[repr(u8)]
pub enum PinFunction {
    /// Backlight brightness (PWM)
    BacklightPwm = 0,
    /// LCD register select
    LcdRs = 1,
    /// LCD enable
    LcdEn = 2,
    /// LCD data line 4
    LcdD4 = 3,
    /// LCD data line 5
    LcdD5 = 4,
    /// LCD data line 6
    LcdD6 = 5,
    /// LCD data line 7
    LcdD7 = 6,
}

impl PinFunction {
    /// Every function, in declaration order
    pub const ALL: [PinFunction; 7] = [
        PinFunction::BacklightPwm,
        PinFunction::LcdRs,
        PinFunction::LcdEn,
        PinFunction::LcdD4,
        PinFunction::LcdD5,
        PinFunction::LcdD6,
        PinFunction::LcdD7,
    ];

    /// Get the function as a byte value
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Wiring name of the function
    ///
    /// These are the names used on the board schematic and by existing
    /// firmware (`LCD_rs`, not `LCD_RS`).
    pub const fn name(self) -> &'static str {
        match self {
            PinFunction::BacklightPwm => "BACKLIGHT_PWM",
            PinFunction::LcdRs => "LCD_rs",
            PinFunction::LcdEn => "LCD_en",
            PinFunction::LcdD4 => "LCD_d4",
            PinFunction::LcdD5 => "LCD_d5",
            PinFunction::LcdD6 => "LCD_d6",
            PinFunction::LcdD7 => "LCD_d7",
        }
    }

    /// Pin this function is wired to
    pub const fn pin(self) -> Pin {
        match self {
            PinFunction::BacklightPwm => BACKLIGHT_PWM,
            PinFunction::LcdRs => LCD_RS,
            PinFunction::LcdEn => LCD_EN,
            PinFunction::LcdD4 => LCD_D4,
            PinFunction::LcdD5 => LCD_D5,
            PinFunction::LcdD6 => LCD_D6,
            PinFunction::LcdD7 => LCD_D7,
        }
    }

    /// Whether the function needs a PWM-capable pin
    pub const fn requires_pwm(self) -> bool {
        matches!(self, PinFunction::BacklightPwm)
    }

    /// Find a function by its wiring name (exact, case-sensitive)
    pub const fn from_name(name: &str) -> Option<Self> {
        let mut i = 0;
        while i < Self::ALL.len() {
            if str_eq(Self::ALL[i].name(), name) {
                return Some(Self::ALL[i]);
            }
            i += 1;
        }
        None
    }
}

/// One row of the pin table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct PinAssignment {
    /// What the pin does
    pub function: PinFunction,
    /// Board pin number
    pub pin: Pin,
}

impl PinAssignment {
    /// Create the assignment for a function using its wired pin
    pub const fn of(function: PinFunction) -> Self {
        Self {
            function,
            pin: function.pin(),
        }
    }

    /// Wiring name of the assigned function
    pub const fn name(&self) -> &'static str {
        self.function.name()
    }
}

/// The complete board wiring
pub const PIN_TABLE: [PinAssignment; 7] = [
    PinAssignment::of(PinFunction::BacklightPwm),
    PinAssignment::of(PinFunction::LcdRs),
    PinAssignment::of(PinFunction::LcdEn),
    PinAssignment::of(PinFunction::LcdD4),
    PinAssignment::of(PinFunction::LcdD5),
    PinAssignment::of(PinFunction::LcdD6),
    PinAssignment::of(PinFunction::LcdD7),
];

/// LCD wiring for a 4-bit parallel interface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LcdPins {
    /// Register select
    pub rs: Pin,
    /// Enable
    pub en: Pin,
    /// Data line 4
    pub d4: Pin,
    /// Data line 5
    pub d5: Pin,
    /// Data line 6
    pub d6: Pin,
    /// Data line 7
    pub d7: Pin,
}

impl LcdPins {
    /// Data lines, lowest first
    pub const fn data(&self) -> [Pin; 4] {
        [self.d4, self.d5, self.d6, self.d7]
    }
}

/// The board's LCD wiring
pub const LCD_PINS: LcdPins = LcdPins {
    rs: LCD_RS,
    en: LCD_EN,
    d4: LCD_D4,
    d5: LCD_D5,
    d6: LCD_D6,
    d7: LCD_D7,
};

/// Resolve a wiring name to its pin
pub const fn lookup(name: &str) -> Option<Pin> {
    match PinFunction::from_name(name) {
        Some(function) => Some(function.pin()),
        None => None,
    }
}

/// Find which function, if any, is wired to `pin`
pub const fn function_at(pin: Pin) -> Option<PinFunction> {
    let mut i = 0;
    while i < PIN_TABLE.len() {
        if PIN_TABLE[i].pin == pin {
            return Some(PIN_TABLE[i].function);
        }
        i += 1;
    }
    None
}

/// Log the pin table, one line per assignment
#[cfg(feature = "defmt")]
pub fn log_table() {
    for entry in PIN_TABLE.iter() {
        defmt::info!("pin {=u8}: {=str}", entry.pin, entry.name());
    }
}

// `str` equality is not usable in const context
const fn str_eq(a: &str, b: &str) -> bool {
    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_pin_values() {
        assert_eq!(BACKLIGHT_PWM, 9);
        assert_eq!(LCD_RS, 19);
        assert_eq!(LCD_EN, 18);
        assert_eq!(LCD_D4, 15);
        assert_eq!(LCD_D5, 14);
        assert_eq!(LCD_D6, 16);
        assert_eq!(LCD_D7, 10);
    }

    #[test]
    fn test_lookup_by_name() {
        assert_eq!(lookup("BACKLIGHT_PWM"), Some(9));
        assert_eq!(lookup("LCD_d7"), Some(10));
        assert_eq!(lookup("LCD_rs"), Some(19));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(lookup("LCD_RS"), None);
        assert_eq!(lookup("lcd_rs"), None);
        assert_eq!(lookup(""), None);
        assert_eq!(lookup("LCD_d"), None);
    }

    #[test]
    fn test_names_and_pins_distinct() {
        for (i, a) in PIN_TABLE.iter().enumerate() {
            for b in &PIN_TABLE[i + 1..] {
                assert_ne!(a.name(), b.name());
                assert_ne!(a.pin, b.pin);
            }
        }
    }

    #[test]
    fn test_table_matches_functions() {
        for (entry, function) in PIN_TABLE.iter().zip(PinFunction::ALL) {
            assert_eq!(entry.function, function);
            assert_eq!(entry.pin, function.pin());
            assert_eq!(PinFunction::from_name(function.name()), Some(function));
        }
    }

    #[test]
    fn test_reverse_lookup() {
        assert_eq!(function_at(9), Some(PinFunction::BacklightPwm));
        assert_eq!(function_at(10), Some(PinFunction::LcdD7));
        assert_eq!(function_at(0), None);
        assert_eq!(function_at(17), None);
    }

    #[test]
    fn test_lcd_pins() {
        assert_eq!(LCD_PINS.rs, LCD_RS);
        assert_eq!(LCD_PINS.en, LCD_EN);
        assert_eq!(LCD_PINS.data(), [15, 14, 16, 10]);
    }

    #[test]
    fn test_only_backlight_requires_pwm() {
        let pwm: usize = PinFunction::ALL
            .iter()
            .filter(|f| f.requires_pwm())
            .count();
        assert_eq!(pwm, 1);
        assert!(PinFunction::BacklightPwm.requires_pwm());
    }

    #[test]
    fn test_same_value_through_every_path() {
        // Re-exports and module paths name the same item
        assert_eq!(crate::BACKLIGHT_PWM, crate::pins::BACKLIGHT_PWM);
        assert_eq!(crate::LCD_D7, crate::pins::LCD_D7);
        assert_eq!(crate::PIN_TABLE, crate::pins::PIN_TABLE);
        assert_eq!(crate::lookup("LCD_en"), Some(crate::pins::LCD_EN));
    }

    #[test]
    fn test_lookup_in_const_context() {
        const BACKLIGHT: Option<Pin> = lookup("BACKLIGHT_PWM");
        const AT_TEN: Option<PinFunction> = function_at(10);
        assert_eq!(BACKLIGHT, Some(BACKLIGHT_PWM));
        assert_eq!(AT_TEN, Some(PinFunction::LcdD7));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_table() {
        let mut buf = [0u8; 64];
        let bytes = postcard::to_slice(&PIN_TABLE, &mut buf).unwrap();
        // Fixed-size array: no length prefix, one (variant, pin) pair per row
        assert_eq!(&bytes[..2], &[0, 9]);
        assert_eq!(&bytes[12..14], &[6, 10]);
    }

    proptest! {
        #[test]
        fn prop_function_at_agrees_with_table(pin in any::<u8>()) {
            let expected = PIN_TABLE.iter().find(|e| e.pin == pin).map(|e| e.function);
            prop_assert_eq!(function_at(pin), expected);
        }

        #[test]
        fn prop_lookup_only_known_names(name in "\\PC{0,16}") {
            let known = PIN_TABLE.iter().any(|e| e.name() == name);
            prop_assert_eq!(lookup(&name).is_some(), known);
        }

        #[test]
        fn prop_lookup_roundtrips_names(idx in 0usize..7) {
            let function = PinFunction::ALL[idx];
            prop_assert_eq!(lookup(function.name()), Some(function.pin()));
        }
    }
}
