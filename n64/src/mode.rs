//! Interpretation modes for the 64-bit word
//!
//! A value always stores raw two's-complement bits. The mode decides how
//! those bits are read for ordering, division, right shifts, negativity and
//! formatting. `Dynamic` keeps the mode as runtime state that can be changed;
//! `Signed` and `Unsigned` pin it at the type level.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How the raw bits are interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Unsigned,
    Signed,
}

impl Mode {
    pub fn from_signed(signed: bool) -> Self {
        if signed { Mode::Signed } else { Mode::Unsigned }
    }

    pub fn is_signed(self) -> bool {
        self == Mode::Signed
    }

    /// Short type name used when inspecting values
    pub fn prefix(self) -> &'static str {
        match self {
            Mode::Unsigned => "U64",
            Mode::Signed => "I64",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Unsigned => write!(f, "unsigned"),
            Mode::Signed => write!(f, "signed"),
        }
    }
}

/// Source of a value's interpretation mode
pub trait Signedness: Copy + Default + fmt::Debug + Send + Sync + 'static {
    fn mode(&self) -> Mode;

    /// Adopt the mode of a value being copied in. Fixed policies ignore it.
    fn inherit(&mut self, _mode: Mode) {}
}

/// Mode held at runtime, changeable with `set_signed`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dynamic(pub(crate) Mode);

impl Dynamic {
    pub const fn new(mode: Mode) -> Self {
        Dynamic(mode)
    }
}

impl Signedness for Dynamic {
    fn mode(&self) -> Mode {
        self.0
    }

    fn inherit(&mut self, mode: Mode) {
        self.0 = mode;
    }
}

/// Always two's-complement signed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Signed;

impl Signedness for Signed {
    fn mode(&self) -> Mode {
        Mode::Signed
    }
}

/// Always unsigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Unsigned;

impl Signedness for Unsigned {
    fn mode(&self) -> Mode {
        Mode::Unsigned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mode_is_unsigned() {
        assert_eq!(Mode::default(), Mode::Unsigned);
        assert_eq!(Dynamic::default().mode(), Mode::Unsigned);
    }

    #[test]
    fn test_dynamic_inherits() {
        let mut m = Dynamic::new(Mode::Unsigned);
        m.inherit(Mode::Signed);
        assert_eq!(m.mode(), Mode::Signed);
    }

    #[test]
    fn test_fixed_ignores_inherit() {
        let mut s = Signed;
        s.inherit(Mode::Unsigned);
        assert_eq!(s.mode(), Mode::Signed);

        let mut u = Unsigned;
        u.inherit(Mode::Signed);
        assert_eq!(u.mode(), Mode::Unsigned);
    }

    #[test]
    fn test_mode_serde_names() {
        assert_eq!(serde_json::to_string(&Mode::Signed).unwrap(), "\"signed\"");
        let m: Mode = serde_json::from_str("\"unsigned\"").unwrap();
        assert_eq!(m, Mode::Unsigned);
    }
}
