//! Header fields prefixed to every record, as a composable bit set.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

/// Which optional fields precede the message, in fixed order:
/// date, time, source mark, thread, priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HeaderMask(u8);

impl HeaderMask {
    pub const NONE: Self = Self(0);
    /// `YYYY-MM-DD `
    pub const DATE: Self = Self(0x01);
    /// `HH:MM:SS:uuuuuu `
    pub const TIME: Self = Self(0x02);
    /// `file:line `
    pub const MARK: Self = Self(0x04);
    /// Zero-padded numeric thread id.
    pub const THREAD: Self = Self(0x08);
    /// Fixed-width `[LABEL]`.
    pub const PRIORITY: Self = Self(0x10);
    pub const ALL: Self = Self(0x1f);
    pub const DEFAULT: Self = Self(0x01 | 0x02 | 0x04 | 0x10);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Unknown bits are dropped.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Builds a mask from config-style field names; fails on the first unknown name.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidConfig`] naming the unrecognized field.
    pub fn from_names<I, S>(names: I) -> Result<Self, crate::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        names.into_iter().try_fold(Self::NONE, |mask, name| {
            Ok(mask | name.as_ref().parse::<Self>()?)
        })
    }
}

impl Default for HeaderMask {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BitOr for HeaderMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for HeaderMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl FromStr for HeaderMask {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "date" => Ok(Self::DATE),
            "time" => Ok(Self::TIME),
            "mark" | "source" | "file" => Ok(Self::MARK),
            "thread" => Ok(Self::THREAD),
            "priority" | "level" => Ok(Self::PRIORITY),
            "all" => Ok(Self::ALL),
            "none" => Ok(Self::NONE),
            other => Err(crate::Error::InvalidConfig(format!(
                "unknown header field: '{other}'"
            ))),
        }
    }
}

/// How much of the message body is written.
///
/// Only full output exists today; the enum keeps the setting typed so config
/// files carrying `masking = "complete"` parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MaskingMode {
    /// The message is written in full.
    #[default]
    Complete,
}

impl fmt::Display for MaskingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Complete => f.write_str("complete"),
        }
    }
}

impl FromStr for MaskingMode {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "complete" | "" => Ok(Self::Complete),
            other => Err(crate::Error::InvalidConfig(format!(
                "unknown masking mode: '{other}'"
            ))),
        }
    }
}
