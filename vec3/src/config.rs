//! Formatting configuration.
//!
//! An explicit, serializable stand-in for the precision/notation flags a
//! format string carries. Loads from JSON strings (file IO left to the app).

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::vector::Vec3;

/// How numbers are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    /// Plain decimal (`{}`): shortest round-trip text unless a precision is set.
    #[default]
    General,
    /// Exponent form (`{:e}` / `{:E}`).
    Scientific,
}

impl Notation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "general" | "fixed" => Some(Notation::General),
            "scientific" | "sci" => Some(Notation::Scientific),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Notation::General => "general",
            Notation::Scientific => "scientific",
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number formatting applied to every component of a rendered vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FormatOptions {
    /// Digits after the decimal point. `None` keeps the shortest text that
    /// parses back to the same value.
    #[serde(default)]
    pub precision: Option<usize>,
    #[serde(default)]
    pub notation: Notation,
    /// `1E3` instead of `1e3`. Only meaningful for scientific notation.
    #[serde(default)]
    pub uppercase_exponent: bool,
    /// Always print a sign, `+` for non-negative values.
    #[serde(default)]
    pub sign_plus: bool,
}

impl FormatOptions {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        let options: Self = serde_json::from_str(s)?;
        debug!(?options, "loaded format options");
        Ok(options)
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    pub fn with_notation(mut self, notation: Notation) -> Self {
        self.notation = notation;
        self
    }

    /// Renders a vector as `(x,y,z)`.
    pub fn render<T>(&self, v: &Vec3<T>) -> String
    where
        T: fmt::Display + fmt::LowerExp + fmt::UpperExp,
    {
        self.render_value(v)
    }

    /// Renders a lone scalar exactly as a vector component would be.
    pub fn render_scalar<T>(&self, value: T) -> String
    where
        T: fmt::Display + fmt::LowerExp + fmt::UpperExp,
    {
        self.render_value(&value)
    }

    fn render_value<D>(&self, value: &D) -> String
    where
        D: fmt::Display + fmt::LowerExp + fmt::UpperExp + ?Sized,
    {
        match (self.notation, self.uppercase_exponent) {
            (Notation::General, _) => match (self.sign_plus, self.precision) {
                (false, None) => format!("{}", value),
                (true, None) => format!("{:+}", value),
                (false, Some(p)) => format!("{:.*}", p, value),
                (true, Some(p)) => format!("{:+.*}", p, value),
            },
            (Notation::Scientific, false) => match (self.sign_plus, self.precision) {
                (false, None) => format!("{:e}", value),
                (true, None) => format!("{:+e}", value),
                (false, Some(p)) => format!("{:.*e}", p, value),
                (true, Some(p)) => format!("{:+.*e}", p, value),
            },
            (Notation::Scientific, true) => match (self.sign_plus, self.precision) {
                (false, None) => format!("{:E}", value),
                (true, None) => format!("{:+E}", value),
                (false, Some(p)) => format!("{:.*E}", p, value),
                (true, Some(p)) => format!("{:+.*E}", p, value),
            },
        }
    }
}
