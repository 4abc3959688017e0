//! `vec3`
//!
//! A generic three-dimensional Cartesian vector value type.
//!
//! Design goals:
//! - Thin wrapper over native arithmetic. No validation, no implicit promotion.
//! - Stable semantics for the norm and for the `(x,y,z)` text format.
//! - No `unsafe`.

pub mod config;
pub mod dot;
pub mod parse;
mod text;
pub mod vector;

pub use config::{FormatOptions, Notation};
pub use dot::{dot, Common, CommonType};
pub use parse::{Component, Expected, ParseErrorKind, ParseVec3Error};
pub use vector::{Scalar, Vec3};

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::dot::*;
    pub use crate::parse::*;
    pub use crate::vector::*;
}
