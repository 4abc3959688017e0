//! `vec3_cli`
//!
//! Interactive front end for the `vec3` crate:
//! - `console`: command interpreter over `Vec3<f64>` values
//! - `vec3-console` binary: reads commands from stdin

pub mod console;

pub use console::Console;
