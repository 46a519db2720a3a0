//! Input/output helpers for planned paths.

pub mod svg;

pub use svg::{PathRenderer, SvgColorScheme, SvgConfig};
