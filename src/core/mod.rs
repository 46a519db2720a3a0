//! Core types for lepa-plan.
//!
//! This module provides the fundamental geometric types shared by every
//! planner stage:
//! - [`Point2D`]: 2D point/vector
//! - [`Rect`]: axis-aligned rectangle (obstacles, cell bodies)
//! - [`Cell`]: one obstacle-free region of the wall
//! - [`PathSegment`]: a straight path piece tagged coverage or transition
//!
//! All coordinates are metres with the origin at the wall's bottom-left
//! corner, x increasing right, y increasing up.

pub mod cell;
pub mod math;
pub mod point;
pub mod rect;
pub mod segment;

pub use cell::Cell;
pub use math::EPSILON;
pub use point::Point2D;
pub use rect::Rect;
pub use segment::{PathSegment, SegmentKind};
