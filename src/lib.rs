//! # Lepa-Plan: Boustrophedon Coverage Path Planning
//!
//! A coverage path planner for wall-finishing robots. Given a rectangular
//! wall, a finishing tool of known working width, and a set of axis-aligned
//! rectangular obstacles, the planner returns an ordered list of path
//! segments that sweep every reachable region of the wall in a zig-zag
//! pattern, avoid the obstacles, and keep inter-cell travel short.
//!
//! ## Quick Start
//!
//! ```rust
//! use lepa_plan::core::Rect;
//! use lepa_plan::{PlanRequest, ToolSettings, Wall, plan};
//!
//! let request = PlanRequest {
//!     wall: Wall::new(10.0, 10.0),
//!     tool: ToolSettings::new(1.0, 0.0),
//!     obstacles: vec![Rect::new(4.0, 4.0, 6.0, 6.0)],
//! };
//!
//! let result = plan(&request).unwrap();
//! assert_eq!(result.metadata.num_cells, 4);
//! println!(
//!     "{} segments, {:.1} m total",
//!     result.segments.len(),
//!     result.metadata.total_length
//! );
//! ```
//!
//! ## Pipeline
//!
//! Planning is a pure function composed of four sequential stages; each
//! stage consumes the previous stage's output and adds no hidden state.
//!
//! ```text
//!      ┌─────────────┐
//!      │ PlanRequest │  wall, tool, obstacles
//!      └──────┬──────┘
//!             │ validate
//!             ▼
//!      ┌─────────────┐
//!      │  Decompose  │  vertical sweep over obstacle edges
//!      │             │──► cells (obstacle-free rectangles)
//!      └──────┬──────┘
//!             ▼
//!      ┌─────────────┐
//!      │  PatternGen │  per-cell zig-zag rows at tool pitch
//!      │             │──► sweep patterns (entry/exit points)
//!      └──────┬──────┘
//!             ▼
//!      ┌─────────────┐
//!      │   Orderer   │  greedy nearest-entry + 2-opt
//!      │             │──► cell visit order
//!      └──────┬──────┘
//!             ▼
//!      ┌─────────────┐
//!      │  Assembler  │  patterns + transitions + metadata
//!      │             │──► PlanResult
//!      └─────────────┘
//! ```
//!
//! ## Coordinate Frame
//!
//! All coordinates are metres in the wall plane: origin at the wall's
//! bottom-left corner, x increasing right, y increasing up. Geometric
//! comparisons share a single tolerance, [`core::math::EPSILON`].
//!
//! ## Modules
//!
//! - [`core`]: fundamental types (Point2D, Rect, Cell, PathSegment)
//! - [`config`]: serde-backed configuration sections
//! - [`error`]: precondition failures
//! - [`decompose`]: boustrophedon cellular decomposition
//! - [`pattern`]: per-cell sweep generation
//! - [`order`]: visit-order optimization
//! - [`assemble`]: path assembly and metadata
//! - [`planner`]: validation and the `plan()` entry point
//! - [`io`]: SVG audit rendering

pub mod assemble;
pub mod config;
pub mod core;
pub mod decompose;
pub mod error;
pub mod io;
pub mod order;
pub mod pattern;
pub mod planner;

// Re-export main types at crate root
pub use assemble::{PlanMetadata, PlanResult};
pub use config::{OrderingSettings, PlannerConfig, ToolSettings};
pub use error::{PlanError, Result};
pub use planner::{CoveragePlanner, PlanRequest, Wall, plan};
