//! Error types for lepa-plan.

use thiserror::Error;

/// Precondition failures raised before any planning computation runs.
///
/// Validation happens once at the entry of [`plan`](crate::planner::plan);
/// the pipeline stages trust their inputs afterwards, so either a complete
/// path comes back or exactly one of these errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Wall width or height is not strictly positive.
    #[error("invalid wall dimensions {width} x {height}: both must be positive")]
    InvalidDimensions {
        /// Requested wall width.
        width: f64,
        /// Requested wall height.
        height: f64,
    },

    /// Tool width must be positive and strictly larger than the overlap margin.
    #[error(
        "invalid tool: width {tool_width}, overlap margin {overlap_margin} \
         (requires 0 <= margin < width)"
    )]
    InvalidTool {
        /// Requested tool width.
        tool_width: f64,
        /// Requested overlap margin.
        overlap_margin: f64,
    },

    /// An obstacle is degenerate or extends outside the wall.
    #[error(
        "obstacle {index} at ({left}, {bottom})..({right}, {top}) is degenerate \
         or outside the wall"
    )]
    InvalidObstacle {
        /// Position of the obstacle in the request list.
        index: usize,
        /// Left edge of the offending obstacle.
        left: f64,
        /// Bottom edge of the offending obstacle.
        bottom: f64,
        /// Right edge of the offending obstacle.
        right: f64,
        /// Top edge of the offending obstacle.
        top: f64,
    },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, PlanError>;
