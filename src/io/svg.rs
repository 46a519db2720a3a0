//! SVG audit rendering for planned paths.
//!
//! Renders the wall, its obstacles, and the planned path to SVG so a plan can
//! be inspected without a separate viewer: coverage rows as solid strokes,
//! transitions as dashed links, markers at the path start and end.

use std::fmt::Write;
use std::path::Path;

use crate::assemble::PlanResult;
use crate::core::SegmentKind;
use crate::planner::PlanRequest;

/// SVG color scheme for path rendering
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Wall background color
    pub wall: &'static str,
    /// Obstacle fill color
    pub obstacle: &'static str,
    /// Coverage row color
    pub coverage: &'static str,
    /// Transition link color
    pub transition: &'static str,
    /// Start/end marker color
    pub marker: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            wall: "#FAFAFA",
            obstacle: "#333333",
            coverage: "#2222AA",
            transition: "#DD8800",
            marker: "#22AA22",
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per metre
    pub scale: f64,
    /// Coverage stroke width
    pub coverage_width: f64,
    /// Transition stroke width
    pub transition_width: f64,
    /// Padding around the wall in pixels
    pub padding: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            scale: 50.0,
            coverage_width: 2.0,
            transition_width: 1.5,
            padding: 20.0,
            colors: SvgColorScheme::default(),
        }
    }
}

/// SVG renderer for one planned path
pub struct PathRenderer<'a> {
    config: SvgConfig,
    request: &'a PlanRequest,
    result: &'a PlanResult,
    title: Option<String>,
}

impl<'a> PathRenderer<'a> {
    /// Create a renderer with the default configuration
    pub fn new(request: &'a PlanRequest, result: &'a PlanResult) -> Self {
        Self {
            config: SvgConfig::default(),
            request,
            result,
            title: None,
        }
    }

    /// Replace the rendering configuration
    pub fn with_config(mut self, config: SvgConfig) -> Self {
        self.config = config;
        self
    }

    /// Set a title to display above the wall
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Render to an SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();

        let scale = self.config.scale;
        let padding = self.config.padding;
        let wall_w = self.request.wall.width * scale;
        let wall_h = self.request.wall.height * scale;
        let title_height = if self.title.is_some() { 30.0 } else { 0.0 };
        let legend_height = 70.0;

        let width = wall_w + 2.0 * padding;
        let height = wall_h + 2.0 * padding + title_height + legend_height;

        writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#).unwrap();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"  <rect width="100%" height="100%" fill="#FFFFFF"/>"##
        )
        .unwrap();

        if let Some(ref title) = self.title {
            writeln!(
                &mut svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )
            .unwrap();
        }

        // Wall group; SVG y runs downward, wall y upward.
        writeln!(
            &mut svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )
        .unwrap();

        writeln!(
            &mut svg,
            r##"    <rect width="{:.1}" height="{:.1}" fill="{}" stroke="#999" stroke-width="1"/>"##,
            wall_w, wall_h, self.config.colors.wall
        )
        .unwrap();

        self.render_obstacles(&mut svg, wall_h);
        self.render_path(&mut svg, wall_h);
        self.render_markers(&mut svg, wall_h);

        writeln!(&mut svg, "  </g>").unwrap();

        let legend_y = padding + title_height + wall_h + 10.0;
        self.render_legend(&mut svg, legend_y);

        writeln!(&mut svg, "</svg>").unwrap();
        svg
    }

    fn render_obstacles(&self, svg: &mut String, wall_h: f64) {
        if self.request.obstacles.is_empty() {
            return;
        }

        writeln!(svg, r#"    <g id="obstacles">"#).unwrap();
        for obs in &self.request.obstacles {
            let scale = self.config.scale;
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                obs.left * scale,
                wall_h - obs.top * scale,
                obs.width() * scale,
                obs.height() * scale,
                self.config.colors.obstacle
            )
            .unwrap();
        }
        writeln!(svg, "    </g>").unwrap();
    }

    fn render_path(&self, svg: &mut String, wall_h: f64) {
        writeln!(svg, r#"    <g id="path">"#).unwrap();

        let scale = self.config.scale;
        for seg in &self.result.segments {
            let x1 = seg.start.x * scale;
            let y1 = wall_h - seg.start.y * scale;
            let x2 = seg.end.x * scale;
            let y2 = wall_h - seg.end.y * scale;

            match seg.kind {
                SegmentKind::Coverage => writeln!(
                    svg,
                    r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                    x1, y1, x2, y2, self.config.colors.coverage, self.config.coverage_width
                )
                .unwrap(),
                SegmentKind::Transition => writeln!(
                    svg,
                    r#"      <line x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}" stroke="{}" stroke-width="{}" stroke-dasharray="6 4" opacity="0.8"/>"#,
                    x1, y1, x2, y2, self.config.colors.transition, self.config.transition_width
                )
                .unwrap(),
            }
        }

        writeln!(svg, "    </g>").unwrap();
    }

    fn render_markers(&self, svg: &mut String, wall_h: f64) {
        let (Some(first), Some(last)) = (self.result.segments.first(), self.result.segments.last())
        else {
            return;
        };

        let scale = self.config.scale;
        for (point, label) in [(first.start, "S"), (last.end, "E")] {
            let px = point.x * scale;
            let py = wall_h - point.y * scale;

            writeln!(
                svg,
                r#"    <circle cx="{:.1}" cy="{:.1}" r="5" fill="{}" stroke="white" stroke-width="1"/>"#,
                px, py, self.config.colors.marker
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="10" fill="#333" text-anchor="middle" dy="-8">{}</text>"##,
                px, py, label
            )
            .unwrap();
        }
    }

    fn render_legend(&self, svg: &mut String, y_offset: f64) {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate(0, {:.0})">"#,
            y_offset
        )
        .unwrap();

        let entries = [
            (self.config.colors.coverage, "none", "Coverage"),
            (self.config.colors.transition, "6 4", "Transition"),
        ];

        let mut entry_y = 15.0;
        for (color, dash, label) in entries {
            writeln!(
                svg,
                r#"    <line x1="20" y1="{:.0}" x2="50" y2="{:.0}" stroke="{}" stroke-width="3" stroke-dasharray="{}"/>"#,
                entry_y, entry_y, color, dash
            )
            .unwrap();
            writeln!(
                svg,
                r##"    <text x="60" y="{:.0}" fill="#333">{}</text>"##,
                entry_y + 4.0,
                label
            )
            .unwrap();
            entry_y += 20.0;
        }

        writeln!(
            svg,
            r#"    <rect x="20" y="{:.0}" width="15" height="15" fill="{}"/>"#,
            entry_y - 8.0,
            self.config.colors.obstacle
        )
        .unwrap();
        writeln!(
            svg,
            r##"    <text x="60" y="{:.0}" fill="#333">Obstacle</text>"##,
            entry_y + 4.0
        )
        .unwrap();

        writeln!(svg, "  </g>").unwrap();
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        std::fs::write(path, self.render())
    }
}
