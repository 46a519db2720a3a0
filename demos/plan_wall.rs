//! Plan a coverage path for a wall and write the audit artifacts.
//!
//! Usage:
//!   cargo run --example plan_wall -- --width 10 --height 10
//!   cargo run --example plan_wall -- --obstacle 4,4,6,6 --obstacle 1,7,3,9
//!   cargo run --example plan_wall -- --demo

use std::path::PathBuf;

use clap::Parser;

use lepa_plan::core::Rect;
use lepa_plan::io::PathRenderer;
use lepa_plan::{CoveragePlanner, PlanRequest, PlannerConfig, Wall};

/// Coverage path planning demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path (YAML; built-in defaults when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wall width in metres
    #[arg(long, default_value_t = 10.0)]
    width: f64,

    /// Wall height in metres
    #[arg(long, default_value_t = 10.0)]
    height: f64,

    /// Tool width in metres (overrides the config)
    #[arg(long)]
    tool_width: Option<f64>,

    /// Obstacle as left,bottom,right,top (repeatable)
    #[arg(long = "obstacle", value_parser = parse_rect)]
    obstacles: Vec<Rect>,

    /// Use a built-in demo layout (door and window on a 10x10 wall)
    #[arg(long)]
    demo: bool,

    /// Output directory for SVG and JSON artifacts
    #[arg(short, long, default_value = "./output")]
    output: PathBuf,
}

fn parse_rect(s: &str) -> Result<Rect, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err(format!("expected left,bottom,right,top, got '{}'", s));
    }

    let mut edges = [0.0f64; 4];
    for (slot, part) in edges.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse()
            .map_err(|e| format!("bad coordinate '{}': {}", part, e))?;
    }

    Ok(Rect::new(edges[0], edges[1], edges[2], edges[3]))
}

/// Door on the left, window on the upper right.
fn demo_layout() -> Vec<Rect> {
    vec![Rect::new(1.0, 0.0, 2.0, 2.2), Rect::new(6.0, 5.0, 8.5, 7.0)]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PlannerConfig::load(path)?,
        None => PlannerConfig::load_default()?,
    };

    let mut tool = config.tool;
    if let Some(width) = args.tool_width {
        tool.tool_width = width;
    }

    let mut obstacles = args.obstacles.clone();
    if args.demo {
        obstacles.extend(demo_layout());
    }

    let request = PlanRequest {
        wall: Wall::new(args.width, args.height),
        tool,
        obstacles,
    };

    let planner = CoveragePlanner::new(&config);
    let result = planner.plan(&request)?;

    let meta = &result.metadata;
    println!(
        "Planned {} segments over {} cells (order: {:?})",
        result.segments.len(),
        meta.num_cells,
        meta.cell_order
    );
    println!(
        "  coverage   {:8.2} m\n  transition {:8.2} m\n  total      {:8.2} m",
        meta.coverage_length, meta.transition_length, meta.total_length
    );
    println!(
        "  efficiency {:7.1}% (theoretical minimum {:.2} m)",
        meta.coverage_efficiency * 100.0,
        meta.theoretical_min
    );

    std::fs::create_dir_all(&args.output)?;

    let svg_path = args.output.join("coverage_path.svg");
    PathRenderer::new(&request, &result)
        .with_title(format!(
            "{} x {} m wall, {} obstacle(s)",
            request.wall.width,
            request.wall.height,
            request.obstacles.len()
        ))
        .save(&svg_path)?;
    println!("Wrote {}", svg_path.display());

    let json_path = args.output.join("coverage_path.json");
    std::fs::write(&json_path, serde_json::to_string_pretty(&result)?)?;
    println!("Wrote {}", json_path.display());

    Ok(())
}
