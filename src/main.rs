use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use cube_planner::engine::metadata::InMemoryMetadataStore;
use cube_planner::engine::plan::command_line::render_plan;
use cube_planner::engine::plan::{PlanCompiler, PlanRequest};
use cube_planner::logging;
use cube_planner::shared::config::CONFIG;
use tracing::info;

#[derive(Parser)]
#[command(name = "cube_planner")]
#[command(about = "Compile cube build and merge jobs into ordered step plans", long_about = None)]
struct Args {
    /// JSON metadata snapshot holding cubes, segments and source tables
    #[arg(short, long)]
    metadata: PathBuf,

    #[arg(long, value_enum, default_value_t = Mode::Build)]
    mode: Mode,

    #[arg(short, long)]
    cube: String,

    /// Segment to build, or the segment a merge produces
    #[arg(short, long)]
    segment: String,

    #[arg(short, long)]
    job_id: String,

    /// Overrides `engine.working_root` from the configuration
    #[arg(long)]
    working_root: Option<String>,

    #[arg(short, long, value_enum, default_value_t = Format::Json)]
    format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    Build,
    Merge,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// The plan as pretty-printed JSON
    Json,
    /// One rendered command line per step
    Shell,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init(&CONFIG.logging)?;

    let store = InMemoryMetadataStore::from_json_file(&args.metadata)?;
    info!(
        target: "cube_planner::main",
        metadata = %args.metadata.display(),
        cubes = store.cube_count(),
        "Metadata loaded"
    );

    let working_root = args
        .working_root
        .unwrap_or_else(|| CONFIG.engine.working_root.clone());
    let request = match args.mode {
        Mode::Build => PlanRequest::build(&args.cube, &args.segment, &args.job_id, &working_root),
        Mode::Merge => PlanRequest::merge(&args.cube, &args.segment, &args.job_id, &working_root),
    };

    let compiler = PlanCompiler::new(Arc::new(store), Arc::new(CONFIG.engine.clone()));
    let plan = compiler.compile(&request)?;

    match args.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        Format::Shell => {
            for line in render_plan(&plan) {
                println!("{line}");
            }
        }
    }

    Ok(())
}
