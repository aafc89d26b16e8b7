use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};
use sumcubes_core::constants::MAX_TOTAL_UNITS;
use sumcubes_core::{BlockSummary, Bounds, GridLayout, LayoutConfig, Operands, Unit};
use sumcubes_scene::{build_instances, CubeInstance, GroupPalette};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sumcubes")]
#[command(about = "Block-grid layouts for visualizing a sum as cubes")]
struct Cli {
    /// Layout config file (JSON); defaults to the built-in 5x5x5 grid
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every unit's group and position
    Layout {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
        #[arg(short, long, value_enum, default_value = "table")]
        format: Format,
    },

    /// Show per-block occupancy
    Blocks {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },

    /// Show grid configuration and derived values
    Info,

    /// Write a JSON scene export
    Export {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write raw cube instance data for GPU upload
    Instances {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write the default layout config
    InitConfig {
        #[arg(short, long, default_value = "sumcubes.json")]
        output: PathBuf,
    },
}

#[derive(Serialize)]
struct SceneExport<'a> {
    version: u32,
    config: &'a LayoutConfig,
    operands: Operands,
    bounds: Option<Bounds>,
    blocks: Vec<BlockSummary>,
    units: &'a [Unit],
}

fn load_grid(path: Option<&Path>) -> Result<GridLayout> {
    let config = match path {
        Some(p) => LayoutConfig::load(p).with_context(|| format!("loading config {}", p.display()))?,
        None => LayoutConfig::default(),
    };
    Ok(GridLayout::try_new(config)?)
}

fn parse_operands(first: &str, second: &str) -> Result<Operands> {
    Ok(Operands::parse(first, second)?.check_limit(MAX_TOTAL_UNITS)?)
}

/// Write the JSON scene export, returning the unit count
fn write_export(grid: &GridLayout, operands: Operands, output: &Path) -> Result<usize> {
    let layout = operands.layout(grid);
    let export = SceneExport {
        version: 1,
        config: grid.config(),
        operands,
        bounds: layout.bounds(),
        blocks: layout.blocks(),
        units: layout.units(),
    };

    let json = serde_json::to_string_pretty(&export)?;
    std::fs::write(output, json).with_context(|| format!("writing {}", output.display()))?;
    Ok(layout.len())
}

/// Write raw instance bytes, returning (instances, bytes)
fn write_instances(grid: &GridLayout, operands: Operands, output: &Path) -> Result<(usize, usize)> {
    let layout = operands.layout(grid);
    let instances = build_instances(&layout, &GroupPalette::default(), grid.config().unit_size as f32);

    let bytes: &[u8] = bytemuck::cast_slice(&instances);
    std::fs::write(output, bytes).with_context(|| format!("writing {}", output.display()))?;
    Ok((instances.len(), bytes.len()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let grid = load_grid(cli.config.as_deref())?;

    match cli.command {
        Commands::Layout { first, second, format } => {
            let operands = parse_operands(&first, &second)?;
            let layout = operands.layout(&grid);

            match format {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(layout.units())?);
                }
                Format::Table => {
                    println!("{} + {} = {} units in {} block(s)",
                        operands.first, operands.second, layout.total(), layout.block_count());
                    println!("{:>7} {:<7} {:>6} {:>5} {:>10} {:>10} {:>10}",
                        "Index", "Group", "Block", "Slot", "X", "Y", "Z");
                    for u in layout.units() {
                        println!("{:>7} {:<7} {:>6} {:>5} {:>10.3} {:>10.3} {:>10.3}",
                            u.index, u.group, u.block_index, u.index_in_block,
                            u.position.x, u.position.y, u.position.z);
                    }
                }
            }
        }

        Commands::Blocks { first, second } => {
            let operands = parse_operands(&first, &second)?;
            let layout = operands.layout(&grid);

            println!("{:>6} {:>10} {:>8} {:>8}", "Block", "Occupancy", "First", "Second");
            for b in layout.blocks() {
                println!("{:>6} {:>6}/{:<3} {:>8} {:>8}",
                    b.block_index, b.occupancy, grid.block_capacity(), b.first, b.second);
            }
            if let Some(bounds) = layout.bounds() {
                println!("\nBounds:");
                println!("  Min: ({:.3}, {:.3}, {:.3})", bounds.min.x, bounds.min.y, bounds.min.z);
                println!("  Max: ({:.3}, {:.3}, {:.3})", bounds.max.x, bounds.max.y, bounds.max.z);
                println!("  Center: ({:.3}, {:.3}, {:.3})", bounds.center.x, bounds.center.y, bounds.center.z);
            }
        }

        Commands::Info => {
            let config = grid.config();
            println!("Block Grid Configuration:");
            println!("  grid:        {}x{}x{}", config.grid_x, config.grid_y, config.grid_z);
            println!("  capacity:    {} units per block", grid.block_capacity());
            println!("  spacing:     {}", config.spacing);
            println!("  block gap:   {}", config.block_gap);
            println!("  unit size:   {}", config.unit_size);
            println!("  block pitch: {} along X", grid.block_spacing_x());
            println!("  max units:   {}", MAX_TOTAL_UNITS);

            println!("\nAssembly Examples:");
            for total in [1, 5, 25, 125, 126, 500, 1000] {
                println!("  {:5} units -> {:3} block(s), width {:.2}",
                    total, grid.block_count_for(total), grid.assembly_width(total));
            }
        }

        Commands::Export { first, second, output } => {
            let operands = parse_operands(&first, &second)?;
            let units = write_export(&grid, operands, &output)?;
            info!(units, path = %output.display(), "exported scene");
        }

        Commands::Instances { first, second, output } => {
            let operands = parse_operands(&first, &second)?;
            let (count, bytes) = write_instances(&grid, operands, &output)?;
            println!("Wrote {} instances ({} bytes, {} per instance) -> {}",
                count, bytes, CubeInstance::SIZE, output.display());
        }

        Commands::InitConfig { output } => {
            LayoutConfig::default().save(&output)?;
            println!("Wrote default config -> {}", output.display());
        }
    }

    Ok(())
}
