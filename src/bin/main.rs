//! Chest Mesher CLI
//!
//! Inspect and export chest patch geometry.

use chest_mesher::export::variant_json;
use chest_mesher::types::SceneBlock;
use chest_mesher::{
    mesh_grid, model_table_json, resolve_variant, BlockGrid, ChestRenderer, ChestVariant,
    Direction, MesherError, NeighborMatches, ObjExport, RendererSetup, StandardPatchFactory,
};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "chest-mesher")]
#[command(author, version, about = "Inspect and export chest patch geometry", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one chest and print its patches as JSON
    Resolve {
        /// Orientation code from the block data (2 = north, 3 = south, 4 = west, 5 = east)
        #[arg(short, long)]
        data: i32,

        /// Sides with a chest of the same type (repeatable)
        #[arg(short, long, value_enum)]
        neighbor: Vec<Side>,
    },

    /// Write every chest model as JSON
    Table {
        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Mesh the chests of a JSON scene into OBJ
    Scene {
        /// Input JSON file: [{"x":0,"y":0,"z":0,"id":54,"data":3}, ...]
        #[arg(short, long)]
        input: PathBuf,

        /// Output directory
        #[arg(short, long)]
        output: PathBuf,

        /// Base name of the written files
        #[arg(long, default_value = "chests")]
        name: String,

        /// Block type id of chests in the scene
        #[arg(long, default_value = "54")]
        block_id: u32,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Side {
    /// -X
    West,
    /// +X
    East,
    /// -Z
    North,
    /// +Z
    South,
}

impl From<Side> for Direction {
    fn from(side: Side) -> Direction {
        match side {
            Side::West => Direction::West,
            Side::East => Direction::East,
            Side::North => Direction::North,
            Side::South => Direction::South,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve { data, neighbor } => {
            let renderer = build_renderer(54)?;
            let neighbors = neighbor
                .into_iter()
                .fold(NeighborMatches::none(), |acc, side| acc.with(side.into()));
            let variant = resolve_variant(data, &neighbors);
            let model = renderer.model_table().get(variant);
            println!("{}", variant_json(variant, model)?);
        }
        Commands::Table { output } => {
            let renderer = build_renderer(54)?;
            let json = model_table_json(renderer.model_table())?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    println!("Wrote {} variants to {}", ChestVariant::ALL.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Scene {
            input,
            output,
            name,
            block_id,
        } => {
            mesh_scene(&input, &output, &name, block_id)?;
        }
    }

    Ok(())
}

fn build_renderer(block_id: u32) -> chest_mesher::Result<ChestRenderer> {
    ChestRenderer::initialize(&StandardPatchFactory::new(), &RendererSetup::new(block_id))
}

fn mesh_scene(
    input: &Path,
    output: &Path,
    name: &str,
    block_id: u32,
) -> chest_mesher::Result<()> {
    let content = fs::read_to_string(input)?;
    let blocks: Vec<SceneBlock> = serde_json::from_str(&content)?;
    if blocks.is_empty() {
        return Err(MesherError::InvalidInput(format!(
            "{} contains no blocks",
            input.display()
        )));
    }

    let grid: BlockGrid = blocks.into_iter().collect();
    let chests = grid.iter().filter(|(_, state)| state.id == block_id).count();
    if chests == 0 {
        log::warn!("No blocks with id {} in {}", block_id, input.display());
    }

    let renderer = build_renderer(block_id)?;
    let mesh = mesh_grid(&renderer, block_id, &grid);
    let export = ObjExport::from_mesh(&mesh, name)?;
    let obj_path = export.write_to_dir(output)?;

    println!(
        "Meshed {} chests ({} triangles) -> {}",
        chests,
        mesh.triangle_count(),
        obj_path.display()
    );
    Ok(())
}
