//! Fractal CLI - Command-line fractal mesh generator
//!
//! Provides subcommands for:
//! - `generate`: Write a fractal mesh as OBJ text to a file or stdout
//! - `info`: Print point/face counts and bounds without writing a mesh

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use config::constants::{DEFAULT_LEVEL, DEFAULT_SIZE};
use fractal_mesh::{generate, save_obj, write_obj, FractalKind, FractalRequest, GenerationOutput};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "fractal")]
#[command(about = "Generate recursive fractal meshes and export them as OBJ", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a fractal mesh and write it as OBJ text
    Generate(GenerateArgs),
    /// Print statistics for a fractal mesh
    Info(RequestArgs),
}

#[derive(Args, Debug, Clone)]
struct RequestArgs {
    /// Fractal family: tetrahedron, sponge or octahedron
    #[arg(short, long)]
    kind: FractalKind,

    /// Recursion level (0 is the base primitive)
    #[arg(short, long, default_value_t = DEFAULT_LEVEL)]
    level: u32,

    /// Base size: half-extent for tetrahedron/octahedron, side length for sponge
    #[arg(short, long, default_value_t = DEFAULT_SIZE)]
    size: f64,
}

impl RequestArgs {
    fn request(&self) -> FractalRequest {
        FractalRequest::new(self.kind, self.level, self.size)
    }
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    request: RequestArgs,

    /// Output OBJ file path (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn build(request: &FractalRequest) -> Result<GenerationOutput> {
    let mesh = generate(request)
        .with_context(|| format!("Failed to generate {} level {}", request.kind, request.level))?;
    anyhow::ensure!(!mesh.is_empty(), "Generation produced no geometry");
    Ok(mesh)
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let request = args.request.request();
    let mesh = build(&request)?;

    match &args.output {
        Some(path) => {
            save_obj(
                path,
                request.kind,
                request.level,
                request.size,
                mesh.points(),
                mesh.faces(),
            )
            .with_context(|| format!("Failed to write {:?}", path))?;
            info!(
                "Wrote {} vertices, {} faces to {:?}",
                mesh.vertex_count(),
                mesh.face_count(),
                path
            );
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_obj(
                &mut writer,
                request.kind,
                request.level,
                request.size,
                mesh.points(),
                mesh.faces(),
            )?;
            writer.flush()?;
        }
    }
    Ok(())
}

fn summary(request: &FractalRequest, mesh: &GenerationOutput) -> Vec<String> {
    let (min, max) = mesh.bounding_box();
    vec![
        format!("Kind:        {}", request.kind),
        format!("Level:       {}", request.level),
        format!("Size:        {}", request.size),
        format!("Vertices:    {}", mesh.vertex_count()),
        format!("Faces:       {}", mesh.face_count()),
        format!("Projected:   {}", request.projected_face_count()),
        format!(
            "Welded:      {} corner references",
            mesh.face_count() * 3 - mesh.vertex_count()
        ),
        format!("Bounds min:  ({}, {}, {})", min.x, min.y, min.z),
        format!("Bounds max:  ({}, {}, {})", max.x, max.y, max.z),
    ]
}

fn run_info(args: &RequestArgs) -> Result<()> {
    let request = args.request();
    let mesh = build(&request)?;
    for line in summary(&request, &mesh) {
        println!("{line}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match &cli.command {
        Commands::Generate(args) => run_generate(args),
        Commands::Info(args) => run_info(args),
    }
}
