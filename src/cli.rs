// cli.rs - Command-line interfaces of the generator and the engine
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};

use crate::primitives::Primitive;

#[derive(Parser, Debug, Clone)]
#[command(name = "generator")]
#[command(about = "Tessellates a primitive and writes it as a .3d file", long_about = None)]
pub struct GeneratorCli {
    #[command(subcommand)]
    pub command: GenerateCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum GenerateCommand {
    /// Square on the XZ plane
    #[command(allow_negative_numbers = true)]
    Plane {
        length: f32,
        divisions: u32,
        output_file: PathBuf,
    },
    /// Cube centred at the origin
    #[command(allow_negative_numbers = true)]
    Box {
        length: f32,
        grid: u32,
        output_file: PathBuf,
    },
    /// UV sphere centred at the origin
    #[command(allow_negative_numbers = true)]
    Sphere {
        radius: f32,
        slices: u32,
        stacks: u32,
        output_file: PathBuf,
    },
    /// Cone standing on the XZ plane
    #[command(allow_negative_numbers = true)]
    Cone {
        radius: f32,
        height: f32,
        slices: u32,
        stacks: u32,
        output_file: PathBuf,
    },
}

impl GenerateCommand {
    pub fn primitive(&self) -> Primitive {
        match *self {
            GenerateCommand::Plane { length, divisions, .. } => Primitive::Plane { length, divisions },
            GenerateCommand::Box { length, grid, .. } => Primitive::Box { length, grid },
            GenerateCommand::Sphere { radius, slices, stacks, .. } => {
                Primitive::Sphere { radius, slices, stacks }
            }
            GenerateCommand::Cone { radius, height, slices, stacks, .. } => {
                Primitive::Cone { radius, height, slices, stacks }
            }
        }
    }

    pub fn output_file(&self) -> &Path {
        match self {
            GenerateCommand::Plane { output_file, .. }
            | GenerateCommand::Box { output_file, .. }
            | GenerateCommand::Sphere { output_file, .. }
            | GenerateCommand::Cone { output_file, .. } => output_file,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummaryFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser, Debug, Clone)]
#[command(name = "engine")]
#[command(about = "Loads an XML scene and renders its models", long_about = None)]
pub struct EngineCli {
    /// Scene description file
    pub scene: PathBuf,

    /// How to print the loaded scene
    #[arg(long, value_enum, default_value_t = SummaryFormat::Text)]
    pub summary: SummaryFormat,

    /// Frames to draw with the headless renderer
    #[arg(long, default_value = "1")]
    pub frames: u64,
}
