use std::process::ExitCode;

use anyhow::{Context, Result};
use cg_scene::cli::GeneratorCli;
use cg_scene::loaders::write_mesh;
use clap::Parser;

fn run(cli: &GeneratorCli) -> Result<()> {
    let primitive = cli.command.primitive();
    let output = cli.command.output_file();

    let mesh = primitive.tessellate()?;
    write_mesh(output, &mesh).with_context(|| format!("Failed to write {:?}", output))?;

    println!("Wrote {} ({} vertices)", output.display(), mesh.vertex_count());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = match GeneratorCli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
