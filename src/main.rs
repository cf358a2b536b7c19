use clap::{Parser, Subcommand};
use gallery_manifest::{config, manifest, output};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "build-gallery")]
#[command(about = "Scan gallery image folders and write the gallery manifest")]
#[command(long_about = "\
Scan gallery image folders and write the gallery manifest

Each enabled project in assets/data/gallery-config.json maps to a folder
under assets/images/3d-printing/. Images are stored as three pre-resized
JPEGs sharing a base name:

  assets/images/3d-printing/
  └── replica/
      ├── 20240612_153012-400w.jpg
      ├── 20240612_153012-800w.jpg
      └── 20240612_153012-1200w.jpg

Only base names with all three sizes are listed in the manifest
(assets/data/gallery-images.json). Incomplete sets are reported and skipped.

Without a config file, a built-in project list is used. Run
'build-gallery gen-config' to print it.

Set RUST_LOG (e.g. RUST_LOG=warn) to adjust diagnostic output.")]
#[command(version)]
struct Cli {
    /// Site root containing assets/
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan and report without writing the manifest
    Check,
    /// Print the built-in default gallery-config.json
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing();

    let paths = config::SitePaths::under(&cli.root);

    match cli.command {
        None => {
            let manifest = manifest::run(&paths)?;
            output::print_build_output(&manifest, &paths.output_file);
        }
        Some(Command::Check) => {
            println!("==> Checking {}", paths.images_root.display());
            let manifest = manifest::build(&paths)?;
            output::print_check_output(&manifest);
        }
        Some(Command::GenConfig) => {
            print!("{}", config::stock_config_json()?);
        }
    }

    Ok(())
}

/// Log to stderr so stdout carries only the summary (or generated config).
///
/// Defaults to `info`; `RUST_LOG` overrides.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}
