use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use studio_folio::{config, generate, output, scan};

#[derive(Parser)]
#[command(name = "studio-folio")]
#[command(about = "Static portfolio generator for photography and videography studios")]
#[command(long_about = "\
Static portfolio generator for photography and videography studios

Your asset tree is the data source. Folders become filterable categories,
a .txt file next to a video holds its external link, and every portfolio
view is rendered as its own static page.

Source structure:

  public/
  ├── config.toml                  # Site copy, colors, clients, socials (optional)
  └── assets/                      # Copied to the output as-is
      ├── photography/
      │   ├── interiors/           # Category (folder name → \"Interiors\")
      │   │   ├── living-room.jpg  # First file represents the category
      │   │   └── kitchen.jpg
      │   └── events/
      ├── videography/
      │   └── brand_films/
      │       ├── launch.mp4       # Thumbnail or looping clip
      │       └── launch.txt       # External link (one URL)
      ├── reels/                   # Flat, no categories
      │   ├── teaser.mp4
      │   └── teaser.txt
      └── intro/
          └── portrait.jpg         # About section image

An empty tree renders sample content unless catalog.on_empty = \"error\".

Run 'studio-folio gen-config' to generate a documented config.toml.")]
#[command(version = env!("FOLIO_BUILD_VERSION"))]
struct Cli {
    /// Source directory (holds config.toml and the asset tree)
    #[arg(long, default_value = "public", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    /// Directory for intermediate files (manifest)
    #[arg(long, default_value = ".studio-folio-temp", global = true)]
    temp_dir: PathBuf,

    /// Log debug detail, including skipped files
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Index the asset tree into a manifest
    Scan,
    /// Render the site from the manifest
    Generate,
    /// Run the full pipeline: scan → generate
    Build,
    /// Validate the source directory without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let manifest_path = cli.temp_dir.join("manifest.json");

    match cli.command {
        Command::Scan => {
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir, &manifest_path)?;
            output::print_scan_output(&manifest, &cli.source);
        }
        Command::Generate => {
            let manifest = generate::load_manifest(&manifest_path)?;
            let site = generate::generate(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &site);
        }
        Command::Build => {
            println!("==> Stage 1: Scanning {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            write_manifest(&manifest, &cli.temp_dir, &manifest_path)?;
            output::print_scan_output(&manifest, &cli.source);

            println!("==> Stage 2: Generating HTML → {}", cli.output.display());
            let site = generate::generate(&manifest, &cli.source, &cli.output)?;
            output::print_generate_output(&manifest, &site);

            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let manifest = scan::scan(&cli.source)?;
            output::print_scan_output(&manifest, &cli.source);
            println!("==> Content is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Logs go to stderr so stdout stays the stage listing.
fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn write_manifest(
    manifest: &scan::Manifest,
    temp_dir: &Path,
    manifest_path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::create_dir_all(temp_dir)?;
    let json = serde_json::to_string_pretty(manifest)?;
    std::fs::write(manifest_path, json)?;
    log::debug!("Wrote {}", manifest_path.display());
    Ok(())
}
