mod logger;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use logger::{CliLogger, level_for};
use picto_grid::{AssetLocation, PaletteMode, RenderOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pictogrid", about = "Pictogram grid sheets to PDF", version)]
struct Cli {
    /// More log output (repeat for debug/trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render grids (JSON or CSV) to a PDF, four per page
    Render {
        /// Input grids file (.json, or .csv with three records per grid)
        #[arg(short, long)]
        input: PathBuf,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "stats_only")]
        output: Option<PathBuf>,

        /// JSON render options; flags below override it
        #[arg(long)]
        config: Option<PathBuf>,

        /// Document title
        #[arg(long)]
        title: Option<String>,

        /// Directory containing <code>.png pictograms
        #[arg(long, conflicts_with = "assets_url")]
        assets_dir: Option<PathBuf>,

        /// Base URL serving <code>.png pictograms
        #[arg(long)]
        assets_url: Option<String>,

        /// Seed for the random per-grid palettes
        #[arg(long, conflicts_with = "palette")]
        seed: Option<u64>,

        /// Use one built-in palette for every grid (see `themes`)
        #[arg(long)]
        palette: Option<String>,

        /// Write the effective options to this JSON file
        #[arg(long)]
        save_config: Option<PathBuf>,

        /// Show statistics only, don't generate PDF
        #[arg(long)]
        stats_only: bool,
    },

    /// List built-in palettes
    Themes,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    CliLogger::new(level_for(cli.verbose, cli.quiet)).init()?;

    match cli.command {
        Commands::Render {
            input,
            output,
            config,
            title,
            assets_dir,
            assets_url,
            seed,
            palette,
            save_config,
            stats_only,
        } => {
            let mut options = match &config {
                Some(path) => RenderOptions::load(path)
                    .await
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => RenderOptions::default(),
            };

            if let Some(title) = title {
                options.title = title;
            }
            if let Some(path) = assets_dir {
                options.assets = AssetLocation::Directory { path };
            } else if let Some(base_url) = assets_url {
                options.assets = AssetLocation::Http { base_url };
            }
            if let Some(name) = palette {
                options.palette = PaletteMode::Theme { name };
            } else if seed.is_some() {
                options.palette = PaletteMode::Random { seed };
            }
            options.validate()?;

            if let Some(path) = &save_config {
                options.save(path).await?;
                log::info!("Configuration saved to {}", path.display());
            }

            let grids = picto_grid::load_grids(&input)
                .await
                .with_context(|| format!("loading grids from {}", input.display()))?;

            let stats = picto_grid::calculate_statistics(&grids);
            println!("Grid Statistics:");
            println!("  Grids: {}", stats.grids);
            println!("  Pages: {}", stats.pages);
            println!("  Empty cells: {}", stats.empty_cells);
            println!("  Pictogram cells: {}", stats.labelled_cells);
            println!("  Absent cells: {}", stats.absent_cells);

            if stats_only {
                return Ok(());
            }
            let Some(output) = output else {
                anyhow::bail!("--output is required unless --stats-only is given");
            };

            let rendered = picto_grid::render_with_options(&grids, &options).await?;
            picto_grid::save_pdf(&rendered.bytes, &output).await?;

            if rendered.missing_pictograms > 0 {
                println!(
                    "{} pictograms missing (drawn as labels only)",
                    rendered.missing_pictograms
                );
            }
            println!(
                "Rendered {} grids on {} pages → {}",
                stats.grids,
                rendered.pages,
                output.display()
            );
        }

        Commands::Themes => {
            for theme in picto_grid::THEMES {
                let p = &theme.palette;
                println!(
                    "{:<8} background {}  text {}  border {}",
                    theme.name,
                    p.background_secondary.to_hex(),
                    p.text.to_hex(),
                    p.border.to_hex()
                );
            }
        }
    }

    Ok(())
}
