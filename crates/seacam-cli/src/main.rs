//! seacam-cli — Command-line interface for seacam-core
//!
//! This binary provides a simple way to inspect the Seattle traffic-camera
//! dataset from your terminal. It supports printing camera totals by
//! owning agency, listing every camera, and running the same substring
//! filter the map applies on each keystroke.
//!
//! Usage examples
//! --------------
//!
//! - Show totals
//!   $ seacam-cli stats
//!
//! - List all cameras
//!   $ seacam-cli cameras
//!
//! - Filter by a name substring (case-insensitive)
//!   $ seacam-cli filter "5th ave"
//!
//! Data source
//! -----------
//!
//! By default the CLI reads the sample dataset bundled with the
//! `seacam-core` crate. Use `--input <path>` to point at your own JSON
//! export, or `--fetch` to issue the one live GET against the Seattle
//! Open Data endpoint (requires the `fetch` feature, on by default).
mod args;

use crate::args::{CliArgs, Commands};
use clap::Parser;
use seacam_core::loader::FileSource;
use seacam_core::model::Totals;
use seacam_core::{Controller, HeadlessView, DEFAULT_ZOOM, SEATTLE_CENTER};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let mut controller = Controller::new(HeadlessView::new());
    controller.initialize(SEATTLE_CENTER, DEFAULT_ZOOM)?;

    let totals = if args.fetch {
        load_live(&mut controller)?
    } else {
        let source = match &args.input {
            Some(path) => FileSource::new(path),
            None => FileSource::bundled_sample(),
        };
        controller.run_load(&source)?
    };

    match args.command {
        Commands::Stats => {
            println!("Camera totals:");
            println!("  SDOT:  {}", totals.sdot);
            println!("  WSDOT: {}", totals.wsdot);
            println!("  Total: {}", totals.total());
        }

        Commands::Cameras => {
            for entry in controller.catalog().entries() {
                println!("{} ({})", entry.name(), entry.agency().code());
            }
        }

        Commands::Filter { query } => {
            let totals = controller.filter(&query)?;
            if totals.total() == 0 {
                eprintln!("No cameras match: {query}");
            } else {
                for entry in controller.catalog().entries() {
                    if entry.is_visible() {
                        println!("{} ({})", entry.name(), entry.agency().code());
                    }
                }
                println!("{} SDOT, {} WSDOT", totals.sdot, totals.wsdot);
            }
        }
    }

    Ok(())
}

#[cfg(feature = "fetch")]
fn load_live(controller: &mut Controller<HeadlessView>) -> anyhow::Result<Totals> {
    use seacam_core::loader::HttpSource;
    Ok(controller.run_load(&HttpSource::default())?)
}

#[cfg(not(feature = "fetch"))]
fn load_live(_controller: &mut Controller<HeadlessView>) -> anyhow::Result<Totals> {
    anyhow::bail!("this build was compiled without the 'fetch' feature")
}
