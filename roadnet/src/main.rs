use clap::{Parser, Subcommand};
use roadnet::{app::run_from_config, config::PipelineConfig, model::RoadNetCliError};
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct RoadNetAppArguments {
    #[command(subcommand)]
    app: App,
}

#[derive(Subcommand)]
pub enum App {
    /// attribute the configured road sources and synthesize junctions
    Run {
        #[arg(long, help = "path to .toml or .json file with roadnet run parameters")]
        configuration_file: String,
        #[arg(long, help = "output path for the network dataset")]
        output_directory: String,
        #[arg(long, help = "replace existing output files")]
        overwrite: bool,
    },
}

pub fn run(app: &App) -> Result<(), RoadNetCliError> {
    env_logger::init();
    match app {
        App::Run {
            configuration_file,
            output_directory,
            overwrite,
        } => {
            log::info!("reading roadnet configuration from {configuration_file}");
            let mut conf = PipelineConfig::try_from(configuration_file)?;
            conf.overwrite = conf.overwrite || *overwrite;
            let out_path = Path::new(output_directory);
            match run_from_config(&conf, out_path) {
                Ok(summary) => {
                    if !summary.failed_sources.is_empty() {
                        log::warn!(
                            "finished with {} failed sources",
                            summary.failed_sources.len()
                        );
                    }
                    eprintln!("finished.");
                    Ok(())
                }
                Err(e) => {
                    log::error!("roadnet failed: {e}");
                    Err(e)?
                }
            }
        }
    }
}

fn main() {
    let args = RoadNetAppArguments::parse();
    if let Err(e) = run(&args.app) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
