use axis_core::{
    align::AxisPair,
    axis::extract_axis_points,
    config::AlignConfig,
    io::{read_structure, save_axis_points},
    point::{Point3, PointSequence},
};
use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use log::LevelFilter;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: AxisCommand,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum AxisCommand {
    /// Move the axis of one structure onto the axis of another
    #[command(name = "align")]
    Align {
        /// A json file with the alignment settings. Flags override its values
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// The structure whose frame the result is expressed in
        #[arg(long, short)]
        reference: Option<PathBuf>,
        /// The structure that gets moved
        #[arg(long, short)]
        moving: Option<PathBuf>,
        /// Where to write the aligned axis
        #[arg(long, short)]
        output: Option<PathBuf>,
        #[command(flatten)]
        labels: LabelArgs,
        /// Print a json summary instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Write the axis points of a single structure
    #[command(name = "extract")]
    Extract {
        /// A path to the structure to extract the axis from
        #[arg(long, short)]
        structure: PathBuf,
        /// Where to write the axis
        #[arg(long, short)]
        output: PathBuf,
        #[command(flatten)]
        labels: LabelArgs,
    },
}

#[derive(ClapArgs, Debug)]
struct LabelArgs {
    /// Residue name written on every output record
    #[arg(long)]
    residue_label: Option<String>,
    /// Chain identifier written on every output record
    #[arg(long)]
    chain_id: Option<char>,
}

impl LabelArgs {
    fn apply(self, config: &mut AlignConfig) {
        if let Some(residue_label) = self.residue_label {
            config.output_residue_label = residue_label;
        }
        if let Some(chain_id) = self.chain_id {
            config.output_chain_id = chain_id;
        }
    }
}

#[derive(Serialize)]
struct AlignSummary<'a> {
    reference: &'a PathBuf,
    moving: &'a PathBuf,
    output: &'a PathBuf,
    reference_points: usize,
    moving_points: usize,
    translation: Point3,
}

fn main() -> Result<()> {
    let args: Args = Args::parse();

    pretty_env_logger::formatted_builder()
        .filter_level(if args.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match args.command {
        AxisCommand::Align {
            config,
            reference,
            moving,
            output,
            labels,
            json,
        } => {
            let mut config = match config {
                Some(path) => AlignConfig::load(&path)
                    .with_context(|| format!("loading config {}", path.display()))?,
                None => AlignConfig::default(),
            };
            if let Some(reference) = reference {
                config.input_paths[0] = reference;
            }
            if let Some(moving) = moving {
                config.input_paths[1] = moving;
            }
            if let Some(output) = output {
                config.output_path = output;
            }
            labels.apply(&mut config);
            let record_labels = config.record_labels()?;

            let start = Instant::now();
            let reference_points = load_axis(config.reference_path())?;
            let moving_points = load_axis(config.moving_path())?;

            let pair = AxisPair::new(&reference_points, &moving_points)
                .context("aligning the moving axis onto the reference axis")?;
            let transform = pair.anchored_transform();
            let aligned = transform.apply(&moving_points);

            save_axis_points(&aligned, &record_labels, &config.output_path)
                .with_context(|| format!("writing {}", config.output_path.display()))?;

            let [reference, moving] = &config.input_paths;
            let summary = AlignSummary {
                reference,
                moving,
                output: &config.output_path,
                reference_points: reference_points.len(),
                moving_points: moving_points.len(),
                translation: transform.translation,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "aligned {} points onto {} reference points in {:0.2?}",
                    summary.moving_points,
                    summary.reference_points,
                    start.elapsed()
                );
                let t = summary.translation;
                println!("translation: ({:.3}, {:.3}, {:.3})", t.x, t.y, t.z);
                println!("written to {}", summary.output.display());
            }
        }

        AxisCommand::Extract {
            structure,
            output,
            labels,
        } => {
            let mut config = AlignConfig::default();
            labels.apply(&mut config);
            let record_labels = config.record_labels()?;

            let points = load_axis(&structure)?;
            save_axis_points(&points, &record_labels, &output)
                .with_context(|| format!("writing {}", output.display()))?;

            println!("wrote {} axis points to {}", points.len(), output.display());
        }
    }

    Ok(())
}

fn load_axis(path: &Path) -> Result<PointSequence> {
    let structure =
        read_structure(path).with_context(|| format!("reading {}", path.display()))?;
    extract_axis_points(&structure)
        .with_context(|| format!("extracting the axis of {}", path.display()))
}
