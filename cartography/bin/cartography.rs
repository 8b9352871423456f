use cartography::prelude::*;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Orbital elements, derived attributes and time-sampled motion curves
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// YAML body catalog to use instead of the built-in presets
    #[arg(long, short, global = true)]
    pub catalog: Option<PathBuf>,

    /// YAML sampler settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the bodies in the catalog
    Presets,

    /// Print the derived attributes of a body as YAML
    Attributes {
        name: String,

        /// Also print the scene placement scalars
        #[arg(long, short)]
        geometry: bool,
    },

    /// Sample the motion curve of a body over one period
    Curve {
        name: String,

        /// Time steps per period
        #[arg(long, short)]
        samples: Option<usize>,

        /// Write the curve to this CSV file instead of printing it
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print one keyframe per day instead of the raw samples
        #[arg(long, short)]
        keyframes: bool,

        /// Report the phase on this date (YYYY-MM-DD)
        #[arg(long, short)]
        date: Option<NaiveDate>,
    },
}

fn load_catalog(args: &Args) -> Result<Catalog, OrbitError> {
    match &args.catalog {
        Some(path) => load_catalog_file(path),
        None => Ok(Catalog::presets()),
    }
}

fn load_config(args: &Args) -> Result<SamplerConfig, OrbitError> {
    match &args.config {
        Some(path) => load_sampler_config(path),
        None => Ok(SamplerConfig::default()),
    }
}

fn run(args: Args) -> Result<(), OrbitError> {
    let catalog = load_catalog(&args)?;

    match &args.command {
        Command::Presets => {
            for record in catalog.build_order()? {
                let [r, g, b] = record.kind.color();
                let period = match record.orbit {
                    Some(_) => {
                        let elements = catalog.elements(&record.name)?;
                        format!("{:12.3} d", elements.orbital_period_days())
                    }
                    None => format!("{:>14}", "-"),
                };
                println!(
                    "{:<12} {:<24} {:<10} {} #{:02x}{:02x}{:02x}",
                    record.name,
                    record.kind.label(),
                    record.parent,
                    period,
                    r,
                    g,
                    b
                );
            }
        }
        Command::Attributes { name, geometry } => {
            let elements = catalog.elements(name)?;
            print!("{}", serde_yaml::to_string(&elements.attributes())?);
            if *geometry {
                print!("{}", serde_yaml::to_string(&elements.geometry())?);
            }
        }
        Command::Curve {
            name,
            samples,
            csv,
            keyframes,
            date,
        } => {
            let mut config = load_config(&args)?;
            if let Some(n) = samples {
                config = config.with_samples(*n);
            }
            let sampler = TimeSampler::new(config)?;
            let curve = catalog.curve(name, &sampler)?;

            if let Some(date) = date {
                let record = catalog.lookup(name)?;
                match record.perihelion_date {
                    Some(perihelion) => {
                        let percent = curve.percent_on(perihelion, *date);
                        println!("{} on {}: {:.3}%", name, date, percent);
                    }
                    None => tracing::warn!(name = %name, "no perihelion date on record"),
                }
            }

            if let Some(path) = csv {
                export_motion_curve(&curve, path)?;
            } else if *keyframes {
                for (day, percent) in curve.daily_keyframes() {
                    println!("{:6} {:10.6}", day, percent);
                }
            } else {
                for s in curve.iter() {
                    println!("{:14.6} {:10.6}", s.elapsed_days, s.percent);
                }
            }
        }
    }

    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
