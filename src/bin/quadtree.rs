use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    str::FromStr,
};

use barnes_hut_quadtree::{Body, Config, Execution, Notation, Quadtree};
use clap::Parser;
use color_eyre::eyre::{bail, eyre, Result, WrapErr};
use log::{info, warn};
use nalgebra::Vector2;

/// Build a Barnes-Hut quadtree from a list of bodies and print the force on each of them.
///
/// Bodies are read as lines of "x y m". Blank lines and lines starting with '#' are ignored.
#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Options {
    /// File with one body per line, reads stdin if omitted or "-".
    bodies: Option<PathBuf>,
    /// YAML file with default settings.
    #[clap(long)]
    config: Option<PathBuf>,
    /// Half-width of the square universe centered at the origin.
    #[clap(long)]
    half_width: Option<f64>,
    /// Opening angle, 0 calculates exact forces.
    #[clap(long)]
    theta: Option<f64>,
    #[clap(long)]
    max_depth: Option<u32>,
    /// Abort on the first line that cannot be parsed or inserted, instead of skipping it.
    #[clap(long)]
    strict: bool,
    /// Print every node of the tree.
    #[clap(long)]
    dump: bool,
    /// Print the dump in scientific notation.
    #[clap(long)]
    scientific: bool,
    /// Print the mass stored at "x,y" (repeatable).
    #[clap(long, value_name = "X,Y")]
    mass_at: Vec<Point>,
    /// Calculate forces on this many threads.
    #[clap(long, default_value_t = 1)]
    threads: usize,
    /// Don't print forces.
    #[clap(long)]
    no_forces: bool,
}

#[derive(Clone, Copy, Debug)]
struct Point(Vector2<f64>);

impl FromStr for Point {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected \"x,y\", got {s:?}"))?;
        let parse = |v: &str| v.trim().parse::<f64>().map_err(|err| err.to_string());
        Ok(Point(Vector2::new(parse(x)?, parse(y)?)))
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = Options::parse();
    let config = config(&options)?;
    let mut tree = config
        .build_tree()
        .wrap_err("cannot create the quadtree")?;

    let reader: Box<dyn BufRead> = match &options.bodies {
        Some(path) if path.as_os_str() != "-" => Box::new(BufReader::new(
            File::open(path).wrap_err_with(|| format!("cannot open {}", path.display()))?,
        )),
        _ => Box::new(io::stdin().lock()),
    };
    read_bodies(reader, &mut tree, options.strict)?;
    info!(
        "inserted {} bodies, total mass {:e}, depth {}",
        tree.len(),
        tree.total_mass(),
        tree.depth().unwrap_or(0)
    );

    let mut out = BufWriter::new(io::stdout().lock());

    if options.dump {
        write!(out, "{}", tree.dump(config.notation))?;
    }

    for Point(position) in &options.mass_at {
        let mass = tree.mass_at(position).unwrap_or(0.);
        writeln!(out, "mass at ({}, {}): {mass}", position.x, position.y)?;
    }

    if !options.no_forces {
        let execution = match options.threads {
            0 => bail!("--threads must be at least 1"),
            1 => Execution::SingleThreaded,
            num_threads => Execution::Multithreaded { num_threads },
        };
        for (body, force) in tree.forces(config.theta, execution) {
            writeln!(
                out,
                "{} {} {:e} {:e}",
                body.position.x, body.position.y, force.x, force.y
            )?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Settings from the config file, overridden by the command line.
fn config(options: &Options) -> Result<Config> {
    let mut config = match &options.config {
        Some(path) => Config::from_path(path)
            .wrap_err_with(|| format!("cannot read config {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(half_width) = options.half_width {
        config.half_width = half_width;
    }
    if let Some(theta) = options.theta {
        config.theta = theta;
    }
    if let Some(max_depth) = options.max_depth {
        config.max_depth = max_depth;
    }
    if options.scientific {
        config.notation = Notation::Scientific;
    }

    Ok(config)
}

fn read_bodies(reader: impl BufRead, tree: &mut Quadtree, strict: bool) -> Result<()> {
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Err(err) = line.parse::<Body>().and_then(|body| tree.insert(body)) {
            if strict {
                return Err(eyre!(err).wrap_err(format!("line {}", i + 1)));
            }
            warn!("skipping line {}: {err}", i + 1);
        }
    }
    Ok(())
}
