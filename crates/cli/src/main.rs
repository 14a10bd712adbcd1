use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use geom3::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;

#[derive(Parser)]
#[command(name = "geom3")]
#[command(about = "3D vector, point and matrix toolbox", version = geom3::VERSION)]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Print a scaled vector, a quarter turn about Z and their product
    Demo,
    /// Rotate a point about an axis through the origin
    Rotate {
        /// Rotation axis as x,y,z (normalized internally)
        #[arg(long, allow_hyphen_values = true, value_parser = io::parse_triple)]
        axis: [f64; 3],
        /// Angle in radians, counter-clockwise about the axis
        #[arg(long, allow_hyphen_values = true)]
        angle: f64,
        #[arg(long, allow_hyphen_values = true, value_parser = io::parse_triple)]
        point: [f64; 3],
    },
    /// Deduplicate a JSON array of points under an equality policy
    Dedup {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = Policy::Exact)]
        comparer: Policy,
        /// Tolerance or raster cell size; ignored by `exact`
        #[arg(long, default_value_t = 1e-6)]
        size: f64,
        /// Center the raster on the centroid of the input
        #[arg(long)]
        recenter: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Policy {
    Exact,
    Tolerant,
    Raster,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Demo => demo(),
        Action::Rotate { axis, angle, point } => rotate(axis, angle, point),
        Action::Dedup {
            input,
            output,
            comparer,
            size,
            recenter,
        } => dedup(input, output, comparer, size, recenter),
    }
}

fn demo() -> Result<()> {
    tracing::info!("demo");
    let (b, m) = demo_values()?;
    println!("b = {b}");
    println!("m =\n{m}");
    println!("m * b = {}", m * b);
    Ok(())
}

fn demo_values() -> Result<(Vector3D, Matrix3D)> {
    let b = 2.5 * Vector3D::new(1.0, 2.0, 3.0);
    let m = Matrix3D::rotate(&Vector3D::Z_AXIS, std::f64::consts::FRAC_PI_2)?;
    Ok((b, m))
}

fn rotate(axis: [f64; 3], angle: f64, point: [f64; 3]) -> Result<()> {
    tracing::info!(?axis, angle, ?point, "rotate");
    let m = Matrix3D::rotate(&Vector3D::from(axis), angle).context("building rotation")?;
    let p = m * Point3D::from(point);
    println!("{p}");
    println!("{m}");
    Ok(())
}

fn dedup(
    input: PathBuf,
    output: PathBuf,
    policy: Policy,
    size: f64,
    recenter: bool,
) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        output = %output.display(),
        ?policy,
        size,
        recenter,
        "dedup"
    );
    let points = io::read_points(&input)?;
    let unique = dedup_points(&points, policy, size, recenter)?;
    io::write_points(&output, &unique)?;
    tracing::info!(
        read = points.len(),
        kept = unique.len(),
        dropped = points.len() - unique.len(),
        "dedup_done"
    );
    Ok(())
}

fn dedup_points(
    points: &[Point3D],
    policy: Policy,
    size: f64,
    recenter: bool,
) -> Result<Vec<Point3D>> {
    let items = points.iter().copied();
    let unique = match policy {
        Policy::Exact => distinct(items, &ExactComparer),
        Policy::Tolerant => {
            let cmp =
                TolerantEqualityComparer::new(size).context("--size for tolerant comparer")?;
            distinct(items, &cmp)
        }
        Policy::Raster => {
            let centroid = if recenter {
                Point3D::centroid(points).unwrap_or(Point3D::ORIGIN)
            } else {
                Point3D::ORIGIN
            };
            let cmp = RasterEqualityComparer::with_centroid(size, centroid)
                .context("--size for raster comparer")?;
            distinct(items, &cmp)
        }
    };
    Ok(unique)
}
