use anyhow::{bail, Context, Result};
use clap::Parser;
use rs_planar_arm::parameters::Parameters;
use rs_planar_arm::path_plan::sequencer::{Mode, PickAndPlace};
use rs_planar_arm::session::{ArmSession, DEFAULT_STEPS, DEFAULT_TICK};
use rs_planar_arm::utils::{dump_joints, dump_pose};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Plan and play a motion of the two-link planar arm, printing the motion log.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// YAML file with arm parameters (and optionally pick-and-place settings)
    #[arg(long)]
    parameters: Option<PathBuf>,

    /// Waypoint as "x,y" in meters; repeat for more points
    #[arg(long = "point", value_parser = parse_point, required = true)]
    points: Vec<(f64, f64)>,

    /// Interpolation steps per segment
    #[arg(long, default_value_t = DEFAULT_STEPS)]
    steps: usize,

    /// Carry an object from every waypoint to the drop-off point
    #[arg(long)]
    pick_and_place: bool,

    /// Sleep between ticks as a user interface would
    #[arg(long)]
    realtime: bool,
}

fn parse_point(text: &str) -> Result<(f64, f64), String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("expected x,y but got '{}'", text))?;
    let x = x.trim().parse::<f64>().map_err(|e| e.to_string())?;
    let y = y.trim().parse::<f64>().map_err(|e| e.to_string())?;
    Ok((x, y))
}

/// Usage example.
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    let mut session = match &args.parameters {
        Some(path) => {
            let parameters = Parameters::from_yaml_file(path)
                .with_context(|| format!("Failed to read parameters from {}", path.display()))?;
            let mut session = ArmSession::new(parameters)?;
            session.set_pick_and_place(PickAndPlace::from_yaml_file(path)?);
            session
        }
        None => ArmSession::default(),
    };
    print!("Parameters:\n{}", session.parameters().to_yaml());

    for &(x, y) in &args.points {
        match session.try_add_waypoint(x, y) {
            Ok(waypoint) => {
                print!("Waypoint ({:.3}, {:.3}): ", x, y);
                dump_joints(&waypoint.joints);
            }
            Err(err) => println!("Skipped: {}", err),
        }
    }

    let mode = if args.pick_and_place {
        Mode::PickAndPlace
    } else {
        Mode::Normal
    };
    let frames = session.start(mode, args.steps).context("Cannot start the motion")?;
    println!("{} frames queued", frames);

    while let Some(_frame) = session.tick() {
        if args.realtime {
            std::thread::sleep(DEFAULT_TICK);
        }
    }
    if session.log().is_empty() {
        bail!("Nothing was played");
    }

    print!("{}", session.log().to_table());
    println!("Final pose:");
    dump_pose(&session.forward(&session.display_angles()));
    Ok(())
}
