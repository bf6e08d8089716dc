use crate::{parse_vector, AngleUnit, Result, Session};
use cv_vector::Vector3D;
use log::*;
use std::io::{BufRead, Write};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "vectool",
    about = "A tool to reflect and rotate 3d vectors",
    long_about = "A tool to reflect and rotate 3d vectors.\n\n\
                  Vectors are given as three numbers separated by spaces or commas, \
                  for example \"0 -1 0\". Any vector not passed as an option is read from stdin."
)]
pub struct Opt {
    #[structopt(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Reflect a light vector about a mirror normal.
    Reflect {
        /// The incoming light vector.
        #[structopt(short, long, allow_hyphen_values = true, parse(try_from_str = parse_vector))]
        incident: Option<Vector3D>,
        /// The mirror normal. It does not need to be normalized.
        #[structopt(short, long, allow_hyphen_values = true, parse(try_from_str = parse_vector))]
        normal: Option<Vector3D>,
    },
    /// Rotate a vector by roll (X), then pitch (Y), then yaw (Z).
    Rotate {
        /// The vector to rotate.
        #[structopt(short, long, allow_hyphen_values = true, parse(try_from_str = parse_vector))]
        vector: Option<Vector3D>,
        /// The rotation angles as "roll pitch yaw".
        #[structopt(short, long, allow_hyphen_values = true, parse(try_from_str = parse_vector))]
        angles: Option<Vector3D>,
        /// Interpret the angles as radians instead of degrees.
        #[structopt(long)]
        radians: bool,
    },
}

/// Runs `command` on `session`. Without a command, reflection and then rotation are run
/// back to back on the same input stream.
pub fn run<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    command: Option<Command>,
) -> Result<()> {
    match command {
        Some(Command::Reflect { incident, normal }) => {
            info!("running reflection");
            session.reflect(incident, normal)?;
        }
        Some(Command::Rotate {
            vector,
            angles,
            radians,
        }) => {
            let unit = if radians {
                AngleUnit::Radians
            } else {
                AngleUnit::Degrees
            };
            info!("running rotation with angles in {:?}", unit);
            session.rotate(vector, angles, unit)?;
        }
        None => {
            info!("no command given, running reflection then rotation");
            session.reflect(None, None)?;
            session.rotate(None, None, AngleUnit::Degrees)?;
        }
    }
    Ok(())
}
