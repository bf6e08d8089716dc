//! Console front end for [`cv_vector`].
//!
//! A [`Session`] reads vectors from the command line or, when they are missing, prompts
//! for them on an input stream. It then runs either the reflection or the rotation
//! calculation and prints every intermediate vector along with its normalized form.
//!
//! [`Opt`] is the command line accepted by the `vectool` binary, and [`run`] dispatches
//! its subcommand onto a session.

mod error;
mod opt;

pub use error::{Error, Result};
pub use opt::{run, Command, Opt};

use cv_vector::{EulerAngles, Vector3D};
use log::*;
use std::collections::VecDeque;
use std::io::{BufRead, Write};

fn split_components(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn parse_component(token: &str) -> Result<f32> {
    token.parse().map_err(|source| Error::ParseFloat {
        token: token.to_owned(),
        source,
    })
}

/// Parses three components separated by whitespace and/or commas.
///
/// Surrounding parentheses are accepted, so the output of `Display` for
/// [`Vector3D`] parses back.
pub fn parse_vector(text: &str) -> Result<Vector3D> {
    let text = text.trim().trim_start_matches('(').trim_end_matches(')');
    let components = split_components(text)
        .map(parse_component)
        .collect::<Result<Vec<f32>>>()?;
    match components[..] {
        [x, y, z] => Ok(Vector3D::new(x, y, z)),
        _ => Err(Error::ComponentCount(components.len())),
    }
}

/// Pulls whitespace separated components out of a line oriented reader.
///
/// A vector may be spread over several lines, and a line may hold more than one vector.
pub struct TokenReader<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> Result<String> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(Error::UnexpectedEof);
            }
            self.pending
                .extend(split_components(&line).map(str::to_owned));
        }
    }

    pub fn read_vector(&mut self) -> Result<Vector3D> {
        let x = parse_component(&self.next_token()?)?;
        let y = parse_component(&self.next_token()?)?;
        let z = parse_component(&self.next_token()?)?;
        Ok(Vector3D::new(x, y, z))
    }
}

/// How rotation angles are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Interprets `(x, y, z)` as `(roll, pitch, yaw)`.
    pub fn euler_angles(self, angles: Vector3D) -> EulerAngles {
        match self {
            AngleUnit::Degrees => EulerAngles::from_degrees(angles.x, angles.y, angles.z),
            AngleUnit::Radians => EulerAngles::from(angles),
        }
    }
}

pub struct Session<R, W> {
    input: TokenReader<R>,
    output: W,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self {
        Self {
            input: TokenReader::new(input),
            output,
        }
    }

    /// Gives back the output stream, which is useful for inspecting what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    fn vector_or_prompt(&mut self, given: Option<Vector3D>, prompt: &str) -> Result<Vector3D> {
        if let Some(v) = given {
            return Ok(v);
        }
        self.heading(prompt)?;
        self.output.flush()?;
        let v = self.input.read_vector()?;
        debug!("read {} from input", v);
        Ok(v)
    }

    /// Headings and prompts end with a single trailing space.
    fn heading(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{} ", text)?;
        Ok(())
    }

    fn print(&mut self, label: &str, v: Vector3D) -> Result<()> {
        writeln!(self.output, "{:<2} = \t{}", label, v)?;
        Ok(())
    }

    /// Prints `v` under `label` and its normalized form under `label` + `n`.
    fn print_with_normalized(&mut self, label: &str, v: Vector3D) -> Result<()> {
        self.print(label, v)?;
        self.print(&format!("{}n", label), v.normalize())
    }

    /// Reflects a light vector about a mirror normal and returns the reflection.
    pub fn reflect(
        &mut self,
        incident: Option<Vector3D>,
        normal: Option<Vector3D>,
    ) -> Result<Vector3D> {
        let light = self.vector_or_prompt(incident, "Input Light Vector:")?;
        self.print_with_normalized("L", light)?;
        let normal = self.vector_or_prompt(normal, "Input Mirror Normal:")?;
        self.print_with_normalized("N", normal)?;

        if normal.length() == 0.0 {
            warn!("mirror normal has zero length, reflection is undefined");
        }
        let reflection = light.reflect(normal);

        self.heading("Reflected Vector:")?;
        self.print_with_normalized("R", reflection)?;
        Ok(reflection)
    }

    /// Rotates a start vector by `(roll, pitch, yaw)` angles and returns the result.
    pub fn rotate(
        &mut self,
        start: Option<Vector3D>,
        angles: Option<Vector3D>,
        unit: AngleUnit,
    ) -> Result<Vector3D> {
        let start = self.vector_or_prompt(start, "Input Start Vector:")?;
        self.print_with_normalized("V", start)?;
        let prompt = match unit {
            AngleUnit::Degrees => "Input Rotation Angles (degrees):",
            AngleUnit::Radians => "Input Rotation Angles (radians):",
        };
        let angles = self.vector_or_prompt(angles, prompt)?;
        self.print("Angles", angles)?;

        let euler = unit.euler_angles(angles);
        debug!("rotating by {:?}", euler);
        let rotated = start.rotate_euler(euler);

        self.heading("Rotated Vector:")?;
        self.print_with_normalized("R", rotated)?;
        Ok(rotated)
    }
}
