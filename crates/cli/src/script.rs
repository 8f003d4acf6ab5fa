//! Text inputs for the CLI: `x,y` points, vertex lists and session scripts.
//!
//! Script format (one step per line, `#` starts a comment):
//!   click X Y   left click at window coordinates
//!   move X Y    pointer motion at window coordinates
//!   key K       key press (see `Command::from_key`)
//!   probe       record the polygons containing the cursor

use anyhow::{anyhow, bail, Context, Result};
use pinpoly::geom2::{Coord, Point};
use pinpoly::session::{Command, Flow, PolygonId, Session};
use serde::Serialize;

/// Parse `"x,y"` (surrounding whitespace allowed).
pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .trim()
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`, got `{s}`"))?;
    let x: Coord = x.trim().parse().with_context(|| format!("bad x in `{s}`"))?;
    let y: Coord = y.trim().parse().with_context(|| format!("bad y in `{s}`"))?;
    Ok(Point::new(x, y))
}

/// Parse whitespace-separated points: `"0,0 10,0 10,10"`.
pub fn parse_vertices(s: &str) -> Result<Vec<Point>> {
    s.split_whitespace().map(parse_point).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Click(Coord, Coord),
    Move(Coord, Coord),
    Key(char),
    Probe,
}

fn parse_step(line: &str) -> Result<Option<Step>> {
    let line = line.split('#').next().unwrap_or("").trim();
    if line.is_empty() {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or("");
    let args: Vec<&str> = words.collect();
    let coords = |args: &[&str]| -> Result<(Coord, Coord)> {
        match args {
            [x, y] => Ok((x.parse()?, y.parse()?)),
            _ => bail!("expected two coordinates"),
        }
    };
    let step = match verb {
        "click" => {
            let (x, y) = coords(&args)?;
            Step::Click(x, y)
        }
        "move" => {
            let (x, y) = coords(&args)?;
            Step::Move(x, y)
        }
        "key" => match args.as_slice() {
            [k] if k.chars().count() == 1 => Step::Key(k.chars().next().unwrap_or(' ')),
            _ => bail!("expected a single key character"),
        },
        "probe" if args.is_empty() => Step::Probe,
        _ => bail!("unknown step `{line}`"),
    };
    Ok(Some(step))
}

pub fn parse_script(text: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some(step) = parse_step(line).with_context(|| format!("line {}", i + 1))? {
            steps.push(step);
        }
    }
    Ok(steps)
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProbeRecord {
    /// Index of the `probe` step within the script.
    pub step: usize,
    pub cursor: [Coord; 2],
    pub hits: Vec<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReplayReport {
    pub probes: Vec<ProbeRecord>,
    pub polygons: usize,
    pub pending: usize,
    pub detecting: bool,
    pub quit: bool,
}

/// Drive `session` through `steps`, stopping early on a quit key.
pub fn replay(session: &mut Session, steps: &[Step]) -> ReplayReport {
    let mut probes = Vec::new();
    let mut quit = false;
    for (i, step) in steps.iter().enumerate() {
        match *step {
            Step::Click(x, y) => session.click(x, y),
            Step::Move(x, y) => session.pointer_moved(x, y),
            Step::Key(k) => match Command::from_key(k) {
                Some(cmd) => {
                    if session.apply(cmd) == Flow::Quit {
                        quit = true;
                        break;
                    }
                }
                None => tracing::warn!(step = i, key = %k, "unbound key ignored"),
            },
            Step::Probe => {
                let c = session.cursor();
                let hits = session.hits().into_iter().map(|PolygonId(id)| id).collect();
                probes.push(ProbeRecord {
                    step: i,
                    cursor: [c.x, c.y],
                    hits,
                });
            }
        }
    }
    ReplayReport {
        probes,
        polygons: session.polygons().len(),
        pending: session.pending().len(),
        detecting: session.is_detecting(),
        quit,
    }
}
