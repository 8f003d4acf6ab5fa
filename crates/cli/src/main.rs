use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pinpoly::geom2::rand::{draw_points, draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use pinpoly::geom2::{BoundingBox, Coord, Polygon};
use pinpoly::session::{Session, SessionCfg};
use serde::Serialize;
use serde_json::json;
use std::io::Read;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

mod provenance;
mod script;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "pinpoly")]
#[command(about = "Point-in-polygon queries, session replay and sampling")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Test one point against one polygon (the ring is closed automatically)
    Contains {
        /// Whitespace-separated vertices, e.g. "0,0 10,0 10,10 0,10"
        #[arg(long)]
        vertices: String,
        /// Query point `x,y`
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Replay a drawing-session script and report probe hits
    Replay {
        /// Script file; `-` reads stdin
        #[arg(long, default_value = "-")]
        script: String,
        #[arg(long, default_value_t = 600)]
        width: Coord,
        #[arg(long, default_value_t = 600)]
        height: Coord,
        /// Cursor step for the i/j/k/l keys
        #[arg(long, default_value_t = 5)]
        step: Coord,
    },
    /// Draw a random star polygon and classify random query points
    Sample {
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 1000)]
        queries: usize,
        /// Query region margin around the polygon's bounding box
        #[arg(long, default_value_t = 50)]
        margin: Coord,
        /// Write the summary JSON here (plus a provenance sidecar)
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Contains { vertices, point } => contains(&vertices, &point),
        Action::Replay {
            script,
            width,
            height,
            step,
        } => replay(
            &script,
            SessionCfg {
                width,
                height,
                nudge_step: step,
            },
        ),
        Action::Sample {
            vertices,
            seed,
            queries,
            margin,
            out,
        } => sample(vertices, seed, queries, margin, out),
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct BboxOut {
    xmin: Coord,
    xmax: Coord,
    ymin: Coord,
    ymax: Coord,
}

impl From<BoundingBox> for BboxOut {
    fn from(b: BoundingBox) -> Self {
        Self {
            xmin: b.xmin,
            xmax: b.xmax,
            ymin: b.ymin,
            ymax: b.ymax,
        }
    }
}

fn contains(vertices: &str, point: &str) -> Result<()> {
    let vs = script::parse_vertices(vertices).context("parsing --vertices")?;
    let p = script::parse_point(point).context("parsing --point")?;
    let poly = Polygon::closed(vs).context("building polygon")?;
    let inside = poly.in_polygon(p);
    tracing::info!(vertices = poly.vertices().len(), x = p.x, y = p.y, inside, "contains");
    let out = json!({
        "inside": inside,
        "in_bbox": poly.in_bounding_box(p),
        "crossings": poly.crossings(p),
        "bbox": BboxOut::from(poly.bounding_box()),
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

fn replay(source: &str, cfg: SessionCfg) -> Result<()> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading script from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("reading {source}"))?
    };
    let steps = script::parse_script(&text)?;
    tracing::info!(source, steps = steps.len(), "replay");
    let mut session = Session::new(cfg);
    let report = script::replay(&mut session, &steps);
    tracing::info!(
        probes = report.probes.len(),
        polygons = report.polygons,
        quit = report.quit,
        "replay done"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Serialize)]
struct SampleSummary {
    vertices: usize,
    bbox: BboxOut,
    queries: usize,
    in_bbox: usize,
    inside: usize,
}

fn sample(n: usize, seed: u64, queries: usize, margin: Coord, out: Option<String>) -> Result<()> {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        ..StarCfg::default()
    };
    let tok = ReplayToken { seed, index: 0 };
    let poly = draw_star_polygon(cfg, tok).context("drawing polygon")?;
    let pts = draw_points(poly.bounding_box().expanded(margin), queries, tok.next());
    let summary = SampleSummary {
        vertices: poly.vertices().len(),
        bbox: poly.bounding_box().into(),
        queries: pts.len(),
        in_bbox: pts.iter().filter(|&&p| poly.in_bounding_box(p)).count(),
        inside: pts.iter().filter(|&&p| poly.in_polygon(p)).count(),
    };
    tracing::info!(
        seed,
        vertices = summary.vertices,
        queries = summary.queries,
        inside = summary.inside,
        "sample"
    );
    let body = serde_json::to_vec_pretty(&summary)?;
    match out {
        Some(out) => {
            let out_path = Path::new(&out);
            provenance::ensure_parent(out_path)?;
            std::fs::write(out_path, &body).with_context(|| format!("writing {out}"))?;
            let params = json!({
                "vertices": n,
                "seed": seed,
                "queries": queries,
                "margin": margin,
            });
            let sidecar = provenance::write_sidecar(out_path, Payload::new("sample", params))?;
            tracing::info!(out, sidecar = %sidecar.display(), "wrote");
        }
        None => println!("{}", String::from_utf8_lossy(&body)),
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = provenance::block(&Payload::new("report", json!({})), &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
