//! Random star-shaped integer polygons (radial jitter + replay tokens).
//!
//! Purpose
//! - Deterministic polygon and query-point streams for benches, the CLI
//!   `sample` command and tests.
//!
//! Model
//! - Start from `n` equally spaced angles around `center`, add bounded angular
//!   and radial jitter, sort by angle, round to the integer lattice and close
//!   the ring. Sorted angles around a common center give a star-shaped,
//!   usually simple polygon; rounding can merge neighbours, which are deduped.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::polygon::{Polygon, PolygonError};
use super::types::{BoundingBox, Coord, Point};

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Star polygon sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    pub vertex_count: VertexCount,
    /// Base radius in lattice units.
    pub radius: Coord,
    /// Radii are `radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`. Clamped to [0, 0.95].
    pub radial_jitter: f64,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    pub center: Point,
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            radius: 200,
            radial_jitter: 0.4,
            angle_jitter_frac: 0.3,
            center: Point::new(300, 300),
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a closed star-shaped polygon around `cfg.center`.
///
/// Fails only if rounding lands a vertex at `x == Coord::MIN` (absurd configs).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Result<Polygon, PolygonError> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = f64::from(cfg.radius.max(1));
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = rng.gen::<f64>() * std::f64::consts::TAU;
    let mut angles: Vec<f64> = (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            phase + (k as f64) * delta + jitter
        })
        .collect();
    angles.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let c = Vector2::new(f64::from(cfg.center.x), f64::from(cfg.center.y));
    let mut pts: Vec<Point> = angles
        .into_iter()
        .map(|th| {
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let v = c + Vector2::new(th.cos(), th.sin()) * (r0 * (1.0 + u));
            // `as` saturates on out-of-range floats.
            Point::new(v.x.round() as Coord, v.y.round() as Coord)
        })
        .collect();
    pts.dedup();
    Polygon::closed(pts)
}

/// Draw `count` lattice points uniformly from `region` (inclusive).
///
/// Returns an empty list for an empty region.
pub fn draw_points(region: BoundingBox, count: usize, tok: ReplayToken) -> Vec<Point> {
    if region.is_empty() {
        return Vec::new();
    }
    let mut rng = tok.to_std_rng();
    (0..count)
        .map(|_| {
            Point::new(
                rng.gen_range(region.xmin..=region.xmax),
                rng.gen_range(region.ymin..=region.ymax),
            )
        })
        .collect()
}
