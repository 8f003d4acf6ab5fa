//! Headless drawing session: pending vertices, finalized polygons, query cursor.
//!
//! Purpose
//! - Hold all mutable state of the interactive point-in-polygon tool so a UI
//!   driver (window loop, script replay, tests) owns it explicitly. The
//!   geometry kernel in `geom2` stays stateless.
//!
//! Flow
//! - Clicks append vertices to the pending ring while drawing.
//! - `ClosePolygon` finalizes the pending ring (closing it explicitly).
//! - `Finish` closes any pending ring and switches to detection; from then on
//!   `hits()`/`frame()` report which polygons contain the cursor.
//! - `Clear` drops everything and returns to drawing.
//!
//! Coordinates
//! - Window input has its origin at the top-left; world coordinates (used by
//!   polygons and the cursor) have it at the bottom-left: `(x, height - y)`.

use crate::geom2::{Coord, Point, Polygon};

/// Window and input configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionCfg {
    pub width: Coord,
    pub height: Coord,
    /// Cursor displacement per nudge key.
    pub nudge_step: Coord,
}

impl Default for SessionCfg {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            nudge_step: 5,
        }
    }
}

impl SessionCfg {
    /// Window → world coordinates (flip y).
    #[inline]
    pub fn to_world(&self, x: Coord, y: Coord) -> Point {
        Point::new(x, self.height.saturating_sub(y))
    }

    #[inline]
    fn in_window(&self, x: Coord, y: Coord) -> bool {
        (0..=self.width).contains(&x) && (0..=self.height).contains(&y)
    }
}

/// Index of a finalized polygon within its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PolygonId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nudge {
    Up,
    Down,
    Left,
    Right,
}

/// Keyboard commands understood by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Nudge(Nudge),
    ClosePolygon,
    Finish,
    Clear,
}

impl Command {
    /// Case-insensitive key binding; `None` for unbound keys.
    pub fn from_key(key: char) -> Option<Self> {
        let cmd = match key.to_ascii_lowercase() {
            'q' => Command::Quit,
            'i' => Command::Nudge(Nudge::Up),
            'k' => Command::Nudge(Nudge::Down),
            'j' => Command::Nudge(Nudge::Left),
            'l' => Command::Nudge(Nudge::Right),
            'c' => Command::ClosePolygon,
            'd' => Command::Finish,
            'x' => Command::Clear,
            _ => return None,
        };
        Some(cmd)
    }
}

/// Whether the driver should keep running after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Render state of one finalized polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PolygonView<'a> {
    pub id: PolygonId,
    pub vertices: &'a [Point],
    /// Cursor is inside (drawn highlighted).
    pub highlighted: bool,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame<'a> {
    pub polygons: Vec<PolygonView<'a>>,
    /// Open line strip of the ring being drawn.
    pub pending: &'a [Point],
    /// Query point, shown only while detecting.
    pub cursor: Option<Point>,
}

#[derive(Clone, Debug)]
pub struct Session {
    cfg: SessionCfg,
    cursor: Point,
    pending: Vec<Point>,
    polygons: Vec<Polygon>,
    detecting: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionCfg::default())
    }
}

impl Session {
    pub fn new(cfg: SessionCfg) -> Self {
        Self {
            cfg,
            cursor: Point::new(cfg.width / 2, cfg.height / 2),
            pending: Vec::new(),
            polygons: Vec::new(),
            detecting: false,
        }
    }

    #[inline]
    pub fn cfg(&self) -> SessionCfg {
        self.cfg
    }

    #[inline]
    pub fn cursor(&self) -> Point {
        self.cursor
    }

    #[inline]
    pub fn pending(&self) -> &[Point] {
        &self.pending
    }

    #[inline]
    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    pub fn polygon(&self, id: PolygonId) -> Option<&Polygon> {
        self.polygons.get(id.0)
    }

    #[inline]
    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    /// Left click at window coordinates; ignored once detection started.
    pub fn click(&mut self, x: Coord, y: Coord) {
        if !self.detecting {
            self.pending.push(self.cfg.to_world(x, y));
        }
    }

    /// Pointer motion at window coordinates; ignored outside the window.
    pub fn pointer_moved(&mut self, x: Coord, y: Coord) {
        if self.cfg.in_window(x, y) {
            self.cursor = self.cfg.to_world(x, y);
        }
    }

    pub fn nudge(&mut self, dir: Nudge) {
        let s = self.cfg.nudge_step;
        let c = &mut self.cursor;
        match dir {
            Nudge::Up => c.y = c.y.saturating_add(s),
            Nudge::Down => c.y = c.y.saturating_sub(s),
            Nudge::Left => c.x = c.x.saturating_sub(s),
            Nudge::Right => c.x = c.x.saturating_add(s),
        }
    }

    /// Close and finalize the pending ring. No-op (None) when nothing is pending.
    ///
    /// The first vertex is always appended, even when the last click already
    /// landed on it; the extra zero-length edge takes part in ray parity.
    pub fn close_polygon(&mut self) -> Option<PolygonId> {
        let mut vertices = std::mem::take(&mut self.pending);
        let n = vertices.len();
        if let Some(&first) = vertices.first() {
            vertices.push(first);
        }
        match Polygon::new(vertices) {
            Ok(poly) => {
                let id = PolygonId(self.polygons.len());
                self.polygons.push(poly);
                tracing::debug!(id = id.0, vertices = n, "polygon finalized");
                Some(id)
            }
            Err(err) => {
                if n > 0 {
                    tracing::debug!(%err, "pending ring discarded");
                }
                None
            }
        }
    }

    /// Stop drawing and start detection, closing any pending ring first.
    pub fn finish(&mut self) {
        if self.detecting {
            return;
        }
        if !self.pending.is_empty() {
            self.close_polygon();
        }
        self.detecting = true;
        tracing::debug!(polygons = self.polygons.len(), "detection started");
    }

    pub fn clear(&mut self) {
        self.polygons.clear();
        self.pending.clear();
        self.detecting = false;
        tracing::debug!("session cleared");
    }

    pub fn apply(&mut self, cmd: Command) -> Flow {
        match cmd {
            Command::Quit => return Flow::Quit,
            Command::Nudge(dir) => self.nudge(dir),
            Command::ClosePolygon => {
                self.close_polygon();
            }
            Command::Finish => self.finish(),
            Command::Clear => self.clear(),
        }
        Flow::Continue
    }

    /// Ids of polygons containing the cursor; empty while drawing.
    pub fn hits(&self) -> Vec<PolygonId> {
        if !self.detecting {
            return Vec::new();
        }
        self.polygons
            .iter()
            .enumerate()
            .filter(|(_, poly)| poly.in_polygon(self.cursor))
            .map(|(i, _)| PolygonId(i))
            .collect()
    }

    pub fn frame(&self) -> Frame<'_> {
        let polygons = self
            .polygons
            .iter()
            .enumerate()
            .map(|(i, poly)| PolygonView {
                id: PolygonId(i),
                vertices: poly.vertices(),
                highlighted: self.detecting && poly.in_polygon(self.cursor),
            })
            .collect();
        Frame {
            polygons,
            pending: &self.pending,
            cursor: self.detecting.then_some(self.cursor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> SessionCfg {
        SessionCfg {
            width: 100,
            height: 100,
            nudge_step: 5,
        }
    }

    /// Draws the world square (10,10)-(40,40) via window clicks.
    fn draw_square(s: &mut Session) {
        for (x, y) in [(10, 90), (40, 90), (40, 60), (10, 60)] {
            s.click(x, y);
        }
    }

    #[test]
    fn key_bindings() {
        assert_eq!(Command::from_key('q'), Some(Command::Quit));
        assert_eq!(Command::from_key('Q'), Some(Command::Quit));
        assert_eq!(Command::from_key('I'), Some(Command::Nudge(Nudge::Up)));
        assert_eq!(Command::from_key('k'), Some(Command::Nudge(Nudge::Down)));
        assert_eq!(Command::from_key('j'), Some(Command::Nudge(Nudge::Left)));
        assert_eq!(Command::from_key('l'), Some(Command::Nudge(Nudge::Right)));
        assert_eq!(Command::from_key('c'), Some(Command::ClosePolygon));
        assert_eq!(Command::from_key('D'), Some(Command::Finish));
        assert_eq!(Command::from_key('x'), Some(Command::Clear));
        assert_eq!(Command::from_key('z'), None);
    }

    #[test]
    fn clicks_flip_y_and_close_ring() {
        let mut s = Session::new(cfg());
        assert_eq!(s.cursor(), Point::new(50, 50));
        draw_square(&mut s);
        assert_eq!(s.pending()[0], Point::new(10, 10));
        let id = s.close_polygon().expect("closed");
        assert_eq!(id, PolygonId(0));
        assert!(s.pending().is_empty());
        let poly = s.polygon(id).unwrap();
        assert!(poly.is_closed());
        assert_eq!(poly.vertices().len(), 5);
    }

    #[test]
    fn close_appends_first_vertex_even_when_ring_ends_on_it() {
        let mut s = Session::new(cfg());
        // U shape starting and ending on the reflex vertex (10, 10).
        for (x, y) in [
            (10, 10),
            (10, 30),
            (0, 30),
            (0, 0),
            (30, 0),
            (30, 30),
            (20, 30),
            (20, 10),
            (10, 10),
        ] {
            let w = s.cfg().height - y;
            s.click(x, w);
        }
        let id = s.close_polygon().expect("closed");
        let poly = s.polygon(id).unwrap();
        assert_eq!(poly.vertices().len(), 10);
        assert_eq!(poly.vertices()[9], Point::new(10, 10));
        // The ray from (21, 20) to (-1, 0) runs through (10, 10); the doubled
        // closing vertex keeps the count even.
        assert_eq!(poly.crossings(Point::new(21, 20)), 6);
        s.finish();
        s.pointer_moved(21, 80);
        assert!(s.hits().is_empty());
    }

    #[test]
    fn close_with_nothing_pending_is_noop() {
        let mut s = Session::new(cfg());
        assert_eq!(s.close_polygon(), None);
        assert_eq!(s.apply(Command::ClosePolygon), Flow::Continue);
        assert!(s.polygons().is_empty());
    }

    #[test]
    fn hits_only_while_detecting() {
        let mut s = Session::new(cfg());
        draw_square(&mut s);
        s.pointer_moved(20, 80); // world (20, 20)
        assert!(s.hits().is_empty());
        assert_eq!(s.frame().cursor, None);
        s.apply(Command::Finish);
        assert!(s.is_detecting());
        assert_eq!(s.polygons().len(), 1);
        assert_eq!(s.hits(), vec![PolygonId(0)]);
        let frame = s.frame();
        assert_eq!(frame.cursor, Some(Point::new(20, 20)));
        assert!(frame.polygons[0].highlighted);
        // Clicks are ignored while detecting.
        s.click(1, 1);
        assert!(s.pending().is_empty());
    }

    #[test]
    fn multiple_polygons_and_nudges() {
        let mut s = Session::new(cfg());
        draw_square(&mut s);
        s.apply(Command::ClosePolygon);
        // Second square (50,10)-(80,40) in world coordinates.
        for (x, y) in [(50, 90), (80, 90), (80, 60), (50, 60)] {
            s.click(x, y);
        }
        s.apply(Command::Finish);
        assert_eq!(s.polygons().len(), 2);

        s.pointer_moved(30, 75); // world (30, 25)
        assert_eq!(s.hits(), vec![PolygonId(0)]);
        for _ in 0..6 {
            s.apply(Command::Nudge(Nudge::Right));
        }
        assert_eq!(s.cursor(), Point::new(60, 25));
        assert_eq!(s.hits(), vec![PolygonId(1)]);
        s.apply(Command::Nudge(Nudge::Up));
        s.apply(Command::Nudge(Nudge::Up));
        s.apply(Command::Nudge(Nudge::Up));
        s.apply(Command::Nudge(Nudge::Down));
        assert_eq!(s.cursor(), Point::new(60, 35));
        s.apply(Command::Nudge(Nudge::Left));
        assert_eq!(s.cursor(), Point::new(55, 35));
        let highlighted: Vec<bool> = s.frame().polygons.iter().map(|v| v.highlighted).collect();
        assert_eq!(highlighted, vec![false, true]);
    }

    #[test]
    fn pointer_outside_window_is_ignored() {
        let mut s = Session::new(cfg());
        s.pointer_moved(-1, 10);
        s.pointer_moved(10, 101);
        assert_eq!(s.cursor(), Point::new(50, 50));
        s.pointer_moved(100, 0);
        assert_eq!(s.cursor(), Point::new(100, 100));
    }

    #[test]
    fn finish_twice_and_clear() {
        let mut s = Session::new(cfg());
        draw_square(&mut s);
        s.finish();
        s.finish();
        assert_eq!(s.polygons().len(), 1);
        s.apply(Command::Clear);
        assert!(!s.is_detecting());
        assert!(s.polygons().is_empty());
        assert!(s.hits().is_empty());
        // Drawing works again after a clear.
        s.click(5, 5);
        assert_eq!(s.pending(), &[Point::new(5, 95)]);
    }

    #[test]
    fn quit_stops_the_driver() {
        let mut s = Session::default();
        assert_eq!(s.cfg(), SessionCfg::default());
        assert_eq!(s.apply(Command::Quit), Flow::Quit);
    }
}
