//! Scripted walk through the drawing session: two squares, then a cursor sweep.
//!
//! Usage:
//!   cargo run -p pinpoly --example squares
//!
//! Prints, for each cursor position, which polygons would be drawn highlighted.

use pinpoly::session::{Command, Nudge, Session, SessionCfg};

fn main() {
    let mut s = Session::new(SessionCfg::default());
    // Window coordinates (origin top-left).
    for (x, y) in [(100, 500), (250, 500), (250, 350), (100, 350)] {
        s.click(x, y);
    }
    s.apply(Command::ClosePolygon);
    for (x, y) in [(300, 300), (500, 300), (400, 100)] {
        s.click(x, y);
    }
    s.apply(Command::Finish);

    s.pointer_moved(50, 450);
    for _ in 0..20 {
        let frame = s.frame();
        let lit: Vec<usize> = frame
            .polygons
            .iter()
            .filter(|v| v.highlighted)
            .map(|v| v.id.0)
            .collect();
        println!("cursor {:?}: highlighted {:?}", s.cursor(), lit);
        for _ in 0..5 {
            s.apply(Command::Nudge(Nudge::Right));
        }
    }
}
