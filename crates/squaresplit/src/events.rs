//! Sweep events: each box enters at its bottom edge and exits at its top edge.
//!
//! Events are ordered by sweep position. A zero-length step between two events
//! contributes no area, so tie order never changes a result; ties still put
//! enters before exits so a box whose height rounds to zero cannot drive a
//! counter below zero.

use std::cmp::Ordering;

use crate::types::Rect;

/// Enter (+1) or exit (-1) of one box's cross-axis range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum EdgeKind {
    Enter,
    Exit,
}

impl EdgeKind {
    #[inline]
    pub fn delta(self) -> i32 {
        match self {
            EdgeKind::Enter => 1,
            EdgeKind::Exit => -1,
        }
    }
}

/// Boundary event at sweep position `at` covering `[low, high]` on the cross-axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Event {
    pub at: f64,
    pub kind: EdgeKind,
    pub low: f64,
    pub high: f64,
}

impl Event {
    #[inline]
    pub fn delta(&self) -> i32 {
        self.kind.delta()
    }
}

/// Two events per box, sorted ascending by sweep position.
pub fn build_events(rects: &[Rect]) -> Vec<Event> {
    let mut events = Vec::with_capacity(rects.len() * 2);
    for r in rects {
        events.push(Event {
            at: r.min.y,
            kind: EdgeKind::Enter,
            low: r.min.x,
            high: r.max.x,
        });
        events.push(Event {
            at: r.max.y,
            kind: EdgeKind::Exit,
            low: r.min.x,
            high: r.max.x,
        });
    }
    events.sort_unstable_by(by_position);
    events
}

#[inline]
fn by_position(a: &Event, b: &Event) -> Ordering {
    a.at.total_cmp(&b.at).then(a.kind.cmp(&b.kind))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Square;

    #[test]
    fn two_events_per_square_sorted() {
        let rects: Vec<Rect> = [(0.0, 5.0, 1.0), (2.0, -1.0, 3.0)]
            .iter()
            .map(|&s| Square::from(s).bounds())
            .collect();
        let ev = build_events(&rects);
        assert_eq!(ev.len(), 4);
        let positions: Vec<f64> = ev.iter().map(|e| e.at).collect();
        assert_eq!(positions, vec![-1.0, 2.0, 5.0, 6.0]);
        assert_eq!(ev[0].kind, EdgeKind::Enter);
        assert_eq!((ev[0].low, ev[0].high), (2.0, 5.0));
        assert_eq!(ev[1].delta(), -1);
        assert_eq!(ev[3].delta(), -1);
        assert_eq!(ev.iter().map(Event::delta).sum::<i32>(), 0);
    }

    #[test]
    fn enters_precede_exits_at_equal_positions() {
        // height 1 vanishes next to 1e20, width does not
        let rects = [
            Square::new(0.0, 1e20, 1.0).bounds(),
            Square::new(0.0, -1.0, 1.0).bounds(),
        ];
        let ev = build_events(&rects);
        assert_eq!(ev[2].at, ev[3].at);
        assert_eq!((ev[2].kind, ev[3].kind), (EdgeKind::Enter, EdgeKind::Exit));
    }

    #[test]
    fn zero_side_square_still_emits_a_pair() {
        let ev = build_events(&[Square::new(1.0, 1.0, 0.0).bounds()]);
        assert_eq!(ev.len(), 2);
        assert!(ev.iter().all(|e| e.at == 1.0 && e.low == e.high));
    }
}
