//! Upward sweep over sorted events.
//!
//! Between two consecutive event positions the cross-section of the union is
//! constant, so the strip ("slab") contributes `thickness * active_length`.
//! `SweepEngine::run` hands each slab of positive thickness to a visitor that
//! may stop the sweep early; the total-area pass and the split pass are two
//! visitors over the same walk, so both see bit-identical slab areas.

use std::ops::ControlFlow;

use crate::compress::CompressedCoords;
use crate::events::Event;
use crate::segtree::SegmentTree;

/// Strip `[low, high]` along the sweep axis with a constant covered
/// cross-section of `active_length`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Slab {
    pub low: f64,
    pub high: f64,
    pub active_length: f64,
}

impl Slab {
    #[inline]
    pub fn thickness(&self) -> f64 {
        self.high - self.low
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.thickness() * self.active_length
    }
}

/// One sweep pass: sorted events plus a tree of its own.
///
/// Each engine builds a fresh zeroed tree; trees are never shared between
/// passes.
pub struct SweepEngine<'a> {
    events: &'a [Event],
    tree: SegmentTree<'a>,
}

impl<'a> SweepEngine<'a> {
    pub fn new(events: &'a [Event], coords: &'a CompressedCoords) -> Self {
        Self {
            events,
            tree: SegmentTree::build(coords.as_slice()),
        }
    }

    /// Walk all events in order. Before applying the event at position `p`,
    /// the slab `[prev, p]` is passed to `visit` if it has positive thickness.
    pub fn run<B>(mut self, mut visit: impl FnMut(Slab) -> ControlFlow<B>) -> ControlFlow<B> {
        let Some(first) = self.events.first() else {
            return ControlFlow::Continue(());
        };
        let mut prev = first.at;
        for ev in self.events {
            if ev.at - prev > 0.0 {
                let slab = Slab {
                    low: prev,
                    high: ev.at,
                    active_length: self.tree.get_active_length(),
                };
                if let ControlFlow::Break(b) = visit(slab) {
                    return ControlFlow::Break(b);
                }
            }
            self.tree.update_range(ev.low, ev.high, ev.delta());
            prev = ev.at;
        }
        ControlFlow::Continue(())
    }

    /// Exact union area (pass 1).
    pub fn total_area(self) -> f64 {
        let mut total = 0.0;
        let _ = self.run(|slab| {
            total += slab.area();
            ControlFlow::<()>::Continue(())
        });
        total
    }
}
