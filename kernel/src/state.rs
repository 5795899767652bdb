//! `TubeStateV1`: the flattened bottle/layer state tensor.
//!
//! # Layout
//!
//! - `bottle_count * capacity` layers, row-major by bottle.
//! - Slot 0 of a bottle is the physical top; slot `capacity - 1` the bottom.
//! - Per-bottle cached top pointer: the lowest slot index holding a
//!   non-empty layer, or `None` for a fully empty bottle.
//!
//! # Invariant
//!
//! The cached top pointer always equals the value
//! [`TubeStateV1::recompute_top`] would produce from the layer array.
//! Mutators in this crate maintain it; external callers that write layers
//! directly must recompute before handing the state to the search.
//!
//! # Value semantics
//!
//! States are plain values: every transition clones and mutates the copy.
//! No two search nodes ever alias one state.

use crate::layer::Layer;

/// The pour-sort puzzle state: a fixed grid of layers plus cached tops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TubeStateV1 {
    bottle_count: usize,
    capacity: usize,
    /// Flattened `[bottle_count * capacity]` layer grid.
    layers: Vec<Layer>,
    /// Cached top pointer per bottle.
    tops: Vec<Option<usize>>,
}

impl TubeStateV1 {
    /// Create a state with every bottle fully empty.
    #[must_use]
    pub fn new(bottle_count: usize, capacity: usize) -> Self {
        Self {
            bottle_count,
            capacity,
            layers: vec![Layer::EMPTY; bottle_count * capacity],
            tops: vec![None; bottle_count],
        }
    }

    /// Number of bottles.
    #[must_use]
    pub const fn bottle_count(&self) -> usize {
        self.bottle_count
    }

    /// Layers per bottle.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Layer at (bottle, slot). Panics if out of bounds.
    #[must_use]
    pub fn layer(&self, bottle: usize, slot: usize) -> Layer {
        self.layers[bottle * self.capacity + slot]
    }

    /// Write a layer at (bottle, slot). Panics if out of bounds.
    ///
    /// Does not touch the cached top pointer; pair with
    /// [`recompute_top`](Self::recompute_top) or an explicit
    /// [`set_top`](Self::set_top) when the write moves the surface.
    pub fn set_layer(&mut self, bottle: usize, slot: usize, layer: Layer) {
        self.layers[bottle * self.capacity + slot] = layer;
    }

    /// Cached top pointer of a bottle (`None` when fully empty).
    #[must_use]
    pub fn top_of(&self, bottle: usize) -> Option<usize> {
        self.tops[bottle]
    }

    /// Overwrite a bottle's cached top pointer.
    pub fn set_top(&mut self, bottle: usize, top: Option<usize>) {
        self.tops[bottle] = top;
    }

    /// The layer under a bottle's top pointer, or [`Layer::EMPTY`] for an
    /// empty bottle.
    #[must_use]
    pub fn top_layer(&self, bottle: usize) -> Layer {
        match self.tops[bottle] {
            Some(slot) => self.layer(bottle, slot),
            None => Layer::EMPTY,
        }
    }

    /// Recompute one bottle's top pointer from its layer column.
    ///
    /// Scans bottom-up; the pointer lands on the lowest slot index holding
    /// a non-empty layer.
    pub fn recompute_top(&mut self, bottle: usize) {
        let mut top = None;
        for slot in (0..self.capacity).rev() {
            if !self.layer(bottle, slot).is_empty() {
                top = Some(slot);
            }
        }
        self.tops[bottle] = top;
    }

    /// Recompute every bottle's top pointer.
    pub fn recompute_tops(&mut self) {
        for bottle in 0..self.bottle_count {
            self.recompute_top(bottle);
        }
    }

    /// True if the bottle holds no layers.
    #[must_use]
    pub fn is_bottle_empty(&self, bottle: usize) -> bool {
        self.tops[bottle].is_none()
    }

    /// True if the bottle has no room left (top pointer at slot 0).
    #[must_use]
    pub fn is_bottle_full(&self, bottle: usize) -> bool {
        self.tops[bottle] == Some(0)
    }

    /// Canonical serialization text: layers comma-joined per bottle,
    /// bottles `;`-terminated. `"r,b;e,e;"` is a 2x2 state with one mixed
    /// bottle and one empty bottle.
    ///
    /// This is the dedup identity: two states serialize equally iff their
    /// layer grids are equal (top pointers are derived).
    #[must_use]
    pub fn serialize(&self) -> String {
        let mut text = String::with_capacity(self.bottle_count * (self.capacity * 2 + 1));
        for bottle in 0..self.bottle_count {
            for slot in 0..self.capacity {
                if slot > 0 {
                    text.push(',');
                }
                text.push(self.layer(bottle, slot).to_char());
            }
            text.push(';');
        }
        text
    }

    /// Serialization bytes for fingerprint hashing.
    #[must_use]
    pub fn identity_bytes(&self) -> Vec<u8> {
        self.serialize().into_bytes()
    }
}
