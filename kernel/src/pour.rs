//! Pour transition: applicability, cost, mutation, and the goal predicate.
//!
//! A pour moves the maximal contiguous same-colored run from the top of a
//! source bottle into a destination bottle, bounded by the destination's
//! free room. Inapplicability is a normal `None` cost, not an error: the
//! expansion loop simply skips those pairs.

use crate::layer::Layer;
use crate::state::TubeStateV1;

/// A pour operator: move the top run from `src` into `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PourOpV1 {
    pub src: usize,
    pub dst: usize,
}

impl PourOpV1 {
    /// Construct a pour from `src` into `dst`.
    #[must_use]
    pub const fn new(src: usize, dst: usize) -> Self {
        Self { src, dst }
    }

    /// Operator label in `pour_<src>_<dst>` form.
    #[must_use]
    pub fn label(self) -> String {
        format!("pour_{}_{}", self.src, self.dst)
    }
}

/// True iff the pour is applicable: distinct bottles, non-empty source,
/// destination empty or matching the source's top color, and destination
/// not already full (top pointer at slot 0 means no room).
#[must_use]
pub fn can_pour(state: &TubeStateV1, op: PourOpV1) -> bool {
    let src_top = state.top_layer(op.src);
    let dst_top = state.top_layer(op.dst);

    (dst_top.is_empty() || src_top == dst_top)
        && !src_top.is_empty()
        && op.src != op.dst
        && !state.is_bottle_full(op.dst)
}

/// Number of layers the pour would move, or `None` when inapplicable.
///
/// Cost is `min(room, run)`: room is the destination's top pointer (full
/// capacity for an empty destination), run is the length of the contiguous
/// same-colored stretch at the source's top.
#[must_use]
pub fn pour_cost(state: &TubeStateV1, op: PourOpV1) -> Option<usize> {
    if !can_pour(state, op) {
        return None;
    }
    let src_top = state.top_of(op.src)?;

    let room = state.top_of(op.dst).map_or(state.capacity(), |top| top);

    let color = state.layer(op.src, src_top);
    let mut run = 0;
    for slot in src_top..state.capacity() {
        if state.layer(op.src, slot) == color {
            run += 1;
        } else {
            break;
        }
    }

    Some(room.min(run))
}

/// Apply a pour, producing the successor state.
///
/// Clones the input and moves one layer at a time, `cost` times, updating
/// both top pointers along the way; a fully drained source's top pointer
/// becomes `None`. An inapplicable pour returns the copy unchanged.
#[must_use]
pub fn pour(state: &TubeStateV1, op: PourOpV1) -> TubeStateV1 {
    let mut next = state.clone();
    let Some(cost) = pour_cost(state, op) else {
        return next;
    };
    let Some(mut src_top) = state.top_of(op.src) else {
        return next;
    };

    let color = next.layer(op.src, src_top);
    let mut dst_top = state.top_of(op.dst);

    for _ in 0..cost {
        // Room bound keeps the pointer >= 1 whenever a pour remains.
        let landing = match dst_top {
            None => next.capacity() - 1,
            Some(slot) => slot - 1,
        };
        next.set_layer(op.dst, landing, color);
        dst_top = Some(landing);
        next.set_top(op.dst, dst_top);

        next.set_layer(op.src, src_top, Layer::EMPTY);
        src_top += 1;
        next.set_top(
            op.src,
            if src_top == next.capacity() {
                None
            } else {
                Some(src_top)
            },
        );
    }

    next
}

/// Goal predicate: every bottle is fully empty or every slot holds the
/// color found at slot 0.
///
/// Comparing against slot 0 makes partially filled bottles non-goals: a
/// partial bottle's slot 0 is empty while deeper slots are not.
#[must_use]
pub fn is_goal(state: &TubeStateV1) -> bool {
    for bottle in 0..state.bottle_count() {
        if state.is_bottle_empty(bottle) {
            for slot in 0..state.capacity() {
                if !state.layer(bottle, slot).is_empty() {
                    return false;
                }
            }
        } else {
            let reference = state.layer(bottle, 0);
            for slot in 0..state.capacity() {
                if state.layer(bottle, slot) != reference {
                    return false;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse_state;

    #[test]
    fn cannot_pour_into_itself() {
        let state = parse_state("2;2;r,r;e,e;").unwrap();
        assert!(!can_pour(&state, PourOpV1::new(0, 0)));
    }

    #[test]
    fn cannot_pour_from_an_empty_bottle() {
        let state = parse_state("2;2;e,e;e,r;").unwrap();
        assert!(!can_pour(&state, PourOpV1::new(0, 1)));
    }

    #[test]
    fn cannot_pour_onto_a_different_color() {
        let state = parse_state("2;2;e,r;e,b;").unwrap();
        assert!(!can_pour(&state, PourOpV1::new(0, 1)));
    }

    #[test]
    fn cannot_pour_into_a_full_bottle() {
        let state = parse_state("2;2;e,r;r,r;").unwrap();
        assert!(!can_pour(&state, PourOpV1::new(0, 1)));
    }

    #[test]
    fn can_pour_onto_empty_or_matching_top() {
        let state = parse_state("3;2;e,r;e,r;e,e;").unwrap();
        assert!(can_pour(&state, PourOpV1::new(0, 1)), "matching color");
        assert!(can_pour(&state, PourOpV1::new(0, 2)), "empty destination");
    }

    #[test]
    fn cost_is_bounded_by_destination_room() {
        // Source has a 3-run of red; destination has room for 1.
        let state = parse_state("2;4;e,r,r,r;e,r,b,b;").unwrap();
        assert_eq!(pour_cost(&state, PourOpV1::new(0, 1)), Some(1));
    }

    #[test]
    fn cost_is_bounded_by_source_run() {
        let state = parse_state("2;4;e,e,r,b;e,e,e,e;").unwrap();
        assert_eq!(pour_cost(&state, PourOpV1::new(0, 1)), Some(1));
    }

    #[test]
    fn cost_into_empty_destination_uses_full_capacity_as_room() {
        let state = parse_state("2;4;e,r,r,r;e,e,e,e;").unwrap();
        assert_eq!(pour_cost(&state, PourOpV1::new(0, 1)), Some(3));
    }

    #[test]
    fn inapplicable_pour_costs_none() {
        let state = parse_state("2;2;r,r;b,b;").unwrap();
        assert_eq!(pour_cost(&state, PourOpV1::new(0, 1)), None);
    }

    #[test]
    fn pour_moves_the_run_and_updates_tops() {
        let state = parse_state("2;4;e,r,r,b;e,e,e,e;").unwrap();
        let next = pour(&state, PourOpV1::new(0, 1));

        assert_eq!(next.serialize(), "e,e,e,b;e,e,r,r;");
        assert_eq!(next.top_of(0), Some(3));
        assert_eq!(next.top_of(1), Some(2));
        // The input is untouched.
        assert_eq!(state.serialize(), "e,r,r,b;e,e,e,e;");
    }

    #[test]
    fn draining_a_bottle_clears_its_top_pointer() {
        let state = parse_state("2;2;r,r;e,e;").unwrap();
        let next = pour(&state, PourOpV1::new(0, 1));
        assert_eq!(next.top_of(0), None);
        assert_eq!(next.serialize(), "e,e;r,r;");
    }

    #[test]
    fn partial_pour_leaves_remainder_on_source() {
        // 2-run of red, destination has room for exactly one layer.
        let state = parse_state("2;3;e,r,r;r,b,b;").unwrap();
        assert_eq!(pour_cost(&state, PourOpV1::new(0, 1)), None, "full dst");

        let state = parse_state("2;3;r,r,b;e,e,r;").unwrap();
        let next = pour(&state, PourOpV1::new(0, 1));
        assert_eq!(next.serialize(), "e,e,b;r,r,r;");
        assert_eq!(next.top_of(0), Some(2));
        assert_eq!(next.top_of(1), Some(0));
        assert!(next.is_bottle_full(1));
    }

    #[test]
    fn goal_accepts_empty_and_full_uniform_bottles() {
        assert!(is_goal(&parse_state("2;2;r,r;e,e;").unwrap()));
        assert!(is_goal(&parse_state("3;2;r,r;b,b;e,e;").unwrap()));
        assert!(is_goal(&parse_state("1;3;e,e,e;").unwrap()));
    }

    #[test]
    fn goal_rejects_mixed_and_partial_bottles() {
        assert!(!is_goal(&parse_state("2;2;r,b;e,e;").unwrap()), "mixed");
        assert!(!is_goal(&parse_state("2;2;e,r;e,r;").unwrap()), "partial");
    }
}
