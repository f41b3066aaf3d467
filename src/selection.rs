//! Selection tracker - up to two creatures picked for the next battle

use crate::types::CreatureId;

pub const MAX_SELECTED: usize = 2;

/// Ordered, duplicate-free pick list capped at two entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    picks: Vec<CreatureId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `id` unless it is already picked or the selection is full.
    /// Clicking a picked creature again does not deselect it.
    /// Returns true if the selection changed.
    pub fn toggle_or_add(&mut self, id: CreatureId) -> bool {
        if self.picks.contains(&id) || self.picks.len() >= MAX_SELECTED {
            return false;
        }
        self.picks.push(id);
        true
    }

    pub fn clear(&mut self) {
        self.picks.clear();
    }

    pub fn contains(&self, id: CreatureId) -> bool {
        self.picks.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.picks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Both picks in selection order, once exactly two are chosen
    pub fn pair(&self) -> Option<(CreatureId, CreatureId)> {
        match self.picks.as_slice() {
            [a, b] => Some((*a, *b)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reselecting_is_a_no_op() {
        let mut sel = Selection::new();
        assert!(sel.toggle_or_add(CreatureId(3)));
        assert!(!sel.toggle_or_add(CreatureId(3)));
        assert_eq!(sel.len(), 1);
        assert!(sel.contains(CreatureId(3)));
    }

    #[test]
    fn third_pick_is_ignored() {
        let mut sel = Selection::new();
        sel.toggle_or_add(CreatureId(0));
        sel.toggle_or_add(CreatureId(1));
        assert!(!sel.toggle_or_add(CreatureId(2)));
        assert_eq!(sel.pair(), Some((CreatureId(0), CreatureId(1))));
    }

    #[test]
    fn pair_keeps_click_order() {
        let mut sel = Selection::new();
        sel.toggle_or_add(CreatureId(5));
        assert_eq!(sel.pair(), None);
        sel.toggle_or_add(CreatureId(2));
        assert_eq!(sel.pair(), Some((CreatureId(5), CreatureId(2))));
    }

    #[test]
    fn clear_empties() {
        let mut sel = Selection::new();
        sel.toggle_or_add(CreatureId(0));
        sel.toggle_or_add(CreatureId(1));
        sel.clear();
        assert!(sel.is_empty());
        assert_eq!(sel.pair(), None);
    }

    proptest! {
        #[test]
        fn never_exceeds_two_or_duplicates(clicks in proptest::collection::vec(0u64..6, 0..32)) {
            let mut sel = Selection::new();
            for c in clicks {
                sel.toggle_or_add(CreatureId(c));
                prop_assert!(sel.len() <= MAX_SELECTED);
            }
            if let Some((a, b)) = sel.pair() {
                prop_assert_ne!(a, b);
            }
        }
    }
}
