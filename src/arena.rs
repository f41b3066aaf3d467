//! Arena - the single store for roster, selection and battle outcome.
//!
//! The UI never touches these pieces directly; every click goes through one
//! of the operations here so the select → battle → reset cycle stays
//! consistent.

use crate::battle;
use crate::form::{CreatureForm, FormError};
use crate::roster::Roster;
use crate::selection::Selection;
use crate::types::{Creature, CreatureId, NewCreature, Phase};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct Arena {
    roster: Roster,
    selection: Selection,
    outcome: Option<CreatureId>,
}

impl Arena {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            selection: Selection::new(),
            outcome: None,
        }
    }

    pub fn seeded() -> Self {
        Self::new(Roster::seeded())
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn is_selected(&self, id: CreatureId) -> bool {
        self.selection.contains(id)
    }

    /// Append a creature. Ids are stable, so an in-progress selection
    /// stays valid and is left alone.
    pub fn add_creature(&mut self, new: NewCreature) -> CreatureId {
        let id = self.roster.append(new);
        info!(id = %id, roster_size = self.roster.len(), "Creature added to roster");
        id
    }

    /// Validate the add-creature form and append the result. Nothing is
    /// appended when the form is rejected.
    pub fn add_from_form(&mut self, form: &CreatureForm) -> Result<CreatureId, FormError> {
        let new = form.submit()?;
        Ok(self.add_creature(new))
    }

    /// Card click. Ignored once a winner is on screen; otherwise follows
    /// the selection tracker's add-only policy.
    pub fn select(&mut self, id: CreatureId) -> bool {
        if self.outcome.is_some() || self.roster.get(id).is_none() {
            return false;
        }
        let changed = self.selection.toggle_or_add(id);
        if changed {
            debug!(id = %id, selected = self.selection.len(), "Creature selected");
        }
        changed
    }

    pub fn phase(&self) -> Phase {
        match (self.outcome, self.selection.len()) {
            (Some(_), _) => Phase::Resolved,
            (None, 0) => Phase::Empty,
            (None, 1) => Phase::OneSelected,
            (None, _) => Phase::Ready,
        }
    }

    pub fn can_battle(&self) -> bool {
        self.phase() == Phase::Ready
    }

    pub fn can_reset(&self) -> bool {
        !self.selection.is_empty() || self.outcome.is_some()
    }

    /// Resolve the current pair. Does nothing unless exactly two are
    /// selected and no winner has been computed yet.
    pub fn start_battle(&mut self) -> Option<&Creature> {
        if !self.can_battle() {
            return None;
        }
        let (a, b) = self.selection.pair()?;
        let first = self.roster.get(a)?;
        let second = self.roster.get(b)?;
        let winner = battle::resolve(first, second);
        info!(
            first = %first.name,
            first_score = ?battle::score(first),
            second = %second.name,
            second_score = ?battle::score(second),
            winner = %winner.name,
            "Battle resolved"
        );
        self.outcome = Some(winner.id);
        self.winner()
    }

    pub fn winner(&self) -> Option<&Creature> {
        self.outcome.and_then(|id| self.roster.get(id))
    }

    /// Clear selection and outcome, ready for the next pair
    pub fn new_battle(&mut self) {
        self.selection.clear();
        self.outcome = None;
        debug!("Arena reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select_index(arena: &mut Arena, index: usize) -> bool {
        let id = arena.roster().iter().nth(index).unwrap().id;
        arena.select(id)
    }

    #[test]
    fn seeded_battle_scenario() {
        let mut arena = Arena::seeded();
        assert_eq!(arena.phase(), Phase::Empty);
        assert!(!arena.can_battle());
        assert!(!arena.can_reset());

        select_index(&mut arena, 0);
        assert_eq!(arena.phase(), Phase::OneSelected);
        assert!(arena.can_reset());
        select_index(&mut arena, 1);
        assert_eq!(arena.phase(), Phase::Ready);
        assert!(arena.can_battle());

        let winner = arena.start_battle().map(|c| c.name.clone());
        assert_eq!(winner.as_deref(), Some("Fungus"));
        assert_eq!(arena.phase(), Phase::Resolved);
        assert!(!arena.can_battle());
        assert!(arena.can_reset());

        arena.new_battle();
        assert!(arena.selection().is_empty());
        assert!(arena.winner().is_none());
        assert!(!arena.can_battle());
        assert_eq!(arena.phase(), Phase::Empty);
    }

    #[test]
    fn battle_needs_exactly_two() {
        let mut arena = Arena::seeded();
        assert!(arena.start_battle().is_none());
        select_index(&mut arena, 3);
        assert!(arena.start_battle().is_none());
        assert!(arena.winner().is_none());
    }

    #[test]
    fn second_battle_without_reset_is_refused() {
        let mut arena = Arena::seeded();
        select_index(&mut arena, 5);
        select_index(&mut arena, 2);
        assert_eq!(arena.start_battle().map(|c| c.name.clone()).as_deref(), Some("Roz"));
        assert!(arena.start_battle().is_none());
        assert_eq!(arena.winner().map(|c| c.name.as_str()), Some("Roz"));
    }

    #[test]
    fn selection_locked_while_resolved() {
        let mut arena = Arena::seeded();
        select_index(&mut arena, 0);
        select_index(&mut arena, 1);
        arena.start_battle();
        assert!(!select_index(&mut arena, 2));
        assert_eq!(arena.selection().len(), 2);
    }

    #[test]
    fn append_keeps_selection_valid() {
        let mut arena = Arena::seeded();
        select_index(&mut arena, 4);
        let new_id = arena.add_creature(NewCreature::new("Boo", 1, 1, 1, 1, ""));
        assert_eq!(arena.selection().len(), 1);
        assert!(arena.select(new_id));
        assert_eq!(arena.start_battle().map(|c| c.name.clone()).as_deref(), Some("Randall"));
    }

    fn form(name: &str, attack: &str) -> CreatureForm {
        CreatureForm {
            name: name.into(),
            attack: attack.into(),
            defense: "1".into(),
            speed: "1".into(),
            hp: "1".into(),
            image_url: String::new(),
        }
    }

    #[test]
    fn blank_form_appends_nothing() {
        let mut arena = Arena::seeded();
        select_index(&mut arena, 0);
        assert_eq!(arena.add_from_form(&form("  ", "5")), Err(FormError::MissingName));
        assert_eq!(arena.roster().len(), 6);
        assert_eq!(arena.phase(), Phase::OneSelected);
    }

    #[test]
    fn decimal_stat_creature_can_win() {
        let mut arena = Arena::seeded();
        let id = arena.add_from_form(&form("Sulley", "300.5")).unwrap();
        assert_eq!(arena.roster().len(), 7);
        select_index(&mut arena, 0);
        arena.select(id);
        assert_eq!(arena.start_battle().map(|c| c.name.clone()).as_deref(), Some("Sulley"));
    }

    #[test]
    fn clear_from_any_state() {
        let mut arena = Arena::seeded();
        arena.new_battle();
        assert_eq!(arena.phase(), Phase::Empty);

        select_index(&mut arena, 1);
        arena.new_battle();
        assert_eq!(arena.phase(), Phase::Empty);
        assert!(!arena.can_reset());
    }

    #[test]
    fn unknown_id_not_selectable() {
        let mut arena = Arena::seeded();
        assert!(!arena.select(CreatureId(1234)));
        assert!(arena.selection().is_empty());
    }
}
