//! Roster store - the ordered list of creatures available for battle

use crate::constants::SEED_IMAGES_BASE_URL;
use crate::types::{Creature, CreatureId, NewCreature};
use tracing::debug;

/// (name, attack, defense, speed, hp) for the starting roster
const SEED: [(&str, i64, i64, i64, i64); 6] = [
    ("Celia", 7, 8, 200, 20),
    ("Fungus", 10, 9, 210, 15),
    ("James", 9, 9, 190, 12),
    ("Mike", 8, 9, 180, 10),
    ("Randall", 8, 8, 170, 11),
    ("Roz", 7, 8, 250, 9),
];

/// Append-only, insertion-ordered creature list
#[derive(Debug, Default)]
pub struct Roster {
    creatures: Vec<Creature>,
    next_id: u64,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Roster preloaded with the six starting monsters
    pub fn seeded() -> Self {
        let mut roster = Self::new();
        for (name, attack, defense, speed, hp) in SEED {
            roster.append(NewCreature::new(
                name,
                attack,
                defense,
                speed,
                hp,
                format!("{}/{}.jpg", SEED_IMAGES_BASE_URL, name),
            ));
        }
        roster
    }

    /// Add a creature to the end and return the id it was given
    pub fn append(&mut self, new: NewCreature) -> CreatureId {
        let id = CreatureId(self.next_id);
        self.next_id += 1;
        debug!(id = %id, name = %new.name, "Creature appended");
        self.creatures.push(Creature::from_new(id, new));
        id
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Creature> {
        self.creatures.iter()
    }

    pub fn get(&self, id: CreatureId) -> Option<&Creature> {
        self.position(id).map(|i| &self.creatures[i])
    }

    /// Current index of a creature in display order
    pub fn position(&self, id: CreatureId) -> Option<usize> {
        // Ids are handed out in push order, so the list is sorted by id
        self.creatures.binary_search_by_key(&id, |c| c.id).ok()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Creature;
    type IntoIter = std::slice::Iter<'a, Creature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Stat;

    #[test]
    fn seeded_roster_has_six_in_order() {
        let roster = Roster::seeded();
        let names: Vec<&str> = roster.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Celia", "Fungus", "James", "Mike", "Randall", "Roz"]);

        let fungus = roster.get(CreatureId(1)).unwrap();
        assert_eq!(fungus.attack, Stat::Value(10));
        assert_eq!(fungus.speed, Stat::Value(210));
        assert_eq!(
            fungus.image_url,
            "https://raw.githubusercontent.com/boazcosta/images/main/Fungus.jpg"
        );
    }

    #[test]
    fn append_preserves_order_and_assigns_fresh_ids() {
        let mut roster = Roster::seeded();
        let a = roster.append(NewCreature::new("Sulley", 12, 12, 150, 30, ""));
        let b = roster.append(NewCreature::new("Sulley", 1, 1, 1, 1, ""));

        assert_ne!(a, b);
        assert_eq!(roster.len(), 8);
        assert_eq!(roster.position(a), Some(6));
        assert_eq!(roster.position(b), Some(7));
        assert_eq!(roster.iter().last().map(|c| c.id), Some(b));
    }

    #[test]
    fn unknown_id_is_none() {
        let roster = Roster::seeded();
        assert!(roster.get(CreatureId(99)).is_none());
        assert!(Roster::new().is_empty());
    }
}
