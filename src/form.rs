//! Add-creature form state and validation

use crate::types::{NewCreature, Stat};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("creature name is required")]
    MissingName,
}

/// Raw text as typed into the add-creature modal
#[derive(Debug, Clone, Default)]
pub struct CreatureForm {
    pub name: String,
    pub attack: String,
    pub defense: String,
    pub speed: String,
    pub hp: String,
    pub image_url: String,
}

impl CreatureForm {
    pub fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    /// Build a creature from the form. A blank name rejects the whole
    /// submission; unparsable stats are kept as NaN.
    pub fn submit(&self) -> Result<NewCreature, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        Ok(NewCreature {
            name: name.to_string(),
            attack: Stat::parse(&self.attack),
            defense: Stat::parse(&self.defense),
            speed: Stat::parse(&self.speed),
            hp: Stat::parse(&self.hp),
            image_url: self.image_url.trim().to_string(),
        })
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> CreatureForm {
        CreatureForm {
            name: "  Sulley ".into(),
            attack: "12".into(),
            defense: " 11".into(),
            speed: "150".into(),
            hp: "30".into(),
            image_url: " https://github.com/u/r/blob/main/sulley.png ".into(),
        }
    }

    #[test]
    fn submit_trims_and_parses() {
        let new = filled().submit().unwrap();
        assert_eq!(new.name, "Sulley");
        assert_eq!(new.defense, Stat::Value(11));
        assert_eq!(new.image_url, "https://github.com/u/r/blob/main/sulley.png");
    }

    #[test]
    fn blank_name_is_rejected() {
        let mut form = filled();
        form.name = "   ".into();
        assert!(!form.has_name());
        assert_eq!(form.submit(), Err(FormError::MissingName));
    }

    #[test]
    fn bad_stats_become_nan() {
        let mut form = filled();
        form.attack = "abc".into();
        form.hp.clear();
        form.image_url.clear();
        let new = form.submit().unwrap();
        assert_eq!(new.attack, Stat::NotANumber);
        assert_eq!(new.hp, Stat::NotANumber);
        assert_eq!(new.image_url, "");
    }

    #[test]
    fn decimal_stats_are_numbers() {
        let mut form = filled();
        form.attack = "300.5".into();
        form.speed = "1e3".into();
        let new = form.submit().unwrap();
        assert_ne!(new.attack, Stat::NotANumber);
        assert_eq!(new.attack, Stat::Value(301));
        assert_eq!(new.speed, Stat::Value(1000));
    }

    #[test]
    fn reset_clears_fields() {
        let mut form = filled();
        form.reset();
        assert!(!form.has_name());
        assert!(form.speed.is_empty());
    }
}
