//! Common types and data structures

use std::fmt;

/// Stable identifier handed out by the roster when a creature is appended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CreatureId(pub u64);

impl fmt::Display for CreatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single battle stat. Input that doesn't parse as a number is kept
/// as `NotANumber` instead of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stat {
    Value(i64),
    NotANumber,
}

impl Stat {
    /// Parse user text, trimming surrounding whitespace. Decimal and
    /// exponent forms are rounded to the nearest integer; values past the
    /// i64 range saturate.
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(v) = input.parse::<i64>() {
            return Stat::Value(v);
        }
        match input.parse::<f64>() {
            // `as` saturates at the i64 bounds
            Ok(v) if v.is_finite() => Stat::Value(v.round() as i64),
            _ => Stat::NotANumber,
        }
    }

    pub fn value(self) -> Option<i64> {
        match self {
            Stat::Value(v) => Some(v),
            Stat::NotANumber => None,
        }
    }
}

impl From<i64> for Stat {
    fn from(v: i64) -> Self {
        Stat::Value(v)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stat::Value(v) => write!(f, "{}", v),
            Stat::NotANumber => f.write_str("NaN"),
        }
    }
}

/// Creature record before the roster has assigned it an id
#[derive(Debug, Clone, PartialEq)]
pub struct NewCreature {
    pub name: String,
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,
    pub hp: Stat,
    pub image_url: String,
}

impl NewCreature {
    pub fn new(
        name: impl Into<String>,
        attack: impl Into<Stat>,
        defense: impl Into<Stat>,
        speed: impl Into<Stat>,
        hp: impl Into<Stat>,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            attack: attack.into(),
            defense: defense.into(),
            speed: speed.into(),
            hp: hp.into(),
            image_url: image_url.into(),
        }
    }
}

/// Creature stored in the roster. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub id: CreatureId,
    pub name: String,
    pub attack: Stat,
    pub defense: Stat,
    pub speed: Stat,
    pub hp: Stat,
    pub image_url: String,
}

impl Creature {
    pub(crate) fn from_new(id: CreatureId, new: NewCreature) -> Self {
        Self {
            id,
            name: new.name,
            attack: new.attack,
            defense: new.defense,
            speed: new.speed,
            hp: new.hp,
            image_url: new.image_url,
        }
    }

    /// Stats in display order, paired with their card labels
    pub fn stat_rows(&self) -> [(&'static str, Stat); 4] {
        [
            ("Attack", self.attack),
            ("Defense", self.defense),
            ("Speed", self.speed),
            ("HP", self.hp),
        ]
    }
}

/// Where the arena is in the select → battle → reset cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Empty,
    OneSelected,
    /// Two selected, battle can start
    Ready,
    /// Winner computed, only a reset moves on
    Resolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_parse_trims_whitespace() {
        assert_eq!(Stat::parse(" 12 "), Stat::Value(12));
        assert_eq!(Stat::parse("-3"), Stat::Value(-3));
    }

    #[test]
    fn stat_parse_non_numeric_is_nan() {
        assert_eq!(Stat::parse("abc"), Stat::NotANumber);
        assert_eq!(Stat::parse(""), Stat::NotANumber);
        assert_eq!(Stat::parse("inf"), Stat::NotANumber);
        assert_eq!(Stat::parse("NaN"), Stat::NotANumber);
    }

    #[test]
    fn stat_parse_accepts_decimal_and_exponent() {
        assert_eq!(Stat::parse("300.5"), Stat::Value(301));
        assert_eq!(Stat::parse("1e3"), Stat::Value(1000));
        assert_eq!(Stat::parse("-2.4"), Stat::Value(-2));
        assert_eq!(Stat::parse("1e30"), Stat::Value(i64::MAX));
        assert_eq!(Stat::parse("99999999999999999999"), Stat::Value(i64::MAX));
    }

    #[test]
    fn stat_display() {
        assert_eq!(Stat::Value(210).to_string(), "210");
        assert_eq!(Stat::NotANumber.to_string(), "NaN");
    }
}
