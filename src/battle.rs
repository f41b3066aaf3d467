//! Battle resolution by summed stats

use crate::types::Creature;

/// attack + defense + speed + hp, or `None` if any stat is NaN
pub fn score(creature: &Creature) -> Option<i64> {
    creature
        .stat_rows()
        .iter()
        .try_fold(0i64, |acc, (_, stat)| stat.value().map(|v| acc.saturating_add(v)))
}

/// Winner of `a` vs `b`. Ties go to `a`. A NaN score on either side never
/// compares as greater-or-equal, so `b` wins in that case.
pub fn resolve<'a>(a: &'a Creature, b: &'a Creature) -> &'a Creature {
    match (score(a), score(b)) {
        (Some(sa), Some(sb)) if sa >= sb => a,
        _ => b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CreatureId, NewCreature, Stat};
    use proptest::prelude::*;

    fn creature(id: u64, attack: Stat, defense: Stat, speed: Stat, hp: Stat) -> Creature {
        Creature::from_new(
            CreatureId(id),
            NewCreature::new(format!("c{}", id), attack, defense, speed, hp, ""),
        )
    }

    fn plain(id: u64, stats: [i64; 4]) -> Creature {
        let [a, d, s, h] = stats;
        creature(id, a.into(), d.into(), s.into(), h.into())
    }

    #[test]
    fn celia_vs_fungus() {
        let celia = plain(0, [7, 8, 200, 20]);
        let fungus = plain(1, [10, 9, 210, 15]);
        assert_eq!(score(&celia), Some(235));
        assert_eq!(score(&fungus), Some(244));
        assert_eq!(resolve(&celia, &fungus).name, "c1");
        assert_eq!(resolve(&fungus, &celia).name, "c1");
    }

    #[test]
    fn tie_goes_to_first() {
        let a = plain(0, [1, 2, 3, 4]);
        let b = plain(1, [4, 3, 2, 1]);
        assert_eq!(resolve(&a, &b).id, CreatureId(0));
        assert_eq!(resolve(&b, &a).id, CreatureId(1));
    }

    #[test]
    fn nan_side_loses_comparison() {
        let nan = creature(0, Stat::NotANumber, 1.into(), 1.into(), 1.into());
        let weak = plain(1, [0, 0, 0, 0]);
        assert_eq!(score(&nan), None);
        assert_eq!(resolve(&nan, &weak).id, CreatureId(1));
        // NaN as the second argument still wins: a >= NaN is false
        assert_eq!(resolve(&weak, &nan).id, CreatureId(0));
    }

    #[test]
    fn score_saturates() {
        let big = plain(0, [i64::MAX, 1, 1, 1]);
        assert_eq!(score(&big), Some(i64::MAX));
    }

    proptest! {
        #[test]
        fn winner_has_score_at_least_loser(
            sa in proptest::array::uniform4(-1000i64..1000),
            sb in proptest::array::uniform4(-1000i64..1000),
        ) {
            let a = plain(0, sa);
            let b = plain(1, sb);
            let total_a: i64 = sa.iter().sum();
            let total_b: i64 = sb.iter().sum();
            let expected = if total_a >= total_b { a.id } else { b.id };
            prop_assert_eq!(resolve(&a, &b).id, expected);
        }
    }
}
