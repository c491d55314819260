//! Power aggregation over equipped items and level.

use crate::domain::OwnedItem;

/// Level contribution to power: 10 per full five levels, 5 per remainder.
pub fn level_power(level: i64) -> i64 {
    (level / 5) * 10 + (level % 5) * 5
}

/// Total power: every stat bonus on every equipped item, plus the level
/// bonus. Derived on demand, never persisted.
pub fn total_power(items: &[OwnedItem], level: i64) -> i64 {
    let equipped_bonus: i64 = items
        .iter()
        .filter(|item| item.record.is_equipped)
        .map(|item| item.definition.total_bonus())
        .sum();

    equipped_bonus + level_power(level)
}
