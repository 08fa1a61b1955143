//! Tooltip text for stats and items
//!
//! Only the text content is produced here; layout and rendering belong to
//! the presentation layer.

use crate::item::{InstanceId, Item};
use crate::stat_block::{round_to_places, ModifierKind, StatValue};
use crate::types::StatKind;

/// Name used when a modifier's source cannot be resolved
const UNKNOWN_SOURCE: &str = "Unknown";

/// Text content of a stat tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatTooltip {
    /// Stat name with its first letter upper-cased
    pub name: String,
    /// `"<value> (<base> + <bonus>)"`
    pub value_text: String,
    /// One `"<source>: +N"` or `"<source>: +N%"` line per modifier, in application order
    pub modifier_lines: Vec<String>,
}

impl StatTooltip {
    /// Build the tooltip, resolving modifier sources to display names with `source_name`
    pub fn build<'a>(
        name: &str,
        stat: &StatValue,
        source_name: impl Fn(InstanceId) -> Option<&'a str>,
    ) -> Self {
        let value_text = format!("{} ({} + {})", stat.value(), stat.base_value(), stat.bonus());

        let modifier_lines = stat
            .modifiers()
            .map(|m| {
                let source = m.source().and_then(&source_name).unwrap_or(UNKNOWN_SOURCE);
                let mut line = format!("{}: ", source);
                if m.value() > 0.0 {
                    line.push('+');
                }
                let amount = match m.kind() {
                    ModifierKind::Flat => format!("{}", m.value()),
                    ModifierKind::PercentAdd | ModifierKind::PercentMult => {
                        format!("{}%", round_to_places(m.value() * 100.0, 4))
                    }
                };
                line.push_str(&amount);
                line
            })
            .collect();

        StatTooltip {
            name: first_letter_upper(name),
            value_text,
            modifier_lines,
        }
    }

    /// All lines joined for plain-text display
    pub fn modifiers_text(&self) -> String {
        self.modifier_lines.join("\n")
    }
}

/// Text content of an equippable item's tooltip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemTooltip {
    pub name: String,
    pub category: String,
    /// One line per non-zero bonus, e.g. `"+5 Melee Damage"` or `"+10% Health"`
    pub stat_lines: Vec<String>,
}

impl ItemTooltip {
    /// `None` for items that are not equippable
    pub fn for_item(item: &Item) -> Option<Self> {
        let bonuses = item.equipment()?;

        let flats = [
            (StatKind::MeleeDamage, bonuses.melee_flat as f64),
            (StatKind::RangedDamage, bonuses.ranged_flat as f64),
            (StatKind::Health, bonuses.health_flat as f64),
        ];
        let percents = [
            (StatKind::MeleeDamage, bonuses.melee_percent),
            (StatKind::RangedDamage, bonuses.ranged_percent),
            (StatKind::Health, bonuses.health_percent),
        ];

        let mut stat_lines = Vec::new();
        for (kind, value) in flats {
            if value != 0.0 {
                stat_lines.push(format!("{}{} {}", sign(value), value, kind.label()));
            }
        }
        for (kind, value) in percents {
            if value != 0.0 {
                let percent = round_to_places(value * 100.0, 4);
                stat_lines.push(format!("{}{}% {}", sign(percent), percent, kind.label()));
            }
        }

        Some(ItemTooltip {
            name: item.name().to_string(),
            category: bonuses.category.to_string(),
            stat_lines,
        })
    }
}

fn sign(value: f64) -> &'static str {
    if value > 0.0 {
        "+"
    } else {
        ""
    }
}

fn first_letter_upper(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
