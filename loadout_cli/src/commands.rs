//! Script commands and the session that applies them to a character

use anyhow::{anyhow, bail, Context, Result};
use loadout_core::prelude::*;
use std::io::{BufRead, Write};

/// One line of a loadout script
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `give <item_id> [count]`
    Give { id: ItemId, count: u32 },
    /// `equip <inventory_index>`
    Equip(usize),
    /// `unequip <category>`
    Unequip(EquipmentCategory),
    /// `move <slotref> <slotref>`
    Move(SlotRef, SlotRef),
    Damage(f64),
    Heal(f64),
    Stats,
    Inventory,
    Equipment,
    /// `tooltip <melee|ranged|health>`
    Tooltip(StatKind),
}

impl Command {
    /// Parse one script line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let line = match line.split_once('#') {
            Some((before, _)) => before,
            None => line,
        };
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = words.collect();

        let command = match (name, args.as_slice()) {
            ("give", [id]) => Command::Give {
                id: ItemId::from(*id),
                count: 1,
            },
            ("give", [id, count]) => Command::Give {
                id: ItemId::from(*id),
                count: count
                    .parse()
                    .with_context(|| format!("bad count '{}'", count))?,
            },
            ("equip", [index]) => Command::Equip(
                index
                    .parse()
                    .with_context(|| format!("bad inventory index '{}'", index))?,
            ),
            ("unequip", [category]) => Command::Unequip(category.parse().map_err(|e| anyhow!("{}", e))?),
            ("move", [from, to]) => Command::Move(
                from.parse().map_err(|e| anyhow!("{}", e))?,
                to.parse().map_err(|e| anyhow!("{}", e))?,
            ),
            ("damage", [amount]) => Command::Damage(parse_amount(amount)?),
            ("heal", [amount]) => Command::Heal(parse_amount(amount)?),
            ("stats", []) => Command::Stats,
            ("inventory", []) => Command::Inventory,
            ("equipment", []) => Command::Equipment,
            ("tooltip", [kind]) => Command::Tooltip(kind.parse().map_err(|e| anyhow!("{}", e))?),
            (
                "give" | "equip" | "unequip" | "move" | "damage" | "heal" | "stats" | "inventory"
                | "equipment" | "tooltip",
                _,
            ) => bail!("wrong number of arguments for '{}'", name),
            _ => bail!("unknown command '{}'", name),
        };
        Ok(Some(command))
    }
}

fn parse_amount(s: &str) -> Result<f64> {
    s.parse().with_context(|| format!("bad amount '{}'", s))
}

/// A character plus the catalog its items come from
pub struct Session {
    catalog: Catalog,
    character: Character,
}

impl Session {
    pub fn new(catalog: Catalog, character: Character) -> Self {
        Session { catalog, character }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    /// Run every line of a script. Bad lines and refused commands are
    /// reported and skipped; only output errors stop the run.
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line.context("failed to read script")?;
            match Command::parse(&line) {
                Ok(Some(command)) => self.execute(&command, out)?,
                Ok(None) => {}
                Err(e) => writeln!(out, "line {}: {:#}", number + 1, e)?,
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: &Command, out: &mut impl Write) -> Result<()> {
        log::debug!("executing {:?}", command);
        match command {
            Command::Give { id, count } => self.give(id, *count, out)?,
            Command::Equip(index) => {
                let instance = self
                    .character
                    .inventory()
                    .slot(*index)
                    .and_then(|s| s.item())
                    .map(|i| i.instance_id());
                match instance {
                    Some(instance) => report(out, self.character.equip(instance))?,
                    None => writeln!(out, "refused: inventory slot {} is empty", index)?,
                }
            }
            Command::Unequip(category) => {
                let instance = self
                    .character
                    .equipment()
                    .get(*category)
                    .map(|i| i.instance_id());
                match instance {
                    Some(instance) => report(out, self.character.unequip(instance))?,
                    None => writeln!(out, "refused: nothing equipped in {}", category)?,
                }
            }
            Command::Move(from, to) => report(out, self.character.transfer(*from, *to))?,
            Command::Damage(amount) => {
                let alive = self.character.take_damage(*amount);
                writeln!(
                    out,
                    "health {}{}",
                    self.character.stat(StatKind::Health).value(),
                    if alive { "" } else { " (dead)" }
                )?;
            }
            Command::Heal(amount) => {
                self.character.heal(*amount);
                writeln!(out, "health {}", self.character.stat(StatKind::Health).value())?;
            }
            Command::Stats => self.print_stats(out)?,
            Command::Inventory => self.print_inventory(out)?,
            Command::Equipment => self.print_equipment(out)?,
            Command::Tooltip(kind) => {
                let tooltip = self.character.stat_tooltip(*kind);
                writeln!(out, "{}: {}", tooltip.name, tooltip.value_text)?;
                for line in &tooltip.modifier_lines {
                    writeln!(out, "  {}", line)?;
                }
            }
        }
        Ok(())
    }

    fn give(&mut self, id: &ItemId, count: u32, out: &mut impl Write) -> Result<()> {
        let mut given = 0;
        for _ in 0..count {
            let Some(item) = self.catalog.instantiate(id) else {
                writeln!(out, "refused: unknown item '{}'", id)?;
                return Ok(());
            };
            if self.character.add_starting_item(item).is_err() {
                writeln!(out, "refused: inventory full after {} of {}", given, count)?;
                return Ok(());
            }
            given += 1;
        }
        writeln!(out, "ok: gave {} x{}", id, given)?;
        Ok(())
    }

    fn print_stats(&self, out: &mut impl Write) -> Result<()> {
        for kind in StatKind::all() {
            let stat = self.character.stat(*kind);
            writeln!(
                out,
                "{:14} {} ({} + {})",
                kind.label(),
                stat.value(),
                stat.base_value(),
                stat.bonus()
            )?;
        }
        Ok(())
    }

    fn print_inventory(&self, out: &mut impl Write) -> Result<()> {
        for (index, slot) in self.character.inventory().slots().iter().enumerate() {
            match slot.item() {
                Some(item) if slot.amount() > 1 => {
                    writeln!(out, "inv:{:<3} {} x{}", index, item.name(), slot.amount())?
                }
                Some(item) => writeln!(out, "inv:{:<3} {}", index, item.name())?,
                None => writeln!(out, "inv:{:<3} (empty)", index)?,
            }
        }
        Ok(())
    }

    fn print_equipment(&self, out: &mut impl Write) -> Result<()> {
        for category in self.character.equipment().categories() {
            let name = self
                .character
                .equipment()
                .get(category)
                .map_or("(empty)", |i| i.name());
            writeln!(out, "{:12} {}", category.to_string(), name)?;
        }
        Ok(())
    }
}

fn report(out: &mut impl Write, result: Result<(), LoadoutError>) -> Result<()> {
    match result {
        Ok(()) => writeln!(out, "ok")?,
        Err(e) => writeln!(out, "refused: {}", e)?,
    }
    Ok(())
}
