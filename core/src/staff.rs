//! Per-batch personnel rosters keyed by shift.

use crate::{name_generator::NameGenerator, rng::ColumnRng, types::Shift};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct NamePool(BTreeMap<Shift, Vec<String>>);

impl NamePool {
    /// `names_per_shift` names for each of A–D, drawn in shift order.
    pub fn generate(rng: &mut ColumnRng, names_per_shift: usize) -> Self {
        let roster = Shift::ALL
            .into_iter()
            .map(|shift| {
                let names = (0..names_per_shift)
                    .map(|_| NameGenerator::staff_name(rng))
                    .collect();
                (shift, names)
            })
            .collect();
        Self(roster)
    }

    pub fn names(&self, shift: Shift) -> &[String] {
        self.0.get(&shift).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Shift, &[String])> {
        self.0.iter().map(|(shift, names)| (*shift, names.as_slice()))
    }

    /// Draw one name from the roster of `shift`.
    pub fn draw(&self, shift: Shift, rng: &mut ColumnRng) -> Option<&str> {
        let names = self.names(shift);
        if names.is_empty() {
            return None;
        }
        Some(rng.pick(names).as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ColumnSlot, RngBank};

    #[test]
    fn every_shift_gets_the_requested_roster() {
        let mut rng = RngBank::new(4).for_column(ColumnSlot::StaffRoster);
        let pool = NamePool::generate(&mut rng, 8);
        for shift in Shift::ALL {
            assert_eq!(pool.names(shift).len(), 8, "shift {shift}");
        }
    }

    #[test]
    fn draw_only_returns_roster_members() {
        let mut roster_rng = RngBank::new(4).for_column(ColumnSlot::StaffRoster);
        let pool = NamePool::generate(&mut roster_rng, 3);
        let mut rng = RngBank::new(4).for_column(ColumnSlot::CallTaker);
        for _ in 0..100 {
            let name = pool.draw(Shift::C, &mut rng).unwrap();
            assert!(pool.names(Shift::C).iter().any(|n| n == name));
        }
    }

    #[test]
    fn serializes_as_shift_map() {
        let mut rng = RngBank::new(4).for_column(ColumnSlot::StaffRoster);
        let pool = NamePool::generate(&mut rng, 1);
        let json = serde_json::to_value(&pool).unwrap();
        for key in ["A", "B", "C", "D"] {
            assert_eq!(json[key].as_array().unwrap().len(), 1);
        }
    }
}
