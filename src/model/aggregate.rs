use super::{ResolvedQuantities, Unit};
use serde::Serialize;
use std::collections::BTreeSet;

/// Grouping key for aggregation: raw category plus resolved type name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    pub category: String,
    pub type_name: String,
}

/// Accumulated totals for all elements sharing one group key.
///
/// Sums are arithmetic totals over contributing elements, never averaged;
/// `instance_count` equals the number of contributing elements.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateGroup {
    pub category: String,
    pub type_name: String,
    pub instance_count: usize,
    pub sum_length: f64,
    pub sum_area: f64,
    pub sum_volume: f64,
    pub sum_mass: f64,
    pub marks: BTreeSet<String>,
    pub remarks: BTreeSet<String>,
}

impl AggregateGroup {
    #[must_use]
    pub fn new(key: &GroupKey) -> Self {
        Self {
            category: key.category.clone(),
            type_name: key.type_name.clone(),
            instance_count: 0,
            sum_length: 0.0,
            sum_area: 0.0,
            sum_volume: 0.0,
            sum_mass: 0.0,
            marks: BTreeSet::new(),
            remarks: BTreeSet::new(),
        }
    }

    /// Fold one element's resolved quantities into the group.
    pub fn absorb(&mut self, quantities: &ResolvedQuantities) {
        self.instance_count += 1;
        self.sum_length += quantities.length.unwrap_or(0.0);
        self.sum_area += quantities.area.unwrap_or(0.0);
        self.sum_volume += quantities.volume.unwrap_or(0.0);
        self.sum_mass += quantities.mass.unwrap_or(0.0);

        if let Some(mark) = &quantities.mark {
            if !mark.is_empty() {
                self.marks.insert(mark.clone());
            }
        }
        if let Some(remarks) = &quantities.remarks {
            if !remarks.is_empty() {
                self.remarks.insert(remarks.clone());
            }
        }
    }

    /// Combine totals from a second run over a disjoint element subset.
    pub fn merge(&mut self, other: &AggregateGroup) {
        self.instance_count += other.instance_count;
        self.sum_length += other.sum_length;
        self.sum_area += other.sum_area;
        self.sum_volume += other.sum_volume;
        self.sum_mass += other.sum_mass;
        self.marks.extend(other.marks.iter().cloned());
        self.remarks.extend(other.remarks.iter().cloned());
    }

    /// The group's total for a given measurement unit.
    #[must_use]
    pub fn quantity(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Ut => self.instance_count as f64,
            Unit::Ml => self.sum_length,
            Unit::M2 => self.sum_area,
            Unit::M3 => self.sum_volume,
            Unit::Kg => self.sum_mass,
        }
    }

    #[must_use]
    pub fn joined_marks(&self) -> String {
        join_distinct(&self.marks)
    }

    #[must_use]
    pub fn joined_remarks(&self) -> String {
        join_distinct(&self.remarks)
    }
}

fn join_distinct(values: &BTreeSet<String>) -> String {
    values.iter().cloned().collect::<Vec<_>>().join(", ")
}
