//! In-memory store for registered trucks
//!
//! Records are kept in display order. Each record's `id` equals its 1-based
//! position and is reassigned after every removal or sort; use
//! [`TruckKey`] when a reference must survive those operations.

use twms_domain::service::SortOrder;
use twms_domain::{TruckKey, TruckRecord};

/// Ordered collection of truck records
#[derive(Debug, Default)]
pub struct Fleet {
    trucks: Vec<TruckRecord>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from loaded records, renumbering ids to their positions
    pub fn from_records(records: Vec<TruckRecord>) -> Self {
        let mut fleet = Self { trucks: records };
        fleet.renumber();
        fleet
    }

    /// Append a record and return its id
    pub fn add(&mut self, mut record: TruckRecord) -> u32 {
        let id = self.next_id();
        record.assign_id(id);
        self.trucks.push(record);
        id
    }

    /// Id the next added record will receive
    pub fn next_id(&self) -> u32 {
        position_to_id(self.trucks.len())
    }

    pub fn get(&self, id: u32) -> Option<&TruckRecord> {
        let index = self.index_of(id)?;
        self.trucks.get(index)
    }

    pub fn find_by_key(&self, key: TruckKey) -> Option<&TruckRecord> {
        self.trucks.iter().find(|truck| truck.key() == key)
    }

    pub fn find_by_key_mut(&mut self, key: TruckKey) -> Option<&mut TruckRecord> {
        self.trucks.iter_mut().find(|truck| truck.key() == key)
    }

    /// Remove by key; the remaining records are renumbered
    pub fn remove(&mut self, key: TruckKey) -> Option<TruckRecord> {
        let index = self.trucks.iter().position(|truck| truck.key() == key)?;
        let removed = self.trucks.remove(index);
        self.renumber();
        log::debug!("removed truck #{} ({} remaining)", removed.id(), self.trucks.len());
        Some(removed)
    }

    /// Stable sort; ids are renumbered to the new order
    pub fn sort(&mut self, order: SortOrder) {
        self.trucks.sort_by(|a, b| order.compare(a, b));
        self.renumber();
    }

    pub fn records(&self) -> &[TruckRecord] {
        &self.trucks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TruckRecord> {
        self.trucks.iter()
    }

    pub fn len(&self) -> usize {
        self.trucks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trucks.is_empty()
    }

    fn index_of(&self, id: u32) -> Option<usize> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        (index < self.trucks.len()).then_some(index)
    }

    fn renumber(&mut self) {
        for (index, truck) in self.trucks.iter_mut().enumerate() {
            truck.assign_id(position_to_id(index));
        }
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a TruckRecord;
    type IntoIter = std::slice::Iter<'a, TruckRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.trucks.iter()
    }
}

fn position_to_id(index: usize) -> u32 {
    u32::try_from(index + 1).unwrap_or(u32::MAX)
}
