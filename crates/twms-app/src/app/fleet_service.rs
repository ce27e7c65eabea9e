//! Fleet Service - use cases over the loaded truck collection
//!
//! Ids are positions and shift on delete and sort, so status changes and
//! deletions act on a [`TruckKey`] resolved up front with
//! [`FleetService::key_of`].
//!
//! Every modifying action marks the session as modified and, when a backup
//! writer is attached, refreshes the backup snapshot. The primary store is
//! only written by [`FleetService::save`].

use std::path::Path;

use chrono::Local;
use twms_domain::repository::{BackupWriter, TruckRepository};
use twms_domain::service::{self, FleetStatistics, SearchField, SortOrder};
use twms_domain::{LifecycleStatus, OperatorStatus, TruckKey, TruckRecord, WeightModel};
use twms_infra::export;
use twms_store::Fleet;
use twms_types::{Error, Result};

use super::registration::TruckDraft;

pub struct FleetService {
    fleet: Fleet,
    repository: Box<dyn TruckRepository>,
    backup: Option<Box<dyn BackupWriter>>,
    model: WeightModel,
    modified: bool,
}

impl FleetService {
    /// Load the stored collection
    pub fn open(
        repository: Box<dyn TruckRepository>,
        backup: Option<Box<dyn BackupWriter>>,
        model: WeightModel,
    ) -> Result<Self> {
        let records = repository.load_all()?;
        log::debug!("loaded {} trucks", records.len());
        Ok(Self {
            fleet: Fleet::from_records(records),
            repository,
            backup,
            model,
            modified: false,
        })
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn model(&self) -> &WeightModel {
        &self.model
    }

    /// Changes not yet written to the primary store
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn truck(&self, id: u32) -> Result<&TruckRecord> {
        self.fleet.get(id).ok_or(Error::TruckNotFound(id))
    }

    /// Validate, weigh, and append a new truck; returns its id
    pub fn register(&mut self, draft: TruckDraft) -> Result<u32> {
        draft.validate()?;
        let mut record = draft.into_record();
        self.model.recompute(&mut record);
        log::debug!(
            "registering {} at {} kg ({})",
            record.license_plate,
            record.total_weight(),
            record.status()
        );
        let id = self.fleet.add(record);
        self.after_change();
        Ok(id)
    }

    pub fn key_of(&self, id: u32) -> Result<TruckKey> {
        self.truck(id).map(TruckRecord::key)
    }

    /// Operator status change; returns the status now held
    pub fn update_status(&mut self, key: TruckKey, status: OperatorStatus) -> Result<LifecycleStatus> {
        let truck = self.fleet.find_by_key_mut(key).ok_or(Error::TruckRemoved)?;
        truck.set_operator_status(status);
        let current = truck.status();
        self.after_change();
        Ok(current)
    }

    /// Remove a truck; later trucks move up one id
    pub fn delete(&mut self, key: TruckKey) -> Result<TruckRecord> {
        let removed = self.fleet.remove(key).ok_or(Error::TruckRemoved)?;
        self.after_change();
        Ok(removed)
    }

    pub fn sort(&mut self, order: SortOrder) {
        self.fleet.sort(order);
        self.after_change();
    }

    pub fn statistics(&self) -> Option<FleetStatistics> {
        FleetStatistics::compute(&self.fleet, &self.model)
    }

    pub fn search(&self, field: SearchField, term: &str) -> Vec<&TruckRecord> {
        service::search(&self.fleet, field, term)
    }

    pub fn filter_by_status(&self, status: LifecycleStatus) -> Vec<&TruckRecord> {
        service::filter_by_status(&self.fleet, status)
    }

    /// Write the whole collection to the primary store
    pub fn save(&mut self) -> Result<()> {
        self.repository.save_all(self.fleet.records())?;
        self.modified = false;
        log::debug!("saved {} trucks", self.fleet.len());
        Ok(())
    }

    pub fn export_csv(&self, path: &Path) -> Result<usize> {
        export::export_csv(self.fleet.records(), path)
    }

    pub fn write_report(&self, path: &Path) -> Result<()> {
        export::write_report(self.fleet.records(), path, Local::now().naive_local())
    }

    fn after_change(&mut self) {
        self.modified = true;
        if let Some(ref backup) = self.backup {
            if let Err(e) = backup.write_backup(self.fleet.records()) {
                log::warn!("backup failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use twms_domain::CargoItem;
    use twms_infra::persistence::format_backup;

    #[derive(Default, Clone)]
    struct MemoryRepository {
        stored: Rc<RefCell<Vec<TruckRecord>>>,
    }

    impl TruckRepository for MemoryRepository {
        fn load_all(&self) -> std::result::Result<Vec<TruckRecord>, Error> {
            Ok(self.stored.borrow().clone())
        }

        fn save_all(&self, records: &[TruckRecord]) -> std::result::Result<(), Error> {
            *self.stored.borrow_mut() = records.to_vec();
            Ok(())
        }
    }

    #[derive(Default, Clone)]
    struct MemoryBackup {
        snapshot: Rc<RefCell<Option<String>>>,
        fail: bool,
    }

    impl BackupWriter for MemoryBackup {
        fn write_backup(&self, records: &[TruckRecord]) -> std::result::Result<(), Error> {
            if self.fail {
                return Err(Error::Export("disk full".to_string()));
            }
            *self.snapshot.borrow_mut() = Some(format_backup(records));
            Ok(())
        }
    }

    fn service_with(repo: &MemoryRepository, backup: &MemoryBackup) -> FleetService {
        FleetService::open(
            Box::new(repo.clone()),
            Some(Box::new(backup.clone())),
            WeightModel::default(),
        )
        .unwrap()
    }

    fn draft(driver: &str, empty_weight: u32, cargo: &[u32]) -> TruckDraft {
        TruckDraft::new(driver, "ABC-123", "Lahore", empty_weight)
            .with_cargo(cargo.iter().map(|w| CargoItem::new(*w, "box")))
    }

    #[test]
    fn test_register_weighs_new_truck() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        let id = service.register(draft("Ali", 1500, &[300, 150])).unwrap();
        assert_eq!(id, 1);

        let truck = service.truck(1).unwrap();
        assert_eq!(truck.total_weight(), 1950);
        assert_eq!(truck.status(), LifecycleStatus::NearLimit);
        assert!(service.is_modified());
    }

    #[test]
    fn test_register_rejects_invalid_draft() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        let err = service.register(draft("", 100, &[])).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
        assert!(service.fleet().is_empty());
        assert!(!service.is_modified());
    }

    #[test]
    fn test_backup_follows_each_change() {
        let backup = MemoryBackup::default();
        let mut service = service_with(&MemoryRepository::default(), &backup);
        service.register(draft("Ali", 1500, &[450])).unwrap();
        service.register(draft("Sana", 500, &[])).unwrap();
        assert_eq!(
            backup.snapshot.borrow().as_deref(),
            Some("1|Ali|1950\n2|Sana|500\n")
        );

        let first = service.key_of(1).unwrap();
        service.delete(first).unwrap();
        assert_eq!(backup.snapshot.borrow().as_deref(), Some("1|Sana|500\n"));
    }

    #[test]
    fn test_failed_backup_is_not_fatal() {
        let backup = MemoryBackup {
            fail: true,
            ..MemoryBackup::default()
        };
        let mut service = service_with(&MemoryRepository::default(), &backup);
        assert_eq!(service.register(draft("Ali", 100, &[])).unwrap(), 1);
        assert!(backup.snapshot.borrow().is_none());
    }

    #[test]
    fn test_update_status_is_sticky() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        service.register(draft("Ali", 1800, &[300])).unwrap();
        assert_eq!(service.truck(1).unwrap().status(), LifecycleStatus::Overloaded);

        let key = service.key_of(1).unwrap();
        let status = service.update_status(key, OperatorStatus::InTransit).unwrap();
        assert_eq!(status, LifecycleStatus::InTransit);
        assert!(service.truck(1).unwrap().is_overloaded());
    }

    #[test]
    fn test_unknown_id() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        assert!(matches!(service.truck(3), Err(Error::TruckNotFound(3))));
        assert!(matches!(service.key_of(3), Err(Error::TruckNotFound(3))));
        assert!(!service.is_modified());
    }

    #[test]
    fn test_save_and_reopen() {
        let repo = MemoryRepository::default();
        let mut service = service_with(&repo, &MemoryBackup::default());
        service.register(draft("Ali", 1500, &[300, 150])).unwrap();
        service.register(draft("Sana", 500, &[])).unwrap();
        let key = service.key_of(2).unwrap();
        service.update_status(key, OperatorStatus::Delivered).unwrap();
        service.save().unwrap();
        assert!(!service.is_modified());

        let reopened = service_with(&repo, &MemoryBackup::default());
        assert_eq!(reopened.fleet().len(), 2);
        assert_eq!(reopened.truck(2).unwrap().status(), LifecycleStatus::Delivered);
        assert!(!reopened.is_modified());
    }

    #[test]
    fn test_sort_renumbers() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        service.register(draft("Ali", 1500, &[])).unwrap();
        service.register(draft("Sana", 500, &[])).unwrap();
        service.sort(SortOrder::WeightAscending);

        assert_eq!(service.truck(1).unwrap().driver_name, "Sana");
        assert_eq!(service.truck(2).unwrap().driver_name, "Ali");
    }

    #[test]
    fn test_key_follows_truck_across_sort_and_delete() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        service.register(draft("Ali", 1500, &[])).unwrap();
        service.register(draft("Sana", 500, &[])).unwrap();
        service.register(draft("Bilal", 900, &[])).unwrap();
        let ali = service.key_of(1).unwrap();

        service.sort(SortOrder::WeightAscending);
        assert_eq!(service.truck(1).unwrap().driver_name, "Sana");

        service.update_status(ali, OperatorStatus::Cancelled).unwrap();
        assert_eq!(service.truck(3).unwrap().status(), LifecycleStatus::Cancelled);

        let sana = service.key_of(1).unwrap();
        assert_eq!(service.delete(sana).unwrap().driver_name, "Sana");
        assert_eq!(service.truck(2).unwrap().driver_name, "Ali");
        assert_eq!(service.key_of(2).unwrap(), ali);
    }

    #[test]
    fn test_removed_key_is_rejected() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        service.register(draft("Ali", 1500, &[])).unwrap();
        let key = service.key_of(1).unwrap();
        service.delete(key).unwrap();
        service.save().unwrap();

        assert!(matches!(service.delete(key), Err(Error::TruckRemoved)));
        assert!(matches!(
            service.update_status(key, OperatorStatus::Delivered),
            Err(Error::TruckRemoved)
        ));
        assert!(!service.is_modified());
    }

    #[test]
    fn test_statistics_and_queries() {
        let mut service = service_with(&MemoryRepository::default(), &MemoryBackup::default());
        assert!(service.statistics().is_none());

        service.register(draft("Ali Khan", 1500, &[450])).unwrap();
        service.register(draft("Sana", 500, &[])).unwrap();
        service.register(draft("Bilal", 1800, &[300])).unwrap();

        let stats = service.statistics().unwrap();
        assert_eq!(stats.total_trucks, 3);
        assert_eq!(stats.overloaded_trucks, 1);

        assert_eq!(service.search(SearchField::Driver, "khan").len(), 1);
        assert_eq!(service.filter_by_status(LifecycleStatus::Ready).len(), 1);
    }
}
