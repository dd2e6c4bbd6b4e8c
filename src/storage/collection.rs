//! A single JSON-file collection
//!
//! Each collection file holds a bare JSON array of records in the shape the
//! record API returns. The repository keeps the records in memory behind an
//! `RwLock` and rewrites the whole file on every change.

use std::fmt::Display;
use std::path::PathBuf;
use std::sync::RwLock;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::TallyError;
use crate::models::{
    Expense, ExpenseId, Job, JobId, PaymentId, SalaryPayment, WorkEntry, WorkEntryId,
};

use super::file_io::{read_json, write_json_atomic};

/// A record that can live in a collection file
pub trait StoredRecord: Clone + Serialize + DeserializeOwned {
    type Id: PartialEq + Display;

    /// Human-readable collection name for logs and errors
    const ENTITY: &'static str;

    fn id(&self) -> &Self::Id;
}

impl StoredRecord for Expense {
    type Id = ExpenseId;
    const ENTITY: &'static str = "Expense";

    fn id(&self) -> &ExpenseId {
        &self.id
    }
}

impl StoredRecord for Job {
    type Id = JobId;
    const ENTITY: &'static str = "Job";

    fn id(&self) -> &JobId {
        &self.id
    }
}

impl StoredRecord for WorkEntry {
    type Id = WorkEntryId;
    const ENTITY: &'static str = "Work entry";

    fn id(&self) -> &WorkEntryId {
        &self.id
    }
}

impl StoredRecord for SalaryPayment {
    type Id = PaymentId;
    const ENTITY: &'static str = "Salary payment";

    fn id(&self) -> &PaymentId {
        &self.id
    }
}

/// Repository for one collection file
pub struct CollectionRepository<T> {
    path: PathBuf,
    data: RwLock<Vec<T>>,
}

impl<T: StoredRecord> CollectionRepository<T> {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the collection from disk, replacing what is in memory
    pub fn load(&self) -> Result<(), TallyError> {
        let records: Vec<T> = read_json(&self.path)?;
        log::debug!(
            "loaded {} {} record(s) from {}",
            records.len(),
            T::ENTITY,
            self.path.display()
        );

        let mut data = self
            .data
            .write()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = records;
        Ok(())
    }

    /// Write the collection to disk
    pub fn save(&self) -> Result<(), TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)?;
        log::debug!(
            "saved {} {} record(s) to {}",
            data.len(),
            T::ENTITY,
            self.path.display()
        );
        Ok(())
    }

    /// All records, in stored order
    pub fn get_all(&self) -> Result<Vec<T>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    pub fn get(&self, id: &T::Id) -> Result<Option<T>, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.iter().find(|r| r.id() == id).cloned())
    }

    pub fn contains(&self, id: &T::Id) -> Result<bool, TallyError> {
        Ok(self.get(id)?.is_some())
    }

    /// Append a record and persist
    pub fn insert(&self, record: T) -> Result<(), TallyError> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            data.push(record);
        }
        self.save()
    }

    /// Replace the record with the same id and persist
    pub fn replace(&self, record: T) -> Result<(), TallyError> {
        {
            let mut data = self
                .data
                .write()
                .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            let slot = data
                .iter_mut()
                .find(|r| r.id() == record.id())
                .ok_or_else(|| not_found::<T>(record.id()))?;
            *slot = record;
        }
        self.save()
    }

    /// Remove a record by id and persist
    pub fn remove(&self, id: &T::Id) -> Result<T, TallyError> {
        let removed = {
            let mut data = self
                .data
                .write()
                .map_err(|e| TallyError::Storage(format!("Failed to acquire write lock: {}", e)))?;
            let index = data
                .iter()
                .position(|r| r.id() == id)
                .ok_or_else(|| not_found::<T>(id))?;
            data.remove(index)
        };
        self.save()?;
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, TallyError> {
        let data = self
            .data
            .read()
            .map_err(|e| TallyError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.len())
    }
}

fn not_found<T: StoredRecord>(id: &T::Id) -> TallyError {
    TallyError::NotFound {
        entity_type: T::ENTITY,
        identifier: id.to_string(),
    }
}
