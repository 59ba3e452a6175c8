//! # Company Service
//!
//! CRUD over a `RecordStore`. Every call reads the whole collection; every
//! mutation rewrites it.
//!
//! Mutations hold `write_lock` across their read-modify-write, so two
//! concurrent updates in this process cannot overwrite each other's changes.
//! Reads never take the lock: a read racing a write sees either the old or
//! the new file because the store replaces it by rename.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::company::{Company, CompanyName};
use crate::observability::{Event, SharedEventLog};
use crate::storage::RecordStore;

use super::errors::ServiceResult;

/// Company CRUD operations
pub struct CompanyService {
    store: Arc<dyn RecordStore>,
    log: SharedEventLog,
    write_lock: Mutex<()>,
}

impl CompanyService {
    pub fn new(store: Arc<dyn RecordStore>, log: SharedEventLog) -> Self {
        Self {
            store,
            log,
            write_lock: Mutex::new(()),
        }
    }

    /// Create and persist a new company. Duplicate names are allowed.
    pub fn create(&self, name: CompanyName) -> ServiceResult<Company> {
        let _guard = self.lock_writes();
        let mut companies = self.store.read_all()?;

        let company = Company::new(name);
        companies.push(company.clone());
        self.store.write_all(&companies)?;

        self.log.info(
            Event::CompanyCreated,
            &[("id", company.id.as_str()), ("name", company.name.as_str())],
        );
        Ok(company)
    }

    /// Every stored company, in stored order
    pub fn get_all(&self) -> ServiceResult<Vec<Company>> {
        let companies = self.store.read_all()?;
        self.log.info(
            Event::CompaniesListed,
            &[("count", companies.len().to_string().as_str())],
        );
        Ok(companies)
    }

    /// Look up a company by id
    pub fn get_by_id(&self, id: &str) -> ServiceResult<Option<Company>> {
        let company = self.store.read_all()?.into_iter().find(|c| c.id == id);
        match &company {
            Some(c) => self.log.info(
                Event::CompanyRetrieved,
                &[("id", c.id.as_str()), ("name", c.name.as_str())],
            ),
            None => self.log.warn(Event::CompanyNotFound, &[("id", id)]),
        }
        Ok(company)
    }

    /// Rename a company and refresh its `updatedAt`.
    ///
    /// Returns `None` if no company has this id.
    pub fn update(&self, id: &str, name: CompanyName) -> ServiceResult<Option<Company>> {
        let _guard = self.lock_writes();
        let mut companies = self.store.read_all()?;

        let Some(company) = companies.iter_mut().find(|c| c.id == id) else {
            self.log.warn(Event::CompanyUpdateNotFound, &[("id", id)]);
            return Ok(None);
        };
        company.rename(name);
        let updated = company.clone();

        self.store.write_all(&companies)?;
        self.log.info(
            Event::CompanyUpdated,
            &[("id", updated.id.as_str()), ("name", updated.name.as_str())],
        );
        Ok(Some(updated))
    }

    /// Remove a company. Returns false if no company has this id.
    pub fn delete(&self, id: &str) -> ServiceResult<bool> {
        let _guard = self.lock_writes();
        let mut companies = self.store.read_all()?;

        let Some(index) = companies.iter().position(|c| c.id == id) else {
            self.log.warn(Event::CompanyDeleteNotFound, &[("id", id)]);
            return Ok(false);
        };
        let removed = companies.remove(index);

        self.store.write_all(&companies)?;
        self.log.info(
            Event::CompanyDeleted,
            &[("id", removed.id.as_str()), ("name", removed.name.as_str())],
        );
        Ok(true)
    }

    fn lock_writes(&self) -> MutexGuard<'_, ()> {
        // The guarded value is `()`, so a poisoned lock carries no bad state.
        self.write_lock.lock().unwrap_or_else(|e| e.into_inner())
    }
}
