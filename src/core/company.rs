//! Company profile business logic - The singleton record behind the
//! quotation header.

use crate::{
    errors::Result,
    models::{CompanyInfo, CompanyInfoUpdate},
    storage::{self, KeyValueStorage, keys},
};
use std::sync::Arc;

/// Singleton company profile store.
pub struct CompanyStore {
    storage: Arc<dyn KeyValueStorage>,
    info: CompanyInfo,
}

impl CompanyStore {
    /// Opens the store, loading the persisted profile. A missing or corrupt
    /// profile loads as the placeholder defaults.
    #[must_use]
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let info: CompanyInfo = storage::load_json_or_default(storage.as_ref(), keys::COMPANY_INFO);
        Self { storage, info }
    }

    /// The current profile.
    #[must_use]
    pub fn info(&self) -> &CompanyInfo {
        &self.info
    }

    /// Overwrites the fields present in the partial update, leaving the rest
    /// untouched, and returns the resulting profile.
    ///
    /// # Errors
    /// Returns an error if persisting the profile fails.
    pub fn update(&mut self, update: CompanyInfoUpdate) -> Result<CompanyInfo> {
        if let Some(name) = update.name {
            self.info.name = name;
        }
        if let Some(logo) = update.logo {
            self.info.logo = logo;
        }
        if let Some(address) = update.address {
            self.info.address = address;
        }
        if let Some(phone) = update.phone {
            self.info.phone = phone;
        }
        if let Some(email) = update.email {
            self.info.email = email;
        }

        storage::store_json(self.storage.as_ref(), keys::COMPANY_INFO, &self.info)?;
        tracing::debug!("company profile updated");
        Ok(self.info.clone())
    }
}
