//! Lead capture flow: validate, stamp, append.

use chrono::{DateTime, Utc};
use dfx_core::constants::LEADS_COLLECTION;
use tracing::{info, warn};

use crate::error::LeadError;
use crate::lead::{Lead, LeadForm};
use crate::store::LeadStore;

/// Submits lead forms into one collection of a [`LeadStore`].
#[derive(Debug, Clone)]
pub struct LeadCapture<S> {
    store: S,
    collection: String,
}

impl<S: LeadStore> LeadCapture<S> {
    /// Capture into the standard `defindex_leads` collection.
    pub fn new(store: S) -> Self {
        Self::with_collection(store, LEADS_COLLECTION)
    }

    pub fn with_collection(store: S, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
        }
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate `form` and append it, stamped with the current time.
    pub fn submit(&self, form: LeadForm) -> Result<Lead, LeadError> {
        self.submit_at(form, Utc::now())
    }

    /// Validate `form` and append it with an explicit timestamp.
    pub fn submit_at(&self, form: LeadForm, timestamp: DateTime<Utc>) -> Result<Lead, LeadError> {
        let lead = match form.into_lead(timestamp) {
            Ok(lead) => lead,
            Err(e) => {
                warn!(collection = %self.collection, error = %e, "lead rejected");
                return Err(e);
            }
        };

        self.store.append(&self.collection, &lead)?;

        info!(
            collection = %self.collection,
            company = %lead.company,
            "lead captured"
        );
        Ok(lead)
    }

    /// Every lead captured so far, oldest first.
    pub fn leads(&self) -> Result<Vec<Lead>, LeadError> {
        self.store.load(&self.collection)
    }
}
