//! Application state container.
//!
//! Owns the canonical in-memory copies of the three top-level records. All
//! mutations funnel through here, and every mutation re-serializes all three
//! slots back to the store, so persistence stays consistent with memory
//! after each change.

use serde::de::DeserializeOwned;

use crate::errors::AppError;
use crate::models::{initial_parties, FeatureField, Party, SiteInfo, Theme};
use crate::store::{RevisionInfo, SlotStore, PARTIES_SLOT, SITE_INFO_SLOT, THEME_SLOT};

/// The three top-level records plus the store they persist to.
pub struct SiteState {
    store: SlotStore,
    theme: Theme,
    parties: Vec<Party>,
    site_info: SiteInfo,
}

impl SiteState {
    /// Load the three slots once. A slot that is absent keeps its
    /// compiled-in default; a slot that fails to parse falls back to the
    /// same default with a warning instead of aborting startup.
    pub async fn load(store: SlotStore) -> Result<Self, AppError> {
        let theme = read_or_default(&store, THEME_SLOT, Theme::default).await?;
        let parties = read_or_default(&store, PARTIES_SLOT, initial_parties).await?;
        let site_info = read_or_default(&store, SITE_INFO_SLOT, SiteInfo::default).await?;

        tracing::info!(parties = parties.len(), "loaded site state");

        Ok(Self {
            store,
            theme,
            parties,
            site_info,
        })
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Parties in storage order (insertion order = display order).
    pub fn parties(&self) -> &[Party] {
        &self.parties
    }

    pub fn site_info(&self) -> &SiteInfo {
        &self.site_info
    }

    /// Revision info for the persisted snapshot.
    pub async fn revision_info(&self) -> Result<RevisionInfo, AppError> {
        self.store.revision_info().await
    }

    /// Serialize all three records and write them in one transaction.
    async fn persist(&self) -> Result<(), AppError> {
        let theme = serde_json::to_string(&self.theme)?;
        let parties = serde_json::to_string(&self.parties)?;
        let site_info = serde_json::to_string(&self.site_info)?;
        self.store.save_all(&theme, &parties, &site_info).await?;
        Ok(())
    }

    /// Apply a field-by-field edit to the theme.
    pub async fn update_theme<F>(&mut self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut Theme),
    {
        apply(&mut self.theme);
        self.persist().await
    }

    /// Apply a field-by-field edit to the site info.
    pub async fn update_site_info<F>(&mut self, apply: F) -> Result<(), AppError>
    where
        F: FnOnce(&mut SiteInfo),
    {
        apply(&mut self.site_info);
        self.persist().await
    }

    /// Mutate one of the three fixed feature cards in place.
    pub async fn update_feature(
        &mut self,
        index: usize,
        field: FeatureField,
        value: String,
    ) -> Result<(), AppError> {
        let Some(feature) = self.site_info.about_features.get_mut(index) else {
            return Err(AppError::Validation(format!(
                "Feature index {} out of range",
                index
            )));
        };
        match field {
            FeatureField::Title => feature.title = value,
            FeatureField::Description => feature.description = value,
        }
        self.persist().await
    }

    /// Replace the party with the same id in place (preserving its position),
    /// or append as a new entry. The sole insertion/update path for the
    /// collection.
    pub async fn upsert_party(&mut self, party: Party) -> Result<(), AppError> {
        match self.parties.iter_mut().find(|p| p.id == party.id) {
            Some(existing) => *existing = party,
            None => self.parties.push(party),
        }
        self.persist().await
    }

    /// Remove the party with the given id, leaving all others and their
    /// order untouched.
    pub async fn remove_party(&mut self, id: &str) -> Result<(), AppError> {
        let Some(pos) = self.parties.iter().position(|p| p.id == id) else {
            return Err(AppError::NotFound(format!("Party {} not found", id)));
        };
        self.parties.remove(pos);
        self.persist().await
    }
}

async fn read_or_default<T, F>(store: &SlotStore, key: &str, default: F) -> Result<T, AppError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    match store.read_slot(key).await? {
        Some(raw) => match serde_json::from_str(&raw) {
            Ok(value) => Ok(value),
            Err(err) => {
                tracing::warn!(slot = key, %err, "stored slot is unreadable, using default");
                Ok(default())
            }
        },
        None => Ok(default()),
    }
}
