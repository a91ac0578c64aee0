//! Party editor: the create/update/delete workflow for party records.
//!
//! Edits are staged on a draft copy and only reach the collection (and the
//! store) through [`PartyEditor::save`]. Draft mutation is single-writer by
//! construction: every mutating operation takes `&mut self`, and a file
//! encode completes inside the call that applies it, so a pending encode can
//! never land on a discarded draft.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::errors::AppError;
use crate::media;
use crate::models::{ImageSource, Party, PartyStatus};
use crate::state::SiteState;

/// Mints timestamp-derived party ids, unique even within one millisecond.
#[derive(Debug, Default)]
struct IdMinter {
    last_ms: i64,
    seq: u32,
}

impl IdMinter {
    fn mint(&mut self) -> String {
        let now_ms = Utc::now().timestamp_millis();
        if now_ms > self.last_ms {
            self.last_ms = now_ms;
            self.seq = 0;
            now_ms.to_string()
        } else {
            // Same millisecond, or a clock that went backwards.
            self.seq += 1;
            format!("{}-{}", self.last_ms, self.seq)
        }
    }
}

/// Editor for party records. Holds at most one staged draft.
#[derive(Default)]
pub struct PartyEditor {
    draft: Option<Party>,
    minter: IdMinter,
}

impl PartyEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new draft with placeholder content and a fresh id. The draft
    /// is not in the collection until saved.
    pub fn begin_create(&mut self) -> &Party {
        let date = format!("{} 19:00", Utc::now().format("%Y-%m-%d"));
        self.draft.insert(Party {
            id: self.minter.mint(),
            title: "새로운 프리미엄 파티".to_string(),
            date,
            location: "장소를 입력하세요".to_string(),
            capacity: 10,
            current_applicants: 0,
            price: 100_000,
            description: "파티에 대한 상세 설명을 입력하세요.".to_string(),
            image_url: ImageSource::default(),
            intro_images: Vec::new(),
            status: PartyStatus::Recruiting,
            google_form_url: String::new(),
        })
    }

    /// Stage a copy of an existing record for editing. Edits apply only to
    /// the copy until saved.
    pub fn begin_edit(&mut self, party: &Party) -> &Party {
        self.draft.insert(party.clone())
    }

    pub fn draft(&self) -> Option<&Party> {
        self.draft.as_ref()
    }

    /// Direct field access for form-style edits on the staged draft.
    pub fn draft_mut(&mut self) -> Result<&mut Party, AppError> {
        self.draft.as_mut().ok_or(AppError::NoDraft)
    }

    /// Drop the staged draft without saving.
    pub fn discard(&mut self) {
        self.draft = None;
    }

    /// Validate and commit the draft: replace the entry with the same id in
    /// place, or append as a new entry. Clears the draft on success.
    pub async fn save(&mut self, site: &mut SiteState) -> Result<Party, AppError> {
        let draft = self.draft.as_ref().ok_or(AppError::NoDraft)?;
        validate(draft)?;
        let party = draft.clone();
        site.upsert_party(party.clone()).await?;
        self.draft = None;
        Ok(party)
    }

    /// Delete a party by id. `confirmed` carries the outcome of the
    /// interactive prompt; declining is a no-op, not an error.
    pub async fn delete(
        &self,
        site: &mut SiteState,
        id: &str,
        confirmed: bool,
    ) -> Result<bool, AppError> {
        if !confirmed {
            return Ok(false);
        }
        site.remove_party(id).await?;
        Ok(true)
    }

    // ==================== MAIN IMAGE ====================

    /// Point the main image at an external URL.
    pub fn set_main_image_url(&mut self, url: &str) -> Result<(), AppError> {
        self.draft_mut()?.image_url = ImageSource::from(url);
        Ok(())
    }

    /// Encode a local file and store it as the main image payload. On
    /// encode failure the draft is left unchanged.
    pub async fn set_main_image_file(&mut self, path: &Path) -> Result<(), AppError> {
        if self.draft.is_none() {
            return Err(AppError::NoDraft);
        }
        let encoded = media::encode_image_file(path).await?;
        self.draft_mut()?.image_url = encoded;
        Ok(())
    }

    // ==================== GALLERY ====================

    /// Append an empty gallery slot for the admin to fill in. Returns the
    /// new slot's index.
    pub fn add_gallery_slot(&mut self) -> Result<usize, AppError> {
        let draft = self.draft_mut()?;
        draft.intro_images.push(ImageSource::default());
        Ok(draft.intro_images.len() - 1)
    }

    /// Remove the slot at `index`, shifting later slots down.
    pub fn remove_gallery_slot(&mut self, index: usize) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        if index >= draft.intro_images.len() {
            return Err(AppError::Validation(format!(
                "Gallery index {} out of range",
                index
            )));
        }
        draft.intro_images.remove(index);
        Ok(())
    }

    /// Replace the slot at `index` with an external URL.
    pub fn set_gallery_url(&mut self, index: usize, url: &str) -> Result<(), AppError> {
        let draft = self.draft_mut()?;
        let Some(slot) = draft.intro_images.get_mut(index) else {
            return Err(AppError::Validation(format!(
                "Gallery index {} out of range",
                index
            )));
        };
        *slot = ImageSource::from(url);
        Ok(())
    }

    /// Encode a local file into the slot at `index`.
    pub async fn set_gallery_file(&mut self, index: usize, path: &Path) -> Result<(), AppError> {
        let len = self.draft_mut()?.intro_images.len();
        if index >= len {
            return Err(AppError::Validation(format!(
                "Gallery index {} out of range",
                index
            )));
        }
        let encoded = media::encode_image_file(path).await?;
        if let Some(slot) = self.draft_mut()?.intro_images.get_mut(index) {
            *slot = encoded;
        }
        Ok(())
    }

    /// Encode a batch of files and append them in input order. One failure
    /// rejects the whole batch; the draft is left unchanged.
    pub async fn append_gallery_files(&mut self, paths: &[PathBuf]) -> Result<usize, AppError> {
        if self.draft.is_none() {
            return Err(AppError::NoDraft);
        }
        let encoded = media::encode_image_files(paths).await?;
        let count = encoded.len();
        self.draft_mut()?.intro_images.extend(encoded);
        Ok(count)
    }
}

/// Required-field and range checks applied before a draft reaches the
/// collection.
fn validate(party: &Party) -> Result<(), AppError> {
    if party.title.trim().is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    if party.date.trim().is_empty() {
        return Err(AppError::Validation("Date is required".to_string()));
    }
    if party.location.trim().is_empty() {
        return Err(AppError::Validation("Location is required".to_string()));
    }
    if party.google_form_url.trim().is_empty() {
        return Err(AppError::Validation(
            "Application form URL is required".to_string(),
        ));
    }
    if party.capacity < 0 {
        return Err(AppError::Validation(
            "Capacity must be zero or more".to_string(),
        ));
    }
    if party.price < 0 {
        return Err(AppError::Validation(
            "Price must be zero or more".to_string(),
        ));
    }
    if party.current_applicants < 0 || party.current_applicants > party.capacity {
        return Err(AppError::Validation(
            "Applicants must be between zero and capacity".to_string(),
        ));
    }
    Ok(())
}
