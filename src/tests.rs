//! Integration tests for the BEGLES data core.

use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use tempfile::TempDir;

use crate::auth::{AccessGate, AccessMode};
use crate::catalog;
use crate::config::Config;
use crate::editor::PartyEditor;
use crate::errors::AppError;
use crate::media;
use crate::models::{FeatureField, ImageSource, Party, PartyStatus};
use crate::state::SiteState;
use crate::store::{init_store, SessionStore, SlotStore, PARTIES_SLOT};

/// Test fixture holding one fresh store.
struct TestFixture {
    pool: sqlx::SqlitePool,
    _temp_dir: TempDir,
}

impl TestFixture {
    async fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store_path = temp_dir.path().join("test.sqlite");

        let pool = init_store(&store_path).await.expect("Failed to init store");

        TestFixture {
            pool,
            _temp_dir: temp_dir,
        }
    }

    fn slots(&self) -> SlotStore {
        SlotStore::new(self.pool.clone())
    }

    fn session(&self) -> SessionStore {
        SessionStore::new(self.pool.clone())
    }

    /// Simulates a page load: reads the three slots (or defaults) fresh.
    async fn site(&self) -> SiteState {
        SiteState::load(self.slots())
            .await
            .expect("Failed to load state")
    }

    fn config(&self) -> Config {
        Config {
            admin_id: "begles_manager".to_string(),
            admin_secret: "BMB9696!".to_string(),
            store_path: self._temp_dir.path().join("test.sqlite"),
            log_level: "warn".to_string(),
        }
    }
}

/// Stage a draft with the given title and commit it.
async fn create_party(editor: &mut PartyEditor, site: &mut SiteState, title: &str) -> Party {
    editor.begin_create();
    {
        let draft = editor.draft_mut().expect("draft staged");
        draft.title = title.to_string();
        draft.google_form_url = "https://forms.google.com".to_string();
    }
    editor.save(site).await.expect("Failed to save party")
}

#[tokio::test]
async fn test_load_defaults_when_empty() {
    let fixture = TestFixture::new().await;
    let site = fixture.site().await;

    assert_eq!(site.site_info().name, "BEGLES");
    assert_eq!(site.theme().primary_color, "#0369A1");
    assert_eq!(site.parties().len(), 4);
    assert_eq!(site.parties()[0].id, "1");
    assert!(site
        .parties()
        .iter()
        .all(|p| p.status == PartyStatus::Recruiting));
}

#[tokio::test]
async fn test_round_trip_save_load() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;

    site.update_theme(|t| t.primary_color = "#111827".to_string())
        .await
        .unwrap();
    site.update_site_info(|s| s.hero_title = "Line one\nLine two".to_string())
        .await
        .unwrap();

    let mut editor = PartyEditor::new();
    editor.begin_create();
    {
        let draft = editor.draft_mut().unwrap();
        draft.title = "Round Trip".to_string();
        draft.description = "첫 줄\n둘째 줄".to_string();
        draft.google_form_url = "https://forms.google.com/rt".to_string();
        draft.image_url = ImageSource::from("data:image/png;base64,aGVsbG8=");
        draft.intro_images = vec![
            ImageSource::from("https://example.com/a.jpg"),
            ImageSource::from("data:image/jpeg;base64,d29ybGQ="),
        ];
    }
    editor.save(&mut site).await.unwrap();

    let reloaded = fixture.site().await;
    assert_eq!(reloaded.theme(), site.theme());
    assert_eq!(reloaded.parties(), site.parties());
    assert_eq!(reloaded.site_info(), site.site_info());
}

#[tokio::test]
async fn test_revision_increments_on_writes() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;

    let initial = site.revision_info().await.unwrap().revision_id;

    site.update_theme(|t| t.accent_color = "#000000".to_string())
        .await
        .unwrap();
    site.update_site_info(|s| s.contact_email = "hello@begles.com".to_string())
        .await
        .unwrap();

    let mut editor = PartyEditor::new();
    create_party(&mut editor, &mut site, "Revision Test").await;

    let after = site.revision_info().await.unwrap().revision_id;
    assert_eq!(after, initial + 3);
}

#[tokio::test]
async fn test_corrupt_slot_falls_back_to_default() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;

    site.update_theme(|t| t.accent_color = "#FF0000".to_string())
        .await
        .unwrap();

    // Damage the parties slot behind the container's back.
    sqlx::query(
        "INSERT INTO slots (key, value) VALUES (?, ?) \
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
    )
    .bind(PARTIES_SLOT)
    .bind("{ not json ]")
    .execute(&fixture.pool)
    .await
    .unwrap();

    let reloaded = fixture.site().await;
    // The bad slot reverts to the seed list; the intact theme slot keeps its edit.
    assert_eq!(reloaded.parties().len(), 4);
    assert_eq!(reloaded.parties()[0].id, "1");
    assert_eq!(reloaded.theme().accent_color, "#FF0000");
}

#[tokio::test]
async fn test_new_draft_defaults() {
    let mut editor = PartyEditor::new();
    let draft = editor.begin_create();

    assert_eq!(draft.title, "새로운 프리미엄 파티");
    assert_eq!(draft.capacity, 10);
    assert_eq!(draft.current_applicants, 0);
    assert_eq!(draft.price, 100_000);
    assert_eq!(draft.status, PartyStatus::Recruiting);
    assert!(draft.date.ends_with(" 19:00"));
    assert_eq!(draft.date.len(), "2024-06-15 19:00".len());
    assert!(draft.image_url.is_empty());
    assert!(draft.intro_images.is_empty());
    assert!(draft.google_form_url.is_empty());
}

#[tokio::test]
async fn test_minted_ids_unique() {
    let mut editor = PartyEditor::new();
    let mut ids = HashSet::new();

    // Fast enough that many drafts share a millisecond.
    for _ in 0..200 {
        let id = editor.begin_create().id.clone();
        assert!(ids.insert(id), "duplicate party id minted");
    }
}

#[tokio::test]
async fn test_update_preserves_position() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;
    let mut editor = PartyEditor::new();

    create_party(&mut editor, &mut site, "A").await;
    let b = create_party(&mut editor, &mut site, "B").await;
    create_party(&mut editor, &mut site, "C").await;

    let order_before: Vec<String> = site.parties().iter().map(|p| p.id.clone()).collect();

    editor.begin_edit(&b);
    editor.draft_mut().unwrap().title = "B updated".to_string();
    editor.save(&mut site).await.unwrap();

    let order_after: Vec<String> = site.parties().iter().map(|p| p.id.clone()).collect();
    assert_eq!(order_before, order_after);
    assert_eq!(
        catalog::party_by_id(&site, &b.id).unwrap().title,
        "B updated"
    );
}

#[tokio::test]
async fn test_delete_is_exact() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;
    let mut editor = PartyEditor::new();

    let a = create_party(&mut editor, &mut site, "A").await;
    let b = create_party(&mut editor, &mut site, "B").await;
    let c = create_party(&mut editor, &mut site, "C").await;

    // Declined prompt is a no-op.
    assert!(!editor.delete(&mut site, &b.id, false).await.unwrap());
    assert_eq!(site.parties().len(), 7);

    assert!(editor.delete(&mut site, &b.id, true).await.unwrap());
    assert_eq!(site.parties().len(), 6);
    assert!(catalog::party_by_id(&site, &b.id).is_none());

    let ids: Vec<&str> = site.parties().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", a.id.as_str(), c.id.as_str()]);

    let err = editor.delete(&mut site, "no-such-id", true).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_save_validation() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;
    let mut editor = PartyEditor::new();

    // Blank title
    editor.begin_create();
    {
        let draft = editor.draft_mut().unwrap();
        draft.title = "   ".to_string();
        draft.google_form_url = "https://x".to_string();
    }
    assert!(matches!(
        editor.save(&mut site).await.unwrap_err(),
        AppError::Validation(_)
    ));

    // Missing application form URL (the create default)
    editor.begin_create();
    assert!(matches!(
        editor.save(&mut site).await.unwrap_err(),
        AppError::Validation(_)
    ));

    // Applicants above capacity
    editor.begin_create();
    {
        let draft = editor.draft_mut().unwrap();
        draft.google_form_url = "https://x".to_string();
        draft.capacity = 5;
        draft.current_applicants = 6;
    }
    assert!(matches!(
        editor.save(&mut site).await.unwrap_err(),
        AppError::Validation(_)
    ));

    // Negative price
    editor.begin_create();
    {
        let draft = editor.draft_mut().unwrap();
        draft.google_form_url = "https://x".to_string();
        draft.price = -1;
    }
    assert!(matches!(
        editor.save(&mut site).await.unwrap_err(),
        AppError::Validation(_)
    ));

    // Nothing reached the collection.
    assert_eq!(site.parties().len(), 4);
}

#[tokio::test]
async fn test_editor_requires_a_draft() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;
    let mut editor = PartyEditor::new();

    assert!(matches!(
        editor.save(&mut site).await.unwrap_err(),
        AppError::NoDraft
    ));
    assert!(matches!(editor.add_gallery_slot(), Err(AppError::NoDraft)));
    assert!(matches!(
        editor.set_main_image_url("https://x"),
        Err(AppError::NoDraft)
    ));

    // Discarding drops the draft without touching the collection.
    editor.begin_create();
    editor.discard();
    assert!(editor.draft().is_none());
    assert_eq!(site.parties().len(), 4);
}

#[tokio::test]
async fn test_gate_correctness() {
    let fixture = TestFixture::new().await;
    let session = fixture.session();
    let config = fixture.config();

    let mut gate = AccessGate::new(&config);
    assert_eq!(gate.mode(), AccessMode::Visitor);

    // Wrong pair: no state change beyond the error indicator.
    assert!(!gate.login("wrong", "wrong", &session).await.unwrap());
    assert_eq!(gate.mode(), AccessMode::Visitor);
    assert!(!session.is_admin_session().await.unwrap());
    assert!(gate.login_error_active());

    // Case variants and empty input fail too.
    assert!(!gate
        .login("BEGLES_MANAGER", "BMB9696!", &session)
        .await
        .unwrap());
    assert!(!gate.login("begles_manager", "bmb9696!", &session).await.unwrap());
    assert!(!gate.login("", "", &session).await.unwrap());
    assert_eq!(gate.mode(), AccessMode::Visitor);

    // Exact pair succeeds and mirrors the flag.
    assert!(gate
        .login("begles_manager", "BMB9696!", &session)
        .await
        .unwrap());
    assert!(gate.is_admin());
    assert!(session.is_admin_session().await.unwrap());
    assert!(!gate.login_error_active());
}

#[tokio::test]
async fn test_login_error_flash_clears() {
    let fixture = TestFixture::new().await;
    let session = fixture.session();
    let config = fixture.config();

    let mut gate = AccessGate::new(&config);
    assert!(!gate.login("wrong", "wrong", &session).await.unwrap());
    assert!(gate.login_error_active());

    tokio::time::sleep(Duration::from_millis(550)).await;
    assert!(!gate.login_error_active());
}

#[tokio::test]
async fn test_session_resume_across_reload() {
    let fixture = TestFixture::new().await;
    let session = fixture.session();
    let config = fixture.config();

    // No flag yet: a fresh load starts as visitor.
    let gate = AccessGate::resume(&config, &session).await.unwrap();
    assert_eq!(gate.mode(), AccessMode::Visitor);

    let mut gate = AccessGate::new(&config);
    gate.login("begles_manager", "BMB9696!", &session)
        .await
        .unwrap();

    // Reload within the same session: still admin.
    let resumed = AccessGate::resume(&config, &session).await.unwrap();
    assert!(resumed.is_admin());

    gate.logout(&session).await.unwrap();
    assert_eq!(gate.mode(), AccessMode::Visitor);

    let resumed = AccessGate::resume(&config, &session).await.unwrap();
    assert_eq!(resumed.mode(), AccessMode::Visitor);
}

#[tokio::test]
async fn test_gallery_remove_then_set_targets_shifted_element() {
    let mut editor = PartyEditor::new();
    editor.begin_create();

    for url in ["https://a", "https://b", "https://c", "https://d"] {
        let index = editor.add_gallery_slot().unwrap();
        editor.set_gallery_url(index, url).unwrap();
    }

    editor.remove_gallery_slot(1).unwrap();
    // Now [a, c, d]: index 1 holds what was at index 2.
    editor.set_gallery_url(1, "https://x").unwrap();

    let images: Vec<&str> = editor
        .draft()
        .unwrap()
        .intro_images
        .iter()
        .map(|i| i.as_str())
        .collect();
    assert_eq!(images, vec!["https://a", "https://x", "https://d"]);

    assert!(matches!(
        editor.remove_gallery_slot(9),
        Err(AppError::Validation(_))
    ));
    assert!(matches!(
        editor.set_gallery_url(9, "https://y"),
        Err(AppError::Validation(_))
    ));
}

#[tokio::test]
async fn test_gallery_batch_upload_all_or_nothing() {
    let dir = TempDir::new().unwrap();
    let png = dir.path().join("one.png");
    let jpg = dir.path().join("two.jpg");
    std::fs::write(&png, b"png-bytes").unwrap();
    std::fs::write(&jpg, b"jpg-bytes").unwrap();
    let missing = dir.path().join("missing.png");

    let mut editor = PartyEditor::new();
    editor.begin_create();

    // One unreadable file rejects the whole batch, draft untouched.
    let err = editor
        .append_gallery_files(&[png.clone(), missing])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Media(_)));
    assert!(editor.draft().unwrap().intro_images.is_empty());

    // A clean batch appends in input order.
    let count = editor.append_gallery_files(&[png, jpg]).await.unwrap();
    assert_eq!(count, 2);
    let images = &editor.draft().unwrap().intro_images;
    assert!(images[0].as_str().starts_with("data:image/png;base64,"));
    assert!(images[1].as_str().starts_with("data:image/jpeg;base64,"));
}

#[tokio::test]
async fn test_main_image_upload_and_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("cover.png");
    std::fs::write(&path, b"\x89PNG\r\n").unwrap();

    let mut editor = PartyEditor::new();
    editor.begin_create();

    editor.set_main_image_url("https://example.com/cover.jpg").unwrap();
    assert!(!editor.draft().unwrap().image_url.is_embedded());

    editor.set_main_image_file(&path).await.unwrap();
    let image = &editor.draft().unwrap().image_url;
    assert!(image.is_embedded());
    assert!(image.as_str().starts_with("data:image/png;base64,"));
}

#[tokio::test]
async fn test_encoder_produces_data_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("photo.png");
    std::fs::write(&path, b"\x89PNG\r\n").unwrap();

    let encoded = media::encode_image_file(&path).await.unwrap();
    assert!(encoded.is_embedded());
    assert!(encoded.as_str().starts_with("data:image/png;base64,"));

    let err = media::encode_image_file(Path::new("/no/such/file.png"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Media(_)));
}

#[tokio::test]
async fn test_image_source_tagging() {
    let embedded: ImageSource = serde_json::from_str("\"data:image/png;base64,AAAA\"").unwrap();
    assert!(embedded.is_embedded());

    let external: ImageSource = serde_json::from_str("\"https://example.com/a.png\"").unwrap();
    assert!(matches!(external, ImageSource::External(_)));

    // The tag never leaks into the wire form.
    assert_eq!(
        serde_json::to_string(&external).unwrap(),
        "\"https://example.com/a.png\""
    );
    assert_eq!(
        serde_json::to_string(&embedded).unwrap(),
        "\"data:image/png;base64,AAAA\""
    );

    let empty = ImageSource::default();
    assert!(empty.is_empty());
    assert!(!empty.is_embedded());
}

#[tokio::test]
async fn test_status_labels_round_trip() {
    assert_eq!(
        serde_json::to_string(&PartyStatus::Recruiting).unwrap(),
        "\"모집중\""
    );
    assert_eq!(serde_json::to_string(&PartyStatus::Closed).unwrap(), "\"마감\"");
    assert_eq!(
        serde_json::to_string(&PartyStatus::Completed).unwrap(),
        "\"진행완료\""
    );

    let parsed: PartyStatus = serde_json::from_str("\"마감\"").unwrap();
    assert_eq!(parsed, PartyStatus::Closed);

    assert_eq!(PartyStatus::from_str("진행완료"), Some(PartyStatus::Completed));
    assert_eq!(PartyStatus::from_str("unknown"), None);
    assert!(PartyStatus::Recruiting.is_recruiting());
    assert!(!PartyStatus::Closed.is_recruiting());
}

#[tokio::test]
async fn test_example_scenario_create_save_reload() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;
    let mut editor = PartyEditor::new();

    editor.begin_create();
    {
        let draft = editor.draft_mut().unwrap();
        draft.title = "T".to_string();
        draft.date = "2099-01-01 10:00".to_string();
        draft.location = "L".to_string();
        draft.capacity = 5;
        draft.price = 1000;
        draft.status = PartyStatus::Recruiting;
        draft.google_form_url = "https://x".to_string();
    }
    let saved = editor.save(&mut site).await.unwrap();
    assert!(editor.draft().is_none());

    let reloaded = fixture.site().await;
    let found = catalog::party_by_id(&reloaded, &saved.id).expect("party survives reload");
    assert_eq!(found, &saved);
    assert_eq!(found.title, "T");
    assert_eq!(found.date, "2099-01-01 10:00");
    assert_eq!(found.location, "L");
    assert_eq!(found.capacity, 5);
    assert_eq!(found.price, 1000);
    assert_eq!(found.status, PartyStatus::Recruiting);
    assert_eq!(found.google_form_url, "https://x");
}

#[tokio::test]
async fn test_feature_update_in_place() {
    let fixture = TestFixture::new().await;
    let mut site = fixture.site().await;

    site.update_feature(1, FeatureField::Title, "Wine List".to_string())
        .await
        .unwrap();

    let features = &site.site_info().about_features;
    assert_eq!(features[0].title, "Curated Members");
    assert_eq!(features[1].title, "Wine List");
    assert_eq!(features[2].title, "Private & Safe");

    let err = site
        .update_feature(3, FeatureField::Description, "x".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn test_bootstrap_surface_follows_gate() {
    let fixture = TestFixture::new().await;

    let mut app = crate::App::bootstrap(fixture.config()).await.unwrap();
    assert_eq!(app.surface(), crate::Surface::Public);

    app.gate
        .login("begles_manager", "BMB9696!", &app.session)
        .await
        .unwrap();
    assert_eq!(app.surface(), crate::Surface::Admin);

    // A second bootstrap within the same session resumes as admin.
    let resumed = crate::App::bootstrap(fixture.config()).await.unwrap();
    assert_eq!(resumed.surface(), crate::Surface::Admin);
}

#[tokio::test]
async fn test_catalog_read_contract() {
    let fixture = TestFixture::new().await;
    let site = fixture.site().await;

    let first = &site.parties()[0];
    assert_eq!(
        catalog::application_link(first),
        Some("https://forms.google.com")
    );

    let mut closed = first.clone();
    closed.status = PartyStatus::Closed;
    assert_eq!(catalog::application_link(&closed), None);
    closed.status = PartyStatus::Completed;
    assert_eq!(catalog::application_link(&closed), None);

    // Seed party 1: capacity 20, 12 applicants.
    assert_eq!(catalog::remaining_seats(first), 8);

    assert_eq!(catalog::format_price(150_000), "150,000");
    assert_eq!(catalog::format_price(1_000), "1,000");
    assert_eq!(catalog::format_price(1_234_567), "1,234,567");
    assert_eq!(catalog::format_price(80), "80");
    assert_eq!(catalog::format_price(0), "0");

    assert!(catalog::party_by_id(&site, "no-such-id").is_none());
}
