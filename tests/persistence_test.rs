//! Quota persistence across restarts with the file-backed store.

mod common;

use std::sync::Arc;

use common::{StudioFixture, TEST_ENDPOINT};
use serp_studio::adapters::mock::MockResponse;
use serp_studio::adapters::FileKeyValueStore;
use serp_studio::quota::QuotaStore;
use serp_studio::studio::Studio;
use tempfile::TempDir;

fn studio_with_store(fixture: &StudioFixture, store: Arc<FileKeyValueStore>) -> Studio {
    let mut collaborators = fixture.collaborators();
    collaborators.store = store;
    Studio::new(collaborators, TEST_ENDPOINT)
}

#[tokio::test]
async fn test_count_survives_restart() {
    let dir = TempDir::new().unwrap();
    let fixture = StudioFixture::new();
    fixture
        .http
        .set_default_response(MockResponse::completion("T\nD"));

    {
        let mut studio = studio_with_store(&fixture, Arc::new(FileKeyValueStore::in_dir(dir.path())));
        studio.rewrite().await.unwrap();
        studio.rewrite().await.unwrap();
    }

    let studio = studio_with_store(&fixture, Arc::new(FileKeyValueStore::in_dir(dir.path())));
    assert_eq!(studio.quota().rewrite_count, 2);
    assert!(!studio.quota().is_member);
}

#[test]
fn test_membership_survives_restart() {
    let dir = TempDir::new().unwrap();

    let mut quota = QuotaStore::open(Arc::new(FileKeyValueStore::in_dir(dir.path())));
    quota.grant_membership();

    let reopened = QuotaStore::open(Arc::new(FileKeyValueStore::in_dir(dir.path())));
    assert!(reopened.state().is_member);
}

#[test]
fn test_corrupt_state_file_starts_fresh() {
    let dir = TempDir::new().unwrap();
    let store = FileKeyValueStore::in_dir(dir.path());
    std::fs::write(store.state_path(), "{ not json").unwrap();

    let mut quota = QuotaStore::open(Arc::new(store));
    assert_eq!(quota.state().rewrite_count, 0);

    quota.increment_count();
    let reopened = QuotaStore::open(Arc::new(FileKeyValueStore::in_dir(dir.path())));
    assert_eq!(reopened.state().rewrite_count, 1);
}
