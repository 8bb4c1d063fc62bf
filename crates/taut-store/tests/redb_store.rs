use taut_core::store::{IndexReader, IndexStore, IndexWriter};
use taut_core::{Fingerprint, ShortCode, StoreError};
use taut_store::RedbStore;

fn open(dir: &tempfile::TempDir) -> RedbStore {
    RedbStore::open(dir.path().join("links.redb")).unwrap()
}

fn code(s: &str) -> ShortCode {
    ShortCode::new_unchecked(s)
}

#[test]
fn insert_commit_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);

    let mut txn = store.begin_write().unwrap();
    txn.insert_forward(&code("abcd"), "https://example.com")
        .unwrap();
    txn.put_reverse(Fingerprint::of("https://example.com"), &code("abcd"))
        .unwrap();
    txn.commit().unwrap();

    let txn = store.begin_read().unwrap();
    assert_eq!(
        txn.url_for_code("abcd").unwrap().as_deref(),
        Some("https://example.com")
    );
    assert!(txn.url_for_code("doesnotexist").unwrap().is_none());
}

#[test]
fn insert_if_absent_signals_collision() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);

    let mut txn = store.begin_write().unwrap();
    txn.insert_forward(&code("abcd"), "https://example.com")
        .unwrap();

    let err = txn
        .insert_forward(&code("abcd"), "https://other.com")
        .unwrap_err();
    assert!(matches!(err, StoreError::KeyExists(_)));

    // The original entry is untouched by the rejected insert.
    assert_eq!(
        txn.url_for_code("abcd").unwrap().as_deref(),
        Some("https://example.com")
    );
}

#[test]
fn dropped_writer_leaves_no_trace() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);

    {
        let mut txn = store.begin_write().unwrap();
        txn.insert_forward(&code("abcd"), "https://example.com")
            .unwrap();
        txn.put_reverse(Fingerprint::of("https://example.com"), &code("abcd"))
            .unwrap();
        // Dropped without commit.
    }

    let txn = store.begin_read().unwrap();
    assert!(txn.url_for_code("abcd").unwrap().is_none());

    let txn = store.begin_write().unwrap();
    assert!(txn
        .code_for_fingerprint(Fingerprint::of("https://example.com"))
        .unwrap()
        .is_none());
}

#[test]
fn entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let fingerprint = Fingerprint::of("https://example.com");

    {
        let store = open(&dir);
        let mut txn = store.begin_write().unwrap();
        txn.insert_forward(&code("abcd"), "https://example.com")
            .unwrap();
        txn.put_reverse(fingerprint, &code("abcd")).unwrap();
        txn.commit().unwrap();
    }

    let store = open(&dir);
    let txn = store.begin_read().unwrap();
    assert_eq!(
        txn.url_for_code("abcd").unwrap().as_deref(),
        Some("https://example.com")
    );

    let txn = store.begin_write().unwrap();
    assert_eq!(
        txn.code_for_fingerprint(fingerprint).unwrap(),
        Some(code("abcd"))
    );
}

#[test]
fn readers_see_snapshot_taken_at_begin() {
    let dir = tempfile::tempdir().unwrap();
    let store = open(&dir);

    let reader = store.begin_read().unwrap();

    let mut txn = store.begin_write().unwrap();
    txn.insert_forward(&code("abcd"), "https://example.com")
        .unwrap();
    txn.commit().unwrap();

    // The pre-existing snapshot does not observe the later commit.
    assert!(reader.url_for_code("abcd").unwrap().is_none());
    let fresh = store.begin_read().unwrap();
    assert!(fresh.url_for_code("abcd").unwrap().is_some());
}
