use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use taut_engine::{AllocationEngine, EngineConfig, RandomGenerator};
use taut_store::RedbStore;

fn open_engine(dir: &tempfile::TempDir) -> AllocationEngine<RedbStore, RandomGenerator> {
    let store = RedbStore::open(dir.path().join("links.redb")).unwrap();
    AllocationEngine::new(store, RandomGenerator::new(), EngineConfig::default())
}

#[test]
fn round_trip_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let url = "https://example.com/cats.jpg";

    let code = {
        let engine = open_engine(&dir);
        engine.submit(url).unwrap()
    };

    let engine = open_engine(&dir);
    assert_eq!(engine.resolve(code.as_str()).unwrap(), url);
    // Same code after reopen: the reverse index is durable too.
    assert_eq!(engine.submit(url).unwrap(), code);
}

#[test]
fn concurrent_submissions_allocate_distinct_codes() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(open_engine(&dir));

    let mut handles = Vec::new();
    for worker in 0..4 {
        let engine = Arc::clone(&engine);
        handles.push(thread::spawn(move || {
            (0..25)
                .map(|i| {
                    let url = format!("https://example.com/{worker}/{i}");
                    let code = engine.submit(&url).unwrap();
                    (url, code)
                })
                .collect::<Vec<_>>()
        }));
    }

    let mut codes = HashSet::new();
    for handle in handles {
        for (url, code) in handle.join().unwrap() {
            assert!(
                codes.insert(code.as_str().to_owned()),
                "duplicate code: {code}"
            );
            assert_eq!(engine.resolve(code.as_str()).unwrap(), url);
        }
    }
    assert_eq!(codes.len(), 100);
}

#[test]
fn racing_resubmissions_agree_on_one_code() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(open_engine(&dir));
    let url = "https://example.com/shared";

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.submit(url).unwrap())
        })
        .collect();

    let codes: HashSet<_> = handles
        .into_iter()
        .map(|handle| handle.join().unwrap().as_str().to_owned())
        .collect();

    // The write transaction spans the whole submission, so racing callers
    // can never both miss the reverse-index check.
    assert_eq!(codes.len(), 1);
}
