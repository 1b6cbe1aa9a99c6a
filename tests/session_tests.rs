//! Session controller tests.
//!
//! Covers the layer between a host and the rules engine:
//! - Accepted and rejected actions
//! - Resuming from memory and file stores
//! - Recovery from corrupt or invalid saves
//! - Concurrent callers through `SharedSession`
//! - Transport responses

use std::thread;

use scoundrel::cards::Card;
use scoundrel::core::{Action, GameConfig, GameState};
use scoundrel::rules::{ActionViolation, RuleError};
use scoundrel::session::codec;
use scoundrel::session::{
    FileStore, MemoryStore, Response, SessionController, SessionId, SessionSnapshot,
    SessionStore, SharedSession,
};

fn config() -> GameConfig {
    GameConfig::default()
}

// =============================================================================
// Actions
// =============================================================================

#[test]
fn test_fresh_session_deals_full_room() {
    let session = SessionController::with_seed(config(), 1);

    assert_eq!(session.current().room().len(), 4);
    assert_eq!(session.current().cards_remaining(), 40);
    assert_eq!(session.current().health(), 20);
    assert!(session.can_avoid_room());
    assert!(!session.is_game_over());
    assert_eq!(session.legal_actions().len(), 5);
}

#[test]
fn test_select_records_history_and_events() {
    let mut session = SessionController::with_seed(config(), 1);

    session.apply(Action::select(3)).unwrap();

    assert_eq!(session.current().action_count(), 1);
    assert_eq!(session.current().room().len(), 3);
    assert!(!session.last_events().is_empty());
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut session = SessionController::with_seed(config(), 1);
    let before = session.current().clone();

    let err = session.apply(Action::select(4)).unwrap_err();

    assert_eq!(
        err,
        RuleError::IllegalAction(ActionViolation::IndexOutOfRange { index: 4, room_len: 4 })
    );
    assert_eq!(session.current(), &before);
}

#[test]
fn test_game_runs_to_completion() {
    let mut session = SessionController::with_seed(config(), 9);

    while !session.is_game_over() {
        session.apply(Action::select(0)).unwrap();
    }

    assert!(session.score().is_some());
    assert!(session.legal_actions().is_empty());
    assert!(matches!(
        session.apply(Action::select(0)),
        Err(RuleError::IllegalAction(ActionViolation::GameOver))
    ));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_resume_from_memory_store() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_seed(config(), 12).with_store(store.clone());
    session.apply(Action::AvoidRoom).unwrap();
    session.apply(Action::select(1)).unwrap();

    let resumed = SessionController::resume(config(), store);

    assert_eq!(resumed.id(), session.id());
    assert_eq!(resumed.current(), session.current());
    assert!(!resumed.can_avoid_room());
}

#[test]
fn test_resume_from_empty_store_starts_and_saves_game() {
    let store = MemoryStore::new();

    let session = SessionController::resume(config(), store.clone());

    assert_eq!(session.current().action_count(), 0);
    let saved = codec::decode(&store.bytes().unwrap()).unwrap();
    assert_eq!(saved, session.snapshot());
}

#[test]
fn test_corrupt_save_replaced_by_fresh_game() {
    let store = MemoryStore::new();
    store.set_bytes(vec![codec::FORMAT_VERSION, 0xde, 0xad]);

    let session = SessionController::resume(config(), store.clone());

    assert_eq!(session.current().room().len(), 4);
    assert_eq!(session.current().action_count(), 0);
    let saved = codec::decode(&store.bytes().unwrap()).unwrap();
    assert_eq!(saved.id, session.id());
}

#[test]
fn test_invalid_saved_game_replaced() {
    let broken = GameState::builder()
        .room([Card::clubs(2), Card::clubs(3)])
        .health(25)
        .build();
    let snapshot = SessionSnapshot {
        id: SessionId::new(),
        state: broken,
    };
    let store = MemoryStore::new();
    store.set_bytes(codec::encode(&snapshot).unwrap());

    let session = SessionController::resume(config(), store);

    assert_ne!(session.id(), snapshot.id);
    assert_eq!(session.current().health(), 20);
}

#[test]
fn test_saved_game_with_empty_room_replaced() {
    let stuck = GameState::builder()
        .deck([Card::clubs(5), Card::hearts(3)])
        .build();
    let snapshot = SessionSnapshot {
        id: SessionId::new(),
        state: stuck,
    };
    let store = MemoryStore::new();
    store.set_bytes(codec::encode(&snapshot).unwrap());

    let session = SessionController::resume(config(), store);

    assert_ne!(session.id(), snapshot.id);
    assert_eq!(session.current().room().len(), 4);
    assert!(!session.legal_actions().is_empty());
}

#[test]
fn test_saved_game_from_other_config_replaced() {
    let foreign = GameState::builder()
        .deck([Card::clubs(5), Card::hearts(3)])
        .room([Card::spades(2), Card::diamonds(4)])
        .max_health(500)
        .build();
    let snapshot = SessionSnapshot {
        id: SessionId::new(),
        state: foreign,
    };
    let store = MemoryStore::new();
    store.set_bytes(codec::encode(&snapshot).unwrap());

    let session = SessionController::resume(config(), store);

    assert_ne!(session.id(), snapshot.id);
    assert_eq!(session.current().max_health(), 20);
    assert_eq!(session.current().health(), 20);
}

#[test]
fn test_resume_from_file_store() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scoundrel.session");

    let mut session =
        SessionController::with_seed(config(), 21).with_store(FileStore::new(&path));
    session.apply(Action::select(0)).unwrap();
    let expected = session.snapshot();
    drop(session);

    let resumed = SessionController::resume(config(), FileStore::new(&path));

    assert_eq!(resumed.snapshot(), expected);
}

#[test]
fn test_finished_game_survives_resume() {
    let store = MemoryStore::new();
    let mut session = SessionController::with_seed(config(), 5).with_store(store.clone());
    while !session.is_game_over() {
        session.apply(Action::select(0)).unwrap();
    }

    let resumed = SessionController::resume(config(), store);

    assert!(resumed.is_game_over());
    assert_eq!(resumed.score(), session.score());
}

#[test]
fn test_store_load_after_save() {
    let mut store = MemoryStore::new();
    let session = SessionController::with_seed(config(), 2);

    store.save(&session.snapshot()).unwrap();

    assert_eq!(store.load().unwrap(), Some(session.snapshot()));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_shared_session_linearizes_avoids() {
    let shared = SharedSession::new(SessionController::with_seed(config(), 40));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let session = shared.clone();
            thread::spawn(move || session.apply(Action::AvoidRoom).is_ok())
        })
        .collect();
    let accepted = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|ok| *ok)
        .count();

    // Only the first avoid can win; the rest see avoided_previous_room
    assert_eq!(accepted, 1);
    assert_eq!(shared.current().action_count(), 1);
}

#[test]
fn test_shared_session_concurrent_selects() {
    let shared = SharedSession::new(SessionController::with_seed(config(), 41));

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let session = shared.clone();
            thread::spawn(move || session.apply(Action::select(0)).map(|s| s.action_count()))
        })
        .collect();
    let mut counts: Vec<usize> = handles
        .into_iter()
        .filter_map(|h| h.join().unwrap().ok())
        .collect();
    counts.sort_unstable();

    // Each accepted action saw a distinct, consecutive history length
    let expected: Vec<usize> = (1..=counts.len()).collect();
    assert_eq!(counts, expected);
    assert_eq!(shared.current().action_count(), counts.len());
}

#[test]
fn test_shared_session_with_closure() {
    let shared: SharedSession = SessionController::with_seed(config(), 42).into();

    let id = shared.with(|session| {
        session.start_new_game_with_seed(8);
        session.id()
    });

    assert_eq!(shared.view().session_id, id);
    assert_eq!(shared.current().seed(), 8);
}

// =============================================================================
// Transport
// =============================================================================

#[test]
fn test_handle_ok_response_json() {
    let mut session = SessionController::with_seed(config(), 60);

    let response = session.handle(Action::AvoidRoom);
    assert!(response.is_ok());

    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["state"]["health"], 20);
    assert_eq!(json["state"]["can_avoid_room"], false);
    assert_eq!(json["state"]["avoided_previous_room"], true);
    assert_eq!(json["state"]["current_room"].as_array().unwrap().len(), 4);
}

#[test]
fn test_handle_rejected_response() {
    let mut session = SessionController::with_seed(config(), 60);
    session.handle(Action::AvoidRoom);

    let response = session.handle(Action::AvoidRoom);

    match response {
        Response::Rejected { reason } => assert!(!reason.is_empty()),
        Response::Ok { .. } => panic!("second avoid should be rejected"),
    }
}

#[test]
fn test_action_from_json_request() {
    let mut session = SessionController::with_seed(config(), 61);
    let action: Action = serde_json::from_str(r#"{"select_card":{"index":1}}"#).unwrap();

    let response = session.handle(action);

    assert!(response.is_ok());
    assert_eq!(session.current().room().len(), 3);
}
