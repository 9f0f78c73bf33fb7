//! Session lifecycle: spins, balance bookkeeping, snapshots and reset.

use slot_core::{
    event::SessionEvent, Cents, SessionDefaults, SlotConfig, SlotError, SlotSession,
};

fn session(seed: u64) -> SlotSession {
    let _ = env_logger::builder().is_test(true).try_init();
    SlotSession::standard(seed).expect("standard session")
}

fn poor_session(credits: Cents) -> SlotSession {
    let mut config = SlotConfig::standard();
    config.defaults = SessionDefaults {
        credits,
        ..SessionDefaults::default()
    };
    SlotSession::new(config, 5).expect("session with custom defaults")
}

#[test]
fn spin_moves_money_and_counters() {
    let mut s = session(42);
    let outcome = s.spin().unwrap();
    let state = s.state();

    assert_eq!(state.spins, 1);
    assert_eq!(state.total_wagered, Cents::units(1));
    assert_eq!(state.total_won, outcome.total_win);
    assert_eq!(state.last_win, outcome.total_win);
    assert_eq!(state.credits, Cents::units(1_000) - Cents::units(1) + outcome.total_win);
    assert_eq!(state.last_result.as_ref(), Some(&outcome));
    assert_eq!(outcome.spin, 1);
}

#[test]
fn spin_result_is_consistent_with_its_lines() {
    let mut s = session(2024);
    for _ in 0..200 {
        let outcome = s.spin().unwrap();
        assert_eq!(outcome.grid.row_count(), 3);
        assert_eq!(outcome.grid.col_count(), 5);

        let sum: Cents = outcome.win_lines.iter().map(|w| w.win).sum();
        assert_eq!(sum, outcome.total_win);
        assert!(outcome.win_lines.windows(2).all(|w| w[0].payline_index < w[1].payline_index));
        for line in &outcome.win_lines {
            assert!(line.count >= 3 && line.count <= 5);
            assert_eq!(line.symbols.len(), line.count);
            assert!(line.symbols.iter().all(|s| !s.is_wild()));
        }
    }
}

#[test]
fn statistics_accumulate_over_many_spins() {
    let mut s = session(77);
    let mut won = Cents::ZERO;
    for _ in 0..100 {
        won += s.spin().unwrap().total_win;
    }
    let state = s.state();
    assert_eq!(state.spins, 100);
    assert_eq!(state.total_wagered, Cents::units(100));
    assert_eq!(state.total_won, won);
    assert_eq!(state.credits, Cents::units(1_000) - Cents::units(100) + won);
    assert_eq!(state.net(), won - Cents::units(100));
    assert!(state.return_to_player.is_some());
}

#[test]
fn insufficient_credits_rejects_without_mutation() {
    let mut s = poor_session(Cents(99));
    let before = s.state();

    let err = s.spin().unwrap_err();
    assert!(
        matches!(err, SlotError::InsufficientCredits { credits, total_bet }
            if credits == Cents(99) && total_bet == Cents::units(1))
    );
    assert_eq!(s.state(), before, "A rejected spin must not change state");

    // Lowering the stake makes the same balance playable again.
    s.set_active_paylines(1).unwrap();
    assert!(s.spin().is_ok());
}

#[test]
fn credits_never_go_negative() {
    let mut s = poor_session(Cents::units(3));
    let mut rejected = false;
    for _ in 0..1_000 {
        match s.spin() {
            Ok(_) => assert!(s.state().credits >= Cents::ZERO),
            Err(SlotError::InsufficientCredits { .. }) => {
                rejected = true;
                break;
            }
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
    let state = s.state();
    assert!(state.credits >= Cents::ZERO);
    if rejected {
        assert!(state.credits < state.total_bet);
    }
}

#[test]
fn get_state_is_idempotent() {
    let mut s = session(9);
    s.spin().unwrap();
    assert_eq!(s.state(), s.state());
}

#[test]
fn snapshots_are_detached_copies() {
    let mut s = session(9);
    s.spin().unwrap();

    let mut snapshot = s.state();
    snapshot.credits = Cents::units(1_000_000);
    snapshot.last_result = None;
    snapshot.active_paylines = 1;

    let fresh = s.state();
    assert_ne!(fresh.credits, Cents::units(1_000_000));
    assert!(fresh.last_result.is_some());
    assert_eq!(fresh.active_paylines, 20);
}

#[test]
fn reset_restores_defaults() {
    let mut s = session(31);
    s.set_active_paylines(5).unwrap();
    s.set_total_bet(Cents::units(10)).unwrap();
    s.add_credits(Cents::units(50)).unwrap();
    for _ in 0..10 {
        s.spin().unwrap();
    }

    s.reset();
    let state = s.state();
    assert_eq!(state.credits, Cents::units(1_000));
    assert_eq!(state.bet_per_line, Cents(5));
    assert_eq!(state.total_bet, Cents::units(1));
    assert_eq!(state.active_paylines, 20);
    assert_eq!(state.spins, 0);
    assert_eq!(state.total_won, Cents::ZERO);
    assert_eq!(state.total_wagered, Cents::ZERO);
    assert_eq!(state.last_win, Cents::ZERO);
    assert!(state.last_result.is_none());
    assert!(state.return_to_player.is_none());
    assert_eq!(s.reels().len(), 5);
    assert!(s.reels().iter().all(|r| r.len() == 20));
}

#[test]
fn journal_records_spins_and_rejections() {
    let mut s = session(3);
    s.spin().unwrap();
    let _ = s.set_total_bet(Cents(333));
    s.reset();

    let events = s.journal().events().unwrap();
    assert!(matches!(events[0], SessionEvent::SessionStarted { seed: 3 }));
    assert!(events.iter().any(|e| matches!(e, SessionEvent::SpinSettled { spin: 1, .. })));
    assert!(events.iter().any(|e| matches!(
        e,
        SessionEvent::OperationRejected { operation, .. } if operation == "set_total_bet"
    )));
    assert!(events.iter().any(|e| matches!(e, SessionEvent::SessionReset)));
    assert!(matches!(events.last(), Some(SessionEvent::ReelsBuilt { .. })));
}

#[test]
fn journal_is_bounded() {
    let mut config = SlotConfig::standard();
    config.journal_capacity = 8;
    let mut s = SlotSession::new(config, 1).unwrap();
    for _ in 0..50 {
        s.spin().unwrap();
    }
    assert_eq!(s.journal().len(), 8);
    assert_eq!(s.journal().recorded(), 52, "started + reels built + 50 spins");
    let first_seq = s.journal().entries().next().unwrap().seq;
    assert_eq!(first_seq, 44);
}

#[test]
fn describe_reports_the_last_spin() {
    let mut s = session(12);
    assert!(s.describe_last_result().is_none());

    s.set_active_paylines(4).unwrap();
    s.spin().unwrap();
    let lines = s.describe_last_result().unwrap();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("Payline 1: "));
}

#[test]
fn invalid_config_is_refused() {
    let mut config = SlotConfig::standard();
    config.defaults.active_paylines = 0;
    assert!(matches!(SlotSession::new(config, 1), Err(SlotError::Config(_))));
}
