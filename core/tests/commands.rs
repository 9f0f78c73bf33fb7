//! JSON command surface used by the runner's IPC mode.

use slot_core::{Cents, CommandOutcome, SlotCommand, SlotError, SlotSession};

fn session() -> SlotSession {
    SlotSession::standard(99).unwrap()
}

fn parse(line: &str) -> SlotCommand {
    serde_json::from_str(line).unwrap()
}

#[test]
fn commands_parse_from_json() {
    assert_eq!(parse(r#"{"cmd":"spin"}"#), SlotCommand::Spin);
    assert_eq!(
        parse(r#"{"cmd":"set_total_bet","amount":2.0}"#),
        SlotCommand::SetTotalBet { amount: 2.0 }
    );
    assert_eq!(
        parse(r#"{"cmd":"set_active_paylines","count":7}"#),
        SlotCommand::SetActivePaylines { count: 7 }
    );
    assert_eq!(parse(r#"{"cmd":"get_state"}"#), SlotCommand::GetState);
    assert!(serde_json::from_str::<SlotCommand>(r#"{"cmd":"jackpot"}"#).is_err());
}

#[test]
fn apply_matches_direct_calls() {
    let mut via_commands = session();
    let mut direct = session();

    via_commands.apply(parse(r#"{"cmd":"set_active_paylines","count":5}"#)).unwrap();
    via_commands.apply(parse(r#"{"cmd":"increase_total_bet"}"#)).unwrap();
    via_commands.apply(parse(r#"{"cmd":"add_credits","amount":25.5}"#)).unwrap();
    for _ in 0..10 {
        via_commands.apply(SlotCommand::Spin).unwrap();
    }

    direct.set_active_paylines(5).unwrap();
    direct.increase_total_bet();
    direct.add_credits(Cents(2_550)).unwrap();
    for _ in 0..10 {
        direct.spin().unwrap();
    }

    assert_eq!(via_commands.state(), direct.state());
}

#[test]
fn off_ladder_total_is_rejected() {
    let mut s = session();
    let err = s.apply(SlotCommand::SetTotalBet { amount: 3.33 }).unwrap_err();
    assert!(matches!(err, SlotError::InvalidBetAmount { amount } if amount == Cents(333)));
    assert!(err.is_rejection());
    assert_eq!(s.state().total_bet, Cents::units(1));
}

#[test]
fn non_finite_amounts_are_rejected() {
    let mut s = session();
    assert!(s.apply(SlotCommand::AddCredits { amount: f64::NAN }).is_err());
    assert!(s.apply(SlotCommand::SetTotalBet { amount: f64::INFINITY }).is_err());
    assert_eq!(s.state().credits, Cents::units(1_000));
}

#[test]
fn outcomes_serialize_with_a_result_tag() {
    let mut s = session();
    let outcome = s.apply(SlotCommand::IncreasePaylines).unwrap();
    assert_eq!(outcome, CommandOutcome::Paylines { active_paylines: 20 });

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["result"], "paylines");
    assert_eq!(json["active_paylines"], 20);

    let described = s.apply(SlotCommand::Describe).unwrap();
    assert_eq!(described, CommandOutcome::Description { lines: vec![] });
}

#[test]
fn state_command_returns_a_snapshot() {
    let mut s = session();
    s.spin().unwrap();
    match s.apply(SlotCommand::GetState).unwrap() {
        CommandOutcome::State { state } => assert_eq!(state, s.state()),
        other => panic!("unexpected outcome: {other:?}"),
    }
}
