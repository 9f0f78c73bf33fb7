//! Data-directory loading and cross-table validation.

use slot_core::{
    Cents, Payline, SlotConfig, SlotError, SymbolId, STANDARD_PAYLINES,
};

const DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../data");

#[test]
fn bundled_data_matches_the_standard_machine() {
    let loaded = SlotConfig::load(DATA_DIR).expect("bundled data loads");
    let standard = SlotConfig::standard();

    assert_eq!(loaded.reel_size, 20);
    assert_eq!(loaded.reel_count, 5);
    assert_eq!(loaded.visible_rows, 3);
    assert_eq!(loaded.paylines, standard.paylines);
    assert_eq!(loaded.bet_ladder, standard.bet_ladder);
    assert_eq!(loaded.defaults, standard.defaults);
    assert_eq!(loaded.journal_capacity, standard.journal_capacity);

    assert_eq!(loaded.catalog.len(), standard.catalog.len());
    for (a, b) in loaded.catalog.iter().zip(standard.catalog.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.name, b.name);
        assert_eq!(a.value, b.value);
        assert_eq!(a.payout, b.payout);
        assert!((a.probability - b.probability).abs() < 1e-12);
    }
}

#[test]
fn standard_tables_have_expected_values() {
    let config = SlotConfig::standard();
    assert_eq!(config.max_paylines(), 20);
    assert_eq!(config.paylines.as_slice(), &STANDARD_PAYLINES[..]);

    let seven = config.catalog.get(SymbolId::Seven).unwrap();
    assert_eq!(seven.pays(3), 30);
    assert_eq!(seven.pays(5), 250);
    assert_eq!(seven.pays(2), 0);

    let total: f64 = config.catalog.iter().map(|s| s.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);

    let ladder = &config.bet_ladder;
    assert_eq!(ladder.len(), 11);
    assert_eq!(ladder.get(0).unwrap().total, Cents(20));
    assert_eq!(ladder.get(10).unwrap().total, Cents::units(100));
    assert_eq!(ladder.level_of_total(Cents::units(1)), Some(4));
    assert!(config.validate().is_ok());
}

#[test]
fn missing_directory_is_an_error() {
    let err = SlotConfig::load("/definitely/not/here").unwrap_err();
    assert!(err.to_string().contains("Cannot read"));
}

#[test]
fn validate_rejects_mismatched_ladder() {
    let mut config = SlotConfig::standard();
    config.paylines.truncate(10);
    assert!(matches!(config.validate(), Err(SlotError::Config(_))));
}

#[test]
fn validate_rejects_payline_outside_window() {
    let mut config = SlotConfig::standard();
    config.paylines[0] = Payline::new([(0, 0), (1, 1), (3, 2), (1, 3), (0, 4)]);
    assert!(matches!(config.validate(), Err(SlotError::Config(_))));

    let mut config = SlotConfig::standard();
    config.paylines[0] = Payline::new([(0, 0), (0, 2), (0, 1), (0, 3), (0, 4)]);
    assert!(matches!(config.validate(), Err(SlotError::Config(_))));
}

#[test]
fn validate_rejects_bad_defaults() {
    let mut config = SlotConfig::standard();
    config.defaults.bet_level = 11;
    assert!(config.validate().is_err());

    let mut config = SlotConfig::standard();
    config.defaults.active_paylines = 21;
    assert!(config.validate().is_err());

    let mut config = SlotConfig::standard();
    config.defaults.credits = Cents(-1);
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_wrong_reel_count() {
    let mut config = SlotConfig::standard();
    config.reel_count = 4;
    assert!(matches!(config.validate(), Err(SlotError::Config(_))));
}
