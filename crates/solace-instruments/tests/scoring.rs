use solace_core::models::assessment::RiskTier;
use solace_instruments::scoring::{ANSWER_SCALE, classify, parse_answer};

#[test]
fn classification_boundaries() {
    assert_eq!(classify(0), RiskTier::Low);
    assert_eq!(classify(4), RiskTier::Low);
    assert_eq!(classify(5), RiskTier::Medium);
    assert_eq!(classify(9), RiskTier::Medium);
    assert_eq!(classify(10), RiskTier::High);
    assert_eq!(classify(14), RiskTier::High);
    assert_eq!(classify(15), RiskTier::Critical);
    assert_eq!(classify(27), RiskTier::Critical);
}

#[test]
fn escalation_applies_to_high_and_critical_only() {
    assert!(!RiskTier::Low.needs_escalation());
    assert!(!RiskTier::Medium.needs_escalation());
    assert!(RiskTier::High.needs_escalation());
    assert!(RiskTier::Critical.needs_escalation());
}

#[test]
fn scale_accepts_all_item_scores() {
    for value in 0..=3 {
        assert!(ANSWER_SCALE.contains(value));
    }
    assert!(!ANSWER_SCALE.contains(4));
}

#[test]
fn parse_accepts_in_range_integers() {
    assert_eq!(parse_answer("0").unwrap(), 0);
    assert_eq!(parse_answer("3").unwrap(), 3);
    assert_eq!(parse_answer(" 2 ").unwrap(), 2);
}

#[test]
fn parse_rejects_out_of_range_and_garbage() {
    for input in ["4", "7", "-1", "abc", "2.5", "2abc", ""] {
        assert!(
            parse_answer(input).is_err(),
            "expected {input:?} to be rejected"
        );
    }
}
