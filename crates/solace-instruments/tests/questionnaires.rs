use solace_core::models::assessment::{QuestionnaireKind, RiskTier};
use solace_instruments::{all_questionnaires, get_questionnaire, questionnaire_for};

#[test]
fn both_instruments_are_registered() {
    let ids: Vec<String> = all_questionnaires()
        .iter()
        .map(|q| q.id().to_string())
        .collect();
    assert_eq!(ids, vec!["phq9", "gad7"]);
}

#[test]
fn short_form_asks_five_questions_each() {
    for questionnaire in all_questionnaires() {
        assert_eq!(
            questionnaire.prompts().len(),
            5,
            "{} prompt count",
            questionnaire.name()
        );
    }
}

#[test]
fn canonical_maxima_stay_on_the_full_instruments() {
    assert_eq!(QuestionnaireKind::Phq9.canonical_max(), 27);
    assert_eq!(QuestionnaireKind::Gad7.canonical_max(), 21);
}

#[test]
fn lookup_by_id() {
    let phq9 = get_questionnaire("phq9").expect("phq9 registered");
    assert_eq!(phq9.name(), "PHQ-9");
    assert_eq!(phq9.kind(), QuestionnaireKind::Phq9);
    assert!(get_questionnaire("vineland3").is_none());
}

#[test]
fn interpretation_exists_for_every_tier() {
    let tiers = [
        RiskTier::Low,
        RiskTier::Medium,
        RiskTier::High,
        RiskTier::Critical,
    ];
    for kind in [QuestionnaireKind::Phq9, QuestionnaireKind::Gad7] {
        let questionnaire = questionnaire_for(kind);
        for tier in tiers {
            assert!(
                questionnaire.interpretation(tier).contains(questionnaire.name()),
                "{} interpretation for {tier:?} should name the instrument",
                questionnaire.name()
            );
        }
    }
}
