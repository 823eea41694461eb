//! End-to-end engine behavior: catalog JSON in, diagnosis out.

use patho_solver::{
    MatchingConfig, MatchingEngine, PathologyCatalog, PathologyId, SymptomVector, ThresholdPolicy,
};

fn engine_catalog(json: &str) -> PathologyCatalog {
    PathologyCatalog::from_json(json).expect("catalog should parse")
}

#[test]
fn full_match_is_returned_with_its_id() {
    let catalog = engine_catalog(
        r#"{"p1": {"nom": "P1", "criteres": {"siege": "Lombaire", "type_douleur": "mecanique"}}}"#,
    );
    let engine = MatchingEngine::new(&catalog);

    let vector = SymptomVector::new()
        .with("siege", "Lombaire")
        .with("type_douleur", "mecanique");

    let result = engine.diagnose(&vector).expect("100% should match");
    assert_eq!(result.pathology_id, PathologyId::new("p1"));
    assert!((result.confidence - 100.0).abs() < f64::EPSILON);
    assert!((result.display_confidence() - 100.0).abs() < f64::EPSILON);
}

#[test]
fn exactly_half_is_rejected_by_the_strict_gate() {
    let catalog = engine_catalog(
        r#"{"p1": {"nom": "P1", "criteres": {"siege": "Lombaire", "type_douleur": "mecanique"}}}"#,
    );
    let engine = MatchingEngine::new(&catalog);

    let vector = SymptomVector::new().with("siege", "Lombaire");
    assert!(engine.diagnose(&vector).is_none());
}

#[test]
fn tie_goes_to_the_earlier_catalog_entry() {
    let catalog = engine_catalog(
        r#"{
            "p1": {"nom": "P1", "criteres": {"a": "x"}},
            "p2": {"nom": "P2", "criteres": {"a": "x", "b": "y"}}
        }"#,
    );
    let engine = MatchingEngine::new(&catalog);

    // Both score 100%
    let vector = SymptomVector::new().with("a", "x").with("b", "y");
    let result = engine.diagnose(&vector).unwrap();
    assert_eq!(result.pathology_id, PathologyId::new("p1"));
}

#[test]
fn empty_catalog_always_reports_no_match() {
    let catalog = engine_catalog("{}");
    let engine = MatchingEngine::new(&catalog);

    assert!(engine.diagnose(&SymptomVector::new()).is_none());
    assert!(engine
        .diagnose(&SymptomVector::new().with("siege", "Lombaire"))
        .is_none());
}

#[test]
fn list_criterion_matches_members_only() {
    let catalog =
        engine_catalog(r#"{"p1": {"nom": "P1", "criteres": {"calmee_par": ["A", "B"]}}}"#);
    let engine = MatchingEngine::new(&catalog);

    for value in ["A", "B"] {
        let result = engine
            .diagnose(&SymptomVector::new().with("calmee_par", value))
            .unwrap();
        assert_eq!(result.pathology_id, PathologyId::new("p1"));
    }
    assert!(engine
        .diagnose(&SymptomVector::new().with("calmee_par", "C"))
        .is_none());
    assert!(engine.diagnose(&SymptomVector::new()).is_none());
}

#[test]
fn vector_with_no_recognized_answers_never_matches() {
    let catalog = PathologyCatalog::load_embedded().unwrap();
    let engine = MatchingEngine::new(&catalog);

    let vector = SymptomVector::new()
        .with("couleur_preferee", "bleu")
        .with("aliment", "soupe");
    assert!(engine.diagnose(&vector).is_none());
}

#[test]
fn inclusive_policy_accepts_the_boundary() {
    let catalog = engine_catalog(
        r#"{"p1": {"nom": "P1", "criteres": {"siege": "Lombaire", "type_douleur": "mecanique"}}}"#,
    );
    let config = MatchingConfig {
        threshold_policy: ThresholdPolicy::Inclusive,
        ..MatchingConfig::default()
    };
    let engine = MatchingEngine::with_config(&catalog, config);

    let vector = SymptomVector::new().with("siege", "Lombaire");
    let result = engine.diagnose(&vector).unwrap();
    assert!((result.confidence - 50.0).abs() < f64::EPSILON);
}

#[test]
fn sole_full_match_is_always_returned() {
    let catalog = engine_catalog(r#"{"p1": {"nom": "P1", "criteres": {"siege": "Cervical"}}}"#);
    let engine = MatchingEngine::new(&catalog);

    let result = engine
        .diagnose(&SymptomVector::new().with("siege", "Cervical"))
        .unwrap();
    assert!((result.confidence - 100.0).abs() < f64::EPSILON);
}

#[test]
fn two_thirds_match_clears_the_gate_and_rounds_for_display() {
    let catalog = engine_catalog(
        r#"{"p1": {"nom": "P1", "criteres": {"a": "x", "b": "y", "c": "z"}}}"#,
    );
    let engine = MatchingEngine::new(&catalog);

    let vector = SymptomVector::new().with("a", "x").with("b", "y");
    let result = engine.diagnose(&vector).unwrap();
    // Raw value is 66.666..., display rounds to one decimal
    assert!(result.confidence > 66.6 && result.confidence < 66.7);
    assert!((result.display_confidence() - 66.7).abs() < f64::EPSILON);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let catalog = PathologyCatalog::load_embedded().unwrap();
    let engine = MatchingEngine::new(&catalog);

    let vector = SymptomVector::new()
        .with("localisation_anatomique", "rachis")
        .with("siege", "Lombaire")
        .with("irradiations", "aucune")
        .with("type_douleur", "mecanique")
        .with("calmee_par", "repos")
        .with("augmentee_par", "effort")
        .with("evolution", "aigue");

    let first = engine.diagnose(&vector).expect("lumbago should match");
    assert_eq!(first.pathology_id, PathologyId::new("lumbago_aigu"));
    for _ in 0..20 {
        let again = engine.diagnose(&vector).unwrap();
        assert_eq!(again.pathology_id, first.pathology_id);
        assert_eq!(again.confidence.to_bits(), first.confidence.to_bits());
    }
}

#[test]
fn catalog_shared_across_threads_without_locking() {
    use std::sync::Arc;

    let catalog = Arc::new(PathologyCatalog::load_embedded().unwrap());
    let mut handles = Vec::new();

    for _ in 0..8 {
        let catalog = Arc::clone(&catalog);
        handles.push(std::thread::spawn(move || {
            let engine = MatchingEngine::new(&catalog);
            let vector = SymptomVector::new()
                .with("siege", "Cheville")
                .with("localisation_anatomique", "membre_inferieur")
                .with("type_douleur", "mecanique")
                .with("intensite", "severe")
                .with("evolution", "aigue")
                .with("signes_associes", "oedeme");
            engine.diagnose(&vector).map(|r| r.pathology_id)
        }));
    }

    for handle in handles {
        let id = handle.join().unwrap();
        assert_eq!(id, Some(PathologyId::new("entorse_cheville")));
    }
}
