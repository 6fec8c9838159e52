use super::*;

#[test]
fn test_payload_is_captured() {
    let kind = DiagnosticKind::VectorUsedInNonVectorDeclaration {
        alias: "V_m".into(),
    };
    let DiagnosticKind::VectorUsedInNonVectorDeclaration { alias } = &kind else {
        panic!("wrong variant");
    };
    assert_eq!(alias, "V_m");
}

#[test]
fn test_position_payload_is_captured() {
    let kind = DiagnosticKind::MemberVariableRedeclared {
        variable: "V_m".into(),
        declared_at: SourcePosition::new(4, 10),
    };
    let DiagnosticKind::MemberVariableRedeclared { declared_at, .. } = &kind else {
        panic!("wrong variant");
    };
    assert_eq!(*declared_at, SourcePosition::new(4, 10));
}

#[test]
fn test_kind_hash_and_eq() {
    use std::collections::HashSet;
    let mut set = HashSet::new();
    set.insert(DiagnosticKind::MultipleOutputs { count: 3 });
    set.insert(DiagnosticKind::MultipleOutputs { count: 3 }); // duplicate
    set.insert(DiagnosticKind::MultipleOutputs { count: 4 });
    set.insert(DiagnosticKind::NeuronMissingInput);
    assert_eq!(set.len(), 3);
}

#[test]
fn test_samples_are_distinct_variants() {
    use std::collections::HashSet;
    let tags: HashSet<std::mem::Discriminant<DiagnosticKind>> =
        sample_kinds().iter().map(std::mem::discriminant).collect();
    assert_eq!(tags.len(), sample_kinds().len());
}
