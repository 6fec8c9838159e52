use super::*;
use crate::kind::sample_kinds;

#[test]
fn test_error_code_display() {
    assert_eq!(
        ErrorCode::AliasMustHaveOneVariable.to_string(),
        "NESTML_ALIAS_HAS_ONE_VAR"
    );
    assert_eq!(
        ErrorCode::ComponentMissingDynamics.as_str(),
        "NESTML_COMPONENT_HAS_NO_DYNAMICS"
    );
}

#[test]
fn test_published_codes_are_stable() {
    // These strings are referenced by external tooling; changing one is a
    // breaking change, not a refactor.
    assert_eq!(
        ErrorCode::VectorUsedInNonVectorDeclaration.as_str(),
        "NESTML_ALIAS_IN_NON_ALIAS_DECL"
    );
    assert_eq!(
        ErrorCode::ComponentHasInput.as_str(),
        "NESTML_COMPONENT_WITHOUT_INPUT"
    );
    assert_eq!(
        ErrorCode::ComponentHasOutput.as_str(),
        "NESTML_COMPONENT_WITHOUT_OUTPUT"
    );
    assert_eq!(
        ErrorCode::FunctionParameterShadowsTypeName.as_str(),
        "NESTML_FUNCTION_PARAMETER_HAS_TYPE_NAME"
    );
    assert_eq!(ErrorCode::MultipleOutputs.as_str(), "NESTML_MULTIPLE_OUTPUTS");
}

#[test]
fn test_codes_are_unique() {
    use std::collections::HashSet;
    let strings: HashSet<&'static str> = ErrorCode::ALL.iter().map(ErrorCode::as_str).collect();
    assert_eq!(strings.len(), ErrorCode::ALL.len());
}

#[test]
fn test_codes_are_nonempty_and_prefixed() {
    for code in ErrorCode::ALL {
        assert!(!code.as_str().is_empty());
        assert!(
            code.as_str().starts_with("NESTML_"),
            "code {code} lacks the NESTML_ prefix"
        );
    }
}

#[test]
fn test_samples_cover_every_code() {
    use std::collections::HashSet;
    let produced: HashSet<ErrorCode> = sample_kinds().iter().map(DiagnosticKind::code).collect();
    // Every kind maps to a distinct code, and together they exhaust ALL.
    assert_eq!(produced.len(), sample_kinds().len());
    assert_eq!(produced.len(), ErrorCode::ALL.len());
    for code in ErrorCode::ALL {
        assert!(produced.contains(code), "no kind produces {code}");
    }
}

#[test]
fn test_from_str_round_trip() {
    for code in ErrorCode::ALL {
        assert_eq!(code.as_str().parse::<ErrorCode>(), Ok(*code));
        assert_eq!(code.as_str().to_lowercase().parse::<ErrorCode>(), Ok(*code));
    }
    assert_eq!("NESTML_NO_SUCH_RULE".parse::<ErrorCode>(), Err(()));
    assert_eq!("".parse::<ErrorCode>(), Err(()));
}

#[test]
fn test_rule_predicates_partition() {
    for code in ErrorCode::ALL {
        let flags = [
            code.is_alias_rule(),
            code.is_component_rule(),
            code.is_neuron_rule(),
            code.is_function_rule(),
            code.is_equation_rule(),
            code.is_input_rule(),
            code.is_declaration_rule(),
        ];
        let true_count = flags.iter().filter(|&&f| f).count();
        assert_eq!(
            true_count, 1,
            "expected exactly 1 predicate true for {code}, got {true_count}"
        );
    }
}

#[test]
fn test_rule_predicates() {
    assert!(ErrorCode::AliasMustHaveOneVariable.is_alias_rule());
    assert!(ErrorCode::AssignmentToAlias.is_alias_rule());
    assert!(!ErrorCode::AliasMustHaveOneVariable.is_neuron_rule());

    assert!(ErrorCode::ComponentHasInput.is_component_rule());
    assert!(ErrorCode::MultipleOutputs.is_neuron_rule());
    assert!(ErrorCode::MissingReturnStatement.is_function_rule());
    assert!(ErrorCode::DerivativeOrderTooLow.is_equation_rule());
    assert!(ErrorCode::CurrentPortQualified.is_input_rule());
    assert!(ErrorCode::TypeDeclaredMultipleTimes.is_declaration_rule());
}
