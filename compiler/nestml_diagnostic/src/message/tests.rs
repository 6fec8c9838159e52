use crate::kind::sample_kinds;
use crate::DiagnosticKind;
use nestml_ir::SourcePosition;
use pretty_assertions::assert_eq;

#[test]
fn test_fixed_wordings() {
    assert_eq!(
        DiagnosticKind::AliasMustHaveOneVariable.body(),
        "'alias' declarations must only declare exactly one variable."
    );
    assert_eq!(
        DiagnosticKind::ComponentMissingDynamics {
            component: "MyComp".into()
        }
        .body(),
        "Component MyComp doesn't have dynamics function."
    );
    assert_eq!(
        DiagnosticKind::VectorUsedInNonVectorDeclaration {
            alias: "V_m".into()
        }
        .body(),
        "A vector 'V_m' cannot be used as part of an initial expression of non-vector \
         variable declaration."
    );
    assert_eq!(
        DiagnosticKind::MultipleOutputs { count: 3 }.body(),
        "Neurons have at most one output and not 3."
    );
}

#[test]
fn test_multi_field_wordings() {
    assert_eq!(
        DiagnosticKind::AliasMissingSetter {
            alias: "V_rel".into(),
            type_name: "mV".into()
        }
        .body(),
        "Alias-variable 'V_rel' needs a setter-function: set_V_rel(v mV)"
    );
    assert_eq!(
        DiagnosticKind::ReturnValueNotConvertible {
            expression_type: "string".into(),
            return_type: "mV".into()
        }
        .body(),
        "Cannot convert from string (type of return expression) to mV (return type)."
    );
    assert_eq!(
        DiagnosticKind::VariableUsedBeforeDeclaration {
            variable: "tau_m".into(),
            declaration: "V_m".into()
        }
        .body(),
        "Variable 'tau_m' must be declared before it can be used in declaration of 'V_m'."
    );
}

#[test]
fn test_position_payloads_render_as_line_column() {
    assert_eq!(
        DiagnosticKind::MemberVariableRedeclared {
            variable: "V_m".into(),
            declared_at: SourcePosition::new(4, 10)
        }
        .body(),
        "Variable 'V_m' defined previously defined in line: 4:10"
    );
    assert_eq!(
        DiagnosticKind::MemberVariableUndefined {
            position: SourcePosition::new(7, 3),
            variable: "tau_m".into()
        }
        .body(),
        "7:3: Variable 'tau_m' is undefined."
    );
}

#[test]
fn test_payload_appears_verbatim() {
    // Identifier payloads are interpolated unaltered: no escaping, no
    // truncation. An odd name must survive as a substring.
    let odd = "V_m' <weird & name>";
    let kinds = [
        DiagnosticKind::AssignmentToAlias {
            variable: odd.into(),
        },
        DiagnosticKind::BufferNotAssignable { buffer: odd.into() },
        DiagnosticKind::NestFunctionNameCollision {
            function: odd.into(),
        },
        DiagnosticKind::TypeDeclaredMultipleTimes {
            type_name: odd.into(),
        },
    ];
    for kind in kinds {
        assert!(kind.body().contains(odd), "payload altered in {kind:?}");
    }
}

#[test]
fn test_body_is_deterministic() {
    for kind in sample_kinds() {
        assert_eq!(kind.body(), kind.body());
        assert!(!kind.body().is_empty());
    }
}
