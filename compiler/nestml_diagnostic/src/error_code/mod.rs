//! Stable error codes for all context-condition diagnostics.
//!
//! Each code is a unique `NESTML_*` identifier. External tooling and tests
//! match on the exact strings, so codes never change once published; adding a
//! rule adds a code, it never renames one.

use std::fmt;

use crate::DiagnosticKind;

/// Stable identifiers for context-condition diagnostics.
///
/// One variant per [`DiagnosticKind`] variant. The mapping is injective:
/// no two kinds share a code (`test_codes_are_unique` checks the property
/// over [`ErrorCode::ALL`]).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Alias rules
    AliasMustHaveOneVariable,
    VectorUsedInNonVectorDeclaration,
    AliasMissingDefiningExpression,
    AliasMissingSetter,
    AssignmentToAlias,

    // Component rules
    ComponentMissingDynamics,
    ComponentHasInput,
    ComponentHasOutput,

    // Neuron rules
    MultipleOutputs,
    NeuronMissingDynamics,
    NeuronMultipleDynamics,
    NeuronMissingInput,
    NeuronMissingOutput,
    NeuronSymbolMissing,

    // Function rules
    FunctionParameterShadowsTypeName,
    FunctionReturnsWrongType,
    ReturnValueNotConvertible,
    ReturnExpressionTypeUnknown,
    MissingReturnStatement,
    GetInstanceReserved,
    GeneratedFunctionNameClash,
    FunctionParameterRedeclared,
    NestFunctionNameCollision,

    // Equation and invariant rules
    VariableNotAStateVariable,
    EquationVariableUndefined,
    DerivativeOrderTooLow,
    InvariantNotBoolean,
    InvariantTypeNotComputable,

    // Input and buffer rules
    CurrentPortQualified,
    MultipleInhibitoryKeywords,
    MultipleExcitatoryKeywords,
    BufferNotAssignable,
    SumArgumentNotAtomic,

    // Declaration and type rules
    UnitLiteralNotOne,
    NeuronTypeInDeclaration,
    MemberVariableRedeclared,
    VariableUsedBeforeDeclaration,
    MemberVariableUndefined,
    SymbolTableMissing,
    TypeDeclaredMultipleTimes,
    NonComponentUsed,
    NeuronUsedAsComponent,
}

impl ErrorCode {
    /// All error code variants, for exhaustive testing.
    ///
    /// Kept in sync with `as_str()` which is exhaustive (Rust match enforces
    /// it). When adding a new variant: add it to the enum, `as_str()`, and
    /// here. The uniqueness and coverage tests catch any omission.
    pub const ALL: &'static [ErrorCode] = &[
        // Alias
        ErrorCode::AliasMustHaveOneVariable,
        ErrorCode::VectorUsedInNonVectorDeclaration,
        ErrorCode::AliasMissingDefiningExpression,
        ErrorCode::AliasMissingSetter,
        ErrorCode::AssignmentToAlias,
        // Component
        ErrorCode::ComponentMissingDynamics,
        ErrorCode::ComponentHasInput,
        ErrorCode::ComponentHasOutput,
        // Neuron
        ErrorCode::MultipleOutputs,
        ErrorCode::NeuronMissingDynamics,
        ErrorCode::NeuronMultipleDynamics,
        ErrorCode::NeuronMissingInput,
        ErrorCode::NeuronMissingOutput,
        ErrorCode::NeuronSymbolMissing,
        // Function
        ErrorCode::FunctionParameterShadowsTypeName,
        ErrorCode::FunctionReturnsWrongType,
        ErrorCode::ReturnValueNotConvertible,
        ErrorCode::ReturnExpressionTypeUnknown,
        ErrorCode::MissingReturnStatement,
        ErrorCode::GetInstanceReserved,
        ErrorCode::GeneratedFunctionNameClash,
        ErrorCode::FunctionParameterRedeclared,
        ErrorCode::NestFunctionNameCollision,
        // Equation / invariant
        ErrorCode::VariableNotAStateVariable,
        ErrorCode::EquationVariableUndefined,
        ErrorCode::DerivativeOrderTooLow,
        ErrorCode::InvariantNotBoolean,
        ErrorCode::InvariantTypeNotComputable,
        // Input / buffer
        ErrorCode::CurrentPortQualified,
        ErrorCode::MultipleInhibitoryKeywords,
        ErrorCode::MultipleExcitatoryKeywords,
        ErrorCode::BufferNotAssignable,
        ErrorCode::SumArgumentNotAtomic,
        // Declaration / type
        ErrorCode::UnitLiteralNotOne,
        ErrorCode::NeuronTypeInDeclaration,
        ErrorCode::MemberVariableRedeclared,
        ErrorCode::VariableUsedBeforeDeclaration,
        ErrorCode::MemberVariableUndefined,
        ErrorCode::SymbolTableMissing,
        ErrorCode::TypeDeclaredMultipleTimes,
        ErrorCode::NonComponentUsed,
        ErrorCode::NeuronUsedAsComponent,
    ];

    /// Get the stable identifier as a string (e.g., `"NESTML_ALIAS_HAS_ONE_VAR"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            // Alias
            ErrorCode::AliasMustHaveOneVariable => "NESTML_ALIAS_HAS_ONE_VAR",
            ErrorCode::VectorUsedInNonVectorDeclaration => "NESTML_ALIAS_IN_NON_ALIAS_DECL",
            ErrorCode::AliasMissingDefiningExpression => "NESTML_ALIAS_HAS_DEFINING_EXPRESSION",
            ErrorCode::AliasMissingSetter => "NESTML_ALIAS_HAS_NO_SETTER",
            ErrorCode::AssignmentToAlias => "NESTML_ASSIGNMENT_TO_ALIAS",
            // Component
            ErrorCode::ComponentMissingDynamics => "NESTML_COMPONENT_HAS_NO_DYNAMICS",
            ErrorCode::ComponentHasInput => "NESTML_COMPONENT_WITHOUT_INPUT",
            ErrorCode::ComponentHasOutput => "NESTML_COMPONENT_WITHOUT_OUTPUT",
            // Neuron
            ErrorCode::MultipleOutputs => "NESTML_MULTIPLE_OUTPUTS",
            ErrorCode::NeuronMissingDynamics => "NESTML_NEURON_NEEDS_DYNAMICS",
            ErrorCode::NeuronMultipleDynamics => "NESTML_NEURON_MULTIPLE_DYNAMICS",
            ErrorCode::NeuronMissingInput => "NESTML_NEURON_WITHOUT_INPUT",
            ErrorCode::NeuronMissingOutput => "NESTML_NEURON_WITHOUT_OUTPUT",
            ErrorCode::NeuronSymbolMissing => "NESTML_NEURON_SYMBOL_MISSING",
            // Function
            ErrorCode::FunctionParameterShadowsTypeName => {
                "NESTML_FUNCTION_PARAMETER_HAS_TYPE_NAME"
            }
            ErrorCode::FunctionReturnsWrongType => "NESTML_FUNCTION_WRONG_RETURN_TYPE",
            ErrorCode::ReturnValueNotConvertible => "NESTML_FUNCTION_RETURN_NOT_CONVERTIBLE",
            ErrorCode::ReturnExpressionTypeUnknown => "NESTML_FUNCTION_RETURN_TYPE_UNKNOWN",
            ErrorCode::MissingReturnStatement => "NESTML_MISSING_RETURN_STATEMENT",
            ErrorCode::GetInstanceReserved => "NESTML_GET_INSTANCE_DEFINED",
            ErrorCode::GeneratedFunctionNameClash => "NESTML_GENERATED_FUNCTION_DEFINED",
            ErrorCode::FunctionParameterRedeclared => "NESTML_FUNCTION_PARAMETER_REDECLARED",
            ErrorCode::NestFunctionNameCollision => "NESTML_NEST_FUNCTION_NAME_COLLISION",
            // Equation / invariant
            ErrorCode::VariableNotAStateVariable => "NESTML_EQUATION_NON_STATE_VARIABLE",
            ErrorCode::EquationVariableUndefined => "NESTML_EQUATION_VARIABLE_UNDEFINED",
            ErrorCode::DerivativeOrderTooLow => "NESTML_DERIVATIVE_ORDER_AT_LEAST_ONE",
            ErrorCode::InvariantNotBoolean => "NESTML_INVARIANT_NOT_BOOLEAN",
            ErrorCode::InvariantTypeNotComputable => "NESTML_INVARIANT_TYPE_NOT_COMPUTABLE",
            // Input / buffer
            ErrorCode::CurrentPortQualified => "NESTML_CURRENT_PORT_IS_INH_OR_EXC",
            ErrorCode::MultipleInhibitoryKeywords => "NESTML_MULTIPLE_INHIBITORY_KEYWORDS",
            ErrorCode::MultipleExcitatoryKeywords => "NESTML_MULTIPLE_EXCITATORY_KEYWORDS",
            ErrorCode::BufferNotAssignable => "NESTML_BUFFER_NOT_ASSIGNABLE",
            ErrorCode::SumArgumentNotAtomic => "NESTML_SUM_ARGUMENT_NOT_ATOMIC",
            // Declaration / type
            ErrorCode::UnitLiteralNotOne => "NESTML_UNIT_LITERAL_ONLY_ONES",
            ErrorCode::NeuronTypeInDeclaration => "NESTML_INVALID_TYPE_IN_DECLARATION",
            ErrorCode::MemberVariableRedeclared => "NESTML_MEMBER_VARIABLE_REDECLARED",
            ErrorCode::VariableUsedBeforeDeclaration => "NESTML_VARIABLE_USED_BEFORE_DECLARATION",
            ErrorCode::MemberVariableUndefined => "NESTML_MEMBER_VARIABLE_UNDEFINED",
            ErrorCode::SymbolTableMissing => "NESTML_SYMBOL_TABLE_MISSING",
            ErrorCode::TypeDeclaredMultipleTimes => "NESTML_TYPE_DECLARED_MULTIPLE_TIMES",
            ErrorCode::NonComponentUsed => "NESTML_USES_NON_COMPONENT",
            ErrorCode::NeuronUsedAsComponent => "NESTML_USES_NEURON_AS_COMPONENT",
        }
    }

    /// Check if this code belongs to an alias rule.
    pub fn is_alias_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::AliasMustHaveOneVariable
                | ErrorCode::VectorUsedInNonVectorDeclaration
                | ErrorCode::AliasMissingDefiningExpression
                | ErrorCode::AliasMissingSetter
                | ErrorCode::AssignmentToAlias
        )
    }

    /// Check if this code belongs to a component rule.
    pub fn is_component_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::ComponentMissingDynamics
                | ErrorCode::ComponentHasInput
                | ErrorCode::ComponentHasOutput
        )
    }

    /// Check if this code belongs to a neuron-structure rule.
    pub fn is_neuron_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::MultipleOutputs
                | ErrorCode::NeuronMissingDynamics
                | ErrorCode::NeuronMultipleDynamics
                | ErrorCode::NeuronMissingInput
                | ErrorCode::NeuronMissingOutput
                | ErrorCode::NeuronSymbolMissing
        )
    }

    /// Check if this code belongs to a function rule.
    pub fn is_function_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::FunctionParameterShadowsTypeName
                | ErrorCode::FunctionReturnsWrongType
                | ErrorCode::ReturnValueNotConvertible
                | ErrorCode::ReturnExpressionTypeUnknown
                | ErrorCode::MissingReturnStatement
                | ErrorCode::GetInstanceReserved
                | ErrorCode::GeneratedFunctionNameClash
                | ErrorCode::FunctionParameterRedeclared
                | ErrorCode::NestFunctionNameCollision
        )
    }

    /// Check if this code belongs to an equation or invariant rule.
    pub fn is_equation_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::VariableNotAStateVariable
                | ErrorCode::EquationVariableUndefined
                | ErrorCode::DerivativeOrderTooLow
                | ErrorCode::InvariantNotBoolean
                | ErrorCode::InvariantTypeNotComputable
        )
    }

    /// Check if this code belongs to an input or buffer rule.
    pub fn is_input_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::CurrentPortQualified
                | ErrorCode::MultipleInhibitoryKeywords
                | ErrorCode::MultipleExcitatoryKeywords
                | ErrorCode::BufferNotAssignable
                | ErrorCode::SumArgumentNotAtomic
        )
    }

    /// Check if this code belongs to a declaration or type rule.
    pub fn is_declaration_rule(&self) -> bool {
        matches!(
            self,
            ErrorCode::UnitLiteralNotOne
                | ErrorCode::NeuronTypeInDeclaration
                | ErrorCode::MemberVariableRedeclared
                | ErrorCode::VariableUsedBeforeDeclaration
                | ErrorCode::MemberVariableUndefined
                | ErrorCode::SymbolTableMissing
                | ErrorCode::TypeDeclaredMultipleTimes
                | ErrorCode::NonComponentUsed
                | ErrorCode::NeuronUsedAsComponent
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"NESTML_ALIAS_HAS_ONE_VAR"`.
///
/// Case-insensitive. Derived from [`ErrorCode::ALL`] and [`ErrorCode::as_str()`],
/// so it is automatically exhaustive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

impl DiagnosticKind {
    /// The stable code for this violation.
    ///
    /// Total over the variant set; the match has no wildcard arm, so a new
    /// kind without a code fails to compile.
    pub fn code(&self) -> ErrorCode {
        match self {
            DiagnosticKind::AliasMustHaveOneVariable => ErrorCode::AliasMustHaveOneVariable,
            DiagnosticKind::VectorUsedInNonVectorDeclaration { .. } => {
                ErrorCode::VectorUsedInNonVectorDeclaration
            }
            DiagnosticKind::AliasMissingDefiningExpression => {
                ErrorCode::AliasMissingDefiningExpression
            }
            DiagnosticKind::AliasMissingSetter { .. } => ErrorCode::AliasMissingSetter,
            DiagnosticKind::AssignmentToAlias { .. } => ErrorCode::AssignmentToAlias,
            DiagnosticKind::ComponentMissingDynamics { .. } => ErrorCode::ComponentMissingDynamics,
            DiagnosticKind::ComponentHasInput { .. } => ErrorCode::ComponentHasInput,
            DiagnosticKind::ComponentHasOutput { .. } => ErrorCode::ComponentHasOutput,
            DiagnosticKind::MultipleOutputs { .. } => ErrorCode::MultipleOutputs,
            DiagnosticKind::NeuronMissingDynamics => ErrorCode::NeuronMissingDynamics,
            DiagnosticKind::NeuronMultipleDynamics => ErrorCode::NeuronMultipleDynamics,
            DiagnosticKind::NeuronMissingInput => ErrorCode::NeuronMissingInput,
            DiagnosticKind::NeuronMissingOutput => ErrorCode::NeuronMissingOutput,
            DiagnosticKind::NeuronSymbolMissing { .. } => ErrorCode::NeuronSymbolMissing,
            DiagnosticKind::FunctionParameterShadowsTypeName { .. } => {
                ErrorCode::FunctionParameterShadowsTypeName
            }
            DiagnosticKind::FunctionReturnsWrongType { .. } => ErrorCode::FunctionReturnsWrongType,
            DiagnosticKind::ReturnValueNotConvertible { .. } => {
                ErrorCode::ReturnValueNotConvertible
            }
            DiagnosticKind::ReturnExpressionTypeUnknown => ErrorCode::ReturnExpressionTypeUnknown,
            DiagnosticKind::MissingReturnStatement { .. } => ErrorCode::MissingReturnStatement,
            DiagnosticKind::GetInstanceReserved => ErrorCode::GetInstanceReserved,
            DiagnosticKind::GeneratedFunctionNameClash { .. } => {
                ErrorCode::GeneratedFunctionNameClash
            }
            DiagnosticKind::FunctionParameterRedeclared { .. } => {
                ErrorCode::FunctionParameterRedeclared
            }
            DiagnosticKind::NestFunctionNameCollision { .. } => {
                ErrorCode::NestFunctionNameCollision
            }
            DiagnosticKind::VariableNotAStateVariable { .. } => {
                ErrorCode::VariableNotAStateVariable
            }
            DiagnosticKind::EquationVariableUndefined { .. } => {
                ErrorCode::EquationVariableUndefined
            }
            DiagnosticKind::DerivativeOrderTooLow { .. } => ErrorCode::DerivativeOrderTooLow,
            DiagnosticKind::InvariantNotBoolean { .. } => ErrorCode::InvariantNotBoolean,
            DiagnosticKind::InvariantTypeNotComputable { .. } => {
                ErrorCode::InvariantTypeNotComputable
            }
            DiagnosticKind::CurrentPortQualified => ErrorCode::CurrentPortQualified,
            DiagnosticKind::MultipleInhibitoryKeywords => ErrorCode::MultipleInhibitoryKeywords,
            DiagnosticKind::MultipleExcitatoryKeywords => ErrorCode::MultipleExcitatoryKeywords,
            DiagnosticKind::BufferNotAssignable { .. } => ErrorCode::BufferNotAssignable,
            DiagnosticKind::SumArgumentNotAtomic { .. } => ErrorCode::SumArgumentNotAtomic,
            DiagnosticKind::UnitLiteralNotOne => ErrorCode::UnitLiteralNotOne,
            DiagnosticKind::NeuronTypeInDeclaration { .. } => ErrorCode::NeuronTypeInDeclaration,
            DiagnosticKind::MemberVariableRedeclared { .. } => ErrorCode::MemberVariableRedeclared,
            DiagnosticKind::VariableUsedBeforeDeclaration { .. } => {
                ErrorCode::VariableUsedBeforeDeclaration
            }
            DiagnosticKind::MemberVariableUndefined { .. } => ErrorCode::MemberVariableUndefined,
            DiagnosticKind::SymbolTableMissing => ErrorCode::SymbolTableMissing,
            DiagnosticKind::TypeDeclaredMultipleTimes { .. } => {
                ErrorCode::TypeDeclaredMultipleTimes
            }
            DiagnosticKind::NonComponentUsed { .. } => ErrorCode::NonComponentUsed,
            DiagnosticKind::NeuronUsedAsComponent { .. } => ErrorCode::NeuronUsedAsComponent,
        }
    }
}

#[cfg(test)]
mod tests;
