//! The closed set of context-condition violations.
//!
//! One variant per rule message; each variant carries exactly the payload its
//! message interpolates, so a checker cannot construct an underspecified
//! violation. Values are built once at detection time and consumed once by
//! formatting; they have no further lifecycle.

use nestml_ir::SourcePosition;

/// A detected context-condition violation, with the data its message needs.
///
/// Dispatch over this enum is exhaustive everywhere: adding a variant without
/// a code and a message body is a compile error, not a runtime gap.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum DiagnosticKind {
    // Alias rules
    /// An `alias` declaration declares more than one variable.
    AliasMustHaveOneVariable,
    /// A vector variable appears in the initial expression of a non-vector
    /// declaration.
    VectorUsedInNonVectorDeclaration { alias: String },
    /// An `alias` declaration has no defining expression.
    AliasMissingDefiningExpression,
    /// An alias variable lacks the setter function its type requires.
    AliasMissingSetter { alias: String, type_name: String },
    /// The left-hand side of an assignment is an alias.
    AssignmentToAlias { variable: String },

    // Component rules
    /// A component declares no dynamics function.
    ComponentMissingDynamics { component: String },
    /// A component declares an input block.
    ComponentHasInput { component: String },
    /// A component declares an output block.
    ComponentHasOutput { component: String },

    // Neuron rules
    /// A neuron declares more than one output.
    MultipleOutputs { count: u32 },
    /// A neuron declares no dynamics function.
    NeuronMissingDynamics,
    /// A neuron declares more than one dynamics function.
    NeuronMultipleDynamics,
    /// A neuron declares no inputs.
    NeuronMissingInput,
    /// A neuron declares no outputs.
    NeuronMissingOutput,
    /// The symbol table holds no symbol for a neuron.
    NeuronSymbolMissing { neuron: String },

    // Function rules
    /// A function parameter shadows the name of an existing type.
    FunctionParameterShadowsTypeName { parameter: String },
    /// A function returns a value of the wrong declared type.
    FunctionReturnsWrongType { function: String, return_type: String },
    /// A return expression's type cannot be converted to the declared type.
    ReturnValueNotConvertible {
        expression_type: String,
        return_type: String,
    },
    /// The type of a return expression cannot be determined.
    ReturnExpressionTypeUnknown,
    /// A non-void function has no return statement.
    MissingReturnStatement { function: String, return_type: String },
    /// A user function is named `get_instance`, which is generated.
    GetInstanceReserved,
    /// A user function collides with a getter/setter generated for a variable.
    GeneratedFunctionNameClash { function: String, variable: String },
    /// A function declares the same parameter more than once.
    FunctionParameterRedeclared { function: String },
    /// A function name is already taken by a NEST built-in.
    NestFunctionNameCollision { function: String },

    // Equation and invariant rules
    /// The left-hand side of an equation is not a state variable.
    VariableNotAStateVariable { variable: String },
    /// The left-hand side of an ODE is undefined.
    EquationVariableUndefined { variable: String },
    /// The right-hand side of an equation is not a derivative variable.
    DerivativeOrderTooLow { variable: String },
    /// An invariant expression is not boolean.
    InvariantNotBoolean { expression_type: String },
    /// The type of an invariant expression cannot be computed.
    InvariantTypeNotComputable { invariant_type: String },

    // Input and buffer rules
    /// A current input port is qualified as inhibitory or excitatory.
    CurrentPortQualified,
    /// The keyword `inhibitory` occurs more than once on an input line.
    MultipleInhibitoryKeywords,
    /// The keyword `excitatory` occurs more than once on an input line.
    MultipleExcitatoryKeywords,
    /// A buffer variable is reassigned.
    BufferNotAssignable { buffer: String },
    /// An `I_sum` argument is not an atomic expression.
    SumArgumentNotAtomic { expression: String },

    // Declaration and type rules
    /// A unit type contains a numeric literal other than one.
    UnitLiteralNotOne,
    /// A neuron or component type is used in a variable declaration.
    NeuronTypeInDeclaration { type_name: String },
    /// A member variable is declared a second time.
    MemberVariableRedeclared {
        variable: String,
        declared_at: SourcePosition,
    },
    /// A member variable is used in a declaration before its own declaration.
    VariableUsedBeforeDeclaration { variable: String, declaration: String },
    /// A member declaration refers to an undefined variable.
    MemberVariableUndefined {
        position: SourcePosition,
        variable: String,
    },
    /// No scope is present; the symbol table was not built.
    SymbolTableMissing,
    /// A type is declared more than once.
    TypeDeclaredMultipleTimes { type_name: String },
    /// A neuron `use`s something that is not a component.
    NonComponentUsed { name: String, type_name: String },
    /// A component `use`s a neuron.
    NeuronUsedAsComponent { name: String },
}

/// One sample value per variant, for exhaustiveness-style tests.
///
/// Kept in sync with the enum by the `test_samples_cover_every_code` test:
/// a variant missing here leaves an `ErrorCode` unproduced.
#[cfg(test)]
pub(crate) fn sample_kinds() -> Vec<DiagnosticKind> {
    use DiagnosticKind::*;
    vec![
        AliasMustHaveOneVariable,
        VectorUsedInNonVectorDeclaration {
            alias: "V_m".into(),
        },
        AliasMissingDefiningExpression,
        AliasMissingSetter {
            alias: "V_rel".into(),
            type_name: "mV".into(),
        },
        AssignmentToAlias {
            variable: "V_rel".into(),
        },
        ComponentMissingDynamics {
            component: "MyComp".into(),
        },
        ComponentHasInput {
            component: "MyComp".into(),
        },
        ComponentHasOutput {
            component: "MyComp".into(),
        },
        MultipleOutputs { count: 3 },
        NeuronMissingDynamics,
        NeuronMultipleDynamics,
        NeuronMissingInput,
        NeuronMissingOutput,
        NeuronSymbolMissing {
            neuron: "iaf_neuron".into(),
        },
        FunctionParameterShadowsTypeName {
            parameter: "mV".into(),
        },
        FunctionReturnsWrongType {
            function: "set_V".into(),
            return_type: "mV".into(),
        },
        ReturnValueNotConvertible {
            expression_type: "string".into(),
            return_type: "mV".into(),
        },
        ReturnExpressionTypeUnknown,
        MissingReturnStatement {
            function: "get_V".into(),
            return_type: "mV".into(),
        },
        GetInstanceReserved,
        GeneratedFunctionNameClash {
            function: "get_V_m".into(),
            variable: "V_m".into(),
        },
        FunctionParameterRedeclared {
            function: "set_V".into(),
        },
        NestFunctionNameCollision {
            function: "update".into(),
        },
        VariableNotAStateVariable {
            variable: "tau_m".into(),
        },
        EquationVariableUndefined {
            variable: "V_mm".into(),
        },
        DerivativeOrderTooLow {
            variable: "V_m".into(),
        },
        InvariantNotBoolean {
            expression_type: "mV".into(),
        },
        InvariantTypeNotComputable {
            invariant_type: "V_m > 0".into(),
        },
        CurrentPortQualified,
        MultipleInhibitoryKeywords,
        MultipleExcitatoryKeywords,
        BufferNotAssignable {
            buffer: "spikes".into(),
        },
        SumArgumentNotAtomic {
            expression: "V_m + 1".into(),
        },
        UnitLiteralNotOne,
        NeuronTypeInDeclaration {
            type_name: "iaf_neuron".into(),
        },
        MemberVariableRedeclared {
            variable: "V_m".into(),
            declared_at: SourcePosition::new(4, 10),
        },
        VariableUsedBeforeDeclaration {
            variable: "tau_m".into(),
            declaration: "V_m".into(),
        },
        MemberVariableUndefined {
            position: SourcePosition::new(7, 3),
            variable: "tau_m".into(),
        },
        SymbolTableMissing,
        TypeDeclaredMultipleTimes {
            type_name: "Buffers".into(),
        },
        NonComponentUsed {
            name: "iaf_neuron".into(),
            type_name: "neuron".into(),
        },
        NeuronUsedAsComponent {
            name: "iaf_neuron".into(),
        },
    ]
}

#[cfg(test)]
mod tests;
