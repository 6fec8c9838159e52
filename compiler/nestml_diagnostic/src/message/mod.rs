//! Message bodies for every diagnostic kind.
//!
//! Each arm interpolates the variant's payload into its fixed template
//! verbatim: no truncation, no escaping, no localization. Payload values are
//! taken at face value; whether they are sensible is the producing checker's
//! concern. Wording quirks are part of the published message set and are kept
//! as is.

use crate::DiagnosticKind;

impl DiagnosticKind {
    /// The human-readable message body, without the code/position prefix.
    ///
    /// Exhaustive over the variant set; a new kind without a body fails to
    /// compile.
    pub fn body(&self) -> String {
        match self {
            DiagnosticKind::AliasMustHaveOneVariable => {
                "'alias' declarations must only declare exactly one variable.".to_string()
            }
            DiagnosticKind::VectorUsedInNonVectorDeclaration { alias } => format!(
                "A vector '{alias}' cannot be used as part of an initial expression of \
                 non-vector variable declaration."
            ),
            DiagnosticKind::AliasMissingDefiningExpression => {
                "'alias' must be defined through an expression.".to_string()
            }
            DiagnosticKind::AliasMissingSetter { alias, type_name } => format!(
                "Alias-variable '{alias}' needs a setter-function: set_{alias}(v {type_name})"
            ),
            DiagnosticKind::AssignmentToAlias { variable } => {
                format!("You cannot assign a value to an alias: {variable}.")
            }
            DiagnosticKind::ComponentMissingDynamics { component } => {
                format!("Component {component} doesn't have dynamics function.")
            }
            DiagnosticKind::ComponentHasInput { component } => format!(
                "Problem with the component: {component}. Components cannot have any inputs, \
                 since they are not elements of a neuronal network, but serve as a part of a \
                 neuron declaration."
            ),
            DiagnosticKind::ComponentHasOutput { component } => format!(
                "Problem with the component: {component}. Components cannot have any output, \
                 since they are not elements of a neuronal network, but serve as a part of a \
                 neuron declaration."
            ),
            DiagnosticKind::MultipleOutputs { count } => {
                format!("Neurons have at most one output and not {count}.")
            }
            DiagnosticKind::NeuronMissingDynamics => {
                "Neurons need at least one dynamics function.".to_string()
            }
            DiagnosticKind::NeuronMultipleDynamics => {
                "Neurons need at most one dynamics function.".to_string()
            }
            DiagnosticKind::NeuronMissingInput => "Neurons need some inputs.".to_string(),
            DiagnosticKind::NeuronMissingOutput => "Neurons need some outputs.".to_string(),
            DiagnosticKind::NeuronSymbolMissing { neuron } => {
                format!("The neuron symbol: {neuron} has no symbol.")
            }
            DiagnosticKind::FunctionParameterShadowsTypeName { parameter } => {
                format!("The function parameter '{parameter}' has name of an existing NESTML type.")
            }
            DiagnosticKind::FunctionReturnsWrongType {
                function,
                return_type,
            } => format!("Function '{function}' must return a result of type {return_type}."),
            DiagnosticKind::ReturnValueNotConvertible {
                expression_type,
                return_type,
            } => format!(
                "Cannot convert from {expression_type} (type of return expression) to \
                 {return_type} (return type)."
            ),
            DiagnosticKind::ReturnExpressionTypeUnknown => {
                "Cannot determine the type of the expression".to_string()
            }
            // The unbalanced quote around the type matches the published wording.
            DiagnosticKind::MissingReturnStatement {
                function,
                return_type,
            } => format!("Function '{function}' must return a result of type '{return_type}"),
            DiagnosticKind::GetInstanceReserved => {
                "The function 'get_instance' is going to be generated. Please use another name."
                    .to_string()
            }
            DiagnosticKind::GeneratedFunctionNameClash { function, variable } => format!(
                "The function '{function}' is going to be generated, since there is a variable \
                 called '{variable}'."
            ),
            DiagnosticKind::FunctionParameterRedeclared { function } => {
                format!("The function '{function} parameter(s) is defined multiple times.")
            }
            DiagnosticKind::NestFunctionNameCollision { function } => format!(
                "The function-name '{function}' is already used by NEST. Please use another name."
            ),
            DiagnosticKind::VariableNotAStateVariable { variable } => format!(
                "The variable '{variable}' is not a state variable and, therefore, cannot be \
                 used on the left side of an equation."
            ),
            DiagnosticKind::EquationVariableUndefined { variable } => {
                format!("The variable {variable} used as left-hand side of the ode is not defined.")
            }
            DiagnosticKind::DerivativeOrderTooLow { variable } => format!(
                "The variable on the righthandside of an equation must be derivative variable, \
                 e.g. {variable}'"
            ),
            DiagnosticKind::InvariantNotBoolean { expression_type } => format!(
                "The type of the invariant expression must be boolean and not: {expression_type}"
            ),
            DiagnosticKind::InvariantTypeNotComputable { invariant_type } => {
                format!("Cannot compute the type: {invariant_type}")
            }
            DiagnosticKind::CurrentPortQualified => {
                "Current input can neither be inhibitory nor excitatory.".to_string()
            }
            DiagnosticKind::MultipleInhibitoryKeywords => {
                "Multiple occurrences of the keyword 'inhibitory' are not allowed.".to_string()
            }
            DiagnosticKind::MultipleExcitatoryKeywords => {
                "Multiple occurrences of the keyword 'excitatory' are not allowed.".to_string()
            }
            DiagnosticKind::BufferNotAssignable { buffer } => {
                format!("Buffer '{buffer}' cannot be reassigned.")
            }
            DiagnosticKind::SumArgumentNotAtomic { expression } => format!(
                "The arguments of the I_sum must be atomic expressions: e.g. V_m and not : \
                 {expression}"
            ),
            DiagnosticKind::UnitLiteralNotOne => {
                "Literals in Unit types may only be \"1\" (one) ".to_string()
            }
            DiagnosticKind::NeuronTypeInDeclaration { type_name } => format!(
                "The type {type_name} is a neuron/component. No neurons/components allowed in \
                 this place. Use the use-statement."
            ),
            DiagnosticKind::MemberVariableRedeclared {
                variable,
                declared_at,
            } => format!("Variable '{variable}' defined previously defined in line: {declared_at}"),
            DiagnosticKind::VariableUsedBeforeDeclaration {
                variable,
                declaration,
            } => format!(
                "Variable '{variable}' must be declared before it can be used in declaration \
                 of '{declaration}'."
            ),
            DiagnosticKind::MemberVariableUndefined { position, variable } => {
                format!("{position}: Variable '{variable}' is undefined.")
            }
            DiagnosticKind::SymbolTableMissing => "Run symbol table creator.".to_string(),
            DiagnosticKind::TypeDeclaredMultipleTimes { type_name } => {
                format!("The type '{type_name}' is defined multiple times.")
            }
            DiagnosticKind::NonComponentUsed { name, type_name } => format!(
                "Only components can be used by neurons/components and not {name} of the type: \
                 {type_name} ."
            ),
            DiagnosticKind::NeuronUsedAsComponent { name } => format!(
                "Only components can be used by components and not {name} that is a neuron, \
                 not a component"
            ),
        }
    }
}

#[cfg(test)]
mod tests;
