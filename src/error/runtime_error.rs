#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while binding variables, evaluating a
/// tree, or substituting values into one.
pub enum RuntimeError {
    /// A variable leaf had no entry in the bindings.
    ///
    /// The binding collector requests every distinct variable before
    /// evaluation runs, so hitting this means the collection step was
    /// skipped.
    UnboundVariable {
        /// The name of the variable.
        name: char,
    },
    /// A literal leaf did not hold valid numeric text.
    MalformedLiteral {
        /// The literal's text.
        text: String,
    },
    /// The value supplied for a variable was not a number.
    InvalidValueInput {
        /// The variable the value was requested for.
        name:  char,
        /// The input that failed to parse.
        input: String,
    },
    /// Reading a value from the input source failed outright.
    InputFailed {
        /// Details about the failure.
        details: String,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundVariable { name } => {
                write!(f, "Error: Variable '{name}' has no bound value.")
            },
            Self::MalformedLiteral { text } => {
                write!(f, "Error: Literal '{text}' is not a valid number.")
            },
            Self::InvalidValueInput { name, input } => write!(f,
                                                              "Error: '{input}' is not a valid numeric value for variable '{name}'."),
            Self::InputFailed { details } => {
                write!(f, "Error: Failed to read a value: {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
