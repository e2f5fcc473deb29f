//! Configuration options for building and executing expressions.

/// Configuration options for building an expression.
///
/// # Example
///
/// ```
/// use shuntyard_core::CompilationOptions;
///
/// let options = CompilationOptions {
///     name_separator: String::from(""),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CompilationOptions {
    /// Separator placed between element names when an expression gets no
    /// explicit name.
    ///
    /// Default: `" "`
    pub name_separator: String,
}

impl Default for CompilationOptions {
    fn default() -> Self {
        Self {
            name_separator: String::from(" "),
        }
    }
}

/// Configuration options for expression execution.
///
/// These control resource limits during evaluation. Nested expressions run
/// with the options of the expression that contains them.
///
/// # Example
///
/// ```
/// use shuntyard_core::ExecutionOptions;
///
/// let options = ExecutionOptions {
///     max_stack_size: Some(256),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Maximum number of values on one expression's runtime stack.
    ///
    /// Set to `None` for no limit.
    ///
    /// Default: None
    pub max_stack_size: Option<usize>,
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        Self {
            max_stack_size: None,
        }
    }
}
