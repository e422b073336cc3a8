// Function identity for the deployed Lambda handlers
//
// Each variant owns the literal success message written into the response body.

/// Message returned by the `hello` function
pub const HELLO_MESSAGE: &str = "Hello function executed successfully!";

/// Message returned by the `world` function
pub const WORLD_MESSAGE: &str = "World function executed successfully!";

/// The two deployed functions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FunctionKind {
    /// `hello` handler
    Hello,
    /// `world` handler
    World,
}

impl FunctionKind {
    /// Literal message placed in the `message` field of the body
    pub fn message(&self) -> &'static str {
        match self {
            FunctionKind::Hello => HELLO_MESSAGE,
            FunctionKind::World => WORLD_MESSAGE,
        }
    }

    /// Lowercase function name, matching the binary name
    pub fn name(&self) -> &'static str {
        match self {
            FunctionKind::Hello => "hello",
            FunctionKind::World => "world",
        }
    }
}
