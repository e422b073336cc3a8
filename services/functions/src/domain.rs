// Domain layer modules
pub mod body_format;
pub mod function_kind;
pub mod response_envelope;

// Re-exports
pub use body_format::to_dumps_string;
pub use function_kind::{FunctionKind, HELLO_MESSAGE, WORLD_MESSAGE};
pub use response_envelope::{ResponseBody, ResponseEnvelope, SUCCESS_STATUS_CODE};
