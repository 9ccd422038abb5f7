use crate::binder::BindingMode;
use async_graphql::dynamic::SchemaError;
use thiserror::Error;

/// Failures while building a schema. None of these are ever seen per request.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("{0} must be a struct and registered as an object along with its key")]
    UnregisteredNode(String),
    #[error("a key field must be registered for paginated objects")]
    MissingKey,
    #[error("key field doesn't exist on object")]
    KeyFieldNotFound,
    #[error("key field {0} must be a scalar field")]
    KeyFieldNotScalar(String),
    #[error("paginated field func must return a list type")]
    NonListReturn,
    #[error("{0} return values should [result][, pagination info][, error]")]
    ReturnSignature(String),
    #[error("{0} is marked non-nullable, but has no return value")]
    NoReturnValue(String),
    #[error("{0} arguments should be [context][, source][, args][, selectionSet]")]
    ParamSignature(String),
    #[error("if pagination args are embedded then pagination info must be included as a return value")]
    PaginationInfoRequired,
    #[error("field is bound {declared} but its resolver signature is {detected}")]
    ModeMismatch {
        declared: BindingMode,
        detected: BindingMode,
    },
    #[error("these arg names are restricted: first, after, last and before")]
    ReservedArgument,
    #[error("object type {0} is not registered")]
    UnknownObjectType(String),
    #[error("field {0} is declared more than once")]
    DuplicateField(String),
    #[error("no query object was declared")]
    MissingQuery,
    #[error("bad method {field} on type {object}: {source}")]
    BadMethod {
        object: String,
        field: String,
        source: Box<BuildError>,
    },
    #[error("Dynamic schema error: {0:?}")]
    DynamicSchema(#[from] SchemaError),
}

pub type BuildResult<T> = core::result::Result<T, BuildError>;

/// Failures while assembling a connection for one request.
#[derive(Debug, Error)]
pub enum PaginationError {
    #[error("first/last cannot be a negative integer")]
    NegativeCount,
    #[error("Cannot use both first and last together")]
    FirstAndLast,
    #[error("node is not a {expected}")]
    NodeType { expected: &'static str },
    #[error("resolver output does not match its signature")]
    OutputMismatch,
}

pub type PaginationResult<T> = core::result::Result<T, PaginationError>;
