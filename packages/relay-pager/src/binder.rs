//! Binding list-returning resolvers as Relay connection fields.

use crate::{
    arguments::{ArgumentMap, ArgumentParser, FieldArguments, InputField, ReservedArguments},
    connection::{Connection, ConnectionAssembler},
    error::{BuildError, BuildResult, PaginationError},
    object::{ObjectValue, TypeDescriptor},
    paging::PaginationInfo,
    registry::{KeyField, ObjectRegistry},
    resolver::{
        DynResolver, Invocation, Invoker, OutputValue, ResolveCall, ResolverOutput,
        ResolverReturn,
    },
    signature::ValueType,
};
use async_graphql::Context;
use futures::future::BoxFuture;
use std::{any::Any, fmt};
use tracing::{debug, warn};

/// Who applies `first`/`last`/`after`/`before` to a field's results.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BindingMode {
    /// The resolver returns every item and the connection is windowed in memory.
    FrameworkManaged,
    /// The resolver receives the directives, slices itself and reports
    /// [`PaginationInfo`].
    ExternallyManaged,
}

impl fmt::Display for BindingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BindingMode::FrameworkManaged => f.write_str("framework-managed"),
            BindingMode::ExternallyManaged => f.write_str("externally-managed"),
        }
    }
}

/// A paginated field as declared on an object, before binding.
#[derive(Clone, Debug)]
pub struct PaginatedField {
    mode: BindingMode,
    resolver: DynResolver,
}

impl PaginatedField {
    /// A field whose resolver returns `Vec<T>` or `Result<Vec<T>, E>`.
    pub fn new<S, A, R, F>(resolver: F) -> Self
    where
        S: Any + Send + Sync,
        A: FieldArguments,
        R: ResolverReturn,
        F: for<'a> Fn(ResolveCall<'a, S, A>) -> BoxFuture<'a, R> + Send + Sync + 'static,
    {
        Self::from_resolver(BindingMode::FrameworkManaged, DynResolver::typed(resolver))
    }

    /// A field whose arguments embed the pagination directives and whose resolver
    /// returns `(Vec<T>, PaginationInfo)`, optionally wrapped in a `Result`.
    pub fn with_managed_info<S, A, R, F>(resolver: F) -> Self
    where
        S: Any + Send + Sync,
        A: FieldArguments,
        R: ResolverReturn,
        F: for<'a> Fn(ResolveCall<'a, S, A>) -> BoxFuture<'a, R> + Send + Sync + 'static,
    {
        Self::from_resolver(BindingMode::ExternallyManaged, DynResolver::typed(resolver))
    }

    pub fn from_resolver(mode: BindingMode, resolver: DynResolver) -> Self {
        Self { mode, resolver }
    }

    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    /// Validate the resolver against the registry and produce the bound field.
    pub fn bind(
        &self,
        registry: &ObjectRegistry,
        parent: TypeDescriptor,
    ) -> BuildResult<BoundField> {
        let signature = self.resolver.signature();

        let params = signature.param_shape()?;
        if matches!(params.source, Some(source) if source != parent) {
            return Err(BuildError::ParamSignature(signature.to_string()));
        }

        let parser =
            ArgumentParser::merged(ReservedArguments::pagination(), params.args.clone())?;

        // Paginated fields are always non-nullable.
        let returns = signature.return_shape(true)?;

        let embeds_pagination = params
            .args
            .as_ref()
            .map(|args| args.embeds_pagination())
            .unwrap_or(false);
        let detected = if embeds_pagination || returns.pagination_info {
            if !(embeds_pagination && returns.pagination_info) {
                return Err(BuildError::PaginationInfoRequired);
            }
            BindingMode::ExternallyManaged
        } else {
            BindingMode::FrameworkManaged
        };
        match (self.mode, detected) {
            (BindingMode::ExternallyManaged, BindingMode::FrameworkManaged) => {
                return Err(BuildError::PaginationInfoRequired)
            }
            (BindingMode::FrameworkManaged, BindingMode::ExternallyManaged) => {
                return Err(BuildError::ModeMismatch {
                    declared: self.mode,
                    detected,
                })
            }
            _ => {}
        }

        let node = match returns.value {
            Some(ValueType::List(element)) => match *element {
                ValueType::Object(node) => node,
                other => return Err(BuildError::UnregisteredNode(other.to_string())),
            },
            _ => return Err(BuildError::NonListReturn),
        };

        let node_name = registry
            .get(&node)
            .map(|object| object.name.clone())
            .ok_or_else(|| BuildError::UnregisteredNode(node.to_string()))?;
        let key = registry.key_field(&node)?;

        debug!(
            "Bound {} paginated field over {} keyed by {}.",
            self.mode,
            node_name,
            key.name()
        );

        Ok(BoundField {
            mode: self.mode,
            node,
            node_name,
            key,
            parser,
            invoker: self.resolver.invoker(),
        })
    }
}

/// A paginated field ready to be resolved.
pub struct BoundField {
    mode: BindingMode,
    node: TypeDescriptor,
    node_name: String,
    key: KeyField,
    parser: ArgumentParser,
    invoker: Invoker,
}

struct SplitOutputs {
    nodes: Vec<ObjectValue>,
    info: Option<PaginationInfo>,
    error: Option<async_graphql::Error>,
}

fn split_outputs(outputs: Vec<ResolverOutput>) -> Result<SplitOutputs, PaginationError> {
    let mut nodes = None;
    let mut info = None;
    let mut error = None;
    for output in outputs {
        match output {
            ResolverOutput::Value(OutputValue::List(values)) => nodes = Some(values),
            ResolverOutput::Value(OutputValue::Single(_)) => {
                return Err(PaginationError::OutputMismatch)
            }
            ResolverOutput::Info(value) => info = Some(value),
            ResolverOutput::Error(value) => error = value,
        }
    }
    Ok(SplitOutputs {
        nodes: nodes.ok_or(PaginationError::OutputMismatch)?,
        info,
        error,
    })
}

impl BoundField {
    pub fn mode(&self) -> BindingMode {
        self.mode
    }

    pub fn node(&self) -> TypeDescriptor {
        self.node
    }

    pub fn node_name(&self) -> &str {
        &self.node_name
    }

    pub fn arguments(&self) -> impl Iterator<Item = &InputField> {
        self.parser.input_fields()
    }

    /// Invoke the resolver and assemble its result into a connection.
    pub async fn resolve<'a>(
        &self,
        ctx: &'a Context<'a>,
        source: ObjectValue,
        args: ArgumentMap,
    ) -> async_graphql::Result<Connection> {
        let parsed = self.parser.parse(args)?;
        let pagination = parsed.pagination;

        let outputs = (self.invoker)(Invocation {
            ctx,
            source,
            args: parsed.nested,
        })
        .await?;
        let SplitOutputs { nodes, info, error } = split_outputs(outputs)?;

        let connection = ConnectionAssembler::new(&self.key, self.mode).assemble(
            nodes,
            &pagination,
            info.as_ref(),
        )?;

        if let Some(error) = error {
            warn!("Paginated resolver over {} failed: {}", self.node_name, error.message);
            return Err(error);
        }

        Ok(connection)
    }
}
