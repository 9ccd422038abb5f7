//! Type-erased resolvers: a declared [`Signature`] plus an invoker producing the
//! ordered result slots.

use crate::{
    arguments::{BoxedArgs, FieldArguments},
    error::PaginationError,
    object::{ObjectValue, TypeDescriptor},
    paging::PaginationInfo,
    signature::{ParamType, ResultType, Signature, ValueType},
};
use async_graphql::{Context, SelectionField};
use futures::future::{BoxFuture, FutureExt};
use std::{any::Any, any::type_name, fmt, sync::Arc};

/// Everything a resolver may be called with.
pub struct Invocation<'a> {
    pub ctx: &'a Context<'a>,
    pub source: ObjectValue,
    pub args: Option<BoxedArgs>,
}

pub enum OutputValue {
    List(Vec<ObjectValue>),
    Single(Option<ObjectValue>),
}

/// One result slot, in declaration order.
pub enum ResolverOutput {
    Value(OutputValue),
    Info(PaginationInfo),
    Error(Option<async_graphql::Error>),
}

pub type Invoker = Arc<
    dyn for<'a> Fn(
            Invocation<'a>,
        )
            -> BoxFuture<'a, async_graphql::Result<Vec<ResolverOutput>>>
        + Send
        + Sync,
>;

pub fn invoker<F>(f: F) -> Invoker
where
    F: for<'a> Fn(
            Invocation<'a>,
        )
            -> BoxFuture<'a, async_graphql::Result<Vec<ResolverOutput>>>
        + Send
        + Sync
        + 'static,
{
    Arc::new(f)
}

/// The typed view of an [`Invocation`] handed to Rust resolver closures.
pub struct ResolveCall<'a, S, A> {
    pub ctx: &'a Context<'a>,
    pub source: Arc<S>,
    pub args: A,
}

impl<'a, S, A> ResolveCall<'a, S, A> {
    pub fn selection_set(&self) -> SelectionField<'a> {
        self.ctx.field()
    }
}

/// Return types a resolver closure may produce.
pub trait ResolverReturn: Send + 'static {
    fn results() -> Vec<ResultType>;
    fn into_outputs(self) -> Vec<ResolverOutput>;
}

fn list_of<T: Any>() -> ValueType {
    ValueType::List(Box::new(ValueType::Object(TypeDescriptor::of::<T>())))
}

fn list_output<T: Any + Send + Sync>(values: Vec<T>) -> ResolverOutput {
    ResolverOutput::Value(OutputValue::List(
        values.into_iter().map(ObjectValue::new).collect(),
    ))
}

impl<T: Any + Send + Sync> ResolverReturn for Vec<T> {
    fn results() -> Vec<ResultType> {
        vec![ResultType::Value(list_of::<T>())]
    }

    fn into_outputs(self) -> Vec<ResolverOutput> {
        vec![list_output(self)]
    }
}

impl<T, E> ResolverReturn for Result<Vec<T>, E>
where
    T: Any + Send + Sync,
    E: Into<async_graphql::Error> + Send + 'static,
{
    fn results() -> Vec<ResultType> {
        vec![ResultType::Value(list_of::<T>()), ResultType::Error]
    }

    fn into_outputs(self) -> Vec<ResolverOutput> {
        match self {
            Ok(values) => vec![list_output(values), ResolverOutput::Error(None)],
            Err(e) => vec![
                list_output(Vec::<T>::new()),
                ResolverOutput::Error(Some(e.into())),
            ],
        }
    }
}

impl<T: Any + Send + Sync> ResolverReturn for (Vec<T>, PaginationInfo) {
    fn results() -> Vec<ResultType> {
        vec![ResultType::Value(list_of::<T>()), ResultType::PaginationInfo]
    }

    fn into_outputs(self) -> Vec<ResolverOutput> {
        vec![list_output(self.0), ResolverOutput::Info(self.1)]
    }
}

impl<T, E> ResolverReturn for Result<(Vec<T>, PaginationInfo), E>
where
    T: Any + Send + Sync,
    E: Into<async_graphql::Error> + Send + 'static,
{
    fn results() -> Vec<ResultType> {
        vec![
            ResultType::Value(list_of::<T>()),
            ResultType::PaginationInfo,
            ResultType::Error,
        ]
    }

    fn into_outputs(self) -> Vec<ResolverOutput> {
        match self {
            Ok((values, info)) => vec![
                list_output(values),
                ResolverOutput::Info(info),
                ResolverOutput::Error(None),
            ],
            Err(e) => vec![
                list_output(Vec::<T>::new()),
                ResolverOutput::Info(PaginationInfo::default()),
                ResolverOutput::Error(Some(e.into())),
            ],
        }
    }
}

/// A single optional object. Describable, but never a valid paginated return.
impl<T: Any + Send + Sync> ResolverReturn for Option<T> {
    fn results() -> Vec<ResultType> {
        vec![ResultType::Value(ValueType::Object(TypeDescriptor::of::<T>()))]
    }

    fn into_outputs(self) -> Vec<ResolverOutput> {
        vec![ResolverOutput::Value(OutputValue::Single(
            self.map(ObjectValue::new),
        ))]
    }
}

#[derive(Clone)]
pub struct DynResolver {
    signature: Signature,
    invoker: Invoker,
}

impl DynResolver {
    pub fn new(signature: Signature, invoker: Invoker) -> Self {
        Self { signature, invoker }
    }

    /// Derive the signature and invoker of a Rust resolver closure from its types.
    pub fn typed<S, A, R, F>(resolver: F) -> Self
    where
        S: Any + Send + Sync,
        A: FieldArguments,
        R: ResolverReturn,
        F: for<'a> Fn(ResolveCall<'a, S, A>) -> BoxFuture<'a, R> + Send + Sync + 'static,
    {
        let mut params = vec![
            ParamType::Context,
            ParamType::Source(TypeDescriptor::of::<S>()),
        ];
        if let Some(args) = A::descriptor() {
            params.push(ParamType::Args(args));
        }
        let signature = Signature::new(params, R::results());

        let resolver = Arc::new(resolver);
        let invoker = invoker(move |invocation: Invocation<'_>| {
            let resolver = resolver.clone();
            async move {
                let Invocation { ctx, source, args } = invocation;
                let source =
                    source
                        .downcast_arc::<S>()
                        .ok_or(PaginationError::NodeType {
                            expected: type_name::<S>(),
                        })?;
                let args = A::from_boxed(args)?;
                let output = (*resolver)(ResolveCall { ctx, source, args }).await;
                Ok::<_, async_graphql::Error>(output.into_outputs())
            }
            .boxed()
        });

        Self { signature, invoker }
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn invoker(&self) -> Invoker {
        self.invoker.clone()
    }
}

impl fmt::Debug for DynResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DynResolver")
            .field(&self.signature.to_string())
            .finish()
    }
}
