//! Field arguments: user-declared argument types and the merged parser that splits the
//! reserved pagination arguments from the user's own.

use crate::{
    error::{BuildError, BuildResult},
    object::TypeDescriptor,
    paging::PaginationArgs,
};
use async_graphql::{
    dynamic::{InputValue, TypeRef},
    Name, Value,
};
use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use std::{any::Any, fmt, sync::Arc};
use thiserror::Error;

pub type ArgumentMap = IndexMap<String, Value>;
pub type BoxedArgs = Box<dyn Any + Send>;

#[derive(Debug, Error)]
pub enum ArgumentError {
    #[error("{0}: {1}")]
    Field(String, String),
    #[error("error in parsing args")]
    Unexpected,
    #[error("Failed to deserialize arguments: {0}")]
    Deserialize(String),
}

pub type ArgumentResult<T> = core::result::Result<T, ArgumentError>;

/// Deserialize an argument map into `T`.
pub fn parse_arguments<T: DeserializeOwned>(args: ArgumentMap) -> ArgumentResult<T> {
    let object = args
        .into_iter()
        .map(|(name, value)| (Name::new(name), value))
        .collect();
    async_graphql::from_value(Value::Object(object))
        .map_err(|e| ArgumentError::Deserialize(e.to_string()))
}

/// One argument as declared on the schema.
#[derive(Clone, Debug)]
pub struct InputField {
    pub name: String,
    pub ty: TypeRef,
    pub description: Option<String>,
}

impl InputField {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn input_value(&self) -> InputValue {
        let value = InputValue::new(self.name.clone(), self.ty.clone());
        match &self.description {
            Some(description) => value.description(description.clone()),
            None => value,
        }
    }
}

/// A Rust type usable as the arguments of a paginated field.
pub trait FieldArguments: Sized + Send + 'static {
    /// Whether the type carries the pagination directives itself.
    const EMBEDS_PAGINATION: bool = false;

    fn input_fields() -> Vec<InputField>;

    fn from_arguments(args: ArgumentMap) -> ArgumentResult<Self>;

    fn embed(&mut self, _pagination: PaginationArgs) {}

    fn descriptor() -> Option<ArgsDescriptor> {
        Some(ArgsDescriptor::of::<Self>())
    }

    fn from_boxed(args: Option<BoxedArgs>) -> ArgumentResult<Self> {
        args.and_then(|args| args.downcast::<Self>().ok())
            .map(|args| *args)
            .ok_or(ArgumentError::Unexpected)
    }
}

/// No arguments beyond the reserved ones.
impl FieldArguments for () {
    fn input_fields() -> Vec<InputField> {
        Vec::new()
    }

    fn from_arguments(args: ArgumentMap) -> ArgumentResult<Self> {
        if args.is_empty() {
            Ok(())
        } else {
            Err(ArgumentError::Unexpected)
        }
    }

    fn descriptor() -> Option<ArgsDescriptor> {
        None
    }

    fn from_boxed(_args: Option<BoxedArgs>) -> ArgumentResult<Self> {
        Ok(())
    }
}

type ParseFn =
    Arc<dyn Fn(ArgumentMap, &PaginationArgs) -> ArgumentResult<BoxedArgs> + Send + Sync>;

/// A type-erased argument type: its input fields and a parser into the boxed value.
#[derive(Clone)]
pub struct ArgsDescriptor {
    ty: TypeDescriptor,
    embeds_pagination: bool,
    fields: Vec<InputField>,
    parse: ParseFn,
}

impl ArgsDescriptor {
    pub fn of<A: FieldArguments>() -> Self {
        Self {
            ty: TypeDescriptor::of::<A>(),
            embeds_pagination: A::EMBEDS_PAGINATION,
            fields: A::input_fields(),
            parse: Arc::new(|args: ArgumentMap, pagination: &PaginationArgs| {
                let mut parsed = A::from_arguments(args)?;
                if A::EMBEDS_PAGINATION {
                    parsed.embed(pagination.clone());
                }
                Ok(Box::new(parsed) as BoxedArgs)
            }),
        }
    }

    /// Build a descriptor from parts, for argument types assembled at runtime.
    pub fn from_parts(
        ty: TypeDescriptor,
        embeds_pagination: bool,
        fields: Vec<InputField>,
        parse: impl Fn(ArgumentMap, &PaginationArgs) -> ArgumentResult<BoxedArgs>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        Self {
            ty,
            embeds_pagination,
            fields,
            parse: Arc::new(parse),
        }
    }

    pub fn type_descriptor(&self) -> TypeDescriptor {
        self.ty
    }

    pub fn embeds_pagination(&self) -> bool {
        self.embeds_pagination
    }

    pub fn fields(&self) -> &[InputField] {
        &self.fields
    }

    pub fn parse(
        &self,
        args: ArgumentMap,
        pagination: &PaginationArgs,
    ) -> ArgumentResult<BoxedArgs> {
        (self.parse)(args, pagination)
    }
}

impl fmt::Debug for ArgsDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArgsDescriptor")
            .field("ty", &self.ty)
            .field("embeds_pagination", &self.embeds_pagination)
            .field("fields", &self.fields)
            .finish()
    }
}

/// The reserved argument set of a paginated field.
#[derive(Clone, Debug)]
pub struct ReservedArguments {
    fields: Vec<InputField>,
}

impl ReservedArguments {
    /// See: https://relay.dev/graphql/connections.htm#sec-Arguments
    pub fn pagination() -> Self {
        Self {
            fields: vec![
                InputField::new(PaginationArgs::FIRST, TypeRef::named(TypeRef::INT))
                    .description(
                        "Paginate forward, returning the given amount of edges at most.",
                    ),
                InputField::new(PaginationArgs::LAST, TypeRef::named(TypeRef::INT))
                    .description(
                        "Paginate backward, returning the given amount of edges at most.",
                    ),
                InputField::new(PaginationArgs::AFTER, TypeRef::named(TypeRef::STRING))
                    .description("Return edges after the given cursor."),
                InputField::new(PaginationArgs::BEFORE, TypeRef::named(TypeRef::STRING))
                    .description("Return edges before the given cursor."),
            ],
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name == name)
    }
}

#[derive(Default)]
pub struct ParsedArguments {
    pub pagination: PaginationArgs,
    pub nested: Option<BoxedArgs>,
}

impl fmt::Debug for ParsedArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedArguments")
            .field("pagination", &self.pagination)
            .field("nested", &self.nested.is_some())
            .finish()
    }
}

/// Parses the arguments of a paginated field: reserved names into [`PaginationArgs`],
/// everything else into the user's argument type.
#[derive(Clone, Debug)]
pub struct ArgumentParser {
    reserved: ReservedArguments,
    nested: Option<ArgsDescriptor>,
}

impl ArgumentParser {
    /// Merge the reserved set with the user's argument type. A user field named like a
    /// reserved argument is rejected.
    pub fn merged(
        reserved: ReservedArguments,
        nested: Option<ArgsDescriptor>,
    ) -> BuildResult<Self> {
        if let Some(nested) = &nested {
            if nested
                .fields()
                .iter()
                .any(|field| reserved.contains(&field.name))
            {
                return Err(BuildError::ReservedArgument);
            }
        }
        Ok(Self { reserved, nested })
    }

    /// All declared arguments, reserved first.
    pub fn input_fields(&self) -> impl Iterator<Item = &InputField> {
        self.reserved.fields.iter().chain(
            self.nested
                .iter()
                .flat_map(|nested| nested.fields().iter()),
        )
    }

    pub fn parse(&self, args: ArgumentMap) -> ArgumentResult<ParsedArguments> {
        let (reserved, rest): (ArgumentMap, ArgumentMap) = args
            .into_iter()
            .partition(|(name, _)| self.reserved.contains(name));

        let pagination = parse_arguments::<PaginationArgs>(reserved)
            .map_err(|e| ArgumentError::Field("pagination".to_string(), e.to_string()))?;

        let nested = match &self.nested {
            Some(nested) => Some(nested.parse(rest, &pagination)?),
            None if rest.is_empty() => None,
            None => return Err(ArgumentError::Unexpected),
        };

        Ok(ParsedArguments { pagination, nested })
    }
}
