use super::connection::*;
use super::context::*;
use super::page_info::*;
use super::resolver::ConnectionFieldResolver;
use crate::{
    binder::{BindingMode, BoundField},
    error::{BuildError, BuildResult, PaginationError},
    object::{ObjectValue, RootValue, TypeDescriptor},
    registry::{FieldKind, ObjectBuilder, ObjectRegistry, ObjectType},
};
use async_graphql::dynamic::{Field, FieldFuture, FieldValue, Object, Schema, TypeRef};
use indexmap::IndexMap;
use relay_pager_lib::config::NamingConfig;
use std::{any::Any, sync::Arc};
use tracing::debug;

/// Declares object types and paginated fields, then builds the executable schema.
pub struct SchemaBuilder {
    registry: ObjectRegistry,
    naming: NamingConfig,
    query: Option<(TypeDescriptor, ObjectValue)>,
}

impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::with_config(NamingConfig::default())
    }
}

impl SchemaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(naming: NamingConfig) -> Self {
        Self {
            registry: ObjectRegistry::new(),
            naming,
            query: None,
        }
    }

    pub fn naming(&self) -> &NamingConfig {
        &self.naming
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Declare the root query object. Root fields resolve on `Q::default()`.
    pub fn query<Q: Any + Send + Sync + Default>(&mut self) -> ObjectBuilder<'_, Q> {
        self.query = Some((TypeDescriptor::of::<Q>(), ObjectValue::new(Q::default())));
        let name = self.naming.query_root.clone();
        ObjectBuilder::new(self.registry.register::<Q>(&name))
    }

    pub fn object<T: Any + Send + Sync>(&mut self, name: &str) -> ObjectBuilder<'_, T> {
        ObjectBuilder::new(self.registry.register::<T>(name))
    }

    pub fn build(&self) -> BuildResult<Schema> {
        let (query_type, root) = self.query.clone().ok_or(BuildError::MissingQuery)?;
        let query_name = self.registry.name_of(&query_type)?;

        let mut generated = IndexMap::new();
        let mut objects = Vec::new();
        for object in self.registry.objects() {
            if let Some(field) = object.duplicates().first() {
                return Err(bad_method(
                    object,
                    field,
                    BuildError::DuplicateField(field.clone()),
                ));
            }

            let mut gql_object = Object::new(object.name.clone());
            for (name, kind) in &object.fields {
                let field = self
                    .build_field(object, name, kind, &mut generated)
                    .map_err(|e| bad_method(object, name, e))?;
                gql_object = gql_object.field(field);
            }
            objects.push(gql_object);
        }

        let mut schema = Schema::build(query_name, None, None);
        for object in objects.into_iter().chain(generated.into_values()) {
            schema = schema.register(object);
        }
        let schema = schema.data(RootValue(root)).finish()?;

        debug!("Built schema rooted at {query_name}.");

        Ok(schema)
    }

    /// Build the schema, panicking on any error.
    pub fn must_build(&self) -> Schema {
        match self.build() {
            Ok(schema) => schema,
            Err(e) => panic!("{e}"),
        }
    }

    fn build_field(
        &self,
        object: &ObjectType,
        name: &str,
        kind: &FieldKind,
        generated: &mut IndexMap<String, Object>,
    ) -> BuildResult<Field> {
        let expected = object.descriptor.name();
        match kind {
            FieldKind::Value { ty, getter } => {
                let getter = getter.clone();
                Ok(Field::new(name, ty.clone(), move |ctx| {
                    let getter = getter.clone();
                    FieldFuture::new(async move {
                        let source = ctx.source()?;
                        let value = getter(&source)
                            .ok_or(PaginationError::NodeType { expected })?;
                        Ok(Some(FieldValue::value(value)))
                    })
                }))
            }
            FieldKind::Object { target, getter } => {
                let target_name = self.registry.name_of(target)?;
                let getter = getter.clone();
                Ok(Field::new(
                    name,
                    TypeRef::named_nn(target_name),
                    move |ctx| {
                        let getter = getter.clone();
                        FieldFuture::new(async move {
                            let source = ctx.source()?;
                            let child = getter(&source)
                                .ok_or(PaginationError::NodeType { expected })?;
                            Ok(Some(FieldValue::owned_any(child)))
                        })
                    },
                ))
            }
            FieldKind::Paginated(field) => {
                let bound = field.bind(&self.registry, object.descriptor)?;
                let connection_name = self.connection_types(&bound, generated);
                let arguments = bound
                    .arguments()
                    .map(|argument| argument.input_value())
                    .collect::<Vec<_>>();

                let bound = Arc::new(bound);
                let field = Field::new(
                    name,
                    TypeRef::named_nn(connection_name),
                    move |ctx| {
                        let bound = bound.clone();
                        FieldFuture::new(async move {
                            let source = ctx.source()?;
                            let args = ctx.argument_map()?;
                            let connection = bound.resolve(ctx.ctx, source, args).await?;
                            Ok(Some(FieldValue::owned_any(connection)))
                        })
                    },
                );
                Ok(arguments
                    .into_iter()
                    .fold(field, |field, argument| field.argument(argument)))
            }
        }
    }

    /// Register the edge, page info and connection objects a bound field needs,
    /// once each, and return the connection type name.
    fn connection_types(
        &self,
        bound: &BoundField,
        generated: &mut IndexMap<String, Object>,
    ) -> String {
        let node = bound.node_name();
        let edge = self.naming.edge(node);
        let (connection, page_info, with_pages) = match bound.mode() {
            BindingMode::FrameworkManaged => {
                (self.naming.connection(node), self.naming.page_info.clone(), true)
            }
            BindingMode::ExternallyManaged => (
                self.naming.managed_connection(node),
                self.naming.managed_page_info.clone(),
                false,
            ),
        };

        if !generated.contains_key(&edge) {
            let object = Object::new_edge::<ConnectionFieldResolver>(edge.clone(), node);
            generated.insert(edge.clone(), object);
        }
        if !generated.contains_key(&page_info) {
            let object =
                Object::new_page_info::<ConnectionFieldResolver>(page_info.clone(), with_pages);
            generated.insert(page_info.clone(), object);
        }
        if !generated.contains_key(&connection) {
            let object = Object::new_connection::<ConnectionFieldResolver>(
                connection.clone(),
                &edge,
                &page_info,
            );
            generated.insert(connection.clone(), object);
        }

        connection
    }
}

fn bad_method(object: &ObjectType, field: &str, source: BuildError) -> BuildError {
    BuildError::BadMethod {
        object: object.name.clone(),
        field: field.to_string(),
        source: Box::new(source),
    }
}
