//! Object types declared on a schema, keyed by their Rust type.

use crate::{
    binder::PaginatedField,
    connection::Edge,
    cursor::{cursor_for_value, Cursor},
    error::{BuildError, BuildResult, PaginationError, PaginationResult},
    object::{ObjectValue, TypeDescriptor},
};
use async_graphql::{dynamic::TypeRef, Value};
use indexmap::IndexMap;
use std::{any::Any, any::TypeId, fmt, marker::PhantomData, sync::Arc};

pub type ValueGetter = Arc<dyn Fn(&ObjectValue) -> Option<Value> + Send + Sync>;
pub type ObjectGetter = Arc<dyn Fn(&ObjectValue) -> Option<ObjectValue> + Send + Sync>;

fn value_getter<T, V, F>(getter: F) -> ValueGetter
where
    T: Any + Send + Sync,
    V: Into<Value>,
    F: Fn(&T) -> V + Send + Sync + 'static,
{
    Arc::new(move |object: &ObjectValue| object.downcast_ref::<T>().map(|t| getter(t).into()))
}

pub enum FieldKind {
    Value {
        ty: TypeRef,
        getter: ValueGetter,
    },
    Object {
        target: TypeDescriptor,
        getter: ObjectGetter,
    },
    Paginated(PaginatedField),
}

pub struct ObjectType {
    pub name: String,
    pub descriptor: TypeDescriptor,
    pub key: Option<String>,
    pub fields: IndexMap<String, FieldKind>,
    duplicates: Vec<String>,
}

impl ObjectType {
    pub fn new(name: impl Into<String>, descriptor: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
            key: None,
            fields: IndexMap::new(),
            duplicates: Vec::new(),
        }
    }

    fn insert_field(&mut self, name: &str, kind: FieldKind) {
        if self.fields.insert(name.to_string(), kind).is_some() {
            self.duplicates.push(name.to_string());
        }
    }

    /// Fields that were declared more than once.
    pub fn duplicates(&self) -> &[String] {
        &self.duplicates
    }
}

/// The scalar field whose value identifies a node and derives its cursor.
#[derive(Clone)]
pub struct KeyField {
    name: String,
    node: TypeDescriptor,
    getter: ValueGetter,
}

impl KeyField {
    pub fn new<T, V, F>(name: &str, getter: F) -> Self
    where
        T: Any + Send + Sync,
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self {
            name: name.to_string(),
            node: TypeDescriptor::of::<T>(),
            getter: value_getter(getter),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self, node: &ObjectValue) -> PaginationResult<Value> {
        (self.getter)(node).ok_or(PaginationError::NodeType {
            expected: self.node.name(),
        })
    }

    pub fn cursor(&self, node: &ObjectValue) -> PaginationResult<Cursor> {
        Ok(cursor_for_value(&self.value(node)?))
    }

    /// Pair every node with its cursor, preserving order.
    pub fn edges(&self, nodes: Vec<ObjectValue>) -> PaginationResult<Vec<Edge>> {
        nodes
            .into_iter()
            .map(|node| {
                let cursor = self.cursor(&node)?;
                Ok(Edge { node, cursor })
            })
            .collect()
    }
}

impl fmt::Debug for KeyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyField")
            .field("name", &self.name)
            .field("node", &self.node)
            .finish()
    }
}

#[derive(Default)]
pub struct ObjectRegistry {
    objects: IndexMap<TypeId, ObjectType>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under `name`, or return the existing registration.
    pub fn register<T: Any + Send + Sync>(&mut self, name: &str) -> &mut ObjectType {
        let descriptor = TypeDescriptor::of::<T>();
        self.objects
            .entry(descriptor.id())
            .or_insert_with(|| ObjectType::new(name, descriptor))
    }

    pub fn get(&self, descriptor: &TypeDescriptor) -> Option<&ObjectType> {
        self.objects.get(&descriptor.id())
    }

    pub fn objects(&self) -> impl Iterator<Item = &ObjectType> {
        self.objects.values()
    }

    pub fn name_of(&self, descriptor: &TypeDescriptor) -> BuildResult<&str> {
        self.get(descriptor)
            .map(|object| object.name.as_str())
            .ok_or_else(|| BuildError::UnknownObjectType(descriptor.to_string()))
    }

    /// Resolve a node type to its declared key field.
    pub fn key_field(&self, descriptor: &TypeDescriptor) -> BuildResult<KeyField> {
        let object = self
            .get(descriptor)
            .ok_or_else(|| BuildError::UnregisteredNode(descriptor.to_string()))?;

        let key = match object.key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(BuildError::MissingKey),
        };

        match object.fields.get(key) {
            Some(FieldKind::Value { getter, .. }) => Ok(KeyField {
                name: key.to_string(),
                node: *descriptor,
                getter: getter.clone(),
            }),
            Some(_) => Err(BuildError::KeyFieldNotScalar(key.to_string())),
            None => Err(BuildError::KeyFieldNotFound),
        }
    }
}

/// Declares the fields of one registered object type.
pub struct ObjectBuilder<'r, T> {
    object: &'r mut ObjectType,
    _marker: PhantomData<fn(&T)>,
}

impl<'r, T: Any + Send + Sync> ObjectBuilder<'r, T> {
    pub(crate) fn new(object: &'r mut ObjectType) -> Self {
        Self {
            object,
            _marker: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.object.name
    }

    /// Designate the scalar field used to derive cursors.
    pub fn key(&mut self, field: &str) -> &mut Self {
        self.object.key = Some(field.to_string());
        self
    }

    pub fn field<V, F>(&mut self, name: &str, ty: TypeRef, getter: F) -> &mut Self
    where
        V: Into<Value>,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.object.insert_field(
            name,
            FieldKind::Value {
                ty,
                getter: value_getter(getter),
            },
        );
        self
    }

    /// A non-null field holding another registered object.
    pub fn object_field<U, F>(&mut self, name: &str, getter: F) -> &mut Self
    where
        U: Any + Send + Sync,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        let getter: ObjectGetter = Arc::new(move |object: &ObjectValue| {
            object.downcast_ref::<T>().map(|t| ObjectValue::new(getter(t)))
        });
        self.object.insert_field(
            name,
            FieldKind::Object {
                target: TypeDescriptor::of::<U>(),
                getter,
            },
        );
        self
    }

    pub fn paginated_field(&mut self, name: &str, field: PaginatedField) -> &mut Self {
        self.object.insert_field(name, FieldKind::Paginated(field));
        self
    }
}
