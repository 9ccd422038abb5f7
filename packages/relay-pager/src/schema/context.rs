use super::self_prelude::*;
use crate::{
    arguments::ArgumentMap,
    object::{ObjectValue, RootValue},
};
use async_graphql::Value;
use std::any::Any;

#[extension_trait]
pub impl<'a> PagerResolverContext<'a> for ResolverContext<'a> {
    fn parent<T: Any + Send + Sync>(&self) -> async_graphql::Result<&'a T> {
        self.parent_value.try_downcast_ref::<T>()
    }

    /// The object a field is resolved on. Root fields fall back to the query value.
    fn source(&self) -> async_graphql::Result<ObjectValue> {
        match self.parent_value.try_downcast_ref::<ObjectValue>() {
            Ok(value) => Ok(value.clone()),
            Err(_) => Ok(self.ctx.data::<RootValue>()?.0.clone()),
        }
    }

    /// The field's arguments with variables already substituted.
    fn argument_map(&self) -> async_graphql::Result<ArgumentMap> {
        self.args
            .iter()
            .map(|(name, value)| Ok((name.to_string(), value.deserialize::<Value>()?)))
            .collect()
    }
}
