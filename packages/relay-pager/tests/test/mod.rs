#![allow(dead_code)]

pub mod prelude {
    pub use super::util::*;
    pub use assert_matches::*;
    pub use async_graphql::dynamic::{Schema, TypeRef};
    pub use async_graphql::{Request, Response, ServerError};
    pub use futures::future::FutureExt;
    pub use insta::*;
    pub use relay_pager::{prelude::*, testing::*, BuildError};
    pub use serde_json::{json, Value as JsonValue};
}

pub mod util {
    use super::prelude::*;

    pub async fn execute_query(
        schema: &Schema,
        query: impl Into<String>,
    ) -> Result<Response, Vec<ServerError>> {
        let response = schema.execute(Request::new(query)).await;
        response.into_result()
    }

    /// Execute against the example schema and return the data as JSON.
    pub async fn query_data(query: &str) -> JsonValue {
        let response = execute_query(&schema(), query).await.unwrap();
        response.data.into_json().unwrap()
    }

    /// Execute against the example schema and return the first error message.
    pub async fn query_error(query: &str) -> String {
        let errors = execute_query(&schema(), query).await.unwrap_err();
        errors[0].message.clone()
    }
}
