mod test;

use crate::test::prelude::*;
use pretty_assertions::assert_eq;

#[tokio::test]
async fn managed_connection_reports_resolver_info() {
    let data = query_data(
        r#"{
            inner {
                innerManagedConnection(first: 5, additional: "x") {
                    totalCount
                    edges { node { id } }
                    pageInfo { hasNextPage hasPrevPage startCursor endCursor }
                }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data,
        json!({
            "inner": {
                "innerManagedConnection": {
                    "totalCount": 5,
                    "edges": [
                        { "node": { "id": 1 } },
                        { "node": { "id": 2 } },
                        { "node": { "id": 3 } },
                        { "node": { "id": 4 } },
                        { "node": { "id": 5 } }
                    ],
                    "pageInfo": {
                        "hasNextPage": true,
                        "hasPrevPage": false,
                        "startCursor": "MQ==",
                        "endCursor": "NQ=="
                    }
                }
            }
        })
    );
}

#[tokio::test]
async fn managed_connection_is_not_windowed_again() {
    let data = query_data(
        r#"{
            inner {
                innerManagedConnection(first: 2, after: "NA==", additional: "x") {
                    totalCount
                    edges { node { id } }
                }
            }
        }"#,
    )
    .await;

    assert_eq!(
        data["inner"]["innerManagedConnection"],
        json!({
            "totalCount": 5,
            "edges": [{ "node": { "id": 1 } }, { "node": { "id": 2 } }]
        })
    );
}

#[tokio::test]
async fn managed_connection_still_validates_directives() {
    let message = query_error(
        r#"{
            inner {
                innerManagedConnection(first: 1, last: 1, additional: "x") { totalCount }
            }
        }"#,
    )
    .await;

    assert_eq!(message, "Cannot use both first and last together");
}

#[tokio::test]
async fn managed_resolver_error_propagates() {
    let response = schema()
        .execute(Request::new(
            r#"{
                inner {
                    innerManagedConnectionWithError(first: 2, additional: "x") {
                        totalCount
                        edges { node { id } }
                    }
                }
            }"#,
        ))
        .await;

    assert_eq!(response.data.into_json().unwrap(), JsonValue::Null);
    assert_matches!(
        response.errors.as_slice(),
        [error] if error.message == "this is an error"
    );
}

#[tokio::test]
async fn managed_page_info_has_no_pages_field() {
    let errors = execute_query(
        &schema(),
        r#"{
            inner {
                innerManagedConnection(first: 1, additional: "x") {
                    pageInfo { pages }
                }
            }
        }"#,
    )
    .await
    .unwrap_err();

    assert_matches!(errors.as_slice(), [error] if error.message.contains("pages"));
}

#[tokio::test]
async fn sdl() {
    let schema = schema_builder(Default::default()).build();
    assert_matches!(schema, Ok(_));

    let text = schema.unwrap().pretty_sdl();
    assert!(text.contains("type ManagedPageInfo {"));
    assert!(text.contains("type ItemManagedConnection {"));
}
