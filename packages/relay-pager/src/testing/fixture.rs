//! A small schema of five keyed items reachable through `Query.inner`, exposing one
//! paginated field per supported resolver shape.

use super::self_prelude::*;
use futures::future::BoxFuture;
use relay_pager_lib::config::NamingConfig;
use tracing::debug;

pub const ITEM_COUNT: i64 = 5;

#[derive(Clone, Copy, Debug, Default)]
pub struct Query;

#[derive(Clone, Copy, Debug, Default)]
pub struct Inner;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
}

/// Arguments declared next to the reserved pagination ones.
#[derive(Clone, Debug, Deserialize)]
pub struct Args {
    pub additional: String,
}

impl FieldArguments for Args {
    fn input_fields() -> Vec<InputField> {
        vec![InputField::new("additional", TypeRef::named_nn(TypeRef::STRING))]
    }

    fn from_arguments(args: ArgumentMap) -> ArgumentResult<Self> {
        parse_arguments(args)
    }
}

/// Arguments carrying the pagination directives for a resolver that slices itself.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct EmbeddedArgs {
    #[serde(skip)]
    pub pagination: PaginationArgs,
    pub additional: String,
}

impl FieldArguments for EmbeddedArgs {
    const EMBEDS_PAGINATION: bool = true;

    fn input_fields() -> Vec<InputField> {
        Args::input_fields()
    }

    fn from_arguments(args: ArgumentMap) -> ArgumentResult<Self> {
        parse_arguments(args)
    }

    fn embed(&mut self, pagination: PaginationArgs) {
        self.pagination = pagination;
    }
}

pub fn items() -> Vec<Item> {
    (1..=ITEM_COUNT).map(|id| Item { id }).collect()
}

fn managed_items(
    call: ResolveCall<'_, Inner, EmbeddedArgs>,
) -> BoxFuture<'_, Result<(Vec<Item>, PaginationInfo), async_graphql::Error>> {
    async move {
        let first = call.args.pagination.first.unwrap_or(ITEM_COUNT);
        let take = usize::try_from(first).unwrap_or_default();
        let items = items().into_iter().take(take).collect();
        let info = PaginationInfo::new(true, false).with_total_count(|| ITEM_COUNT);
        Ok((items, info))
    }
    .boxed()
}

fn failing_managed_items(
    _call: ResolveCall<'_, Inner, EmbeddedArgs>,
) -> BoxFuture<'_, Result<(Vec<Item>, PaginationInfo), async_graphql::Error>> {
    async move { Err(async_graphql::Error::new("this is an error")) }.boxed()
}

pub fn schema_builder(naming: NamingConfig) -> SchemaBuilder {
    let mut builder = SchemaBuilder::with_config(naming);

    builder.query::<Query>().object_field("inner", |_: &Query| Inner);

    builder
        .object::<Item>("Item")
        .key("id")
        .field("id", TypeRef::named_nn(TypeRef::INT), |item: &Item| item.id);

    builder
        .object::<Inner>("Inner")
        .paginated_field(
            "innerConnection",
            PaginatedField::new(|_call: ResolveCall<'_, Inner, Args>| {
                async move { items() }.boxed()
            }),
        )
        .paginated_field(
            "innerConnectionNilArg",
            PaginatedField::new(|_call: ResolveCall<'_, Inner, ()>| {
                async move { items() }.boxed()
            }),
        )
        .paginated_field(
            "innerConnectionWithCtxAndError",
            PaginatedField::new(|call: ResolveCall<'_, Inner, Args>| {
                async move {
                    debug!("Resolving {}.", call.selection_set().name());
                    Ok::<_, async_graphql::Error>(items())
                }
                .boxed()
            }),
        )
        .paginated_field(
            "innerConnectionWithError",
            PaginatedField::new(|_call: ResolveCall<'_, Inner, Args>| {
                async move { Err::<Vec<Item>, _>(async_graphql::Error::new("this is an error")) }
                    .boxed()
            }),
        )
        .paginated_field(
            "innerManagedConnection",
            PaginatedField::with_managed_info(managed_items),
        )
        .paginated_field(
            "innerManagedConnectionWithError",
            PaginatedField::with_managed_info(failing_managed_items),
        );

    builder
}

pub fn schema() -> Schema {
    schema_builder(NamingConfig::default()).must_build()
}
