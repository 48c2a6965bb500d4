use std::sync::Arc;

use async_graphql::{
    Context, EmptyMutation, EmptySubscription, Object, Request, Response, Schema, Variables,
};

use crate::error::{Result, TutgraphError};
use crate::storage::Catalog;

use super::types::*;

pub type TutorialSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn build_schema(catalog: Arc<Catalog>) -> TutorialSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(catalog)
        .finish()
}

/// Execute a single request against the schema.
///
/// Any GraphQL error in the response is returned as [`TutgraphError::Execution`].
pub async fn execute(
    schema: &TutorialSchema,
    query: &str,
    variables: Variables,
) -> Result<Response> {
    tracing::debug!(query = %query.trim(), "Executing GraphQL request");
    let request = Request::new(query).variables(variables);
    let response = schema.execute(request).await;

    if !response.errors.is_empty() {
        let messages: Vec<String> = response.errors.iter().map(|e| e.message.clone()).collect();
        return Err(TutgraphError::Execution(messages.join("; ")));
    }

    Ok(response)
}

fn catalog<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<Catalog>> {
    ctx.data::<Arc<Catalog>>()
}

pub struct QueryRoot;

#[Object(name = "RootQuery")]
impl QueryRoot {
    /// Get tutorial by id
    async fn tutorial(
        &self,
        ctx: &Context<'_>,
        id: Option<i32>,
    ) -> async_graphql::Result<Option<Tutorial>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(catalog(ctx)?.get(id).cloned().map(|t| t.into()))
    }

    /// Get full tutorial list
    async fn list(
        &self,
        ctx: &Context<'_>,
    ) -> async_graphql::Result<Option<Vec<Option<Tutorial>>>> {
        let tutorials = catalog(ctx)?
            .list()
            .iter()
            .cloned()
            .map(|t| Some(t.into()))
            .collect();
        Ok(Some(tutorials))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::DEMO_QUERY;
    use crate::model::{Author, Tutorial as ModelTutorial};
    use serde_json::json;

    fn seeded_schema() -> TutorialSchema {
        build_schema(Arc::new(Catalog::seeded()))
    }

    async fn run(schema: &TutorialSchema, query: &str) -> serde_json::Value {
        let response = execute(schema, query, Variables::default()).await.unwrap();
        serde_json::to_value(&response).unwrap()
    }

    #[tokio::test]
    async fn test_demo_query_output() {
        let schema = seeded_schema();
        let response = execute(&schema, DEMO_QUERY, Variables::default())
            .await
            .unwrap();

        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"data":{"list":[{"id":1,"title":"GraphQL Tutorial","comments":[{"body":"First Comment"}],"author":{"Name":"Handsome guy","Tutorials":[1]}}]}}"#
        );
    }

    #[tokio::test]
    async fn test_tutorial_by_id() {
        let schema = seeded_schema();
        let value = run(&schema, "{ tutorial(id: 1) { id title author { Name } } }").await;

        assert_eq!(
            value,
            json!({ "data": { "tutorial": {
                "id": 1,
                "title": "GraphQL Tutorial",
                "author": { "Name": "Handsome guy" },
            } } })
        );
    }

    #[tokio::test]
    async fn test_tutorial_unknown_id_is_null() {
        let schema = seeded_schema();
        for id in [0, 2, 42, -1] {
            let query = format!("{{ tutorial(id: {}) {{ id }} }}", id);
            let value = run(&schema, &query).await;
            assert_eq!(value, json!({ "data": { "tutorial": null } }));
        }
    }

    #[tokio::test]
    async fn test_tutorial_absent_id_is_null() {
        let schema = seeded_schema();
        let value = run(&schema, "{ tutorial { id } }").await;
        assert_eq!(value, json!({ "data": { "tutorial": null } }));
    }

    #[tokio::test]
    async fn test_tutorial_id_from_variables() {
        let schema = seeded_schema();
        let variables = Variables::from_json(json!({ "id": 1 }));
        let response = execute(
            &schema,
            "query($id: Int) { tutorial(id: $id) { title } }",
            variables,
        )
        .await
        .unwrap();

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "data": { "tutorial": { "title": "GraphQL Tutorial" } } })
        );
    }

    #[tokio::test]
    async fn test_list_on_empty_catalog() {
        let schema = build_schema(Arc::new(Catalog::default()));
        let value = run(&schema, "{ list { id } }").await;
        assert_eq!(value, json!({ "data": { "list": [] } }));
    }

    #[tokio::test]
    async fn test_list_returns_everything() {
        let schema = build_schema(Arc::new(Catalog::new(vec![
            ModelTutorial::new(1, "a", Author::new("x")),
            ModelTutorial::new(2, "b", Author::new("y")),
        ])));
        let value = run(&schema, "{ list { id title } }").await;
        assert_eq!(
            value,
            json!({ "data": { "list": [
                { "id": 1, "title": "a" },
                { "id": 2, "title": "b" },
            ] } })
        );
    }

    #[tokio::test]
    async fn test_unknown_field_is_execution_error() {
        let schema = seeded_schema();
        let err = execute(&schema, "{ list { nope } }", Variables::default())
            .await
            .unwrap_err();
        assert!(matches!(err, TutgraphError::Execution(_)));
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn test_mutations_not_supported() {
        let schema = seeded_schema();
        let result = execute(&schema, "mutation { list { id } }", Variables::default()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_sdl_fields_are_nullable() {
        let sdl = seeded_schema().sdl();
        assert!(sdl.contains("type RootQuery"));
        assert!(sdl.contains("tutorial(id: Int): Tutorials"));
        assert!(sdl.contains("list: [Tutorials]\n"));
        assert!(sdl.contains("Get full tutorial list"));

        assert!(sdl.contains("type Tutorials"));
        assert!(sdl.contains("id: Int\n"));
        assert!(sdl.contains("title: String\n"));
        assert!(sdl.contains("author: Author\n"));
        assert!(sdl.contains("comments: [Comment]\n"));
        assert!(sdl.contains("Name: String\n"));
        assert!(sdl.contains("Tutorials: [Int]\n"));
        assert!(sdl.contains("body: String\n"));
        assert!(!sdl.contains("Int!"));
        assert!(!sdl.contains("Tutorials!"));
        assert!(!sdl.contains("Comment!"));
    }
}
