use crate::model::{self, Tutorial as ModelTutorial};
use async_graphql::SimpleObject;

// Every field is nullable in the published schema, lists included.

#[derive(SimpleObject, Clone)]
pub struct Comment {
    pub body: Option<String>,
}

impl From<model::Comment> for Comment {
    fn from(c: model::Comment) -> Self {
        Self { body: Some(c.body) }
    }
}

#[derive(SimpleObject, Clone)]
pub struct Author {
    #[graphql(name = "Name")]
    pub name: Option<String>,
    #[graphql(name = "Tutorials")]
    pub tutorials: Option<Vec<Option<i32>>>,
}

impl From<model::Author> for Author {
    fn from(a: model::Author) -> Self {
        Self {
            name: Some(a.name),
            tutorials: Some(a.tutorials.into_iter().map(Some).collect()),
        }
    }
}

#[derive(SimpleObject, Clone)]
#[graphql(name = "Tutorials")]
pub struct Tutorial {
    pub id: Option<i32>,
    pub title: Option<String>,
    pub author: Option<Author>,
    pub comments: Option<Vec<Option<Comment>>>,
}

impl From<ModelTutorial> for Tutorial {
    fn from(t: ModelTutorial) -> Self {
        Self {
            id: Some(t.id),
            title: Some(t.title),
            author: Some(t.author.into()),
            comments: Some(t.comments.into_iter().map(|c| Some(c.into())).collect()),
        }
    }
}
