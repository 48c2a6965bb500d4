use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tutorial {
    pub id: i32,
    pub title: String,
    pub author: Author,
    pub comments: Vec<Comment>,
}

/// Author details embedded by value in each tutorial.
///
/// `tutorials` is a plain list of ids and is not checked against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    pub name: String,
    pub tutorials: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub body: String,
}

impl Tutorial {
    pub fn new(id: i32, title: impl Into<String>, author: Author) -> Self {
        Self {
            id,
            title: title.into(),
            author,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(mut self, comments: Vec<Comment>) -> Self {
        self.comments = comments;
        self
    }
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tutorials: Vec::new(),
        }
    }

    pub fn with_tutorials(mut self, tutorials: Vec<i32>) -> Self {
        self.tutorials = tutorials;
        self
    }
}

impl Comment {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }
}
