use crate::model::{Author, Comment, Tutorial};

/// Build the fixed dataset: a single tutorial with one comment.
pub fn populate() -> Vec<Tutorial> {
    let author = Author::new("Handsome guy").with_tutorials(vec![1]);
    let tutorial = Tutorial::new(1, "GraphQL Tutorial", author)
        .with_comments(vec![Comment::new("First Comment")]);

    vec![tutorial]
}
