use crate::model::Tutorial;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;
use std::future::Future;

/// Drive an async GraphQL call to completion on a single-threaded runtime
pub fn block_on<F: Future>(future: F) -> Result<F::Output> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(runtime.block_on(future))
}

pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

pub fn print_tutorial_list(tutorials: &[Tutorial]) {
    if tutorials.is_empty() {
        println!("No tutorials found.");
        return;
    }

    for tutorial in tutorials {
        println!(
            "{} {} by {} ({} comments)",
            tutorial.id.to_string().cyan(),
            tutorial.title,
            tutorial.author.name.magenta(),
            tutorial.comments.len()
        );
    }
}

pub fn print_tutorial(tutorial: &Tutorial) {
    println!(
        "{} {}",
        tutorial.id.to_string().cyan().bold(),
        tutorial.title.bold()
    );
    println!("Author:    {}", tutorial.author.name.magenta());

    if !tutorial.author.tutorials.is_empty() {
        let ids: Vec<String> = tutorial
            .author
            .tutorials
            .iter()
            .map(|id| id.to_string())
            .collect();
        println!("Tutorials: {}", ids.join(", ").cyan());
    }

    if !tutorial.comments.is_empty() {
        println!("\n{}", "Comments".bold());
        for comment in &tutorial.comments {
            println!("- {}", comment.body);
        }
    }
}
