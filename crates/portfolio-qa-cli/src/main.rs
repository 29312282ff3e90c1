use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::{Args, Parser, Subcommand};
use portfolio_qa_core::{answer_question, search_documents};
use portfolio_qa_store::{JsonFileStore, KnowledgeSource, LoadError};
use serde_json::Value;

#[derive(Debug, Parser)]
#[command(name = "pqa")]
#[command(about = "Portfolio Q&A assistant CLI")]
struct Cli {
    #[arg(long, default_value = "./data/knowledge_base.json")]
    kb: PathBuf,

    #[arg(long, default_value = "./data/documents.json")]
    documents: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Answer a question from the local rule cascade, without the remote model.
    Ask(AskArgs),
    /// List the stored documents a question would pull in as context.
    Search(SearchArgs),
    /// Validate that the data files parse.
    Check,
}

#[derive(Debug, Args)]
struct AskArgs {
    #[arg(long)]
    question: String,
}

#[derive(Debug, Args)]
struct SearchArgs {
    #[arg(long)]
    question: String,
}

fn emit_json(value: Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let store = JsonFileStore::new(&cli.kb, &cli.documents);
    match cli.command {
        Command::Ask(args) => run_ask(&args, &store),
        Command::Search(args) => run_search(&args, &store),
        Command::Check => run_check(&store),
    }
}

fn run_ask(args: &AskArgs, store: &JsonFileStore) -> Result<()> {
    let kb = store.load_knowledge_base();
    let documents = store.load_documents();
    let answer = answer_question(&args.question, &kb, &documents);
    emit_json(serde_json::json!({
        "question": args.question,
        "answer": answer,
    }))
}

fn run_search(args: &SearchArgs, store: &JsonFileStore) -> Result<()> {
    let documents = store.load_documents();
    let matches = search_documents(&args.question, &documents)
        .into_iter()
        .map(|document| {
            serde_json::json!({
                "id": document.id.to_string(),
                "title": document.title,
                "category": document.category,
                "word_count": document.word_count,
            })
        })
        .collect::<Vec<_>>();
    emit_json(serde_json::json!({
        "question": args.question,
        "match_count": matches.len(),
        "matches": matches,
    }))
}

fn run_check(store: &JsonFileStore) -> Result<()> {
    let kb_status = check_status(store.try_load_knowledge_base().map(|_| ()));
    let documents_status = check_status(store.try_load_documents().map(|_| ()));

    let invalid = is_invalid(&kb_status) || is_invalid(&documents_status);
    emit_json(serde_json::json!({
        "knowledge_base": kb_status,
        "documents": documents_status,
    }))?;

    if invalid {
        return Err(anyhow!("one or more data files are invalid"));
    }
    Ok(())
}

fn check_status(result: Result<(), LoadError>) -> Value {
    match result {
        Ok(()) => serde_json::json!({ "status": "ok" }),
        // A missing file is fine at runtime: the store substitutes defaults.
        Err(LoadError::Read { path, source }) => serde_json::json!({
            "status": "missing",
            "path": path,
            "error": source.to_string(),
        }),
        Err(LoadError::Parse { path, source }) => serde_json::json!({
            "status": "invalid",
            "path": path,
            "error": source.to_string(),
        }),
    }
}

fn is_invalid(status: &Value) -> bool {
    status.get("status").and_then(Value::as_str) == Some("invalid")
}
