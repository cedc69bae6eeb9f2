//! The `gql-tree` command line tool.
//!
//! Parses a GraphQL document and prints its rendered tree, or with `--json` the arguments of
//! every field as JSON. Set `RUST_LOG=debug` to see what the tool is doing.

use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gql_tree::ast::{ASTContext, Document, Field, SelectionSet};
use gql_tree::json::ValueFromNode;
use log::{debug, info};
use serde_json::{Map as JSMap, Value as JSValue};

/// An error related to the `gql-tree` command.
#[derive(Debug)]
enum Error {
    /// An input/output error.
    InputOutput(std::io::Error),

    /// A lex or syntax error in the document.
    Parse(gql_tree::error::Error),

    /// A JSON serialization error.
    Json(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InputOutput(err) => write!(f, "i/o error: {err}"),
            Error::Parse(err) => write!(f, "{err}"),
            Error::Json(err) => write!(f, "json error: {err}"),
        }
    }
}

impl std::error::Error for Error {}

/// A [`Result`](std::result::Result) with an [`Error`].
type Result<T> = std::result::Result<T, Error>;

/// Parses a GraphQL document and prints its tree.
#[derive(Debug, Parser)]
#[command(name = "gql-tree", version, about)]
struct Args {
    /// Path to the GraphQL document. Reads from STDIN when omitted or `-`.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Print the arguments of every field as JSON instead of the rendered tree.
    #[arg(long)]
    json: bool,
}

/// Reads the document from the given path, or from STDIN.
fn read_source(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => {
            debug!("reading document from `{}`", path.display());
            std::fs::read_to_string(path).map_err(Error::InputOutput)
        }
        _ => {
            debug!("reading document from stdin");
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(Error::InputOutput)?;
            Ok(source)
        }
    }
}

/// Collects the arguments of every field below `selection_set`, keyed by the field's response
/// path, e.g. `hero.friends`.
fn collect_arguments(
    selection_set: &SelectionSet<'_>,
    prefix: &str,
    out: &mut JSMap<String, JSValue>,
) {
    for field in selection_set.fields() {
        let path = field_path(prefix, field);
        if let Some(arguments) = &field.arguments {
            out.insert(path.clone(), arguments.to_json());
        }
        if let Some(selection_set) = &field.selection_set {
            collect_arguments(selection_set, &path, out);
        }
    }
}

fn field_path(prefix: &str, field: &Field<'_>) -> String {
    if prefix.is_empty() {
        field.alias_or_name().to_string()
    } else {
        format!("{prefix}.{}", field.alias_or_name())
    }
}

fn arguments_json(document: &Document<'_>) -> JSValue {
    let operations = document
        .operations()
        .map(|operation| {
            let mut arguments = JSMap::new();
            collect_arguments(&operation.selection_set, "", &mut arguments);
            let mut entry = JSMap::new();
            entry.insert(
                "name".to_string(),
                operation.name.map_or(JSValue::Null, JSValue::from),
            );
            entry.insert("arguments".to_string(), JSValue::Object(arguments));
            JSValue::Object(entry)
        })
        .collect::<Vec<_>>();
    JSValue::Array(operations)
}

fn run(args: Args) -> Result<()> {
    let source = read_source(args.path.as_ref())?;
    let ctx = ASTContext::new();
    let document = gql_tree::parse(&ctx, source.as_str()).map_err(Error::Parse)?;
    info!(
        "parsed {} definition(s) from {} byte(s)",
        document.definitions.len(),
        source.len()
    );

    if args.json {
        let output = serde_json::to_string_pretty(&arguments_json(document)).map_err(Error::Json)?;
        println!("{output}");
    } else {
        println!("{}", gql_tree::render(document));
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
