use clap::{Parser as ClapParser, Subcommand};
use deepr::cli::{self, CheckOptions, CheckResult, CliError};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "deepr")]
#[command(about = "Deepr - Parse queries composing remote method and attribute invocations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a query and print its expression tree
    Check {
        /// The query as JSON (reads from stdin if not provided)
        query: Option<String>,

        /// Pretty-print the output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate the query, don't print the expression tree
        #[arg(long)]
        syntax_only: bool,

        /// Parser options as JSON, e.g. '{"ignoreKeys": ["/^_/"]}'
        #[arg(long)]
        options: Option<String>,

        /// Ignore a source key (`key` or `/pattern/`)
        #[arg(long = "ignore-key")]
        ignore_keys: Vec<String>,

        /// Accept a source key even if ignored (`key` or `/pattern/`)
        #[arg(long = "accept-key")]
        accept_keys: Vec<String>,

        /// Parse built-in keys like any other key
        #[arg(long)]
        keep_built_in_keys: bool,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'deepr docs' to list categories)
        category: String,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            query,
            pretty,
            syntax_only,
            options,
            ignore_keys,
            accept_keys,
            keep_built_in_keys,
        } => read_query(query).and_then(|query| {
            run_check(CheckOptions {
                query,
                pretty,
                syntax_only,
                options,
                ignore_keys,
                accept_keys,
                keep_built_in_keys,
            })
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn read_query(query: Option<String>) -> Result<Option<String>, CliError> {
    match query {
        Some(s) => Ok(Some(s)),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Ok(Some(buffer))
        }
        None => Ok(None),
    }
}

fn run_check(options: CheckOptions) -> Result<(), CliError> {
    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Query is valid"),
        CheckResult::Success(output) => println!("{}", output),
    }
    Ok(())
}
