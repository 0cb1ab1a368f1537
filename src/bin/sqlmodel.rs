//! sqlmodel CLI - Render schema files and sequence statements as SQL
//!
//! Usage:
//!   sqlmodel ddl <schema.toml> [--dialect <dialect>] [--config <file>] [--quote] [--drop]
//!   sqlmodel next-value <sequence> [--schema <schema>] [--dialect <dialect>]
//!   sqlmodel dialects
//!
//! Examples:
//!   sqlmodel ddl schema.toml --dialect postgres
//!   sqlmodel ddl schema.toml --dialect mysql --output json --check
//!   sqlmodel next-value citizen_seq --schema app --dialect oracle

use clap::{Parser, Subcommand, ValueEnum};
use sqlmodel::config::GeneratorSettings;
use sqlmodel::schema::SchemaDefinition;
use sqlmodel::sql::validate::validate_sql;
use sqlmodel::sql::{Dialect, ExportedStatement, SqlDialect, SqlStatementGenerator};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sqlmodel")]
#[command(about = "sqlmodel - render a declarative schema as dialect-specific SQL")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the DDL for a schema file
    Ddl {
        /// Path to the schema .toml file
        file: PathBuf,

        #[command(flatten)]
        target: TargetArgs,

        /// Emit drop statements instead of create statements
        #[arg(long)]
        drop: bool,

        /// Parse every emitted statement and fail on syntax errors
        #[arg(long)]
        check: bool,

        /// Output format
        #[arg(short, long, default_value = "sql")]
        output: OutputFormat,
    },

    /// Print the statement that fetches a sequence's next value
    NextValue {
        /// Sequence name
        sequence: String,

        /// Schema the sequence lives in
        #[arg(short, long)]
        schema: Option<String>,

        #[command(flatten)]
        target: TargetArgs,
    },

    /// List the supported dialects
    Dialects,
}

#[derive(clap::Args)]
struct TargetArgs {
    /// SQL dialect to generate (overrides the config file)
    #[arg(short, long)]
    dialect: Option<DialectArg>,

    /// Settings file (defaults to sqlmodel.toml lookup)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Quote every identifier
    #[arg(short, long)]
    quote: bool,
}

#[derive(Clone, ValueEnum)]
enum DialectArg {
    Ansi,
    Derby,
    H2,
    Mysql,
    Mariadb,
    Oracle,
    Postgres,
}

impl From<DialectArg> for Dialect {
    fn from(arg: DialectArg) -> Self {
        match arg {
            DialectArg::Ansi => Dialect::Ansi,
            DialectArg::Derby => Dialect::Derby,
            DialectArg::H2 => Dialect::H2,
            DialectArg::Mysql => Dialect::MySql,
            DialectArg::Mariadb => Dialect::MariaDb,
            DialectArg::Oracle => Dialect::Oracle,
            DialectArg::Postgres => Dialect::Postgres,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// One `;`-terminated statement per line
    Sql,
    /// JSON array of `{sql, parameters}`
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ddl {
            file,
            target,
            drop,
            check,
            output,
        } => cmd_ddl(file, target, drop, check, output),
        Commands::NextValue {
            sequence,
            schema,
            target,
        } => cmd_next_value(sequence, schema, target),
        Commands::Dialects => cmd_dialects(),
    }
}

/// Resolve settings: config file first, then command-line overrides.
fn build_generator(target: TargetArgs) -> Result<SqlStatementGenerator, String> {
    let mut settings = match &target.config {
        Some(path) => GeneratorSettings::from_file(path),
        None => GeneratorSettings::load(),
    }
    .map_err(|e| format!("Configuration error: {}", e))?;

    if let Some(dialect) = target.dialect {
        settings.dialect = Dialect::from(dialect).to_string();
    }
    if target.quote {
        settings.quote_identifiers = true;
    }

    SqlStatementGenerator::from_settings(&settings).map_err(|e| format!("Configuration error: {}", e))
}

fn cmd_ddl(file: PathBuf, target: TargetArgs, drop: bool, check: bool, output: OutputFormat) -> ExitCode {
    let generator = match build_generator(target) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let schema = match SchemaDefinition::from_file(&file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error reading schema '{}': {}", file.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let statements = if drop {
        schema.to_drop_statements()
    } else {
        match schema.to_statements() {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Schema error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    };

    let mut exported: Vec<ExportedStatement> = Vec::with_capacity(statements.len());
    for statement in &statements {
        match generator.export_statement(statement) {
            Ok(e) => exported.push(e),
            Err(e) => {
                eprintln!("Generation error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    if check {
        for statement in &exported {
            if let Err(e) = validate_sql(&statement.sql, generator.dialect()) {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }

    match output {
        OutputFormat::Sql => {
            for statement in &exported {
                println!("{};", statement.sql);
            }
        }
        OutputFormat::Json => match serde_json::to_string_pretty(&exported) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                return ExitCode::FAILURE;
            }
        },
    }

    ExitCode::SUCCESS
}

fn cmd_next_value(sequence: String, schema: Option<String>, target: TargetArgs) -> ExitCode {
    let generator = match build_generator(target) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match generator.sequence_next_value_statement(schema.as_deref(), &sequence) {
        Ok(sql) => {
            println!("{}", sql);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Generation error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_dialects() -> ExitCode {
    for dialect in Dialect::ALL {
        let sequences = if dialect.supports_sequences() {
            "sequences"
        } else {
            "no sequences"
        };
        println!("{:<10} {}", dialect.name(), sequences);
    }
    ExitCode::SUCCESS
}
