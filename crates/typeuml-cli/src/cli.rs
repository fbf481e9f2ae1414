//! Command-line interface for the typeuml utility
//!
//! Loads a JSON symbol graph and writes PlantUML class diagrams, or a Rust
//! module embedding them as constants.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use typeuml::core::logging::init_logging;
use typeuml::diagram::{MemberRenderer, RelationshipResolver, WorkingSet};
use typeuml::{
    embed, DiagramAssembler, RenderConfig, SymbolGraph, SymbolProvider, VisibilityFilter,
};

/// Typeuml - Turn a symbol graph into PlantUML class diagrams
#[derive(Parser)]
#[command(name = "typeuml")]
#[command(about = "Render a program's type declarations as PlantUML class diagrams")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error|off)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Log level options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Off => "off",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one diagram variant
    Render {
        /// Symbol graph JSON file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Which declarations to include
        #[arg(long, value_enum, default_value_t = VisibilityChoice::PublicOrInternal)]
        visibility: VisibilityChoice,

        /// PlantUML theme for the header directive
        #[arg(long)]
        theme: Option<String>,
    },

    /// Generate a Rust module embedding both diagram variants as constants
    Generate {
        /// Symbol graph JSON file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for the module (use - for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// PlantUML theme for the header directive
        #[arg(long)]
        theme: Option<String>,
    },

    /// Summarize which types and edges a pass would render
    Inspect {
        /// Symbol graph JSON file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Which declarations to include
        #[arg(long, value_enum, default_value_t = VisibilityChoice::PublicOrInternal)]
        visibility: VisibilityChoice,

        /// Show in JSON format
        #[arg(long)]
        json: bool,
    },
}

/// Visibility predicates selectable from the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum VisibilityChoice {
    /// Public, internal and internal-or-protected declarations
    #[default]
    PublicOrInternal,
    /// Public declarations only
    PublicOnly,
}

impl From<VisibilityChoice> for VisibilityFilter {
    fn from(value: VisibilityChoice) -> Self {
        match value {
            VisibilityChoice::PublicOrInternal => VisibilityFilter::PublicOrInternal,
            VisibilityChoice::PublicOnly => VisibilityFilter::PublicOnly,
        }
    }
}

/// One rendered type in an inspect report
#[derive(Debug, Serialize)]
struct TypeSummary {
    name: String,
    keyword: &'static str,
    member_lines: usize,
    edges: Vec<String>,
}

/// Result of the inspect command
#[derive(Debug, Serialize)]
struct InspectReport {
    filter: String,
    declared: usize,
    rendered: usize,
    types: Vec<TypeSummary>,
}

/// Main CLI application
pub struct TypeumlApp;

impl TypeumlApp {
    pub fn new() -> Self {
        Self
    }

    fn build_config(theme: Option<String>) -> RenderConfig {
        theme.map(RenderConfig::new).unwrap_or_default()
    }

    /// Run the application with the given CLI arguments
    pub fn run(&mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over flags
        let log_level_str = std::env::var("TYPEUML_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("TYPEUML_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Typeuml v{}", env!("CARGO_PKG_VERSION"));
        }

        match cli.command {
            Commands::Render {
                input,
                output,
                visibility,
                theme,
            } => self.render_command(input, output, visibility.into(), theme, cli.verbose),
            Commands::Generate {
                input,
                output,
                theme,
            } => self.generate_command(input, output, theme, cli.verbose),
            Commands::Inspect {
                input,
                visibility,
                json,
            } => self.inspect_command(input, visibility.into(), json, cli.verbose),
        }
    }

    /// Handle the render command
    fn render_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        filter: VisibilityFilter,
        theme: Option<String>,
        verbose: bool,
    ) -> Result<()> {
        let graph = self.load_graph(input, verbose)?;
        let assembler = DiagramAssembler::with_config(Self::build_config(theme));
        let diagram = assembler.render(&graph, filter);

        if verbose {
            eprintln!("Rendered {} diagram ({} bytes)", filter, diagram.len());
        }

        self.write_output(output, &diagram)
    }

    /// Handle the generate command
    fn generate_command(
        &self,
        input: Option<PathBuf>,
        output: Option<PathBuf>,
        theme: Option<String>,
        verbose: bool,
    ) -> Result<()> {
        let graph = self.load_graph(input, verbose)?;
        let assembler = DiagramAssembler::with_config(Self::build_config(theme));
        let diagrams = assembler.render_all(&graph);
        let module = embed::generate_module(&diagrams);

        info!(bytes = module.len(), "Generated diagram module");
        if verbose {
            eprintln!("Generated module with {} constants", diagrams.iter().count());
        }

        self.write_output(output, &module)
    }

    /// Handle the inspect command
    fn inspect_command(
        &self,
        input: Option<PathBuf>,
        filter: VisibilityFilter,
        json: bool,
        verbose: bool,
    ) -> Result<()> {
        let graph = self.load_graph(input, verbose)?;
        let report = Self::inspect(&graph, filter);

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        println!(
            "{} of {} declared types rendered ({})",
            report.rendered, report.declared, report.filter
        );
        for summary in &report.types {
            println!(
                "  {} {} ({} members)",
                summary.keyword, summary.name, summary.member_lines
            );
            for edge in &summary.edges {
                println!("    {}", edge);
            }
        }
        Ok(())
    }

    fn inspect(graph: &SymbolGraph, filter: VisibilityFilter) -> InspectReport {
        let working_set = WorkingSet::select(graph, filter);
        let members = MemberRenderer::new(filter);
        let resolver = RelationshipResolver::new(&working_set, graph);

        let types = working_set
            .iter()
            .map(|entry| TypeSummary {
                name: entry.name().to_string(),
                keyword: entry.keyword(),
                member_lines: members.render_block(entry).len(),
                edges: resolver
                    .resolve(entry)
                    .iter()
                    .map(|edge| format!("{} {}", edge.kind, edge.to))
                    .collect(),
            })
            .collect();

        InspectReport {
            filter: filter.to_string(),
            declared: graph.type_count(),
            rendered: working_set.len(),
            types,
        }
    }

    fn load_graph(&self, input: Option<PathBuf>, verbose: bool) -> Result<SymbolGraph> {
        let content = self.read_input(input)?;
        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }
        let graph = SymbolGraph::from_json(&content).context("Failed to load symbol graph")?;
        debug!(type_count = graph.len(), "Loaded symbol graph");
        Ok(graph)
    }

    /// Read input from file or stdin
    fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_str() != Some("-") => fs::read_to_string(&path)
                .with_context(|| format!("Failed to read input file {}", path.display())),
            _ => {
                let mut buffer = String::new();
                io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read from stdin")?;
                Ok(buffer)
            }
        }
    }

    /// Write output to file or stdout
    fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        match output {
            Some(path) if path.to_str() != Some("-") => fs::write(&path, content)
                .with_context(|| format!("Failed to write output file {}", path.display())),
            _ => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
        }
    }
}

impl Default for TypeumlApp {
    fn default() -> Self {
        Self::new()
    }
}
