use clap::{Parser, Subcommand};
use itertools::Itertools;
use prefill::prelude::*;
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Inspect blueprint dependencies and try out field mappings from the command line
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Path to the blueprint graph JSON file (overrides the config)
    #[arg(short, long)]
    blueprint: Option<PathBuf>,

    /// Path to a global data JSON file (overrides the config)
    #[arg(short, long)]
    global_data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every node with its form fields and dependencies
    Graph,
    /// Show the data sources a field can be mapped to
    Sections {
        #[arg(short, long)]
        node: String,
        #[arg(short, long)]
        field: String,
    },
    /// Apply mappings to a node and print the resulting mapping view
    Map {
        #[arg(short, long)]
        node: String,
        /// Mapping in the form `field=<source path>`, e.g. `email=action.category`
        #[arg(short, long = "set", value_parser = parse_assignment)]
        set: Vec<(String, String)>,
        /// Field whose mapping is removed after all `--set` mappings are applied
        #[arg(short, long = "remove")]
        remove: Vec<String>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    if cli.blueprint.is_some() {
        config.blueprint_path = cli.blueprint.clone();
    }
    if cli.global_data.is_some() {
        config.global_data_path = cli.global_data.clone();
    }

    init_tracing(&config.log_filter);

    let session = load_session(&config).await;
    match cli.command {
        Command::Graph => print_graph(&session),
        Command::Sections { node, field } => print_sections(session, &node, &field),
        Command::Map { node, set, remove } => apply_mappings(session, &node, set, remove),
    }
}

fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn load_session(config: &EditorConfig) -> EditorSession {
    let blueprint_path = config.blueprint_path.clone().unwrap_or_else(|| {
        exit_with_error("A blueprint path is required (--blueprint or `blueprint_path` in config).")
    });
    let blueprints = FileBlueprintProvider::new(blueprint_path);

    let start = Instant::now();
    let mut session = EditorSession::new();
    let loaded = match &config.global_data_path {
        Some(path) => {
            session
                .load(&blueprints, &FileGlobalDataProvider::new(path))
                .await
        }
        None => {
            let globals = StaticGlobalDataProvider::new(prefill::provider::sample_global_data())
                .with_delay(config.global_data_delay());
            session.load(&blueprints, &globals).await
        }
    };
    if let Err(e) = loaded {
        exit_with_error(&format!("Failed to load blueprint: {}", e));
    }
    println!("Loaded blueprint in {:?}", start.elapsed());
    session
}

fn print_graph(session: &EditorSession) {
    let state = session.state();
    println!(
        "\n--- Blueprint Graph ({} nodes, {} edges) ---",
        state.nodes.len(),
        state.edges.len()
    );
    for node in &state.nodes {
        let deps = &node.data.dependency_data;
        println!("\n{} [{}]", node.data.label, node.id);
        println!("  Form:       {}", display_or_dash(&node.data.form_id));
        println!("  Fields:     {}", node.data.form_fields.iter().join(", "));
        println!(
            "  Direct:     {}",
            deps.direct_dependencies.iter().map(describe).join(", ")
        );
        println!(
            "  Transitive: {}",
            deps.transitive_dependencies.iter().map(describe).join(", ")
        );
    }
    println!();
}

fn print_sections(mut session: EditorSession, node: &str, field: &str) {
    let picker = session
        .select_field(node, field)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));

    println!("\nData sources for '{}' on node '{}':", field, node);
    for section in &picker.sections {
        let kind = match section.kind() {
            SectionKind::Global => "global",
            SectionKind::Direct => "direct",
            SectionKind::Transitive => "transitive",
        };
        println!("\n  {} ({})", display_or_dash(section.title()), kind);
        if section.options().is_empty() {
            println!("    (no fields)");
        }
        for option in section.options() {
            println!("    {:<28} {}", option.label, option.value);
        }
    }
    println!();
}

fn apply_mappings(
    mut session: EditorSession,
    node: &str,
    set: Vec<(String, String)>,
    remove: Vec<String>,
) {
    for (field, value) in set {
        let picker = session
            .select_field(node, &field)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        let option = picker.find_option(&value).cloned().unwrap_or_else(|| {
            exit_with_error(&format!(
                "'{}' is not a data source available to field '{}'",
                value, field
            ))
        });
        session.pick_option(&option);
    }
    for field in remove {
        session.remove_mapping(node, &field);
    }

    let view = session
        .select_node(node)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    println!(
        "\n--- {} ({} of {} fields mapped) ---",
        view.label,
        view.mapped_count(),
        view.fields.len()
    );
    for row in &view.fields {
        match &row.mapping {
            Some(mapping) => println!("  {:<24} <- {}", row.field, mapping),
            None => println!("  {:<24}    -", row.field),
        }
    }
    println!();
}

fn describe(form: &DependencyForm) -> String {
    format!("{} [{}]", display_or_dash(&form.node_name), form.node_id)
}

fn display_or_dash(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn parse_assignment(raw: &str) -> std::result::Result<(String, String), String> {
    raw.split_once('=')
        .map(|(field, value)| (field.trim().to_string(), value.trim().to_string()))
        .filter(|(field, value)| !field.is_empty() && !value.is_empty())
        .ok_or_else(|| format!("expected `field=source.path`, got '{}'", raw))
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
