use clap::Parser;
use prefill::api::{
    BlueprintGraphDto, EdgeDto, FieldSchemaDto, FormDto, NodeDataDto, NodeDto, SlaDurationDto,
};
use prefill::blueprint::Position;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use serde_json::{Map, json};
use std::fs;

const FIELD_POOL: &[&str] = &[
    "name",
    "email",
    "phone",
    "street",
    "city",
    "zip_code",
    "country",
    "dynamic_checkbox_group",
    "dynamic_object",
    "multi_select",
    "notes",
    "id",
];

/// A CLI tool to generate random action blueprint graphs for the prefill tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_blueprint.json")]
    output: String,

    /// Number of form nodes to generate
    #[arg(short, long, default_value_t = 12)]
    nodes: usize,

    /// Number of distinct forms the nodes are bound to
    #[arg(short, long, default_value_t = 4)]
    forms: usize,

    /// Maximum number of prerequisites per node
    #[arg(long, default_value_t = 3)]
    max_prerequisites: usize,

    /// Probability that a node also depends on a later node, creating a cycle
    #[arg(long, default_value_t = 0.0)]
    cycle_chance: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.forms == 0 {
        eprintln!("Error: --forms must be at least 1");
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.cycle_chance) {
        eprintln!(
            "Error: --cycle-chance ({}) must be between 0 and 1",
            cli.cycle_chance
        );
        std::process::exit(1);
    }

    println!(
        "Generating blueprint ({} nodes, {} forms, up to {} prerequisites each)...",
        cli.nodes, cli.forms, cli.max_prerequisites
    );

    let forms = generate_forms(&mut rng, cli.forms);
    let nodes = generate_nodes(&mut rng, &forms, &cli);
    let edges = nodes
        .iter()
        .flat_map(|node| {
            node.data
                .prerequisites
                .iter()
                .flatten()
                .map(move |source| EdgeDto {
                    source: source.clone(),
                    target: node.id.clone(),
                })
        })
        .collect();

    let blueprint = BlueprintGraphDto {
        id: "bp_generated".to_string(),
        tenant_id: "1".to_string(),
        name: "Generated Blueprint".to_string(),
        description: "Randomly generated blueprint".to_string(),
        category: "Generated".to_string(),
        nodes,
        edges,
        forms,
        ..Default::default()
    };

    let json_output = serde_json::to_string_pretty(&blueprint)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved blueprint to '{}'",
        cli.output
    );

    Ok(())
}

/// Generates forms with a random subset of the field pool.
fn generate_forms(rng: &mut ThreadRng, count: usize) -> Vec<FormDto> {
    (0..count)
        .map(|index| {
            let field_count = rng.random_range(0..=6);
            let mut properties = Map::new();
            for field in FIELD_POOL.choose_multiple(rng, field_count) {
                properties.insert(
                    field.to_string(),
                    json!({ "avantos_type": "short-text", "type": "string" }),
                );
            }
            FormDto {
                id: format!("form-{}", index),
                name: format!("Generated Form {}", index),
                description: String::new(),
                is_reusable: false,
                field_schema: FieldSchemaDto {
                    schema_type: "object".to_string(),
                    required: properties.keys().take(1).cloned().collect(),
                    properties: Some(properties),
                },
                ui_schema: None,
                dynamic_field_config: None,
            }
        })
        .collect()
}

/// Generates nodes whose prerequisites point at earlier nodes, plus an
/// occasional forward reference when cycles are requested.
fn generate_nodes(rng: &mut ThreadRng, forms: &[FormDto], cli: &Cli) -> Vec<NodeDto> {
    let ids: Vec<String> = (0..cli.nodes).map(|i| format!("form-node-{}", i)).collect();
    println!("-> Generated {} node ids.", ids.len());

    ids.iter()
        .enumerate()
        .map(|(index, id)| {
            let wanted = rng.random_range(0..=cli.max_prerequisites.min(index));
            let mut prerequisites: Vec<String> = ids[..index]
                .choose_multiple(rng, wanted)
                .cloned()
                .collect();
            if index + 1 < ids.len() && rng.random_bool(cli.cycle_chance) {
                let later = rng.random_range(index + 1..ids.len());
                prerequisites.push(ids[later].clone());
            }

            let form = &forms[rng.random_range(0..forms.len())];
            NodeDto {
                id: id.clone(),
                node_type: "form".to_string(),
                position: Position {
                    x: (index % 5) as f64 * 300.0,
                    y: (index / 5) as f64 * 200.0,
                },
                data: NodeDataDto {
                    id: format!("bp_c-{}", index),
                    component_key: id.clone(),
                    component_type: "form".to_string(),
                    component_id: form.id.clone(),
                    name: format!("Form {}", index),
                    prerequisites: Some(prerequisites),
                    approval_required: false,
                    sla_duration: Some(SlaDurationDto {
                        number: 0,
                        unit: "minutes".to_string(),
                    }),
                },
            }
        })
        .collect()
}
