// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for exploring the kernels by hand.
//!
//! ```text
//! kernels decode 5 3            # [2, 1, 0]
//! kernels prefix ababaca        # [0, 0, 1, 2, 3, 0, 1]
//! kernels prim --steps          # Prim's search over the sample graph
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use blog_kernels::graph::{sample_graph, Graph, Prim, VertexId};
use blog_kernels::logic::boolean_gates;
use blog_kernels::permutation::{decode, encode, factorial, shuffle};
use blog_kernels::strings::{compute_prefix_table, to_subscript};
use clap::{Parser, Subcommand};
use num_bigint::BigUint;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Parser)]
#[command(
    name = "kernels",
    about = "Permutation ranking, KMP prefix tables and Prim's MST from the blog",
    version
)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print n!
    Factorial { n: usize },

    /// Index of a permutation of 0..n
    Encode {
        #[arg(required = true, num_args = 1..)]
        values: Vec<usize>,
    },

    /// Permutation of 0..n with the given index
    Decode { index: BigUint, n: usize },

    /// Shuffle the given items
    Shuffle {
        /// Seed for a reproducible order
        #[arg(long)]
        seed: Option<u64>,

        items: Vec<String>,
    },

    /// KMP prefix table of a pattern
    Prefix { pattern: String },

    /// Prim's minimum spanning tree
    Prim {
        /// JSON graph `{"vertices": [{"id", "layout"}], "edges": [{"source", "target", "weight"}]}`;
        /// the sample graph if omitted
        #[arg(long)]
        graph: Option<PathBuf>,

        /// Start vertex (default: the first vertex)
        #[arg(long)]
        start: Option<VertexId>,

        /// Print every step of the search
        #[arg(long)]
        steps: bool,
    },

    /// List the sixteen two-input boolean gates
    Gates,

    /// Render n with subscript digits
    Subscript { n: u64 },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let json = cli.json;
    match cli.command {
        Commands::Factorial { n } => {
            let value = factorial(n).to_string();
            emit(json, &value, &value)
        }

        Commands::Encode { values } => {
            let index = encode(&values).map_err(|e| e.to_string())?.to_string();
            emit(json, &index, &index)
        }

        Commands::Decode { index, n } => {
            let permutation = decode(&index, n).map_err(|e| e.to_string())?;
            emit(json, &format!("{:?}", permutation), permutation)
        }

        Commands::Shuffle { seed, items } => {
            let shuffled = match seed {
                Some(seed) => shuffle(&items, &mut StdRng::seed_from_u64(seed)),
                None => shuffle(&items, &mut rand::rng()),
            };
            emit(json, &shuffled.join(" "), shuffled)
        }

        Commands::Prefix { pattern } => {
            let table = compute_prefix_table(&pattern);
            emit(json, &format!("{:?}", table), table)
        }

        Commands::Prim {
            graph,
            start,
            steps,
        } => match graph {
            Some(path) => {
                let text = fs::read_to_string(&path)
                    .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
                let graph: Graph<serde_json::Value> = serde_json::from_str(&text)
                    .map_err(|e| format!("cannot parse {}: {}", path.display(), e))?;
                prim(&graph, start, steps, json)
            }
            None => prim(&sample_graph(), start, steps, json),
        },

        Commands::Gates => {
            let gates = boolean_gates();
            if !json {
                for gate in &gates {
                    let table: String =
                        gate.bits.iter().map(|&b| if b { '1' } else { '0' }).collect();
                    println!(
                        "{:>2}  {}  {:<10} {}",
                        gate.id,
                        table,
                        gate.label,
                        gate.description.unwrap_or("")
                    );
                }
                return Ok(());
            }
            emit(json, "", gates)
        }

        Commands::Subscript { n } => {
            let subscript = to_subscript(n);
            emit(json, &subscript, &subscript)
        }
    }
}

fn prim<L>(
    graph: &Graph<L>,
    start: Option<VertexId>,
    steps: bool,
    json: bool,
) -> Result<(), String> {
    let mut search = Prim::new(graph, start).map_err(|e| e.to_string())?;
    let mut trace = Vec::new();
    while let Some(step) = search.step() {
        if steps && !json {
            let edge = &graph.edges()[step.edge];
            println!(
                "edge {} ({} - {}, weight {}): {}{}",
                step.edge,
                edge.source,
                edge.target,
                edge.weight,
                if step.in_tree { "added" } else { "discarded" },
                if step.discovered.is_empty() {
                    String::new()
                } else {
                    format!(", visits {:?}", step.discovered)
                }
            );
        }
        trace.push(step);
    }
    let mst = search.finish();

    if json {
        let out = if steps {
            serde_json::json!({ "steps": trace, "mst": mst })
        } else {
            serde_json::json!(mst)
        };
        println!("{}", out);
        return Ok(());
    }
    println!("vertices {:?}", mst.vertices);
    println!("edges    {:?}", mst.edges);
    println!("weight   {}", mst.total_weight);
    if !mst.is_spanning(graph) {
        eprintln!("note: graph is disconnected; only the start vertex's component is spanned");
    }
    Ok(())
}

/// Print `text`, or `value` as JSON when `--json` is set.
fn emit<T: Serialize>(json: bool, text: &str, value: T) -> Result<(), String> {
    if json {
        let out = serde_json::to_string(&value).map_err(|e| e.to_string())?;
        println!("{}", out);
    } else {
        println!("{}", text);
    }
    Ok(())
}
