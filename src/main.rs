use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::Env;
use log::warn;

use topogen::output::{to_dot, to_json};
use topogen::topology::{build_fabric, build_ring, Graph, TierSpec};

/// Topology description generator for network experiments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a multi-tier Clos fabric
    Fabric {
        /// Graph name
        #[arg(long, default_value = "")]
        name: String,

        /// Node tier definition: COUNT[:PREFIX[:LABEL[:LABEL...]]].
        /// COUNT is the number of nodes, PREFIX the node name prefix,
        /// LABELs are annotated to the nodes. Repeat once per tier.
        #[arg(short = 'n', long = "nodes")]
        nodes: Vec<String>,

        /// Print node and edge counts instead of the serialized graph
        #[arg(long)]
        count: bool,

        /// Serialize the graph as JSON instead of DOT
        #[arg(long, conflicts_with = "count")]
        json: bool,
    },

    /// Generate a ring
    Ring {
        /// Graph name
        #[arg(long, default_value = "")]
        name: String,

        /// Print node and edge counts instead of the serialized graph
        #[arg(long)]
        count: bool,

        /// Serialize the graph as JSON instead of DOT
        #[arg(long, conflicts_with = "count")]
        json: bool,

        /// Number of nodes in the ring
        #[arg(allow_negative_numbers = true)]
        n_nodes: i64,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match cli.command {
        Commands::Fabric {
            name,
            nodes,
            count,
            json,
        } => {
            let specs: Vec<TierSpec> = nodes
                .iter()
                .map(|s| s.parse())
                .collect::<Result<_, _>>()
                .wrap_err("malformed tier specification")?;
            emit(build_fabric(&name, &specs), count, json)
        }
        Commands::Ring {
            name,
            count,
            json,
            n_nodes,
        } => emit(build_ring(&name, n_nodes), count, json),
    }
}

/// Print the graph in the requested form, or nothing when no graph was
/// produced (zero tiers, non-positive ring size).
fn emit(graph: Option<Graph>, count: bool, json: bool) -> Result<()> {
    let Some(graph) = graph else {
        warn!("no graph produced; nothing to print");
        return Ok(());
    };

    if count {
        println!("{} {}", graph.node_count(), graph.edge_count());
    } else if json {
        println!("{}", to_json(&graph)?);
    } else {
        print!("{}", to_dot(&graph));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fabric_cli_parsing() {
        let cli = Cli::parse_from([
            "topogen", "fabric", "--name", "clos", "-n", "2:a", "-n", "3:b", "--count",
        ]);

        match cli.command {
            Commands::Fabric {
                name,
                nodes,
                count,
                json,
            } => {
                assert_eq!(name, "clos");
                assert_eq!(nodes, vec!["2:a".to_string(), "3:b".to_string()]);
                assert!(count);
                assert!(!json);
            }
            _ => panic!("expected fabric subcommand"),
        }
    }

    #[test]
    fn test_ring_cli_parsing() {
        let cli = Cli::parse_from(["topogen", "ring", "4"]);

        match cli.command {
            Commands::Ring {
                name,
                count,
                json,
                n_nodes,
            } => {
                assert_eq!(name, "");
                assert!(!count);
                assert!(!json);
                assert_eq!(n_nodes, 4);
            }
            _ => panic!("expected ring subcommand"),
        }
    }

    #[test]
    fn test_ring_accepts_negative_node_count() {
        // Non-positive counts are valid input and must reach the builder,
        // which maps them to the absent-graph result.
        let cli = Cli::parse_from(["topogen", "ring", "-4"]);

        match cli.command {
            Commands::Ring { n_nodes, .. } => assert_eq!(n_nodes, -4),
            _ => panic!("expected ring subcommand"),
        }
    }

    #[test]
    fn test_count_and_json_conflict() {
        let result = Cli::try_parse_from(["topogen", "ring", "--count", "--json", "4"]);
        assert!(result.is_err());
    }
}
