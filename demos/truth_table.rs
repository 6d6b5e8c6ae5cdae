use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use truth_table_rs::analysis::analyze;
use truth_table_rs::annotate::Annotated;
use truth_table_rs::dot::DotConfig;

#[derive(Parser)]
#[command(author, version, about = "Truth tables and parse trees for propositional formulas")]
struct Cli {
    /// Formula over p, q, r, s, t using ¬ ∧ ∨ → ↔ and parentheses
    expression: String,

    /// Write the annotated parse tree in DOT format to this file
    #[arg(long, value_name = "FILE")]
    dot: Option<PathBuf>,

    /// Show node values in DOT labels
    #[arg(long)]
    dot_values: bool,

    /// Do not print the truth table
    #[arg(long)]
    no_table: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn print_tree(node: &Annotated, prefix: &str, last: bool, root: bool) {
    let value = match node.value() {
        Some(true) => "1",
        Some(false) => "0",
        None => "?",
    };
    if root {
        println!("{} = {}", node.label(), value);
    } else {
        let branch = if last { "└── " } else { "├── " };
        println!("{}{}{} = {}", prefix, branch, node.label(), value);
    }

    let child_prefix = if root {
        String::new()
    } else if last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };
    let n = node.children().len();
    for (i, child) in node.children().iter().enumerate() {
        print_tree(child, &child_prefix, i + 1 == n, false);
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    simplelog::TermLogger::init(
        cli.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let analysis = analyze(&cli.expression);

    match &analysis.table {
        Ok(table) => {
            if !cli.no_table {
                println!("{}", table);
            } else {
                println!("Result: {}", table.verdict());
            }
        }
        Err(e) => {
            println!("{}", e);
            return Ok(());
        }
    }

    match &analysis.tree {
        Some(Ok(tree)) => {
            println!();
            println!("Parse tree of {} (all variables true):", tree.expr);
            print_tree(&tree.annotated, "", true, true);

            if let Some(path) = &cli.dot {
                let config = DotConfig {
                    show_values: cli.dot_values,
                    ..DotConfig::default()
                };
                let dot = tree.annotated.to_dot_with_config(&config)?;
                std::fs::write(path, dot)?;
                log::info!("Parse tree written to {:?}", path);
            }
        }
        Some(Err(e)) => {
            log::warn!("Cannot build the parse tree: {}", e);
        }
        None => {}
    }

    Ok(())
}
