use clap::{Parser, Subcommand};
use lpform_catalog::{Catalog, ExampleProblem, ExpectedOutcome, Method};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lpform")]
#[command(about = "Browse and check the example problems of the LP method pages")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the examples, one per line
    List {
        /// Only list one method (simplex, granm, dosfases)
        #[arg(short, long)]
        method: Option<Method>,
    },
    /// Print one example
    Show {
        /// The method the example belongs to
        method: Method,
        /// Zero-based position of the example
        index: usize,
        /// Output format (json, pretty)
        #[arg(short, long, default_value = "pretty")]
        format: String,
    },
    /// Print the catalog as JSON
    Export {
        /// Only export one method
        #[arg(short, long)]
        method: Option<Method>,
    },
    /// Parse every example and check its expected solution
    Check {
        /// Check a JSON catalog instead of the built-in one
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List { method } => {
            let catalog = Catalog::builtin();
            for (m, index, example) in catalog.iter() {
                if method.is_some_and(|only| only != m) {
                    continue;
                }
                println!("{:10} {:2}  {:40} {}", m.id(), index, example.name, example.description);
            }
        }
        Commands::Show { method, index, format } => {
            let catalog = Catalog::builtin();
            let Some(example) = catalog.get(method, index) else {
                eprintln!("No example {} for {}", index, method);
                std::process::exit(1);
            };

            if format == "json" {
                match serde_json::to_string_pretty(example) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Error: {}", e);
                        std::process::exit(1);
                    }
                }
            } else {
                print_example(method, example);
            }
        }
        Commands::Export { method } => {
            let builtin = Catalog::builtin();
            let catalog = match method {
                Some(m) => Catalog::new().with_examples(m, builtin.examples(m).to_vec()),
                None => builtin,
            };
            match catalog.to_json() {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Commands::Check { catalog } => {
            let catalog = match catalog {
                Some(path) => {
                    let source = match std::fs::read_to_string(&path) {
                        Ok(s) => s,
                        Err(e) => {
                            eprintln!("Error reading file: {}", e);
                            std::process::exit(1);
                        }
                    };
                    match Catalog::from_json(&source) {
                        Ok(c) => c,
                        Err(e) => {
                            eprintln!("Invalid catalog: {}", e);
                            std::process::exit(1);
                        }
                    }
                }
                None => Catalog::builtin(),
            };

            let mut failures = 0;
            for (method, index, example) in catalog.iter() {
                match check_example(example) {
                    Ok(()) => log::debug!("{}[{}] ok", method, index),
                    Err(message) => {
                        eprintln!("{}[{}] {}: {}", method.id(), index, example.name, message);
                        failures += 1;
                    }
                }
            }

            if failures > 0 {
                eprintln!("{} of {} examples failed", failures, catalog.len());
                std::process::exit(1);
            }
            println!("✓ {} examples OK", catalog.len());
        }
    }
}

fn check_example(example: &ExampleProblem) -> Result<(), String> {
    let input = example.to_input().map_err(|e| e.to_string())?;
    if let Some(solution) = example.expected_solution() {
        if solution.variables.len() != input.num_variables() {
            return Err(format!(
                "expected solution has {} variables, problem has {}",
                solution.variables.len(),
                input.num_variables()
            ));
        }
    }
    Ok(())
}

fn print_example(method: Method, example: &ExampleProblem) {
    println!("{} ({})", example.name, method.display_name());
    println!("{}", example.description);
    println!();
    println!("Objective: {}", if example.minimize { "minimize" } else { "maximize" });
    println!("c: {}", example.c);
    println!("A:");
    for row in example.a.lines() {
        println!("  {}", row);
    }
    println!("b: {}", example.b);
    if let Some(ref eq) = example.eq_constraints {
        println!("Equality rows: {}", eq);
    }
    if let Some(ref ge) = example.ge_constraints {
        println!(">= rows: {}", ge);
    }
    if let Some(m) = example.penalty {
        println!("M: {}", m);
    }
    println!();

    match &example.expected {
        Some(ExpectedOutcome::Optimal(solution)) => {
            println!("Expected: Z = {}", solution.objective);
            for (label, value) in solution.labeled_variables() {
                println!("  {:4} = {}", label, value);
            }
        }
        Some(ExpectedOutcome::Infeasible) => println!("Expected: infeasible"),
        Some(ExpectedOutcome::Unbounded) => println!("Expected: unbounded"),
        None => println!("Expected: not recorded"),
    }
}
