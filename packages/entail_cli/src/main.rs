use std::error::Error;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use entail::{
    explanation::Explanation,
    propositional_logic::{
        model_check::{counterexample, model_check, Strategy},
        parser::parse_sentence,
        truth_table::TruthTable,
        types::{Conjunction, Sentence},
    },
};
use log::info;

mod demo;

#[derive(Debug, Parser)]
#[command(about = "Decides propositional entailment by model checking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Check the rain / hagrid / dumbledore knowledge base.
    Demo(Output),
    /// Check whether the given knowledge entails a query.
    Check {
        /// A knowledge base sentence; repeated sentences are conjoined.
        #[arg(short, long = "knowledge", required = true)]
        knowledge: Vec<String>,
        /// The query sentence.
        #[arg(short, long)]
        query: String,
        #[arg(short, long, default_value_t = Strategy::Sequential)]
        strategy: Strategy,
        #[command(flatten)]
        output: Output,
    },
}

#[derive(Debug, Args)]
struct Output {
    /// Print every model visited during the check.
    #[arg(long)]
    explain: bool,
    /// Print the truth table of knowledge and query.
    #[arg(long)]
    table: bool,
    /// Print the structure of the knowledge base.
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Demo(output) => {
            let (knowledge, query) = demo::knowledge_base()?;
            report(&knowledge, &query, Strategy::Sequential, &output)
        }
        Command::Check {
            knowledge,
            query,
            strategy,
            output,
        } => {
            let mut sentences = knowledge
                .iter()
                .map(|sentence| parse_sentence(sentence))
                .collect::<Result<Vec<_>, _>>()?;

            let knowledge = match sentences.len() {
                1 => sentences.remove(0),
                _ => Conjunction::new(sentences)?.into(),
            };
            let query = parse_sentence(&query)?;

            report(&knowledge, &query, strategy, &output)
        }
    }
}

fn report(
    knowledge: &Sentence,
    query: &Sentence,
    strategy: Strategy,
    output: &Output,
) -> Result<(), Box<dyn Error>> {
    println!("Knowledge: {}", knowledge.to_string().blue());
    println!("Query:     {}", query.to_string().blue());

    if output.tree {
        println!("\n{}", knowledge.get_tree());
    }

    info!("Checking entailment with the {strategy} strategy");

    let entailed = if output.explain {
        let mut explanation = Explanation::new("Model checking");
        let entailed = model_check(knowledge, query, &mut explanation)?;

        println!("\n{explanation}");

        entailed
    } else {
        strategy.entails(knowledge, query)?
    };

    if output.table {
        println!("\n{}", TruthTable::for_entailment(knowledge, query)?);
    }

    if entailed {
        println!("\n{} {}", "Entailed:".green(), query);
    } else {
        println!("\n{} {}", "Not entailed:".red(), query);

        if let Some(model) = counterexample(knowledge, query)? {
            println!("Counterexample: {}", model.to_string().yellow());
        }
    }

    Ok(())
}
