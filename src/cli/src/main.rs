use clap::Parser;
use color_eyre::eyre::eyre;
use itertools::Itertools;
use log::debug;
use owo_colors::OwoColorize;
use swaptree_core::{
    enumerate_unique_permutations, execute_permutation, num_unique_pairs, num_unique_permutations,
};

/// Counts and enumerates the unique permutations reachable by fixed-length
/// transposition sequences
#[derive(Parser)]
#[command(version, about)]
enum Commands {
    /// Print the number of unique permutations of N elements at every level
    Count {
        /// How many elements are being permuted
        n: usize,
    },
    /// Enumerate the unique sequences at one level and apply each to 0..N
    Enumerate {
        /// How many elements are being permuted
        n: usize,
        /// How many transpositions compose each sequence
        level: usize,
    },
}

fn main() -> color_eyre::Result<()> {
    pretty_env_logger::init();

    match Commands::parse() {
        Commands::Count { n } => count(n),
        Commands::Enumerate { n, level } => enumerate(n, level),
    }
}

fn count(n: usize) -> color_eyre::Result<()> {
    if n == 0 {
        return Err(eyre!("There is nothing to permute; N must be at least 1"));
    }

    println!(
        "{} unique index pairs over {n} elements",
        num_unique_pairs(n)
    );

    let mut total = 0;
    for level in 0..n {
        let at_level = num_unique_permutations(n, level);
        total += at_level;
        println!("L{level} : {at_level}");
    }

    // The levels together cover every rearrangement of n elements once
    println!("{} permutations in total", total.bold());

    Ok(())
}

fn enumerate(n: usize, level: usize) -> color_eyre::Result<()> {
    if n == 0 {
        return Err(eyre!("There is nothing to permute; N must be at least 1"));
    }

    let sequences = enumerate_unique_permutations(n, level);
    debug!("rendering {} sequences", sequences.len());

    println!(
        "{} unique permutations of {n} elements at level {level}",
        sequences.len().bold()
    );

    let reference = (0..n).collect_vec();
    for sequence in &sequences {
        let permuted = execute_permutation(sequence, &reference)?;
        println!(
            "{} = [{}]",
            sequence.iter().join(" "),
            permuted.iter().join(", ")
        );
    }

    Ok(())
}
