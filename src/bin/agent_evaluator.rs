use clap::Parser;
use maze_agents::budget::DEFAULT_BUDGET;
use maze_agents::engine::{MazeEngine, MazeState};
use maze_agents::heuristics::EvaluatorKind;
use maze_agents::runner::{play_game, Outcome};
use maze_agents::{build_agent, AgentConfig, AgentKind};
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Compares every agent on a batch of seeded random mazes",
    long_about = None
)]
struct Args {
    /// Number of random mazes to play
    #[clap(short, long, default_value_t = 20)]
    mazes: u32,

    /// Seed of the first maze; the rest follow consecutively
    #[clap(short, long, default_value_t = 0)]
    start_seed: u32,

    /// Successor generations allowed per decision
    #[clap(short, long, default_value_t = DEFAULT_BUDGET)]
    budget: u64,

    /// Game ends after this many moves
    #[clap(long, default_value_t = 200)]
    max_turns: usize,

    #[clap(short, long, value_enum, default_value_t = EvaluatorKind::Score)]
    evaluator: EvaluatorKind,
}

#[derive(Default)]
struct Tally {
    scores: Vec<i32>,
    wins: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let mut tallies: HashMap<AgentKind, Tally> = HashMap::new();

    println!("Starting agent evaluation on {} mazes...", args.mazes);

    for maze_idx in 0..args.mazes {
        let seed = args.start_seed.wrapping_add(maze_idx);
        let initial = MazeState::new_random_with_seed(seed);

        println!("\nEvaluating maze {} (Seed: {})", maze_idx, seed);

        for kind in AgentKind::ALL {
            let config = AgentConfig::default().with_seed(u64::from(seed));
            let mut engine = MazeEngine::new(args.budget);
            let mut agent = build_agent::<MazeEngine, _>(kind, &config, args.evaluator);

            let result = play_game(
                &mut engine,
                initial.clone(),
                agent.as_mut(),
                args.max_turns,
                |_, _| {},
            );
            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    eprintln!(
                        "Warning: {} failed on maze {} (Seed: {}): {}",
                        agent.name(),
                        maze_idx,
                        seed,
                        e
                    );
                    continue;
                }
            };

            let score = record.final_state.score();
            println!(
                "  Agent: {:<8}, Score: {:<6}, Moves: {:<4}, Outcome: {:?}",
                agent.name(),
                score,
                record.turns(),
                record.outcome
            );
            let tally = tallies.entry(kind).or_default();
            tally.scores.push(score);
            if record.outcome == Outcome::Won {
                tally.wins += 1;
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of mazes evaluated: {}", args.mazes);
    println!("\n--- Average Scores ---");

    let mut sorted_avg_scores: Vec<(AgentKind, f64, f64)> = Vec::new();

    for (kind, tally) in &tallies {
        if tally.scores.is_empty() {
            println!("Agent {:?}: No scores recorded.", kind);
            continue;
        }
        let total_score: i64 = tally.scores.iter().map(|&s| i64::from(s)).sum();
        let avg_score = total_score as f64 / tally.scores.len() as f64;
        let win_rate = tally.wins as f64 / tally.scores.len() as f64;
        sorted_avg_scores.push((*kind, avg_score, win_rate));
    }

    // Sort by average score descending
    sorted_avg_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    for (kind, avg_score, win_rate) in sorted_avg_scores {
        println!(
            "Agent {:<8}: Average Score = {:>8.2}, Win Rate = {:>5.1}%",
            format!("{:?}", kind),
            avg_score,
            win_rate * 100.0
        );
    }
}
