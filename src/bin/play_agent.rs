use clap::Parser;
use maze_agents::budget::DEFAULT_BUDGET;
use maze_agents::config::{DEFAULT_DEPTH_COEFFICIENT, DEFAULT_DEPTH_CUTOFF};
use maze_agents::engine::{MazeEngine, MazeState};
use maze_agents::heuristics::EvaluatorKind;
use maze_agents::runner::{play_game, Outcome};
use maze_agents::utils::layout_from_str_array;
use maze_agents::{build_agent, AgentConfig, AgentKind, BfsFallback};
use std::fs;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Plays one maze game with the chosen agent",
    long_about = None
)]
struct Args {
    /// Strategy that picks the moves
    #[clap(short, long, value_enum, default_value_t = AgentKind::Astar)]
    agent: AgentKind,

    /// Path to a layout file (up to 10 rows of '%', '.', '-', 'G' and one 'P')
    #[clap(short, long)]
    layout: Option<PathBuf>,

    /// Seed for a random layout, used when no layout file is given
    #[clap(short, long, default_value_t = 514514)]
    seed: u32,

    /// Successor generations allowed per decision
    #[clap(short, long, default_value_t = DEFAULT_BUDGET)]
    budget: u64,

    /// Game ends after this many moves
    #[clap(long, default_value_t = 200)]
    max_turns: usize,

    /// Deepest node the DFS agent expands
    #[clap(long, default_value_t = DEFAULT_DEPTH_CUTOFF)]
    depth_cutoff: u32,

    /// Weight of path length in the A* cost
    #[clap(long, default_value_t = DEFAULT_DEPTH_COEFFICIENT)]
    depth_coefficient: f64,

    /// Nodes the BFS agent scores when it runs out of budget
    #[clap(long, value_enum, default_value_t = BfsFallback::LastLevel)]
    bfs_fallback: BfsFallback,

    /// State evaluation used by every agent except random
    #[clap(short, long, value_enum, default_value_t = EvaluatorKind::Score)]
    evaluator: EvaluatorKind,

    /// Seed for the agent's tie-breaks; random when omitted
    #[clap(long)]
    agent_seed: Option<u64>,

    /// Only print the final result
    #[clap(short, long)]
    quiet: bool,
}

fn read_layout_file(path: &PathBuf) -> Result<MazeState, String> {
    let content = fs::read_to_string(path).map_err(|e| format!("Failed to read file: {}", e))?;

    let lines: Vec<&str> = content
        .lines()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();

    layout_from_str_array(&lines).map_err(|e| format!("Invalid layout: {}", e))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let initial = match &args.layout {
        Some(path) => match read_layout_file(path) {
            Ok(state) => {
                println!("Loaded layout from {}\n", path.display());
                state
            }
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            println!("Random layout (seed {})\n", args.seed);
            MazeState::new_random_with_seed(args.seed)
        }
    };

    let config = AgentConfig {
        depth_cutoff: args.depth_cutoff,
        depth_coefficient: args.depth_coefficient,
        bfs_fallback: args.bfs_fallback,
        seed: args.agent_seed,
    };
    let mut engine = MazeEngine::new(args.budget);
    let mut agent = build_agent::<MazeEngine, _>(args.agent, &config, args.evaluator);

    println!("Initial state:\n{}", initial);
    println!(
        "Playing with {} (budget {} per move, at most {} moves)...\n",
        agent.name(),
        engine.budget().limit(),
        args.max_turns
    );

    let quiet = args.quiet;
    let result = play_game(
        &mut engine,
        initial,
        agent.as_mut(),
        args.max_turns,
        |state, action| {
            if !quiet {
                println!("Step {}, Score {}\n{}", state.steps(), state.score(), state);
                println!("Move: {}\n", action);
            }
        },
    );

    let record = match result {
        Ok(record) => record,
        Err(e) => {
            eprintln!("Agent failed: {}", e);
            process::exit(1);
        }
    };

    let verdict = match record.outcome {
        Outcome::Won => "won",
        Outcome::Lost => "lost",
        Outcome::Stuck => "stuck",
        Outcome::TurnLimit => "turn limit reached",
    };
    println!("\nResult: {}", verdict);
    println!("Moves: {}", record.turns());
    println!("Final score: {}", record.final_state.score());
    println!("Food left: {}\n", record.final_state.food_left());
    println!("Final state:\n{}", record.final_state);
}
