#![doc = include_str!("../README.md")]

use std::{env, fs};
use std::process::ExitCode;

use cpu_time::ProcessTime;
use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use npuzzle::puzzle_nxn::board::Board;
use npuzzle::puzzle_nxn::heuristic::Heuristic;
use npuzzle::solver::Solver;
use npuzzle::stats::SearchAllStats;

fn goal_board(n: usize) -> Board {
    Board::from_row_major(n, (1..(n * n) as u32).chain([0]))
}

/// Scrambles the goal board with `walk_len` random blank slides, never
/// undoing the previous slide. Boards produced this way are always solvable.
fn scrambled(n: usize, walk_len: usize, rng: &mut ChaCha8Rng) -> Board {
    let mut previous: Option<Board> = None;
    let mut current = goal_board(n);
    for _ in 0..walk_len {
        let candidates: Vec<Board> = current.neighbors().into_iter()
            .filter(|b| previous.as_ref() != Some(b))
            .collect();
        let next = candidates.choose(rng)
            .expect("the blank always has a neighbor besides the previous board")
            .clone();
        previous = Some(current);
        current = next;
    }
    current
}

fn solve_file(path: &str) -> ExitCode {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => { eprintln!("cannot read {}: {}", path, err); return ExitCode::FAILURE; }
    };
    let board: Board = match content.parse() {
        Ok(board) => board,
        Err(err) => { eprintln!("cannot parse {}: {}", path, err); return ExitCode::FAILURE; }
    };
    let solver = match Solver::new(&board) {
        Ok(solver) => solver,
        Err(err) => { eprintln!("{}", err); return ExitCode::FAILURE; }
    };
    if !solver.is_solvable() {
        println!("No solution possible");
    } else {
        println!("Minimum number of moves = {}", solver.moves());
        for board in solver.solution().unwrap_or_default() {
            println!("{}", board);
        }
    }
    ExitCode::SUCCESS
}

fn parse_arg(args: &[String], index: usize) -> Option<usize> {
    args.get(index)?.parse().ok()
}

fn run_random(args: &[String]) -> ExitCode {
    let (Some(n), Some(count), Some(walk_len)) =
        (parse_arg(args, 0), parse_arg(args, 1), parse_arg(args, 2))
    else {
        eprintln!("Usage: npuzzle_benchmark random N COUNT WALK [SEED]");
        return ExitCode::FAILURE;
    };
    if n < 2 {
        eprintln!("the board dimension must be at least 2");
        return ExitCode::FAILURE;
    }
    let seed = parse_arg(args, 3).unwrap_or(42) as u64;

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut total = SearchAllStats::default();
    let mut total_moves = 0i64;
    let start = ProcessTime::now();
    for i in 0..count {
        let board = scrambled(n, walk_len, &mut rng);
        let mut stats = SearchAllStats::default();
        let solver = Solver::with_stats(&board, Heuristic::Manhattan, &mut stats)
            .expect("dimension was checked above");
        debug!("scramble {}: {} moves, {} nodes expanded", i, solver.moves(), stats.expanded);
        total_moves += i64::from(solver.moves());
        total += stats;
    }
    let elapsed = start.elapsed();

    println!("{} scrambles of the {}x{} puzzle, walk length {}, seed {}:",
        count, n, n, walk_len, seed);
    println!("  average optimal moves: {:.2}", total_moves as f64 / count as f64);
    println!("  nodes expanded: {} (enqueued: {})", total.expanded, total.enqueued);
    println!("  CPU time: {:.3}s", elapsed.as_secs_f64());
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("random") => run_random(&args[1..]),
        Some(path) if args.len() == 1 => solve_file(path),
        _ => {
            eprintln!("Usage:");
            eprintln!("  npuzzle_benchmark FILE                    solve the puzzle in FILE");
            eprintln!("  npuzzle_benchmark random N COUNT WALK [SEED]");
            ExitCode::FAILURE
        }
    }
}
