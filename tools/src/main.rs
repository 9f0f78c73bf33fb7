//! slot-runner: headless driver for the slot-machine core.
//!
//! Usage:
//!   slot-runner --seed 12345 --spins 10000
//!   slot-runner --seed 12345 --bet 2.00 --lines 10 --explain
//!   slot-runner --seed 12345 --data-dir ./data --ipc-mode

use anyhow::Result;
use slot_core::{Cents, SlotCommand, SlotConfig, SlotError, SlotSession};
use std::env;
use std::io::{self, BufRead, Write};

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let seed = parse_arg(&args, "--seed", 42u64);
    let spins = parse_arg(&args, "--spins", 1000u64);
    let lines = parse_arg(&args, "--lines", 0usize);
    let bet = parse_arg(&args, "--bet", 0.0f64);
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let explain = args.iter().any(|a| a == "--explain");
    let data_dir = args
        .windows(2)
        .find(|w| w[0] == "--data-dir")
        .map(|w| w[1].as_str());

    let config = match data_dir {
        Some(dir) => SlotConfig::load(dir)?,
        None => SlotConfig::standard(),
    };
    let mut session = SlotSession::new(config, seed)?;

    if lines > 0 {
        session.set_active_paylines(lines)?;
    }
    if bet > 0.0 {
        let amount = Cents::from_decimal(bet).unwrap_or(Cents::ZERO);
        session.set_total_bet(amount)?;
    }

    if ipc_mode {
        return run_ipc_loop(&mut session);
    }

    println!("Slot runner");
    println!("  seed:      {seed}");
    println!("  spins:     {spins}");
    println!("  data_dir:  {}", data_dir.unwrap_or("(built-in machine)"));
    println!();

    let biggest = run_spins(&mut session, spins)?;
    print_summary(&session, biggest);

    if explain {
        println!();
        println!("=== LAST SPIN ===");
        match session.state().last_result {
            Some(last) => {
                print!("{}", last.grid);
                for line in session.describe_last_result().unwrap_or_default() {
                    println!("  {line}");
                }
            }
            None => println!("  (no spin played)"),
        }
    }
    Ok(())
}

/// Spin until `n` spins are played or credits run out.
/// Returns the biggest single-spin win.
fn run_spins(session: &mut SlotSession, n: u64) -> Result<Cents> {
    let mut biggest = Cents::ZERO;
    for _ in 0..n {
        match session.spin() {
            Ok(outcome) => biggest = biggest.max(outcome.total_win),
            Err(SlotError::InsufficientCredits { credits, total_bet }) => {
                println!("  stopped early: balance {credits} below total bet {total_bet}");
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(biggest)
}

fn run_ipc_loop(session: &mut SlotSession) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }
        if buffer.trim() == "quit" {
            break;
        }

        let command: SlotCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{err_json}")?;
                stdout.flush()?;
                continue;
            }
        };

        let response = match session.apply(command) {
            Ok(outcome) => serde_json::to_value(&outcome)?,
            Err(e) if e.is_rejection() => serde_json::json!({ "error": e.to_string() }),
            Err(e) => return Err(e.into()),
        };
        writeln!(stdout, "{response}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn print_summary(session: &SlotSession, biggest: Cents) {
    let state = session.state();

    println!("=== RUN SUMMARY ===");
    println!("  spins played:   {}", state.spins);
    println!("  active lines:   {}", state.active_paylines);
    println!("  bet per line:   {}", state.bet_per_line);
    println!("  total bet:      {}", state.total_bet);
    println!("  total wagered:  {}", state.total_wagered);
    println!("  total won:      {}", state.total_won);
    println!("  net:            {}", state.net());
    println!("  biggest win:    {biggest}");
    match state.return_to_player {
        Some(rtp) => println!("  RTP:            {:.2}%", rtp * 100.0),
        None => println!("  RTP:            (nothing wagered)"),
    }
    println!("  final credits:  {}", state.credits);
    log::debug!("journal holds {} entries", session.journal().len());
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
