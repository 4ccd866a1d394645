//! Terminal front-end: play against the engine, or hand the keyboard back and
//! forth for a two-player game.
//!
//! Usage:
//!   mailbox_chess                           # White against a depth-3 engine
//!   mailbox_chess --play-as black --difficulty expert
//!   mailbox_chess --pvp
//!   mailbox_chess --depth 1

use std::env;
use std::io::{self, BufRead, Write};

use log::{error, info};

use mailbox_chess::config::{GameConfig, GameMode};
use mailbox_chess::error::GameError;
use mailbox_chess::game_repr::square::to_algebraic;
use mailbox_chess::game_repr::{Color, Square, Type};
use mailbox_chess::session::{GameSession, MoveOutcome, MoveRecord};

const COMMANDS: &str = "Commands: quit, undo, new, moves <square>, log, captured, help";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return;
    }

    let config = GameConfig::from_args(&args);
    info!("starting with {:?}", config);

    println!("=== Mailbox Chess ===");
    let mut session = GameSession::new(config);
    match config.human_color() {
        Some(color) => {
            let engine = session.ai_player();
            println!("You play: {} | Opponent: {} at depth {}", color, engine.name(), engine.depth());
        }
        None => println!("Two players, one keyboard"),
    }
    println!("{}", COMMANDS);
    let mut show_board = true;

    loop {
        if show_board {
            print_position(&session);
        }
        show_board = true;

        if session.is_game_over() {
            let input = prompt("Game over. Type 'new', 'undo' or 'quit'> ");
            match input.trim().to_lowercase().as_str() {
                "" | "quit" | "exit" | "q" => {
                    println!("Goodbye!");
                    return;
                }
                "new" => session.new_game(),
                "undo" => undo_turn(&mut session),
                _ => show_board = false,
            }
            continue;
        }

        if session.ai_to_move() {
            println!("Thinking...");
            match session.play_ai_move() {
                Ok(record) => println!("Engine plays: {}", record),
                Err(e) => {
                    error!("engine could not move: {}", e);
                    return;
                }
            }
            continue;
        }

        let input = prompt(&format!("{} to move> ", session.current_player()));
        let trimmed = input.trim().to_lowercase();
        let mut words = trimmed.split_whitespace();

        match words.next() {
            None => show_board = false,
            Some("quit" | "exit" | "q") => {
                println!("Goodbye!");
                return;
            }
            Some("help") => {
                println!("Enter moves as two squares, e.g. e2e4 or e2 e4 (e7e8n to underpromote)");
                println!("{}", COMMANDS);
                show_board = false;
            }
            Some("undo") => undo_turn(&mut session),
            Some("new") => session.new_game(),
            Some("log") => {
                print_log(&session);
                show_board = false;
            }
            Some("captured") => {
                print_captured(&session);
                show_board = false;
            }
            Some("moves") => {
                match words.next().map(GameSession::square) {
                    Some(Ok(from)) => print_destinations(&session, from),
                    Some(Err(e)) => println!("{}", e),
                    None => println!("Usage: moves <square>, e.g. moves g1"),
                }
                show_board = false;
            }
            Some(_) => match parse_move(&trimmed) {
                Some((from, to, promotion)) => play_human_move(&mut session, from, to, promotion),
                None => {
                    println!("Could not parse '{}'. Type 'help' for the move format.", trimmed);
                    show_board = false;
                }
            },
        }
    }
}

fn print_usage() {
    println!("Usage: mailbox_chess [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --pvp                       Two human players");
    println!("  --play-as <white|black>     Your side against the engine (default: white)");
    println!("  --difficulty <level>        easy, medium, hard or expert (default: hard)");
    println!("  --depth <1-4>               Search depth; overrides --difficulty");
    println!("  -h, --help                  Show this message");
    println!();
    println!("Set RUST_LOG=debug to see search statistics.");
}

fn prompt(msg: &str) -> String {
    print!("{}", msg);
    let _ = io::stdout().flush();
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        // End of input behaves like "quit".
        Ok(0) | Err(_) => "quit".to_string(),
        Ok(_) => line,
    }
}

fn print_position(session: &GameSession) {
    let to_move = session.current_player();
    println!();
    println!("--- Move {} | {} to move ---", session.move_number(), to_move);
    println!("{}", session.position().board);
    println!("{}", session.status().message(to_move));
}

/// "e2e4", "e2 e4", "e7e8q" or "e7 e8 q".
fn parse_move(input: &str) -> Option<(Square, Square, Option<Type>)> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if !compact.is_ascii() || !(4..=5).contains(&compact.len()) {
        return None;
    }

    let from = GameSession::square(&compact[0..2]).ok()?;
    let to = GameSession::square(&compact[2..4]).ok()?;
    let promotion = match compact[4..].chars().next() {
        Some(c) => Some(promotion_piece(c)?),
        None => None,
    };
    Some((from, to, promotion))
}

fn promotion_piece(c: char) -> Option<Type> {
    match c {
        'q' => Some(Type::Queen),
        'r' => Some(Type::Rook),
        'b' => Some(Type::Bishop),
        'n' => Some(Type::Knight),
        _ => None,
    }
}

fn play_human_move(session: &mut GameSession, from: Square, to: Square, promotion: Option<Type>) {
    match session.perform_move(from, to) {
        Ok(MoveOutcome::Completed(record)) => println!("{}", record),
        Ok(MoveOutcome::AwaitingPromotion(at)) => {
            let piece = match promotion {
                Some(piece) => piece,
                None => match ask_promotion(at) {
                    Some(piece) => piece,
                    None => {
                        let _ = session.undo();
                        println!("Promotion cancelled.");
                        return;
                    }
                },
            };
            match session.complete_promotion(piece) {
                Ok(record) => println!("{}", record),
                Err(e) => println!("{}", e),
            }
        }
        Err(GameError::IllegalMove { .. }) => {
            println!(
                "Illegal move. Type 'moves {}' to see where that piece can go.",
                to_algebraic(from)
            );
        }
        Err(e) => println!("{}", e),
    }
}

/// None when the player backs out.
fn ask_promotion(at: Square) -> Option<Type> {
    loop {
        let input = prompt(&format!(
            "Promote on {} to (q)ueen, (r)ook, (b)ishop or (n)ight? ",
            to_algebraic(at)
        ));
        let trimmed = input.trim().to_lowercase();
        if trimmed == "quit" || trimmed == "cancel" || trimmed == "undo" {
            return None;
        }
        match trimmed.chars().next().and_then(promotion_piece) {
            Some(piece) => return Some(piece),
            None => println!("Choose one of q, r, b or n."),
        }
    }
}

/// Against the engine, take back the engine's reply as well so the human is
/// to move again.
fn undo_turn(session: &mut GameSession) {
    if let Err(e) = session.undo() {
        println!("{}", e);
        return;
    }
    let mut plies = 1;
    if session.config().mode == GameMode::PvAI && session.ai_to_move() && session.undo().is_ok() {
        plies += 1;
    }
    println!("Undone {} {}.", plies, if plies == 1 { "ply" } else { "plies" });
}

fn print_destinations(session: &GameSession, from: Square) {
    let dests = session.legal_moves(from);
    if dests.is_empty() {
        println!("No legal moves from {}.", to_algebraic(from));
        return;
    }
    let names: Vec<String> = dests.iter().map(|&sq| to_algebraic(sq)).collect();
    println!("{} -> {}", to_algebraic(from), names.join(" "));
}

fn print_log(session: &GameSession) {
    let pairs = session.move_pairs();
    if pairs.is_empty() {
        println!("No moves yet.");
        return;
    }
    for pair in pairs {
        match pair.black {
            Some(black) => println!("{:>3}. {:<40} {}", pair.number, white_or_dots(pair.white), black),
            None => println!("{:>3}. {}", pair.number, white_or_dots(pair.white)),
        }
    }
}

fn white_or_dots(record: Option<&MoveRecord>) -> String {
    record.map_or_else(|| "...".to_string(), |r| r.to_string())
}

fn print_captured(session: &GameSession) {
    for color in [Color::White, Color::Black] {
        let pieces: String = session.captured(color).iter().map(|p| p.to_char()).collect();
        println!("{} captured: {}", color, if pieces.is_empty() { "-" } else { pieces.as_str() });
    }
}
