use anyhow::Result;
use indicatif::{HumanDuration, ProgressBar, ProgressStyle};

use std::io::{stdin, stdout, Stdin, Write};
use std::time::Instant;

use connect_four::{board::Player, search::Engine};

mod game;
use game::*;

fn main() -> Result<()> {
    let stdin = stdin();

    println!("Welcome to Connect 4\n");
    println!("You are player 1 (red), the AI is player 2 (yellow).\n");

    loop {
        let mut game = Game::new();
        let mut engine = Engine::new();

        // game loop
        loop {
            game.display()?;

            match game.state {
                GameState::Playing => {
                    // human player
                    if game.board().turn() == Player::Player1 {
                        print!("Player 1's turn, move input > ");
                        stdout().flush()?;
                        let mut input_str = String::new();
                        if stdin.read_line(&mut input_str)? == 0 {
                            return Ok(());
                        }

                        let column = match input_str.trim().parse::<usize>() {
                            Err(_) => {
                                println!("Invalid number: {}", input_str.trim());
                                continue;
                            }
                            Ok(column) => column,
                        };
                        if let Err(err) = game.play_checked(column) {
                            println!("{}", err);
                            // try the move again
                            continue;
                        }

                    // AI player
                    } else {
                        let spinner = ProgressBar::new_spinner();
                        spinner.set_style(ProgressStyle::default_spinner().template("{spinner} {msg}"));
                        spinner.set_message("AI is thinking...");
                        spinner.enable_steady_tick(100);

                        engine.node_count = 0;
                        let start = Instant::now();
                        let column = game.play_ai(&mut engine)?;
                        spinner.finish_and_clear();

                        let scores: Vec<String> = engine
                            .scores()
                            .iter()
                            .map(|score| match score {
                                Some(score) => score.to_string(),
                                None => "-".to_string(),
                            })
                            .collect();
                        println!("Column scores: [{}]", scores.join(", "));
                        println!(
                            "AI played column {} after searching {} positions in {}",
                            column + 1,
                            engine.node_count,
                            HumanDuration(start.elapsed())
                        );
                    }
                }

                // end states
                GameState::PlayerOneWin => {
                    println!("Player 1 wins!");
                    break;
                }
                GameState::PlayerTwoWin => {
                    println!("AI wins!");
                    break;
                }
                GameState::Draw => {
                    println!("It's a draw!");
                    break;
                }
            }
        }

        if !ask(&stdin, "Play again? y/n: ")? {
            break;
        }
    }
    Ok(())
}

/// Repeats a yes/no question until it gets an answer, treating end of input as no
fn ask(stdin: &Stdin, question: &str) -> Result<bool> {
    loop {
        let mut buffer = String::new();
        print!("{}", question);
        stdout().flush()?;
        if stdin.read_line(&mut buffer)? == 0 {
            return Ok(false);
        }

        match buffer.to_lowercase().chars().next() {
            Some('y') => return Ok(true),
            Some('n') => return Ok(false),
            _ => println!("Unknown answer given"),
        }
    }
}
