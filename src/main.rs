use clap::arg;
use clap::command;
use clap::Command;

use clichess::board::ChessBoard;
use clichess::ui;

fn main() {
    let matches = command!()
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debug logging on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a two-player game in the terminal")
                .arg(
                    arg!(
                        --"p1-color" <COLOR> "Display color for player one"
                    )
                    .default_value("BLACK"),
                )
                .arg(
                    arg!(
                        --"p2-color" <COLOR> "Display color for player two"
                    )
                    .default_value("WHITE"),
                ),
        )
        .get_matches();

    let debug = matches.get_flag("debug");
    tracing_subscriber::fmt()
        .with_max_level(if debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match matches.subcommand() {
        Some(("play", arg_matches)) => {
            let p1_color = arg_matches.get_one::<String>("p1-color").unwrap();
            let p2_color = arg_matches.get_one::<String>("p2-color").unwrap();
            play(p1_color, p2_color);
        }
        None => {
            play("BLACK", "WHITE");
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

fn play(p1_color: &str, p2_color: &str) {
    // Unknown or duplicated colors fall back inside the board constructor.
    ui::run(ChessBoard::new(p1_color, p2_color));
}
