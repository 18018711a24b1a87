//! Galactic Battle terminal client.
//!
//! Draws two random cards from the API and scores whichever has the higher
//! stat. Runs interactively by default:
//!
//!   galactic-battle --endpoint http://localhost:4000/graphql
//!
//! or plays a fixed number of rounds and exits:
//!
//!   galactic-battle --category starships --rounds 5

use anyhow::{Context, Result};
use clap::Parser;
use galactic_game::display::{render_scoreboard, render_table};
use galactic_game::{GameEngine, GameError, GraphqlClient};
use galactic_model::Category;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "galactic-battle")]
#[command(about = "Compare space heroes and starships")]
struct Args {
    /// GraphQL endpoint of the Galactic Battle server
    #[arg(short, long, env = "GALACTIC_ENDPOINT", default_value = "http://localhost:4000/graphql")]
    endpoint: String,

    /// Category to draw from (people or starships)
    #[arg(short, long, default_value = "people")]
    category: Category,

    /// Play this many rounds without prompting, then exit
    #[arg(short, long)]
    rounds: Option<u32>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

const HELP: &str = "commands: draw | category <people|starships> | reset | score | help | quit";

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::WARN };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .compact()
        .init();

    let client = GraphqlClient::new(args.endpoint);
    let mut engine = GameEngine::new(client);
    engine.select_category(args.category)?;

    println!("\n========================================");
    println!("  Galactic Battle");
    println!("========================================");
    println!("  Endpoint: {}", engine.source().endpoint());
    println!("  Category: {}", engine.state().selected_category());
    println!("  Retries:  {}", engine.config().max_retries);
    println!("========================================\n");

    match args.rounds {
        Some(rounds) => play_rounds(&mut engine, rounds).await,
        None => play_interactive(&mut engine).await,
    }
}

async fn play_rounds(engine: &mut GameEngine<GraphqlClient>, rounds: u32) -> Result<()> {
    for round in 1..=rounds {
        println!("--- Round {round} ---");
        draw_and_show(engine).await;
    }
    println!("{}", render_scoreboard(engine.state()));
    Ok(())
}

async fn play_interactive(engine: &mut GameEngine<GraphqlClient>) -> Result<()> {
    println!("{HELP}");
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        let mut words = line.split_whitespace();
        match words.next() {
            Some("draw" | "d" | "play") => draw_and_show(engine).await,
            Some("category" | "c") => match words.next().map(str::parse::<Category>) {
                Some(Ok(category)) => {
                    engine.select_category(category)?;
                    println!("Next draw: {category}");
                }
                Some(Err(err)) => println!("{err}"),
                None => println!("Current category: {}", engine.state().selected_category()),
            },
            Some("reset" | "r") => {
                engine.reset()?;
                println!("{}", render_scoreboard(engine.state()));
            }
            Some("score" | "s") => println!("{}", render_scoreboard(engine.state())),
            Some("quit" | "q" | "exit") => break,
            Some("help" | "h") | None => println!("{HELP}"),
            Some(other) => println!("unknown command: {other}\n{HELP}"),
        }
    }
    Ok(())
}

async fn draw_and_show(engine: &mut GameEngine<GraphqlClient>) {
    match engine.draw().await {
        Ok(report) if report.is_duplicate() => {
            println!("(both sides drew {})", report.left.name());
        }
        Ok(_) => {}
        Err(GameError::DrawInProgress) => println!("A draw is already in progress"),
        Err(err) => tracing::debug!("Draw error: {}", err),
    }
    println!("{}", render_table(engine.state()));
}
