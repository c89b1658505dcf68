//! Command-line probe for `taskboard_core`.
//!
//! # Responsibility
//! - Wire config, logging, board store and coin client for local checks.
//! - Keep output deterministic apart from live coin data.

use clap::{Parser, Subcommand};
use log::info;
use std::cell::Cell;
use std::error::Error;
use std::process::ExitCode;
use std::rc::Rc;
use taskboard_core::{
    init_logging, month_name, AppConfig, BoardColumns, BoardService, BoardStore, CoinClient,
    CoinQueries, CoinScreen, MoveRequest, Route, UserScreen, MONTHS,
};

#[derive(Debug, Parser)]
#[command(name = "taskboard", version, about = "Task board core probe")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print core linkage info.
    Ping,
    /// Add tasks to the first board, optionally move one, and render.
    Board {
        /// Task texts, appended in order.
        #[arg(short, long = "task")]
        tasks: Vec<String>,
        /// Move as `source_board:index:destination_board:index`.
        #[arg(short, long = "move")]
        moves: Vec<String>,
    },
    /// Print the month-name table.
    Months,
    /// Resolve a path to its screen.
    Route { path: String },
    /// Show the user screen for an id.
    User {
        user_id: String,
        #[arg(long)]
        followers: bool,
    },
    /// Fetch and show the coin detail screen.
    Coin {
        coin_id: String,
        /// Name passed from the list screen.
        #[arg(long)]
        name: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> Result<(), Box<dyn Error>> {
    let config = AppConfig::from_env()?;
    if let Some(log_dir) = &config.log_dir {
        init_logging(config.log_level, log_dir)?;
    }

    match command {
        Command::Ping => {
            println!("taskboard_core ping={}", taskboard_core::ping());
            println!("taskboard_core version={}", taskboard_core::core_version());
        }
        Command::Board { tasks, moves } => run_board(&config, &tasks, &moves)?,
        Command::Months => {
            for index in 0..MONTHS.len() {
                println!("{index:>2} {}", month_name(index).unwrap_or("?"));
            }
        }
        Command::Route { path } => {
            let route = Route::parse(&path)?;
            println!("{route:?} -> {}", route.path());
        }
        Command::User { user_id, followers } => {
            let screen = UserScreen::load(&user_id, followers)?;
            println!("{}", screen.headline());
            if let Some(name) = screen.followers_context() {
                println!("followers of {name}");
            } else {
                println!("-> {}", screen.followers_link());
            }
        }
        Command::Coin { coin_id, name } => run_coin(&config, &coin_id, name).await?,
    }
    Ok(())
}

fn run_board(config: &AppConfig, tasks: &[String], moves: &[String]) -> Result<(), Box<dyn Error>> {
    let mut store = BoardStore::with_board_ids(config.board_ids.iter().cloned())?;
    let renders = Rc::new(Cell::new(0_usize));
    let counter = Rc::clone(&renders);
    store.subscribe(move |_| counter.set(counter.get() + 1));

    let mut service = BoardService::new(store);
    let first_board = config.board_ids.first().cloned().unwrap_or_default();
    for text in tasks {
        service.submit_task(&first_board, text)?;
    }
    for raw in moves {
        let request = parse_move(raw)?;
        service.drop_task(&request)?;
    }

    print!("{}", BoardColumns::from_snapshot(&service.snapshot()));
    info!(
        "event=cli_board module=cli status=ok renders={} total={}",
        renders.get(),
        service.snapshot().task_count()
    );
    Ok(())
}

async fn run_coin(
    config: &AppConfig,
    coin_id: &str,
    name: Option<String>,
) -> Result<(), Box<dyn Error>> {
    let client = CoinClient::new(&config.coin_api)?;
    let queries = CoinQueries::new(client, config.coin_api.stale_after);
    let screen = CoinScreen::new(coin_id, None, name).load(&queries).await;

    println!("{}", screen.title());
    if let Some(message) = screen.error() {
        println!("error: {message}");
    }
    for item in screen.overview().into_iter().flatten() {
        println!("{} {}", item.label, item.value);
    }
    if let Some(description) = screen.description() {
        println!("{description}");
    }
    for item in screen.price_overview().into_iter().flatten() {
        println!("{} {}", item.label, item.value);
    }
    Ok(())
}

/// Parses `source_board:index:destination_board:index`; `-` marks no drop target.
fn parse_move(raw: &str) -> Result<MoveRequest, String> {
    let parts: Vec<&str> = raw.split(':').collect();
    let parse_index = |value: &str| {
        value
            .parse::<usize>()
            .map_err(|_| format!("invalid index `{value}` in move `{raw}`"))
    };
    match parts.as_slice() {
        [source, source_index, "-"] | [source, source_index, "-", "-"] => Ok(
            MoveRequest::from_source(*source, parse_index(source_index)?),
        ),
        [source, source_index, destination, destination_index] => Ok(MoveRequest::between(
            *source,
            parse_index(source_index)?,
            *destination,
            parse_index(destination_index)?,
        )),
        _ => Err(format!(
            "move `{raw}` must look like source:index:destination:index"
        )),
    }
}
