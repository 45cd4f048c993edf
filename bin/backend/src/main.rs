//! Heuristic Poker Decision Server
//!
//! Serves `/health` and `/get_action` on BIND_ADDR (default 0.0.0.0:5000),
//! or answers a single JSON game state from the command line.

use clap::Parser;
use clap::Subcommand;
use hpb_core::*;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, env = "BIND_ADDR", default_value = DEFAULT_BIND_ADDR)]
    bind: String,
    #[arg(long, env = "WORKERS", default_value_t = DEFAULT_WORKERS)]
    workers: usize,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Serve decisions over HTTP (default)")]
    Serve,
    #[command(about = "Decide one JSON game state and print the response")]
    Decide {
        #[arg(required = true)]
        payload: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            hpb_core::log();
            hpb_core::kys();
            let config = hpb_server::Config {
                bind: args.bind,
                workers: args.workers,
            };
            Ok(hpb_server::run(config).await?)
        }
        Command::Decide { payload } => {
            let agent = hpb_agent::Agent::default();
            let body = serde_json::from_str::<hpb_dto::ActionRequest>(&payload)
                .map_err(anyhow::Error::from)
                .and_then(|req| hpb_server::respond(&agent, &req, &mut rand::rng()));
            match body {
                Ok(body) => println!("{}", serde_json::to_string(&body)?),
                Err(e) => {
                    println!("{}", serde_json::to_string(&hpb_dto::ErrorResponse::new(&e))?);
                    std::process::exit(1);
                }
            }
            Ok(())
        }
    }
}
