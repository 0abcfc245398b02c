use clap::Parser;
use gridfall_engine::{Game, PieceSeed};
use rand::Rng as _;

use crate::{app::GameApp, tui::Runtime};

mod app;
mod tui;
mod widgets;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the piece sequence (32 hex characters); random if omitted
    #[clap(long)]
    seed: Option<PieceSeed>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| rand::rng().random());

    let mut app = GameApp::new(Game::with_seed(seed));
    Runtime::new().run(&mut app)?;

    let stats = app.game().stats();
    println!(
        "score: {}  lines: {}  pieces: {}",
        stats.score(),
        stats.cleared_lines(),
        stats.locked_pieces(),
    );
    println!("seed: {seed} (pass --seed to replay)");
    Ok(())
}
