//! Core type aliases, tuning constants, and runtime utilities for the
//! heuristic poker bot.
//!
//! Every other crate in the workspace depends on this one, so it stays free
//! of domain logic. Runtime helpers (logging, interrupt handling) sit behind
//! the `server` feature.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bets, and pot amounts as reported by the game server.
pub type Chips = i64;
/// Normalized hand strength, pot odds, and random draws in `[0, 1]`.
pub type Probability = f32;

// ============================================================================
// PRE-FLOP HEURISTIC
// Static strengths keyed by hole-card ranks and suitedness.
// ============================================================================
/// Pocket pair of tens or better.
pub const PREFLOP_HIGH_PAIR: Probability = 0.9;
/// Pocket sevens through nines.
pub const PREFLOP_MID_PAIR: Probability = 0.7;
/// Any lower pocket pair.
pub const PREFLOP_LOW_PAIR: Probability = 0.6;
/// Queen-high or better with a jack or better kicker.
pub const PREFLOP_BROADWAY: Probability = 0.75;
/// Queen-high or better, suited.
pub const PREFLOP_HIGH_SUITED: Probability = 0.65;
/// Queen-high or better, offsuit.
pub const PREFLOP_HIGH_OFFSUIT: Probability = 0.55;
/// Ten-nine or better below queen-high: T9, J9, JT.
pub const PREFLOP_MIDDLING: Probability = 0.5;
/// Everything else.
pub const PREFLOP_TRASH: Probability = 0.3;
/// Strength assigned when hole cards are unknown.
pub const UNKNOWN_STRENGTH: Probability = 0.0;

// ============================================================================
// DECISION BANDS
// Strict lower bounds, checked from strongest to weakest.
// ============================================================================
/// Above this: escalate as hard as legally possible.
pub const BAND_MONSTER: Probability = 0.9;
/// Above this: pot-sized pressure.
pub const BAND_STRONG: Probability = 0.8;
/// Above this: mix half-pot raises with calls.
pub const BAND_GOOD: Probability = 0.6;
/// Above this: call when the price is right.
pub const BAND_MARGINAL: Probability = 0.4;
/// Draws at or below this keep the good band passive.
pub const PASSIVE_FREQUENCY: Probability = 0.3;
/// Required edge over pot odds before calling a marginal hand.
pub const POT_ODDS_MARGIN: Probability = 0.1;

// ============================================================================
// BET SIZING
// ============================================================================
/// Pot fraction of the small raise, as a divisor of the pot.
pub const HALF_POT_DIVISOR: Chips = 2;

// ============================================================================
// SERVER DEFAULTS
// ============================================================================
/// Address the HTTP server binds to unless configured otherwise.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
/// Number of actix workers unless configured otherwise.
pub const DEFAULT_WORKERS: usize = 4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
/// Requests are stateless, so there is nothing to drain.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, exiting immediately");
            std::process::exit(0);
        }
    });
}
