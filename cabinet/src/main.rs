mod session_rng;
mod simulated_cabinet;

use clap::Parser;
use engine::config::{CabinetConfig, ConfigLoader, FileContentConfigProvider};
use engine::game::Side;
use engine::hardware::{Clock, SystemClock};
use engine::{TickOutcome, TurnController, log, logger};

use session_rng::SessionRng;
use simulated_cabinet::{SimulatedCabinet, VirtualClock};

const CONFIG_FILE: &str = "ttt_cabinet.yaml";
const MAX_TICKS_PER_ROUND: u32 = 10_000;

#[derive(Parser)]
#[command(name = "ttt_cabinet", about = "Runs the cabinet engine against a simulated board")]
struct Args {
    #[arg(long, default_value = CONFIG_FILE)]
    config: String,

    #[arg(long)]
    use_log_prefix: bool,

    /// Rounds to play before the switch is turned off.
    #[arg(long, default_value_t = 3)]
    rounds: u32,

    #[arg(long)]
    seed: Option<u64>,

    /// Both sides play from the buttons.
    #[arg(long)]
    two_player: bool,

    /// Sleep for real instead of counting simulated time.
    #[arg(long)]
    realtime: bool,

    /// Write the effective configuration back to the config file.
    #[arg(long)]
    write_config: bool,

    #[arg(long)]
    verbose: bool,
}

#[derive(Debug, Default)]
struct SessionTally {
    wins_one: u32,
    wins_two: u32,
    draws: u32,
    matches: u32,
    interrupted: u32,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let prefix = if args.use_log_prefix {
        Some("Cabinet".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    let loader = ConfigLoader::<FileContentConfigProvider, CabinetConfig>::from_yaml_file(&args.config);
    let mut config = loader.load()?;
    if args.two_player {
        config.computer_enabled = false;
    }
    if args.write_config {
        loader.save(&config)?;
        log!("Configuration written to {}", args.config);
    }

    let rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!(
        "Simulating {} rounds (seed {}, computer {})",
        args.rounds,
        rng.seed(),
        if config.computer_enabled { "on" } else { "off" }
    );

    let cabinet = SimulatedCabinet::new(config.channels.clone(), rng);
    let tally = if args.realtime {
        let mut controller = TurnController::new(cabinet, SystemClock, &config);
        play_rounds(&mut controller, args.rounds, args.verbose)?
    } else {
        let mut controller = TurnController::new(cabinet, VirtualClock::default(), &config);
        let tally = play_rounds(&mut controller, args.rounds, args.verbose)?;
        log!(
            "Simulated time: {:.1}s",
            controller.clock().elapsed_ms as f64 / 1000.0
        );
        tally
    };

    log!(
        "Session over: {:?} {} - {:?} {}, {} draws, {} matches, {} interrupted",
        Side::PlayerOne,
        tally.wins_one,
        Side::PlayerTwo,
        tally.wins_two,
        tally.draws,
        tally.matches,
        tally.interrupted
    );

    Ok(())
}

fn play_rounds<TClock: Clock>(
    controller: &mut TurnController<SimulatedCabinet, TClock>,
    rounds: u32,
    verbose: bool,
) -> Result<SessionTally, String> {
    let mut tally = SessionTally::default();
    let mut ticks_this_round = 0;

    while controller.rounds_played() < rounds {
        if controller.match_state().is_computer_turn() {
            controller.io_mut().release();
        } else {
            controller.io_mut().press_random_cell();
        }

        match controller.tick() {
            TickOutcome::Moved { cell, side } => {
                if verbose {
                    log!("{:?} -> {}: {}", side, cell, controller.io().render());
                }
            }
            TickOutcome::RoundWon { line, match_won, .. } => {
                match line.side {
                    Side::PlayerOne => tally.wins_one += 1,
                    Side::PlayerTwo => tally.wins_two += 1,
                }
                if match_won {
                    tally.matches += 1;
                }
                ticks_this_round = 0;
            }
            TickOutcome::Draw { .. } => {
                tally.draws += 1;
                ticks_this_round = 0;
            }
            TickOutcome::Interrupted => tally.interrupted += 1,
            TickOutcome::Idle | TickOutcome::NoMove => {}
        }

        ticks_this_round += 1;
        if ticks_this_round > MAX_TICKS_PER_ROUND {
            return Err(format!(
                "round {} stalled after {} ticks on {}",
                controller.rounds_played() + 1,
                MAX_TICKS_PER_ROUND,
                controller.board()
            ));
        }
    }

    controller.io_mut().set_switch(false);
    controller.tick();
    log!(
        "Switch off after {} rounds, {} bounced presses rejected",
        controller.rounds_played(),
        controller.io().bounces
    );

    Ok(tally)
}
