mod config;

use clap::Parser;
use gobang_engine::config::{Validate, load_yaml_config, save_yaml_config};
use gobang_engine::logger::init_logger;
use gobang_engine::{
    GameOutcome, GameStatus, GobangSession, SessionRng, calculate_bot_move, log,
};

use crate::config::DemoConfig;

#[derive(Parser, Debug)]
#[command(about = "Self-play harness for the gobang engine")]
struct Args {
    #[arg(long, default_value = config::CONFIG_FILE)]
    config: String,

    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    games: Option<u32>,
}

fn main() -> Result<(), String> {
    init_logger();
    let args = Args::parse();

    let mut demo_config = match load_yaml_config::<DemoConfig>(&args.config)? {
        Some(config) => config,
        None => {
            let defaults = DemoConfig::default();
            save_yaml_config(&args.config, &defaults)?;
            log!("wrote default config to {}", args.config);
            defaults
        }
    };
    if let Some(seed) = args.seed {
        demo_config.seed = Some(seed);
    }
    if let Some(games) = args.games {
        demo_config.games = games;
    }
    demo_config.validate()?;

    let base_seed = demo_config.seed.unwrap_or_else(|| SessionRng::from_random().seed());
    log!(
        "running {} self-play games from base seed {}",
        demo_config.games, base_seed
    );

    let mut won = 0u32;
    let mut lost = 0u32;
    let mut drawn = 0u32;
    for index in 0..demo_config.games {
        let seed = base_seed.wrapping_add(u64::from(index));
        match play_game(index, &demo_config, seed)? {
            GameOutcome::Won => won += 1,
            GameOutcome::Lost => lost += 1,
            GameOutcome::Draw => drawn += 1,
        }
    }
    log!(
        "finished: {} won / {} lost / {} drawn from the scripted seat",
        won, lost, drawn
    );
    Ok(())
}

// Drives the player seat with the same heuristic the bot uses, so every game
// runs to a terminal state without input.
fn play_game(index: u32, demo_config: &DemoConfig, seed: u64) -> Result<GameOutcome, String> {
    let session_id = format!("demo-{}", index);
    let mut session = GobangSession::create(&session_id, demo_config.session_settings(), seed)
        .map_err(|e| e.to_string())?;
    session.reset().map_err(|e| e.to_string())?;

    while session.game_state.status == GameStatus::InProgress {
        let player_color = session.game_state.player_color;
        let Some(scripted) = calculate_bot_move(&session.game_state.board, player_color) else {
            break;
        };
        session
            .submit_move(scripted.position.col, scripted.position.row)
            .map_err(|e| e.to_string())?;
    }

    session
        .outcome()
        .ok_or_else(|| format!("[session:{}] game ended without an outcome", session_id))
}
