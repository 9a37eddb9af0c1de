use log::info;
use rogue_slayer::build_info;
use rogue_slayer::errors::GameError;
use rogue_slayer::game::{Game, RunEnd};
use rogue_slayer::ui::TerminalPresenter;

fn main() -> Result<(), GameError> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Rogue Slayer - Terminal Dungeon-Crawling RPG\n");
                println!("Usage: rogue-slayer [command]\n");
                println!("Commands:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nSet RUST_LOG=debug to trace game decisions on stderr.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown command: {}", other);
                eprintln!("Run 'rogue-slayer --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    info!("starting {}", build_info::version_line());

    let mut game = Game::new(TerminalPresenter::stdio(), rand::thread_rng());
    match game.run() {
        Ok(RunEnd::Victory) => info!("game won"),
        Ok(RunEnd::Quit) => info!("player quit"),
        // Ctrl-D or a closed pipe ends the game quietly.
        Err(GameError::InputClosed) => info!("input closed"),
        Err(err) => return Err(err),
    }
    Ok(())
}
