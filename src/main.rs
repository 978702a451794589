use gemhunters::cli;
use gemhunters::services::game::Game;

fn main() {
    let args = cli::args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);

    let mut game = Game::new(seed);
    if let Err(err) = game.run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
