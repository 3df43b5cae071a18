mod game;
mod term;

use std::fs::File;

use clap::Parser;
use log::{error, info};
use simplelog::WriteLogger;

use toroid_snake::GameError;
use toroid_snake::config::Config;

fn main() -> Result<(), GameError> {
    let config = Config::parse();
    config.validate()?;

    // The terminal is taken over by the game, so logs go to a file
    WriteLogger::init(config.log_level, simplelog::Config::default(), File::create(&config.log_file)?)?;
    info!("Starting with {:?}", config);

    let mut game = game::SnakeGame::new(config)?;
    game.initialize()?;

    let res = game.run();
    if let Err(e) = &res {
        error!("Game aborted: {}", e);
    }

    game.shutdown()?;
    res
}
