mod comprehend;
mod engine;
mod errors;
mod runner;

use anyhow::Context;
use flexi_logger::{Logger, LogSpecBuilder};
use log::{debug, error, info, trace, warn};

use comprehend::detection;
use engine::config::Config;
use runner::{Runner, RunnerEvent};

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("loading config")?;
    let log_init_result = Logger::with(
        LogSpecBuilder::new()
            .default(config.log_level)
            .build())
        .start();

    if let Err(err) = log_init_result {
        println!("ERROR initializing logger: {}", err);
    }

    for file in &config.game_files {
        match detection::match_file(&file.filename, &file.md5) {
            Some(game) => info!("{} is {} ({})", file.filename, game.description, game.game_id),
            None => warn!("{} does not match any known Comprehend game", file.filename),
        }
    }

    let runner = Runner::new(&config);

    for event in runner.events().iter() {
        match event {
            RunnerEvent::Frame { frame, camera } => trace!("frame {} camera x {}", frame, camera.x),
            RunnerEvent::OpcodeDone { op, name } => debug!("done {:#X} {}", op, name),
            RunnerEvent::Failed { op, message } => error!("special opcode {:#X} failed: {}", op, message),
        }
    }

    let snapshot = runner.wait().context("running special opcode script")?;
    println!("{}", serde_yaml::to_string(&snapshot)?);

    info!("Engine shutdown.");
    Ok(())
}
