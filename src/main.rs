use anyhow::Result;
use clap::{Parser, ValueEnum};
use snake_dqn::game::GameConfig;
use snake_dqn::modes::{TrainConfig, TrainMode};
use snake_dqn::rl::{default_device, TrainingBackend};

#[derive(Parser)]
#[command(name = "snake_dqn")]
#[command(version, about = "Snake game with a DQN agent trained via Q-learning")]
struct Cli {
    /// Execution mode
    #[arg(long, default_value = "train")]
    mode: Mode,

    /// Number of episodes to train
    #[arg(long, default_value = "1000")]
    episodes: usize,

    /// Grid width in cells
    #[arg(long, default_value = "16")]
    width: usize,

    /// Grid height in cells
    #[arg(long, default_value = "14")]
    height: usize,

    /// Log progress every N episodes
    #[arg(long, default_value = "10")]
    log_frequency: usize,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Train the DQN agent
    Train,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.mode {
        Mode::Train => {
            let mut config = TrainConfig::new(cli.episodes);
            config.game_config = GameConfig::new(cli.width, cli.height);
            config.log_frequency = cli.log_frequency;

            let device = default_device();
            let mut train_mode = TrainMode::<TrainingBackend>::new(config, device);
            train_mode.run()?;
        }
    }

    Ok(())
}
