use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use waypoint_core::spawn_groups;
use waypoint_sim::{run, Console, Settings};

fn main() -> Result<()> {
    let settings = Settings::parse();

    // Initialize logging
    if settings.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    let config = settings.to_config().context("Invalid settings")?;

    log::info!("Waypoint simulation starting...");
    log::info!(
        "Plane: {}x{}, step: {}, entities per group: {}",
        config.width,
        config.height,
        config.step,
        config.entity_count
    );

    let mut rng = match settings.seed {
        Some(seed) => {
            log::info!("Using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let (mut legal, mut physical) = spawn_groups(&config, &mut rng);

    let console = Console::stdout(settings.format);
    let summary =
        run(&mut legal, &mut physical, &config, &console).context("Simulation failed")?;

    log::info!("Finished after {} steps", summary.total_steps());

    Ok(())
}
