mod ui;

use std::{path::PathBuf, sync::Arc, time::Duration};

use clap::{Parser, Subcommand};
use egui::Vec2;
use log::{error, info};

use trailmate::journey::load_journeys_jsonl;
use trailmate::playback::FrameClock;
use trailmate::trail::checkpoint_index;
use trailmate::{JourneyStore, PlaybackSpeed, RecapSession, TickSource, TrailmateError};
use ui::recap::{RecapApp, config::ViewerConfig};

const DEFAULT_FRAME_MS: u64 = 16;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the journey recap viewer
    View {
        /// Journeys file (JSON lines), defaults to the bundled sample journeys
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        journey: Option<String>,

        /// Playback speed: 0.5, 1, 2 or 4
        #[arg(short, long)]
        speed: Option<f64>,
    },
    /// List the available journeys
    List {
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Play a journey back without a window, printing where everyone is
    Simulate {
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short, long)]
        journey: Option<String>,

        #[arg(short, long, default_value_t = 1.)]
        speed: f64,

        #[arg(short, long, default_value_t = DEFAULT_FRAME_MS)]
        frame_ms: u64,
    },
}

fn load_store(input: Option<&PathBuf>) -> Result<Arc<JourneyStore>, TrailmateError> {
    let store = match input {
        Some(path) => load_journeys_jsonl(path)?,
        None => JourneyStore::builtin(),
    };
    Ok(Arc::new(store))
}

fn parse_speed(speed: f64) -> Result<PlaybackSpeed, TrailmateError> {
    PlaybackSpeed::from_multiplier(speed).ok_or_else(|| TrailmateError::InvalidUserInput {
        field: "speed".to_string(),
        reason: format!("{} is not one of 0.5, 1, 2 or 4", speed),
    })
}

fn view(
    input: Option<&PathBuf>,
    journey: Option<&str>,
    speed: Option<f64>,
) -> Result<(), TrailmateError> {
    let store = load_store(input)?;
    let app_config = match ViewerConfig::from_local_file() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            error!("Could not read config file, using defaults: {}", e);
            ViewerConfig::default()
        }
    };
    let speed = match speed {
        Some(speed) => parse_speed(speed)?,
        None => app_config.default_speed,
    };

    let requested = journey.or(app_config.default_journey.as_deref());
    let mut session = RecapSession::new(store, requested);
    session.set_speed(speed);

    let mut native_options = eframe::NativeOptions::default();
    native_options.viewport = native_options.viewport.with_inner_size(Vec2::new(
        app_config.window_size.width,
        app_config.window_size.height,
    ));

    eframe::run_native(
        "Trailmate",
        native_options,
        Box::new(|cc| Ok(Box::new(RecapApp::new(session, app_config, cc)))),
    )
    .expect("could not start app");
    Ok(())
}

fn list(input: Option<&PathBuf>) -> Result<(), TrailmateError> {
    let store = load_store(input)?;
    for journey in store.list_journeys() {
        println!(
            "{}\t{}\t{}\t{} checkpoints\t{} participants",
            journey.id,
            journey.name,
            journey.date,
            journey.checkpoints.len(),
            journey.participants.len()
        );
    }
    Ok(())
}

fn simulate(
    input: Option<&PathBuf>,
    journey: Option<&str>,
    speed: f64,
    frame_ms: u64,
) -> Result<(), TrailmateError> {
    if frame_ms == 0 {
        return Err(TrailmateError::InvalidUserInput {
            field: "frame_ms".to_string(),
            reason: "must be greater than zero".to_string(),
        });
    }
    let mut session = RecapSession::new(load_store(input)?, journey);
    session.set_speed(parse_speed(speed)?);

    let Some(selected) = session.journey().cloned() else {
        return Err(TrailmateError::JourneyNotFound {
            id: journey.unwrap_or_default().to_string(),
        });
    };
    if !session.controls_enabled() {
        return Err(TrailmateError::InvalidJourney { id: selected.id });
    }
    info!("Replaying {} at {}", selected.name, session.speed().label());

    let mut clock = FrameClock::new(Duration::from_millis(frame_ms));
    session.play();
    session.drive(&clock);

    let mut last_index = None;
    loop {
        let progress = session.state().progress();
        let index = checkpoint_index(progress, selected.checkpoints.len());
        if last_index != Some(index) {
            for marker in session.markers()? {
                println!(
                    "{:>3.0}%\t{} {}\t{}\t{:.4}, {:.4}",
                    progress * 100.,
                    marker.participant.avatar,
                    marker.participant.name,
                    marker.checkpoint.name,
                    marker.position.latitude,
                    marker.position.longitude
                );
            }
            last_index = Some(index);
        }
        if !session.state().is_playing() {
            break;
        }
        clock.next_frame();
        session.drive(&clock);
    }
    info!(
        "Playback finished after {} frames ({:?} of simulated time)",
        clock.frames(),
        clock.now()
    );
    Ok(())
}

fn main() {
    #[cfg(debug_assertions)]
    colog::init();

    let cli = Args::parse();
    ctrlc::set_handler(move || {
        println!("Exiting...");
        std::process::exit(0);
    })
    .expect("Could not set Ctrl-C handler");

    let result = match &cli.command {
        Commands::View {
            input,
            journey,
            speed,
        } => view(input.as_ref(), journey.as_deref(), *speed),
        Commands::List { input } => list(input.as_ref()),
        Commands::Simulate {
            input,
            journey,
            speed,
            frame_ms,
        } => simulate(input.as_ref(), journey.as_deref(), *speed, *frame_ms),
    };
    if let Err(e) = result {
        error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_speed() {
        assert_eq!(parse_speed(0.5).unwrap(), PlaybackSpeed::Half);
        assert!(matches!(
            parse_speed(3.),
            Err(TrailmateError::InvalidUserInput { .. })
        ));
    }

    #[test]
    fn test_simulate_builtin_journey() {
        assert!(simulate(None, Some("2"), 4., 50).is_ok());
    }

    #[test]
    fn test_simulate_rejects_zero_frame() {
        assert!(simulate(None, None, 1., 0).is_err());
    }

    #[test]
    fn test_cli_parses_subcommands() {
        let args = Args::parse_from(["trailmate", "simulate", "--journey", "3", "--speed", "2"]);
        match args.command {
            Commands::Simulate {
                journey, speed, ..
            } => {
                assert_eq!(journey.as_deref(), Some("3"));
                assert_eq!(speed, 2.);
            }
            other => panic!("Expected simulate, got {:?}", other),
        }
    }
}
