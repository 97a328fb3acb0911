//! Round Timer - a boxing round timer
//!
//! This is the main entry point for the round-timer application.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

use round_timer::{
    api::create_router,
    config::{Command, Config},
    engine::{Notifier, SoundPlayer, TimerConfig},
    services::{
        check_program_available, CommandSoundPlayer, DesktopNotifier, LogNotifier, TerminalBell,
        NOTIFY_PROGRAM,
    },
    state::AppState,
    tasks::spawn_session,
    utils::{describe_config, render_state, shutdown_signal, Locale},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Initialize tracing with appropriate log level
    tracing_subscriber::fmt()
        .with_env_filter(format!("round_timer={},tower_http=info", config.log_level()))
        .init();

    info!("Starting round-timer v{}", env!("CARGO_PKG_VERSION"));

    let sound = sound_player(&config)?;
    let notifier = notifier(&config).await;

    match &config.command {
        Command::Run { .. } => {
            let timer_config = config.command.timer_config()
                .ok_or_else(|| anyhow::anyhow!("run command without a timer config"))?;
            run_in_terminal(timer_config, sound, notifier, config.locale).await
        }
        Command::Serve { port, host } => {
            let state = Arc::new(AppState::new(*port, host.clone(), sound, notifier, config.locale));
            let addr = config.command.address()
                .ok_or_else(|| anyhow::anyhow!("serve command without an address"))?;
            serve(state, &addr).await
        }
    }
}

fn sound_player(config: &Config) -> anyhow::Result<Arc<dyn SoundPlayer>> {
    match &config.sound_dir {
        Some(dir) => {
            let player = CommandSoundPlayer::from_command_line(&config.sound_command, dir.clone())
                .map_err(anyhow::Error::msg)?;
            info!("Playing sound cues from {}", dir.display());
            Ok(Arc::new(player))
        }
        None => Ok(Arc::new(TerminalBell)),
    }
}

async fn notifier(config: &Config) -> Arc<dyn Notifier> {
    if !config.desktop_notifications {
        return Arc::new(LogNotifier);
    }

    match check_program_available(NOTIFY_PROGRAM).await {
        Ok(()) => Arc::new(DesktopNotifier::new()),
        Err(e) => {
            warn!("{}, falling back to log notifications", e);
            Arc::new(LogNotifier)
        }
    }
}

/// Run one session, printing every snapshot, until it finishes or a signal arrives
async fn run_in_terminal(
    config: TimerConfig,
    sound: Arc<dyn SoundPlayer>,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
) -> anyhow::Result<()> {
    info!("Training: {}", describe_config(&config, locale));

    let mut session = spawn_session(config, sound, notifier, locale)?;
    let mut snapshots = session.subscribe();
    println!("{}", render_state(&snapshots.borrow_and_update(), &config, locale));

    let finished = tokio::select! {
        finished = async {
            while snapshots.changed().await.is_ok() {
                let state = *snapshots.borrow_and_update();
                println!("{}", render_state(&state, &config, locale));
                if state.is_finished() {
                    return true;
                }
            }
            false
        } => finished,
        _ = shutdown_signal() => false,
    };

    session.stop();
    session.join().await;

    if finished {
        info!("Session complete");
    } else {
        info!("Session stopped before the end");
    }
    Ok(())
}

async fn serve(state: Arc<AppState>, addr: &str) -> anyhow::Result<()> {
    let app = create_router(state);
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on http://{}", addr);
    info!("Endpoints:");
    info!("  POST /session      - Start a session (roundCount, roundDurationSeconds, restDurationSeconds)");
    info!("  POST /session/stop - Stop the running session");
    info!("  GET  /status       - Current session snapshot");
    info!("  GET  /health       - Health check");

    // Setup graceful shutdown
    let server = axum::serve(listener, app);

    tokio::select! {
        result = server => {
            if let Err(e) = result {
                tracing::error!("Server error: {}", e);
            }
        }
        _ = shutdown_signal() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
