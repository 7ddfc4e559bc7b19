use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{info, warn};

use jarvis::actuators::{DesktopControl, DesktopOp, ShellDesktop};
use jarvis::config::Config;
use jarvis::memory::{ActivityLog, JsonProfileStore, JsonRuleStore};
use jarvis::services::{LlmClient, SearchClient};
use jarvis::{Action, ActionKind, DecisionEngine, EngineConfig, EngineDeps, Event, EventBus, EventKind};

/// One resolved action, tagged with the event kind that produced it so LOG
/// actions land in the store under the right label.
struct Dispatch {
    origin: EventKind,
    action: Action,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    info!("Jarvis core booting...");

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };

    let activity = match ActivityLog::open(&config.db_path) {
        Ok(log) => log,
        Err(err) => {
            warn!(%err, "activity store unavailable, falling back to memory");
            ActivityLog::open_in_memory()?
        }
    };
    let desktop: Arc<dyn DesktopControl> = Arc::new(ShellDesktop::new());

    let deps = EngineDeps {
        rules: Arc::new(JsonRuleStore::new(&config.rules_path)),
        profile: Arc::new(JsonProfileStore::new(&config.profile_path)),
        activity: activity.clone(),
        vision: None,
        desktop: Arc::clone(&desktop),
        llm: LlmClient::new(&config.llm.base_url, &config.llm.model, config.llm_timeout()),
        search: SearchClient::new(config.search_timeout()),
    };
    let engine = Arc::new(DecisionEngine::new(deps, EngineConfig::default()));

    let bus = Arc::new(EventBus::new());
    let (tx, mut rx) = mpsc::channel::<Dispatch>(64);

    // Every sensor event flows through the engine; resolved actions go to
    // the actuator loop below.
    for kind in [
        EventKind::UserPresent,
        EventKind::UserLeft,
        EventKind::AppSwitched,
        EventKind::WakeWordDetected,
        EventKind::UserCommand,
    ] {
        let engine = Arc::clone(&engine);
        let tx = tx.clone();
        bus.subscribe(kind, move |event| {
            if let Some(action) = engine.evaluate(event) {
                tx.try_send(Dispatch { origin: event.kind(), action })
                    .map_err(|_| anyhow::anyhow!("dispatch queue full or closed"))?;
            }
            Ok(())
        });
    }

    // Terminal sensor: each line stands in for a transcribed utterance.
    {
        let bus = Arc::clone(&bus);
        std::thread::spawn(move || {
            let stdin = std::io::stdin();
            for line in stdin.lock().lines() {
                match line {
                    Ok(text) if !text.trim().is_empty() => {
                        bus.publish(&Event::command(text.trim()));
                    }
                    Ok(_) => {}
                    Err(_) => break,
                }
            }
        });
    }

    // Booting counts as presence.
    bus.publish(&Event::UserPresent);
    info!("Jarvis active. Type a command, or Ctrl+C to stop.");

    let mut voice: Option<tokio::process::Child> = None;
    loop {
        tokio::select! {
            maybe = rx.recv() => {
                let Some(Dispatch { origin, action }) = maybe else { break };
                let terminate = action.terminate;

                match action.kind {
                    ActionKind::Speak => {
                        bus.publish(&Event::JarvisSpeaking { text: action.text.clone() });
                        println!("Jarvis: {}", action.text);
                        speak(&config.voice_command, &action.text, &mut voice);
                    }
                    ActionKind::Execute => {
                        if let Err(err) = desktop.perform(DesktopOp::Launch(action.text.clone())) {
                            warn!(%err, "automation action failed");
                        }
                    }
                    ActionKind::Log => {
                        if let Err(err) = activity.log_event(origin.as_str(), &action.text) {
                            warn!(%err, "failed to record event");
                        }
                    }
                }

                if terminate {
                    let farewell = "Goodbye! Shutting down systems.";
                    println!("Jarvis: {farewell}");
                    speak(&config.voice_command, farewell, &mut voice);
                    if let Some(mut child) = voice.take() {
                        let _ = child.wait().await;
                    }
                    break;
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("interrupt received, shutting down");
                break;
            }
        }
    }

    Ok(())
}

/// Spawn the voice process for an utterance, cutting off whatever it was
/// still saying.
fn speak(voice_command: &str, text: &str, current: &mut Option<tokio::process::Child>) {
    if let Some(mut previous) = current.take() {
        let _ = previous.start_kill();
    }
    match tokio::process::Command::new(voice_command)
        .arg(text)
        .kill_on_drop(true)
        .spawn()
    {
        Ok(child) => *current = Some(child),
        Err(err) => warn!(%err, "failed to spawn voice process"),
    }
}
