use std::path::PathBuf;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use tracing::warn;

use super::{Context, Skill};
use crate::action::Action;
use crate::actuators::DesktopOp;

const APP_MAP: &[(&str, &str)] = &[
    ("browser", "google-chrome"),
    ("chrome", "google-chrome"),
    ("firefox", "firefox"),
    ("spotify", "spotify"),
    ("visual studio code", "code"),
    ("code", "code"),
    ("terminal", "x-terminal-emulator"),
    ("calculator", "gnome-calculator"),
    ("discord", "discord"),
    ("vlc", "vlc"),
    ("files", "nautilus"),
];

/// Application, folder, and URL launching. A direct-action capability:
/// resolved before the reasoner ever sees the utterance.
pub struct AppLauncherSkill;

impl AppLauncherSkill {
    fn folder_map() -> Vec<(&'static str, Option<PathBuf>)> {
        vec![
            ("downloads", dirs::download_dir()),
            ("documents", dirs::document_dir()),
            ("desktop", dirs::desktop_dir()),
            ("pictures", dirs::picture_dir()),
        ]
    }
}

impl Skill for AppLauncherSkill {
    fn name(&self) -> &'static str {
        "AppLauncher"
    }

    fn description(&self) -> &'static str {
        "Launches applications, web pages, and common folders."
    }

    fn keywords(&self) -> &[&str] {
        &["open", "launch", "start", "run", "browse"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();

        // Bare URL spoken in the command
        if command.contains(".com") || command.contains(".org") || command.contains("website") {
            for word in command.split_whitespace() {
                if word.contains('.') && word.len() > 4 {
                    let url = if word.starts_with("http") {
                        word.to_string()
                    } else {
                        format!("https://{word}")
                    };
                    if let Err(err) = ctx.desktop.perform(DesktopOp::OpenUrl(url)) {
                        warn!(%err, "failed to open url");
                    }
                    return Some(Action::speak(format!("Opening the requested webpage, {name}.")));
                }
            }
        }

        for (folder, path) in Self::folder_map() {
            if command.contains(folder) {
                if let Some(path) = path {
                    if let Err(err) = ctx.desktop.perform(DesktopOp::OpenPath(path)) {
                        warn!(%err, folder, "failed to open folder");
                    }
                    return Some(Action::speak(format!("Opening your {folder} folder, {name}.")));
                }
            }
        }

        for (app, cmdline) in APP_MAP {
            if command.contains(app) {
                return match ctx.desktop.perform(DesktopOp::Launch(cmdline.to_string())) {
                    Ok(()) => Some(Action::speak(format!("Initializing {app}, {name}."))),
                    Err(err) => {
                        warn!(%err, app, "launch failed");
                        Some(Action::speak(format!(
                            "I encountered an error trying to initialize {app}, {name}."
                        )))
                    }
                };
            }
        }

        // Unknown target: degrade to a web search rather than a dead end.
        if command.contains("open") {
            let query = command.replace("open", "");
            let query = query.trim();
            if query.len() > 2 {
                let encoded = utf8_percent_encode(query, NON_ALPHANUMERIC);
                let url = format!("https://www.google.com/search?q={encoded}");
                if let Err(err) = ctx.desktop.perform(DesktopOp::OpenUrl(url)) {
                    warn!(%err, "failed to open fallback search");
                }
                return Some(Action::speak(format!(
                    "I'm not familiar with that specific application, {name}. \
                     Opening a search for '{query}' instead."
                )));
            }
        }

        None
    }
}
