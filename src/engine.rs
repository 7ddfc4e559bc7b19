use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tracing::{debug, info, warn};

use crate::action::Action;
use crate::actuators::DesktopControl;
use crate::event::Event;
use crate::memory::{
    ActivityLog, ConversationHistory, ProfileStore, RuleStore, ShortTermMemory, Speaker,
};
use crate::normalize::normalize;
use crate::personality::{ResponseCategory, ResponseGenerator};
use crate::services::{LlmClient, SearchClient};
use crate::skills::{
    automation::AutomationSkill, brain::BrainSkill, contains_word,
    conversation::ConversationSkill, fun::FunSkill, health::SystemHealthSkill,
    launcher::AppLauncherSkill, learning::LearningSkill, math::MathSkill, media::MediaSkill,
    productivity::ProductivitySkill, protocol::ProtocolSkill, system::SystemSkill,
    vision_query::VisionSkill, web_search::WebSearchSkill, Context, Skill, Tier,
};
use crate::state::{SessionState, StateMachine};
use crate::vision::VisionQuery;

/// Shutdown intent bypasses everything: the user can always terminate the
/// session regardless of conversational state.
const SHUTDOWN_WORDS: &[&str] = &["shutdown", "exit", "offline", "goodbye"];

/// Engine tunables. Defaults are the production values; tests pin window
/// edges by overriding them instead of mocking clocks.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum gap between two presence greetings.
    pub greeting_cooldown: Duration,
    /// How long CHATTING may linger after the last transition.
    pub chat_timeout: Duration,
    /// Focus-mode app switches before a coaching nudge fires.
    pub switch_threshold: i64,
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            greeting_cooldown: Duration::from_secs(20 * 60),
            chat_timeout: Duration::from_secs(60),
            switch_threshold: 3,
            history_capacity: 8,
        }
    }
}

/// External collaborators handed to the engine at construction.
pub struct EngineDeps {
    pub rules: Arc<dyn RuleStore>,
    pub profile: Arc<dyn ProfileStore>,
    pub activity: ActivityLog,
    pub vision: Option<Arc<dyn VisionQuery>>,
    pub desktop: Arc<dyn DesktopControl>,
    pub llm: LlmClient,
    pub search: SearchClient,
}

struct Registration {
    tier: Tier,
    skill: Box<dyn Skill>,
}

struct EngineCore {
    config: EngineConfig,
    state: StateMachine,
    memory: ShortTermMemory,
    history: ConversationHistory,
    personality: ResponseGenerator,
    activity: ActivityLog,
    profile: Arc<dyn ProfileStore>,
    vision: Option<Arc<dyn VisionQuery>>,
    desktop: Arc<dyn DesktopControl>,
    skills: Vec<Registration>,
}

/// The orchestrator: one event in, at most one action out.
///
/// All shared mutable state (session FSM, short-term memory, history,
/// persisted stores) lives behind the engine's own mutex, so at most one
/// `evaluate` runs at a time and capability authors can assume exclusive
/// access for the duration of their `execute`.
pub struct DecisionEngine {
    core: Mutex<EngineCore>,
}

impl DecisionEngine {
    pub fn new(deps: EngineDeps, config: EngineConfig) -> Self {
        let skills: Vec<Registration> = vec![
            // Unambiguous imperatives, never routed through the reasoner.
            reg(Tier::Direct, AppLauncherSkill),
            reg(Tier::Direct, MediaSkill),
            reg(Tier::Direct, SystemHealthSkill),
            // The designated catch-all intelligence (and global fallback).
            reg(Tier::CatchAll, BrainSkill::new(deps.llm, deps.search)),
            // Everything else, in priority order.
            reg(Tier::General, ProtocolSkill),
            reg(
                Tier::General,
                LearningSkill::new(Arc::clone(&deps.rules), Arc::clone(&deps.profile)),
            ),
            reg(Tier::General, AutomationSkill),
            reg(Tier::General, WebSearchSkill),
            reg(Tier::General, ConversationSkill),
            reg(Tier::General, ProductivitySkill),
            reg(Tier::General, VisionSkill),
            reg(Tier::General, MathSkill),
            reg(Tier::General, FunSkill),
            reg(Tier::General, SystemSkill),
        ];

        let history = ConversationHistory::new(config.history_capacity);
        Self {
            core: Mutex::new(EngineCore {
                config,
                state: StateMachine::new(),
                memory: ShortTermMemory::new(),
                history,
                personality: ResponseGenerator::new(),
                activity: deps.activity,
                profile: deps.profile,
                vision: deps.vision,
                desktop: deps.desktop,
                skills,
            }),
        }
    }

    /// Single entry point. Never fails for well-formed input; malformed
    /// payloads are tolerated via default-valued reads.
    pub fn evaluate(&self, event: &Event) -> Option<Action> {
        let mut core = self.core.lock().unwrap_or_else(|e| e.into_inner());
        core.step(event)
    }

    pub fn session_state(&self) -> SessionState {
        let core = self.core.lock().unwrap_or_else(|e| e.into_inner());
        core.state.current()
    }

    pub fn history(&self) -> Vec<(Speaker, String)> {
        let core = self.core.lock().unwrap_or_else(|e| e.into_inner());
        core.history.entries().cloned().collect()
    }
}

fn reg(tier: Tier, skill: impl Skill + 'static) -> Registration {
    Registration { tier, skill: Box::new(skill) }
}

fn epoch_secs() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs_f64()
}

impl EngineCore {
    fn step(&mut self, event: &Event) -> Option<Action> {
        // A chatty mood must not stick forever after engagement ends.
        if self.state.current() == SessionState::Chatting
            && self.state.since_transition() > self.config.chat_timeout
        {
            debug!("chat window expired, returning to idle");
            self.state.transition(SessionState::Idle);
        }

        match event {
            Event::UserPresent => self.on_user_present(),
            Event::UserLeft => {
                self.memory.set("is_user_present", false);
                None
            }
            Event::AppSwitched { app_name, window_title, duration } => {
                self.on_app_switched(app_name, window_title, *duration)
            }
            Event::JarvisSpeaking { .. } => None,
            Event::UserCommand { command } | Event::WakeWordDetected { command } => {
                self.on_command(command)
            }
        }
    }

    fn on_user_present(&mut self) -> Option<Action> {
        let now = epoch_secs();
        self.memory.set("is_user_present", true);
        self.memory.set("last_user_seen", now);

        let last = self.memory.get_f64("last_greeting_time");
        if now - last > self.config.greeting_cooldown.as_secs_f64() {
            self.memory.set("last_greeting_time", now);
            let line = self.personality.get(ResponseCategory::Greeting);
            self.history.add(Speaker::Jarvis, line.clone());
            return Some(Action::speak(line));
        }
        None
    }

    fn on_app_switched(&mut self, app: &str, title: &str, duration: f64) -> Option<Action> {
        self.memory.set("current_app", app);
        self.memory.set("window_title", title);

        let mut nudge = None;
        if self.state.current() == SessionState::FocusMode {
            let count = self.memory.get_i64("switch_count") + 1;
            self.memory.set("switch_count", count);
            if count >= self.config.switch_threshold {
                // Reset on fire so we nag once per burst, not every switch.
                self.memory.set("switch_count", 0);
                let line = self.personality.get(ResponseCategory::CoachSwitch);
                self.history.add(Speaker::Jarvis, line.clone());
                nudge = Some(Action::speak(line));
            }
        }

        if let Err(err) = self.activity.log_activity(app, title, duration) {
            warn!(%err, app, "failed to log activity");
        }
        nudge
    }

    fn on_command(&mut self, raw: &str) -> Option<Action> {
        let raw = raw.trim().to_lowercase();
        if raw.is_empty() {
            // Nothing to route; acknowledge without consulting capabilities.
            self.state.transition(SessionState::Chatting);
            let line = self.personality.get(ResponseCategory::SmallTalk);
            self.history.add(Speaker::Jarvis, line.clone());
            return Some(Action::speak(line));
        }

        let cmd = normalize(&raw);
        if cmd != raw {
            debug!(%raw, %cmd, "repaired transcript");
        }
        self.history.add(Speaker::User, cmd.clone());

        // Tier 1: system overrides. Unconditional, so the user can always
        // shut the assistant down.
        if SHUTDOWN_WORDS.iter().any(|word| contains_word(&cmd, word)) {
            info!("shutdown phrase recognized");
            return Some(Action::log("Exiting").terminating());
        }

        let result = self.resolve(&cmd);

        if let Some(action) = &result {
            if action.is_speech() {
                self.history.add(Speaker::Jarvis, action.text.clone());
            }
        }
        result
    }

    /// Tiers 2-5 of the resolution order. The borrow split hands the
    /// capabilities exclusive access to everything they may touch.
    fn resolve(&mut self, cmd: &str) -> Option<Action> {
        let user_name = self.profile.user_name();
        let EngineCore {
            state, memory, history, personality, activity, vision, desktop, skills, ..
        } = self;

        let mut ctx = Context {
            user_name,
            vision: vision.as_deref(),
            personality,
            db: activity,
            memory,
            history,
            desktop: &**desktop,
            state,
        };

        // Tier 2: direct-action capabilities.
        for entry in skills.iter().filter(|entry| entry.tier == Tier::Direct) {
            if entry.skill.matches(cmd) {
                if let Some(action) = entry.skill.execute(cmd, &mut ctx) {
                    debug!(skill = entry.skill.name(), "direct tier resolved");
                    return Some(action);
                }
            }
        }

        let catch_all = skills.iter().find(|entry| entry.tier == Tier::CatchAll);

        // Tier 3: the catch-all intelligence, when it claims the utterance.
        if let Some(entry) = catch_all {
            if entry.skill.matches(cmd) {
                ctx.state.transition(SessionState::Chatting);
                if let Some(action) = entry.skill.execute(cmd, &mut ctx) {
                    debug!(skill = entry.skill.name(), "catch-all claimed");
                    return Some(action);
                }
            }
        }

        // Tier 4: remaining capabilities in registration order.
        for entry in skills.iter().filter(|entry| entry.tier == Tier::General) {
            if entry.skill.matches(cmd) {
                if let Some(action) = entry.skill.execute(cmd, &mut ctx) {
                    debug!(skill = entry.skill.name(), "general tier resolved");
                    return Some(action);
                }
            }
        }

        // Tier 5: global fallback. The catch-all always answers, so a
        // non-empty command never ends in silence.
        if let Some(entry) = catch_all {
            ctx.state.transition(SessionState::Chatting);
            return entry.skill.execute(cmd, &mut ctx);
        }
        None
    }
}
