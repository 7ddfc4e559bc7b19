use std::sync::Mutex;

use jarvis::actuators::{DesktopControl, DesktopOp, MediaKey};
use jarvis::memory::{ActivityLog, ConversationHistory, JsonProfileStore, JsonRuleStore, ShortTermMemory};
use jarvis::personality::ResponseGenerator;
use jarvis::skills::{
    automation::AutomationSkill, contains_word, launcher::AppLauncherSkill,
    learning::LearningSkill, math::MathSkill, media::MediaSkill, protocol::ProtocolSkill,
    vision_query::VisionSkill, web_search::WebSearchSkill, Context, Skill,
};
use jarvis::state::{SessionState, StateMachine};
use jarvis::vision::VisionQuery;

#[derive(Default)]
struct RecordingDesktop {
    ops: Mutex<Vec<DesktopOp>>,
}

impl RecordingDesktop {
    fn ops(&self) -> Vec<DesktopOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl DesktopControl for RecordingDesktop {
    fn perform(&self, op: DesktopOp) -> anyhow::Result<()> {
        self.ops.lock().unwrap().push(op);
        Ok(())
    }
}

struct FakeVision {
    objects: Vec<String>,
    held: Option<String>,
    fingers: Option<u32>,
}

impl VisionQuery for FakeVision {
    fn face_count(&self) -> u32 {
        1
    }

    fn detected_objects(&self) -> Vec<String> {
        self.objects.clone()
    }

    fn object_in_hand(&self) -> Option<String> {
        self.held.clone()
    }

    fn emotion(&self) -> Option<String> {
        Some("focused".to_string())
    }

    fn finger_count(&self) -> Option<u32> {
        self.fingers
    }
}

/// Owns everything a [`Context`] borrows, so single-skill tests don't need
/// the whole engine.
struct Fixture {
    db: ActivityLog,
    memory: ShortTermMemory,
    history: ConversationHistory,
    state: StateMachine,
    personality: ResponseGenerator,
    desktop: RecordingDesktop,
}

impl Fixture {
    fn new() -> Self {
        Self {
            db: ActivityLog::open_in_memory().unwrap(),
            memory: ShortTermMemory::new(),
            history: ConversationHistory::new(8),
            state: StateMachine::new(),
            personality: ResponseGenerator::new(),
            desktop: RecordingDesktop::default(),
        }
    }

    fn ctx(&mut self) -> Context<'_> {
        Context {
            user_name: "Sir".to_string(),
            vision: None,
            personality: &self.personality,
            db: &self.db,
            memory: &mut self.memory,
            history: &self.history,
            desktop: &self.desktop,
            state: &mut self.state,
        }
    }
}

#[test]
fn word_matching_never_extends_adjacent_words() {
    assert!(contains_word("please start the music", "start"));
    assert!(!contains_word("please start the music", "art"));
    assert!(!contains_word("restart everything", "start"));
    assert!(contains_word("Open Chrome", "open"));
    assert!(contains_word("open chrome now", "open chrome"));
    assert!(!contains_word("anything", ""));
}

#[test]
fn math_respects_operator_precedence() {
    let mut fx = Fixture::new();
    let action = MathSkill.execute("what is 2 plus 3 times 4", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("14"), "got: {}", action.text);
}

#[test]
fn math_handles_spoken_division() {
    let mut fx = Fixture::new();
    let action = MathSkill.execute("calculate 100 divided by 4", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("25"), "got: {}", action.text);
}

#[test]
fn math_apologizes_for_division_by_zero() {
    let mut fx = Fixture::new();
    let action = MathSkill.execute("what is 10 divided by 0", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("overflow"), "got: {}", action.text);
}

#[test]
fn math_declines_digitless_commands() {
    let mut fx = Fixture::new();
    assert!(MathSkill.execute("calculate my destiny", &mut fx.ctx()).is_none());
}

#[test]
fn launcher_maps_known_apps() {
    let mut fx = Fixture::new();
    let action = AppLauncherSkill.execute("open spotify please", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("spotify"));
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::Launch("spotify".to_string())]);
}

#[test]
fn launcher_opens_spoken_urls() {
    let mut fx = Fixture::new();
    let action = AppLauncherSkill.execute("open github.com", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("webpage"));
    assert_eq!(
        fx.desktop.ops(),
        vec![DesktopOp::OpenUrl("https://github.com".to_string())]
    );
}

#[test]
fn launcher_falls_back_to_a_search_for_unknown_targets() {
    let mut fx = Fixture::new();
    let action = AppLauncherSkill.execute("open flurble", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("not familiar"), "got: {}", action.text);
    match fx.desktop.ops().as_slice() {
        [DesktopOp::OpenUrl(url)] => assert!(url.contains("google.com/search"), "got: {url}"),
        other => panic!("expected one search url, got {other:?}"),
    }
}

#[test]
fn volume_up_presses_the_key_repeatedly() {
    let mut fx = Fixture::new();
    let action = MediaSkill.execute("volume up a bit", &mut fx.ctx()).unwrap();
    assert!(action.is_speech());
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::Media(MediaKey::VolumeUp); 5]);
}

#[test]
fn mute_toggles_once() {
    let mut fx = Fixture::new();
    MediaSkill.execute("mute everything", &mut fx.ctx()).unwrap();
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::Media(MediaKey::MuteToggle)]);
}

#[test]
fn media_only_claims_whole_verbs() {
    assert!(!MediaSkill.matches("display the results"));
    assert!(!MediaSkill.matches("my commute was long"));
    assert!(!MediaSkill.matches("we are playing it safe"));
    assert!(MediaSkill.matches("play some music"));
    assert!(MediaSkill.matches("next track please"));
    assert!(MediaSkill.matches("make it louder"));
}

#[test]
fn lock_command_locks_the_session() {
    let mut fx = Fixture::new();
    let action = AutomationSkill.execute("lock the computer", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("locked"));
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::LockSession]);
}

#[test]
fn hibernate_command_powers_down_via_the_desktop_seam() {
    let mut fx = Fixture::new();
    let action = AutomationSkill.execute("hibernate the system", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("hibernation"), "got: {}", action.text);
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::Hibernate]);
}

#[test]
fn brightness_commands_pick_a_direction() {
    let mut fx = Fixture::new();
    AutomationSkill.execute("turn the brightness up", &mut fx.ctx()).unwrap();
    AutomationSkill.execute("dim the brightness", &mut fx.ctx()).unwrap();
    assert_eq!(
        fx.desktop.ops(),
        vec![DesktopOp::BrightnessUp, DesktopOp::BrightnessDown]
    );
}

#[test]
fn web_search_extracts_the_subject() {
    let mut fx = Fixture::new();
    let action = WebSearchSkill
        .execute("jarvis search for rust programming", &mut fx.ctx())
        .unwrap();
    assert!(action.text.contains("rust programming"), "got: {}", action.text);
    match fx.desktop.ops().as_slice() {
        [DesktopOp::OpenUrl(url)] => assert!(url.starts_with("https://www.google.com/search?q=")),
        other => panic!("expected one search url, got {other:?}"),
    }
}

#[test]
fn web_search_asks_for_a_subject_when_none_is_given() {
    let mut fx = Fixture::new();
    let action = WebSearchSkill.execute("search", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("clearer subject"), "got: {}", action.text);
    assert!(fx.desktop.ops().is_empty());
}

#[test]
fn protocol_zero_clears_the_workspace() {
    let mut fx = Fixture::new();
    let action = ProtocolSkill.execute("protocol zero", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("Protocol Zero"));
    assert_eq!(fx.desktop.ops(), vec![DesktopOp::MinimizeAll]);
}

#[test]
fn deep_work_protocol_enters_focus_mode() {
    let mut fx = Fixture::new();
    ProtocolSkill.execute("protocol deep work", &mut fx.ctx()).unwrap();
    assert_eq!(fx.state.current(), SessionState::FocusMode);
    let ops = fx.desktop.ops();
    assert!(ops.contains(&DesktopOp::Launch("google-chrome".to_string())));
    assert!(ops.iter().any(|op| matches!(op, DesktopOp::Media(MediaKey::VolumeDown))));
}

#[test]
fn unknown_protocols_get_a_teach_me_reply() {
    let mut fx = Fixture::new();
    let action = ProtocolSkill.execute("protocol unicorn", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("teach"), "got: {}", action.text);
    assert!(fx.desktop.ops().is_empty());
}

#[test]
fn vision_reports_the_held_object() {
    let mut fx = Fixture::new();
    let vision = FakeVision {
        objects: vec!["cup".to_string()],
        held: Some("phone".to_string()),
        fingers: None,
    };
    let mut ctx = fx.ctx();
    ctx.vision = Some(&vision);
    let action = VisionSkill.execute("what am i holding", &mut ctx).unwrap();
    assert!(action.text.contains("phone"), "got: {}", action.text);
}

#[test]
fn tactical_sweep_reports_occupants_and_inventory() {
    let mut fx = Fixture::new();
    let vision = FakeVision {
        objects: vec!["laptop".to_string(), "mug".to_string()],
        held: None,
        fingers: None,
    };
    let mut ctx = fx.ctx();
    ctx.vision = Some(&vision);
    let action = VisionSkill.execute("scan the room for threats", &mut ctx).unwrap();
    assert!(action.text.contains("Tactical sweep"), "got: {}", action.text);
    assert!(action.text.contains("laptop, mug"), "got: {}", action.text);
    assert!(action.text.contains("minimal"), "got: {}", action.text);
}

#[test]
fn finger_counting_reads_the_hand() {
    let mut fx = Fixture::new();
    let vision = FakeVision { objects: vec![], held: None, fingers: Some(3) };
    let mut ctx = fx.ctx();
    ctx.vision = Some(&vision);
    let action = VisionSkill.execute("how many fingers am i holding up", &mut ctx).unwrap();
    assert!(action.text.contains("3 fingers"), "got: {}", action.text);
}

#[test]
fn finger_counting_degrades_without_a_hand_in_frame() {
    let mut fx = Fixture::new();
    let vision = FakeVision { objects: vec![], held: None, fingers: None };
    let mut ctx = fx.ctx();
    ctx.vision = Some(&vision);
    let action = VisionSkill.execute("count my fingers", &mut ctx).unwrap();
    assert!(action.text.contains("clear read"), "got: {}", action.text);
}

#[test]
fn vision_degrades_when_no_backend_is_attached() {
    let mut fx = Fixture::new();
    let action = VisionSkill.execute("can you see me", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("offline"), "got: {}", action.text);
}

#[test]
fn name_teaching_rejects_rambling_names() {
    let dir = tempfile::tempdir().unwrap();
    let rules = std::sync::Arc::new(JsonRuleStore::new(dir.path().join("rules.json")));
    let profile = std::sync::Arc::new(JsonProfileStore::new(dir.path().join("profile.json")));
    let skill = LearningSkill::new(rules, profile.clone());

    let mut fx = Fixture::new();
    let action = skill
        .execute("my name is actually quite long indeed", &mut fx.ctx())
        .unwrap();
    assert!(action.text.contains("too complex"), "got: {}", action.text);

    use jarvis::memory::ProfileStore;
    assert_eq!(profile.user_name(), "Sir", "a rejected name must not be persisted");
}

#[test]
fn name_teaching_rejects_an_empty_name() {
    let dir = tempfile::tempdir().unwrap();
    let rules = std::sync::Arc::new(JsonRuleStore::new(dir.path().join("rules.json")));
    let profile = std::sync::Arc::new(JsonProfileStore::new(dir.path().join("profile.json")));
    let skill = LearningSkill::new(rules, profile.clone());

    let mut fx = Fixture::new();
    let action = skill.execute("my name is", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("catch the name"), "got: {}", action.text);

    use jarvis::memory::ProfileStore;
    assert_eq!(profile.user_name(), "Sir", "an empty name must not be persisted");
}

#[test]
fn name_teaching_capitalizes_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    let rules = std::sync::Arc::new(JsonRuleStore::new(dir.path().join("rules.json")));
    let profile = std::sync::Arc::new(JsonProfileStore::new(dir.path().join("profile.json")));
    let skill = LearningSkill::new(rules, profile.clone());

    let mut fx = Fixture::new();
    let action = skill.execute("my name is tony", &mut fx.ctx()).unwrap();
    assert!(action.text.contains("Tony"), "got: {}", action.text);

    use jarvis::memory::ProfileStore;
    assert_eq!(profile.user_name(), "Tony");
}
