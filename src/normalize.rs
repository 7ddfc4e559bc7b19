use std::sync::LazyLock;

/// Misheard-phrase repairs, grown from observed transcription errors.
/// Seed data, not a contract -- entries come and go as the upstream
/// recognizer misbehaves in new ways.
const CORRECTIONS: &[(&str, &str)] = &[
    ("canada", "can you"),
    ("kenya", "can you"),
    ("horrendous", "focus"),
    ("obvious", "jarvis"),
    ("service", "jarvis"),
    ("hell is our", "hello jarvis"),
    ("over us", "jarvis"),
    ("jobless", "jarvis"),
    ("charvis", "jarvis"),
    ("travis", "jarvis"),
    ("harvest", "jarvis"),
    ("jarvijarvis", "jarvis"),
    ("see you", "see"),
    ("look at", "look"),
    ("who are", "who"),
    ("time is it", "time"),
    ("what time", "time"),
    ("shut down", "shutdown"),
    ("go to sleep", "shutdown"),
    ("lock in", "focus"),
    ("focus mode", "focus"),
    ("system hill", "system health"),
    ("search torture", "search for"),
    ("search voucher", "search for"),
    ("search warrant", "search for"),
    ("how are u", "how are you"),
    ("who you again", "who are you again"),
];

/// Patterns ordered longest first so a short pattern never pre-empts a
/// longer, more specific one ("search torture" before "search").
static ORDERED: LazyLock<Vec<(&str, &str)>> = LazyLock::new(|| {
    let mut table = CORRECTIONS.to_vec();
    table.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
    table
});

/// Best-effort repair of a noisy transcript. Lossy by nature; input that
/// contains no known error pattern passes through unchanged.
pub fn normalize(command: &str) -> String {
    let mut cmd = command.to_string();
    for (error, fix) in ORDERED.iter() {
        if cmd.contains(error) {
            cmd = cmd.replace(error, fix);
        }
    }
    cmd
}
