use super::{contains_any, Context, Skill};
use crate::action::Action;

/// Answers questions about what the camera currently sees. Only ever reads
/// the perception layer; degrades to "sensors offline" when no backend is
/// attached.
pub struct VisionSkill;

impl Skill for VisionSkill {
    fn name(&self) -> &'static str {
        "Vision"
    }

    fn description(&self) -> &'static str {
        "Object, presence, and emotion questions against the camera feed."
    }

    fn keywords(&self) -> &[&str] {
        &["see", "look", "camera", "scan", "scanning", "presence", "holding", "identify", "vision", "emotion", "feeling", "threat", "tactical", "finger", "fingers"]
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let name = ctx.user_name.clone();
        let Some(vision) = ctx.vision else {
            return Some(Action::speak(format!(
                "I'm sorry, {name}, but my optic sensors are currently offline."
            )));
        };

        if contains_any(command, &["scan the room", "threat", "tactical"]) {
            let faces = vision.face_count();
            let objects = vision.detected_objects();
            let inventory = if objects.is_empty() {
                "no notable objects".to_string()
            } else {
                objects.join(", ")
            };
            let assessment = if faces == 0 {
                "The room reads as unoccupied."
            } else {
                "No hostiles detected. Threat level: minimal."
            };
            return Some(Action::speak(format!(
                "Tactical sweep complete, {name}. I register {faces} occupant(s) and an \
                 inventory of: {inventory}. {assessment}"
            )));
        }

        if contains_any(command, &["finger", "fingers"]) {
            return Some(match vision.finger_count() {
                Some(1) => Action::speak(format!("You are holding up one finger, {name}.")),
                Some(count) => {
                    Action::speak(format!("You are holding up {count} fingers, {name}."))
                }
                None => Action::speak(format!(
                    "I can't get a clear read on your hand at this angle, {name}."
                )),
            });
        }

        if contains_any(command, &["holding", "identify", "what is this", "what do you see"]) {
            if let Some(held) = vision.object_in_hand() {
                return Some(Action::speak(format!(
                    "It appears you are holding a {held}, {name}. My sensors have \
                     cross-referenced the geometry and confirmed its identity."
                )));
            }
            let objects = vision.detected_objects();
            return Some(match objects.len() {
                0 => Action::speak(format!(
                    "I'm analyzing the visual feed, {name}, but I cannot distinguish \
                     any specific objects with certainty at this moment."
                )),
                1 => Action::speak(format!(
                    "My scan identifies a {} within your immediate vicinity, {name}.",
                    objects[0]
                )),
                _ => {
                    let listed = objects[..objects.len() - 1].join(", a ");
                    let last = &objects[objects.len() - 1];
                    Action::speak(format!(
                        "Scanning highlights several distinct items in the perimeter, \
                         {name}: a {listed} and a {last}."
                    ))
                }
            });
        }

        if contains_any(command, &["emotion", "feeling", "how do i look"]) {
            return Some(match vision.emotion() {
                Some(emotion) => Action::speak(format!(
                    "Biometric scan suggests a {emotion} state, {name}."
                )),
                None => Action::speak(format!(
                    "I'm having trouble analyzing your biometric markers at this angle, {name}."
                )),
            });
        }

        if contains_any(command, &["see me", "look", "presence", "vision"]) {
            return Some(if vision.face_count() > 0 {
                Action::speak(format!("I see you clearly, {name}. Biometric identity verified."))
            } else {
                Action::speak(
                    "I can see the room, but I don't see any biological signatures in the frame.",
                )
            });
        }

        None
    }
}
