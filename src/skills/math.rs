use rand::prelude::*;

use super::{contains_any, Context, Skill};
use crate::action::Action;

/// Spoken arithmetic ("what is 12 times 4"). Phrases are rewritten into an
/// expression and evaluated by a small precedence parser -- no dynamic
/// evaluation, unlike the habit this feature usually attracts.
pub struct MathSkill;

impl Skill for MathSkill {
    fn name(&self) -> &'static str {
        "Math"
    }

    fn description(&self) -> &'static str {
        "Evaluates spoken arithmetic."
    }

    fn matches(&self, command: &str) -> bool {
        contains_any(command, &["plus", "minus", "times", "divided", "calculate", "sum"])
            || command.chars().any(|c| c.is_ascii_digit())
    }

    fn execute(&self, command: &str, ctx: &mut Context<'_>) -> Option<Action> {
        let rewritten = command
            .replace("plus", "+")
            .replace("minus", "-")
            .replace("times", "*")
            .replace("divided by", "/")
            .replace("divided", "/");
        let expr: String = rewritten
            .chars()
            .filter(|c| c.is_ascii_digit() || "+-*/(). ".contains(*c))
            .collect();
        let expr = expr.trim();
        if expr.is_empty() || !expr.chars().any(|c| c.is_ascii_digit()) {
            return None;
        }

        match eval_expression(expr) {
            Some(result) => {
                let shown = format_number(result);
                let phrases = [
                    format!("According to my calculations, that would be {shown}."),
                    format!("The result is {shown}, {}.", ctx.user_name),
                    format!("That comes out to {shown}."),
                    format!("I've computed the value for you: {shown}."),
                ];
                let line = phrases.choose(&mut rand::rng()).cloned().unwrap_or_default();
                Some(Action::speak(line))
            }
            None => Some(Action::speak(format!(
                "I'm sorry, {}, that calculation seems to be causing an overflow in my \
                 logic processor.",
                ctx.user_name
            ))),
        }
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Left-to-right recursive descent with `*` `/` binding tighter than `+` `-`.
fn eval_expression(input: &str) -> Option<f64> {
    let tokens: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut pos = 0;
    let value = parse_sum(&tokens, &mut pos)?;
    if pos != tokens.len() {
        return None;
    }
    value.is_finite().then_some(value)
}

fn parse_sum(tokens: &[char], pos: &mut usize) -> Option<f64> {
    let mut value = parse_product(tokens, pos)?;
    while let Some(&op) = tokens.get(*pos) {
        match op {
            '+' => {
                *pos += 1;
                value += parse_product(tokens, pos)?;
            }
            '-' => {
                *pos += 1;
                value -= parse_product(tokens, pos)?;
            }
            _ => break,
        }
    }
    Some(value)
}

fn parse_product(tokens: &[char], pos: &mut usize) -> Option<f64> {
    let mut value = parse_atom(tokens, pos)?;
    while let Some(&op) = tokens.get(*pos) {
        match op {
            '*' => {
                *pos += 1;
                value *= parse_atom(tokens, pos)?;
            }
            '/' => {
                *pos += 1;
                let divisor = parse_atom(tokens, pos)?;
                if divisor == 0.0 {
                    return None;
                }
                value /= divisor;
            }
            _ => break,
        }
    }
    Some(value)
}

fn parse_atom(tokens: &[char], pos: &mut usize) -> Option<f64> {
    match tokens.get(*pos)? {
        '(' => {
            *pos += 1;
            let value = parse_sum(tokens, pos)?;
            if tokens.get(*pos) != Some(&')') {
                return None;
            }
            *pos += 1;
            Some(value)
        }
        '-' => {
            *pos += 1;
            Some(-parse_atom(tokens, pos)?)
        }
        c if c.is_ascii_digit() => {
            let start = *pos;
            while tokens
                .get(*pos)
                .is_some_and(|c| c.is_ascii_digit() || *c == '.')
            {
                *pos += 1;
            }
            let literal: String = tokens[start..*pos].iter().collect();
            literal.parse().ok()
        }
        _ => None,
    }
}
