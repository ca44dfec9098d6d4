//! Scripted key input
//!
//! Drives the wizard without a terminal by feeding a list of key presses
//! through the regular event handler. Scripts are comma-separated tokens:
//! key names (`enter`, `space`, `down`, ...), single characters, `ctrl+c`,
//! and `type:<text>`, which expands to one key per character.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::settings::Settings;
use crate::error::{FlowvaError, FlowvaResult};
use crate::onboarding::OnboardingSummary;

use super::app::App;
use super::event::Event;
use super::handler::handle_event;

/// Parse a key script into key events
pub fn parse_keys(script: &str) -> FlowvaResult<Vec<KeyEvent>> {
    let mut keys = Vec::new();

    for raw in script.split(',') {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }

        if let Some(text) = token.strip_prefix("type:") {
            if text.is_empty() {
                return Err(FlowvaError::Script {
                    token: token.to_string(),
                    reason: "nothing to type".into(),
                });
            }
            keys.extend(text.chars().map(|c| plain(KeyCode::Char(c))));
            continue;
        }

        keys.push(parse_key(token)?);
    }

    Ok(keys)
}

fn plain(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn parse_key(token: &str) -> FlowvaResult<KeyEvent> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(plain(KeyCode::Char(c)));
    }

    let code = match token.to_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "space" => KeyCode::Char(' '),
        "tab" => KeyCode::Tab,
        "backtab" => KeyCode::BackTab,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" | "pageup" => KeyCode::PageUp,
        "pgdn" | "pagedown" => KeyCode::PageDown,
        "ctrl+c" => return Ok(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        _ => return Err(FlowvaError::unknown_key(token)),
    };

    Ok(plain(code))
}

/// Run the wizard headless over a list of keys
///
/// Stops early if a key makes the app quit.
pub fn run_script(settings: &Settings, keys: &[KeyEvent]) -> Result<OnboardingSummary> {
    let mut app = App::new(settings);
    tracing::info!(
        session = %app.flow.summary().session_id,
        keys = keys.len(),
        "replaying onboarding script"
    );

    for key in keys {
        handle_event(&mut app, Event::Key(*key))?;
        if app.should_quit {
            break;
        }
    }

    tracing::info!(step = %app.current_step(), "replay finished");
    Ok(app.flow.summary().clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::catalog::{Description, Goal, WorkType};

    #[test]
    fn test_parse_named_and_char_keys() {
        let keys = parse_keys("enter, Space ,down,x,ctrl+c").unwrap();
        assert_eq!(keys.len(), 5);
        assert_eq!(keys[0].code, KeyCode::Enter);
        assert_eq!(keys[1].code, KeyCode::Char(' '));
        assert_eq!(keys[2].code, KeyCode::Down);
        assert_eq!(keys[3].code, KeyCode::Char('x'));
        assert_eq!(keys[4].modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_parse_type_expands_text() {
        let keys = parse_keys("type:Hi there").unwrap();
        let typed: String = keys
            .iter()
            .filter_map(|k| match k.code {
                KeyCode::Char(c) => Some(c),
                _ => None,
            })
            .collect();
        assert_eq!(typed, "Hi there");
    }

    #[test]
    fn test_parse_rejects_unknown_token() {
        let err = parse_keys("enter,jump").unwrap_err();
        assert!(matches!(err, FlowvaError::Script { ref token, .. } if token == "jump"));
        assert!(parse_keys("type:").is_err());
    }

    #[test]
    fn test_empty_tokens_are_skipped() {
        assert!(parse_keys(" , ,").unwrap().is_empty());
    }

    #[test]
    fn test_run_script_collects_answers() {
        let script = "enter,\
            space,down,down,down,down,space,down,down,down,down,space,down,type:Podcasts,enter,\
            enter,down,down,enter,down,enter,\
            space,right,space,up,up,up,enter,\
            down,space,down,down,down,enter";
        let keys = parse_keys(script).unwrap();
        let settings = Settings::default();

        let summary = run_script(&settings, &keys).unwrap();

        let about = summary.about.expect("about answered");
        assert_eq!(about.description, Description::Freelance);
        assert_eq!(about.work, vec![WorkType::Design, WorkType::Others]);
        assert_eq!(about.others, "Podcasts");

        let location = summary.location.expect("location answered");
        assert_eq!(location.answered().copied().flatten().map(|c| c.code), Some("CA"));

        let tools = summary.tools.expect("tools answered");
        assert_eq!(tools.answered().cloned(), Some(vec!["Notion", "Trello"]));

        assert_eq!(summary.goals, Some(vec![Goal::ToolUsage]));
        assert!(summary.finished_at.is_some());
    }

    #[test]
    fn test_run_script_stops_on_quit() {
        let keys = parse_keys("esc,enter").unwrap();
        let settings = Settings::default();
        let summary = run_script(&settings, &keys).unwrap();
        assert!(summary.about.is_none());
        assert!(summary.finished_at.is_none());
    }
}
