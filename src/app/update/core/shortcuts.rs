use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = Self::pressed_token(&key)?;

        if Self::shortcut_matches(&self.config.key_next_section, "j", &pressed, modifiers)
            || Self::shortcut_matches("down", "down", &pressed, modifiers)
        {
            Some(Message::NextSection)
        } else if Self::shortcut_matches(&self.config.key_prev_section, "k", &pressed, modifiers)
            || Self::shortcut_matches("up", "up", &pressed, modifiers)
        {
            Some(Message::PreviousSection)
        } else if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(&self.config.key_quit, "q", &pressed, modifiers) {
            Some(Message::Quit)
        } else {
            None
        }
    }

    fn pressed_token(key: &Key) -> Option<String> {
        match key.as_ref() {
            Key::Named(key::Named::Space) => Some("space".to_string()),
            Key::Named(key::Named::ArrowDown) => Some("down".to_string()),
            Key::Named(key::Named::ArrowUp) => Some("up".to_string()),
            Key::Named(key::Named::PageDown) => Some("pagedown".to_string()),
            Key::Named(key::Named::PageUp) => Some("pageup".to_string()),
            Key::Character(ch) => Some(ch.to_ascii_lowercase()),
            _ => None,
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let required_key = required_key.unwrap_or(fallback);
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else {
            normalized
                .replace("spacebar", "space")
                .replace("arrowdown", "down")
                .replace("arrowup", "up")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_key_aliases() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
        assert_eq!(App::normalize_shortcut_token("ArrowDown", "x"), "down");
        assert_eq!(App::normalize_shortcut_token("   ", "j"), "j");
    }

    #[test]
    fn matches_plain_letter() {
        assert!(App::shortcut_matches("j", "j", "j", Modifiers::empty()));
        assert!(!App::shortcut_matches("j", "j", "k", Modifiers::empty()));
    }

    #[test]
    fn matches_modified_shortcut() {
        assert!(App::shortcut_matches("ctrl+q", "q", "q", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches("t", "t", "t", Modifiers::SHIFT));
    }

    #[test]
    fn empty_binding_uses_fallback() {
        assert!(App::shortcut_matches("", "q", "q", Modifiers::empty()));
    }

    #[test]
    fn named_keys_have_tokens() {
        assert_eq!(
            App::pressed_token(&Key::Named(key::Named::ArrowDown)).as_deref(),
            Some("down")
        );
        assert_eq!(App::pressed_token(&Key::Character("J".into())).as_deref(), Some("j"));
        assert_eq!(App::pressed_token(&Key::Named(key::Named::Tab)), None);
    }
}
