use super::super::super::messages::Message;
use super::super::super::state::App;
use super::super::Effect;
use std::time::Instant;
use tracing::info;

impl App {
    pub(super) fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        if let Message::Tick(now) = message {
            self.now = now;
            return effects;
        }
        self.now = Instant::now();

        match message {
            Message::Scrolled {
                offset_y,
                viewport_height,
                content_height,
            } => self.handle_scrolled(offset_y, viewport_height, content_height),
            Message::WindowResized { width, height } => self.handle_window_resized(width, height),
            Message::KeyPressed { key, modifiers } => {
                if let Some(shortcut) = self.shortcut_message_for_key(key, modifiers) {
                    effects.extend(self.reduce(shortcut));
                }
            }
            Message::JumpToSection(idx) => self.handle_jump_to_section(idx, &mut effects),
            Message::StartStory => self.handle_jump_to_section(0, &mut effects),
            Message::NextSection => self.handle_step_section(1, &mut effects),
            Message::PreviousSection => self.handle_step_section(-1, &mut effects),
            Message::ToggleTheme => self.handle_toggle_theme(),
            Message::Quit => {
                info!("Quit requested");
                effects.push(Effect::Quit);
            }
            Message::Tick(_) => {}
        }

        effects
    }
}
