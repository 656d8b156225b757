mod messages;
mod state;
mod update;
mod view;

pub use state::App;
pub(crate) use state::StoryLayout;

use crate::config::AppConfig;
use crate::theme::Theme;
use iced::{Size, window};
use scrolly_core::SectionList;

/// Open the story window.
pub fn run_app(config: AppConfig, sections: SectionList) -> iced::Result {
    let window_settings = window::Settings {
        size: Size::new(config.window_width, config.window_height),
        min_size: Some(Size::new(480.0, 360.0)),
        ..window::Settings::default()
    };

    iced::application(
        "From Dal-Roti to Cola-Chips",
        App::update,
        App::view,
    )
    .window(window_settings)
    .subscription(App::subscription)
    .theme(|app: &App| Theme::from(app.config.theme).into())
    .run_with(move || App::bootstrap(config, sections))
}
