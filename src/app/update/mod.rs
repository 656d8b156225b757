use iced::widget::scrollable::AbsoluteOffset;

mod appearance;
mod core;
mod scroll;

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    ScrollTo(AbsoluteOffset),
    Quit,
}
