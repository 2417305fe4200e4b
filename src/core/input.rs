//! Discrete input events emitted by a front end.

use crate::core::common::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MouseButton {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum InputEvent {
    /// A click on the board belonging to `side`.
    CellClicked {
        side: Side,
        x: usize,
        y: usize,
        button: MouseButton,
    },
    OrientationToggleRequested,
    QuitRequested,
}

/// What the controller did with an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// A ship of this length was placed.
    Placed(usize),
    OrientationToggled,
    /// The player fired; carries the shot.
    Fired(crate::core::game::Shot),
    /// Event has no meaning in the current state.
    Ignored,
    Quit,
}
