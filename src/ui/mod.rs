// UI module - GUI logic
//
// This module contains:
// - GuiController: Main controller that wires up the window with the selection state machine

pub mod controller;

pub use controller::GuiController;
