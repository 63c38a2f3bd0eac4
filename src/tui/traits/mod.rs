//! Component trait system for the TUI
//!
//! App does not know how to draw or edit each panel. Components declare
//! their own capabilities through traits and App routes input and render
//! calls to them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                         App                                 │
//! │  (orchestrator: routes keys, runs panel actions, settles)   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!              ┌───────────────┼───────────────┐
//!              ▼               ▼               ▼
//!        ┌──────────┐   ┌──────────┐   ┌──────────┐
//!        │  Draft   │   │   IDs    │   │   Logs   │
//!        │  Input   │   │  Panel   │   │  Panel   │
//!        └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Interactive`] - keyboard input, may request a panel [`Action`]

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Action, Handled, Interactive};
