// Components module - reusable UI building blocks
//
// Shell components are rendered on every frame:
// - Title bar: App name, in-flight spinner
// - Status bar: Backend, counts, uptime, key hints
// - Logs panel: System log entries
//
// Panel components carry the text operations themselves:
// - Draft input: the text to submit
// - IDs panel: submitted identifiers with their "Get text" trigger
//
// Toasts render on top of everything.

pub mod draft_input;
pub mod ids_panel;
pub mod logs_panel;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use draft_input::DraftInput;
pub use ids_panel::IdsPanel;
pub use logs_panel::LogsPanel;
pub use title_bar::TitleBar;
pub use toast::ToastStack;
