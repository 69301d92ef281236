//! Folio - a scroll-animated portfolio page, rendered in the terminal
//!
//! The page is a stack of sections whose animations are pure functions of
//! scroll position or elapsed time: pinned story sequences, staggered
//! reveals, horizontal scroll-jacking and drifting rows, plus a one-shot
//! intro and a pointer-reactive particle background. Everything here is
//! renderer-agnostic; the `folio` binary draws [`PageFrame`]s with crossterm.

pub mod config;
pub mod content;
pub mod error;
pub mod intro;
pub mod layout;
pub mod models;
pub mod motion;
pub mod nav;
pub mod page;
pub mod particles;
pub mod sections;

// Re-exports for convenience
pub use config::{AnimationMode, ColorMode, Config, ConfigWarning};
pub use error::{FolioError, FolioResult};
pub use layout::{Layout, Viewport};
pub use models::{NavTarget, SectionId, SiteContent};
pub use page::{PageFrame, PageShell};
pub use sections::{ElementFrame, Role, SectionFrame};
