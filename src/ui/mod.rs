pub mod context;
pub mod json;
pub mod live_region;
pub mod output;
pub mod preview;
pub mod primitives;
pub mod render;
pub mod terminal;
pub mod theme;
pub mod widgets;
