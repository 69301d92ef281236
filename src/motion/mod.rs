//! Motion engine: easing, tween timelines and scroll triggers

mod ease;
mod observer;
mod timeline;
mod trigger;
mod visual;

pub use ease::Ease;
pub use observer::{ObserverEvent, ObserverId, ScrollObservers};
pub use timeline::{Position, Step, Timeline};
pub use trigger::{
    Anchor, Crossing, ElementBox, Scrub, Side, ToggleAction, ToggleActions, TogglePlayback,
    TriggerEnd, TriggerRange, TriggerSpec,
};
pub use visual::{Prop, Props, VisualState};
