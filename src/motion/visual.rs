//! Visual state of one animated element

use serde::{Deserialize, Serialize};

/// Resolved visual state of an element at one instant.
///
/// Opacity follows auto-alpha semantics: an element at opacity 0 is also
/// hidden, so renderers can skip it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualState {
    pub opacity: f64,
    pub x: f64,
    pub y: f64,
    pub x_percent: f64,
    pub y_percent: f64,
    pub scale: f64,
    pub scale_x: f64,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            x: 0.0,
            y: 0.0,
            x_percent: 0.0,
            y_percent: 0.0,
            scale: 1.0,
            scale_x: 1.0,
        }
    }
}

impl VisualState {
    pub fn visible(&self) -> bool {
        self.opacity > 0.0
    }

    pub fn get(&self, prop: Prop) -> f64 {
        match prop {
            Prop::Opacity => self.opacity,
            Prop::X => self.x,
            Prop::Y => self.y,
            Prop::XPercent => self.x_percent,
            Prop::YPercent => self.y_percent,
            Prop::Scale => self.scale,
            Prop::ScaleX => self.scale_x,
        }
    }

    pub fn set(&mut self, prop: Prop, value: f64) {
        match prop {
            Prop::Opacity => self.opacity = value.clamp(0.0, 1.0),
            Prop::X => self.x = value,
            Prop::Y => self.y = value,
            Prop::XPercent => self.x_percent = value,
            Prop::YPercent => self.y_percent = value,
            Prop::Scale => self.scale = value,
            Prop::ScaleX => self.scale_x = value,
        }
    }

    pub fn apply(&mut self, props: &Props) {
        for (prop, value) in props.iter() {
            self.set(prop, value);
        }
    }
}

/// Animatable property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prop {
    Opacity,
    X,
    Y,
    XPercent,
    YPercent,
    Scale,
    ScaleX,
}

/// A partial set of property values, as written in a tween.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Props {
    values: Vec<(Prop, f64)>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(mut self, prop: Prop, value: f64) -> Self {
        if let Some(slot) = self.values.iter_mut().find(|(p, _)| *p == prop) {
            slot.1 = value;
        } else {
            self.values.push((prop, value));
        }
        self
    }

    pub fn opacity(self, value: f64) -> Self {
        self.with(Prop::Opacity, value)
    }

    pub fn x(self, value: f64) -> Self {
        self.with(Prop::X, value)
    }

    pub fn y(self, value: f64) -> Self {
        self.with(Prop::Y, value)
    }

    pub fn x_percent(self, value: f64) -> Self {
        self.with(Prop::XPercent, value)
    }

    pub fn y_percent(self, value: f64) -> Self {
        self.with(Prop::YPercent, value)
    }

    pub fn scale(self, value: f64) -> Self {
        self.with(Prop::Scale, value)
    }

    pub fn scale_x(self, value: f64) -> Self {
        self.with(Prop::ScaleX, value)
    }

    pub fn get(&self, prop: Prop) -> Option<f64> {
        self.values
            .iter()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| *v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Prop, f64)> + '_ {
        self.values.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
