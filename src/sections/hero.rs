//! Hero: brand heading with pointer parallax

use super::{container, ElementFrame, Role, Section, SectionFrame};
use crate::content::BRAND;
use crate::layout::{Extent, SectionGeometry, Viewport};
use crate::models::SectionId;
use crate::motion::{Scrub, ScrollObservers, VisualState};

pub const LABEL: &str = "WEB STUDIO";
pub const TAGLINE: &str = "Reliable Web Solutions";
pub const SUBTITLE: &str =
    "We build modern websites that empower your business and inspire your audience.";

/// (key, displacement factor, lag in seconds)
const LAYERS: [(&str, f64, f64); 3] = [
    ("hero.heading", 20.0, 1.0),
    ("hero.tagline", 10.0, 1.2),
    ("hero.subtitle", 5.0, 1.4),
];

#[derive(Debug, Clone)]
struct Layer {
    factor: f64,
    x: Scrub,
    y: Scrub,
}

#[derive(Debug, Clone)]
pub struct Hero {
    layers: Vec<Layer>,
    /// Normalized pointer, each axis in -0.5..=0.5
    pointer: (f64, f64),
}

impl Default for Hero {
    fn default() -> Self {
        Self::new()
    }
}

impl Hero {
    pub fn new() -> Self {
        Self {
            layers: LAYERS
                .iter()
                .map(|&(_, factor, lag)| Layer {
                    factor,
                    x: Scrub::new(lag),
                    y: Scrub::new(lag),
                })
                .collect(),
            pointer: (0.0, 0.0),
        }
    }

    /// Pointer moved to (`x`, `y`) in viewport pixels.
    pub fn set_pointer(&mut self, x: f64, y: f64, viewport: Viewport) {
        self.pointer = (
            (x / viewport.width - 0.5).clamp(-0.5, 0.5),
            (y / viewport.height - 0.5).clamp(-0.5, 0.5),
        );
    }

    /// Current parallax offset of layer `index`
    pub fn offset(&self, index: usize) -> Option<(f64, f64)> {
        self.layers.get(index).map(|l| (l.x.current(), l.y.current()))
    }

    fn targets(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let (px, py) = self.pointer;
        self.layers.iter().map(move |l| (px * l.factor, py * l.factor))
    }
}

impl Section for Hero {
    fn id(&self) -> SectionId {
        SectionId::Hero
    }

    fn extent(&self, viewport: Viewport) -> Extent {
        Extent::flow(viewport.height)
    }

    fn layout(&mut self, _geometry: SectionGeometry, _observers: &mut ScrollObservers) {}

    fn tick(&mut self, dt: f64, _observers: &ScrollObservers) {
        let targets: Vec<_> = self.targets().collect();
        for (layer, (tx, ty)) in self.layers.iter_mut().zip(targets) {
            layer.x.advance(tx, dt);
            layer.y.advance(ty, dt);
        }
    }

    fn settle(&mut self, _observers: &ScrollObservers) {
        let targets: Vec<_> = self.targets().collect();
        for (layer, (tx, ty)) in self.layers.iter_mut().zip(targets) {
            layer.x.settle(tx);
            layer.y.settle(ty);
        }
    }

    fn frame(&self, geometry: SectionGeometry, scroll: f64) -> SectionFrame {
        let vp = geometry.viewport;
        let top = geometry.element.top - scroll;
        let mut frame = SectionFrame::new(SectionId::Hero, top, geometry.element.height);
        let (left, width) = container(vp, 1280.0);
        let mid = top + vp.height * 0.3;

        frame.push(
            ElementFrame::new("hero.label", Role::Accent, LABEL)
                .at(left, mid)
                .size(width, 20.0),
        );
        let texts = [
            (Role::Display, BRAND, 120.0),
            (Role::Heading, TAGLINE, 80.0),
            (Role::Muted, SUBTITLE, 60.0),
        ];
        let mut y = mid + 60.0;
        for (i, ((key, _, _), (role, text, height))) in LAYERS.iter().zip(texts).enumerate() {
            let mut state = VisualState::default();
            if let Some((dx, dy)) = self.offset(i) {
                state.x = dx;
                state.y = dy;
            }
            frame.push(
                ElementFrame::new(*key, role, text)
                    .at(left, y)
                    .size(width, height)
                    .state(state),
            );
            y += height;
        }
        frame
    }

    fn unmount(&mut self, _observers: &mut ScrollObservers) -> usize {
        self.pointer = (0.0, 0.0);
        for layer in &mut self.layers {
            layer.x.settle(0.0);
            layer.y.settle(0.0);
        }
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parallax_settles_on_scaled_pointer_offset() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut hero = Hero::new();
        hero.set_pointer(1000.0, 0.0, vp);
        hero.settle(&ScrollObservers::new());
        let (x, y) = hero.offset(0).unwrap();
        assert_relative_eq!(x, 10.0);
        assert_relative_eq!(y, -10.0);
        assert_relative_eq!(hero.offset(2).unwrap().0, 2.5);
    }

    #[test]
    fn deeper_layers_lag_more() {
        let vp = Viewport::new(1000.0, 800.0);
        let mut hero = Hero::new();
        hero.set_pointer(1000.0, 400.0, vp);
        hero.tick(0.2, &ScrollObservers::new());
        let heading = hero.offset(0).unwrap().0 / 10.0;
        let subtitle = hero.offset(2).unwrap().0 / 2.5;
        assert!(heading > subtitle);
    }
}
