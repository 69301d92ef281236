//! Document layout: where each section sits on the scroll axis
//!
//! Sections report their own extent for a viewport. Pinned sections add pin
//! spacing after themselves, so everything below is pushed down by the pin
//! length. All trigger ranges are derived from a [`Layout`], which is rebuilt
//! on every resize.

use serde::Serialize;

use crate::error::{FolioError, FolioResult};
use crate::models::SectionId;
use crate::motion::ElementBox;

/// Below this width the page uses its single-column layout
pub const NARROW_BREAKPOINT: f64 = 768.0;

/// Largest viewport side accepted, in px
pub const MAX_VIEWPORT: f64 = 16384.0;

/// Validate one viewport side coming from a flag or a config file.
pub fn check_dimension(what: &'static str, value: f64) -> FolioResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FolioError::InvalidValue {
            what,
            value: value.to_string(),
            reason: "must be a positive number",
        });
    }
    if value > MAX_VIEWPORT {
        return Err(FolioError::InvalidValue {
            what,
            value: value.to_string(),
            reason: "must be at most 16384 px",
        });
    }
    Ok(value)
}

pub fn check_scroll(value: f64) -> FolioResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(FolioError::InvalidValue {
            what: "scroll",
            value: value.to_string(),
            reason: "must be a finite number",
        })
    }
}

fn side(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(1.0, MAX_VIEWPORT)
    } else {
        1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: side(width),
            height: side(height),
        }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_BREAKPOINT
    }
}

/// Space a section takes on the scroll axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Extent {
    /// Height of the section box
    pub height: f64,
    /// Extra scroll distance while the section is pinned
    pub pin: f64,
}

impl Extent {
    pub fn flow(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            pin: 0.0,
        }
    }

    pub fn pinned(height: f64, pin: f64) -> Self {
        Self {
            height: height.max(0.0),
            pin: pin.max(0.0),
        }
    }

    pub fn total(&self) -> f64 {
        self.height + self.pin
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub id: SectionId,
    pub top: f64,
    pub extent: Extent,
}

impl Placement {
    pub fn element(&self) -> ElementBox {
        ElementBox::new(self.top, self.extent.height)
    }
}

/// Geometry a section is laid out with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    pub viewport: Viewport,
    pub element: ElementBox,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    viewport: Viewport,
    placements: Vec<Placement>,
}

impl Layout {
    /// Stack `extents` top to bottom in the given order.
    pub fn stack(viewport: Viewport, extents: impl IntoIterator<Item = (SectionId, Extent)>) -> Self {
        let mut top = 0.0;
        let placements = extents
            .into_iter()
            .map(|(id, extent)| {
                let placement = Placement { id, top, extent };
                top += extent.total();
                placement
            })
            .collect();
        Self {
            viewport,
            placements,
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn placement(&self, id: SectionId) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }

    pub fn geometry(&self, id: SectionId) -> Option<SectionGeometry> {
        self.placement(id).map(|p| SectionGeometry {
            viewport: self.viewport,
            element: p.element(),
        })
    }

    pub fn top(&self, id: SectionId) -> Option<f64> {
        self.placement(id).map(|p| p.top)
    }

    pub fn document_height(&self) -> f64 {
        self.placements.last().map_or(0.0, |p| p.top + p.extent.total())
    }

    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Scroll offset that brings `id` to the top of the viewport.
    pub fn anchor_offset(&self, id: SectionId) -> f64 {
        self.top(id).unwrap_or(0.0).clamp(0.0, self.max_scroll())
    }

    /// Section covering the top of the viewport at `scroll`.
    pub fn section_at(&self, scroll: f64) -> Option<SectionId> {
        self.placements
            .iter()
            .rev()
            .find(|p| p.top <= scroll)
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Layout {
        Layout::stack(
            Viewport::new(1000.0, 800.0),
            [
                (SectionId::Hero, Extent::flow(800.0)),
                (SectionId::About, Extent::pinned(800.0, 8000.0)),
                (SectionId::Experience, Extent::flow(1200.0)),
            ],
        )
    }

    #[test]
    fn viewport_sides_stay_in_bounds() {
        let vp = Viewport::new(f64::NAN, 1e9);
        assert_eq!(vp.width, 1.0);
        assert_eq!(vp.height, MAX_VIEWPORT);
        assert_eq!(Viewport::new(f64::INFINITY, -5.0), Viewport::new(1.0, 1.0));
    }

    #[test]
    fn check_dimension_rejects_non_finite_and_oversized() {
        assert_eq!(check_dimension("width", 1440.0).unwrap(), 1440.0);
        assert_eq!(check_dimension("width", MAX_VIEWPORT).unwrap(), MAX_VIEWPORT);
        for bad in [f64::NAN, f64::INFINITY, 0.0, -10.0, 1e9] {
            let err = check_dimension("width", bad).unwrap_err();
            assert!(matches!(err, FolioError::InvalidValue { what: "width", .. }));
        }
        assert!(check_scroll(-20.0).is_ok());
        assert!(check_scroll(f64::NAN).is_err());
        assert!(check_scroll(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn pinned_sections_push_following_content() {
        let layout = sample();
        assert_eq!(layout.top(SectionId::About), Some(800.0));
        assert_eq!(layout.top(SectionId::Experience), Some(9600.0));
        assert_eq!(layout.document_height(), 10800.0);
        assert_eq!(layout.max_scroll(), 10000.0);
    }

    #[test]
    fn anchor_offset_is_clamped() {
        let layout = Layout::stack(
            Viewport::new(1000.0, 800.0),
            [
                (SectionId::Hero, Extent::flow(800.0)),
                (SectionId::Contact, Extent::flow(400.0)),
            ],
        );
        assert_eq!(layout.anchor_offset(SectionId::Contact), 400.0);
        assert_eq!(layout.anchor_offset(SectionId::Faq), 0.0);
    }

    #[test]
    fn section_at_scroll() {
        let layout = sample();
        assert_eq!(layout.section_at(0.0), Some(SectionId::Hero));
        assert_eq!(layout.section_at(5000.0), Some(SectionId::About));
        assert_eq!(layout.section_at(9600.0), Some(SectionId::Experience));
    }

    #[test]
    fn narrow_breakpoint() {
        assert!(Viewport::new(767.0, 600.0).is_narrow());
        assert!(!Viewport::new(768.0, 600.0).is_narrow());
    }
}
