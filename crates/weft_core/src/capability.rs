//! Host framework capability seams
//!
//! The host framework supplies positioning, focus containment, and a toast
//! surface. Weft only consumes these; it never implements scheduling, DOM
//! access, or timers itself. [`FlowPositioner`] is a pure reference
//! implementation suitable for tests and static layout.

use crate::geometry::{Align, Corner, Placement, Point, Rect, Side, Size};
use crate::node::Node;

/// Positions a floating element against an anchor.
///
/// Implemented by the host's positioning engine (flipping, collision
/// avoidance and scroll handling live there, not here).
pub trait Positioner {
    fn position(&self, anchor: Rect, floating: Size, placement: Placement) -> Point;
}

/// Traps keyboard focus inside an overlay subtree until released.
pub trait FocusScope {
    fn activate(&self);
    fn release(&self);
}

/// A transient notification handed to the host's toast surface.
///
/// Auto-dismiss timing is owned by the host; `duration_ms == 0` requests a
/// persistent toast.
#[derive(Clone, Debug)]
pub struct ToastMessage {
    pub markup: Node,
    pub duration_ms: u32,
    pub corner: Corner,
}

/// Push-only notification surface provided by the host.
pub trait ToastSurface {
    fn push(&self, message: ToastMessage);
}

/// Straight-line anchored positioning with a fixed gap.
///
/// No collision handling: the chosen placement is honored verbatim.
#[derive(Clone, Copy, Debug)]
pub struct FlowPositioner {
    /// Gap between anchor edge and floating element, in host units
    pub gap: f32,
}

impl Default for FlowPositioner {
    fn default() -> Self {
        Self { gap: 4.0 }
    }
}

impl Positioner for FlowPositioner {
    fn position(&self, anchor: Rect, floating: Size, placement: Placement) -> Point {
        let main = match placement.side {
            Side::Top => Point::new(anchor.x, anchor.y - floating.height - self.gap),
            Side::Bottom => Point::new(anchor.x, anchor.bottom() + self.gap),
            Side::Left => Point::new(anchor.x - floating.width - self.gap, anchor.y),
            Side::Right => Point::new(anchor.right() + self.gap, anchor.y),
        };

        match placement.side {
            Side::Top | Side::Bottom => {
                let x = match placement.align {
                    Align::Start => anchor.x,
                    Align::Center => anchor.center().x - floating.width / 2.0,
                    Align::End => anchor.right() - floating.width,
                };
                Point::new(x, main.y)
            }
            Side::Left | Side::Right => {
                let y = match placement.align {
                    Align::Start => anchor.y,
                    Align::Center => anchor.center().y - floating.height / 2.0,
                    Align::End => anchor.bottom() - floating.height,
                };
                Point::new(main.x, y)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANCHOR: Rect = Rect::new(100.0, 100.0, 80.0, 32.0);
    const FLOATING: Size = Size::new(200.0, 120.0);

    #[test]
    fn test_bottom_center_placement() {
        let pos = FlowPositioner { gap: 4.0 };
        let p = pos.position(ANCHOR, FLOATING, Placement::side(Side::Bottom));
        assert_eq!(p, Point::new(40.0, 136.0));
    }

    #[test]
    fn test_top_start_placement() {
        let pos = FlowPositioner { gap: 8.0 };
        let p = pos.position(
            ANCHOR,
            FLOATING,
            Placement::new(Side::Top, Align::Start),
        );
        assert_eq!(p, Point::new(100.0, -28.0));
    }

    #[test]
    fn test_right_end_placement() {
        let pos = FlowPositioner { gap: 0.0 };
        let p = pos.position(ANCHOR, FLOATING, Placement::new(Side::Right, Align::End));
        assert_eq!(p, Point::new(180.0, 12.0));
    }
}
