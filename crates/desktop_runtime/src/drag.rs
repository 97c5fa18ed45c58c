//! Pointer-drag state for a single window frame.

use crate::model::{PointerPosition, WindowPosition};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Pointer offset from the frame's top-left corner, captured at drag start.
pub struct DragOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Live frame position plus the in-progress drag, if any.
///
/// Positions are not clamped to the viewport; a frame may be dragged partly off-screen.
pub struct FrameDrag {
    position: WindowPosition,
    dragging: Option<DragOffset>,
}

impl FrameDrag {
    pub fn new(position: WindowPosition) -> Self {
        Self {
            position,
            dragging: None,
        }
    }

    pub fn position(&self) -> WindowPosition {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging.is_some()
    }

    /// Captures `pointer - frame_top_left` and enters the dragging state.
    pub fn begin(&mut self, pointer: PointerPosition) {
        self.dragging = Some(DragOffset {
            dx: pointer.x - self.position.x,
            dy: pointer.y - self.position.y,
        });
    }

    /// Moves the frame so the captured offset stays under the pointer.
    ///
    /// Returns `true` when the position changed.
    pub fn update(&mut self, pointer: PointerPosition) -> bool {
        let Some(offset) = self.dragging else {
            return false;
        };
        let next = WindowPosition {
            x: pointer.x - offset.dx,
            y: pointer.y - offset.dy,
        };
        let changed = next != self.position;
        self.position = next;
        changed
    }

    /// Leaves the dragging state. Returns `true` if a drag was in progress.
    pub fn end(&mut self) -> bool {
        self.dragging.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pointer(x: i32, y: i32) -> PointerPosition {
        PointerPosition { x, y }
    }

    #[test]
    fn drag_keeps_grab_offset_under_pointer() {
        let mut drag = FrameDrag::new(WindowPosition { x: 150, y: 40 });
        drag.begin(pointer(170, 50));
        assert!(drag.is_dragging());

        assert!(drag.update(pointer(300, 200)));
        assert_eq!(drag.position(), WindowPosition { x: 280, y: 190 });
    }

    #[test]
    fn moves_are_unclamped() {
        let mut drag = FrameDrag::new(WindowPosition { x: 10, y: 10 });
        drag.begin(pointer(15, 12));
        drag.update(pointer(-100, -50));
        assert_eq!(drag.position(), WindowPosition { x: -105, y: -52 });
    }

    #[test]
    fn pointer_moves_without_drag_are_ignored() {
        let mut drag = FrameDrag::new(WindowPosition { x: 560, y: 40 });
        assert!(!drag.update(pointer(0, 0)));
        assert_eq!(drag.position(), WindowPosition { x: 560, y: 40 });
    }

    #[test]
    fn end_stops_tracking_and_keeps_last_position() {
        let mut drag = FrameDrag::new(WindowPosition { x: 0, y: 0 });
        drag.begin(pointer(5, 5));
        drag.update(pointer(25, 45));
        assert!(drag.end());
        assert!(!drag.end());
        assert!(!drag.update(pointer(900, 900)));
        assert_eq!(drag.position(), WindowPosition { x: 20, y: 40 });
    }
}
