/// Vertical distance between the field's top edge and the suggestion list.
pub(crate) const OVERLAY_GAP_PX: i32 = 30;

/// Off-screen x coordinate used while the list is hidden.
const HIDDEN_LEFT_PX: i32 = -1000;

/// Absolute position of the suggestion list, in the field's offset-parent coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum OverlayPosition {
    #[default]
    Hidden,
    At { left: i32, top: i32 },
}

impl OverlayPosition {
    /// Place the list under a field whose layout box starts at `(offset_left, offset_top)`.
    pub(crate) fn below(offset_left: i32, offset_top: i32) -> Self {
        OverlayPosition::At {
            left: offset_left,
            top: offset_top.saturating_add(OVERLAY_GAP_PX),
        }
    }

    pub(crate) fn style(&self) -> String {
        match self {
            OverlayPosition::Hidden => format!("left: {HIDDEN_LEFT_PX}px"),
            OverlayPosition::At { left, top } => format!("left: {left}px; top: {top}px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_below_adds_gap() {
        assert_eq!(
            OverlayPosition::below(12, 40),
            OverlayPosition::At { left: 12, top: 70 }
        );
    }

    #[test]
    fn test_style() {
        assert_eq!(OverlayPosition::Hidden.style(), "left: -1000px");
        assert_eq!(
            OverlayPosition::below(5, 0).style(),
            "left: 5px; top: 30px"
        );
    }
}
