//! Tooltip placement inside a chart area

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

pub const TOOLTIP_OFFSET: f64 = 12.0;

/// Top-left corner of the tooltip box.
///
/// Preferred place is right of and above the cursor; it flips to the left when
/// it would overflow the right edge and below when it would overflow the top,
/// then gets clamped into the chart.
pub fn tooltip_position(cursor: (f64, f64), tooltip: Size, bounds: Size) -> (f64, f64) {
    let (cx, cy) = cursor;

    let mut x = cx + TOOLTIP_OFFSET;
    if x + tooltip.width > bounds.width {
        x = cx - TOOLTIP_OFFSET - tooltip.width;
    }

    let mut y = cy - TOOLTIP_OFFSET - tooltip.height;
    if y < 0.0 {
        y = cy + TOOLTIP_OFFSET;
    }

    (
        clamp_axis(x, tooltip.width, bounds.width),
        clamp_axis(y, tooltip.height, bounds.height),
    )
}

fn clamp_axis(pos: f64, size: f64, limit: f64) -> f64 {
    let max = (limit - size).max(0.0);
    pos.clamp(0.0, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Size = Size {
        width: 400.0,
        height: 300.0,
    };
    const TIP: Size = Size {
        width: 100.0,
        height: 40.0,
    };

    #[test]
    fn test_default_is_right_above() {
        assert_eq!(tooltip_position((100.0, 150.0), TIP, BOUNDS), (112.0, 98.0));
    }

    #[test]
    fn test_flips_left_near_right_edge() {
        let (x, _) = tooltip_position((350.0, 150.0), TIP, BOUNDS);
        assert_eq!(x, 238.0);
    }

    #[test]
    fn test_flips_below_near_top() {
        let (_, y) = tooltip_position((100.0, 20.0), TIP, BOUNDS);
        assert_eq!(y, 32.0);
    }

    #[test]
    fn test_always_inside_bounds() {
        for &(cx, cy) in &[(0.0, 0.0), (400.0, 300.0), (5.0, 295.0), (395.0, 5.0)] {
            let (x, y) = tooltip_position((cx, cy), TIP, BOUNDS);
            assert!(x >= 0.0 && x + TIP.width <= BOUNDS.width, "x={} for {:?}", x, (cx, cy));
            assert!(y >= 0.0 && y + TIP.height <= BOUNDS.height, "y={} for {:?}", y, (cx, cy));
        }
    }

    #[test]
    fn test_oversized_tooltip_pins_to_origin() {
        let big = Size::new(500.0, 400.0);
        assert_eq!(tooltip_position((200.0, 150.0), big, BOUNDS), (0.0, 0.0));
    }
}
