//! Line and rectangle rasterization
//!
//! Integer-only Bresenham lines; rectangles are filled as runs of
//! vertical lines. Line math runs in `i64` so any pair of `i32`
//! endpoints is valid input.

use core::ops::Range;

use crate::canvas::Canvas;
use crate::error::RenderError;

/// Bresenham walk state for one line
struct LineWalk {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
}

impl LineWalk {
    fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        let (x0, y0, x1, y1) = (i64::from(x0), i64::from(y0), i64::from(x1), i64::from(y1));
        Self {
            x0,
            y0,
            x1,
            y1,
            dx: (x1 - x0).abs(),
            dy: (y1 - y0).abs(),
            sx: if x0 < x1 { 1 } else { -1 },
            sy: if y0 < y1 { 1 } else { -1 },
        }
    }

    /// Pixels on the line, endpoints included
    fn steps(&self) -> i64 {
        self.dx.max(self.dy) + 1
    }

    /// Position and error term after `n` steps of the walk
    ///
    /// The major axis moves every step; the minor axis has moved
    /// `(2 * n * minor + major - 1) / (2 * major)` times.
    fn state_at(&self, n: i64) -> (i64, i64, i64) {
        let major = i128::from(self.dx.max(self.dy));
        let minor = i128::from(self.dx.min(self.dy));
        let n = i128::from(n);
        let minor_steps = if major == 0 {
            0
        } else {
            (2 * n * minor + major - 1) / (2 * major)
        };
        let (kx, ky) = if self.dx >= self.dy {
            (n, minor_steps)
        } else {
            (minor_steps, n)
        };
        let (dx, dy) = (i128::from(self.dx), i128::from(self.dy));
        let err = dx - dy - kx * dy + ky * dx;

        // kx <= dx and ky <= dy, and |err| stays within 2 * major
        (
            self.x0 + self.sx * kx as i64,
            self.y0 + self.sy * ky as i64,
            err as i64,
        )
    }

    /// Steps whose major-axis coordinate lies inside `width` x `height`
    fn visible_steps(&self, width: u16, height: u16) -> Range<i64> {
        let (origin, sign, limit) = if self.dx >= self.dy {
            (self.x0, self.sx, i64::from(width))
        } else {
            (self.y0, self.sy, i64::from(height))
        };
        let (lo, hi) = if sign > 0 {
            (-origin, limit - origin)
        } else {
            (origin - limit + 1, origin + 1)
        };
        lo.max(0)..hi.min(self.steps())
    }
}

/// Draw a line from (`x0`, `y0`) to (`x1`, `y1`), both endpoints included
///
/// The walk runs for at most `max(dx, dy) + 1` steps, so lines of any
/// length are drawn completely. A failing pixel write stops the line;
/// pixels already set stay set. On a clipping canvas the walk starts and
/// ends at the canvas edges instead of stepping through off-canvas pixels.
pub fn draw_line<C: Canvas + ?Sized>(
    canvas: &mut C,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<(), RenderError> {
    let line = LineWalk::new(x0, y0, x1, y1);
    let steps = if canvas.clips() {
        let (width, height) = canvas.dimensions();
        line.visible_steps(width, height)
    } else {
        0..line.steps()
    };
    if steps.is_empty() {
        return Ok(());
    }

    let (mut cx, mut cy, mut err) = line.state_at(steps.start);

    for _ in steps {
        // The walk never leaves the box spanned by two i32 endpoints
        canvas.set_pixel(cx as i32, cy as i32)?;
        if cx == line.x1 && cy == line.y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -line.dy {
            err -= line.dy;
            cx += line.sx;
        }
        if e2 < line.dx {
            err += line.dx;
            cy += line.sy;
        }
    }

    Ok(())
}

/// Fill a `w` x `h` rectangle whose top-left corner is (`x`, `y`)
///
/// Empty or negative sizes draw nothing. Extents past `i32::MAX` are cut
/// at `i32::MAX`.
pub(crate) fn fill_rect<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    w: i32,
    h: i32,
) -> Result<(), RenderError> {
    if w <= 0 || h <= 0 {
        return Ok(());
    }
    let bottom = y.saturating_add(h - 1);
    let right = (i64::from(x) + i64::from(w)).min(i64::from(i32::MAX) + 1);
    for col in i64::from(x)..right {
        draw_line(canvas, col as i32, y, col as i32, bottom)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::{BoundsPolicy, FrameBuffer};
    use proptest::prelude::*;

    fn buffer() -> FrameBuffer {
        FrameBuffer::new(128, 64).unwrap()
    }

    fn clipped() -> FrameBuffer {
        FrameBuffer::with_bounds(128, 64, BoundsPolicy::Clip).unwrap()
    }

    /// Canvas without bounds that records every pixel written
    struct Recorder {
        pixels: Vec<(i32, i32)>,
    }

    impl Canvas for Recorder {
        fn set_pixel(&mut self, x: i32, y: i32) -> Result<(), RenderError> {
            self.pixels.push((x, y));
            Ok(())
        }

        fn dimensions(&self) -> (u16, u16) {
            (u16::MAX, u16::MAX)
        }
    }

    /// Assert that exactly `expected` pixels are lit
    fn assert_lit(fb: &FrameBuffer, expected: &[(i32, i32)]) {
        for &(x, y) in expected {
            assert!(fb.get(x, y).unwrap(), "pixel ({}, {}) should be on", x, y);
        }
        assert_eq!(fb.lit_pixels(), expected.len());
    }

    #[test]
    fn test_single_point_line() {
        let mut fb = buffer();
        draw_line(&mut fb, 7, 9, 7, 9).unwrap();
        assert_lit(&fb, &[(7, 9)]);
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = buffer();
        draw_line(&mut fb, 0, 0, 10, 0).unwrap();
        let expected: heapless::Vec<(i32, i32), 11> = (0..=10).map(|x| (x, 0)).collect();
        assert_lit(&fb, &expected);
    }

    #[test]
    fn test_vertical_line() {
        let mut fb = buffer();
        draw_line(&mut fb, 0, 0, 0, 10).unwrap();
        let expected: heapless::Vec<(i32, i32), 11> = (0..=10).map(|y| (0, y)).collect();
        assert_lit(&fb, &expected);
    }

    #[test]
    fn test_diagonal_line() {
        let mut fb = buffer();
        draw_line(&mut fb, 0, 0, 4, 4).unwrap();
        assert_lit(&fb, &[(0, 0), (1, 1), (2, 2), (3, 3), (4, 4)]);
    }

    #[test]
    fn test_reversed_line_matches_endpoints() {
        let mut fb = buffer();
        draw_line(&mut fb, 10, 5, 0, 0).unwrap();
        assert!(fb.get(10, 5).unwrap());
        assert!(fb.get(0, 0).unwrap());
        assert_eq!(fb.lit_pixels(), 11);
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        // Longer than any fixed iteration cap a small panel would suggest
        let mut fb: FrameBuffer<{ 2048 * 8 / 8 }> = FrameBuffer::new(2048, 8).unwrap();
        draw_line(&mut fb, 0, 0, 2047, 7).unwrap();
        assert!(fb.get(2047, 7).unwrap());
        assert_eq!(fb.lit_pixels(), 2048);
    }

    #[test]
    fn test_line_off_screen_strict() {
        let mut fb = buffer();
        let result = draw_line(&mut fb, 125, 0, 130, 0);
        assert_eq!(result, Err(RenderError::OutOfBounds { x: 128, y: 0 }));
        // Pixels before the edge were drawn
        assert_lit(&fb, &[(125, 0), (126, 0), (127, 0)]);
    }

    #[test]
    fn test_line_off_screen_clipped() {
        let mut fb = buffer();
        fb.set_bounds_policy(BoundsPolicy::Clip);
        draw_line(&mut fb, 125, 0, 130, 0).unwrap();
        assert_lit(&fb, &[(125, 0), (126, 0), (127, 0)]);
    }

    #[test]
    fn test_extreme_endpoints_clipped() {
        let mut fb = clipped();
        draw_line(&mut fb, i32::MIN, 0, i32::MAX, 0).unwrap();
        assert_eq!(fb.lit_pixels(), 128);
        assert!(fb.get(0, 0).unwrap());
        assert!(fb.get(127, 0).unwrap());

        let mut fb = clipped();
        draw_line(&mut fb, i32::MAX, i32::MAX, i32::MIN, i32::MIN).unwrap();
        assert_eq!(fb.lit_pixels(), 64);
        for i in 0..64 {
            assert!(fb.get(i, i).unwrap());
        }

        let mut fb = clipped();
        draw_line(&mut fb, 5, i32::MIN, 5, i32::MAX).unwrap();
        assert_eq!(fb.lit_pixels(), 64);
    }

    #[test]
    fn test_extreme_endpoints_strict() {
        let mut fb = buffer();
        assert_eq!(
            draw_line(&mut fb, i32::MIN, 0, i32::MAX, 0),
            Err(RenderError::OutOfBounds { x: i32::MIN, y: 0 })
        );
        assert!(fb.is_blank());
    }

    #[test]
    fn test_line_entirely_off_canvas_clipped() {
        let mut fb = clipped();
        draw_line(&mut fb, -50, -10, -1, -40).unwrap();
        draw_line(&mut fb, 200, 0, 300, 63).unwrap();
        assert!(fb.is_blank());
    }

    #[test]
    fn test_fill_rect_at_i32_limits() {
        let mut fb = clipped();
        fill_rect(&mut fb, i32::MAX - 1, i32::MAX - 1, 8, 8).unwrap();
        fill_rect(&mut fb, 126, 62, 4, i32::MAX).unwrap();
        assert_eq!(fb.lit_pixels(), 4);
        assert!(fb.get(127, 63).unwrap());
    }

    #[test]
    fn test_fill_rect() {
        let mut fb = buffer();
        fill_rect(&mut fb, 2, 2, 3, 3).unwrap();

        let mut expected = heapless::Vec::<(i32, i32), 9>::new();
        for x in 2..=4 {
            for y in 2..=4 {
                expected.push((x, y)).unwrap();
            }
        }
        assert_lit(&fb, &expected);
    }

    #[test]
    fn test_fill_rect_empty() {
        let mut fb = buffer();
        fill_rect(&mut fb, 2, 2, 0, 5).unwrap();
        fill_rect(&mut fb, 2, 2, 5, 0).unwrap();
        fill_rect(&mut fb, 2, 2, -1, 3).unwrap();
        assert!(fb.is_blank());
    }

    proptest! {
        #[test]
        fn prop_line_hits_both_endpoints(
            x0 in 0i32..128, y0 in 0i32..64, x1 in 0i32..128, y1 in 0i32..64
        ) {
            let mut fb = buffer();
            draw_line(&mut fb, x0, y0, x1, y1).unwrap();
            prop_assert!(fb.get(x0, y0).unwrap());
            prop_assert!(fb.get(x1, y1).unwrap());

            let dx = (x1 - x0).abs() as usize;
            let dy = (y1 - y0).abs() as usize;
            prop_assert_eq!(fb.lit_pixels(), dx.max(dy) + 1);
        }

        #[test]
        fn prop_clipped_line_matches_full_walk(
            x0 in -300i32..400, y0 in -300i32..400, x1 in -300i32..400, y1 in -300i32..400
        ) {
            let mut full = Recorder { pixels: Vec::new() };
            draw_line(&mut full, x0, y0, x1, y1).unwrap();

            let mut fb = clipped();
            draw_line(&mut fb, x0, y0, x1, y1).unwrap();

            let visible: Vec<_> = full
                .pixels
                .iter()
                .filter(|&&(x, y)| (0..128).contains(&x) && (0..64).contains(&y))
                .collect();
            prop_assert_eq!(fb.lit_pixels(), visible.len());
            for &&(x, y) in &visible {
                prop_assert!(fb.get(x, y).unwrap());
            }
        }
    }
}
