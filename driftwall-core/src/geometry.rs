//! Plain geometry used by the layout and the renderer.

/// Width/height pair in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Size {
    /// Create a size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True when either side is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite()
            && self.height.is_finite()
            && self.width > 0.0
            && self.height > 0.0)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Horizontal extent.
    pub width: f32,
    /// Vertical extent.
    pub height: f32,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x
            && x < self.x + self.width
            && y >= self.y
            && y < self.y + self.height
    }
}

/// Uniform scale plus offset placing a target rectangle over a parent.
///
/// Applying the fit maps a target-space point `p` to parent space as
/// `offset + p * scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Left edge of the scaled target in parent space.
    pub left: f32,
    /// Top edge of the scaled target in parent space.
    pub top: f32,
    /// Uniform scale factor.
    pub scale: f32,
}

impl Fit {
    /// No scaling, no offset.
    pub const IDENTITY: Self = Self {
        left: 0.0,
        top: 0.0,
        scale: 1.0,
    };

    /// Cropping fit: the smallest uniform scale for which the target covers
    /// the parent on both axes, centered over the parent.
    ///
    /// A degenerate target or parent yields [`Fit::IDENTITY`].
    pub fn cover(target: Size, parent: Size) -> Self {
        if target.is_degenerate() || parent.is_degenerate() {
            return Self::IDENTITY;
        }

        let scale = (parent.width / target.width)
            .max(parent.height / target.height);

        Self {
            left: (parent.width - target.width * scale) / 2.0,
            top: (parent.height - target.height * scale) / 2.0,
            scale,
        }
    }

    /// Size of `target` once scaled.
    pub fn scaled(&self, target: Size) -> Size {
        Size::new(target.width * self.scale, target.height * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-3
    }

    #[test]
    fn cover_scales_by_the_larger_ratio() {
        // Wide image into a tall slot: height drives the scale
        let fit = Fit::cover(Size::new(1600.0, 900.0), Size::new(400.0, 600.0));
        assert!(approx(fit.scale, 600.0 / 900.0));

        let scaled = fit.scaled(Size::new(1600.0, 900.0));
        assert!(scaled.width >= 400.0 - 1e-3);
        assert!(approx(scaled.height, 600.0));
    }

    #[test]
    fn cover_centers_the_overflow() {
        let fit = Fit::cover(Size::new(1600.0, 900.0), Size::new(400.0, 600.0));
        let scaled = fit.scaled(Size::new(1600.0, 900.0));

        assert!(approx(fit.left, (400.0 - scaled.width) / 2.0));
        assert!(fit.left < 0.0);
        assert!(approx(fit.top, 0.0));
    }

    #[test]
    fn cover_is_minimal() {
        let target = Size::new(300.0, 500.0);
        let parent = Size::new(900.0, 700.0);
        let fit = Fit::cover(target, parent);

        // Any smaller scale leaves one axis uncovered
        let shrunk = fit.scale * 0.999;
        assert!(
            target.width * shrunk < parent.width
                || target.height * shrunk < parent.height
        );
    }

    #[test]
    fn degenerate_inputs_fall_back_to_identity() {
        assert_eq!(
            Fit::cover(Size::new(0.0, 10.0), Size::new(10.0, 10.0)),
            Fit::IDENTITY
        );
        assert_eq!(
            Fit::cover(Size::new(10.0, 10.0), Size::new(10.0, f32::NAN)),
            Fit::IDENTITY
        );
    }

    #[test]
    fn rect_containment_is_half_open() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(109.9, 69.9));
        assert!(!rect.contains(110.0, 30.0));
        assert!(!rect.contains(50.0, 70.0));
    }
}
