//! Rasterizer for the badge display list

use image::{Rgb, RgbImage};

use super::layout::Rect;
use super::paint::PaintCommand;
use super::Canvas;
use crate::BadgeStyle;

/// Paint `commands` in order onto a fresh `size` x `size` canvas.
pub fn rasterize(size: u32, style: &BadgeStyle, commands: &[PaintCommand]) -> Canvas {
    let mut canvas = Canvas::new(size, style.background);
    for cmd in commands {
        match *cmd {
            PaintCommand::FillRect { rect, color } => fill_rect(canvas.image_mut(), rect, color),
            PaintCommand::StrokeRoundedRect {
                rect,
                radius,
                width,
                color,
            } => stroke_rounded_rect(canvas.image_mut(), rect, radius, width, color),
        }
    }
    canvas
}

/// Fill `rect` (inclusive), clipped to the image bounds.
pub fn fill_rect(img: &mut RgbImage, rect: Rect, color: Rgb<u8>) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    let x0 = rect.x0.max(0);
    let y0 = rect.y0.max(0);
    let x1 = rect.x1.min(w - 1);
    let y1 = rect.y1.min(h - 1);
    for y in y0..=y1 {
        for x in x0..=x1 {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Stroke a rounded rectangle outline of thickness `width`, growing inward
/// from the edges of `rect`. Straight edges stop one pixel short of each
/// corner arc; the arcs cover the `radius` x `radius` quadrants.
pub fn stroke_rounded_rect(img: &mut RgbImage, rect: Rect, radius: i32, width: i32, color: Rgb<u8>) {
    if rect.x1 < rect.x0 || rect.y1 < rect.y0 || width <= 0 {
        return;
    }
    let r = radius.clamp(0, rect.span_x().min(rect.span_y()) / 2);
    let Rect { x0, y0, x1, y1 } = rect;

    if r == 0 {
        fill_rect(img, Rect::new(x0, y0, x1, y0 + width - 1), color);
        fill_rect(img, Rect::new(x0, y1 - width + 1, x1, y1), color);
        fill_rect(img, Rect::new(x0, y0, x0 + width - 1, y1), color);
        fill_rect(img, Rect::new(x1 - width + 1, y0, x1, y1), color);
        return;
    }

    fill_rect(img, Rect::new(x0 + r + 1, y0, x1 - r - 1, y0 + width - 1), color);
    fill_rect(img, Rect::new(x0 + r + 1, y1 - width + 1, x1 - r - 1, y1), color);
    fill_rect(img, Rect::new(x0, y0 + r + 1, x0 + width - 1, y1 - r - 1), color);
    fill_rect(img, Rect::new(x1 - width + 1, y0 + r + 1, x1, y1 - r - 1), color);

    // (arc center, quadrant the arc occupies)
    let corners = [
        ((x0 + r, y0 + r), Rect::new(x0, y0, x0 + r, y0 + r)),
        ((x1 - r, y0 + r), Rect::new(x1 - r, y0, x1, y0 + r)),
        ((x0 + r, y1 - r), Rect::new(x0, y1 - r, x0 + r, y1)),
        ((x1 - r, y1 - r), Rect::new(x1 - r, y1 - r, x1, y1)),
    ];
    let outer = r as f64 + 0.5;
    let inner = outer - width as f64;
    for ((cx, cy), quadrant) in corners {
        stroke_arc(img, (cx, cy), quadrant, inner, outer, color);
    }
}

fn stroke_arc(
    img: &mut RgbImage,
    (cx, cy): (i32, i32),
    quadrant: Rect,
    inner: f64,
    outer: f64,
    color: Rgb<u8>,
) {
    let (w, h) = (img.width() as i32, img.height() as i32);
    for y in quadrant.y0.max(0)..=quadrant.y1.min(h - 1) {
        for x in quadrant.x0.max(0)..=quadrant.x1.min(w - 1) {
            let dx = (x - cx) as f64;
            let dy = (y - cy) as f64;
            let d = (dx * dx + dy * dy).sqrt();
            if d <= outer && d > inner {
                img.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
