//! Display list for the badge

use image::Rgb;

use super::layout::{BadgeGeometry, Rect};
use crate::BadgeStyle;

#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Filled rectangle, corners inclusive
    FillRect { rect: Rect, color: Rgb<u8> },
    /// Rounded-rectangle outline stroked inward from `rect`
    StrokeRoundedRect {
        rect: Rect,
        radius: i32,
        width: i32,
        color: Rgb<u8>,
    },
}

/// Build the commands for one badge: the outline, then the two cross bars.
pub fn badge_commands(geometry: &BadgeGeometry, style: &BadgeStyle) -> Vec<PaintCommand> {
    vec![
        PaintCommand::StrokeRoundedRect {
            rect: geometry.outline,
            radius: geometry.corner_radius,
            width: geometry.border_width,
            color: style.accent,
        },
        PaintCommand::FillRect {
            rect: geometry.vertical_bar,
            color: style.accent,
        },
        PaintCommand::FillRect {
            rect: geometry.horizontal_bar,
            color: style.accent,
        },
    ]
}
