use badgeicon::rendering::layout::BadgeGeometry;
use badgeicon::{render_icon, BadgeStyle, Canvas};

fn accent_run(canvas: &Canvas, y: u32, from: u32, to: u32) -> Option<(u32, u32)> {
    let accent = BadgeStyle::default().accent;
    let xs: Vec<u32> = (from..to).filter(|&x| canvas.pixel(x, y) == accent).collect();
    Some((*xs.first()?, *xs.last()?))
}

#[test]
fn canvas_has_requested_dimensions() {
    let style = BadgeStyle::default();
    for size in [1u32, 2, 7, 25, 64, 192, 300, 512] {
        let c = render_icon(size, &style);
        assert_eq!((c.width(), c.height()), (size, size));
    }
}

#[test]
fn drawing_stays_inside_padding() {
    let style = BadgeStyle::default();
    for size in [32u32, 100, 192, 257, 512] {
        let g = BadgeGeometry::for_size(size);
        let lo = g.padding as u32;
        let hi = size - g.padding as u32;
        let c = render_icon(size, &style);
        for (x, y, p) in c.image().enumerate_pixels() {
            if *p == style.accent {
                assert!(
                    (lo..=hi).contains(&x) && (lo..=hi).contains(&y),
                    "size {}: accent pixel at ({}, {}) outside [{}, {}]",
                    size,
                    x,
                    y,
                    lo,
                    hi
                );
            }
        }
        // outline touches the padding on every side
        let mid = g.center as u32;
        assert_eq!(c.pixel(lo, mid), style.accent);
        assert_eq!(c.pixel(hi, mid), style.accent);
        assert_eq!(c.pixel(mid, lo), style.accent);
        assert_eq!(c.pixel(mid, hi), style.accent);
    }
}

#[test]
fn border_is_at_least_two_pixels_thick() {
    let style = BadgeStyle::default();
    for size in [20u32, 30, 48] {
        let g = BadgeGeometry::for_size(size);
        let c = render_icon(size, &style);
        let lo = g.padding as u32;
        let mid = g.center as u32;
        assert_eq!(c.pixel(lo, mid), style.accent, "size {}", size);
        assert_eq!(c.pixel(lo + 1, mid), style.accent, "size {}", size);
    }
}

#[test]
fn cross_bars_have_expected_extent() {
    let style = BadgeStyle::default();
    for size in [192u32, 512] {
        let g = BadgeGeometry::for_size(size);
        let c = render_icon(size, &style);
        let inner_lo = (g.padding + g.border_width) as u32;
        let inner_hi = size - inner_lo;
        let center = g.center as u32;

        // horizontal arm through the center row
        let (first, last) = accent_run(&c, center, inner_lo, inner_hi).expect("cross row");
        assert_eq!(last - first, size / 3);
        assert_eq!(first + last, 2 * center);

        // vertical bar alone, just inside its top end
        let top = (g.center - g.cross_size / 2) as u32;
        let (first, last) = accent_run(&c, top + 1, inner_lo, inner_hi).expect("bar row");
        assert_eq!(last - first, size / 8);
        assert_eq!(first + last, 2 * center);
        assert_eq!(c.pixel(center, top), style.accent);
        assert_eq!(c.pixel(center, top - 1), style.background);
    }
}

#[test]
fn cross_bars_are_solid() {
    let style = BadgeStyle::default();
    for size in [64u32, 192, 512] {
        let g = BadgeGeometry::for_size(size);
        let c = render_icon(size, &style);
        let mut covered = 0;
        for (x, y, p) in c.image().enumerate_pixels() {
            let (x, y) = (x as i32, y as i32);
            if g.vertical_bar.contains(x, y) || g.horizontal_bar.contains(x, y) {
                assert_eq!(*p, style.accent, "size {}: gap at ({}, {})", size, x, y);
                covered += 1;
            }
        }
        assert!(covered > 0);
        assert!(!g.vertical_bar.contains(g.center, g.vertical_bar.y0 - 1));
        assert!(!g.horizontal_bar.contains(g.horizontal_bar.x1 + 1, g.center));
    }
}

#[test]
fn sizes_render_consistently_but_not_identically() {
    let style = BadgeStyle::default();
    let small = render_icon(192, &style);
    let large = render_icon(512, &style);
    assert_ne!(small.fingerprint(), large.fingerprint());
    assert_eq!(small.pixel(96, 96), large.pixel(256, 256));
}
