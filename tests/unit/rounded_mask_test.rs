//! Tests for the rounded-rectangle clip mask through its public API.

use stickypages::services::rounded_mask::RoundedMask;
use stickypages::types::geometry::Rect;

const W: u32 = 800;
const H: u32 = 600;
const R: u32 = 10;

/// Which corner square a pixel falls in, if any.
fn in_corner_square(x: u32, y: u32) -> bool {
    let near_x = x < R || x >= W - R;
    let near_y = y < R || y >= H - R;
    near_x && near_y
}

/// Whether the pixel centre lies within the arc of its corner square.
fn within_arc(x: u32, y: u32) -> bool {
    let cx = if x < R { R as f64 } else { (W - R) as f64 };
    let cy = if y < R { R as f64 } else { (H - R) as f64 };
    let dx = x as f64 + 0.5 - cx;
    let dy = y as f64 + 0.5 - cy;
    dx * dx + dy * dy <= (R * R) as f64
}

#[test]
fn test_excludes_exactly_the_corner_pixels_outside_the_arcs() {
    let mask = RoundedMask::new(W, H, R);
    let mut excluded = 0u64;

    for y in 0..H {
        for x in 0..W {
            let expected = !in_corner_square(x, y) || within_arc(x, y);
            assert_eq!(
                mask.contains(x as i32, y as i32),
                expected,
                "pixel ({}, {})",
                x,
                y
            );
            if !expected {
                excluded += 1;
            }
        }
    }

    assert_eq!(mask.excluded_pixels(), excluded);
    assert!(excluded > 0);
    assert_eq!(excluded % 4, 0, "the four corners must be symmetric");
}

#[test]
fn test_includes_every_pixel_at_least_radius_from_each_edge() {
    let mask = RoundedMask::new(W, H, R);
    for y in R..H - R {
        for x in R..W - R {
            assert!(mask.contains(x as i32, y as i32), "pixel ({}, {})", x, y);
        }
    }
}

#[test]
fn test_corner_exclusion_is_mirror_symmetric() {
    let mask = RoundedMask::new(W, H, R);
    for y in 0..R {
        for x in 0..R {
            let tl = mask.contains(x as i32, y as i32);
            let tr = mask.contains((W - 1 - x) as i32, y as i32);
            let bl = mask.contains(x as i32, (H - 1 - y) as i32);
            let br = mask.contains((W - 1 - x) as i32, (H - 1 - y) as i32);
            assert!(tl == tr && tr == bl && bl == br, "corner offset ({}, {})", x, y);
        }
    }
}

#[test]
fn test_outside_bounds_is_excluded() {
    let mask = RoundedMask::new(W, H, R);
    assert!(!mask.contains(-1, 300));
    assert!(!mask.contains(400, -1));
    assert!(!mask.contains(W as i32, 300));
    assert!(!mask.contains(400, H as i32));
}

#[test]
fn test_inner_mask_is_inset_by_border_on_every_side() {
    let outer = RoundedMask::new(W, H, R);
    let border = 8;
    let inner = outer.inset(border);

    let o = outer.bounds();
    let i = inner.bounds();
    assert_eq!(i.x - o.x, border as i32);
    assert_eq!(i.y - o.y, border as i32);
    assert_eq!(o.right() - i.right(), border as i32);
    assert_eq!(o.bottom() - i.bottom(), border as i32);
    assert_eq!(inner.radius(), outer.radius());

    // Nothing of the border band paints in the inner mask.
    for x in 0..W as i32 {
        for y in (0..border as i32).chain(H as i32 - border as i32..H as i32) {
            assert!(!inner.contains(x, y));
        }
    }
    assert!(inner.contains(border as i32 + R as i32, border as i32 + R as i32));
    assert!(!inner.contains(border as i32, border as i32));
}

#[test]
fn test_region_union_equals_mask() {
    let mask = RoundedMask::at(5, 7, 120, 90, 14);
    let region = mask.region();

    for y in 0..110 {
        for x in 0..140 {
            let in_region = region.iter().any(|r: &Rect| r.contains(x, y));
            assert_eq!(in_region, mask.contains(x, y), "pixel ({}, {})", x, y);
        }
    }

    // Bands never overlap.
    let total: u64 = region.iter().map(Rect::area).sum();
    assert_eq!(total, 120 * 90 - mask.excluded_pixels());
}

#[test]
fn test_mask_is_idempotent() {
    let a = RoundedMask::new(W, H, R);
    let b = RoundedMask::new(W, H, R);
    assert_eq!(a.region(), b.region());
    assert_eq!(a.region(), a.region());
}
