#![allow(clippy::doc_markdown)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

//! Case tables for the geometric queries: rectangle overlap, ray-point and
//! ray-rectangle intersection, plus boundary behavior of circles and unions.

use planar::{Circle, CircleUnion, Ray, Rect, Vec2};

/// x: 10-30, y: 10-40
fn target() -> Rect {
    Rect::new(10.0, 10.0, 20.0, 30.0)
}

fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
    Rect::new(x, y, w, h)
}

fn ray(px: f64, py: f64, vx: f64, vy: f64) -> Ray {
    Ray::new(Vec2::new(px, py), Vec2::new(vx, vy))
}

// =============================================================================
// Rect::intersects
// =============================================================================

#[test]
fn rect_intersection_table() {
    let cases: &[(&str, Rect, Rect, bool)] = &[
        ("clear overlap", rect(10.0, 10.0, 50.0, 50.0), rect(30.0, 30.0, 50.0, 50.0), true),
        ("right of", rect(10.0, 10.0, 50.0, 50.0), rect(70.0, 10.0, 50.0, 50.0), false),
        ("left of", rect(70.0, 10.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0), false),
        ("below", rect(10.0, 10.0, 50.0, 50.0), rect(10.0, 70.0, 50.0, 50.0), false),
        ("above", rect(10.0, 70.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0), false),
        ("diagonal gap", rect(10.0, 10.0, 50.0, 50.0), rect(70.0, 70.0, 50.0, 50.0), false),
        ("touching right edge", rect(10.0, 10.0, 50.0, 50.0), rect(60.0, 10.0, 50.0, 50.0), true),
        ("touching left edge", rect(60.0, 10.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0), true),
        ("touching bottom edge", rect(10.0, 10.0, 50.0, 50.0), rect(10.0, 60.0, 50.0, 50.0), true),
        ("touching top edge", rect(10.0, 60.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0), true),
        ("touching corner", rect(10.0, 10.0, 50.0, 50.0), rect(60.0, 60.0, 50.0, 50.0), true),
        ("contains other", rect(0.0, 0.0, 100.0, 100.0), rect(20.0, 20.0, 50.0, 50.0), true),
        ("contained by other", rect(20.0, 20.0, 50.0, 50.0), rect(0.0, 0.0, 100.0, 100.0), true),
        ("identical", rect(10.0, 10.0, 50.0, 50.0), rect(10.0, 10.0, 50.0, 50.0), true),
        ("top-left overlap", rect(10.0, 10.0, 50.0, 50.0), rect(0.0, 0.0, 20.0, 20.0), true),
        ("bottom-right overlap", rect(10.0, 10.0, 50.0, 50.0), rect(50.0, 50.0, 20.0, 20.0), true),
        ("point inside", rect(10.0, 10.0, 50.0, 50.0), rect(30.0, 30.0, 0.0, 0.0), true),
        ("point outside", rect(10.0, 10.0, 50.0, 50.0), rect(0.0, 0.0, 0.0, 0.0), false),
        ("point on edge", rect(10.0, 10.0, 50.0, 50.0), rect(60.0, 30.0, 0.0, 0.0), true),
        ("point on corner", rect(10.0, 10.0, 50.0, 50.0), rect(60.0, 60.0, 0.0, 0.0), true),
        ("vertical line across", rect(10.0, 10.0, 50.0, 50.0), rect(30.0, 0.0, 0.0, 100.0), true),
        ("horizontal line across", rect(10.0, 10.0, 50.0, 50.0), rect(0.0, 30.0, 100.0, 0.0), true),
        ("vertical line on edge", rect(10.0, 10.0, 50.0, 50.0), rect(60.0, 0.0, 0.0, 100.0), true),
        ("horiz. line on edge", rect(10.0, 10.0, 50.0, 50.0), rect(0.0, 60.0, 100.0, 0.0), true),
        ("identical points", rect(10.0, 10.0, 0.0, 0.0), rect(10.0, 10.0, 0.0, 0.0), true),
        ("separate points", rect(10.0, 10.0, 0.0, 0.0), rect(20.0, 20.0, 0.0, 0.0), false),
    ];

    for (name, a, b, expected) in cases {
        assert_eq!(a.intersects(b), *expected, "{name}: {a} vs {b}");
        assert_eq!(b.intersects(a), *expected, "{name} (swapped)");
    }
}

#[test]
fn rect_contains_boundary_and_out_of_bounds() {
    let r = target();
    for corner in [r.p(), r.x1y1(), Vec2::new(r.x, r.y1()), Vec2::new(r.x1(), r.y)] {
        assert!(r.contains(corner), "{corner} should be on the boundary");
        assert!(!r.is_out_of_bounds(corner));
    }
    assert!(r.is_out_of_bounds(Vec2::new(30.000_001, 20.0)));
}

#[test]
fn rect_scale_then_translate_chains() {
    let mut r = Rect::new(0.0, 0.0, 4.0, 2.0);
    r.scale(0.5, true).translate(Vec2::new(1.0, 1.0));
    assert_eq!(r, Rect::new(2.0, 1.5, 2.0, 1.0));

    let mut corner = Rect::new(0.0, 0.0, 4.0, 2.0);
    corner.scale(2.0, false);
    assert_eq!(corner, Rect::new(0.0, 0.0, 8.0, 4.0));
}

// =============================================================================
// Ray::intersects_point
// =============================================================================

#[test]
fn ray_point_table() {
    let cases: &[(&str, Ray, Vec2, bool)] = &[
        ("origin", ray(0.0, 0.0, 1.0, 1.0), Vec2::new(0.0, 0.0), true),
        ("one step", ray(0.0, 0.0, 1.0, 1.0), Vec2::new(1.0, 1.0), true),
        ("two steps", ray(0.0, 0.0, 1.0, 1.0), Vec2::new(2.0, 2.0), true),
        ("off the line", ray(0.0, 0.0, 1.0, 1.0), Vec2::new(4.0, -1.0), false),
        ("behind", ray(0.0, 0.0, 1.0, 1.0), Vec2::new(-1.0, -1.0), false),
        ("degenerate at origin", ray(0.0, 0.0, 0.0, 0.0), Vec2::new(0.0, 0.0), false),
        ("vertical", ray(0.0, 0.0, 0.0, 1.0), Vec2::new(0.0, 1.0), true),
        ("horizontal", ray(0.0, 0.0, 1.0, 0.0), Vec2::new(1.0, 0.0), true),
        ("vertical, lateral offset", ray(5.0, 5.0, 0.0, 1.0), Vec2::new(6.0, 10.0), true),
        ("horizontal, lateral offset", ray(5.0, 5.0, 1.0, 0.0), Vec2::new(10.0, 6.0), true),
        ("vertical, own origin", ray(5.0, 5.0, 0.0, 1.0), Vec2::new(5.0, 5.0), true),
    ];

    for (name, r, point, expected) in cases {
        assert_eq!(r.does_intersect_point(*point), *expected, "{name}");
    }
}

#[test]
fn ray_point_far_along_arbitrary_direction() {
    let forward = ray(5.0, 3.0, 1.0, 7.0);
    assert!(forward.does_intersect_point(forward.get_point(43.0)));

    let backward = ray(5.0, 3.0, -1.0, -7.0);
    assert!(backward.does_intersect_point(backward.get_point(9999.0)));
}

#[test]
fn ray_point_returns_parameter() {
    let r = ray(1.0, 1.0, 2.0, 4.0);
    let t = r.intersects_point(Vec2::new(4.0, 7.0)).expect("point is on the ray");
    assert!((t - 1.5).abs() < 1e-12);
}

// =============================================================================
// Ray::intersects_rect
// =============================================================================

#[test]
fn ray_rect_miss_far_away() {
    assert!(!ray(0.0, 0.0, 0.0, 1.0).intersects_rect(&Rect::new(-10.0, -10.0, 1.0, 1.0)));
}

#[test]
fn ray_rect_table() {
    let cases: &[(&str, Ray, bool)] = &[
        ("horizontal through middle", ray(0.0, 25.0, 1.0, 0.0), true),
        ("vertical through middle", ray(20.0, 0.0, 0.0, 1.0), true),
        ("diagonal through", ray(0.0, 0.0, 1.0, 1.0), true),
        ("vertical, left of rect", ray(5.0, 25.0, 0.0, 1.0), false),
        ("vertical, right of rect", ray(35.0, 25.0, 0.0, 1.0), false),
        ("horizontal, above rect", ray(20.0, 5.0, 1.0, 0.0), false),
        ("horizontal, below rect", ray(20.0, 45.0, 1.0, 0.0), false),
        ("shallow diagonal misses", ray(0.0, 0.0, 1.0, 0.2), false),
        ("starts inside", ray(15.0, 20.0, 1.0, 1.0), true),
        ("starts inside, points out", ray(15.0, 20.0, -1.0, -1.0), true),
        ("starts on left edge, points in", ray(10.0, 25.0, 1.0, 0.0), true),
        ("starts on left edge, points out", ray(10.0, 25.0, -1.0, 0.0), true),
        ("runs along top edge", ray(15.0, 10.0, 1.0, 0.0), true),
        ("parallel, just outside", ray(9.99, 25.0, 0.0, 1.0), false),
        ("aimed at corner", ray(0.0, 0.0, 10.0, 10.0), true),
        ("starts at corner, points in", ray(10.0, 10.0, 1.0, 1.0), true),
        ("starts at corner, points out", ray(30.0, 40.0, 1.0, 1.0), true),
        ("starts at corner, runs away along edge", ray(10.0, 40.0, -1.0, 0.0), true),
        ("degenerate inside", ray(20.0, 20.0, 0.0, 0.0), false),
        ("degenerate outside", ray(0.0, 0.0, 0.0, 0.0), false),
    ];

    let rect = target();
    for (name, r, expected) in cases {
        assert_eq!(r.intersects_rect(&rect), *expected, "{name}: {r:?}");
    }
}

#[test]
fn ray_rect_tangent_to_corner() {
    // Passes just under (1, 1) but clips the rectangle further along
    let r = ray(0.0, 0.0, 1.0, 0.99);
    assert!(r.intersects_rect(&Rect::new(1.0, 1.0, 2.0, 3.0)));

    // Touches only the corner (3, 1) before leaving the x range
    let grazing = ray(2.0, 0.0, 1.0, 1.0);
    assert!(grazing.intersects_rect(&Rect::new(1.0, 1.0, 2.0, 3.0)));

    // Crosses x = 3 just short of the corner
    let near_miss = ray(2.0, 0.0, 1.0, 0.99);
    assert!(!near_miss.intersects_rect(&Rect::new(1.0, 1.0, 2.0, 3.0)));
}

#[test]
fn ray_rect_against_zero_size_rect() {
    let point = Rect::new(5.0, 5.0, 0.0, 0.0);
    assert!(ray(0.0, 0.0, 1.0, 1.0).intersects_rect(&point));
    assert!(!ray(0.0, 0.0, 1.0, 2.0).intersects_rect(&point));
}

// =============================================================================
// Circles
// =============================================================================

#[test]
fn circle_touching_is_not_overlap() {
    let a = Circle::new(Vec2::ZERO, 1.0);
    let b = Circle::new(Vec2::new(0.0, 2.0), 1.0);
    assert!(!a.intersects(&b));
    assert!(a.contains(Vec2::new(0.0, 1.0)));
    assert!(b.contains(Vec2::new(0.0, 1.0)));
}

#[test]
fn circle_union_of_touching_pair_is_empty() {
    let u = CircleUnion::new(vec![
        Circle::new(Vec2::ZERO, 1.0),
        Circle::new(Vec2::new(2.0, 0.0), 1.0),
    ]);
    assert!(u.is_empty());
    assert_eq!(u.total_area(), 0.0);
}

#[test]
fn circle_union_keeps_nested_circle() {
    let outer = Circle::new(Vec2::ZERO, 5.0);
    let inner = Circle::new(Vec2::new(1.0, 1.0), 0.5);
    let u = CircleUnion::new(vec![outer, inner]);
    assert_eq!(u.circles(), &[outer, inner]);
}

#[test]
fn zero_radius_circle_contains_only_center() {
    let c = Circle::new(Vec2::new(3.0, 3.0), 0.0);
    assert!(c.contains(Vec2::new(3.0, 3.0)));
    assert!(!c.contains(Vec2::new(3.0, 3.000_001)));
    assert_eq!(c.area(), 0.0);
}
