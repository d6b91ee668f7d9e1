//! Projection tests - aspect fit, symmetry and scale invariance

use glam::Vec3;
use tile_grid::core::Projection;
use tile_grid::types::Viewport;

const EPS: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn test_wide_window_extends_x() {
    let p = Projection::from_viewport(Viewport::new(800, 600));
    assert!(approx(p.right(), 800.0 / 600.0));
    assert!(approx(p.left(), -800.0 / 600.0));
    assert!(approx(p.top(), 1.0));
    assert!(approx(p.bottom(), -1.0));
}

#[test]
fn test_tall_window_extends_y() {
    let p = Projection::from_viewport(Viewport::new(600, 800));
    assert!(approx(p.right(), 1.0));
    assert!(approx(p.left(), -1.0));
    assert!(approx(p.top(), 1.0 / 0.75));
    assert!(approx(p.bottom(), -1.0 / 0.75));
}

#[test]
fn test_square_window_is_unit_box() {
    let p = Projection::from_viewport(Viewport::new(512, 512));
    assert_eq!((p.left(), p.right(), p.bottom(), p.top()), (-1.0, 1.0, -1.0, 1.0));
}

#[test]
fn test_visible_box_is_symmetric() {
    for (w, h) in [(1, 1), (1, 1000), (1000, 1), (800, 600), (333, 777), (1920, 1080)] {
        let p = Projection::from_viewport(Viewport::new(w, h));
        assert_eq!(p.left(), -p.right(), "{}x{}", w, h);
        assert_eq!(p.bottom(), -p.top(), "{}x{}", w, h);
    }
}

#[test]
fn test_unit_square_is_never_cropped() {
    for (w, h) in [(1, 1000), (1000, 1), (800, 600), (600, 800)] {
        let p = Projection::from_viewport(Viewport::new(w, h));
        assert!(p.right() >= 1.0 && p.top() >= 1.0, "{}x{}", w, h);
    }
}

#[test]
fn test_depends_only_on_ratio() {
    for (w, h) in [(800, 600), (600, 800), (640, 640), (3, 7)] {
        let base = Projection::from_viewport(Viewport::new(w, h));
        for k in [2, 3, 10] {
            let scaled = Projection::from_viewport(Viewport::new(w * k, h * k));
            let a = base.matrix().to_cols_array();
            let b = scaled.matrix().to_cols_array();
            for (x, y) in a.iter().zip(b.iter()) {
                assert!(approx(*x, *y), "{}x{} vs k={}", w, h, k);
            }
        }
    }
}

#[test]
fn test_logical_square_stays_square_in_pixels() {
    let (w, h) = (800.0_f32, 600.0_f32);
    let p = Projection::from_viewport(Viewport::new(800, 600));
    let m = p.matrix();
    let a = m.project_point3(Vec3::new(-0.5, -0.5, 0.0));
    let b = m.project_point3(Vec3::new(0.5, 0.5, 0.0));
    let px_w = (b.x - a.x) * 0.5 * w;
    let px_h = (b.y - a.y) * 0.5 * h;
    assert!((px_w - px_h).abs() < 1e-3);
}

#[test]
fn test_planar_content_keeps_z_in_range() {
    let p = Projection::from_viewport(Viewport::new(800, 600));
    let v = p.matrix().project_point3(Vec3::new(1.0, 1.0, 0.0));
    assert!(approx(v.z, 0.0));
}

#[test]
fn test_projection_is_pure() {
    let a = Projection::from_viewport(Viewport::new(1024, 768));
    let b = Projection::from_viewport(Viewport::new(1024, 768));
    assert_eq!(a, b);
}

#[test]
#[should_panic]
fn test_zero_height_is_fatal() {
    let _ = Projection::from_viewport(Viewport::new(640, 0));
}
