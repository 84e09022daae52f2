use std::f32::consts::{FRAC_PI_2, PI};

use glprimer_core::{
    compose, expr, identity, multiply, perspective, rotate_x, rotate_y, rotate_z, scale,
    translate, Animation, FrameTransforms, Mat4, Projection,
};

const EPS: f32 = 1e-5;

fn close(a: [f32; 4], b: [f32; 4]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < EPS)
}

fn samples() -> Vec<Mat4> {
    vec![
        identity(),
        rotate_x(0.4),
        compose(&[rotate_y(1.2), translate(-3.0, 0.5, 2.0)]),
        compose(&[scale(0.25), rotate_z(-2.0)]),
        perspective(1.0, 1.5, 0.5, 20.0),
    ]
}

#[test]
fn identity_is_neutral_on_both_sides() {
    for m in samples() {
        assert!(multiply(&identity(), &m).abs_diff_eq(&m, EPS));
        assert!(multiply(&m, &identity()).abs_diff_eq(&m, EPS));
    }
}

#[test]
fn rotations_undo_each_other() {
    for step in -8..=8 {
        let theta = step as f32 * 0.37;
        for rot in [rotate_x, rotate_y, rotate_z] {
            assert!((rot(theta) * rot(-theta)).abs_diff_eq(&identity(), EPS));
        }
    }
}

#[test]
fn point_transforms() {
    assert_eq!(
        translate(4.0, -5.0, 6.0).transform([0.0, 0.0, 0.0, 1.0]),
        [4.0, -5.0, 6.0, 1.0]
    );
    assert_eq!(scale(3.0).transform([1.0, 1.0, 1.0, 1.0]), [3.0, 3.0, 3.0, 1.0]);
    assert!(close(
        rotate_x(FRAC_PI_2).transform([0.0, 1.0, 0.0, 1.0]),
        [0.0, 0.0, 1.0, 1.0]
    ));
}

#[test]
fn perspective_depth_terms() {
    let (near, far) = (0.1f32, 100.0f32);
    let p = perspective(FRAC_PI_2, 1.0, near, far);
    // column 2, row 3
    assert_eq!(p.data[2 * 4 + 3], -1.0);
    assert!((p.data[2 * 4 + 2] + (far + near) / (far - near)).abs() < 1e-6);
}

#[test]
fn column_major_upload_order() {
    let t = translate(7.0, 8.0, 9.0);
    assert_eq!(&t.as_slice()[12..15], &[7.0, 8.0, 9.0]);
}

#[test]
fn expression_matches_frame_model_view() {
    let animation = Animation::default();
    let time = 2.5;
    let text = format!(
        "rotx(pi/10) * roty({orbit}) * translate(0, 0, 3) * rotx({spin}) * scale(0.5)",
        orbit = time * PI / 8.0,
        spin = time * PI / 2.0,
    );
    let from_text = expr::evaluate(&text).unwrap();
    assert!(from_text.abs_diff_eq(&animation.model_view(time), 1e-4));
}

#[test]
fn clip_w_is_negated_view_depth() {
    let frame = FrameTransforms::at(&Animation::default(), &Projection::default(), 0.0);
    let mvp = frame.model_view_projection();
    let center = frame.model_view.transform([0.0, 0.0, 0.0, 1.0]);
    let clip = mvp.transform([0.0, 0.0, 0.0, 1.0]);
    assert!((clip[3] + center[2]).abs() < EPS);
}
