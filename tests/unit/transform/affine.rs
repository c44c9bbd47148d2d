use super::*;

fn gradient(w: u32, h: u32) -> PixelBuffer {
    let mut b = PixelBuffer::transparent(w, h);
    for y in 0..h {
        for x in 0..w {
            b.put_pixel(x, y, [(x * 10) as u8, (y * 10) as u8, 7, 255]);
        }
    }
    b
}

fn close(a: [u8; 4], b: [u8; 4], tol: u8) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= tol)
}

#[test]
fn zero_rotation_keeps_pixels() {
    let src = gradient(9, 6);
    let out = warp_affine(&src, rotation_about_center(9, 6, 0.0)).unwrap();
    assert_eq!((out.width(), out.height()), (9, 6));
    for y in 0..6 {
        for x in 0..9 {
            assert!(
                close(out.pixel(x, y), src.pixel(x, y), 4),
                "({x},{y}): {:?} vs {:?}",
                out.pixel(x, y),
                src.pixel(x, y)
            );
        }
    }
}

#[test]
fn positive_angle_turns_counter_clockwise_on_screen() {
    // A pixel right of centre should move up (smaller y) for a CCW turn.
    let mut src = PixelBuffer::transparent(21, 21);
    src.put_pixel(20, 10, [255, 0, 0, 255]);
    let out = warp_affine(&src, rotation_about_center(21, 21, 90.0)).unwrap();
    // Pixel centre (20.5, 10.5) about (10.5, 10.5) turned 90° CCW lands on (10.5, 0.5).
    let moved = out.pixel(10, 0);
    assert!(moved[3] > 200, "{moved:?}");
    assert!(moved[0] > 200, "{moved:?}");
    assert!(out.pixel(20, 10)[3] < 20);
}

#[test]
fn rotation_keeps_canvas_and_clears_corners() {
    let src = PixelBuffer::from_pixel(20, 20, [50, 60, 70, 255]);
    let out = warp_affine(&src, rotation_about_center(20, 20, 45.0)).unwrap();
    assert_eq!((out.width(), out.height()), (20, 20));
    assert_eq!(out.pixel(0, 0)[3], 0);
    assert!(close(out.pixel(10, 10), [50, 60, 70, 255], 4));
}

#[test]
fn warp_output_is_straight_alpha() {
    let src = PixelBuffer::from_pixel(8, 8, [200, 100, 40, 128]);
    let out = warp_affine(&src, rotation_about_center(8, 8, 0.0)).unwrap();
    let px = out.pixel(4, 4);
    assert!(close(px, [200, 100, 40, 128], 4), "{px:?}");
}

#[test]
fn oversized_canvas_is_rejected() {
    let src = PixelBuffer::transparent(70_000, 1);
    let err = warp_affine(&src, rotation_about_center(70_000, 1, 3.0)).unwrap_err();
    assert!(matches!(err, AnimateError::Encode(_)));
}

#[test]
fn shift_down_clears_top_rows() {
    let src = gradient(4, 6);
    let out = shift_rows(&src, 2);
    for x in 0..4 {
        assert_eq!(out.pixel(x, 0), [0, 0, 0, 0]);
        assert_eq!(out.pixel(x, 1), [0, 0, 0, 0]);
        assert_eq!(out.pixel(x, 2), src.pixel(x, 0));
        assert_eq!(out.pixel(x, 5), src.pixel(x, 3));
    }
}

#[test]
fn shift_up_clears_bottom_rows() {
    let src = gradient(3, 5);
    let out = shift_rows(&src, -3);
    assert_eq!(out.pixel(1, 0), src.pixel(1, 3));
    assert_eq!(out.pixel(1, 1), src.pixel(1, 4));
    assert_eq!(out.pixel(1, 2), [0, 0, 0, 0]);
}

#[test]
fn extreme_shifts_clear_the_frame_without_overflow() {
    let src = gradient(4, 4);
    for dy in [i64::MIN, i64::MIN + 1, -5, 4, i64::MAX] {
        let out = shift_rows(&src, dy);
        assert!(out.pixels().all(|px| px == [0, 0, 0, 0]), "dy={dy}");
    }
    assert_eq!(shift_rows(&src, 0), src);
}
