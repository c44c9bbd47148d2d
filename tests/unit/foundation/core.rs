use super::*;

#[test]
fn new_rejects_wrong_length() {
    assert!(PixelBuffer::new(2, 2, vec![0; 15]).is_err());
    assert!(PixelBuffer::new(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn get_is_none_outside_bounds() {
    let b = PixelBuffer::from_pixel(3, 2, [1, 2, 3, 4]);
    assert_eq!(b.get(0, 0), Some([1, 2, 3, 4]));
    assert_eq!(b.get(2, 1), Some([1, 2, 3, 4]));
    assert_eq!(b.get(-1, 0), None);
    assert_eq!(b.get(3, 0), None);
    assert_eq!(b.get(0, 2), None);
}

#[test]
fn put_pixel_addresses_row_major() {
    let mut b = PixelBuffer::transparent(3, 2);
    b.put_pixel(2, 1, [9, 8, 7, 6]);
    assert_eq!(&b.as_raw()[20..24], &[9, 8, 7, 6]);
    assert_eq!(b.pixel(2, 1), [9, 8, 7, 6]);
}

#[test]
fn sequence_rejects_empty_and_mismatched_frames() {
    let err = FrameSequence::new(vec![]).unwrap_err();
    assert!(matches!(err, AnimateError::Encode(_)));

    let err = FrameSequence::new(vec![
        PixelBuffer::transparent(4, 4),
        PixelBuffer::transparent(4, 5),
    ])
    .unwrap_err();
    assert!(matches!(err, AnimateError::Encode(_)));
    assert!(err.to_string().contains("frame 1 is 4x5"));
}

#[test]
fn sequence_reports_shared_canvas() {
    let seq = FrameSequence::new(vec![PixelBuffer::transparent(7, 3); FRAME_COUNT]).unwrap();
    assert_eq!(
        seq.canvas(),
        Canvas {
            width: 7,
            height: 3
        }
    );
    assert_eq!(seq.len(), FRAME_COUNT);
    assert!(!seq.is_empty());
}

#[test]
fn sequence_requires_exactly_sixteen_frames() {
    for n in [1, FRAME_COUNT - 1, FRAME_COUNT + 1] {
        let err = FrameSequence::new(vec![PixelBuffer::transparent(2, 2); n]).unwrap_err();
        assert!(matches!(err, AnimateError::Encode(_)), "n={n}");
        assert!(err.to_string().contains("needs 16 frames"), "n={n}");
    }
}

#[test]
fn mismatch_is_reported_before_count() {
    let mut frames = vec![PixelBuffer::transparent(4, 4); FRAME_COUNT];
    frames[9] = PixelBuffer::transparent(3, 4);
    let err = FrameSequence::new(frames).unwrap_err();
    assert!(err.to_string().contains("frame 9 is 3x4"));
}
