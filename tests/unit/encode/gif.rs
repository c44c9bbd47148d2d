use super::*;
use crate::foundation::core::{FRAME_COUNT, PixelBuffer};

struct Decoded {
    frames: Vec<gif::Frame<'static>>,
    width: u16,
    height: u16,
}

fn decode(bytes: &[u8]) -> Decoded {
    let mut opts = gif::DecodeOptions::new();
    opts.set_color_output(gif::ColorOutput::Indexed);
    let mut dec = opts.read_info(bytes).unwrap();
    let (width, height) = (dec.width(), dec.height());
    let mut frames = Vec::new();
    while let Some(f) = dec.read_next_frame().unwrap() {
        frames.push(f.clone());
    }
    Decoded {
        frames,
        width,
        height,
    }
}

fn has_infinite_loop(bytes: &[u8]) -> bool {
    // NETSCAPE2.0, sub-block size 3, id 1, loop count 0 (little endian).
    let needle = b"NETSCAPE2.0\x03\x01\x00\x00";
    bytes.windows(needle.len()).any(|w| w == needle)
}

fn uniform(px: [u8; 4], w: u32, h: u32) -> FrameSequence {
    FrameSequence::new(vec![PixelBuffer::from_pixel(w, h, px); FRAME_COUNT]).unwrap()
}

#[test]
fn oversized_canvas_is_an_encode_error() {
    let frames = uniform([0, 0, 0, 0], 70_000, 1);
    let err = encode_gif(&frames, &GifEncodeOpts::default()).unwrap_err();
    assert!(matches!(err, AnimateError::Encode(_)));
}

#[test]
fn frames_carry_delay_disposal_and_transparency() {
    let mut frames = vec![PixelBuffer::transparent(6, 4); FRAME_COUNT];
    frames[0].put_pixel(1, 1, [255, 0, 0, 255]);
    frames[1] = PixelBuffer::from_pixel(6, 4, [0, 0, 255, 255]);
    let seq = FrameSequence::new(frames).unwrap();

    let bytes = encode_gif(&seq, &GifEncodeOpts::default()).unwrap();
    assert!(has_infinite_loop(&bytes));

    let d = decode(&bytes);
    assert_eq!((d.width, d.height), (6, 4));
    assert_eq!(d.frames.len(), FRAME_COUNT);
    for f in &d.frames {
        assert_eq!(f.delay, 5);
        assert_eq!(f.dispose, gif::DisposalMethod::Background);
        assert_eq!(f.transparent, Some(0));
        assert_eq!((f.left, f.top, f.width, f.height), (0, 0, 6, 4));
    }

    let first = &d.frames[0];
    assert_eq!(first.buffer[6 + 1], 1);
    assert_eq!(first.buffer.iter().filter(|&&i| i == 0).count(), 23);
    assert!(d.frames[1].buffer.iter().all(|&i| i == 1));
    assert!(d.frames[2].buffer.iter().all(|&i| i == 0));
}

#[test]
fn delay_comes_from_options() {
    let opts = GifEncodeOpts {
        delay_cs: 12,
        ..Default::default()
    };
    let bytes = encode_gif(&uniform([0, 0, 0, 0], 2, 2), &opts).unwrap();
    assert_eq!(decode(&bytes).frames[0].delay, 12);
}

#[test]
fn encoding_is_deterministic() {
    let frames = uniform([10, 200, 30, 255], 8, 8);
    let a = encode_gif(&frames, &GifEncodeOpts::default()).unwrap();
    let b = encode_gif(&frames, &GifEncodeOpts::default()).unwrap();
    assert_eq!(a, b);
}
