use std::collections::HashMap;

use color_quant::NeuQuant;

use crate::foundation::core::PixelBuffer;

/// Palette slot reserved for transparent pixels.
pub(crate) const TRANSPARENT_INDEX: u8 = 0;

const MAX_OPAQUE_COLORS: usize = 255;
const NEUQUANT_SAMPLE_FACTOR: i32 = 10;

pub(crate) struct IndexedFrame {
    /// RGB triples; entry 0 is the transparent slot.
    pub palette: Vec<u8>,
    pub indices: Vec<u8>,
}

/// Map a straight RGBA frame to palette indices, reserving index 0 for transparency.
///
/// Frames with at most 255 distinct opaque colours are stored exactly; larger ones go through
/// NeuQuant.
pub(crate) fn index_frame(frame: &PixelBuffer, transparent_below: u8) -> IndexedFrame {
    match exact_palette(frame, transparent_below) {
        Some(indexed) => indexed,
        None => {
            let opaque: Vec<u8> = frame
                .pixels()
                .filter(|px| px[3] >= transparent_below)
                .flat_map(|px| [px[0], px[1], px[2], 255])
                .collect();
            let nq = NeuQuant::new(NEUQUANT_SAMPLE_FACTOR, MAX_OPAQUE_COLORS, &opaque);

            let mut palette = vec![0u8; 3];
            palette.extend_from_slice(&nq.color_map_rgb());

            let indices = frame
                .pixels()
                .map(|px| {
                    if px[3] < transparent_below {
                        TRANSPARENT_INDEX
                    } else {
                        (nq.index_of(&[px[0], px[1], px[2], 255]) + 1) as u8
                    }
                })
                .collect();
            IndexedFrame { palette, indices }
        }
    }
}

fn exact_palette(frame: &PixelBuffer, transparent_below: u8) -> Option<IndexedFrame> {
    let mut lookup: HashMap<[u8; 3], u8> = HashMap::new();
    let mut palette = vec![0u8; 3];
    let mut indices = Vec::with_capacity(frame.canvas().pixel_count());

    for px in frame.pixels() {
        if px[3] < transparent_below {
            indices.push(TRANSPARENT_INDEX);
            continue;
        }
        let rgb = [px[0], px[1], px[2]];
        let idx = match lookup.get(&rgb) {
            Some(&idx) => idx,
            None => {
                if lookup.len() == MAX_OPAQUE_COLORS {
                    return None;
                }
                let idx = (lookup.len() + 1) as u8;
                lookup.insert(rgb, idx);
                palette.extend_from_slice(&rgb);
                idx
            }
        };
        indices.push(idx);
    }

    Some(IndexedFrame { palette, indices })
}

#[cfg(test)]
#[path = "../../tests/unit/encode/palette.rs"]
mod tests;
