//! Separable box blur over a premultiplied RGBA pixmap. Three passes
//! approximate a gaussian.

use tiny_skia::Pixmap;

const PASSES: usize = 3;

pub fn box_blur(pixmap: &mut Pixmap, radius: u32) {
    if radius == 0 {
        return;
    }
    let w = pixmap.width() as usize;
    let h = pixmap.height() as usize;
    let r = radius as usize;

    let data = pixmap.data_mut();
    let mut tmp = vec![0u8; data.len()];

    for _ in 0..PASSES {
        blur_pass(data, &mut tmp, w, h, r, true);
        blur_pass(&tmp, data, w, h, r, false);
    }
}

// Pixels outside the image count as fully transparent, so blobs fade at the
// border instead of smearing. Averaging premultiplied channels keeps every
// color channel <= alpha.
fn blur_pass(src: &[u8], dst: &mut [u8], w: usize, h: usize, r: usize, horizontal: bool) {
    let (lines, len) = if horizontal { (h, w) } else { (w, h) };
    let idx = |line: usize, i: usize| {
        if horizontal {
            (line * w + i) * 4
        } else {
            (i * w + line) * 4
        }
    };
    let window = (2 * r + 1) as u32;

    for line in 0..lines {
        let mut sum = [0u32; 4];
        for i in 0..=r.min(len - 1) {
            add_px(&mut sum, &src[idx(line, i)..idx(line, i) + 4]);
        }

        for i in 0..len {
            let p = idx(line, i);
            for (out, s) in dst[p..p + 4].iter_mut().zip(sum) {
                *out = ((s + window / 2) / window) as u8;
            }

            if i + r + 1 < len {
                let q = idx(line, i + r + 1);
                add_px(&mut sum, &src[q..q + 4]);
            }
            if i >= r {
                let q = idx(line, i - r);
                for (s, v) in sum.iter_mut().zip(&src[q..q + 4]) {
                    *s -= u32::from(*v);
                }
            }
        }
    }
}

fn add_px(sum: &mut [u32; 4], px: &[u8]) {
    for (s, v) in sum.iter_mut().zip(px) {
        *s += u32::from(*v);
    }
}
