use crate::{
    foundation::{
        core::{PixelSurface, Rgba8},
        math::div_round_half_up,
    },
    pipeline::align::GridExtent,
};

/// One sampled block: its footprint on the working surface and its representative color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSample {
    pub x: u32,
    pub y: u32,
    /// At most `block_size`; smaller only for a trailing partial block.
    pub sample_width: u32,
    pub sample_height: u32,
    pub color: Rgba8,
}

/// Alpha-aware mean of the `w`×`h` region at `(x, y)`, clipped to the surface.
///
/// Samples with alpha 0 are left out of both the sums and the count, so transparent pixels do
/// not drag the mean towards black. Each channel is rounded half up. Returns `None` when no
/// sample in the region has alpha above 0.
pub fn sample_block(surface: &PixelSurface, x: u32, y: u32, w: u32, h: u32) -> Option<Rgba8> {
    let y_end = y.saturating_add(h).min(surface.height());
    let mut sums = [0u64; 4];
    let mut count = 0u64;

    for row in y..y_end {
        for px in surface.row_span(row, x, w).chunks_exact(4) {
            if px[3] == 0 {
                continue;
            }
            for (sum, &c) in sums.iter_mut().zip(px) {
                *sum += u64::from(c);
            }
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }
    let avg = sums.map(|s| div_round_half_up(s, count) as u8);
    Some(Rgba8::from_array(avg))
}

/// Walk the grid row-major (top to bottom, left to right) and sample every block.
///
/// Blocks whose samples are all transparent are not emitted.
#[tracing::instrument(skip(surface))]
pub fn sample_blocks(
    surface: &PixelSurface,
    extent: GridExtent,
    block_size: u32,
) -> Vec<BlockSample> {
    let (nx, ny) = extent.block_counts(block_size);
    let mut out = Vec::with_capacity((nx as usize) * (ny as usize));

    for y in (0..extent.loop_height).step_by(block_size as usize) {
        let sample_height = block_size.min(extent.loop_height - y);
        for x in (0..extent.loop_width).step_by(block_size as usize) {
            let sample_width = block_size.min(extent.loop_width - x);
            if sample_width == 0 || sample_height == 0 {
                continue;
            }
            let Some(color) = sample_block(surface, x, y, sample_width, sample_height) else {
                continue;
            };
            out.push(BlockSample {
                x,
                y,
                sample_width,
                sample_height,
                color,
            });
        }
    }

    tracing::debug!(emitted = out.len(), grid = nx * ny, "sampled blocks");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/sample.rs"]
mod tests;
