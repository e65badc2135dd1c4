/// Region of the working surface the sampler walks; also the output surface size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridExtent {
    pub loop_width: u32,
    pub loop_height: u32,
    /// `true` when the extent was cropped to whole blocks.
    pub aligned: bool,
}

impl GridExtent {
    /// Blocks per axis, counting a trailing partial block.
    pub fn block_counts(&self, block_size: u32) -> (u32, u32) {
        (
            self.loop_width.div_ceil(block_size),
            self.loop_height.div_ceil(block_size),
        )
    }
}

/// Compute the sampling extent for a `width`×`height` working surface.
///
/// With `align_pixels` the extent shrinks to the largest whole-block rectangle anchored at the
/// origin; the remainder strips are never sampled. When a single block does not fit on either
/// axis alignment is skipped and the full surface is used.
///
/// `block_size` must be non-zero.
pub fn align_grid(width: u32, height: u32, block_size: u32, align_pixels: bool) -> GridExtent {
    let full = GridExtent {
        loop_width: width,
        loop_height: height,
        aligned: false,
    };
    if !align_pixels {
        return full;
    }

    let blocks_x = width / block_size;
    let blocks_y = height / block_size;
    if blocks_x == 0 || blocks_y == 0 {
        tracing::warn!(
            width,
            height,
            block_size,
            "block larger than working surface, alignment skipped"
        );
        return full;
    }

    GridExtent {
        loop_width: blocks_x * block_size,
        loop_height: blocks_y * block_size,
        aligned: true,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/align.rs"]
mod tests;
