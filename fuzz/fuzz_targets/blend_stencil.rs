#![no_main]

// This fuzz test validates the stencil only blend dispatcher by checking that
// it produces the same output as a scalar reference for arbitrary buffers and
// pixel counts.

use alpha_stencil_blend::blend_stencil;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct StencilBlendInput {
    pub color: Vec<u8>,
    pub stencil: Vec<u8>,
}

fuzz_target!(|input: StencilBlendInput| {
    // Blend as many whole pixels as both buffers can cover
    let num_pixels = (input.color.len() / 4).min(input.stencil.len() / 4);

    let mut blended = input.color.clone();
    unsafe {
        blend_stencil(blended.as_mut_ptr(), input.stencil.as_ptr(), num_pixels);
    }

    // Scalar reference: alpha becomes 255 where the stencil red byte is
    // >= 128, and 0 elsewhere
    let mut expected = input.color.clone();
    for (pixel, mask) in expected
        .chunks_exact_mut(4)
        .zip(input.stencil.chunks_exact(4))
        .take(num_pixels)
    {
        pixel[3] = if mask[0] >= 128 { 255 } else { 0 };
    }

    // Bytes past num_pixels * 4 must be untouched
    assert_eq!(
        blended, expected,
        "blend_stencil doesn't match the scalar reference for {num_pixels} pixels"
    );
});
