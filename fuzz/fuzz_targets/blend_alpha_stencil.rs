#![no_main]

// This fuzz test validates the stencil masked alpha blend dispatcher by
// checking that it produces the same output as a scalar reference for
// arbitrary buffers and pixel counts, including stencil values on both sides
// of the 128 threshold.

use alpha_stencil_blend::blend_alpha_stencil;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct AlphaStencilBlendInput {
    pub color: Vec<u8>,
    pub opacity: Vec<u8>,
    pub stencil: Vec<u8>,
}

fuzz_target!(|input: AlphaStencilBlendInput| {
    // Blend as many whole pixels as all three buffers can cover
    let num_pixels = (input.color.len() / 4)
        .min(input.opacity.len() / 4)
        .min(input.stencil.len() / 4);

    let mut blended = input.color.clone();
    unsafe {
        blend_alpha_stencil(
            blended.as_mut_ptr(),
            input.opacity.as_ptr(),
            input.stencil.as_ptr(),
            num_pixels,
        );
    }

    // Scalar reference: alpha comes from the opacity green byte where the
    // stencil red byte is >= 128, and is 0 elsewhere
    let mut expected = input.color.clone();
    for ((pixel, src), mask) in expected
        .chunks_exact_mut(4)
        .zip(input.opacity.chunks_exact(4))
        .zip(input.stencil.chunks_exact(4))
        .take(num_pixels)
    {
        pixel[3] = if mask[0] >= 128 { src[1] } else { 0 };
    }

    // Bytes past num_pixels * 4 must be untouched
    assert_eq!(
        blended, expected,
        "blend_alpha_stencil doesn't match the scalar reference for {num_pixels} pixels"
    );
});
