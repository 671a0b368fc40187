#![no_main]

// This fuzz test validates the alpha blend dispatcher by checking that it
// produces the same output as a scalar reference for arbitrary buffers and
// pixel counts, and that it never writes outside the processed range.

use alpha_stencil_blend::blend_alpha;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct AlphaBlendInput {
    pub color: Vec<u8>,
    pub opacity: Vec<u8>,
}

fuzz_target!(|input: AlphaBlendInput| {
    // Blend as many whole pixels as both buffers can cover
    let num_pixels = (input.color.len() / 4).min(input.opacity.len() / 4);

    let mut blended = input.color.clone();
    unsafe {
        blend_alpha(blended.as_mut_ptr(), input.opacity.as_ptr(), num_pixels);
    }

    // Scalar reference: each alpha byte comes from the opacity green byte
    let mut expected = input.color.clone();
    for (pixel, src) in expected
        .chunks_exact_mut(4)
        .zip(input.opacity.chunks_exact(4))
        .take(num_pixels)
    {
        pixel[3] = src[1];
    }

    // Bytes past num_pixels * 4 must be untouched
    assert_eq!(
        blended, expected,
        "blend_alpha doesn't match the scalar reference for {num_pixels} pixels"
    );
});
