use alpha_stencil_blend::bench::alpha_stencil::blend_sse2;
use criterion::{black_box, BenchmarkId};
use safe_allocator_api::RawAlloc;

fn bench_sse2(
    b: &mut criterion::Bencher,
    color: &mut RawAlloc,
    opacity: &RawAlloc,
    stencil: &RawAlloc,
) {
    b.iter(|| unsafe {
        blend_sse2(
            black_box(color.as_mut_ptr()),
            black_box(opacity.as_ptr()),
            black_box(stencil.as_ptr()),
            black_box(color.len() / 4),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    color: &mut RawAlloc,
    opacity: &RawAlloc,
    stencil: &RawAlloc,
    size: usize,
    important_benches_only: bool,
) {
    group.bench_with_input(BenchmarkId::new("sse2", size), &size, |b, _| {
        bench_sse2(b, color, opacity, stencil)
    });

    if !important_benches_only {}
}
