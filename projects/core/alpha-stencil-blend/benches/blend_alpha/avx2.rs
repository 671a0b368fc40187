use alpha_stencil_blend::bench::alpha::blend_avx2;
use criterion::{black_box, BenchmarkId};
use safe_allocator_api::RawAlloc;

fn bench_avx2(b: &mut criterion::Bencher, color: &mut RawAlloc, opacity: &RawAlloc) {
    b.iter(|| unsafe {
        blend_avx2(
            black_box(color.as_mut_ptr()),
            black_box(opacity.as_ptr()),
            black_box(color.len() / 4),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    color: &mut RawAlloc,
    opacity: &RawAlloc,
    size: usize,
    important_benches_only: bool,
) {
    group.bench_with_input(BenchmarkId::new("avx2", size), &size, |b, _| {
        bench_avx2(b, color, opacity)
    });

    if !important_benches_only {}
}
