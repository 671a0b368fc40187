use alpha_stencil_blend::bench::stencil::{u32, u32_unroll_4};
use criterion::{black_box, BenchmarkId};
use safe_allocator_api::RawAlloc;

fn bench_u32_unroll_4(b: &mut criterion::Bencher, color: &mut RawAlloc, stencil: &RawAlloc) {
    b.iter(|| unsafe {
        u32_unroll_4(
            black_box(color.as_mut_ptr()),
            black_box(stencil.as_ptr()),
            black_box(color.len() / 4),
        )
    });
}

fn bench_u32(b: &mut criterion::Bencher, color: &mut RawAlloc, stencil: &RawAlloc) {
    b.iter(|| unsafe {
        u32(
            black_box(color.as_mut_ptr()),
            black_box(stencil.as_ptr()),
            black_box(color.len() / 4),
        )
    });
}

pub(crate) fn run_benchmarks(
    group: &mut criterion::BenchmarkGroup<'_, criterion::measurement::WallTime>,
    color: &mut RawAlloc,
    stencil: &RawAlloc,
    size: usize,
    important_benches_only: bool,
) {
    group.bench_with_input(BenchmarkId::new("u32 unroll_4", size), &size, |b, _| {
        bench_u32_unroll_4(b, color, stencil)
    });

    if !important_benches_only {
        group.bench_with_input(BenchmarkId::new("u32", size), &size, |b, _| {
            bench_u32(b, color, stencil)
        });
    }
}
