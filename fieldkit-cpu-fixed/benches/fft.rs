use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_bigint::BigUint;

use fieldkit_cpu_fixed::PrimeFixed;
use fieldkit_cpu_ref::PrimeRef;
use fieldkit_hal::{
    api::{FieldNew, PolyEvaluate, PolyInterpolate, RootsOfUnity, VectorAlloc},
    config::FieldConfig,
    layouts::{Backend, Field, Vector},
    test_suite::moduli::{bn254_scalar, goldilocks},
};

fn runner<B: Backend>(field: &'static Field<B>, n: usize, inverse: bool) -> impl FnMut()
where
    Field<B>: PolyEvaluate<B> + PolyInterpolate<B> + RootsOfUnity<B> + VectorAlloc<B>,
{
    let g: BigUint = field.get_root_of_unity(n as u64).unwrap_or_else(|e| panic!("{e}"));
    let roots: Vector<B> = field.get_power_series(g, n);
    let values: Vector<B> = field.prng_vector(b"fieldkit.bench.fft", n);

    move || {
        let out: Vector<B> = if inverse {
            field.interpolate_roots(&roots, &values).unwrap()
        } else {
            field.eval_poly_at_roots(&values, &roots).unwrap()
        };
        black_box(out);
    }
}

fn leak<B: Backend>(modulus: &BigUint, config: &FieldConfig) -> &'static Field<B>
where
    Field<B>: FieldNew<B>,
{
    Box::leak(Box::new(Field::<B>::new(modulus, config).unwrap()))
}

pub fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("fft");

    let goldilocks_fixed: &'static Field<PrimeFixed<2>> = leak(&goldilocks(), &FieldConfig::optimized());
    let bn254_fixed: &'static Field<PrimeFixed<4>> = leak(&bn254_scalar(), &FieldConfig::optimized());
    let bn254_ref: &'static Field<PrimeRef> = leak(&bn254_scalar(), &FieldConfig::reference());

    for log_n in [10, 12, 14] {
        let n: usize = 1 << log_n;
        for (name, inverse) in [("eval", false), ("interpolate", true)] {
            let id: BenchmarkId = BenchmarkId::new(format!("goldilocks/{name}/fixed"), n);
            let mut run = runner(goldilocks_fixed, n, inverse);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut run));

            let id: BenchmarkId = BenchmarkId::new(format!("bn254/{name}/fixed"), n);
            let mut run = runner(bn254_fixed, n, inverse);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut run));
        }

        if log_n <= 12 {
            let id: BenchmarkId = BenchmarkId::new("bn254/eval/ref", n);
            let mut run = runner(bn254_ref, n, false);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut run));
        }
    }

    group.finish();
}

criterion_group!(benches, bench_fft);
criterion_main!(benches);
