use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use fieldkit_cpu_fixed::PrimeFixed;
use fieldkit_cpu_ref::PrimeRef;
use fieldkit_hal::{
    api::{FieldNew, VectorAlloc, VectorArithmetic, VectorCombine},
    config::FieldConfig,
    layouts::{Backend, Field, Vector},
    test_suite::moduli::bn254_scalar,
};

#[derive(Clone, Copy)]
enum Op {
    Mul,
    Inv,
    Combine,
}

fn runner<B: Backend>(config: FieldConfig, n: usize, op: Op) -> impl FnMut()
where
    Field<B>: FieldNew<B> + VectorAlloc<B> + VectorArithmetic<B> + VectorCombine<B>,
{
    let field: Field<B> = Field::<B>::new(&bn254_scalar(), &config).unwrap();
    let a: Vector<B> = field.prng_vector(b"fieldkit.bench.a", n);
    let b: Vector<B> = field.prng_vector(b"fieldkit.bench.b", n);

    move || match op {
        Op::Mul => {
            black_box(field.mul_vector_elements(&a, &b).unwrap());
        }
        Op::Inv => {
            black_box(field.inv_vector_elements(&a).unwrap());
        }
        Op::Combine => {
            black_box(field.combine_vectors(&a, &b).unwrap());
        }
    }
}

pub fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector_bn254");

    for log_n in [10, 14] {
        let n: usize = 1 << log_n;
        for (name, op) in [("mul", Op::Mul), ("inv", Op::Inv), ("combine", Op::Combine)] {
            let id: BenchmarkId = BenchmarkId::new(format!("{name}/fixed"), n);
            let mut run = runner::<PrimeFixed<4>>(FieldConfig::optimized(), n, op);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut run));

            let id: BenchmarkId = BenchmarkId::new(format!("{name}/ref"), n);
            let mut run = runner::<PrimeRef>(FieldConfig::reference(), n, op);
            group.bench_with_input(id, &(), |b, _| b.iter(&mut run));
        }
    }

    group.finish();
}

criterion_group!(benches, bench_vector);
criterion_main!(benches);
