#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use seq_contrast::{FixedSequence, GrowByHalf, GrowExact, GrowableSequence};

fn standard_compare(c: &mut Criterion) {
    const SMALL_COUNT: i32 = 100;
    const LARGE_COUNT: i32 = 100_000;

    for count in [SMALL_COUNT, 1000, LARGE_COUNT] {
        c.bench_function(&format!("fixed(5) wrapping write {} values", count), |b| {
            let mut arr = FixedSequence::from_array([1, 2, 3, 4, 5]);
            b.iter(|| {
                for value in 0..count {
                    arr.write_wrapping(value as usize, black_box(value));
                }
            });
        });

        c.bench_function(&format!("growable push {} values", count), |b| {
            b.iter(|| {
                let mut seq = GrowableSequence::<i32>::new();
                for value in 0..count {
                    seq.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("growable by half push {} values", count), |b| {
            b.iter(|| {
                let mut seq = GrowableSequence::<i32, GrowByHalf>::new();
                for value in 0..count {
                    seq.push(black_box(value));
                }
            });
        });

        if count == SMALL_COUNT {
            c.bench_function(&format!("growable exact push {} values", count), |b| {
                b.iter(|| {
                    let mut seq = GrowableSequence::<i32, GrowExact>::new();
                    for value in 0..count {
                        seq.push(black_box(value));
                    }
                });
            });
        }

        c.bench_function(
            &format!("growable with_capacity({0}) push {0} values", count),
            |b| {
                b.iter(|| {
                    let mut seq = GrowableSequence::<i32>::with_capacity(count as usize);
                    for value in 0..count {
                        seq.push(black_box(value));
                    }
                });
            },
        );

        c.bench_function(&format!("stdvec push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<i32>::new();
                for value in 0..count {
                    buf.push(black_box(value));
                }
            });
        });

        c.bench_function(&format!("stdvec boxed push {} values", count), |b| {
            b.iter(|| {
                let mut buf = Vec::<Box<i32>>::new();
                for value in 0..count {
                    buf.push(Box::new(black_box(value)));
                }
            });
        });

        c.bench_function(&format!("growable extend {} values", count), |b| {
            b.iter(|| {
                let mut seq = GrowableSequence::<i32>::new();
                seq.extend(black_box(0..count));
            });
        });
    }
}

criterion_group!(benches, standard_compare);
criterion_main!(benches);
