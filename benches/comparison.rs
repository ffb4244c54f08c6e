use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use blasgen::Complex;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn real_vec(n: usize) -> Vec<f64> {
    (0..n).map(|i| ((i * 7 + 3) % 11) as f64 * 0.25 - 1.0).collect()
}

fn complex_vec(n: usize) -> Vec<Complex<f64>> {
    (0..n)
        .map(|i| Complex::new(((i * 5 + 1) % 9) as f64 * 0.5, ((i * 3 + 2) % 7) as f64 - 3.0))
        .collect()
}

// ---------------------------------------------------------------------------
// nrm2
// ---------------------------------------------------------------------------

fn nrm2_f64(c: &mut Criterion) {
    let mut g = c.benchmark_group("nrm2_f64");

    for n in [16, 256, 4096] {
        let x = real_vec(n);
        let nx = nalgebra::DVector::from_vec(x.clone());

        g.bench_with_input(BenchmarkId::new("blasgen", n), &n, |b, &n| {
            b.iter(|| blasgen::nrm2(n, std::hint::black_box(&x), 1).unwrap())
        });

        g.bench_with_input(BenchmarkId::new("nalgebra", n), &n, |b, _| {
            b.iter(|| std::hint::black_box(&nx).norm())
        });
    }

    g.finish();
}

fn nrm2_strided(c: &mut Criterion) {
    let mut g = c.benchmark_group("nrm2_strided");
    let n = 1024;
    let x = real_vec(n * 4);

    for incx in [1_isize, 2, 4] {
        g.bench_with_input(BenchmarkId::new("blasgen", incx), &incx, |b, &incx| {
            b.iter(|| blasgen::nrm2(n, std::hint::black_box(&x), incx).unwrap())
        });
    }

    g.finish();
}

// ---------------------------------------------------------------------------
// her
// ---------------------------------------------------------------------------

fn her_f64(c: &mut Criterion) {
    let mut g = c.benchmark_group("her_f64");

    for n in [8, 64, 256] {
        let x = real_vec(n);
        let mut a = vec![0.0_f64; n * n];
        let nx = nalgebra::DVector::from_vec(x.clone());
        let mut na = nalgebra::DMatrix::<f64>::zeros(n, n);

        g.bench_with_input(BenchmarkId::new("blasgen_upper", n), &n, |b, &n| {
            b.iter(|| {
                blasgen::her(
                    blasgen::Layout::ColMajor,
                    blasgen::Uplo::Upper,
                    n,
                    1e-3,
                    std::hint::black_box(&x),
                    1,
                    &mut a,
                    n,
                )
                .unwrap()
            })
        });

        // full rank-1 update, both triangles
        g.bench_with_input(BenchmarkId::new("nalgebra_ger", n), &n, |b, _| {
            b.iter(|| na.ger(1e-3, std::hint::black_box(&nx), &nx, 1.0))
        });
    }

    g.finish();
}

fn her_complex(c: &mut Criterion) {
    let mut g = c.benchmark_group("her_c64");

    for n in [8, 64, 256] {
        let x = complex_vec(n);
        let mut a = vec![Complex::new(0.0_f64, 0.0); n * n];

        for uplo in [blasgen::Uplo::Upper, blasgen::Uplo::Lower] {
            g.bench_with_input(BenchmarkId::new(format!("blasgen_{uplo}"), n), &n, |b, &n| {
                b.iter(|| {
                    blasgen::her(
                        blasgen::Layout::ColMajor,
                        uplo,
                        n,
                        1e-3,
                        std::hint::black_box(&x),
                        1,
                        &mut a,
                        n,
                    )
                    .unwrap()
                })
            });
        }

        g.bench_with_input(BenchmarkId::new("blasgen_strided", n), &n, |b, &n| {
            let xs: Vec<Complex<f64>> = x.iter().flat_map(|&v| [v, Complex::new(0.0, 0.0)]).collect();
            b.iter(|| {
                blasgen::her(
                    blasgen::Layout::ColMajor,
                    blasgen::Uplo::Upper,
                    n,
                    1e-3,
                    std::hint::black_box(&xs),
                    -2,
                    &mut a,
                    n,
                )
                .unwrap()
            })
        });
    }

    g.finish();
}

criterion_group!(benches, nrm2_f64, nrm2_strided, her_f64, her_complex);
criterion_main!(benches);
