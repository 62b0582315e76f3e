//! Benchmarks for per-file collection
//!
//! Run with: cargo bench --bench collect_benchmarks

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use intentions_render::features::parsing::TreeSitterParser;
use intentions_render::{collect_source, render_report, RenderConfig, Report};

/// Generate a module with N decorated test functions, three markers each
fn generate_free_tests(count: usize) -> String {
    (0..count)
        .map(|i| {
            format!(
                r#"@describe(domain='domain_{d}', component='component', layer='service')
def test_case_{i}():
    with when('Precondition {i}'):
        pass

    with case('Action {i}'):
        pass

    with expect('Expectation {i}'):
        assert True

"#,
                d = i % 5
            )
        })
        .collect()
}

/// Generate N decorated classes with M marked methods each
fn generate_test_classes(count: usize, methods_per_class: usize) -> String {
    (0..count)
        .map(|i| {
            let methods: String = (0..methods_per_class)
                .map(|j| {
                    format!(
                        r#"    def test_method_{j}(self):
        with case('Method {j}'):
            pass

"#
                    )
                })
                .collect();

            format!(
                "@describe(domain='classes', component='class_{i}', layer='api')\nclass TestClass{i}:\n{methods}"
            )
        })
        .collect()
}

fn collect(source: &str, config: &RenderConfig) -> Report {
    let mut report = Report::new();
    let _ = collect_source(
        &mut report,
        &TreeSitterParser::python(),
        source,
        "test_bench.py",
        config,
    );
    report
}

/// Benchmark collecting free test functions
fn bench_collect_functions(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_functions");
    let config = RenderConfig::default();

    for size in [10, 50, 100, 500].iter() {
        let source = generate_free_tests(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &source, |b, src| {
            b.iter(|| collect(black_box(src), &config));
        });
    }

    group.finish();
}

/// Benchmark collecting class methods
fn bench_collect_classes(c: &mut Criterion) {
    let mut group = c.benchmark_group("collect_classes");
    let config = RenderConfig::default();

    for (class_count, methods_per_class) in [(10, 5), (50, 5), (10, 20)].iter() {
        let source = generate_test_classes(*class_count, *methods_per_class);

        group.throughput(Throughput::Elements((class_count * methods_per_class) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{class_count}x{methods_per_class}")),
            &source,
            |b, src| {
                b.iter(|| collect(black_box(src), &config));
            },
        );
    }

    group.finish();
}

/// Benchmark rendering a collected report to JSON
fn bench_render_report(c: &mut Criterion) {
    let report = collect(&generate_free_tests(500), &RenderConfig::default());

    c.bench_function("render_report_500", |b| {
        b.iter(|| render_report(black_box(&report)));
    });
}

criterion_group!(
    benches,
    bench_collect_functions,
    bench_collect_classes,
    bench_render_report
);
criterion_main!(benches);
