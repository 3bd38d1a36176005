//! Performance benchmarks for the Tax Regime Engine.
//!
//! Covers the pure comparison, the comparison with its audit trace, report
//! layout, and the `/compare` endpoint end to end, singly and in batches.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use tax_regime_engine::api::{AppState, TaxInputsRequest, create_router};
use tax_regime_engine::calculation::{compare_regimes, compare_regimes_detailed};
use tax_regime_engine::config::{ConfigLoader, fy2024_25};
use tax_regime_engine::models::TaxInputs;
use tax_regime_engine::report::TaxReport;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/fy2024-25").expect("Failed to load config");
    AppState::new(config)
}

/// Inputs with every deduction populated, scaled by gross salary.
fn create_inputs(gross_salary: u64) -> TaxInputs {
    TaxInputs {
        gross_salary: Decimal::from(gross_salary),
        other_income: Decimal::from(50_000u64),
        basic_salary: Decimal::from(gross_salary / 2),
        section_80c: Decimal::from(150_000u64),
        section_80d: Decimal::from(25_000u64),
        section_80ccd_1b: Decimal::from(50_000u64),
        hra_exemption: Decimal::from(120_000u64),
        home_loan_interest: Decimal::from(200_000u64),
        employer_nps: Decimal::from(gross_salary / 20),
        ..TaxInputs::default()
    }
}

fn request_body(gross_salary: u64) -> String {
    let request = TaxInputsRequest::from(create_inputs(gross_salary));
    serde_json::to_string(&request).unwrap()
}

fn post_compare(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/compare")
        .header("Content-Type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Benchmark: bare comparison across income levels.
fn bench_compare_regimes(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare_regimes");

    for gross in [500_000u64, 1_200_000, 6_000_000, 60_000_000] {
        let inputs = create_inputs(gross);
        group.bench_with_input(BenchmarkId::new("gross", gross), &inputs, |b, inputs| {
            b.iter(|| black_box(compare_regimes(black_box(inputs))))
        });
    }

    group.finish();
}

/// Benchmark: comparison with deductions and audit trace.
fn bench_compare_detailed(c: &mut Criterion) {
    let inputs = create_inputs(1_200_000);
    let fiscal_year = fy2024_25::builtin();

    c.bench_function("compare_detailed", |b| {
        b.iter(|| black_box(compare_regimes_detailed(black_box(&inputs), fiscal_year)))
    });
}

/// Benchmark: report layout and rendering.
fn bench_report(c: &mut Criterion) {
    let inputs = create_inputs(1_200_000);
    let comparison = compare_regimes(&inputs);
    let date = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();

    c.bench_function("report_render", |b| {
        b.iter(|| {
            let report = TaxReport::build(&inputs, &comparison, date, fy2024_25::builtin());
            black_box(report.render())
        })
    });
}

/// Benchmark: single request through the router.
fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let router = create_router(create_test_state());
    let body = request_body(1_200_000);

    c.bench_function("single_request", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router.oneshot(post_compare(body.clone())).await.unwrap();
            black_box(response)
        })
    });
}

/// Benchmark: batch of 100 requests at varied incomes.
fn bench_batch_100(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let state = create_test_state();

    let requests: Vec<String> = (0..100u64)
        .map(|i| request_body(300_000 + i * 97_000))
        .collect();

    let mut group = c.benchmark_group("batch_processing");
    group.throughput(Throughput::Elements(100));

    group.bench_function("batch_100", |b| {
        b.to_async(&rt).iter(|| async {
            let mut results = Vec::with_capacity(100);
            for body in &requests {
                let router = create_router(state.clone());
                let response = router.oneshot(post_compare(body.clone())).await.unwrap();
                results.push(response);
            }
            black_box(results)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_compare_regimes,
    bench_compare_detailed,
    bench_report,
    bench_single_request,
    bench_batch_100,
);
criterion_main!(benches);
