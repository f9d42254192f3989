//! Performance benchmarks for the Payslip Engine.
//!
//! Covers each pipeline stage on its own and the HTTP compute endpoint:
//! - Payslip computation
//! - Salary slip rendering (PDF and text)
//! - Bank advice build and CSV rendering at batch sizes from 10 to 1000
//! - `POST /payslips/compute` through the router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use std::sync::Arc;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payslip_engine::api::{AppState, create_router};
use payslip_engine::calculation::{build_advice, compute};
use payslip_engine::config::ConfigLoader;
use payslip_engine::delivery::{Dispatcher, LoggingTransport};
use payslip_engine::models::{CompensationRecord, ComputedPayslip, Month, PayPeriod};
use payslip_engine::render::{SlipFormat, SlipRenderer, render_advice};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

fn june() -> PayPeriod {
    PayPeriod::new(Month::June, 2023)
}

/// Creates a record with four earnings and two deductions.
fn create_record(index: usize) -> CompensationRecord {
    CompensationRecord::new(
        format!("EMP-{:05}", index),
        format!("Employee {}", index),
        june(),
    )
    .with_role("Engineering", "Developer")
    .with_bank("HSBC Bank", format!("XXXX-{:04}", index % 10_000))
    .with_earning("basic", Decimal::new(350_000 + index as i64, 2))
    .with_earning("houseRent", Decimal::new(80_000, 2))
    .with_earning("cola", Decimal::new(40_000, 2))
    .with_earning("utilities", Decimal::new(30_000, 2))
    .with_deduction("tax", Decimal::new(50_000, 2))
    .with_deduction("pension", Decimal::new(12_550, 2))
}

fn create_payslips(count: usize) -> Vec<ComputedPayslip> {
    (0..count)
        .map(|i| compute(&create_record(i)).unwrap())
        .collect()
}

fn bench_compute(c: &mut Criterion) {
    let record = create_record(1);

    c.bench_function("compute_single", |b| {
        b.iter(|| black_box(compute(black_box(&record)).unwrap()))
    });
}

fn bench_render(c: &mut Criterion) {
    let renderer = SlipRenderer::default();
    let payslip = compute(&create_record(1)).unwrap();

    let mut group = c.benchmark_group("render_slip");
    for format in [SlipFormat::Pdf, SlipFormat::Text] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format.extension()),
            &format,
            |b, &format| b.iter(|| black_box(renderer.render(&payslip, format).unwrap())),
        );
    }
    group.finish();
}

fn bench_bank_advice(c: &mut Criterion) {
    let mut group = c.benchmark_group("bank_advice");

    for size in [10usize, 100, 1000] {
        let mut payslips = create_payslips(size);
        payslips.reverse();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &payslips, |b, payslips| {
            b.iter(|| {
                let batch = build_advice(payslips, june()).unwrap();
                black_box(render_advice(&batch))
            })
        });
    }
    group.finish();
}

fn bench_compute_endpoint(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let config = ConfigLoader::load("./config/paymaster").expect("Failed to load config");
    let state = AppState::new(config, Dispatcher::new(Arc::new(LoggingTransport)));
    let router = create_router(state);
    let body = serde_json::to_string(&create_record(1)).unwrap();

    c.bench_function("compute_endpoint", |b| {
        b.to_async(&rt).iter(|| async {
            let router = router.clone();
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/payslips/compute")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(
    benches,
    bench_compute,
    bench_render,
    bench_bank_advice,
    bench_compute_endpoint
);
criterion_main!(benches);
