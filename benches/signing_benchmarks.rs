//! Signing Benchmarks
//!
//! Benchmarks for the hot path of every call:
//! - Canonical signing of a parameter set
//! - Fee-estimate list flattening
//! - Wire encoding

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;
use url::Url;

use mws_rust::types::fees_estimate_parameters;
use mws_rust::{sign_parameters, sign_query_url, FeeEstimateRequest, Parameters};

fn report_params() -> Parameters {
    [
        ("AWSAccessKeyId", "AKIDEXAMPLE"),
        ("Action", "GetReport"),
        ("ReportId", "123"),
        ("SellerId", "A1SELLER"),
        ("SignatureMethod", "HmacSHA256"),
        ("SignatureVersion", "2"),
        ("Timestamp", "2024-01-01T00:00:00Z"),
        ("Version", "2009-01-01"),
    ]
    .into_iter()
    .collect()
}

fn fee_requests(count: usize) -> Vec<FeeEstimateRequest> {
    (0..count)
        .map(|i| FeeEstimateRequest::new(format!("B{i:09}"), Decimal::new(999 + i as i64, 2)))
        .collect()
}

fn bench_signing(c: &mut Criterion) {
    let params = report_params();
    let url = Url::parse(
        "https://mws.amazonservices.com/Products/2011-10-01?AWSAccessKeyId=AKIDEXAMPLE&Action=ListMatchingProducts&Query=a,b&Timestamp=2024-01-01T00:00:00Z",
    )
    .unwrap();

    let mut group = c.benchmark_group("signing");

    group.bench_function("sign_parameters", |b| {
        b.iter(|| {
            black_box(sign_parameters(
                "POST",
                "mws.amazonservices.com",
                "/Reports/2009-01-01",
                black_box(&params),
                "secret-key",
            ))
        })
    });

    group.bench_function("sign_query_url", |b| {
        b.iter(|| black_box(sign_query_url(black_box(&url), "secret-key")))
    });

    group.finish();
}

fn bench_flattening(c: &mut Criterion) {
    let single = fee_requests(1);
    let batch = fee_requests(20);

    let mut group = c.benchmark_group("flattening");

    group.bench_function("fees_estimate_1", |b| {
        b.iter(|| black_box(fees_estimate_parameters(black_box(&single), "ATVPDKIKX0DER")))
    });

    group.bench_function("fees_estimate_20", |b| {
        b.iter(|| black_box(fees_estimate_parameters(black_box(&batch), "ATVPDKIKX0DER")))
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let params = fees_estimate_parameters(&fee_requests(20), "ATVPDKIKX0DER");

    c.bench_function("form_encode_240_pairs", |b| {
        b.iter(|| black_box(params.to_form_encoded()))
    });
}

criterion_group!(benches, bench_signing, bench_flattening, bench_encoding);

criterion_main!(benches);
