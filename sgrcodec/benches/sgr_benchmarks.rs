//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for run scanning and text building

use ansirun_sgrcodec::{AnsiTextBuilder, EscapeCode, StyleState, scan_runs};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

// Benchmark scanning text with no escape sequences at all
fn bench_scan_plain_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_plain_text");

    for size in [10, 100, 1000, 10000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let text = "A".repeat(size);

            b.iter(|| {
                let count = scan_runs(black_box(text.as_str()), StyleState::default())
                    .filter_map(|run| run.ok())
                    .count();
                black_box(count);
            });
        });
    }
    group.finish();
}

// Benchmark scanning text where every word carries a style change
fn bench_scan_styled_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan_styled_text");

    for words in [10, 100, 1000].iter() {
        let mut builder = AnsiTextBuilder::new();
        for index in 0..*words {
            let code = EscapeCode::ALL[index % EscapeCode::ALL.len()];
            builder.esc(code).text("word").space();
        }
        let text = builder.build();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &text, |b, text| {
            b.iter(|| {
                let count = scan_runs(black_box(text.as_str()), StyleState::default())
                    .filter_map(|run| run.ok())
                    .count();
                black_box(count);
            });
        });
    }
    group.finish();
}

// Benchmark fluent encoding
fn bench_build_styled_text(c: &mut Criterion) {
    c.bench_function("build_styled_text", |b| {
        b.iter(|| {
            let mut builder = AnsiTextBuilder::new();
            for _ in 0..100 {
                builder
                    .bold()
                    .red()
                    .text(black_box("error"))
                    .reset()
                    .space()
                    .text(black_box("detail"))
                    .newline();
            }
            black_box(builder.build());
        });
    });
}

criterion_group!(
    benches,
    bench_scan_plain_text,
    bench_scan_styled_text,
    bench_build_styled_text
);
criterion_main!(benches);
