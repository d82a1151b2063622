//! Parser throughput benchmarks.
//!
//! Parsing runs inside a UI event handler on every paste, so it has to stay
//! well under a frame even for long forwarded e-mail threads.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `booking` | A minimal and a full booking confirmation |
//! | `extractors` | Date/time and passenger extraction on their own |
//! | `noisy_thread` | A booking buried in a long forwarded thread |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench parse_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dispatch_core::datetime::extract_date_time;
use dispatch_core::passenger::extract_passenger;
use dispatch_core::JobTextParser;
use std::hint::black_box;

const MINIMAL: &str = "\
Customer Account: Acme Travel
Pick Up Date and Time: 15/3/2024 9:05
Pick Up Location: Raffles Hotel
Drop Off Location: Changi Airport T1
";

const FULL: &str = "\
Customer Account: Acme   Travel Pte Ltd
Booking Reference: BK-2024-0315
Pick Up Date and Time: 15/3/2024 9:05
Pick Up Location: Marina Bay Sands Hotel Tower 1
Drop Off Location: Changi Airport T3
Type of Vehicle: COMBI
Passenger Details: *Mr John Tan*: +65 9123 4567
Number of Passengers: 3
Special Remarks: Meet at lobby with name board
Flight Details: SQ 321 departing 12:30
Extra Services: Child Seat, Wifi
Assigned To: Lim Transport
Driver: Ali Hassan
Vehicle: SGX1234A
";

// ---------------------------------------------------------------------------
// Whole bookings
// ---------------------------------------------------------------------------

fn booking_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking");
    let parser = JobTextParser::default();

    group.throughput(Throughput::Elements(1));

    for (name, text) in [("minimal", MINIMAL), ("full", FULL)] {
        group.bench_with_input(BenchmarkId::new(name, ""), &text, |b, text| {
            b.iter(|| parser.parse(black_box(text)))
        });
    }

    group.finish();
}

// ---------------------------------------------------------------------------
// Extractors
// ---------------------------------------------------------------------------

fn extractor_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("extractors");

    group.bench_function("date_time", |b| {
        b.iter(|| extract_date_time(black_box("15/3/2024 9:05 PM")))
    });

    group.bench_function("passenger_free_form", |b| {
        b.iter(|| extract_passenger(black_box("Jane Doe jane@x.com (65) 9123 4567")))
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Noisy thread
// ---------------------------------------------------------------------------

fn noisy_thread_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("noisy_thread");
    let parser = JobTextParser::default();

    // 500 lines of quoted reply chatter around one booking.
    let mut text = String::new();
    for i in 0..250usize {
        text.push_str(&format!("> On Mon, Jan {} at 10:0{} Ops wrote: noted\n", i % 28 + 1, i % 10));
        text.push_str("> thanks, will arrange\n");
    }
    text.push_str(FULL);

    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("500_lines", |b| b.iter(|| parser.parse(black_box(&text))));

    group.finish();
}

// ---------------------------------------------------------------------------
// Criterion registration
// ---------------------------------------------------------------------------

criterion_group!(parse_benches, booking_bench, extractor_bench, noisy_thread_bench);
criterion_main!(parse_benches);
