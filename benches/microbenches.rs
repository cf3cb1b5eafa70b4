//! Criterion microbenches for sensorcap's per-record hot paths.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure:
//! - file name parsing (parse_image_filename)
//! - caption generation (generate_caption)
//! - caption table CSV parsing (from_caption_csv_str)

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;

use sensorcap::caption::generate_caption;
use sensorcap::dataset::io_caption_csv::from_caption_csv_str;
use sensorcap::filename::parse_image_filename;

const FILE_NAMES: [&str; 6] = [
    "cegr02003_0001_12.png",
    "i1co02002_0002_7.png",
    "cegr01939_0014_1024.png",
    "cegr02003_0001_12.jpg",
    "thumbnail.png",
    "i1co01926_0001_3.png",
];

const CAPTION_CSV: &str = "Image Path,Sensor Code,Scenario Code,Look Number Code,Description
data/cegr02003_0001_1.png,cegr,02003,0001,\"Captured with a Mid-Wave Infrared (MWIR) sensor, the imagery depicts Pickup driving in a circle during the day at 1000 meters.\"
data/i1co02002_0001_1.png,i1co,02002,0001,\"Captured with a Visible sensor, the imagery depicts Humans moving in figure-8 at slow pace during the day at 500 meters.\"
data/cegr01923_0010_4.png,cegr,01923,0010,\"Captured with a Mid-Wave Infrared (MWIR) sensor, the imagery depicts T62 – Main Battle Tank driving in a circle at night at 1000 meters.\"
";

fn bench_parse_filename(c: &mut Criterion) {
    let mut group = c.benchmark_group("filename");
    group.throughput(Throughput::Elements(FILE_NAMES.len() as u64));

    group.bench_function("parse_image_filename", |b| {
        b.iter(|| {
            for name in FILE_NAMES {
                black_box(parse_image_filename(black_box(name)));
            }
        })
    });

    group.finish();
}

fn bench_generate_caption(c: &mut Criterion) {
    let mut group = c.benchmark_group("caption");

    group.bench_function("vehicle", |b| {
        b.iter(|| generate_caption(black_box("cegr"), black_box("02003"), black_box("0001")).unwrap())
    });
    group.bench_function("human", |b| {
        b.iter(|| generate_caption(black_box("i1co"), black_box("02002"), black_box("0002")).unwrap())
    });

    group.finish();
}

fn bench_caption_csv_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("caption_csv");
    group.throughput(Throughput::Bytes(CAPTION_CSV.len() as u64));

    group.bench_function("from_caption_csv_str", |b| {
        b.iter(|| {
            let records = from_caption_csv_str(black_box(CAPTION_CSV)).unwrap();
            black_box(records)
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_filename,
    bench_generate_caption,
    bench_caption_csv_parse
);
criterion_main!(benches);
