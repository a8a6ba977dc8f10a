use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use zero_mysqlx::diagnostic::Diagnostic;
use zero_mysqlx::protocol::primitive::{write_field_bytes, write_field_varint};
use zero_mysqlx::{NoticeAccumulator, Opts};

fn frame(frame_type: u64, payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    write_field_varint(&mut out, 1, frame_type);
    write_field_varint(&mut out, 2, 2);
    write_field_bytes(&mut out, 3, payload);
    out
}

fn rows_affected(rows: u64) -> Vec<u8> {
    let mut scalar = Vec::new();
    write_field_varint(&mut scalar, 1, 2);
    write_field_varint(&mut scalar, 3, rows);
    let mut out = Vec::new();
    write_field_varint(&mut out, 1, 4);
    write_field_bytes(&mut out, 2, &scalar);
    frame(3, &out)
}

fn document_ids(count: usize) -> Vec<u8> {
    let mut out = Vec::new();
    write_field_varint(&mut out, 1, 12);
    for i in 0..count {
        let id = format!("00005f0a0c5a{:016x}", i);
        let mut octets = Vec::new();
        write_field_bytes(&mut octets, 1, id.as_bytes());
        let mut scalar = Vec::new();
        write_field_varint(&mut scalar, 1, 4);
        write_field_bytes(&mut scalar, 5, &octets);
        write_field_bytes(&mut out, 2, &scalar);
    }
    frame(3, &out)
}

fn bench_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("accumulate");

    for &ids in &[1usize, 100, 10_000] {
        let frames = [rows_affected(ids as u64), document_ids(ids)];
        group.bench_with_input(BenchmarkId::new("document_ids", ids), &frames, |b, frames| {
            b.iter(|| {
                let mut acc = NoticeAccumulator::with_sink(Opts::default(), Vec::<Diagnostic>::new());
                for frame in frames {
                    acc.observe_frame(black_box(frame));
                }
                black_box(acc.finalize())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_accumulate);
criterion_main!(benches);
