use criterion::{Criterion, Throughput};
use libhttp::http::Assembler;
use libhttp::stream::{MemorySink, Sink};
use rand::Rng;

const BODY_LEN: usize = 16 * 1024;

pub fn bench_assemble_small(c: &mut Criterion) {
    let wire = b"HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello";
    let mut group = c.benchmark_group("assemble");
    group.throughput(Throughput::Bytes(wire.len() as u64));
    group.bench_function("small_response", |b| {
        b.iter(|| {
            let mut assembler = Assembler::new(MemorySink::<64>::new());
            assembler.push(wire).unwrap();
            assembler.finish().unwrap()
        })
    });
    group.finish();
}

pub fn bench_assemble_chunked_body(c: &mut Criterion) {
    let header = b"HTTP/1.1 200 OK\r\nContent-Length: 16384\r\n\r\n";
    let mut payload = vec![0u8; BODY_LEN];
    rand::thread_rng().fill(&mut payload[..]);

    let mut group = c.benchmark_group("assemble");
    group.throughput(Throughput::Bytes((header.len() + BODY_LEN) as u64));
    group.bench_function("chunked_body", |b| {
        b.iter(|| {
            let mut assembler = Assembler::new(MemorySink::<BODY_LEN>::new());
            assembler.push(header).unwrap();
            for chunk in payload.chunks(1024) {
                assembler.push(chunk).unwrap();
            }
            assembler.finish().unwrap()
        })
    });
    group.finish();
}

pub fn bench_memory_sink_write(c: &mut Criterion) {
    let mut chunk = [0u8; 1024];
    rand::thread_rng().fill(&mut chunk[..]);

    let mut group = c.benchmark_group("sink");
    group.throughput(Throughput::Bytes(BODY_LEN as u64));
    group.bench_function("memory_write", |b| {
        b.iter(|| {
            let mut sink = MemorySink::<BODY_LEN>::new();
            for _ in 0..(BODY_LEN / chunk.len()) {
                sink.write(&chunk).unwrap();
            }
            sink.written()
        })
    });
    group.finish();
}
