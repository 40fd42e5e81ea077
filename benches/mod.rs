use criterion::{criterion_group, criterion_main};

mod http;

criterion_group!(
    benches,
    http::response::bench_assemble_small,
    http::response::bench_assemble_chunked_body,
    http::response::bench_memory_sink_write
);
criterion_main!(benches);
