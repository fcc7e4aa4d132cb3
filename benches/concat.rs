use std::fs;

use criterion::{criterion_group, criterion_main, Criterion};

use filecat::{FileAggregator, InputFileList};

fn aggregate_benchmark(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let chunk = vec![b'x'; 64 * 1024];
    let paths: Vec<_> = (0..16)
        .map(|i| {
            let path = dir.path().join(format!("{}.txt", i));
            fs::write(&path, &chunk).unwrap();
            path
        })
        .collect();
    let inputs = InputFileList::validate(&paths).unwrap();
    let output = dir.path().join("out.txt");

    c.bench_function("aggregate_16x64k", |b| {
        b.iter(|| {
            let _ = fs::remove_file(&output);
            FileAggregator::new(&inputs, &output).run().unwrap();
        })
    });
}

criterion_group!(benches, aggregate_benchmark);
criterion_main!(benches);
