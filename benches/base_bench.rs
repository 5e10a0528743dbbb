use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode, Throughput};

use phone_forward::ForwardingBase;

const RULE_COUNT: u64 = 2_000;

fn digits_of(mut n: u64, width: usize) -> String {
    let mut out = vec![b'0'; width];
    for slot in out.iter_mut().rev() {
        *slot = b'0' + (n % 10) as u8;
        n /= 10;
    }
    String::from_utf8(out).unwrap()
}

fn populated_base(rule_count: u64) -> ForwardingBase {
    let mut base = ForwardingBase::new();
    for i in 0..rule_count {
        let src = digits_of(i, 6);
        let dst = digits_of(rule_count - i, 5);
        base.add(&src, &dst);
    }
    base
}

fn bench(c: &mut Criterion) {
    let base = populated_base(RULE_COUNT);

    let mut group = c.benchmark_group("base insertion");
    group.sampling_mode(SamplingMode::Auto);
    group.throughput(Throughput::Elements(RULE_COUNT));
    group.bench_with_input(
        BenchmarkId::from_parameter(RULE_COUNT),
        &RULE_COUNT,
        |b, &rule_count| {
            b.iter(|| populated_base(rule_count));
        },
    );
    group.finish();

    let mut group = c.benchmark_group("base get");
    group.throughput(Throughput::Elements(RULE_COUNT));
    group.bench_function("longest-prefix lookup", |b| {
        b.iter(|| {
            for i in 0..RULE_COUNT {
                let query = digits_of(i, 6) + "999";
                base.get(&query);
            }
        });
    });
    group.finish();

    let mut group = c.benchmark_group("base reverse");
    group.bench_function("reverse lookup", |b| {
        b.iter(|| {
            for i in 0..RULE_COUNT {
                base.reverse(&digits_of(RULE_COUNT - i, 5));
            }
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(20);
    targets = bench
}
criterion_main!(benches);
