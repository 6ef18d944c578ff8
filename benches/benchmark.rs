use benchmark_simple::*;
use core::hash::BuildHasher;
use fnv::FnvBuildHasher;
use fxhash::FxBuildHasher;
use record_hash::*;
use xxhash_rust::xxh3::Xxh3Builder;

fn options() -> Options {
    Options {
        iterations: 100_000,
        warmup_iterations: 1_000,
        min_samples: 5,
        max_samples: 10,
        max_rsd: 1.0,
        ..Default::default()
    }
}

fn bench_digest<S: BuildHasher>(label: &str, fields: &S) {
    println!("\n* Record digest, {} field hasher\n", label);

    let bench = Bench::new();
    let options = &options();

    let mut size = 1;
    loop {
        let r = Record::new("x".repeat(size), size as i32);
        let res = bench.run(options, || record_digest_with(fields, &r));
        println!("{} bytes:\t{}", size, res.throughput(size as _));
        if size >= 4096 {
            break;
        }
        size *= 4;
    }
}

fn bench_map_lookup() {
    println!("\n* RecordMap lookup\n");

    let bench = Bench::new();
    let options = &options();

    for count in [10, 100, 1_000, 10_000] {
        let mut map = RecordMap::with_bucket_hint(DEFAULT_BUCKET_HINT);
        for i in 0..count {
            map.insert(Record::new(format!("PER_{}", i), i), i);
        }
        let probe = Record::new(format!("PER_{}", count / 2), count / 2);
        let res = bench.run(options, || map.get(&probe).copied());
        println!("{} entries:\t{}", count, res);
    }
}

fn main() {
    bench_digest("std", &FieldHashBuilder::default());
    bench_digest("FNV", &FnvBuildHasher::default());
    bench_digest("Fx", &FxBuildHasher::default());
    bench_digest("XXH3", &Xxh3Builder::new());
    bench_map_lookup();
}
