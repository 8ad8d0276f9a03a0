use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;
use sc_codec::{LzBase64Codec, SaveCodec};

fn generate_save(moments: usize) -> String {
    let mut rng = rand::thread_rng();
    let history: Vec<serde_json::Value> = (0..moments)
        .map(|i| {
            serde_json::json!({
                "title": format!("Passage {i}"),
                "variables": {
                    "gold": rng.gen_range(0..1000),
                    "health": rng.gen_range(0..100),
                    "inventory": ["sword", "lantern", "rope"],
                },
                "pull": rng.gen::<u32>(),
            })
        })
        .collect();
    serde_json::json!({ "state": { "history": history, "index": moments.saturating_sub(1) } }).to_string()
}

fn bench_compress(c: &mut Criterion) {
    let codec = LzBase64Codec::new();
    for &moments in &[10usize, 100, 1000] {
        let save = generate_save(moments);
        c.bench_function(&format!("compress_save_{moments}_moments"), |b| {
            b.iter(|| black_box(codec.compress(black_box(save.as_bytes()))))
        });
    }
}

fn bench_inspect(c: &mut Criterion) {
    let codec = LzBase64Codec::new();
    for &moments in &[10usize, 100, 1000] {
        let wire = codec.compress(generate_save(moments).as_bytes()).unwrap();
        c.bench_function(&format!("inspect_save_{moments}_moments"), |b| {
            b.iter(|| black_box(codec.inspect(black_box(&wire))))
        });
    }
}

criterion_group!(benches, bench_compress, bench_inspect);
criterion_main!(benches);
