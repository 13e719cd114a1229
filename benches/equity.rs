use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_poker_equity::core::{CardBitSet, parse_cards};
use rs_poker_equity::equity::{
    BoardCategory, Combo, OutcomeTable, OutcomeTableStore, RngEquitySimulationBuilder, Sampler,
    SamplerConfig, UniformCategory, parse_ranges,
};

const RANGES: &str = "AC,AD,KC,KD,QC,QD;JH,JS,TH,TS;7C,8C";

/// A store whose one table holds every combo the seeded sampler deals, so
/// lookups hit as often as they miss.
fn seeded_store(trials: usize) -> OutcomeTableStore {
    let ranges = parse_ranges(RANGES).unwrap();
    let sampler = Sampler::new(SamplerConfig::default(), CardBitSet::new()).unwrap();
    let mut rng = StdRng::seed_from_u64(7);
    let mut table = OutcomeTable::new();
    for i in 0..trials {
        for range in &ranges {
            let sample = sampler.sample(range, &mut rng).unwrap();
            if i % 2 == 0 {
                table.insert(sample.combos[0]);
            }
        }
    }
    OutcomeTableStore::new().with_table("all", table)
}

fn bench_sample(c: &mut Criterion) {
    let ranges = parse_ranges(RANGES).unwrap();
    let dead = CardBitSet::try_from_cards(parse_cards("2S,3S").unwrap()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let mut group = c.benchmark_group("sample");
    for candidates in [1, 10, 50] {
        let sampler = Sampler::new(
            SamplerConfig {
                board_candidates: candidates,
            },
            dead,
        )
        .unwrap();
        group.bench_with_input(
            BenchmarkId::from_parameter(candidates),
            &sampler,
            |b, sampler| b.iter(|| sampler.sample(&ranges[0], &mut rng).unwrap()),
        );
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let store = seeded_store(10_000);
    let category = BoardCategory::from("all");
    let miss = Combo::new_from_str("2C,3D,4H,5S,7C,8D,9H").unwrap();

    c.bench_function("Outcome table lookup miss", move |b| {
        b.iter(|| store.lookup(&category, &miss).unwrap())
    });
}

fn bench_run(c: &mut Criterion) {
    let store = std::sync::Arc::new(seeded_store(1_000));
    let mut group = c.benchmark_group("equity_run");
    for trials in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(trials), &trials, |b, trials| {
            b.iter(|| {
                RngEquitySimulationBuilder::default()
                    .ranges(parse_ranges(RANGES).unwrap())
                    .trials(*trials)
                    .outcome_tables(store.clone())
                    .categorizer(UniformCategory(BoardCategory::from("all")))
                    .rng(StdRng::seed_from_u64(3))
                    .build()
                    .unwrap()
                    .run()
                    .unwrap()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sample, bench_lookup, bench_run);
criterion_main!(benches);
