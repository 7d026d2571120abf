criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        growing_flush_table,
        growing_pattern_table,
        growing_straight_table,
        growing_all_tables,
        exhausting_suit_sequences,
        classifying_random_rank_mask,
}

fn growing_flush_table(c: &mut criterion::Criterion) {
    c.bench_function("grow the flush table", |b| b.iter(|| FlushTable::grow()));
}

fn growing_pattern_table(c: &mut criterion::Criterion) {
    c.bench_function("grow the pattern table", |b| {
        b.iter(|| PatternTable::grow())
    });
}

fn growing_straight_table(c: &mut criterion::Criterion) {
    c.bench_function("grow the straight table", |b| {
        b.iter(|| StraightTable::grow())
    });
}

fn growing_all_tables(c: &mut criterion::Criterion) {
    c.bench_function("grow every table concurrently", |b| {
        b.iter(|| Tables::grow())
    });
}

fn exhausting_suit_sequences(c: &mut criterion::Criterion) {
    c.bench_function("exhaust all 3-7 card suit sequences", |b| {
        b.iter(|| SuitSequences::descending().count())
    });
}

fn classifying_random_rank_mask(c: &mut criterion::Criterion) {
    c.bench_function("classify a random RankMask", |b| {
        let mask = RankMask::random();
        b.iter(|| Evaluator::from(mask).find_draw())
    });
}

use rbp_tables::Arbitrary;
use rbp_tables::cards::*;
use rbp_tables::tables::*;
