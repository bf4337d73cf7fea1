//! Pipeline performance benchmarks.
//!
//! Measures loading, cleaning, summarizing and ranking on generated movie data.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use std::io::Write;
use tabsift::analysis::{Aggregator, CleaningSummary, DatasetInfo};
use tabsift::input::parse_delimited;
use tabsift::recommend::Recommender;
use tabsift::{Cleaner, RecommendQuery, Sift};
use tempfile::NamedTempFile;

/// Generate movie-like CSV with duplicates and gaps.
fn generate_movie_data(rows: usize) -> String {
    let mut data = String::new();
    data.push_str("title,imdb_rating,vote_count,original_language,genres,release_date,overview\n");

    let languages = ["en", "hi", "Telugu", "ta", "ml", "kn", "fr"];
    let genres = ["Action, Drama", "Sci-Fi", "Comedy", "Romantic Comedy", "Crime Thriller", ""];

    for row in 0..rows {
        // Every 20th row repeats the previous one
        let id = if row % 20 == 19 { row - 1 } else { row };
        data.push_str(&format!("Movie {},", id));
        if id % 13 == 0 {
            data.push(',');
        } else {
            data.push_str(&format!("{:.1},", 4.0 + (id % 60) as f64 * 0.1));
        }
        data.push_str(&format!("{},", (id * 37) % 5000));
        data.push_str(languages[id % languages.len()]);
        data.push(',');
        data.push_str(&format!("\"{}\",", genres[id % genres.len()]));
        data.push_str(&format!("{}-{:02}-{:02},", 1995 + id % 30, id % 12 + 1, id % 28 + 1));
        data.push_str(&format!("\"{}\"\n", "A long overview of the plot. ".repeat(id % 8)));
    }

    data
}

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");

    for rows in [100, 1_000, 10_000].iter() {
        let data = generate_movie_data(*rows);
        group.throughput(Throughput::Bytes(data.len() as u64));

        let mut temp = NamedTempFile::with_suffix(".csv").unwrap();
        temp.write_all(data.as_bytes()).unwrap();

        group.bench_with_input(BenchmarkId::new("analyze", rows), &temp, |b, temp| {
            let sift = Sift::new();
            b.iter(|| black_box(sift.analyze(temp.path()).unwrap()))
        });

        group.bench_with_input(BenchmarkId::new("recommend", rows), &temp, |b, temp| {
            let sift = Sift::new();
            let query = RecommendQuery::default();
            b.iter(|| black_box(sift.recommend(temp.path(), &query).unwrap()))
        });
    }

    group.finish();
}

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("stages");

    let data = generate_movie_data(10_000);
    let raw = parse_delimited(&data, b',').unwrap();
    let cleaner = Cleaner::new();
    let (cleaned, report) = cleaner.clean(&raw);

    group.bench_function("parse_10k_rows", |b| {
        b.iter(|| black_box(parse_delimited(&data, b',').unwrap()))
    });

    group.bench_function("clean_10k_rows", |b| {
        b.iter(|| black_box(cleaner.clean(&raw)))
    });

    group.bench_function("summarize_10k_rows", |b| {
        let aggregator = Aggregator::new();
        b.iter(|| {
            black_box(aggregator.summarize(
                &raw,
                &cleaned,
                DatasetInfo::new("movies.csv", &raw),
                CleaningSummary {
                    report,
                    cleaned_csv_path: String::new(),
                },
            ))
        })
    });

    group.bench_function("rank_10k_rows", |b| {
        let recommender = Recommender::new();
        let query = RecommendQuery::default();
        b.iter(|| black_box(recommender.recommend(&cleaned, &query).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_full_pipeline, bench_stages);
criterion_main!(benches);
