use astro_data_prep::models::{
    ClubCode, Membership, MembershipEntry, Position, Region, Ring, ShapeRecord,
};
use astro_data_prep::processors::{FeatureJoiner, RegionAverager};
use astro_data_prep::utils::normalize_longitude;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// Regions made of one large ring and many small island rings
fn create_test_regions(region_count: usize, islands: usize) -> Vec<Region> {
    (0..region_count)
        .map(|r| {
            let base_lon = -170.0 + (r as f64) * 0.5;
            let base_lat = -60.0 + (r as f64) * 0.25;

            let mainland: Ring = (0..2000)
                .map(|i| {
                    let angle = (i as f64) * std::f64::consts::TAU / 2000.0;
                    Position::new(base_lon + 3.0 * angle.cos(), base_lat + 2.0 * angle.sin())
                })
                .collect();

            let mut polygons = vec![vec![mainland]];
            for i in 0..islands {
                let offset = (i as f64) * 0.01;
                polygons.push(vec![vec![
                    Position::new(base_lon + 4.0 + offset, base_lat),
                    Position::new(base_lon + 4.1 + offset, base_lat),
                    Position::new(base_lon + 4.1 + offset, base_lat + 0.1),
                    Position::new(base_lon + 4.0 + offset, base_lat),
                ]]);
            }

            Region::new(format!("Bench/Zone{}", r), polygons)
        })
        .collect()
}

fn create_test_records(count: usize) -> (Vec<ShapeRecord>, Membership) {
    let records: Vec<ShapeRecord> = (0..count)
        .map(|i| ShapeRecord {
            clean_name: format!("Feature {}", i),
            diameter: 10.0 + (i % 50) as f64,
            center_longitude: (i as f64 * 0.37) % 360.0,
            center_latitude: ((i as f64 * 0.11) % 180.0) - 90.0,
            feature_type: "Crater, craters".to_string(),
            min_longitude: 1.0,
            max_longitude: 2.0,
            min_latitude: 3.0,
            max_latitude: 4.5,
            quad_name: "Bench".to_string(),
            quad_code: "LAC-1".to_string(),
        })
        .collect();

    let membership = (0..count)
        .step_by(10)
        .map(|i| MembershipEntry::new(format!("Feature {}", i), ClubCode::Lunar, Some(2)))
        .collect();

    (records, membership)
}

fn benchmark_region_averaging(c: &mut Criterion) {
    let mut group = c.benchmark_group("region_averaging");

    for islands in [0usize, 10, 100] {
        let regions = create_test_regions(50, islands);
        group.bench_with_input(BenchmarkId::from_parameter(islands), &regions, |b, regions| {
            b.iter(|| {
                let averager = RegionAverager::new();
                averager.average_all(black_box(regions), None).unwrap()
            })
        });
    }

    group.finish();
}

fn benchmark_feature_join(c: &mut Criterion) {
    let (records, membership) = create_test_records(15_000);

    c.bench_function("feature_join", |b| {
        b.iter(|| {
            let joiner = FeatureJoiner::new(&membership);
            joiner.join_all(black_box(&records))
        })
    });
}

fn benchmark_longitude_normalization(c: &mut Criterion) {
    let longitudes: Vec<f64> = (0..36_000).map(|i| i as f64 * 0.01).collect();

    c.bench_function("normalize_longitude", |b| {
        b.iter(|| {
            longitudes
                .iter()
                .map(|&lon| normalize_longitude(black_box(lon)))
                .sum::<f64>()
        })
    });
}

criterion_group!(
    benches,
    benchmark_region_averaging,
    benchmark_feature_join,
    benchmark_longitude_normalization
);
criterion_main!(benches);
