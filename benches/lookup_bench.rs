use criterion::{black_box, criterion_group, criterion_main, Criterion};

use phone_number_lookup::{api::{lookup, NumberLookupRequest}, lookup_number};

/// A mix of inputs hitting every exit of the lookup: valid numbers in each
/// accepted layout, rejected characters, bad spacing and region mismatches.
fn setup_lookup_data() -> Vec<(&'static str, &'static str)> {
    vec![
        ("+12125690123", ""),
        ("+1 212 5690123", ""),
        ("2125690123", "US"),
        ("+44 20 87654321", ""),
        ("+39 02 36618300", ""),
        ("+1212569ABCD", ""),
        ("+1 212 569 0123", ""),
        ("2125690123", ""),
        ("+12125690123", "CA"),
    ]
}

fn lookup_benchmark(c: &mut Criterion) {
    let numbers = setup_lookup_data();

    let mut group = c.benchmark_group("Lookup");

    group.bench_function("lookup_number()", |b| {
        b.iter(|| {
            for (number, country_code) in &numbers {
                let _ = lookup_number(black_box(number), black_box(country_code));
            }
        })
    });

    let requests: Vec<NumberLookupRequest> = numbers
        .iter()
        .map(|(number, country_code)| NumberLookupRequest {
            phone_number: number.to_string(),
            country_code: country_code.to_string(),
        })
        .collect();
    group.bench_function("api::lookup()", |b| {
        b.iter(|| {
            for request in &requests {
                let _ = lookup(black_box(request));
            }
        })
    });

    group.finish();
}

criterion_group!(benches, lookup_benchmark);
criterion_main!(benches);
