use criterion::{black_box, criterion_group, criterion_main, Criterion};
use heat_eligibility::{resolve_contact_message, AddressEligibilityFacts, HeatingType, RenderedBundle};

fn bench_resolve(c: &mut Criterion) {
    let distances = [Some(12.0), Some(150.0), Some(480.0), None];

    c.bench_function("resolve_contact_message", |b| {
        b.iter(|| {
            for distance in distances {
                for heating in HeatingType::all() {
                    let facts = AddressEligibilityFacts {
                        heating_type: Some(*heating),
                        distance_to_network: distance,
                        is_eligible: true,
                        is_based_on_iris: distance.is_none(),
                    };
                    black_box(resolve_contact_message(black_box(&facts)));
                }
            }
        })
    });

    let facts = AddressEligibilityFacts {
        heating_type: Some(HeatingType::Individuel),
        distance_to_network: Some(80.0),
        is_eligible: true,
        is_based_on_iris: false,
    };
    let bundle = resolve_contact_message(&facts).expect("individuel always resolves");

    c.bench_function("render_bundle", |b| {
        b.iter(|| black_box(RenderedBundle::from_bundle(black_box(bundle))))
    });
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
