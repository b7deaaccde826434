use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::collections::HashMap;
use vivo_people_sync::backend::SequenceMinter;
use vivo_people_sync::canon::{improve_jobcode_description, repair_email, repair_phone_number};
use vivo_people_sync::model::SourcePerson;
use vivo_people_sync::rdf::{PrefixCatalog, RdfStore};
use vivo_people_sync::sync::PeopleSync;

const PHONES: [&str; 6] = [
    "352 484 2999",
    "+1 352-273-8700",
    "(352) 392-1234 x 5555",
    "377 9999",
    "23456",
    "bd282",
];

const JOBCODES: [&str; 6] = [
    "ASST PROF",
    "PROF EMER",
    "COORD ADMIN SVCS",
    "AST-R",
    "Dir/Prof",
    "PROG ANAL II",
];

/// Benchmark phone number repair
fn bench_phone_repair(c: &mut Criterion) {
    c.bench_function("repair_phone_number", |b| {
        b.iter(|| {
            for phone in PHONES {
                criterion::black_box(repair_phone_number(phone));
            }
        });
    });
}

/// Benchmark the ordered title rewrite pipeline
fn bench_title_expansion(c: &mut Criterion) {
    c.bench_function("improve_jobcode_description", |b| {
        b.iter(|| {
            for jobcode in JOBCODES {
                criterion::black_box(improve_jobcode_description(jobcode));
            }
        });
    });
}

fn bench_email_repair(c: &mut Criterion) {
    c.bench_function("repair_email", |b| {
        b.iter(|| criterion::black_box(repair_email("  <ms.alligator@health.ufl.edu>; ")));
    });
}

/// Benchmark end-to-end reconciliation against a growing graph
fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");
    let catalog = PrefixCatalog::new();

    for size in [10, 100, 1000].iter() {
        // Setup: materialize `size` people; ufids are unique so no lookup
        let mut store = RdfStore::new();
        let minter = SequenceMinter::new("http://vivo.ufl.edu/individual/", 1);
        for i in 0..*size {
            let mut person = SourcePerson::new(true);
            person.ufid = Some(format!("{:08}", i));
            person.family_name = Some(format!("Person{}", i));
            let sync = PeopleSync::new(&store, &store, &minter, &catalog);
            if let Ok(result) = sync.reconcile(&person, &HashMap::new()) {
                store.apply(&result.delta);
            }
        }

        let mut probe = SourcePerson::new(true);
        probe.ufid = Some(format!("{:08}", size / 2));
        probe.family_name = Some("Renamed".to_string());

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let sync = PeopleSync::new(&store, &store, &minter, &catalog);
            let dictionary = sync.ufid_dictionary();
            b.iter(|| {
                let result = sync.reconcile(&probe, &dictionary);
                criterion::black_box(result.is_ok());
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_phone_repair,
    bench_title_expansion,
    bench_email_repair,
    bench_reconcile
);
criterion_main!(benches);
