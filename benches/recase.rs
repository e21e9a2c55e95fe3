use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_recase::{camel_case_keys, snake_case_keys, to_camel_case, to_snake_case, Map, Value};

fn record(id: i64) -> Value {
    let mut contact = Map::new();
    contact.insert("email_address".to_string(), Value::from("user@example.com"));
    contact.insert("phone_number".to_string(), Value::from("555-1234"));

    let mut user = Map::new();
    user.insert("user_id".to_string(), Value::from(id));
    user.insert("first_name".to_string(), Value::from("Alice"));
    user.insert("last_name".to_string(), Value::from("Smith"));
    user.insert("is_active".to_string(), Value::Bool(true));
    user.insert("contact_info".to_string(), Value::Object(contact));
    Value::Object(user)
}

fn nested(levels: usize) -> Value {
    let mut value = Value::from("leaf_value");
    for _ in 0..levels {
        let mut map = Map::new();
        map.insert("child_node".to_string(), value);
        value = Value::Object(map);
    }
    value
}

fn benchmark_single_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_key");

    group.bench_function("to_camel_case", |b| {
        b.iter(|| to_camel_case(black_box("user_profile_email_address")))
    });
    group.bench_function("to_snake_case", |b| {
        b.iter(|| to_snake_case(black_box("userProfileEmailAddress")))
    });

    group.finish();
}

fn benchmark_wide_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("wide_payload");

    for size in [10, 100, 1000].iter() {
        let payload = Value::Array((0..*size).map(record).collect());
        let camel = camel_case_keys(payload.clone());

        group.bench_with_input(BenchmarkId::new("camel", size), &payload, |b, payload| {
            b.iter(|| camel_case_keys(black_box(payload.clone())))
        });
        group.bench_with_input(BenchmarkId::new("snake", size), &camel, |b, camel| {
            b.iter(|| snake_case_keys(black_box(camel.clone())))
        });
    }

    group.finish();
}

fn benchmark_deep_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("deep_payload");

    for depth in [8, 32, 128, 1024].iter() {
        let payload = nested(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &payload, |b, payload| {
            b.iter(|| camel_case_keys(black_box(payload.clone())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_keys,
    benchmark_wide_payload,
    benchmark_deep_payload
);
criterion_main!(benches);
