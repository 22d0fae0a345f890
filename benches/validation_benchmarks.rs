//! # Validation Benchmarks
//!
//! Measures the cost of the per-request rule sets, which run before any
//! database work on every create and update.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;

use insurance_admin::models::{
    client::{validators as client_validators, CreateClientDTO, UpdateClientDTO},
    policy::{validators as policy_validators, CreatePolicyDTO, PolicyType, UpdatePolicyDTO},
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 1).unwrap_or(NaiveDate::MIN)
}

fn client(id: u32) -> CreateClientDTO {
    CreateClientDTO {
        first_name: format!("First{}", id),
        last_name: format!("Last{}", id),
        email: format!("client{}@example.com", id),
        phone: Some("+1 (555) 010-2030".to_string()),
        date_of_birth: NaiveDate::from_ymd_opt(1960 + (id % 40) as i32, 1 + id % 12, 1),
    }
}

fn policy(id: u32) -> CreatePolicyDTO {
    CreatePolicyDTO {
        client_id: id as i32 + 1,
        policy_number: format!("POL-{:06}", id),
        policy_type: PolicyType::ALL[id as usize % PolicyType::ALL.len()]
            .as_str()
            .to_lowercase(),
        premium_amount: Some(Decimal::new(10_000 + id as i64, 2)),
        start_date: NaiveDate::from_ymd_opt(2025, 3, 15),
        end_date: NaiveDate::from_ymd_opt(2026, 3, 15),
    }
}

pub fn benchmark_client_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("client_rules");

    let valid = client(7);
    group.bench_function("create_valid", |b| {
        b.iter(|| client_validators::validate_create_client(black_box(&valid), today()))
    });

    let invalid = CreateClientDTO {
        email: "not-an-email".to_string(),
        phone: Some("abc".to_string()),
        ..Default::default()
    };
    group.bench_function("create_all_failing", |b| {
        b.iter(|| client_validators::validate_create_client(black_box(&invalid), today()))
    });

    let update = UpdateClientDTO {
        first_name: valid.first_name.clone(),
        last_name: valid.last_name.clone(),
        email: valid.email.clone(),
        phone: valid.phone.clone(),
        date_of_birth: NaiveDate::from_ymd_opt(2010, 6, 1),
    };
    group.bench_function("update_underage", |b| {
        b.iter(|| client_validators::validate_update_client(black_box(&update), today()))
    });

    group.finish();
}

pub fn benchmark_policy_rules(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy_rules");

    for size in [10usize, 100, 1000].iter() {
        let batch: Vec<CreatePolicyDTO> = (0..*size as u32).map(policy).collect();
        group.bench_with_input(BenchmarkId::new("create_batch", size), &batch, |b, batch| {
            b.iter(|| {
                batch
                    .iter()
                    .filter(|dto| policy_validators::validate_create_policy(dto, today()).is_empty())
                    .count()
            })
        });
    }

    let update = UpdatePolicyDTO {
        policy_number: "POL-000001".to_string(),
        policy_type: "Home".to_string(),
        premium_amount: Some(Decimal::new(100_005, 3)),
        start_date: NaiveDate::from_ymd_opt(2025, 12, 1),
        end_date: NaiveDate::from_ymd_opt(2025, 2, 1),
        is_active: true,
    };
    group.bench_function("update_all_failing", |b| {
        b.iter(|| policy_validators::validate_update_policy(black_box(&update), today()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_client_rules, benchmark_policy_rules);
criterion_main!(benches);
