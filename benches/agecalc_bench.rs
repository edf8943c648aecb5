use agecalc::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn date_inputs() -> Vec<&'static str> {
    vec!["01011990", "29022020", "31122099", "15051990"]
}

fn parse_dates_ok(inputs: &[&str]) {
    for input in inputs {
        let res = parse_date(input);
        assert!(res.is_ok());
    }
}

fn age_at_date_inputs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("01011990", "01011990"),
        ("15051990", "10032024"),
        ("31012020", "01032020"),
        ("29022020", "28022021"),
    ]
}

fn ages_at_date(inputs: &[(&str, &str)]) {
    for (dob, target) in inputs {
        let res = age_at_date(dob, target);
        assert!(res.is_ok());
    }
}

fn date_from_age_inputs() -> Vec<(&'static str, &'static str, &'static str, &'static str)> {
    vec![
        ("31012023", "0", "1", "0"),
        ("15051990", "18", "", ""),
        ("29022020", "1", "11", "365"),
        ("01011990", "", "", ""),
    ]
}

fn dates_from_age(inputs: &[(&str, &str, &str, &str)]) {
    for (dob, years, months, days) in inputs {
        let res = date_from_age(dob, years, months, days);
        assert!(res.is_ok());
    }
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("parse_date", |b| b.iter(|| parse_dates_ok(black_box(&date_inputs()))));
    c.bench_function("age_at_date", |b| {
        b.iter(|| ages_at_date(black_box(&age_at_date_inputs())))
    });
    c.bench_function("date_from_age", |b| {
        b.iter(|| dates_from_age(black_box(&date_from_age_inputs())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
