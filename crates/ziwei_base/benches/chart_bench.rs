use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_base::{
    CalendarOracle, ChartInput, FiveElementsClass, Gender, NaiveDate, TableCalendar, TimeSlot,
    build_chart, resolve_pillars,
};
use ziwei_base::major_star::ziwei_tianfu_anchors;
use ziwei_base::pillars::YearBoundary;

fn calendar_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2000, 8, 16).unwrap_or_default();

    let mut group = c.benchmark_group("calendar");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| TableCalendar.solar_to_lunar(black_box(date)))
    });
    group.bench_function("pillars", |b| {
        b.iter(|| {
            resolve_pillars(
                &TableCalendar,
                black_box(date),
                TimeSlot::EARLY_RAT,
                YearBoundary::LunarNewYear,
            )
        })
    });
    group.finish();
}

fn star_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("stars");
    group.bench_function("ziwei_anchors_all_days", |b| {
        b.iter(|| {
            for day in 1..=30 {
                black_box(ziwei_tianfu_anchors(black_box(day), FiveElementsClass::Fire6));
            }
        })
    });
    group.finish();
}

fn chart_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2000, 8, 16).unwrap_or_default();
    let slot = TimeSlot::EARLY_RAT;
    let input = ChartInput::solar(date, slot, Gender::Male);
    let query = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap_or_default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("build_chart", |b| b.iter(|| build_chart(black_box(&input))));
    if let Ok(chart) = build_chart(&input) {
        group.bench_function("horoscope", |b| {
            b.iter(|| chart.compute_horoscope(black_box(query), slot))
        });
    }
    group.finish();
}

criterion_group!(benches, calendar_bench, star_bench, chart_bench);
criterion_main!(benches);
