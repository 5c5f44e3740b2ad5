use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fluentsql::{Expr, InsertBuilder, SelectBuilder, SqlStatement, eq, insert, select, table};

/// SELECT col0, col1, ... FROM t WHERE col0 = 0 AND col1 = 1 ...
fn build_select(n: usize) -> SelectBuilder {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut filter: Option<Expr> = None;
    for (i, col) in columns.iter().enumerate() {
        let cond = eq(col, i as i64);
        filter = Some(match filter {
            Some(f) => f.and(cond),
            None => cond,
        });
    }
    let mut qb = select().fields(columns).from(table("t"));
    if let Some(filter) = filter {
        qb = qb.filter(filter);
    }
    qb
}

/// INSERT INTO t ( a, b, c ) VALUES (...) x n rows
fn build_insert(n: usize) -> InsertBuilder {
    let mut qb = insert(("a", "b", "c")).into_table("t");
    for i in 0..n {
        qb = qb.values((i as i64, format!("name{i}"), i % 2 == 0));
    }
    qb
}

fn bench_select_to_sql(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/select");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.to_sql()));
        });
    }

    group.finish();
}

fn bench_insert_build_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/insert_build_and_render");

    for n in [1, 10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_insert(n).to_sql()));
        });
    }

    group.finish();
}

fn bench_nested_conditions(c: &mut Criterion) {
    c.bench_function("render/nested_conditions", |b| {
        b.iter(|| {
            let mut e = eq("a", 0);
            for i in 1..32 {
                e = if i % 2 == 0 {
                    e.and(eq("b", i).or(eq("c", i)))
                } else {
                    e.or(eq("b", i).and(eq("c", i)))
                };
            }
            black_box(e)
        });
    });
}

criterion_group!(
    benches,
    bench_select_to_sql,
    bench_insert_build_and_render,
    bench_nested_conditions
);
criterion_main!(benches);
