use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal_macros::dec;

use invoicegen::core::*;

fn lines(n: usize) -> Vec<LineItem> {
    (1..=n)
        .map(|i| {
            let rate = if i % 2 == 0 { dec!(18) } else { dec!(5) };
            LineItem::new(format!("Item {i}"), dec!(2), dec!(9.99)).with_tax_rate(rate)
        })
        .collect()
}

fn build_draft(n: usize) -> InvoiceDraft {
    let mut draft = InvoiceDraft::with_id(InvoiceId::new(1).unwrap());
    draft
        .client_name("Bench Traders")
        .client_address("1 Bench Road")
        .gst_number("27ABCDE1234F1Z5")
        .discount("5");
    draft.remove_line(0);
    for i in 1..=n {
        draft.add_line_with(DraftLine::new(format!("Item {i}"), "3", "12.50").tax_rate("12"));
    }
    draft
}

fn bench_compute_totals(c: &mut Criterion) {
    let small = lines(10);
    c.bench_function("compute_totals_10_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(&small), dec!(10), None)));
    });

    let large = lines(1000);
    c.bench_function("compute_totals_1000_lines", |b| {
        b.iter(|| black_box(compute_totals(black_box(&large), dec!(10), Some(dec!(7)))));
    });
}

fn bench_draft_live_totals(c: &mut Criterion) {
    let draft = build_draft(50);
    c.bench_function("draft_totals_50_lines", |b| {
        b.iter(|| black_box(black_box(&draft).totals()));
    });
}

fn bench_draft_submit(c: &mut Criterion) {
    let draft = build_draft(50);
    c.bench_function("draft_submit_50_lines", |b| {
        b.iter(|| black_box(black_box(&draft).submit()));
    });
}

fn bench_parse_lenient(c: &mut Criterion) {
    let inputs = ["12", "49.90", "abc", "", "3.5kg", "1e3"];
    c.bench_function("parse_lenient", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(parse_lenient(black_box(s)));
            }
        });
    });
}

criterion_group!(
    benches,
    bench_compute_totals,
    bench_draft_live_totals,
    bench_draft_submit,
    bench_parse_lenient,
);
criterion_main!(benches);
