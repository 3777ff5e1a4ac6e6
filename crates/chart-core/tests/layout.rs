// File: crates/chart-core/tests/layout.rs
// Purpose: Pie shares and label thresholds, bar bucket geometry, stack heights and label ordering.

use std::str::FromStr;

use rust_decimal::Decimal;
use statement_chart_core::layout::{
    bar_geometry, format_amount, income_share, label_placements, pie_layout, stack_heights, Segment,
    StackHeights, LABEL_MIN_BUCKET_WIDTH, MAX_BAR_WIDTH, MIN_BAR_WIDTH,
};
use statement_chart_core::MonthlySummary;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn summary(income: &str, spending: &str) -> MonthlySummary {
    let (i, s) = (dec(income), dec(spending));
    MonthlySummary { total_income: i, total_spending: s, net: i - s }
}

#[test]
fn even_split_when_nothing_happened() {
    assert_eq!(income_share(0.0, 0.0), 0.5);
    assert_eq!(income_share(100.0, 0.0), 1.0);
    assert_eq!(income_share(25.0, 75.0), 0.25);

    let pie = pie_layout(&summary("0", "0"));
    assert_eq!(pie.income.share, 0.5);
    assert_eq!(pie.spending.share, 0.5);
    assert!(pie.income.show_label && pie.spending.show_label);
}

#[test]
fn thin_wedges_get_no_label() {
    let pie = pie_layout(&summary("5", "95"));
    assert!(!pie.income.show_label);
    assert!(pie.spending.show_label);

    let pie = pie_layout(&summary("8", "92"));
    assert!(pie.income.show_label, "exactly 8% is labelled");

    let pie = pie_layout(&summary("100", "0"));
    assert!(pie.income.show_label);
    assert!(!pie.spending.show_label);
    assert_eq!(pie.spending.share, 0.0);
}

#[test]
fn wedges_start_at_twelve_and_run_clockwise() {
    let pie = pie_layout(&summary("25", "75"));
    assert_eq!(pie.income.start, 0.0);
    assert_eq!(pie.spending.start, 0.25);
    assert!((pie.income.end() + pie.spending.share - 1.0).abs() < 1e-12);

    // Screen space: y grows downward.
    assert_eq!(pie.segment_at(1.0, -10.0), Segment::Income);
    assert_eq!(pie.segment_at(-1.0, -10.0), Segment::Spending);
    assert_eq!(pie.segment_at(-10.0, 10.0), Segment::Spending);

    let even = pie_layout(&summary("1", "1"));
    let (x, y) = even.income.label_anchor(100.0, 50.0, 40.0);
    assert!((x - 122.0).abs() < 1e-9 && (y - 50.0).abs() < 1e-9, "({x}, {y})");
}

#[test]
fn bar_width_is_capped_floored_and_centered() {
    let wide = bar_geometry(812, 30);
    assert_eq!(wide.bucket_width, 27);
    assert_eq!(wide.bar_width, MAX_BAR_WIDTH);
    assert_eq!(wide.bar_left(44, 0), 50);
    assert_eq!(wide.bar_left(44, 2), 44 + 54 + 6);
    assert!(wide.labels_fit());

    let narrow = bar_geometry(60, 31);
    assert_eq!(narrow.bucket_width, 3, "bucket floor");
    assert_eq!(narrow.bar_width, MIN_BAR_WIDTH);
    assert!(!narrow.labels_fit());

    let edge = bar_geometry(LABEL_MIN_BUCKET_WIDTH * 28, 28);
    assert_eq!(edge.bucket_width, LABEL_MIN_BUCKET_WIDTH);
    assert!(edge.labels_fit());
    assert!(!bar_geometry((LABEL_MIN_BUCKET_WIDTH - 1) * 28, 28).labels_fit());
}

#[test]
fn stack_heights_split_the_bar() {
    assert_eq!(stack_heights(0.0, 0.0, 1.0, 100), StackHeights::default());
    assert_eq!(stack_heights(50.0, 50.0, 100.0, 100), StackHeights { income: 50, spending: 50 });

    let tiny = stack_heights(0.0, 0.01, 1000.0, 100);
    assert_eq!(tiny.total(), 1, "non-zero days stay visible");
    assert_eq!(tiny.spending, 1);

    let half = stack_heights(10.0, 0.0, 20.0, 100);
    assert_eq!(half, StackHeights { income: 50, spending: 0 });
}

#[test]
fn labels_follow_the_stack_top_to_bottom() {
    let tall = StackHeights { income: 40, spending: 80 };
    let both = label_placements(dec("10"), dec("20"), tall, 8);
    assert_eq!(both.len(), 2);
    assert_eq!((both[0].segment, both[0].value, both[0].offset), (Segment::Spending, dec("20"), 0));
    assert_eq!((both[1].segment, both[1].value, both[1].offset), (Segment::Income, dec("10"), 8));

    let income_only = label_placements(dec("3"), Decimal::ZERO, StackHeights { income: 12, spending: 0 }, 8);
    assert_eq!(income_only.len(), 1);
    assert_eq!((income_only[0].segment, income_only[0].offset), (Segment::Income, 0));

    let spending_only = label_placements(Decimal::ZERO, dec("4"), StackHeights { income: 0, spending: 9 }, 8);
    assert_eq!(spending_only.len(), 1);
    assert_eq!((spending_only[0].segment, spending_only[0].offset), (Segment::Spending, 0));

    assert!(label_placements(Decimal::ZERO, Decimal::ZERO, StackHeights::default(), 8).is_empty());
}

#[test]
fn segments_flattened_to_zero_pixels_get_no_label() {
    let (income, spending) = (dec("0.01"), dec("1000"));
    let heights = stack_heights(0.01, 1000.0, 1000.0, 126);
    assert_eq!(heights, StackHeights { income: 0, spending: 126 });

    let labels = label_placements(income, spending, heights, 8);
    assert_eq!(labels.len(), 1, "only the drawn segment is labelled");
    assert_eq!((labels[0].segment, labels[0].value, labels[0].offset), (Segment::Spending, spending, 0));
}

#[test]
fn amounts_drop_trailing_zeros() {
    assert_eq!(format_amount(dec("100.00")), "100");
    assert_eq!(format_amount(dec("40.50")), "40.5");
    assert_eq!(format_amount(dec("0.125")), "0.13");
    assert_eq!(format_amount(Decimal::ZERO), "0");
}
