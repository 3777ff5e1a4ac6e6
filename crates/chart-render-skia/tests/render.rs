// File: crates/chart-render-skia/tests/render.rs
// Purpose: Smoke-test the Skia backend end to end through the composer.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use statement_chart_core::{ChartBackend, ChartComposer, RenderOptions, TransactionRecord};
use statement_chart_skia::{SkiaBackend, DAILY_HEIGHT, PIE_SIZE};

fn records() -> Vec<TransactionRecord> {
    (1..=31)
        .map(|day| {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            let amount = Decimal::from_str("12.34").unwrap();
            if day % 2 == 0 {
                TransactionRecord::new(date, Some(amount), None)
            } else {
                TransactionRecord::new(date, Some(amount), Some(amount * Decimal::from(3)))
            }
        })
        .collect()
}

#[test]
fn probe_and_render_both_charts() {
    let Some(backend) = SkiaBackend::probe() else {
        eprintln!("skia raster surface unavailable; skipping");
        return;
    };
    assert_eq!(backend.name(), "skia");

    let dir = tempfile::tempdir().unwrap();
    let composer = ChartComposer::new(Some(Box::new(backend)), RenderOptions::default());
    let out = composer.compose(&records(), dir.path()).expect("compose");
    let jan = out.values().next().unwrap();

    let pie = image::open(&jan.proportion).expect("decode pie");
    assert_eq!((pie.width() as i32, pie.height() as i32), PIE_SIZE);
    let bars = image::open(&jan.daily).expect("decode bars");
    assert_eq!(bars.height() as i32, DAILY_HEIGHT);
    assert_eq!(bars.width(), 930);
}
