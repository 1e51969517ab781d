// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use hira_diary::db::init_schema;
use hira_diary::repo::{entries, rates};
use hira_diary::{DiamondType, EntryLine, Totals};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

fn lines(items: &[(DiamondType, i64, f64)]) -> BTreeMap<DiamondType, EntryLine> {
    items
        .iter()
        .map(|(t, q, r)| (*t, EntryLine::new(*q, *r)))
        .collect()
}

fn row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM entries", [], |r| r.get(0))
        .unwrap()
}

#[test]
fn record_skips_zero_quantity() {
    let conn = setup();
    let written = entries::record(
        &conn,
        "05/06/2024",
        &lines(&[(DiamondType::A, 3, 100.0), (DiamondType::B, 0, 50.0)]),
    )
    .unwrap();
    assert_eq!(written, 1);

    let detail = entries::detail(&conn, "05/06/2024").unwrap();
    assert_eq!(detail.lines.len(), 1);
    let l = &detail.lines[0];
    assert_eq!(l.r#type, DiamondType::A);
    assert_eq!(l.quantity, 3);
    assert_eq!(l.rate, 100.0);
    assert_eq!(l.total, 300.0);

    assert_eq!(
        entries::totals(&conn).unwrap(),
        Totals {
            quantity: 3,
            amount: 300.0
        }
    );
}

#[test]
fn record_skips_negative_quantity() {
    let conn = setup();
    let written = entries::record(
        &conn,
        "05/06/2024",
        &lines(&[(DiamondType::C, -4, 10.0), (DiamondType::D, 0, 0.0)]),
    )
    .unwrap();
    assert_eq!(written, 0);
    assert_eq!(row_count(&conn), 0);
}

#[test]
fn stored_total_is_quantity_times_rate() {
    let conn = setup();
    let cases = [(7_i64, 12.25_f64), (1, 0.0), (1000, 0.1), (13, 999.99)];
    for (i, (q, r)) in cases.iter().enumerate() {
        let date = format!("0{}/01/2024", i + 1);
        entries::record(&conn, &date, &lines(&[(DiamondType::A, *q, *r)])).unwrap();
        let detail = entries::detail(&conn, &date).unwrap();
        assert_eq!(detail.lines[0].total, *q as f64 * *r);
    }
}

#[test]
fn totals_on_empty_table_are_zero() {
    let conn = setup();
    assert_eq!(entries::totals(&conn).unwrap(), Totals::default());
}

#[test]
fn detail_sum_matches_history() {
    let conn = setup();
    entries::record(
        &conn,
        "01/02/2024",
        &lines(&[
            (DiamondType::A, 2, 50.5),
            (DiamondType::B, 4, 25.25),
            (DiamondType::D, 1, 8.0),
        ]),
    )
    .unwrap();
    entries::record(&conn, "01/02/2024", &lines(&[(DiamondType::A, 1, 4.0)])).unwrap();
    entries::record(&conn, "02/02/2024", &lines(&[(DiamondType::C, 3, 3.0)])).unwrap();

    let history = entries::history(&conn).unwrap();
    for day in &history {
        let detail = entries::detail(&conn, &day.date).unwrap();
        assert_eq!(detail.total, day.total);
        let summed: f64 = detail.lines.iter().map(|l| l.total).sum();
        assert_eq!(summed, day.total);
    }
    let first = history.iter().find(|d| d.date == "01/02/2024").unwrap();
    assert_eq!(first.total, 101.0 + 101.0 + 8.0 + 4.0);
}

#[test]
fn inexact_rates_sum_the_same_in_history_and_detail() {
    let conn = setup();
    entries::record(
        &conn,
        "01/01/2024",
        &lines(&[
            (DiamondType::A, 1, 0.1),
            (DiamondType::B, 1, 0.2),
            (DiamondType::C, 1, 0.3),
        ]),
    )
    .unwrap();
    entries::record(
        &conn,
        "02/01/2024",
        &lines(&[
            (DiamondType::A, 1, 1e16),
            (DiamondType::B, 1, 1.0),
            (DiamondType::C, 1, -1e16 + 2.0),
        ]),
    )
    .unwrap();
    entries::record(&conn, "01/01/2024", &lines(&[(DiamondType::D, 3, 0.7)])).unwrap();

    let history = entries::history(&conn).unwrap();
    assert_eq!(history.len(), 2);
    for day in &history {
        let detail = entries::detail(&conn, &day.date).unwrap();
        let summed: f64 = detail.lines.iter().map(|l| l.total).sum();
        assert_eq!(detail.total, day.total, "detail total on {}", day.date);
        assert_eq!(summed, day.total, "caller sum on {}", day.date);
    }
    let first = history.iter().find(|d| d.date == "01/01/2024").unwrap();
    assert_eq!(first.total, 0.1 + 0.2 + 0.3 + 3.0 * 0.7);
}

#[test]
fn detail_of_unknown_date_is_empty() {
    let conn = setup();
    let detail = entries::detail(&conn, "09/09/2099").unwrap();
    assert!(detail.lines.is_empty());
    assert_eq!(detail.total, 0.0);
}

#[test]
fn delete_by_date_leaves_other_dates() {
    let conn = setup();
    entries::record(
        &conn,
        "10/03/2024",
        &lines(&[(DiamondType::A, 1, 1.0), (DiamondType::B, 2, 2.0)]),
    )
    .unwrap();
    entries::record(&conn, "11/03/2024", &lines(&[(DiamondType::C, 5, 1.0)])).unwrap();

    assert_eq!(entries::delete_by_date(&conn, "10/03/2024").unwrap(), 2);
    assert!(entries::detail(&conn, "10/03/2024").unwrap().lines.is_empty());
    assert_eq!(entries::detail(&conn, "11/03/2024").unwrap().lines.len(), 1);
    assert_eq!(entries::delete_by_date(&conn, "10/03/2024").unwrap(), 0);
}

#[test]
fn history_sorts_by_stored_text() {
    let conn = setup();
    for date in ["15/01/2024", "01/12/2023", "20/06/2024"] {
        entries::record(&conn, date, &lines(&[(DiamondType::A, 1, 1.0)])).unwrap();
    }
    let dates: Vec<String> = entries::history(&conn)
        .unwrap()
        .into_iter()
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, ["20/06/2024", "15/01/2024", "01/12/2023"]);
}

#[test]
fn history_chronological_sorts_by_calendar() {
    let conn = setup();
    for date in ["01/12/2023", "15/01/2024", "02/01/2024", "someday"] {
        entries::record(&conn, date, &lines(&[(DiamondType::A, 1, 1.0)])).unwrap();
    }
    let dates: Vec<String> = entries::history_chronological(&conn)
        .unwrap()
        .into_iter()
        .map(|d| d.date)
        .collect();
    assert_eq!(dates, ["15/01/2024", "02/01/2024", "01/12/2023", "someday"]);
}

#[test]
fn record_at_current_rates_snapshots_rate() {
    let conn = setup();
    let mut sheet = rates::get_all(&conn).unwrap();
    sheet.insert(DiamondType::A, 120.0);
    sheet.insert(DiamondType::B, 80.0);
    rates::set_all(&conn, &sheet).unwrap();

    let quantities = BTreeMap::from([
        (DiamondType::A, 2),
        (DiamondType::B, 0),
        (DiamondType::C, 5),
    ]);
    assert_eq!(
        entries::record_at_current_rates(&conn, "05/06/2024", &quantities).unwrap(),
        2
    );

    sheet.insert(DiamondType::A, 999.0);
    rates::set_all(&conn, &sheet).unwrap();

    let detail = entries::detail(&conn, "05/06/2024").unwrap();
    assert_eq!(detail.lines[0].r#type, DiamondType::A);
    assert_eq!(detail.lines[0].rate, 120.0);
    assert_eq!(detail.lines[0].total, 240.0);
    assert_eq!(detail.lines[1].r#type, DiamondType::C);
    assert_eq!(detail.lines[1].total, 0.0);
}

#[test]
fn unknown_stored_type_is_a_conversion_error() {
    let conn = setup();
    conn.execute(
        "INSERT INTO entries(date, type, quantity, rate, total) VALUES ('01/01/2024', 'Z', 1, 1.0, 1.0)",
        [],
    )
    .unwrap();
    assert!(entries::detail(&conn, "01/01/2024").is_err());
    // aggregates never read the type column
    assert_eq!(entries::totals(&conn).unwrap().quantity, 1);
}

#[test]
fn all_entries_in_insertion_order() {
    let conn = setup();
    entries::record(&conn, "02/01/2024", &lines(&[(DiamondType::B, 1, 2.0)])).unwrap();
    entries::record(&conn, "01/01/2024", &lines(&[(DiamondType::A, 3, 1.5)])).unwrap();
    let all = entries::all_entries(&conn).unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].date, "02/01/2024");
    assert_eq!(all[1].r#type, DiamondType::A);
    assert_eq!(all[1].total, 4.5);
    assert!(all[0].id < all[1].id);
}
