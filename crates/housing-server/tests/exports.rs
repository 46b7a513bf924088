//! Export artifacts read back after a round trip through the router

mod common;

use axum::http::{Method, StatusCode};
use common::{app, call, read_pdf_text, read_sheet, send};
use housing_server::report::{ReportLayout, Reportable};
use housing_server::repository::{Accidents, ParkingSpaces, Users};
use serde_json::json;

fn labels(layout: &ReportLayout) -> Vec<String> {
    layout.columns.iter().map(|c| c.label.to_string()).collect()
}

async fn add_parking(app: &axum::Router, count: usize) {
    for n in 1..=count {
        let (status, _) = call(
            app,
            Method::POST,
            "/api/parking",
            Some(json!({"parking_number": format!("P-{:02}", n)})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }
}

#[tokio::test]
async fn workbook_has_localized_headers_and_one_row_per_record() {
    let app = app().await;
    add_parking(&app, 5).await;

    let reply = send(&app, Method::GET, "/api/parking/export/excel", None).await;
    assert_eq!(reply.status, StatusCode::OK);

    let sheet = read_sheet(&reply.body);
    let headers = labels(&ParkingSpaces::LAYOUT);
    assert_eq!(sheet.strings[..headers.len()], headers[..]);
    assert_eq!(sheet.row_count, 1 + 5);
    assert!(sheet.right_to_left);
    assert!(sheet.strings.contains(&"P-05".to_string()));
}

#[tokio::test]
async fn workbook_of_seeded_users_lists_every_account() {
    let app = app().await;

    let reply = send(&app, Method::GET, "/api/users/export/excel", None).await;
    let sheet = read_sheet(&reply.body);

    let headers = labels(&Users::LAYOUT);
    assert_eq!(sheet.strings[..headers.len()], headers[..]);
    assert_eq!(sheet.row_count, 1 + 3);
    assert!(sheet.strings.contains(&"admin".to_string()));
}

#[tokio::test]
async fn empty_workbook_keeps_the_header_row() {
    let app = app().await;

    let reply = send(&app, Method::GET, "/api/parking/export/excel", None).await;
    let sheet = read_sheet(&reply.body);

    assert_eq!(sheet.strings, labels(&ParkingSpaces::LAYOUT));
    assert_eq!(sheet.row_count, 1);
}

#[tokio::test]
async fn pdf_pages_carry_the_arabic_title_and_headers() {
    let app = app().await;
    add_parking(&app, 20).await;

    let reply = send(&app, Method::GET, "/api/parking/export/pdf", None).await;
    assert_eq!(reply.status, StatusCode::OK);
    assert_eq!(reply.content_type.as_deref(), Some("application/pdf"));

    let pages = read_pdf_text(&reply.body);
    assert_eq!(pages.len(), 2);

    let layout = ParkingSpaces::LAYOUT;
    let headers = labels(&layout);
    assert_eq!(pages[0][0], layout.title);
    assert_eq!(pages[0][1..=headers.len()], headers[..]);
    assert_eq!(pages[1][..headers.len()], headers[..]);

    for texts in &pages {
        assert!(texts.iter().all(|t| !t.is_empty()));
    }
    let numbers: Vec<&String> = pages
        .iter()
        .flatten()
        .filter(|t| t.starts_with("P-"))
        .collect();
    assert_eq!(numbers.len(), 20);
    assert_eq!(numbers[0], "P-01");
    assert_eq!(numbers[19], "P-20");
}

#[tokio::test]
async fn short_reports_fit_on_one_page() {
    let app = app().await;

    let reply = send(&app, Method::GET, "/api/users/export/pdf", None).await;
    let pages = read_pdf_text(&reply.body);

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0][0], Users::LAYOUT.title);
    assert!(pages[0].contains(&"admin".to_string()));

    let reply = send(&app, Method::GET, "/api/accidents/export/pdf", None).await;
    let pages = read_pdf_text(&reply.body);
    let layout = Accidents::LAYOUT;
    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0][0], layout.title);
    assert_eq!(pages[0][1..], labels(&layout)[..]);
}
