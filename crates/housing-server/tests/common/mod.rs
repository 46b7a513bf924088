//! Helpers shared by the router tests

#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use housing_server::report::Reports;
use housing_server::storage::{seed_default_users, Database};
use housing_server::{router, AppState};
use serde_json::Value;
use std::collections::HashMap;
use std::io::{Cursor, Read};
use std::sync::Arc;
use tower::ServiceExt;

pub struct Reply {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        if self.body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&self.body).unwrap()
        }
    }
}

/// Router over a fresh in-memory database with the default accounts
pub async fn app() -> Router {
    let db = Arc::new(Database::in_memory().await.unwrap());
    seed_default_users(&db).await.unwrap();
    router(AppState::new(db, Reports::default()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    Reply {
        status,
        content_type,
        body: body.to_vec(),
    }
}

/// Status and JSON body of a request
pub async fn call(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let reply = send(app, method, uri, body).await;
    (reply.status, reply.json())
}

/// The only worksheet of an exported workbook
pub struct Sheet {
    /// Shared strings in first-use order; the header labels come first
    pub strings: Vec<String>,
    pub row_count: usize,
    pub right_to_left: bool,
}

fn zip_entry(archive: &mut zip::ZipArchive<Cursor<&[u8]>>, name: &str) -> String {
    let mut text = String::new();
    archive
        .by_name(name)
        .unwrap()
        .read_to_string(&mut text)
        .unwrap();
    text
}

pub fn read_sheet(bytes: &[u8]) -> Sheet {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
    let sheet = zip_entry(&mut archive, "xl/worksheets/sheet1.xml");
    let shared = zip_entry(&mut archive, "xl/sharedStrings.xml");

    let strings = shared
        .split("<si>")
        .skip(1)
        .map(|item| {
            let start = item.find("<t").unwrap();
            let text = &item[start..];
            let open_end = text.find('>').unwrap() + 1;
            let close = text.find("</t>").unwrap();
            text[open_end..close].to_string()
        })
        .collect();

    Sheet {
        strings,
        row_count: sheet.matches("<row ").count(),
        right_to_left: sheet.contains("rightToLeft=\"1\""),
    }
}

/// Glyph id to character table of an embedded font
fn glyph_map(doc: &lopdf::Document, font: &lopdf::Dictionary) -> HashMap<u16, char> {
    let id = font
        .get(b"ToUnicode")
        .and_then(lopdf::Object::as_reference)
        .unwrap();
    let stream = doc
        .get_object(id)
        .and_then(lopdf::Object::as_stream)
        .unwrap();
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());

    String::from_utf8_lossy(&data)
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let glyph = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;
            let code = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;
            let glyph = u16::from_str_radix(glyph, 16).ok()?;
            let code = char::from_u32(u32::from_str_radix(code, 16).ok()?)?;
            Some((glyph, code))
        })
        .collect()
}

/// Text objects of every page, decoded through each font's ToUnicode map
pub fn read_pdf_text(bytes: &[u8]) -> Vec<Vec<String>> {
    let doc = lopdf::Document::load_mem(bytes).unwrap();

    doc.get_pages()
        .values()
        .map(|&page_id| {
            let fonts: HashMap<Vec<u8>, HashMap<u16, char>> = doc
                .get_page_fonts(page_id)
                .into_iter()
                .map(|(name, font)| (name, glyph_map(&doc, font)))
                .collect();
            let content = doc.get_and_decode_page_content(page_id).unwrap();

            let mut current_font: Option<Vec<u8>> = None;
            let mut texts = Vec::new();
            for operation in content.operations {
                match operation.operator.as_str() {
                    "Tf" => {
                        let name = operation.operands[0].as_name().unwrap();
                        current_font = Some(name.to_vec());
                    }
                    "Tj" => {
                        let glyphs = &fonts[current_font.as_ref().unwrap()];
                        let raw = operation.operands[0].as_str().unwrap();
                        let text: String = raw
                            .chunks(2)
                            .map(|pair| glyphs[&u16::from_be_bytes([pair[0], pair[1]])])
                            .collect();
                        texts.push(text);
                    }
                    _ => {}
                }
            }
            texts
        })
        .collect()
}
