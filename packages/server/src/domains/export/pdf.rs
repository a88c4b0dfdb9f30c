//! PDF risk brief rendered with lopdf.
//!
//! The header sits on the first page; rows continue onto further Letter
//! pages once the bottom margin is reached.
//!
//! Uses the standard Type1 Helvetica fonts, so text is limited to Latin-1;
//! ζ_c is spelled `zeta_c` on the page.

use chrono::{DateTime, Utc};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use super::{ExportError, RegionReport};

const TITLE: &str = "CPZ Atlas v0.1 Risk Brief";

// US Letter, points
const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;

const LEFT_MARGIN: i64 = 100;
const TITLE_Y: i64 = 750;
const LINE_HEIGHT: i64 = 20;
const BOTTOM_MARGIN: i64 = 72;

/// Baseline of the first row on the first page (below the three header lines)
const FIRST_ROW_Y: i64 = TITLE_Y - 3 * LINE_HEIGHT;

/// Text line drawn at an absolute position
fn text_line(font: &str, size: i64, x: i64, y: i64, text: &str) -> Vec<Operation> {
    vec![
        Operation::new("BT", vec![]),
        Operation::new(
            "Tf",
            vec![Object::Name(font.as_bytes().to_vec()), Object::Integer(size)],
        ),
        Operation::new("Td", vec![Object::Integer(x), Object::Integer(y)]),
        Operation::new("Tj", vec![Object::string_literal(text)]),
        Operation::new("ET", vec![]),
    ]
}

/// Row text for one region
pub fn report_line(report: &RegionReport) -> String {
    format!(
        "{}: zeta_c = {:.2}, Confidence = {:.1}%",
        report.region.id,
        report.estimate.zeta_c,
        report.estimate.confidence * 100.0
    )
}

/// Number of rows that fit between `top` and the bottom margin
fn rows_fitting(top: i64) -> usize {
    ((top - BOTTOM_MARGIN) / LINE_HEIGHT + 1) as usize
}

/// Split `row_count` rows into per-page counts; always at least one page
fn paginate(row_count: usize) -> Vec<usize> {
    let first = rows_fitting(FIRST_ROW_Y);
    let rest = rows_fitting(TITLE_Y);

    let mut pages = vec![row_count.min(first)];
    let mut remaining = row_count.saturating_sub(first);
    while remaining > 0 {
        let on_page = remaining.min(rest);
        pages.push(on_page);
        remaining -= on_page;
    }
    pages
}

/// Render the brief; returns the PDF bytes
pub fn render_pdf(
    reports: &[RegionReport],
    generated_at: DateTime<Utc>,
) -> Result<Vec<u8>, ExportError> {
    let region_names = reports
        .iter()
        .map(|r| r.region.id)
        .collect::<Vec<_>>()
        .join(", ");

    let mut header = Vec::new();
    header.extend(text_line("F2", 16, LEFT_MARGIN, TITLE_Y, TITLE));
    header.extend(text_line(
        "F1",
        12,
        LEFT_MARGIN,
        TITLE_Y - LINE_HEIGHT,
        &format!("Generated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
    ));
    header.extend(text_line(
        "F1",
        12,
        LEFT_MARGIN,
        TITLE_Y - 2 * LINE_HEIGHT,
        &format!("Regions: {}", region_names),
    ));

    let mut page_operations = Vec::new();
    let mut rows = reports.iter();
    for (index, row_count) in paginate(reports.len()).into_iter().enumerate() {
        let (mut operations, mut y) = if index == 0 {
            (std::mem::take(&mut header), FIRST_ROW_Y)
        } else {
            (Vec::new(), TITLE_Y)
        };
        for report in rows.by_ref().take(row_count) {
            operations.extend(text_line("F1", 12, LEFT_MARGIN, y, &report_line(report)));
            y -= LINE_HEIGHT;
        }
        page_operations.push(operations);
    }

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => regular_id,
            "F2" => bold_id,
        },
    });

    let mut kids = Vec::with_capacity(page_operations.len());
    for operations in page_operations {
        let content = Content { operations }
            .encode()
            .map_err(|e| ExportError::Render(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, content));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let pages = dictionary! {
        "Type" => "Pages",
        "Count" => Object::Integer(kids.len() as i64),
        "Kids" => kids,
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH),
            Object::Integer(PAGE_HEIGHT),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)
        .map_err(|e| ExportError::Render(e.to_string()))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::geophysics::regions::{KYIV, TAIPEI};
    use crate::domains::geophysics::ZetaCEstimate;
    use chrono::TimeZone;

    fn reports() -> Vec<RegionReport> {
        vec![
            RegionReport {
                region: &KYIV,
                estimate: ZetaCEstimate {
                    zeta_c: 0.4242,
                    confidence: 0.1234,
                },
            },
            RegionReport {
                region: &TAIPEI,
                estimate: ZetaCEstimate {
                    zeta_c: 0.1,
                    confidence: 2.5,
                },
            },
        ]
    }

    #[test]
    fn test_report_line_format() {
        assert_eq!(
            report_line(&reports()[0]),
            "Kyiv: zeta_c = 0.42, Confidence = 12.3%"
        );
    }

    #[test]
    fn test_render_pdf_single_page_with_rows() {
        let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();
        let bytes = render_pdf(&reports(), generated_at).unwrap();

        assert!(bytes.starts_with(b"%PDF-1.5"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);

        // Content stream is stored uncompressed
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("CPZ Atlas v0.1 Risk Brief"));
        assert!(raw.contains("Generated: 2025-06-01 09:15:00"));
        assert!(raw.contains("Regions: Kyiv, Taipei"));
        assert!(raw.contains("Taipei: zeta_c = 0.10, Confidence = 250.0%"));
    }

    #[test]
    fn test_paginate_keeps_rows_above_bottom_margin() {
        assert_eq!(paginate(0), vec![0]);
        assert_eq!(paginate(3), vec![3]);

        let first = rows_fitting(FIRST_ROW_Y);
        let rest = rows_fitting(TITLE_Y);
        assert_eq!(paginate(first), vec![first]);
        assert_eq!(paginate(first + 1), vec![first, 1]);
        assert_eq!(paginate(first + rest + 2), vec![first, rest, 2]);

        // Last baseline on each page stays at or above the margin
        assert!(FIRST_ROW_Y - (first as i64 - 1) * LINE_HEIGHT >= BOTTOM_MARGIN);
        assert!(TITLE_Y - (rest as i64 - 1) * LINE_HEIGHT >= BOTTOM_MARGIN);
    }

    #[test]
    fn test_render_pdf_long_selection_spans_pages() {
        let generated_at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 15, 0).unwrap();
        let many: Vec<RegionReport> = reports().into_iter().cycle().take(80).collect();

        let bytes = render_pdf(&many, generated_at).unwrap();
        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), paginate(80).len());
        assert!(doc.get_pages().len() > 1);

        let raw = String::from_utf8_lossy(&bytes);
        assert_eq!(raw.matches("zeta_c = ").count(), 80);
    }
}
