use std::collections::BTreeMap;
use std::path::PathBuf;

use lopdf::content::Content;
use lopdf::Object;
use time_freedom_report::fonts::SystemFontProvider;
use time_freedom_report::{
    DesignTokens, RenderedReport, ReportBuilder, ReportData, ReportError, Task,
};

fn scenario() -> ReportData {
    ReportData {
        client_name: "Jordan Lee".to_owned(),
        date: "March 2025".to_owned(),
        annual_value: 50_000,
        weekly_hours: 10.0,
        total_tasks_ea: 12,
        ea_investment: 12_000,
        net_return: 38_000,
        roi_multiplier: 3.2,
        analysis_text: "Most of the week goes to inbox triage and calendar juggling. Handing \
                        those off frees the mornings for client work."
            .to_owned(),
        daily_tasks: vec![Task::new(
            "Email triage",
            "Sort, archive and draft replies to routine messages before 9am.",
            "5 hrs/week",
        )],
        weekly_tasks: vec![Task::new(
            "Expense reports",
            "Collect receipts and file the weekly expense report.",
            "2 hrs/week",
        )],
        monthly_tasks: vec![Task::new(
            "Vendor invoices",
            "Reconcile vendor invoices against purchase orders and flag anything that does not \
             match the agreed terms for review.",
            "3 hrs/month",
        )],
    }
}

fn builder() -> ReportBuilder {
    let _ = env_logger::try_init();
    ReportBuilder::new().with_font_provider(SystemFontProvider::default().with_install(false))
}

fn render_scenario() -> RenderedReport {
    builder().render(&scenario()).expect("scenario renders")
}

fn temp_pdf(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "time_freedom_report_{}_{}.pdf",
        std::process::id(),
        name
    ))
}

/// Text and stroked segments of one decoded page, in PDF user space.
struct PageContent {
    text: String,
    strokes: Vec<Stroke>,
}

struct Stroke {
    from: (f64, f64),
    to: (f64, f64),
    color: Option<[f64; 3]>,
}

fn number(object: &Object) -> f64 {
    f64::from(object.as_float().expect("numeric operand"))
}

fn glyph_map(document: &lopdf::Document, font: &lopdf::Dictionary) -> BTreeMap<u16, char> {
    let Ok(stream) = font
        .get(b"ToUnicode")
        .and_then(Object::as_reference)
        .and_then(|id| document.get_object(id))
        .and_then(Object::as_stream)
    else {
        return BTreeMap::new();
    };
    let data = stream
        .decompressed_content()
        .unwrap_or_else(|_| stream.content.clone());

    String::from_utf8_lossy(&data)
        .lines()
        .filter_map(|line| {
            let mut parts = line.split_whitespace();
            let glyph = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;
            let unicode = parts.next()?.strip_prefix('<')?.strip_suffix('>')?;
            let glyph = u16::from_str_radix(glyph, 16).ok()?;
            let unicode = u32::from_str_radix(unicode, 16).ok().and_then(char::from_u32)?;
            // Space variants may share the space glyph.
            let unicode = if unicode.is_whitespace() { ' ' } else { unicode };
            Some((glyph, unicode))
        })
        .collect()
}

fn decode_page(report: &RenderedReport, page_number: u32) -> PageContent {
    let document = lopdf::Document::load_mem(&report.bytes).expect("rendered PDF parses");
    let page_id = document.get_pages()[&page_number];
    let fonts: BTreeMap<Vec<u8>, BTreeMap<u16, char>> = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, glyph_map(&document, font)))
        .collect();
    let data = document.get_page_content(page_id).expect("page content");
    let content = Content::decode(&data).expect("content stream decodes");

    let mut page = PageContent {
        text: String::new(),
        strokes: Vec::new(),
    };
    let mut font: Option<&BTreeMap<u16, char>> = None;
    let mut color = None;
    let mut cursor = None;
    for operation in &content.operations {
        let operands = &operation.operands;
        match operation.operator.as_str() {
            "Tf" => {
                font = operands
                    .first()
                    .and_then(|name| name.as_name().ok())
                    .and_then(|name| fonts.get(name));
            }
            "TJ" => {
                let Some(glyphs) = font else { continue };
                let parts = operands[0].as_array().expect("TJ takes an array");
                for part in parts {
                    if let Object::String(bytes, _) = part {
                        for pair in bytes.chunks(2) {
                            let id = u16::from_be_bytes([pair[0], pair[1]]);
                            page.text.push(glyphs.get(&id).copied().unwrap_or('?'));
                        }
                    }
                }
                page.text.push('\n');
            }
            "RG" => {
                color = Some([
                    number(&operands[0]),
                    number(&operands[1]),
                    number(&operands[2]),
                ]);
            }
            "m" => cursor = Some((number(&operands[0]), number(&operands[1]))),
            "l" => {
                let to = (number(&operands[0]), number(&operands[1]));
                if let Some(from) = cursor {
                    page.strokes.push(Stroke { from, to, color });
                }
                cursor = Some(to);
            }
            _ => {}
        }
    }
    page
}

#[test]
fn scenario_renders_five_pages() {
    let report = render_scenario();

    assert!(report.bytes.starts_with(b"%PDF"));
    assert_eq!(report.page_count, 5);

    let parsed = lopdf::Document::load_mem(&report.bytes).expect("rendered PDF parses");
    assert_eq!(parsed.get_pages().len(), 5);
}

#[test]
fn outline_marks_each_logical_page() {
    let report = render_scenario();

    let outline: Vec<(&str, usize)> = report
        .outline
        .iter()
        .map(|entry| (entry.title.as_str(), entry.page))
        .collect();
    assert_eq!(
        outline,
        vec![
            ("Time Freedom Report", 1),
            ("Top 5 Daily Tasks", 2),
            ("Top 5 Weekly Tasks", 3),
            ("Top 5 Monthly Tasks", 4),
            ("Next Steps", 5),
        ]
    );
}

#[test]
fn rendering_is_repeatable() {
    let first = render_scenario();
    let second = render_scenario();

    assert_eq!(first.page_count, second.page_count);
    assert_eq!(first.outline, second.outline);
    assert_eq!(first.bytes.len(), second.bytes.len(), "PDF sizes should match");
}

#[test]
fn generate_writes_to_the_requested_path() {
    let first = temp_pdf("first");
    let second = temp_pdf("second");

    let written = builder()
        .generate(&scenario(), &first)
        .expect("first generate succeeds");
    builder()
        .generate(&scenario(), &second)
        .expect("second generate succeeds");

    assert_eq!(written, first);
    let bytes_a = std::fs::read(&first).expect("first output exists");
    let bytes_b = std::fs::read(&second).expect("second output exists");
    assert!(!bytes_a.is_empty());
    assert_eq!(bytes_a.len(), bytes_b.len());

    let _ = std::fs::remove_file(first);
    let _ = std::fs::remove_file(second);
}

#[test]
fn empty_categories_still_render() {
    let mut data = scenario();
    data.daily_tasks.clear();
    data.weekly_tasks.clear();
    data.monthly_tasks.clear();

    let report = builder().render(&data).expect("report renders");
    assert_eq!(report.page_count, 5);
}

#[test]
fn five_cards_per_page_stay_on_one_sheet() {
    let mut data = scenario();
    data.daily_tasks = (1..=5)
        .map(|i| {
            Task::new(
                format!("Daily task {i}"),
                "A description long enough to be cut off at ninety characters when it is drawn \
                 on the card itself.",
                "1 hr/day",
            )
        })
        .collect();

    let report = builder().render(&data).expect("report renders");
    assert_eq!(report.page_count, 5);
}

#[test]
fn invalid_numbers_are_rejected() {
    let mut data = scenario();
    data.roi_multiplier = -1.0;

    let err = builder().render(&data).unwrap_err();
    assert!(matches!(
        err,
        ReportError::InvalidData {
            field: "roi_multiplier",
            ..
        }
    ));
}

#[test]
fn json_input_renders() {
    let json = r#"{
        "client_name": "Sam Rivera",
        "date": "April 2025",
        "annual_value": 72000,
        "weekly_hours": 14.5,
        "total_tasks_ea": 9,
        "ea_investment": 18000,
        "net_return": 54000,
        "roi_multiplier": 4.0,
        "analysis_text": "Scheduling and follow-ups dominate the week.",
        "daily_tasks": [
            {"name": "Calendar", "description": "Keep the calendar clean.", "time_saved": "3 hrs/week"}
        ],
        "weekly_tasks": [],
        "monthly_tasks": []
    }"#;

    let data = ReportData::from_json(json).expect("valid JSON record");
    assert_eq!(builder().build_flow(&data).page_count(), 5);
}

#[cfg(feature = "bookmarks")]
#[test]
fn bookmarks_are_embedded() {
    let report = builder().render_with_bookmarks(&scenario()).expect("report renders");

    let parsed = lopdf::Document::load_mem(&report.bytes).expect("bookmarked PDF parses");
    let catalog = parsed.catalog().expect("catalog present");
    assert!(catalog.has(b"Outlines"));
    assert_eq!(parsed.get_pages().len(), 5);
}

#[test]
fn summary_page_shows_the_hero_value() {
    let report = render_scenario();
    let page = decode_page(&report, 1);

    assert!(page.text.contains("$50,000"), "page 1 text:\n{}", page.text);
    assert!(page.text.contains("Annual value you could unlock by delegating"));
    assert!(page.text.contains("3.2x ROI"));
}

#[test]
fn investment_background_is_painted_across_its_height() {
    let report = render_scenario();
    let page = decode_page(&report, 1);

    let background = DesignTokens::default().palette.background;
    let expected = [background.r, background.g, background.b].map(|c| f64::from(c) / 255.0);
    // Centre band of the rounded background: content width less both corner radii.
    let band_length = 504.0 - 2.0 * 8.0;

    let mut rows: Vec<f64> = page
        .strokes
        .iter()
        .filter(|stroke| (stroke.from.1 - stroke.to.1).abs() < 0.01)
        .filter(|stroke| ((stroke.to.0 - stroke.from.0).abs() - band_length).abs() < 0.5)
        .filter(|stroke| {
            stroke.color.map_or(false, |color| {
                color
                    .iter()
                    .zip(expected.iter())
                    .all(|(got, want)| (got - want).abs() < 0.01)
            })
        })
        .map(|stroke| stroke.from.1)
        .collect();
    rows.sort_by(f64::total_cmp);

    assert!(rows.len() > 100, "only {} background strokes", rows.len());
    let covered = rows[rows.len() - 1] - rows[0] + 1.0;
    assert!((covered - 125.0).abs() < 0.1, "background covers {covered} pt");
    for pair in rows.windows(2) {
        assert!(pair[1] - pair[0] <= 1.0, "gap between {} and {}", pair[0], pair[1]);
    }
}

#[test]
fn whole_multiplier_keeps_its_decimal_on_the_page() {
    let mut data = scenario();
    data.roi_multiplier = 4.0;

    let report = builder().render(&data).expect("report renders");
    let page = decode_page(&report, 1);
    assert!(page.text.contains("4.0x\n"), "page 1 text:\n{}", page.text);
    assert!(page.text.contains("4.0x ROI"));
}
