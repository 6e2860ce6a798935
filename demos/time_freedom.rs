use std::error::Error;

use time_freedom_report::{ReportBuilder, ReportData};

const SAMPLE: &str = include_str!("sample_report.json");

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let data = ReportData::from_json(SAMPLE)?;
    let report = ReportBuilder::new().render(&data)?;
    let path = report.write_to("time_freedom_report.pdf")?;
    println!(
        "Generated {} ({} pages, {} bytes)",
        path.display(),
        report.page_count,
        report.bytes.len()
    );
    Ok(())
}
