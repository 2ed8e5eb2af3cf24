//! Medicine report export — one A4 page per medicine, via `printpdf`.

use std::io::BufWriter;

use chrono::NaiveDate;
use printpdf::*;

use crate::models::MedicineRecord;

pub const REPORT_TITLE: &str = "PharmaQuest Medical Report";

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

/// Printable content of a report, assembled before rendering.
#[derive(Debug, Clone)]
pub struct MedicineReport {
    pub title: String,
    pub medicine: String,
    pub lines: Vec<String>,
    pub generated_on: NaiveDate,
}

impl MedicineReport {
    pub fn from_record(med: &MedicineRecord, generated_on: NaiveDate) -> Self {
        let mut lines = vec![
            format!("Dosage: {}", med.dosage),
            format!("Shelf life: {} months", med.expiry_months),
            format!("Min Age: {}+", med.min_age),
            format!("Usage: {}", med.usage),
        ];
        if !med.symptoms.is_empty() {
            lines.push(format!("Treats: {}", med.symptoms.tokens().join(", ")));
        }
        Self {
            title: REPORT_TITLE.to_string(),
            medicine: med.name.clone(),
            lines,
            generated_on,
        }
    }
}

/// Download name for a report: unsafe filename characters become `_`.
pub fn report_filename(medicine: &str) -> String {
    let safe: String = medicine
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{safe}_Report.pdf")
}

/// Render the report. Returns PDF bytes.
pub fn generate_report_pdf(report: &MedicineReport) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) = PdfDocument::new(&report.title, Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font error: {e}")))?;

    let mut y = Mm(277.0);

    // Title in the app's teal
    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 121.0 / 255.0, 107.0 / 255.0, None)));
    layer.use_text(&report.title, 22.0, Mm(20.0), y, &bold);
    y -= Mm(20.0);

    layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
    layer.use_text(format!("Medicine: {}", report.medicine), 14.0, Mm(20.0), y, &bold);
    y -= Mm(10.0);

    for line in &report.lines {
        for wrapped in wrap_text(line, 80) {
            layer.use_text(&wrapped, 12.0, Mm(20.0), y, &font);
            y -= Mm(6.0);
        }
        y -= Mm(4.0);
    }

    y -= Mm(6.0);
    layer.use_text(
        format!("Generated on {}", report.generated_on.format("%B %-d, %Y")),
        9.0,
        Mm(20.0),
        y,
        &font,
    );

    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer error: {e}")))
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
