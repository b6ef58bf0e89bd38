//! HTML grade sheet generator.
//!
//! Produces a self-contained HTML file with all CSS inlined.

use std::path::Path;

use anyhow::Result;

use examgrade_core::results::ResultCollection;
use examgrade_core::summary::summarize;

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Generate an HTML grade sheet from a result collection.
pub fn generate_html(collection: &ResultCollection) -> String {
    let summary = summarize(collection);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!(
        "<title>examgrade results — {}</title>\n",
        html_escape(&collection.exam_id)
    ));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>examgrade results</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">Exam: <strong>{}</strong> | {} graded | mean {:.1} | highest {} | lowest {}</p>\n",
        html_escape(&collection.exam_id),
        summary.graded,
        summary.mean_score,
        summary.highest,
        summary.lowest,
    ));
    html.push_str("</header>\n");

    // Per-student results
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Results</h2>\n");
    html.push_str("<table class=\"results-table\">\n");
    html.push_str(
        "<thead><tr><th>Roll No</th><th>Student</th><th>Score</th><th>Max</th><th>Time (s)</th></tr></thead>\n",
    );
    html.push_str("<tbody>\n");

    for record in &collection.results {
        let row_class = if record.score == record.max_score {
            "full"
        } else if record.score == 0 {
            "zero"
        } else {
            ""
        };
        html.push_str(&format!(
            "<tr class=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            row_class,
            html_escape(&record.roll_no),
            html_escape(&record.student_name),
            record.score,
            record.max_score,
            record.time_taken_seconds,
        ));
    }

    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(collection)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("</body>\n</html>\n");
    html
}

/// Write the HTML grade sheet to a file.
pub fn write_html_report(collection: &ResultCollection, path: &Path) -> Result<()> {
    let html = generate_html(collection);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, html)?;
    Ok(())
}

const CSS: &str = r#"
body { font-family: -apple-system, "Segoe UI", sans-serif; margin: 2rem auto; max-width: 60rem; color: #222; }
header h1 { margin-bottom: 0.25rem; }
.meta { color: #666; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid #ddd; padding: 0.4rem 0.6rem; text-align: left; }
th { background: #f5f5f5; }
tr.full td { background: #eaf7ea; }
tr.zero td { background: #fbecec; }
.raw-data pre { background: #f8f8f8; padding: 1rem; overflow-x: auto; }
"#;
