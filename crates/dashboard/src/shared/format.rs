//! Plain-text rendering of list pages for the terminal

use contracts::shared::assets::AssetResolver;
use contracts::shared::list_query::PageInfo;

/// Форматирует число с разделителями тысяч (точками)
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// A record printable as one table row.
///
/// Image columns are resolved against the asset host.
pub trait TableRow {
    fn headers() -> Vec<&'static str>;
    fn cells(&self, assets: &AssetResolver) -> Vec<String>;
}

/// Renders rows as an aligned text table followed by the page counter.
pub fn render_table<R: TableRow>(rows: &[&R], info: &PageInfo, assets: &AssetResolver) -> String {
    let headers = R::headers();
    let cells: Vec<Vec<String>> = rows.iter().map(|r| r.cells(assets)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            if let Some(w) = widths.get_mut(i) {
                *w = (*w).max(cell.chars().count());
            }
        }
    }

    let line = |values: Vec<&str>| -> String {
        values
            .iter()
            .zip(&widths)
            .map(|(v, w)| format!("{:<width$}", v, width = *w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut out = String::new();
    out.push_str(&line(headers.clone()));
    out.push('\n');
    out.push_str(
        &widths
            .iter()
            .map(|w| "-".repeat(*w))
            .collect::<Vec<_>>()
            .join("-+-"),
    );
    out.push('\n');
    if cells.is_empty() {
        out.push_str("No records found.\n");
    }
    for row in &cells {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
        out.push('\n');
    }
    out.push_str(&format!(
        "Page {} | {} records{}\n",
        info.label(),
        format_number(info.total_count),
        page_hints(info)
    ));
    out
}

// --page flags of the neighbouring pages
fn page_hints(info: &PageInfo) -> String {
    let mut hints = String::new();
    if info.has_previous() {
        hints.push_str(&format!(" | prev: --page {}", info.page - 1));
    }
    if info.has_next() {
        hints.push_str(&format!(" | next: --page {}", info.page + 1));
    }
    hints
}

/// Empty optional cell
pub fn or_dash(value: Option<&str>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or("-").to_string()
}
