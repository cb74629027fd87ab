use crate::components::{render_footer, render_header, render_page};
use retriever_site_core::{PageContent, Site};

/// HTML-escape a string for text and attribute positions
///
/// Escapes: & < > " '
fn html_escape(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#x27;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

/// Document title: "Page | Site", falling back to whichever part exists
fn document_title(site_title: &str, page: &PageContent) -> String {
    match page.title.as_deref() {
        Some(page_title) if !site_title.is_empty() => format!("{} | {}", page_title, site_title),
        Some(page_title) => page_title.to_string(),
        None => site_title.to_string(),
    }
}

/// Compose the shared chrome around a page and wrap it in a full document.
///
/// The header is absolutely positioned over the top of the page, so the
/// content column is padded to clear it and the pinned footer.
pub fn render_document(site: &Site, page: &PageContent) -> String {
    let header = render_header(&site.config, &site.theme);
    let content = render_page(page);
    let footer = render_footer(&site.partners, &site.theme);

    let title = html_escape(&document_title(&site.config.title, page));
    let description = site
        .config
        .description
        .as_deref()
        .map(|d| format!(r#"<meta name="description" content="{}">"#, html_escape(d)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    {description}
    <style>
        html, body {{ margin: 0; padding: 0; min-height: 100%; }}
        body {{ position: relative; font-family: sans-serif; color: {text_color}; }}
    </style>
</head>
<body>
    {header}
    <main style="margin:0 auto;max-width:{max_width};padding:{padding_top} 1.0875rem {footer_height}">
        {content}
    </main>
    {footer}
</body>
</html>
"#,
        text_color = site.theme.text_color,
        footer_height = site.theme.footer_height,
        max_width = site.theme.content_max_width,
        padding_top = site.theme.content_padding_top,
    )
}
