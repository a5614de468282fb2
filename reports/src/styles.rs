//! CSS styles for the HTML report.
//!
//! The stylesheet is inlined into the document head so the report is a
//! single self-contained file.
//!
//! # Customization
//!
//! ```rust
//! use narrative_leptos::styles::REPORT_CSS;
//!
//! let my_css = ".prose { font-size: 18px; }";
//! let combined = format!("{}\n{}", REPORT_CSS, my_css);
//! assert!(combined.contains(".prose"));
//! ```

/// Complete CSS for the report - a light reading layout with a sticky
/// table of contents.
pub const REPORT_CSS: &str = r#"
:root {
    --bg-page: #ffffff;
    --bg-soft: #f6f7f9;
    --bg-code: #f2f3f5;
    --text-main: #1f2328;
    --text-dim: #59636e;
    --text-muted: #8c959f;
    --border-subtle: rgba(31, 35, 40, 0.08);
    --border-visible: rgba(31, 35, 40, 0.16);
    --font-body: 'Source Serif Pro', Georgia, serif;
    --font-ui: system-ui, -apple-system, 'Segoe UI', sans-serif;
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --content-max: 760px;
    --accent: #4f81e1;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-body);
    background: var(--bg-page);
    color: var(--text-main);
    line-height: 1.65;
    margin: 0;
}

/* Layout Grid */
.report-layout {
    display: grid;
    grid-template-columns: 260px minmax(0, 1fr);
    align-items: flex-start;
    min-height: 100vh;
}

/* Sidebar */
.report-sidebar {
    border-right: 1px solid var(--border-visible);
    padding: 24px 16px;
    font-family: var(--font-ui);
    font-size: 13px;
    position: sticky;
    top: 0;
    max-height: 100vh;
    overflow: auto;
    background: var(--bg-soft);
}

.report-sidebar h2 {
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.2em;
    margin: 0 0 12px;
    color: var(--text-muted);
    font-weight: 500;
}

.report-sidebar ul {
    list-style: none;
    margin: 0;
    padding: 0;
}

.report-sidebar a {
    color: var(--text-dim);
    text-decoration: none;
    display: block;
    padding: 4px 8px;
    border-radius: 4px;
}

.report-sidebar a:hover {
    color: var(--text-main);
    background: var(--border-subtle);
}

/* Main Content */
.report-main {
    padding: 32px 32px 96px;
}

.report-block {
    max-width: var(--content-max);
    margin: 0 auto 20px;
}

.report-block h1 {
    font-size: 30px;
    line-height: 1.25;
    margin: 0 0 24px;
}

.report-block h2 {
    font-family: var(--font-ui);
    font-size: 22px;
    margin: 40px 0 8px;
    padding-top: 16px;
    border-top: 1px solid var(--border-subtle);
}

.report-block h3 {
    font-family: var(--font-ui);
    font-size: 17px;
    margin: 28px 0 8px;
}

.prose {
    margin: 0;
}

.prose p {
    margin: 0 0 12px;
}

.prose ul, .prose ol {
    margin: 0 0 12px;
    padding-left: 24px;
}

.prose li {
    margin: 2px 0;
}

.latex, .code-listing {
    font-family: var(--font-mono);
    font-size: 12px;
    white-space: pre-wrap;
    background: var(--bg-code);
    border: 1px solid var(--border-subtle);
    border-radius: 6px;
    padding: 12px 16px;
    margin: 0;
    overflow-x: auto;
}

.code-listing {
    white-space: pre;
}

.code-language {
    font-family: var(--font-ui);
    font-size: 10px;
    text-transform: uppercase;
    letter-spacing: 0.15em;
    color: var(--text-muted);
    margin-bottom: 4px;
}

/* Charts */
.chart-figure {
    margin: 16px 0;
    overflow-x: auto;
}

.chart-figure svg {
    display: block;
    margin: 0 auto;
    font-family: var(--font-ui);
}

.chart-figure .chart-title {
    font-weight: 700;
}

/* Images */
.image-figure {
    margin: 16px 0;
    text-align: center;
}

.image-figure img {
    max-width: 100%;
    height: auto;
    border: 1px solid var(--border-subtle);
}

.image-figure figcaption {
    font-family: var(--font-ui);
    font-size: 12px;
    color: var(--text-dim);
    margin-top: 6px;
}

/* Footer */
.report-footer {
    max-width: var(--content-max);
    margin: 48px auto 0;
    border-top: 1px solid var(--border-visible);
    padding-top: 12px;
    font-family: var(--font-ui);
    font-size: 11px;
    color: var(--text-muted);
}

/* Responsive */
@media (max-width: 960px) {
    .report-layout {
        display: block;
    }
    .report-sidebar {
        position: static;
        max-height: none;
        border-right: none;
        border-bottom: 1px solid var(--border-visible);
    }
    .report-main {
        padding: 16px;
    }
}
"#;

/// Content Security Policy for the generated document. Images are embedded
/// as `data:` URIs and no scripts are loaded.
pub const CSP: &str = "default-src 'none'; img-src data:; style-src 'unsafe-inline'; font-src data:;";
