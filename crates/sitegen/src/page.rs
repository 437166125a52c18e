//! Page generation: templates, link rewriting and the content walk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{copy_static, sorted_entries, Reporter};
use crate::builder::{extract_title, markdown_to_html};
use crate::options::{SiteOptions, CONTENT_PLACEHOLDER, TITLE_PLACEHOLDER};
use crate::{Result, SiteError};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Root-absolute `href`/`src` values; group 2 marks a protocol-relative `//`
static ROOT_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"\b(href|src)="/(/)?"#).expect("valid link attribute regex"));

/// Outcome of generating a tree of pages
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Pages written, in walk order
    pub generated: Vec<PathBuf>,
    /// Source documents that could not be converted
    pub failures: Vec<(PathBuf, SiteError)>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Substitute the title and content placeholders in `template`
pub fn fill_template(template: &str, title: &str, content: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
}

/// Rewrite root-absolute `href` and `src` attributes so they resolve
/// relative to `dest_path` inside `output_root`.
///
/// Protocol-relative values (`href="//cdn.example.com/..."`) are left as
/// they are. Pages outside `output_root` are returned unchanged.
pub fn relativize_links(html: &str, dest_path: &Path, output_root: &Path) -> String {
    let Some(relative_dir) = dest_path
        .parent()
        .and_then(|dir| dir.strip_prefix(output_root).ok())
    else {
        log::debug!(
            "{} is outside {}, leaving links as they are",
            dest_path.display(),
            output_root.display()
        );
        return html.to_string();
    };

    let prefix = "../".repeat(relative_dir.components().count());
    ROOT_LINK_RE
        .replace_all(html, |caps: &Captures| {
            if caps.get(2).is_some() {
                caps[0].to_string()
            } else {
                format!("{}=\"{prefix}", &caps[1])
            }
        })
        .into_owned()
}

/// Convert one Markdown file into an HTML page using a template file
pub fn generate_page(from: &Path, template_path: &Path, dest: &Path, output_root: &Path) -> Result<()> {
    log::info!(
        "Generating page from {} to {} using {}",
        from.display(),
        dest.display(),
        template_path.display()
    );
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
    write_page(from, &template, dest, output_root)
}

fn write_page(from: &Path, template: &str, dest: &Path, output_root: &Path) -> Result<()> {
    let markdown = fs::read_to_string(from).map_err(SiteError::io(from))?;

    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;
    let page = fill_template(template, &title, &content);
    let page = relativize_links(&page, dest, output_root);

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent).map_err(SiteError::io(parent))?;
    }
    fs::write(dest, page).map_err(SiteError::io(dest))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring the
/// directory layout under `dest_dir`.
///
/// A document that fails to convert is logged and recorded in the report;
/// the remaining documents are still generated.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
) -> Result<BuildReport> {
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;
    let mut report = BuildReport::default();
    let walk = Walk {
        template: &template,
        output_root: dest_dir,
    };
    walk.dir(content_dir, dest_dir, &mut report)?;
    Ok(report)
}

struct Walk<'a> {
    template: &'a str,
    output_root: &'a Path,
}

impl Walk<'_> {
    fn dir(&self, source: &Path, dest: &Path, report: &mut BuildReport) -> Result<()> {
        fs::create_dir_all(dest).map_err(SiteError::io(dest))?;

        for entry in sorted_entries(source)? {
            if entry.is_dir() {
                let name = entry.file_name().unwrap_or_default();
                self.dir(&entry, &dest.join(name), report)?;
                continue;
            }

            if entry.extension().is_some_and(|ext| ext == "md") {
                let target = dest.join(entry.with_extension("html").file_name().unwrap_or_default());
                log::info!("Generating page from {} to {}", entry.display(), target.display());
                match write_page(&entry, self.template, &target, self.output_root) {
                    Ok(()) => report.generated.push(target),
                    Err(err) => {
                        log::warn!("Skipping {}: {err}", entry.display());
                        report.failures.push((entry, err));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Copy static assets into the output directory, then generate all pages
pub fn build_site(options: &SiteOptions, reporter: &mut dyn Reporter) -> Result<BuildReport> {
    copy_static(&options.static_dir, &options.output_dir, reporter)?;
    generate_pages_recursive(&options.content_dir, &options.template_path, &options.output_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_template() {
        let template = "<title>{{ Title }}</title><main>{{ Content }}</main><h1>{{ Title }}</h1>";
        assert_eq!(
            fill_template(template, "Home", "<p>hi</p>"),
            "<title>Home</title><main><p>hi</p></main><h1>Home</h1>"
        );
    }

    #[test]
    fn test_fill_template_without_placeholders() {
        assert_eq!(fill_template("<p>static</p>", "t", "c"), "<p>static</p>");
    }

    #[test]
    fn test_relativize_links_at_root() {
        let html = r#"<a href="/blog">b</a><img src="/cat.png">"#;
        assert_eq!(
            relativize_links(html, Path::new("public/index.html"), Path::new("public")),
            r#"<a href="blog">b</a><img src="cat.png">"#
        );
    }

    #[test]
    fn test_relativize_links_nested() {
        let html = r#"<a href="/">home</a><link href="/index.css">"#;
        assert_eq!(
            relativize_links(
                html,
                Path::new("public/blog/tom/index.html"),
                Path::new("public")
            ),
            r#"<a href="../../">home</a><link href="../../index.css">"#
        );
    }

    #[test]
    fn test_relativize_links_keeps_external_urls() {
        let html = r#"<a href="https://boot.dev">x</a>"#;
        assert_eq!(
            relativize_links(html, Path::new("public/a/index.html"), Path::new("public")),
            html
        );
    }

    #[test]
    fn test_relativize_links_keeps_protocol_relative() {
        let html = r#"<script src="//cdn.example.com/a.js"></script><a href="/about">a</a>"#;
        assert_eq!(
            relativize_links(html, Path::new("public/blog/index.html"), Path::new("public")),
            r#"<script src="//cdn.example.com/a.js"></script><a href="../about">a</a>"#
        );
    }

    #[test]
    fn test_relativize_links_outside_root() {
        let html = r#"<a href="/x">x</a>"#;
        assert_eq!(
            relativize_links(html, Path::new("elsewhere/index.html"), Path::new("public")),
            html
        );
    }

    #[test]
    fn test_report_success() {
        let mut report = BuildReport::default();
        assert!(report.is_success());
        report
            .failures
            .push((PathBuf::from("a.md"), SiteError::NoTitleFound));
        assert!(!report.is_success());
    }
}
