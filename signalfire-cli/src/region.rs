//! Regions the director list can be written to.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use regex::Regex;
use signalfire::Region;

/// Element id of the director list container.
pub const DIRECTORS_LIST_ID: &str = "directors-list";

/// Writes the markup to stdout.
#[derive(Debug, Default)]
pub struct StdoutRegion;

impl Region for StdoutRegion {
    fn replace(&mut self, markup: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{markup}")?;
        stdout.flush()
    }
}

/// Rewrites the contents of one element in an HTML file.
///
/// The element is located by its `id` attribute and its contents run up to
/// the first closing tag of the same name, so the container must not nest an
/// element of its own tag name.
#[derive(Debug)]
pub struct HtmlFileRegion {
    path: PathBuf,
    id: String,
}

impl HtmlFileRegion {
    /// Region for the element with `id` inside the file at `path`.
    pub fn new(path: impl Into<PathBuf>, id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            id: id.into(),
        }
    }

    /// Path of the document.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Region for HtmlFileRegion {
    fn replace(&mut self, markup: &str) -> io::Result<()> {
        let document = fs::read_to_string(&self.path)?;
        let updated = replace_element_contents(&document, &self.id, markup)?;
        fs::write(&self.path, updated)
    }
}

/// Replace everything between the opening tag carrying `id` and its closing tag.
pub fn replace_element_contents(document: &str, id: &str, markup: &str) -> io::Result<String> {
    let pattern = format!(
        r#"<([A-Za-z][A-Za-z0-9-]*)\b[^>]*\sid\s*=\s*["']{}["'][^>]*>"#,
        regex::escape(id)
    );
    let open = Regex::new(&pattern).map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let captures = open.captures(document).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            format!("no element with id \"{id}\" in document"),
        )
    })?;
    let (Some(tag), Some(whole)) = (captures.get(1), captures.get(0)) else {
        return Err(io::Error::new(io::ErrorKind::InvalidData, "malformed opening tag"));
    };

    let start = whole.end();
    let close = format!("</{}", tag.as_str().to_ascii_lowercase());
    let end = document[start..]
        .to_ascii_lowercase()
        .find(&close)
        .map(|offset| start + offset)
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("element \"{id}\" is never closed"),
            )
        })?;

    let mut updated = String::with_capacity(document.len() + markup.len());
    updated.push_str(&document[..start]);
    updated.push_str(markup);
    updated.push_str(&document[end..]);
    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
<h1>Directors</h1>
<div class="list" id="directors-list"><p>Loading…</p></div>
<footer>signalfire</footer>
</body></html>"#;

    #[test]
    fn test_replace_element_contents() {
        let updated =
            replace_element_contents(PAGE, DIRECTORS_LIST_ID, "<ol><li>A</li></ol>").unwrap();
        assert!(updated.contains(r#"<div class="list" id="directors-list"><ol><li>A</li></ol></div>"#));
        assert!(updated.contains("<footer>signalfire</footer>"));
        assert!(!updated.contains("Loading"));
    }

    #[test]
    fn test_replace_twice_is_stable() {
        let once = replace_element_contents(PAGE, DIRECTORS_LIST_ID, "<ol></ol>").unwrap();
        let twice = replace_element_contents(&once, DIRECTORS_LIST_ID, "<ol></ol>").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_data_id_attribute_not_matched() {
        let page = r#"<section data-id="directors-list">keep</section><div id="directors-list"></div>"#;
        let updated = replace_element_contents(page, DIRECTORS_LIST_ID, "<ol></ol>").unwrap();
        assert_eq!(
            updated,
            r#"<section data-id="directors-list">keep</section><div id="directors-list"><ol></ol></div>"#
        );
    }

    #[test]
    fn test_missing_element() {
        let err = replace_element_contents("<div id=\"other\"></div>", DIRECTORS_LIST_ID, "<ol></ol>")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_unclosed_element() {
        let err = replace_element_contents("<div id='directors-list'>", DIRECTORS_LIST_ID, "<ol></ol>")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_html_file_region() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, PAGE).unwrap();

        let mut region = HtmlFileRegion::new(&path, DIRECTORS_LIST_ID);
        region.replace("<ol><li>B</li></ol>").unwrap();

        let written = fs::read_to_string(region.path()).unwrap();
        assert!(written.contains("<ol><li>B</li></ol></div>"));
    }
}
