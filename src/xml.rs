//! Positioned-fragment XML input adapter.
//!
//! Parses the XML representation produced by PDF-to-XML conversion
//! (`pdftohtml -xml` style):
//!
//! ```text
//! <pdf2xml>
//!   <page number="1" ...>
//!     <text top="100" left="116" ...>482 <b>Ministry of Finance</b></text>
//!     ...
//!   </page>
//! </pdf2xml>
//! ```
//!
//! Only `page` and `text` elements matter; everything else (fonts, images)
//! is skipped. A fragment's text is the concatenation of all text nodes under
//! its element, so inline markup like `<b>` or `<i>` is transparent.
//!
//! Conversion from a *binary* document to this XML is the external driver's
//! job; this module only consumes the already-converted representation.

use crate::error::{Error, Result};
use crate::fragment::{Fragment, Page};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

/// Parse a positioned-fragment XML document into its pages.
///
/// # Errors
///
/// - [`Error::MissingAttribute`] / [`Error::InvalidAttribute`] when a `text`
///   element lacks an integer `top` or `left` — fatal for the document, per
///   the input-malformation policy.
/// - [`Error::Malformed`] when a `text` element appears outside any `page`.
/// - [`Error::Xml`] for malformed XML.
///
/// # Examples
///
/// ```
/// let xml = r#"<pdf2xml>
///   <page number="1">
///     <text top="100" left="116">482 Ministry of Finance</text>
///   </page>
/// </pdf2xml>"#;
///
/// let pages = retable::xml::parse_pages(xml).unwrap();
/// assert_eq!(pages.len(), 1);
/// assert_eq!(pages[0].fragments[0].text, "482 Ministry of Finance");
/// ```
pub fn parse_pages(xml: &str) -> Result<Vec<Page>> {
    let mut reader = Reader::from_str(xml);

    let mut pages: Vec<Page> = Vec::new();
    let mut current_page: Option<Page> = None;
    // (top, left, accumulated text) of the open <text> element
    let mut current_fragment: Option<(i32, i32, String)> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                b"page" => {
                    let number = get_attribute(e, "number")
                        .and_then(|v| v.trim().parse().ok())
                        .unwrap_or(pages.len() as u32 + 1);
                    current_page = Some(Page::new(number));
                },
                b"text" => {
                    if current_page.is_none() {
                        return Err(Error::Malformed(
                            "text fragment outside of a page".to_string(),
                        ));
                    }
                    let top = position_attribute(e, "top")?;
                    let left = position_attribute(e, "left")?;
                    current_fragment = Some((top, left, String::new()));
                },
                _ => {},
            },
            Ok(Event::Empty(ref e)) => {
                // Self-closing <text .../> carries no content but still
                // occupies a position.
                if e.local_name().as_ref() == b"text" {
                    let page = current_page.as_mut().ok_or_else(|| {
                        Error::Malformed("text fragment outside of a page".to_string())
                    })?;
                    let top = position_attribute(e, "top")?;
                    let left = position_attribute(e, "left")?;
                    page.fragments.push(Fragment::new(top, left, ""));
                }
            },
            Ok(Event::Text(e)) => {
                if let Some((_, _, ref mut text)) = current_fragment {
                    text.push_str(&e.unescape()?);
                }
            },
            Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                b"text" => {
                    if let (Some(page), Some((top, left, text))) =
                        (current_page.as_mut(), current_fragment.take())
                    {
                        page.fragments.push(Fragment::new(top, left, text));
                    }
                },
                b"page" => {
                    if let Some(page) = current_page.take() {
                        pages.push(page);
                    }
                },
                _ => {},
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            Ok(_) => {},
        }
    }

    Ok(pages)
}

/// Get an attribute value from an element.
fn get_attribute(e: &BytesStart<'_>, name: &str) -> Option<String> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name.as_bytes() {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}

/// Get a required integer position attribute.
fn position_attribute(e: &BytesStart<'_>, name: &'static str) -> Result<i32> {
    let value = get_attribute(e, name).ok_or(Error::MissingAttribute(name))?;
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAttribute { name, value })
}
