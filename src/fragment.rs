//! Input models: positioned text fragments and the pages that own them.
//!
//! A [`Fragment`] is one visually distinct run of text on a page, as emitted
//! by the external PDF-to-XML conversion step. Fragments are consumed by row
//! clustering and never retained afterwards.

/// A positioned unit of text extracted from a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    /// Vertical pixel offset of the fragment's bounding box
    pub top: i32,
    /// Horizontal pixel offset of the fragment's bounding box
    pub left: i32,
    /// Text content (all text nodes under the fragment, concatenated)
    pub text: String,
}

impl Fragment {
    /// Create a new fragment.
    ///
    /// # Examples
    ///
    /// ```
    /// use retable::Fragment;
    ///
    /// let fragment = Fragment::new(100, 116, "482 Ministry of Finance");
    /// assert_eq!(fragment.top, 100);
    /// assert_eq!(fragment.left, 116);
    /// ```
    pub fn new(top: i32, left: i32, text: impl Into<String>) -> Self {
        Self {
            top,
            left,
            text: text.into(),
        }
    }
}

/// One page of a source document: a page number and its fragments.
///
/// Pages are independent units; processing one page never touches another.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    /// 1-based page number from the source document
    pub number: u32,
    /// Fragments in discovery order (document order, not position order)
    pub fragments: Vec<Fragment>,
}

impl Page {
    /// Create an empty page with the given number.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            fragments: Vec::new(),
        }
    }
}
