//! Declaration output described as fragments.
//!
//! Builders such as an interface or alias describe their text as
//! [`CodeFragment`]s; [`CodeBuilder`](super::CodeBuilder) lays them out.

#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// One line, indented at the current level.
    Line(String),
    /// Header line, body one level deeper, then an optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// A doc comment, one line per `\n`-separated line of text.
    JsDoc(String),
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    pub fn jsdoc(s: impl Into<String>) -> Self {
        Self::JsDoc(s.into())
    }
}

/// A node that knows how to describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}
