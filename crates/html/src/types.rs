/// A lexical unit of a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// A non-empty run of characters outside any tag.
    Text(String),
    /// Raw content between `<` and `>`: name plus any attributes, verbatim.
    Tag(String),
}

