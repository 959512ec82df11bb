use std::fmt;

use derive_more::Display;

/// A single entry of a scanned directory tree.
///
/// The `Display` output is the label printed after the connector glyph.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Node {
    #[display("{name}")]
    Directory { name: String, children: Vec<Node> },
    #[display("{name} ({})", SizeLabel(*size))]
    File { name: String, size: u64 },
}

impl Node {
    pub fn directory(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Directory {
            name: name.into(),
            children,
        }
    }

    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Node::File {
            name: name.into(),
            size,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Directory { name, .. } | Node::File { name, .. } => name,
        }
    }

    /// Children of a directory. Files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Directory { children, .. } => children,
            Node::File { .. } => &[],
        }
    }

    pub fn is_directory(&self) -> bool {
        matches!(self, Node::Directory { .. })
    }
}

struct SizeLabel(u64);

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            0 => f.write_str("empty"),
            size => write!(f, "{size}b"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(0, "main.go (empty)")]
    #[case(1, "main.go (1b)")]
    #[case(120, "main.go (120b)")]
    #[case(1_000_000, "main.go (1000000b)")]
    #[case(u64::MAX, "main.go (18446744073709551615b)")]
    fn test_file_label(#[case] size: u64, #[case] expected: &str) {
        assert_eq!(Node::file("main.go", size).to_string(), expected);
    }

    #[test]
    fn test_empty_file_is_never_zero_bytes() {
        let label = Node::file("empty.txt", 0).to_string();
        assert!(!label.contains("0b"));
    }

    #[test]
    fn test_directory_label_is_bare_name() {
        let directory = Node::directory("docs", vec![Node::file("readme.txt", 120)]);
        assert_eq!(directory.to_string(), "docs");
    }

    #[test]
    fn test_accessors() {
        let file = Node::file("a.txt", 3);
        let directory = Node::directory("src", vec![file.clone()]);

        assert_eq!(directory.name(), "src");
        assert!(directory.is_directory());
        assert_eq!(directory.children(), &[file.clone()]);

        assert_eq!(file.name(), "a.txt");
        assert!(!file.is_directory());
        assert!(file.children().is_empty());
    }
}
