//! Span 单元测试
//!
//! 测试源位置跟踪的 Position、Span、SourceRef 和 SourceFile

use crate::util::span::{console_friendly_text, Position, SourceFile, SourceRef, Span};

#[cfg(test)]
mod position_tests {
    use super::*;

    #[test]
    fn test_position_creation() {
        let pos = Position::new(1, 5);
        assert_eq!(pos.line, 1);
        assert_eq!(pos.column, 5);
        assert_eq!(pos.offset, 0);
    }

    #[test]
    fn test_position_dummy() {
        let pos = Position::dummy();
        assert_eq!(pos, Position::with_offset(0, 0, 0));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(10, 20).to_string(), "10:20");
    }
}

#[cfg(test)]
mod span_tests {
    use super::*;

    #[test]
    fn test_span_is_dummy() {
        assert!(Span::dummy().is_dummy());

        let real = Span::new(Position::new(1, 1), Position::new(1, 10));
        assert!(!real.is_dummy());
    }

    #[test]
    fn test_span_len() {
        let span = Span::new(
            Position::with_offset(1, 1, 0),
            Position::with_offset(1, 5, 100),
        );
        assert_eq!(span.len(), 100);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_display() {
        let span = Span::new(Position::new(1, 1), Position::new(1, 10));
        assert_eq!(span.to_string(), "[1:1 - 1:10]");
    }
}

#[cfg(test)]
mod source_ref_tests {
    use super::*;

    #[test]
    fn test_source_ref_at() {
        let source_ref = SourceRef::at(3, 7, "@for (i : items) {");
        assert_eq!(source_ref.line(), 3);
        assert_eq!(source_ref.column(), 7);
        assert_eq!(source_ref.text(), "@for (i : items) {");
        assert_eq!(source_ref.to_string(), "[3, 7]");
    }

    #[test]
    fn test_console_friendly_text() {
        let source_ref = SourceRef::at(1, 1, "<p>\r\n\tHi</p>");
        assert_eq!(source_ref.console_friendly_text(), "<p>\\r\\n\\tHi</p>");
        assert_eq!(console_friendly_text("plain"), "plain");
    }

    #[test]
    fn test_source_ref_dummy() {
        let source_ref = SourceRef::dummy();
        assert!(source_ref.span.is_dummy());
        assert!(source_ref.text().is_empty());
    }
}

#[cfg(test)]
mod source_file_tests {
    use super::*;

    #[test]
    fn test_source_file_display() {
        let file = SourceFile::new("index.rocker.html", "");
        assert_eq!(file.to_string(), "index.rocker.html");
    }

    #[test]
    fn test_source_file_position_from_offset_multiline() {
        let file = SourceFile::new("test.rocker.html", "line1\nline2\nline3");
        assert_eq!(file.line_count(), 3);

        let pos5 = file.position_from_offset(5);
        assert_eq!((pos5.line, pos5.column), (1, 6));

        let pos6 = file.position_from_offset(6);
        assert_eq!((pos6.line, pos6.column), (2, 1));

        let pos12 = file.position_from_offset(12);
        assert_eq!((pos12.line, pos12.column), (3, 1));
    }

    #[test]
    fn test_source_file_columns_count_chars() {
        let file = SourceFile::new("test.rocker.html", "héllo @name");
        // "héllo " is 7 bytes but 6 chars
        let pos = file.position_from_offset(7);
        assert_eq!(pos.column, 7);
        assert_eq!(pos.offset, 7);
    }

    #[test]
    fn test_source_file_source_ref() {
        let file = SourceFile::new("test.rocker.html", "<h1>\n@title\n</h1>");
        let source_ref = file.source_ref(5, 11);
        assert_eq!(source_ref.line(), 2);
        assert_eq!(source_ref.column(), 1);
        assert_eq!(source_ref.text(), "@title");
    }

    #[test]
    fn test_source_file_source_text_none() {
        let file = SourceFile::new("test.rocker.html", "hello");
        let span = Span::new(
            Position::with_offset(1, 1, 10),
            Position::with_offset(1, 1, 15),
        );
        assert_eq!(file.source_text(span), None);
        assert_eq!(file.source_ref(10, 15).text(), "");
    }

    #[test]
    fn test_source_file_empty_content() {
        let file = SourceFile::new("empty.rocker.html", "");
        let pos = file.position_from_offset(0);
        assert_eq!((pos.line, pos.column), (1, 1));
    }
}
