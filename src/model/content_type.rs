//! Output content types derived from template file names

use std::fmt;

/// Output format of a template, taken from its last file extension
/// (`index.rocker.html` renders HTML).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentType {
    #[default]
    Raw,
    Html,
    Json,
    Xml,
    Css,
    Js,
}

impl ContentType {
    /// Look up by file extension, case-insensitive
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "raw" | "txt" => Some(ContentType::Raw),
            "html" | "htm" => Some(ContentType::Html),
            "json" => Some(ContentType::Json),
            "xml" => Some(ContentType::Xml),
            "css" => Some(ContentType::Css),
            "js" => Some(ContentType::Js),
            _ => None,
        }
    }

    /// Content type for a template file name; unknown extensions render raw
    pub fn from_template_name(template_name: &str) -> Self {
        template_name
            .rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
            .unwrap_or_default()
    }

    /// Built-in whitespace policy used when a template does not set
    /// `discardLogicWhitespace` itself
    pub fn discard_logic_whitespace(self) -> bool {
        matches!(self, ContentType::Html | ContentType::Xml)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Raw => "RAW",
            ContentType::Html => "HTML",
            ContentType::Json => "JSON",
            ContentType::Xml => "XML",
            ContentType::Css => "CSS",
            ContentType::Js => "JS",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short template identifier: everything before the first `.`
/// (`index.rocker.html` -> `index`)
pub fn template_name_to_name(template_name: &str) -> &str {
    template_name
        .split_once('.')
        .map_or(template_name, |(name, _)| name)
}
