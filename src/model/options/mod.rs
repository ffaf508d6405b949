//! Per-template compiler options
//!
//! Options can be set programmatically through typed setters, by name
//! through [`Options::set`], or from an `@option name=value` directive inside
//! the template through [`Options::parse_option`]. Every route funnels into
//! the same validation, so a template can never hold a value the typed
//! setters would reject.
//!
//! # Sharing
//!
//! [`TemplateModel::new`](crate::model::TemplateModel::new) copies the
//! options it is given. Hosts that really want one options object to steer
//! several templates wrap it in a [`SharedOptions`] and pass it to
//! [`TemplateModel::with_shared_options`](crate::model::TemplateModel::with_shared_options).

use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;

use encoding_rs::Encoding;
use indexmap::IndexMap;
use parking_lot::RwLock;
use serde::Deserialize;
use tracing::{debug, trace};

use super::content_type::ContentType;
use super::errors::{ConfigError, ParserError, TokenError};
use super::unit::OptionDirective;
use crate::util::span::SourceRef;

/// Base class generated templates extend unless told otherwise
pub const DEFAULT_EXTENDS_CLASS: &str = "com.fizzed.rocker.runtime.DefaultRockerTemplate";

/// Charset templates render with unless told otherwise
pub const DEFAULT_TARGET_CHARSET: &str = "UTF-8";

/// Options instance shared by reference between several templates
pub type SharedOptions = Arc<RwLock<Options>>;

/// Java language level the generated source must compile under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum JavaVersion {
    #[default]
    V1_8,
    V9,
    V11,
    V17,
    V21,
}

impl JavaVersion {
    pub const ALL: [JavaVersion; 5] = [
        JavaVersion::V1_8,
        JavaVersion::V9,
        JavaVersion::V11,
        JavaVersion::V17,
        JavaVersion::V21,
    ];

    /// Label used in directives, e.g. `1.8`
    pub fn label(self) -> &'static str {
        match self {
            JavaVersion::V1_8 => "1.8",
            JavaVersion::V9 => "9",
            JavaVersion::V11 => "11",
            JavaVersion::V17 => "17",
            JavaVersion::V21 => "21",
        }
    }

    /// Numeric feature release
    pub fn version(self) -> u32 {
        match self {
            JavaVersion::V1_8 => 8,
            JavaVersion::V9 => 9,
            JavaVersion::V11 => 11,
            JavaVersion::V17 => 17,
            JavaVersion::V21 => 21,
        }
    }

    pub fn find_by_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.label() == label)
    }
}

impl fmt::Display for JavaVersion {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for JavaVersion {
    type Err = TokenError;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        Self::find_by_label(label).ok_or_else(|| TokenError::UnsupportedJavaVersion {
            label: label.to_string(),
        })
    }
}

/// Closed set of option names accepted by [`Options::set`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKey {
    JavaVersion,
    DiscardLogicWhitespace,
    CombineAdjacentPlain,
    ExtendsClass,
    ImplementsInterface,
    TargetCharset,
}

impl OptionKey {
    pub const ALL: [OptionKey; 6] = [
        OptionKey::JavaVersion,
        OptionKey::DiscardLogicWhitespace,
        OptionKey::CombineAdjacentPlain,
        OptionKey::ExtendsClass,
        OptionKey::ImplementsInterface,
        OptionKey::TargetCharset,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKey::JavaVersion => "javaVersion",
            OptionKey::DiscardLogicWhitespace => "discardLogicWhitespace",
            OptionKey::CombineAdjacentPlain => "combineAdjacentPlain",
            OptionKey::ExtendsClass => "extendsClass",
            OptionKey::ImplementsInterface => "implementsInterface",
            OptionKey::TargetCharset => "targetCharset",
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OptionKey {
    type Err = TokenError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| TokenError::UnknownOption {
                name: name.to_string(),
            })
    }
}

/// Compiler-affecting settings of one template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    // generated source compatibility
    java_version: JavaVersion,
    // None defers to the content type's policy
    discard_logic_whitespace: Option<bool>,
    combine_adjacent_plain: bool,
    extends_class: String,
    implements_interface: Option<String>,
    target_charset: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            java_version: JavaVersion::default(),
            discard_logic_whitespace: None,
            combine_adjacent_plain: true,
            extends_class: DEFAULT_EXTENDS_CLASS.to_string(),
            implements_interface: None,
            target_charset: DEFAULT_TARGET_CHARSET.to_string(),
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Independent duplicate; later changes to either side stay local
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Move into a [`SharedOptions`] handle
    pub fn into_shared(self) -> SharedOptions {
        Arc::new(RwLock::new(self))
    }

    pub fn java_version(&self) -> JavaVersion {
        self.java_version
    }

    pub fn set_java_version(
        &mut self,
        java_version: JavaVersion,
    ) {
        self.java_version = java_version;
    }

    /// Gate for version-dependent code shapes in generated source
    pub fn is_greater_than_or_equal_to_java_version(
        &self,
        java_version: JavaVersion,
    ) -> bool {
        self.java_version.version() >= java_version.version()
    }

    pub fn discard_logic_whitespace(&self) -> Option<bool> {
        self.discard_logic_whitespace
    }

    /// Explicit setting if present, otherwise the content type's default
    pub fn discard_logic_whitespace_for_content_type(
        &self,
        content_type: ContentType,
    ) -> bool {
        self.discard_logic_whitespace
            .unwrap_or_else(|| content_type.discard_logic_whitespace())
    }

    pub fn set_discard_logic_whitespace(
        &mut self,
        discard_logic_whitespace: Option<bool>,
    ) {
        self.discard_logic_whitespace = discard_logic_whitespace;
    }

    pub fn combine_adjacent_plain(&self) -> bool {
        self.combine_adjacent_plain
    }

    pub fn set_combine_adjacent_plain(
        &mut self,
        combine_adjacent_plain: bool,
    ) {
        self.combine_adjacent_plain = combine_adjacent_plain;
    }

    pub fn extends_class(&self) -> &str {
        &self.extends_class
    }

    pub fn set_extends_class(
        &mut self,
        extends_class: impl Into<String>,
    ) {
        self.extends_class = extends_class.into();
    }

    pub fn implements_interface(&self) -> Option<&str> {
        self.implements_interface.as_deref()
    }

    pub fn set_implements_interface(
        &mut self,
        implements_interface: Option<String>,
    ) {
        self.implements_interface = implements_interface;
    }

    pub fn target_charset(&self) -> &str {
        &self.target_charset
    }

    /// Encoding behind `target_charset`, `None` if the label does not name
    /// an output encoding
    pub fn target_encoding(&self) -> Option<&'static Encoding> {
        Encoding::for_label_no_replacement(self.target_charset.as_bytes())
    }

    /// Validates against the charset registry; on failure the current
    /// value is kept. Decode-only labels (those the registry maps to its
    /// `replacement` encoding) are rejected.
    pub fn set_target_charset(
        &mut self,
        target_charset: &str,
    ) -> Result<(), TokenError> {
        if Encoding::for_label_no_replacement(target_charset.as_bytes()).is_none() {
            return Err(TokenError::UnknownCharset {
                charset: target_charset.to_string(),
            });
        }
        self.target_charset = target_charset.to_string();
        Ok(())
    }

    /// Set an option by name; both sides are trimmed first
    pub fn set(
        &mut self,
        name: &str,
        value: &str,
    ) -> Result<(), TokenError> {
        let name = name.trim();
        let value = value.trim();
        let key: OptionKey = name.parse()?;

        if value.is_empty() {
            return Err(TokenError::MissingValue {
                name: key.as_str().to_string(),
            });
        }

        match key {
            OptionKey::JavaVersion => self.set_java_version(value.parse()?),
            OptionKey::DiscardLogicWhitespace => {
                self.set_discard_logic_whitespace(Some(parse_boolean(key, value)?));
            }
            OptionKey::CombineAdjacentPlain => {
                self.set_combine_adjacent_plain(parse_boolean(key, value)?);
            }
            OptionKey::ExtendsClass => self.set_extends_class(value),
            OptionKey::ImplementsInterface => self.set_implements_interface(Some(value.to_string())),
            OptionKey::TargetCharset => self.set_target_charset(value)?,
        }

        trace!("option {} = {}", key, value);
        Ok(())
    }

    /// Apply a raw `name=value` statement taken from a template
    pub fn parse_option(
        &mut self,
        statement: &str,
        source_ref: &SourceRef,
    ) -> Result<(), ParserError> {
        let mut parts = statement.split('=');
        let (name, value) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(value), None) => (name, value),
            (_, None, _) => {
                return Err(ParserError::MissingEquals {
                    source_ref: source_ref.clone(),
                })
            }
            _ => {
                return Err(ParserError::MultipleEquals {
                    source_ref: source_ref.clone(),
                })
            }
        };

        self.set(name, value).map_err(|source| {
            debug!("rejected option directive {} at {}: {}", statement, source_ref, source);
            ParserError::InvalidOption {
                source_ref: source_ref.clone(),
                source,
            }
        })
    }

    /// [`parse_option`](Self::parse_option) for a directive unit
    pub fn parse_directive(
        &mut self,
        directive: &OptionDirective,
    ) -> Result<(), ParserError> {
        self.parse_option(&directive.statement, &directive.source_ref)
    }

    /// Apply every entry of a config `[options]` table, in file order
    ///
    /// All or nothing: if any entry fails, `self` is left untouched.
    pub fn apply_config(
        &mut self,
        config: &OptionsConfig,
    ) -> Result<(), TokenError> {
        let mut staged = self.copy();
        for (name, value) in &config.options {
            let value = match value {
                toml::Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            staged.set(name, &value)?;
        }
        *self = staged;
        Ok(())
    }

    /// Defaults overlaid with a TOML document's `[options]` table
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: OptionsConfig = toml::from_str(source)?;
        let mut options = Self::default();
        options.apply_config(&config)?;
        Ok(options)
    }
}

/// Raw `[options]` table of a config file, keys spelled as in directives
///
/// ```toml
/// [options]
/// javaVersion = "11"
/// combineAdjacentPlain = false
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OptionsConfig {
    #[serde(default)]
    pub options: IndexMap<String, toml::Value>,
}

/// Load default options from a TOML file
pub fn load_options(path: &Path) -> Result<Options, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let options = Options::from_toml_str(&content)?;
    debug!("loaded options from {}", path.display());
    Ok(options)
}

fn parse_boolean(
    key: OptionKey,
    value: &str,
) -> Result<bool, TokenError> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(TokenError::UnparsableBoolean {
            name: key.as_str().to_string(),
            value: value.to_string(),
        })
    }
}
