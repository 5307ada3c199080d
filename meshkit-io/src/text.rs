//! Text format for configurations
//!
//! The format is line based:
//!
//! ```text
//! # comment
//! primitive=LineStrip
//! [mesh]
//! type=UnsignedByte
//! [mesh/lod]
//! label="  padded value  "
//! ```
//!
//! `[a/b]` opens a new group `b` inside the most recent group `a`. Values
//! wrapped in double quotes keep surrounding whitespace and support the
//! escapes `\\`, `\"`, `\n`, `\r` and `\t`.

use crate::configuration::ConfigurationGroup;
use crate::options::ConfigurationOptions;
use meshkit_core::{Error, Result};
use std::io::{BufRead, Write};

/// One parsed line
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Blank,
    Header(Vec<String>),
    Value(String, String),
}

/// Reader for configuration text
pub struct ConfigurationReader<'a> {
    options: &'a ConfigurationOptions,
}

impl<'a> ConfigurationReader<'a> {
    pub fn new(options: &'a ConfigurationOptions) -> Self {
        Self { options }
    }

    /// Read a whole configuration into its root group
    pub fn read<R: BufRead>(&self, reader: R) -> Result<ConfigurationGroup> {
        let mut root = ConfigurationGroup::new();
        let mut path: Vec<String> = Vec::new();
        let mut skipped = 0usize;

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = index + 1;

            match self.parse_line(&line) {
                Ok(Line::Blank) => {}
                Ok(Line::Header(names)) => {
                    Self::open_group(&mut root, &names);
                    path = names;
                }
                Ok(Line::Value(key, value)) => {
                    let group = path
                        .iter()
                        .fold(&mut root, |group, name| group.ensure_group(name));
                    group.add_raw(&key, value);
                }
                Err(message) => {
                    if self.options.strict {
                        return Err(Error::Parse {
                            line: line_number,
                            message,
                        });
                    }
                    log::warn!("Skipping configuration line {}: {}", line_number, message);
                    skipped += 1;
                }
            }
        }

        log::debug!(
            "Read configuration with {} values ({} lines skipped)",
            root.total_value_count(),
            skipped
        );
        Ok(root)
    }

    /// Create the group named by the last path component
    fn open_group(root: &mut ConfigurationGroup, names: &[String]) {
        let mut group = root;
        for (i, name) in names.iter().enumerate() {
            group = if i + 1 == names.len() {
                group.add_group(name)
            } else {
                group.ensure_group(name)
            };
        }
    }

    fn parse_line(&self, line: &str) -> std::result::Result<Line, String> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';') {
            return Ok(Line::Blank);
        }

        if let Some(rest) = trimmed.strip_prefix('[') {
            let inner = rest
                .strip_suffix(']')
                .ok_or_else(|| format!("unterminated group header {:?}", trimmed))?;
            let names: Vec<String> = inner.split('/').map(|name| name.trim().to_string()).collect();
            if names.iter().any(|name| name.is_empty()) {
                return Err(format!("empty group name in {:?}", trimmed));
            }
            return Ok(Line::Header(names));
        }

        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| format!("expected key=value, found {:?}", trimmed))?;
        let key = key.trim();
        if key.is_empty() {
            return Err("empty key".to_string());
        }

        Ok(Line::Value(key.to_string(), self.parse_value(value)?))
    }

    fn parse_value(&self, raw: &str) -> std::result::Result<String, String> {
        let trimmed = raw.trim();
        if trimmed.starts_with('"') {
            return unquote(trimmed);
        }

        if self.options.trim_values {
            Ok(trimmed.to_string())
        } else {
            Ok(raw.to_string())
        }
    }
}

fn unquote(quoted: &str) -> std::result::Result<String, String> {
    let inner = quoted
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(|| format!("unterminated quoted value {}", quoted))?;

    let mut value = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\\') => value.push('\\'),
                Some('"') => value.push('"'),
                Some('n') => value.push('\n'),
                Some('r') => value.push('\r'),
                Some('t') => value.push('\t'),
                Some(other) => return Err(format!("unknown escape \\{}", other)),
                None => return Err(format!("unterminated quoted value {}", quoted)),
            },
            '"' => return Err(format!("unescaped quote in {}", quoted)),
            _ => value.push(c),
        }
    }
    Ok(value)
}

/// Writer for configuration text
pub struct ConfigurationWriter<W: Write> {
    writer: W,
    started: bool,
}

impl<W: Write> ConfigurationWriter<W> {
    /// Write `root` and all nested groups
    pub fn write(root: &ConfigurationGroup, writer: W) -> Result<()> {
        let mut this = Self {
            writer,
            started: false,
        };
        let mut path = Vec::new();

        this.write_values(root)?;
        this.write_groups(root, &mut path)?;
        this.writer.flush()?;
        Ok(())
    }

    fn write_values(&mut self, group: &ConfigurationGroup) -> Result<()> {
        for (key, value) in group.entries() {
            validate_key(key)?;
            writeln!(self.writer, "{}={}", key, format_value(value))?;
            self.started = true;
        }
        Ok(())
    }

    fn write_groups<'g>(
        &mut self,
        group: &'g ConfigurationGroup,
        path: &mut Vec<&'g str>,
    ) -> Result<()> {
        for (name, child) in group.subgroups() {
            validate_group_name(name)?;
            path.push(name);

            if self.started {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "[{}]", path.join("/"))?;
            self.started = true;

            self.write_values(child)?;
            self.write_groups(child, path)?;
            path.pop();
        }
        Ok(())
    }
}

fn validate_key(key: &str) -> Result<()> {
    let representable = !key.is_empty()
        && key == key.trim()
        && !key.contains(['=', '\n', '\r'])
        && !key.starts_with(['[', '#', ';']);
    if representable {
        Ok(())
    } else {
        Err(Error::InvalidData(format!("Key {:?} cannot be written", key)))
    }
}

fn validate_group_name(name: &str) -> Result<()> {
    let representable =
        !name.is_empty() && name == name.trim() && !name.contains(['/', ']', '\n', '\r']);
    if representable {
        Ok(())
    } else {
        Err(Error::InvalidData(format!("Group name {:?} cannot be written", name)))
    }
}

fn format_value(value: &str) -> String {
    let needs_quotes =
        value != value.trim() || value.starts_with('"') || value.contains(['\n', '\r']);
    if !needs_quotes {
        return value.to_string();
    }

    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        match c {
            '\\' => quoted.push_str("\\\\"),
            '"' => quoted.push_str("\\\""),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            '\t' => quoted.push_str("\\t"),
            _ => quoted.push(c),
        }
    }
    quoted.push('"');
    quoted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(options: &ConfigurationOptions, line: &str) -> std::result::Result<Line, String> {
        ConfigurationReader::new(options).parse_line(line)
    }

    #[test]
    fn test_parse_line_kinds() {
        let options = ConfigurationOptions::default();

        assert_eq!(parse(&options, "   "), Ok(Line::Blank));
        assert_eq!(parse(&options, "# comment"), Ok(Line::Blank));
        assert_eq!(parse(&options, "; comment"), Ok(Line::Blank));
        assert_eq!(
            parse(&options, "[mesh / lod]"),
            Ok(Line::Header(vec!["mesh".to_string(), "lod".to_string()]))
        );
        assert_eq!(
            parse(&options, " primitive = LineStrip "),
            Ok(Line::Value("primitive".to_string(), "LineStrip".to_string()))
        );
        assert_eq!(
            parse(&options, "empty="),
            Ok(Line::Value("empty".to_string(), String::new()))
        );
    }

    #[test]
    fn test_parse_line_errors() {
        let options = ConfigurationOptions::default();

        assert!(parse(&options, "[mesh").is_err());
        assert!(parse(&options, "[mesh//lod]").is_err());
        assert!(parse(&options, "no separator").is_err());
        assert!(parse(&options, "=value").is_err());
        assert!(parse(&options, "key=\"open").is_err());
        assert!(parse(&options, "key=\"bad \\q escape\"").is_err());
    }

    #[test]
    fn test_untrimmed_values() {
        let options = ConfigurationOptions::default().with_trim_values(false);
        assert_eq!(
            parse(&options, "key= spaced "),
            Ok(Line::Value("key".to_string(), " spaced ".to_string()))
        );
    }

    #[test]
    fn test_quoting() {
        assert_eq!(format_value("plain value"), "plain value");
        assert_eq!(format_value(" padded "), "\" padded \"");
        assert_eq!(format_value("two\nlines"), "\"two\\nlines\"");
        assert_eq!(format_value("\"quoted\""), "\"\\\"quoted\\\"\"");

        for value in [" padded ", "two\nlines", "\"quoted\"", "back\\slash\t "] {
            assert_eq!(unquote(&format_value(value)).unwrap(), value);
        }
    }

    #[test]
    fn test_unwritable_names() {
        assert!(validate_key("a=b").is_err());
        assert!(validate_key("[section").is_err());
        assert!(validate_key(" padded").is_err());
        assert!(validate_key("vertexCount").is_ok());
        assert!(validate_group_name("a/b").is_err());
        assert!(validate_group_name("").is_err());
        assert!(validate_group_name("lod").is_ok());
    }
}
