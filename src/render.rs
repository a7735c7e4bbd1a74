//! Generates the JS module the front-end imports its translations from
//!
//! ```js
//! // Auto-Generated, do not edit!
//!
//! export default {
//!   'de': JSON.parse('{"hello":"Hallo"}'),
//!   'en': JSON.parse('{"hello":"Hello"}'),
//! }
//! ```

use std::collections::BTreeMap;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use crate::atomic::write_atomically;
use crate::dictionary::{Dictionary, Translations};
use crate::error::{DocumentError, Error, Result};

const HEADER: &str = "// Auto-Generated, do not edit!\n";

/// Render one `JSON.parse` block per language, ordered by language key
pub fn render_module(
    languages: &BTreeMap<&str, &Translations>,
) -> std::result::Result<String, serde_json::Error> {
    let mut out = format!("{}\nexport default {{\n", HEADER);
    for (lang, translations) in languages {
        let json = serde_json::to_string(translations)?;
        out.push_str(&format!(
            "  '{}': JSON.parse('{}'),\n",
            escape_single_quoted(lang),
            escape_single_quoted(&json)
        ));
    }
    out.push_str("}\n");
    Ok(out)
}

/// Escape `raw` for use inside a single-quoted JS string literal
///
/// Backslashes go first so the JSON escapes (`\"`, `\n`) reach `JSON.parse`
/// intact.
pub fn escape_single_quoted(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Render the dictionary, reference included, and write it to `path`
pub fn write_module(dictionary: &Dictionary, path: &Path) -> Result<()> {
    let render_error = |source: DocumentError| Error::Render {
        path: path.to_path_buf(),
        source,
    };

    let view = dictionary.render_view();
    let module = render_module(&view).map_err(|e| render_error(e.into()))?;

    write_atomically(path, |writer: &mut dyn Write| writer.write_all(module.as_bytes()))
        .map_err(|e| render_error(e.into()))?;

    debug!(path = %path.display(), languages = view.len(), "wrote JS module");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{LanguageEntry, TranslationValue};
    use std::fs;

    /// Undo `escape_single_quoted` the way a JS engine reads the literal
    fn unescape_js(literal: &str) -> String {
        let mut out = String::new();
        let mut chars = literal.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(next) = chars.next() {
                    out.push(next);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Pull the string literal passed to `JSON.parse` for `lang`
    fn parse_block(module: &str, lang: &str) -> serde_json::Value {
        let prefix = format!("  '{}': JSON.parse('", lang);
        let line = module
            .lines()
            .find(|l| l.starts_with(&prefix))
            .expect("language block");
        let literal = &line[prefix.len()..line.len() - "'),".len()];
        serde_json::from_str(&unescape_js(literal)).unwrap()
    }

    fn entry(values: &[(&str, &str)]) -> Translations {
        values
            .iter()
            .map(|(k, v)| (k.to_string(), TranslationValue::from(*v)))
            .collect()
    }

    #[test]
    fn test_two_languages() {
        let en = entry(&[("hello", "hi")]);
        let de = entry(&[("hello", "hallo")]);
        let view = BTreeMap::from([("en", &en), ("de", &de)]);

        let module = render_module(&view).unwrap();

        assert_eq!(
            module,
            "// Auto-Generated, do not edit!\n\
             \n\
             export default {\n  \
             'de': JSON.parse('{\"hello\":\"hallo\"}'),\n  \
             'en': JSON.parse('{\"hello\":\"hi\"}'),\n\
             }\n"
        );
    }

    #[test]
    fn test_apostrophe_is_escaped() {
        let en = entry(&[("status", "it's done")]);
        let view = BTreeMap::from([("en", &en)]);

        let module = render_module(&view).unwrap();

        assert!(module.contains(r#"JSON.parse('{"status":"it\'s done"}')"#));
        assert_eq!(parse_block(&module, "en")["status"], "it's done");
    }

    #[test]
    fn test_json_escapes_survive() {
        let en = entry(&[("quote", "say \"hi\""), ("multi", "line one\nline two")]);
        let view = BTreeMap::from([("en", &en)]);

        let module = render_module(&view).unwrap();

        let parsed = parse_block(&module, "en");
        assert_eq!(parsed["quote"], "say \"hi\"");
        assert_eq!(parsed["multi"], "line one\nline two");
        assert_eq!(module.lines().count(), 5);
    }

    #[test]
    fn test_lists_render_as_arrays() {
        let mut en = Translations::new();
        en.insert("steps".to_string(), TranslationValue::from(vec!["a", "b"]));
        let view = BTreeMap::from([("en", &en)]);

        let module = render_module(&view).unwrap();

        assert_eq!(parse_block(&module, "en")["steps"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let en = entry(&[("b", "2"), ("a", "1"), ("c", "3")]);
        let fr = entry(&[("a", "un")]);
        let view = BTreeMap::from([("fr", &fr), ("en", &en)]);

        let first = render_module(&view).unwrap();
        let second = render_module(&view).unwrap();

        assert_eq!(first, second);
        assert!(first.contains(r#"'{"a":"1","b":"2","c":"3"}'"#));
        assert!(first.find("'en'").unwrap() < first.find("'fr'").unwrap());
    }

    #[test]
    fn test_empty_view() {
        let view = BTreeMap::new();
        assert_eq!(
            render_module(&view).unwrap(),
            "// Auto-Generated, do not edit!\n\nexport default {\n}\n"
        );
    }

    #[test]
    fn test_write_module_includes_reference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langs.js");
        let mut dict = Dictionary {
            reference: LanguageEntry::new("en", Some("en")).with_value("hello", "Hello"),
            ..Default::default()
        };
        dict.translations.insert(
            "de".to_string(),
            LanguageEntry::new("de", Some("de")).with_value("hello", "Hallo"),
        );

        write_module(&dict, &path).unwrap();

        let module = fs::read_to_string(&path).unwrap();
        assert!(module.starts_with(HEADER));
        assert_eq!(parse_block(&module, "en")["hello"], "Hello");
        assert_eq!(parse_block(&module, "de")["hello"], "Hallo");
    }

    #[test]
    fn test_unserializable_value_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("langs.js");
        fs::write(&path, "previous").unwrap();

        let mut mapping = serde_yaml::Mapping::new();
        mapping.insert(
            serde_yaml::Value::Sequence(Vec::new()),
            serde_yaml::Value::Null,
        );
        let dict = Dictionary {
            reference: LanguageEntry::new("en", Some("en"))
                .with_value("odd", TranslationValue::Unsupported(serde_yaml::Value::Mapping(mapping))),
            ..Default::default()
        };

        let result = write_module(&dict, &path);

        assert!(matches!(result, Err(Error::Render { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "previous");
    }

    #[test]
    fn test_missing_directory_is_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("langs.js");
        let dict = Dictionary {
            reference: LanguageEntry::new("en", None),
            ..Default::default()
        };

        assert!(matches!(write_module(&dict, &path), Err(Error::Render { .. })));
    }
}
