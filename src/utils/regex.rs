use onig::{Regex, RegexOptions};
use serde::{Deserialize, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;

impl TryFrom<String> for SerializeRegex {
    type Error = onig::Error;

    fn try_from(string: String) -> Result<Self, onig::Error> {
        Ok(SerializeRegex {
            regex: SerializeRegex::compile(&string)?,
            string,
        })
    }
}

/// A [Regex] which (de)serializes from / to its pattern string, so patterns can live in configuration files.
/// A trailing `(?i)` makes the pattern case-insensitive.
#[derive(Deserialize)]
#[serde(try_from = "String")]
pub struct SerializeRegex {
    pub(crate) string: String,
    pub(crate) regex: Regex,
}

impl Serialize for SerializeRegex {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.string)
    }
}

impl fmt::Debug for SerializeRegex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SerializeRegex").field(&self.string).finish()
    }
}

impl Clone for SerializeRegex {
    fn clone(&self) -> Self {
        // the pattern compiled once already
        SerializeRegex::new(&self.string).expect("pattern was compiled before")
    }
}

impl PartialEq for SerializeRegex {
    fn eq(&self, other: &Self) -> bool {
        self.string == other.string
    }
}

impl SerializeRegex {
    pub fn new(regex_str: &str) -> Result<Self, onig::Error> {
        SerializeRegex::try_from(regex_str.to_string())
    }

    pub fn compile(regex_str: &str) -> Result<Regex, onig::Error> {
        let mut case_sensitive = true;
        let regex_str = if let Some(stripped) = regex_str.strip_suffix("(?i)") {
            case_sensitive = false;
            stripped
        } else {
            regex_str
        };

        Regex::with_options(
            regex_str,
            if case_sensitive {
                RegexOptions::REGEX_OPTION_NONE
            } else {
                RegexOptions::REGEX_OPTION_IGNORECASE
            },
            onig::Syntax::java(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.string
    }
}

impl Deref for SerializeRegex {
    type Target = Regex;

    fn deref(&self) -> &Self::Target {
        &self.regex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_pattern() {
        let regex: SerializeRegex = serde_json::from_str(r#""\\w[\\w']+""#).unwrap();
        assert_eq!(regex.as_str(), r"\w[\w']+");
        assert!(regex.is_match("it's"));
        assert_eq!(serde_json::to_string(&regex).unwrap(), r#""\\w[\\w']+""#);
    }

    #[test]
    fn trailing_i_flag_is_case_insensitive() {
        let regex = SerializeRegex::new("^cat$(?i)").unwrap();
        assert!(regex.is_match("CAT"));
        assert_eq!(regex.as_str(), "^cat$(?i)");
    }

    #[test]
    fn invalid_pattern_fails() {
        assert!(serde_json::from_str::<SerializeRegex>(r#""[a-""#).is_err());
    }
}
