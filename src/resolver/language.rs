use std::fmt;

/// The two reply languages. Anything that is not exactly `"es"` is English.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Es,
    En,
}

impl Language {
    pub fn from_tag(tag: &str) -> Self {
        if tag == "es" {
            Language::Es
        } else {
            Language::En
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }
}

impl From<&str> for Language {
    fn from(tag: &str) -> Self {
        Language::from_tag(tag)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
