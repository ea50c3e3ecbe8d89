//! Canned replies used when the remote model is unavailable.
//!
//! Each language holds an ordered list of `(keyword, reply)` pairs and a
//! default reply. Lookup lowercases the message and returns the reply of the
//! first keyword that occurs anywhere in it, so declaration order decides
//! between overlapping keywords.

use thiserror::Error;

use super::Language;

const PRACTICE_ES: &str = "Te sugiero revisar los ejercicios en el Módulo 1.3. Allí encontrarás actividades prácticas para mejorar tu habilidad de diseño de prompts.";
const GREETING_ES: &str = "¡Hola! Estoy aquí para ayudarte con el diseño de prompts y el uso de inteligencia artificial. ¿En qué puedo asistirte hoy?";
const PRACTICE_EN: &str = "I suggest reviewing the exercises in Module 1.3. There you'll find practical activities to improve your prompt design skills.";
const GREETING_EN: &str = "Hello! I'm here to help you with prompt design and the use of artificial intelligence. How can I assist you today?";

const BUILTIN_ES: &[(&str, &str)] = &[
    ("prompt", "Un buen prompt debe ser específico, claro y proporcionar contexto. Intenta formular preguntas precisas y proporcionar detalles relevantes para obtener mejores respuestas."),
    ("ejercicio", PRACTICE_ES),
    ("practica", PRACTICE_ES),
    ("hola", GREETING_ES),
    ("ayuda", GREETING_ES),
];
const DEFAULT_ES: &str = "Lo siento, no tengo una respuesta predefinida para esa pregunta. Te recomiendo revisar el material en los módulos de aprendizaje para encontrar información relacionada.";

const BUILTIN_EN: &[(&str, &str)] = &[
    ("prompt", "A good prompt should be specific, clear, and provide context. Try to formulate precise questions and provide relevant details to get better answers."),
    ("exercise", PRACTICE_EN),
    ("practice", PRACTICE_EN),
    ("hello", GREETING_EN),
    ("help", GREETING_EN),
];
const DEFAULT_EN: &str = "I'm sorry, I don't have a predefined response for that question. I recommend reviewing the material in the learning modules to find related information.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("empty keyword in the {0} table")]
    EmptyKeyword(Language),
    #[error("empty reply for keyword '{keyword}' in the {language} table")]
    EmptyReply { language: Language, keyword: String },
    #[error("the {0} table has no default reply")]
    MissingDefault(Language),
}

#[derive(Debug, Clone)]
struct LanguageTable {
    entries: Vec<(String, String)>,
    default: String,
}

impl LanguageTable {
    fn from_static(entries: &[(&str, &str)], default: &str) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            default: default.to_string(),
        }
    }

    fn find(&self, message_lc: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(keyword, _)| message_lc.contains(keyword.as_str()))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Immutable keyword table for both languages.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    es: LanguageTable,
    en: LanguageTable,
}

impl ResponseTable {
    pub fn builder() -> ResponseTableBuilder {
        ResponseTableBuilder::default()
    }

    /// The replies shipped with the course.
    pub fn builtin() -> Self {
        Self {
            es: LanguageTable::from_static(BUILTIN_ES, DEFAULT_ES),
            en: LanguageTable::from_static(BUILTIN_EN, DEFAULT_EN),
        }
    }

    fn table(&self, language: Language) -> &LanguageTable {
        match language {
            Language::Es => &self.es,
            Language::En => &self.en,
        }
    }

    /// Returns the first `(keyword, reply)` whose keyword occurs in the message.
    pub fn find(&self, message: &str, language: Language) -> Option<(&str, &str)> {
        self.table(language).find(&message.to_lowercase())
    }

    pub fn default_reply(&self, language: Language) -> &str {
        &self.table(language).default
    }

    /// Keyword reply for the message, or the language default.
    pub fn lookup(&self, message: &str, language: Language) -> &str {
        self.find(message, language)
            .map(|(_, reply)| reply)
            .unwrap_or_else(|| self.default_reply(language))
    }

    pub fn keywords(&self, language: Language) -> impl Iterator<Item = &str> {
        self.table(language).entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, Default)]
pub struct ResponseTableBuilder {
    es: Vec<(String, String)>,
    en: Vec<(String, String)>,
    es_default: Option<String>,
    en_default: Option<String>,
}

impl ResponseTableBuilder {
    /// Appends a keyword. Earlier entries win when several keywords match.
    pub fn entry(mut self, language: Language, keyword: impl Into<String>, reply: impl Into<String>) -> Self {
        let pair = (keyword.into().to_lowercase(), reply.into());
        match language {
            Language::Es => self.es.push(pair),
            Language::En => self.en.push(pair),
        }
        self
    }

    pub fn default_reply(mut self, language: Language, reply: impl Into<String>) -> Self {
        match language {
            Language::Es => self.es_default = Some(reply.into()),
            Language::En => self.en_default = Some(reply.into()),
        }
        self
    }

    pub fn build(self) -> Result<ResponseTable, TableError> {
        Ok(ResponseTable {
            es: Self::finish(Language::Es, self.es, self.es_default)?,
            en: Self::finish(Language::En, self.en, self.en_default)?,
        })
    }

    fn finish(
        language: Language,
        entries: Vec<(String, String)>,
        default: Option<String>,
    ) -> Result<LanguageTable, TableError> {
        for (keyword, reply) in &entries {
            if keyword.is_empty() {
                return Err(TableError::EmptyKeyword(language));
            }
            if reply.trim().is_empty() {
                return Err(TableError::EmptyReply {
                    language,
                    keyword: keyword.clone(),
                });
            }
        }

        let default = default
            .filter(|d| !d.trim().is_empty())
            .ok_or(TableError::MissingDefault(language))?;

        Ok(LanguageTable { entries, default })
    }
}
