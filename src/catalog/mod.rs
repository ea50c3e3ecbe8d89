//! Static course content: learning modules and downloadable resources.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LearningModule {
    pub id: &'static str,
    pub objectives: Vec<&'static str>,
    pub lessons: Vec<Lesson>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Resource {
    pub title: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub size: &'static str,
    pub file_name: &'static str,
    pub download_url: String,
    /// Body written when the file is missing from the resources directory.
    #[serde(skip)]
    pub placeholder: &'static str,
}

pub fn modules() -> Vec<LearningModule> {
    vec![
        LearningModule {
            id: "module1",
            objectives: vec![
                "Comprender los principios de diseño efectivo de prompts para AI",
                "Aprender a estructurar peticiones para obtener respuestas específicas",
                "Practicar en inglés con ejemplos guiados",
            ],
            lessons: vec![
                Lesson { id: "1.1", title: "1.1 Introducción a los prompts", completed: true },
                Lesson { id: "1.2", title: "1.2 Estructura y claridad", completed: false },
                Lesson { id: "1.3", title: "1.3 Ejercicios prácticos", completed: false },
            ],
        },
        LearningModule {
            id: "module2",
            objectives: vec![
                "Aplicar técnicas de prompt design en situaciones reales",
                "Adaptar prompts para diferentes casos de uso",
                "Optimizar respuestas para diferentes modelos de AI",
            ],
            lessons: vec![
                Lesson { id: "2.1", title: "2.1 Casos de uso educativo", completed: false },
                Lesson { id: "2.2", title: "2.2 Aplicaciones profesionales", completed: false },
                Lesson { id: "2.3", title: "2.3 Proyecto final", completed: false },
            ],
        },
    ]
}

fn resource(title: &'static str, kind: &'static str, size: &'static str, file_name: &'static str, placeholder: &'static str) -> Resource {
    Resource {
        title,
        kind,
        size,
        file_name,
        download_url: format!("/api/resources/{}", file_name),
        placeholder,
    }
}

pub fn resources() -> Vec<Resource> {
    vec![
        resource("Guía de Prompts Efectivos", "PDF", "2.3 MB", "guide.pdf", "Placeholder for Prompt Design Guide"),
        resource("Plantillas de Ejercicios", "XLSX", "1.1 MB", "templates.xlsx", "Placeholder for Exercise Templates"),
        resource("Ejemplos de Prompts", "PDF", "1.5 MB", "examples.pdf", "Placeholder for Prompt Examples"),
        resource("Glosario de Términos AI", "PDF", "0.8 MB", "glossary.pdf", "Placeholder for AI Glossary"),
    ]
}

/// Content type served for a resource file name.
pub fn content_type(file_name: &str) -> &'static str {
    match file_name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase()) {
        Some(ext) if ext == "pdf" => "application/pdf",
        Some(ext) if ext == "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some(ext) if ext == "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
