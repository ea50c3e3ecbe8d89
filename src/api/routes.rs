use actix_web::{get, post, web, HttpResponse, Result as WebResult};
use tracing::warn;

use crate::api::resources;
use crate::api::models::{ChatRequest, MessageBody, ValidateResponse};
use crate::catalog;
use crate::config::AppConfig;
use crate::llm::ProviderFactory;
use crate::resolver::{Language, Resolver};

#[post("/chat")]
pub async fn chat(
    config: web::Data<AppConfig>,
    resolver: web::Data<Resolver>,
    req: web::Json<ChatRequest>,
) -> WebResult<HttpResponse> {
    let req = req.into_inner();

    let message = match req.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Ok(HttpResponse::BadRequest().json(MessageBody::new("Message is required"))),
    };

    let tag = req
        .language
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| config.chat.default_language.clone());

    let reply = resolver.resolve(&message, Language::from_tag(&tag)).await;
    Ok(HttpResponse::Ok().json(MessageBody::new(reply)))
}

#[get("/openai/validate")]
pub async fn validate_key(
    config: web::Data<AppConfig>,
    resolver: web::Data<Resolver>,
) -> WebResult<HttpResponse> {
    let Some(provider) = resolver.provider() else {
        return Ok(HttpResponse::Ok().json(ValidateResponse {
            valid: false,
            message: ProviderFactory::unavailable_reason(&config),
        }));
    };

    let resp = match provider.validate().await {
        Ok(()) => ValidateResponse {
            valid: true,
            message: "API key is valid".to_string(),
        },
        Err(e) => {
            warn!("API key validation failed: {}", e);
            ValidateResponse {
                valid: false,
                message: format!("API key validation failed: {}", e),
            }
        }
    };
    Ok(HttpResponse::Ok().json(resp))
}

#[get("/modules")]
pub async fn list_modules() -> WebResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(catalog::modules()))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({"status": "healthy"}))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
    cfg.service(
        web::scope("/api")
            .service(chat)
            .service(validate_key)
            .service(list_modules)
            .service(resources::scope()),
    );
}
