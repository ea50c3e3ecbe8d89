use actix_web::{get, web, HttpResponse, Result as WebResult};
use std::io;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use crate::api::models::MessageBody;
use crate::catalog;

/// Directory that downloadable resources are served from.
#[derive(Debug, Clone)]
pub struct ResourceDir(pub PathBuf);

/// Creates the resources directory and writes a placeholder for every
/// catalogue file that is missing.
pub fn ensure_resources(dir: &Path) -> io::Result<()> {
    std::fs::create_dir_all(dir)?;
    for res in catalog::resources() {
        let path = dir.join(res.file_name);
        if !path.exists() {
            info!("Creating placeholder resource {}", path.display());
            std::fs::write(&path, res.placeholder)?;
        }
    }
    Ok(())
}

fn is_safe_name(name: &str) -> bool {
    !name.is_empty() && !name.contains(['/', '\\']) && !name.contains("..")
}

#[get("")]
pub async fn list_resources() -> WebResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(catalog::resources()))
}

#[get("/{file}")]
pub async fn download_resource(
    dir: web::Data<ResourceDir>,
    file: web::Path<String>,
) -> WebResult<HttpResponse> {
    let name = file.into_inner();
    if !is_safe_name(&name) {
        return Ok(HttpResponse::BadRequest().json(MessageBody::new("Invalid resource name")));
    }

    match tokio::fs::read(dir.0.join(&name)).await {
        Ok(bytes) => Ok(HttpResponse::Ok()
            .content_type(catalog::content_type(&name))
            .insert_header(("Content-Disposition", format!("attachment; filename=\"{}\"", name)))
            .body(bytes)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Ok(HttpResponse::NotFound().json(MessageBody::new("Resource not found")))
        }
        Err(e) => {
            error!("Failed to read resource {}: {}", name, e);
            Ok(HttpResponse::InternalServerError().json(MessageBody::new("Error reading resource")))
        }
    }
}

pub fn scope() -> actix_web::Scope {
    web::scope("/resources")
        .service(list_resources)
        .service(download_resource)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_names() {
        assert!(is_safe_name("guide.pdf"));
        assert!(!is_safe_name("../secret"));
        assert!(!is_safe_name("a/b.pdf"));
        assert!(!is_safe_name("a\\b.pdf"));
        assert!(!is_safe_name(""));
    }
}
