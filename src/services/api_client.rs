// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO interpreta códigos de estado: devuelve la respuesta tal cual
// ============================================================================

use std::rc::Rc;

use gloo_net::http::{Method, Request, RequestBuilder, Response};
use thiserror::Error;

use crate::config::ApiConfig;
use crate::services::session_service::SessionProvider;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("no hay token de autenticación")]
    MissingToken,
    #[error("network error: {0}")]
    Network(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Opciones de una petición; las cabeceras se aplican sobre las por defecto
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            headers: Vec::new(),
            body: None,
        }
    }
}

impl RequestOptions {
    pub fn delete() -> Self {
        Self {
            method: Method::DELETE,
            ..Self::default()
        }
    }
}

/// Cabeceras finales: Authorization (vacía si no hay token), Content-Type,
/// y luego las del llamador reemplazando sin distinguir mayúsculas.
pub fn merge_headers(token: Option<&str>, overrides: &[(String, String)]) -> Vec<(String, String)> {
    let authorization = token
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {}", token))
        .unwrap_or_default();

    let mut headers = vec![
        ("Authorization".to_string(), authorization),
        ("Content-Type".to_string(), "application/json".to_string()),
    ];

    for (name, value) in overrides {
        match headers.iter_mut().find(|(existing, _)| existing.eq_ignore_ascii_case(name)) {
            Some(header) => header.1 = value.clone(),
            None => headers.push((name.clone(), value.clone())),
        }
    }

    headers
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    session: Rc<dyn SessionProvider>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig, session: Rc<dyn SessionProvider>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Construir petición autenticada (el token se lee en cada llamada)
    pub fn request(&self, endpoint: &str, options: RequestOptions) -> Result<Request, ApiError> {
        let token = self.session.token();
        let mut builder = RequestBuilder::new(&self.url(endpoint)).method(options.method);
        for (name, value) in merge_headers(token.as_deref(), &options.headers) {
            builder = builder.header(&name, &value);
        }

        let request = match options.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        };
        request.map_err(|e| ApiError::Network(format!("Request build error: {}", e)))
    }

    /// Enviar petición y devolver la respuesta cruda
    pub async fn fetch(&self, endpoint: &str, options: RequestOptions) -> Result<Response, ApiError> {
        let request = self.request(endpoint, options)?;
        request.send().await.map_err(|e| {
            log::error!("❌ Error en fetch {}: {}", endpoint, e);
            ApiError::Network(e.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn pairs(headers: &[(&str, &str)]) -> Vec<(String, String)> {
        headers
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn bearer_token_and_json_content_type_by_default() {
        assert_eq!(
            merge_headers(Some("abc"), &[]),
            pairs(&[("Authorization", "Bearer abc"), ("Content-Type", "application/json")])
        );
    }

    #[test]
    fn authorization_is_empty_not_omitted_without_token() {
        assert_eq!(
            merge_headers(None, &[]),
            pairs(&[("Authorization", ""), ("Content-Type", "application/json")])
        );
    }

    #[test]
    fn caller_headers_override_defaults_case_insensitively() {
        let overrides = pairs(&[("content-type", "text/csv"), ("X-Trace", "1")]);
        assert_eq!(
            merge_headers(Some("abc"), &overrides),
            pairs(&[
                ("Authorization", "Bearer abc"),
                ("Content-Type", "text/csv"),
                ("X-Trace", "1"),
            ])
        );
    }

    #[test]
    fn delete_options_use_delete_method() {
        assert_eq!(RequestOptions::delete().method, Method::DELETE);
        assert_eq!(RequestOptions::default().method, Method::GET);
    }
}
