//! Notes REST API: read-only lookup and search.
//!
//! All note mutations go through the chat commands.

use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

use crate::error::NoteStoreError;
use crate::models::Note;
use crate::AppState;

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/api/search/notes").route(web::get().to(search_notes)));
    // Titles are free text and may contain '/', so take the whole tail
    cfg.service(web::resource("/api/notes/{title:.*}").route(web::get().to(get_note)));
}

// --- Get note ---

#[derive(Debug, Serialize)]
struct NoteResponse {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Look up a single note by case-insensitive title
async fn get_note(data: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();

    match data.store.get(&title) {
        Ok(note) => HttpResponse::Ok().json(NoteResponse {
            success: true,
            note: Some(note),
            error: None,
        }),
        Err(e @ NoteStoreError::NotFound(_)) => HttpResponse::NotFound().json(NoteResponse {
            success: false,
            note: None,
            error: Some(e.to_string()),
        }),
        Err(e) => {
            log::error!("[HTTP] Failed to read note \"{}\": {}", title, e);
            HttpResponse::InternalServerError().json(NoteResponse {
                success: false,
                note: None,
                error: Some("Internal server error".to_string()),
            })
        }
    }
}

// --- Search notes ---

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    q: String,
}

#[derive(Debug, Serialize)]
struct SearchResponse {
    success: bool,
    query: String,
    results: Vec<Note>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Case-insensitive title search, capped at the configured result limit
async fn search_notes(
    data: web::Data<AppState>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let query = query.into_inner().q;

    match data.store.search(&query, data.config.search_result_limit) {
        Ok(results) => HttpResponse::Ok().json(SearchResponse {
            success: true,
            query,
            results,
            error: None,
        }),
        Err(e) => {
            log::error!("[HTTP] Note search failed for \"{}\": {}", query, e);
            HttpResponse::InternalServerError().json(SearchResponse {
                success: false,
                query,
                results: vec![],
                error: Some("Internal server error".to_string()),
            })
        }
    }
}
