//! Conversion handlers

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use axum_extra::extract::Multipart;
use citekit_core::decoder::{decoder_for_extension, decoder_for_mime_type};
use citekit_core::encoder::encoder_for_format;
use citekit_core::table::{to_rows, SourceRow};
use citekit_core::types::Source;
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// Query parameters for conversion
#[derive(Debug, Deserialize)]
pub struct ConvertQuery {
    /// Output format (bib, ris)
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "bib".to_string()
}

/// Notice returned when a document parses but holds no sources
#[derive(Debug, Serialize)]
pub struct EmptyNotice {
    pub count: usize,
    pub message: String,
}

/// Inspection response with the tabular preview
#[derive(Debug, Serialize)]
pub struct InspectResponse {
    pub count: usize,
    pub rows: Vec<SourceRow>,
}

/// Read the uploaded `file` field and decode it into sources
async fn decode_upload(multipart: &mut Multipart) -> Result<Vec<Source>, (StatusCode, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        if name == "file" {
            let filename = field
                .file_name()
                .map(|s| s.to_string())
                .unwrap_or_default();
            let content_type = field
                .content_type()
                .map(|s| s.to_string())
                .unwrap_or_default();

            // Pick a decoder by filename extension, falling back to the
            // multipart content type
            let decoder = std::path::Path::new(&filename)
                .extension()
                .and_then(|e| e.to_str())
                .and_then(decoder_for_extension)
                .or_else(|| decoder_for_mime_type(&content_type))
                .ok_or_else(|| {
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Unsupported file type: {}", filename),
                    )
                })?;

            // Read file data
            let data = field
                .bytes()
                .await
                .map_err(|e| (StatusCode::BAD_REQUEST, e.to_string()))?;

            let mut cursor = Cursor::new(data.to_vec());
            return decoder
                .decode(&mut cursor)
                .map_err(|e| (StatusCode::BAD_REQUEST, format!("Failed to decode: {}", e)));
        }
    }

    Err((StatusCode::BAD_REQUEST, "No file provided".to_string()))
}

/// Convert an uploaded Sources.xml and return the text as a download
pub async fn convert_sources(
    Query(query): Query<ConvertQuery>,
    mut multipart: Multipart,
) -> Result<Response, (StatusCode, String)> {
    let encoder = encoder_for_format(&query.format).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            format!("Unsupported format: {}", query.format),
        )
    })?;

    let sources = decode_upload(&mut multipart).await?;

    if sources.is_empty() {
        tracing::info!("Document parsed but contained no sources");
        return Ok(Json(EmptyNotice {
            count: 0,
            message: "No sources found in the document".to_string(),
        })
        .into_response());
    }

    let mut output = Vec::new();
    encoder
        .encode(&sources, &mut output)
        .map_err(|e| (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))?;

    tracing::info!(
        "Converted {} sources to {}",
        sources.len(),
        encoder.format_name()
    );

    let filename = format!("sources_converted.{}", encoder.file_extension());

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, encoder.mime_type())
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", filename),
        )
        .body(output.into())
        .unwrap())
}

/// Parse an uploaded Sources.xml and return the flattened preview rows
pub async fn inspect_sources(
    mut multipart: Multipart,
) -> Result<Json<InspectResponse>, (StatusCode, String)> {
    let sources = decode_upload(&mut multipart).await?;

    tracing::debug!("Inspected document with {} sources", sources.len());

    let rows = to_rows(&sources);
    Ok(Json(InspectResponse {
        count: rows.len(),
        rows,
    }))
}
