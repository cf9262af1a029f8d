//! Add command handler.

use std::path::Path;

use anyhow::{Context, Result};
use candy_core::{Candy, CandyFields, ImageUpload};

use crate::bootstrap::CliContext;

/// Content type a browser would declare for an image file, from its extension.
fn content_type_for(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => "image/jpeg".to_string(),
        "png" | "gif" => format!("image/{ext}"),
        _ => "application/octet-stream".to_string(),
    }
}

/// Read an image file from disk into an upload.
pub async fn read_upload(path: &Path) -> Result<ImageUpload> {
    let bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read image {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();

    Ok(ImageUpload::new(filename, content_type_for(path), bytes))
}

/// Add a candy, uploading `image` if given.
pub async fn execute(
    ctx: &CliContext,
    name: &str,
    kind: &str,
    description: &str,
    image: Option<&Path>,
) -> Result<Candy> {
    let upload = match image {
        Some(path) => Some(read_upload(path).await?),
        None => None,
    };

    let candy = ctx
        .candies
        .create(CandyFields::new(name, kind, description), upload)
        .await?;

    println!("Added candy #{}: {} (image: {})", candy.id, candy.name, candy.image);
    Ok(candy)
}
