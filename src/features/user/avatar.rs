use std::path::Path;

use crate::data::repositories::UserRepository;
use crate::features::user::error::UserUpdateError;
use crate::utils::secure_filename;

/// Writes an uploaded avatar into `upload_dir` and returns its public URL.
///
/// Returns `Ok(None)` when the client-supplied name sanitises to nothing.
pub async fn store_avatar(
    upload_dir: &Path,
    client_name: &str,
    bytes: &[u8],
) -> Result<Option<String>, UserUpdateError> {
    let file_name = secure_filename(client_name);
    if file_name.is_empty() {
        log::warn!("Ignoring avatar with unusable file name {:?}", client_name);
        return Ok(None);
    }

    tokio::fs::write(upload_dir.join(&file_name), bytes).await?;
    log::info!("Saved avatar {}", file_name);
    Ok(Some(UserRepository::avatar_url(&file_name)))
}
