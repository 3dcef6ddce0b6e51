use std::collections::HashMap;

use axum::Json;
use axum::body::Bytes;
use axum::extract::{Form, FromRequest, Multipart, Request, State};
use axum::http::header::CONTENT_TYPE;
use serde_json::{Value, json};

use crate::data::models::UserUpdate;
use crate::data::repositories::UserRepository;
use crate::features::user::{UserUpdateError, store_avatar};
use crate::state::AppState;

/// An avatar read from the form, written only once the whole form parsed.
struct PendingAvatar {
    client_name: String,
    bytes: Bytes,
}

/// Overwrites the submitted profile fields and, optionally, the avatar.
///
/// Accepts `multipart/form-data` (needed for the avatar) as well as plain
/// `application/x-www-form-urlencoded` posts.
pub async fn update_user(
    State(state): State<AppState>,
    request: Request,
) -> Result<Json<Value>, UserUpdateError> {
    let is_multipart = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("multipart/form-data"));

    let (update, avatar) = if is_multipart {
        let multipart = Multipart::from_request(request, &state).await?;
        read_multipart(multipart).await?
    } else {
        let Form(fields) = Form::<HashMap<String, String>>::from_request(request, &state).await?;
        (collect_fields(fields), None)
    };

    let mut profile = UserRepository::load(&state.store);
    if let Some(avatar) = avatar {
        if let Some(url) = store_avatar(&state.upload_dir, &avatar.client_name, &avatar.bytes).await? {
            profile.set_avatar(url);
        }
    }

    update.apply_to(&mut profile);
    UserRepository::save(&state.store, &profile);

    Ok(Json(json!({ "status": "success", "user": profile })))
}

fn collect_fields(fields: HashMap<String, String>) -> UserUpdate {
    let mut update = UserUpdate::default();
    for (name, value) in fields {
        if !update.set_field(&name, value) {
            log::debug!("Ignoring unknown profile field {:?}", name);
        }
    }
    update
}

async fn read_multipart(
    mut multipart: Multipart,
) -> Result<(UserUpdate, Option<PendingAvatar>), UserUpdateError> {
    let mut update = UserUpdate::default();
    let mut avatar = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        if name == "avatar" {
            let Some(client_name) = field.file_name().filter(|n| !n.is_empty()).map(str::to_owned)
            else {
                continue;
            };
            let bytes = field.bytes().await?;
            // First file wins.
            if avatar.is_none() {
                avatar = Some(PendingAvatar { client_name, bytes });
            }
        } else {
            let value = field.text().await?;
            if !update.set_field(&name, value) {
                log::debug!("Ignoring unknown profile field {:?}", name);
            }
        }
    }

    Ok((update, avatar))
}
