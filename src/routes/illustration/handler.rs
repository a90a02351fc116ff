use std::path::{Path, PathBuf};

use axum::{
    extract::{Extension, Json, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    generator::{decode_data_uri, illustration::default_prompt, illustration::image_file_name},
    routes::current_session,
    utils::{Claims, success_to_api_response},
};

use super::model::{IllustrationRequest, IllustrationResponse};

#[axum::debug_handler]
pub async fn generate_illustration(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(req): Json<IllustrationRequest>,
) -> Result<impl IntoResponse, AppError> {
    req.validate()?;
    let session = current_session(&state, &claims).await?;

    let prompt = req
        .prompt
        .filter(|p| !p.trim().is_empty())
        .unwrap_or_else(|| default_prompt(&req.topic));

    let generated = state
        .content
        .illustration(session.api_keys.stability.as_deref(), &prompt, &req.topic)
        .await?;

    let (image_id, image_path) = match req.lesson_id {
        Some(lesson_id) => {
            let path =
                write_image(&state.config.image_dir, &prompt, &req.topic, &generated.value).await?;
            let path = path.to_string_lossy().into_owned();
            let image_id = state.images.save_image(lesson_id, &prompt, &path).await?;
            (Some(image_id), Some(path))
        }
        None => (None, None),
    };

    Ok((
        StatusCode::OK,
        success_to_api_response(IllustrationResponse {
            source: generated.source,
            image: generated.value,
            image_id,
            image_path,
        }),
    ))
}

/// 把 data URI 解码后写入图片目录，文件名由内容寻址
async fn write_image(
    dir: &Path,
    prompt: &str,
    topic: &str,
    data_uri: &str,
) -> Result<PathBuf, AppError> {
    let (mime, bytes) = decode_data_uri(data_uri)
        .ok_or_else(|| AppError::Internal("生成的图片数据无效".to_string()))?;

    let path = dir.join(image_file_name(prompt, topic, &mime));
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::Internal(format!("创建图片目录失败: {e}")))?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|e| AppError::Internal(format!("写入图片失败: {e}")))?;

    tracing::info!("Wrote illustration to {}", path.display());
    Ok(path)
}
