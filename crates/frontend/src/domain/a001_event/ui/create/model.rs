//! New Event - Model (API functions)

use crate::shared::api_utils::{api_url, send};
use contracts::domain::a001_event::aggregate::{parse_create_response, CreateEventRequest, CreateEventResponse};
use contracts::domain::a002_image::aggregate::{parse_delete_response, parse_upload_response};
use contracts::domain::a002_image::{ImageReference, SelectedFile};
use contracts::domain::common::ApiError;
use gloo_net::http::Request;
use web_sys::{File, FileList, FormData};

/// Загрузить изображение (multipart, поле `image`)
pub async fn upload_image(file: File) -> Result<ImageReference, ApiError> {
    let form_data = FormData::new().map_err(|e| ApiError::Network(format!("{e:?}")))?;
    form_data
        .append_with_blob("image", &file)
        .map_err(|e| ApiError::Network(format!("{e:?}")))?;

    // Content-Type with the multipart boundary is set by the browser
    let request = Request::post(&api_url("/image/upload"))
        .body(form_data)
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let (status, body) = send(request).await?;
    parse_upload_response(status, &body)
}

/// Удалить изображение по hash, вернуть сообщение-подтверждение backend
pub async fn delete_image(image_hash: &str) -> Result<String, ApiError> {
    let url = api_url(&format!("/image/{}", urlencoding::encode(image_hash)));
    let request = Request::delete(&url)
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let (status, body) = send(request).await?;
    parse_delete_response(status, &body)
}

/// Создать событие
pub async fn create_event(req: &CreateEventRequest) -> Result<CreateEventResponse, ApiError> {
    let request = Request::post(&api_url("/events/create"))
        .json(req)
        .map_err(|e| ApiError::Malformed(e.to_string()))?;

    let (status, body) = send(request).await?;
    parse_create_response(status, &body)
}

/// Convert a browser file list into validator input.
pub fn collect_files(list: Option<FileList>) -> Vec<SelectedFile<File>> {
    let Some(list) = list else {
        return Vec::new();
    };

    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile {
            name: file.name(),
            mime_type: file.type_(),
            size: file.size() as u64,
            handle: file,
        })
        .collect()
}

/// Object URL for showing the picked file before the upload returns.
pub fn create_local_preview(file: &File) -> Result<String, String> {
    web_sys::Url::create_object_url_with_blob(file).map_err(|e| format!("{e:?}"))
}

pub fn release_local_preview(url: &str) {
    let _ = web_sys::Url::revoke_object_url(url);
}
