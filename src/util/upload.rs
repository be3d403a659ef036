//! Avatar upload pipeline: type/size checks, preview, conditional compression.
//!
//! SYSTEM CONTEXT
//! ==============
//! A file-input selection runs through [`check_file`]; accepted files get an
//! async data-URL preview while files over the compression threshold are
//! additionally re-encoded through a canvas before becoming the submission
//! payload. Every new selection resets the previous error/preview/payload
//! first, so stale state never leaks across selections.
//!
//! TRADE-OFFS
//! ==========
//! Compression failure is a hard field error; the oversized original is
//! never silently substituted as the payload.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

/// Upload ceiling: files larger than this are rejected outright.
pub const MAX_UPLOAD_BYTES: f64 = 1024.0 * 1024.0;
/// Files above this size are re-encoded before upload.
pub const COMPRESS_THRESHOLD_BYTES: f64 = 512.0 * 1024.0;
/// Encoder quality passed to the canvas re-encode.
pub const COMPRESS_QUALITY: f64 = 0.8;
pub const COMPRESS_MAX_WIDTH: f64 = 800.0;
pub const COMPRESS_MAX_HEIGHT: f64 = 800.0;

pub const UNSUPPORTED_FORMAT: &str = "Only JPEG and PNG images can be uploaded";
pub const FILE_TOO_LARGE: &str = "File size must be 1MB or less";
pub const COMPRESSION_FAILED: &str = "Image compression failed";

/// Outcome of the type/size gate for a selected file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileCheck {
    Rejected(&'static str),
    Accepted { compress: bool },
}

/// Gate a selection on declared MIME type and byte size. Only JPEG and PNG
/// pass; anything over the ceiling is rejected; anything over the threshold
/// is flagged for compression.
pub fn check_file(mime: &str, size: f64) -> FileCheck {
    if !matches!(mime, "image/jpeg" | "image/png") {
        return FileCheck::Rejected(UNSUPPORTED_FORMAT);
    }
    if size > MAX_UPLOAD_BYTES {
        return FileCheck::Rejected(FILE_TOO_LARGE);
    }
    FileCheck::Accepted {
        compress: size > COMPRESS_THRESHOLD_BYTES,
    }
}

/// Target dimensions fitting within the compression bounds, preserving
/// aspect ratio and never upscaling.
pub fn scaled_dimensions(width: f64, height: f64) -> (f64, f64) {
    let scale = (COMPRESS_MAX_WIDTH / width)
        .min(COMPRESS_MAX_HEIGHT / height)
        .min(1.0);
    ((width * scale).round(), (height * scale).round())
}

/// Prepared submission payload. In the browser this is the (possibly
/// re-encoded) file; the server-render placeholder is never constructed.
#[cfg(feature = "hydrate")]
pub type UploadPayload = web_sys::File;
#[cfg(not(feature = "hydrate"))]
#[derive(Clone, Debug)]
pub struct UploadPayload;

/// Read the accepted file as a data URL and publish it for rendering. Runs
/// independently of compression and is not blocked by it.
#[cfg(feature = "hydrate")]
pub fn start_preview(file: &web_sys::File, preview: leptos::prelude::RwSignal<Option<String>>) {
    use leptos::prelude::Set;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let reader_in_load = reader.clone();
    let onload = Closure::once(move |_ev: web_sys::ProgressEvent| {
        if let Ok(result) = reader_in_load.result() {
            if let Some(data_url) = result.as_string() {
                preview.set(Some(data_url));
            }
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    onload.forget();
    let _ = reader.read_as_data_url(file);
}

/// Re-encode the image through a canvas at the fixed quality and bounds,
/// yielding a replacement file with the original's name and MIME type.
///
/// # Errors
///
/// Returns a short internal reason when decoding, drawing, or encoding
/// fails; callers surface [`COMPRESSION_FAILED`] to the user.
#[cfg(feature = "hydrate")]
pub async fn compress_image(file: &web_sys::File) -> Result<web_sys::File, String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    let url = web_sys::Url::create_object_url_with_blob(file)
        .map_err(|_| "object URL creation failed".to_owned())?;
    let image =
        web_sys::HtmlImageElement::new().map_err(|_| "image element creation failed".to_owned())?;

    let (load_tx, load_rx) = oneshot::channel::<Result<(), String>>();
    let load_tx = Rc::new(RefCell::new(Some(load_tx)));
    let load_tx_ok = load_tx.clone();
    let onload = Closure::once(move |_ev: web_sys::Event| {
        if let Some(tx) = load_tx_ok.borrow_mut().take() {
            let _ = tx.send(Ok(()));
        }
    });
    let onerror = Closure::once(move |_ev: web_sys::Event| {
        if let Some(tx) = load_tx.borrow_mut().take() {
            let _ = tx.send(Err("image decode failed".to_owned()));
        }
    });
    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onload.forget();
    onerror.forget();
    image.set_src(&url);

    let loaded = load_rx
        .await
        .map_err(|_| "image load interrupted".to_owned());
    let _ = web_sys::Url::revoke_object_url(&url);
    loaded??;

    let (width, height) = scaled_dimensions(
        f64::from(image.natural_width()),
        f64::from(image.natural_height()),
    );
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document unavailable".to_owned())?;
    let canvas: web_sys::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|_| "canvas creation failed".to_owned())?
        .dyn_into()
        .map_err(|_| "canvas creation failed".to_owned())?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    {
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);
    }
    let context = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<web_sys::CanvasRenderingContext2d>().ok())
        .ok_or_else(|| "2d context unavailable".to_owned())?;
    context
        .draw_image_with_html_image_element_and_dw_and_dh(&image, 0.0, 0.0, width, height)
        .map_err(|_| "image draw failed".to_owned())?;

    let (blob_tx, blob_rx) = oneshot::channel::<Option<web_sys::Blob>>();
    let blob_tx = Rc::new(RefCell::new(Some(blob_tx)));
    let callback = Closure::once(move |blob: Option<web_sys::Blob>| {
        if let Some(tx) = blob_tx.borrow_mut().take() {
            let _ = tx.send(blob);
        }
    });
    canvas
        .to_blob_with_type_and_encoder_options(
            callback.as_ref().unchecked_ref(),
            &file.type_(),
            &JsValue::from_f64(COMPRESS_QUALITY),
        )
        .map_err(|_| "image encode failed".to_owned())?;
    callback.forget();
    let blob = blob_rx
        .await
        .map_err(|_| "image encode interrupted".to_owned())?
        .ok_or_else(|| "image encode produced no data".to_owned())?;

    let parts = js_sys::Array::new();
    parts.push(&blob);
    let options = web_sys::FilePropertyBag::new();
    options.set_type(&file.type_());
    web_sys::File::new_with_blob_sequence_and_options(
        &JsValue::from(parts),
        &file.name(),
        &options,
    )
    .map_err(|_| "compressed file wrap failed".to_owned())
}

/// Run the full selection pipeline: reset prior state, gate on type/size,
/// kick off the preview, and produce the submission payload (re-encoded when
/// over the threshold, the original otherwise).
#[cfg(feature = "hydrate")]
pub fn handle_selection(
    file: web_sys::File,
    preview: leptos::prelude::RwSignal<Option<String>>,
    error: leptos::prelude::RwSignal<Option<String>>,
    payload: leptos::prelude::RwSignal<Option<UploadPayload>, leptos::prelude::LocalStorage>,
) {
    use leptos::prelude::Set;

    error.set(None);
    preview.set(None);
    payload.set(None);

    match check_file(&file.type_(), file.size()) {
        FileCheck::Rejected(message) => error.set(Some(message.to_owned())),
        FileCheck::Accepted { compress } => {
            start_preview(&file, preview);
            if compress {
                leptos::task::spawn_local(async move {
                    match compress_image(&file).await {
                        Ok(compressed) => payload.set(Some(compressed)),
                        Err(err) => {
                            log::warn!("avatar compression failed: {err}");
                            error.set(Some(COMPRESSION_FAILED.to_owned()));
                        }
                    }
                });
            } else {
                payload.set(Some(file));
            }
        }
    }
}
