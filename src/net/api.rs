//! REST API helpers for the remote review service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, String>` where the error is already a
//! display string: the server's JSON error envelope when it decodes, a
//! status-based message otherwise. Callers surface it next to the action
//! that triggered the call.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{
    BookCreateRequest, BookData, SigninResponse, UserCreateRequest, UserCreateResponse,
    UserGetResponse, UserUpdateResponse,
};
#[cfg(feature = "hydrate")]
use super::types::{ApiError, IconUploadResponse, SigninRequest, UserUpdateRequest};

#[cfg(feature = "hydrate")]
const USERS_PATH: &str = "/users";
#[cfg(feature = "hydrate")]
const SIGNIN_PATH: &str = "/signin";
#[cfg(feature = "hydrate")]
const UPLOADS_PATH: &str = "/uploads";
#[cfg(any(test, feature = "hydrate"))]
const BOOKS_PATH: &str = "/books";

#[cfg(any(test, feature = "hydrate"))]
fn book_endpoint(id: &str) -> String {
    format!("{BOOKS_PATH}/{id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Decode the error envelope from a non-OK response, falling back to a
/// status-based message when the body is not the expected JSON.
#[cfg(feature = "hydrate")]
async fn error_message(resp: gloo_net::http::Response) -> String {
    let status = resp.status();
    match resp.json::<ApiError>().await {
        Ok(envelope) => envelope.user_message(),
        Err(_) => request_failed_message(status),
    }
}

/// Create an account via `POST /users`.
///
/// # Errors
///
/// Returns a display string when the HTTP request fails or the server
/// responds with an error envelope.
pub async fn create_user(req: &UserCreateRequest) -> Result<UserCreateResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(USERS_PATH)
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<UserCreateResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = req;
        Err("not available on server".to_owned())
    }
}

/// Exchange credentials for a session token via `POST /signin`.
///
/// # Errors
///
/// Returns a display string when the HTTP request fails or the credentials
/// are rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<SigninResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SigninRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let resp = gloo_net::http::Request::post(SIGNIN_PATH)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<SigninResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Fetch the authenticated user's profile via `GET /users`.
///
/// # Errors
///
/// Returns a display string when the token is rejected or the request fails.
pub async fn fetch_user(token: &str) -> Result<UserGetResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(USERS_PATH)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<UserGetResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Update the authenticated user's display name via `PUT /users`.
///
/// # Errors
///
/// Returns a display string when the token is rejected or the request fails.
pub async fn update_user(name: &str, token: &str) -> Result<UserUpdateResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = UserUpdateRequest { name: name.to_owned() };
        let resp = gloo_net::http::Request::put(USERS_PATH)
            .header("Authorization", &bearer(token))
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<UserUpdateResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, token);
        Err("not available on server".to_owned())
    }
}

/// Upload the avatar image via multipart `POST /uploads` (file field `icon`).
///
/// # Errors
///
/// Returns a display string when the form cannot be built, the token is
/// rejected, or the request fails.
#[cfg(feature = "hydrate")]
pub async fn upload_icon(file: &web_sys::File, token: &str) -> Result<IconUploadResponse, String> {
    let form = web_sys::FormData::new().map_err(|_| "multipart form creation failed".to_owned())?;
    form.append_with_blob_with_filename("icon", file, &file.name())
        .map_err(|_| "multipart form creation failed".to_owned())?;
    let resp = gloo_net::http::Request::post(UPLOADS_PATH)
        .header("Authorization", &bearer(token))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_message(resp).await);
    }
    resp.json::<IconUploadResponse>().await.map_err(|e| e.to_string())
}

/// Fetch the review list via `GET /books`.
///
/// # Errors
///
/// Returns a display string when the token is rejected or the request fails.
pub async fn list_books(token: &str) -> Result<Vec<BookData>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(BOOKS_PATH)
            .header("Authorization", &bearer(token))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<Vec<BookData>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err("not available on server".to_owned())
    }
}

/// Fetch one review via `GET /books/{id}`. The bearer header is attached
/// when a session token is available so `isMine` reflects ownership.
///
/// # Errors
///
/// Returns a display string when the review is missing or the request fails.
pub async fn fetch_book(id: &str, token: Option<&str>) -> Result<BookData, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut builder = gloo_net::http::Request::get(&book_endpoint(id));
        if let Some(token) = token {
            builder = builder.header("Authorization", &bearer(token));
        }
        let resp = builder.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        resp.json::<BookData>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, token);
        Err("not available on server".to_owned())
    }
}

/// Publish a review via `POST /books`.
///
/// # Errors
///
/// Returns a display string when the token is rejected or the request fails.
pub async fn create_book(req: &BookCreateRequest, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(BOOKS_PATH)
            .header("Authorization", &bearer(token))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (req, token);
        Err("not available on server".to_owned())
    }
}

/// Update an owned review via `PUT /books/{id}`.
///
/// # Errors
///
/// Returns a display string when the review is not owned by the caller or
/// the request fails.
pub async fn update_book(id: &str, req: &BookCreateRequest, token: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::put(&book_endpoint(id))
            .header("Authorization", &bearer(token))
            .json(req)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(error_message(resp).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, req, token);
        Err("not available on server".to_owned())
    }
}
