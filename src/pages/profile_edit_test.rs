use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

fn icon_response() -> IconUploadResponse {
    IconUploadResponse {
        icon_url: "https://example.com/icon.png".to_owned(),
    }
}

#[test]
fn rename_without_avatar_skips_the_upload() {
    let uploads = Rc::new(Cell::new(0_u32));
    let uploads_probe = uploads.clone();
    let saved = block_on(save_profile_with(
        "Renamed".to_owned(),
        None::<&str>,
        "t1".to_owned(),
        |name, token| async move {
            assert_eq!(name, "Renamed");
            assert_eq!(token, "t1");
            Ok(UserUpdateResponse { name })
        },
        move |_icon, _token| {
            uploads_probe.set(uploads_probe.get() + 1);
            async { Ok(icon_response()) }
        },
    ))
    .unwrap();
    assert_eq!(saved, "Renamed");
    assert_eq!(uploads.get(), 0);
}

#[test]
fn avatar_uploads_with_the_session_token() {
    let uploaded = Rc::new(Cell::new(false));
    let uploaded_probe = uploaded.clone();
    let saved = block_on(save_profile_with(
        "Renamed".to_owned(),
        Some("avatar-bytes"),
        "t1".to_owned(),
        |name, _token| async move { Ok(UserUpdateResponse { name }) },
        move |icon, token| {
            assert_eq!(icon, "avatar-bytes");
            assert_eq!(token, "t1");
            uploaded_probe.set(true);
            async { Ok(icon_response()) }
        },
    ))
    .unwrap();
    assert_eq!(saved, "Renamed");
    assert!(uploaded.get());
}

#[test]
fn icon_upload_failure_does_not_fail_the_save() {
    let saved = block_on(save_profile_with(
        "Renamed".to_owned(),
        Some("avatar-bytes"),
        "t1".to_owned(),
        |name, _token| async move { Ok(UserUpdateResponse { name }) },
        |_icon, _token| async { Err("upload rejected".to_owned()) },
    ));
    assert_eq!(saved.unwrap(), "Renamed");
}

#[test]
fn update_failure_propagates_and_skips_the_upload() {
    let uploads = Rc::new(Cell::new(0_u32));
    let uploads_probe = uploads.clone();
    let result = block_on(save_profile_with(
        "Renamed".to_owned(),
        Some("avatar-bytes"),
        "t1".to_owned(),
        |_name, _token| async { Err("session expired".to_owned()) },
        move |_icon, _token| {
            uploads_probe.set(uploads_probe.get() + 1);
            async { Ok(icon_response()) }
        },
    ));
    assert_eq!(result.unwrap_err(), "session expired");
    assert_eq!(uploads.get(), 0);
}
