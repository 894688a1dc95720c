use ufood_client::error::{AppError, ResourceResult};
use ufood_client::utils::fallback::{FallbackExt, succeeded};

#[test]
fn test_or_default_logged_passes_success_through() {
    let result: ResourceResult<Vec<u32>> = Ok(vec![1, 2]);
    assert_eq!(result.or_default_logged("ctx"), vec![1, 2]);
}

#[test]
fn test_or_default_logged_on_failure() {
    let result: ResourceResult<Vec<u32>> = Err(AppError::Unauthenticated);
    assert!(result.or_default_logged("ctx").is_empty());
}

#[test]
fn test_ok_logged() {
    let ok: ResourceResult<&str> = Ok("value");
    assert_eq!(ok.ok_logged("ctx"), Some("value"));

    let err: ResourceResult<&str> = Err(AppError::Transport("connection refused".into()));
    assert_eq!(err.ok_logged("ctx"), None);
}

#[test]
fn test_succeeded() {
    assert!(succeeded(Ok(()), "ctx"));
    assert!(!succeeded(
        Err(AppError::MissingArgument("No favorite list selected.".into())),
        "ctx"
    ));
}
