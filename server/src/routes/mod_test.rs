use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[test]
fn pkg_dir_is_nested_under_site_root() {
    assert_eq!(pkg_dir("target/site"), PathBuf::from("target/site/pkg"));
}

#[test]
fn pkg_dir_handles_absolute_roots() {
    assert_eq!(pkg_dir("/srv/bookbazaar"), PathBuf::from("/srv/bookbazaar/pkg"));
}
