//! Requests trying to leave the document root.

use axum::http::StatusCode;

mod common;

use common::{get, Fixture};

fn assert_no_leak(body: &str, fixture: &Fixture) {
    assert!(!body.contains("TOP SECRET"), "secret content leaked");
    assert!(
        !body.contains(&*fixture.outer.to_string_lossy()),
        "filesystem path leaked"
    );
}

#[tokio::test]
async fn test_plain_traversal_is_denied() {
    let fixture = Fixture::new();
    let router = fixture.router();

    for uri in ["/../secret.txt", "/subdir/../../secret.md", "/..\\secret.txt"] {
        let res = get(&router, uri).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "{uri}");
        assert_no_leak(&res.text(), &fixture);
    }
}

#[tokio::test]
async fn test_encoded_traversal_is_denied() {
    let fixture = Fixture::new();
    let router = fixture.router();

    for uri in [
        "/%2e%2e/secret.txt",
        "/%2E%2E/secret.md",
        "/%252e%252e/secret.txt",
        "/..%2fsecret.md",
        "/..%2Fsecret.txt",
        "/subdir/..%2f..%2fsecret.md",
    ] {
        let res = get(&router, uri).await;
        assert_eq!(res.status, StatusCode::FORBIDDEN, "{uri}");
        assert_no_leak(&res.text(), &fixture);
    }
}

#[tokio::test]
async fn test_traversal_to_missing_file_is_still_denied() {
    let fixture = Fixture::new();
    let res = get(&fixture.router(), "/..%2fnot-there.md").await;
    assert_eq!(res.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_null_byte_is_bad_request() {
    let fixture = Fixture::new();
    let router = fixture.router();

    for uri in ["/test.md%00.js", "/%00", "/subdir%00/nested.md"] {
        let res = get(&router, uri).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(res.text().contains("Bad request."));
    }
}

#[tokio::test]
async fn test_encoded_dot_segments_collapse_inside_root() {
    let fixture = Fixture::new();
    let res = get(&fixture.router(), "/subdir/.%2e%2fnested.md").await;
    // `/subdir/../nested.md` after decoding: stays inside, but no such file.
    assert_eq!(res.status, StatusCode::NOT_FOUND);

    let res = get(&fixture.router(), "/subdir/.%2fnested.md").await;
    assert_eq!(res.status, StatusCode::OK);
}

#[tokio::test]
async fn test_search_directory_outside_root_is_rejected() {
    let fixture = Fixture::new();
    let router = fixture.router();

    for uri in [
        "/api/search?q=secret&dir=..",
        "/api/search?q=secret&dir=%2e%2e%2f",
        "/api/search?q=secret&dir=/subdir/../..",
        "/api/search?q=secret&dir=%00",
    ] {
        let res = get(&router, uri).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(res.json()["error"], "Invalid directory path");
    }
}

#[tokio::test]
async fn test_search_dir_is_decoded_once() {
    let fixture = Fixture::new();
    // `%252e%252e` arrives as the literal name `%2e%2e`, which does not exist.
    let res = get(&fixture.router(), "/api/search?q=secret&dir=%252e%252e").await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_error_details_hidden_outside_debug() {
    let fixture = Fixture::new();
    let res = get(&fixture.router(), "/../secret.md").await;
    assert!(!res.text().contains("error-details"));
}

#[cfg(unix)]
mod symlinks {
    use super::*;
    use std::os::unix::fs::symlink;

    #[tokio::test]
    async fn test_symlink_escape_is_denied() {
        let fixture = Fixture::new();
        let private = fixture.outer.join("private");
        std::fs::create_dir_all(&private).unwrap();
        std::fs::write(private.join("plans.md"), "# TOP SECRET").unwrap();
        symlink(&private, fixture.root.join("escape")).unwrap();
        symlink(fixture.outer.join("secret.txt"), fixture.root.join("leak.txt")).unwrap();

        let router = fixture.router();
        for uri in ["/escape/plans.md", "/escape/", "/leak.txt", "/escape/missing.md"] {
            let res = get(&router, uri).await;
            assert_eq!(res.status, StatusCode::FORBIDDEN, "{uri}");
            assert_no_leak(&res.text(), &fixture);
        }
    }

    #[tokio::test]
    async fn test_symlink_within_root_is_served() {
        let fixture = Fixture::new();
        symlink(fixture.root.join("subdir"), fixture.root.join("alias")).unwrap();

        let res = get(&fixture.router(), "/alias/nested.md").await;
        assert_eq!(res.status, StatusCode::OK);
        assert!(res.text().contains("<h1>Nested Document</h1>"));
    }

    #[tokio::test]
    async fn test_listing_does_not_describe_symlink_targets() {
        let fixture = Fixture::new();
        std::fs::write(fixture.outer.join("payroll.bin"), vec![0u8; 123_456]).unwrap();
        symlink(fixture.outer.join("payroll.bin"), fixture.root.join("peek")).unwrap();
        symlink(&fixture.outer, fixture.root.join("updir")).unwrap();

        let res = get(&fixture.router(), "/").await;
        assert_eq!(res.status, StatusCode::OK);
        let body = res.text();
        assert!(body.contains("href=\"/peek\""));
        assert!(!body.contains("120.6 KB"));
        assert!(!body.contains("href=\"/updir/\""));
    }

    #[tokio::test]
    async fn test_search_does_not_follow_symlinks() {
        let fixture = Fixture::new();
        std::fs::create_dir_all(fixture.outer.join("private")).unwrap();
        std::fs::write(fixture.outer.join("private").join("secret-plan.md"), "").unwrap();
        symlink(fixture.outer.join("private"), fixture.root.join("escape")).unwrap();

        let res = get(&fixture.router(), "/api/search?q=secret-plan").await;
        assert_eq!(res.json()["total"], 0);
    }
}
