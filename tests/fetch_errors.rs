use country_explorer::FetchError;

#[test]
fn status_400_means_not_found() {
    let err = FetchError::from_status(400, "https://restcountries.com/v3.1/alpha/zz");
    assert!(err.is_not_found());
    assert_eq!(err.code(), 400);
    assert!(err.message().ends_with("400"));
}

#[test]
fn other_statuses_are_upstream_errors() {
    for status in [404u16, 403, 500, 503] {
        let err = FetchError::from_status(status, "x");
        assert_eq!(err.code(), 404, "status {status}");
        assert!(matches!(err, FetchError::Upstream { status: s, .. } if s == status));
    }
}

#[test]
fn transport_errors_map_to_500() {
    let err = FetchError::transport("request timed out");
    assert_eq!(err.code(), 500);
    assert_eq!(err.to_string(), "request timed out");
}

#[test]
fn undecodable_body_is_a_transport_error() {
    let bad = serde_json::from_str::<Vec<u8>>("<html>").unwrap_err();
    let err = FetchError::from(bad);
    assert_eq!(err.code(), 500);
    assert!(err.message().starts_with("decode json"));
}
