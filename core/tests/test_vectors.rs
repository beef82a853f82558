//! Verify `fetch_user` against JSON test vectors stored in `test-vectors/`.
//!
//! Each case gives a simulated response and either the expected user or the
//! expected error variant. The response is served through an in-memory
//! transport, so only the client's interpretation is under test.

use user_api_core::{ApiClient, ApiError, FnTransport, HttpResponse, TransportError, User};

#[test]
fn fetch_user_test_vectors() {
    let raw = include_str!("../../test-vectors/fetch_user.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let status = sim["status"].as_u64().unwrap() as u16;
        let body = sim["body"].as_str().unwrap().to_string();

        let client = ApiClient::new(FnTransport(move |_: &str| -> Result<HttpResponse, TransportError> {
            Ok(HttpResponse::from_bytes(status, body.clone()))
        }));
        let result = client.fetch_user("http://localhost:3000/users/0");

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "UnexpectedStatus" => {
                    let expected_status = case["expected_status"].as_u64().unwrap() as u16;
                    assert!(
                        matches!(err, ApiError::UnexpectedStatus { status } if status == expected_status),
                        "{name}: expected UnexpectedStatus({expected_status}), got {err:?}"
                    );
                }
                "Decode" => assert!(matches!(err, ApiError::Decode(_)), "{name}: expected Decode, got {err:?}"),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let user = result.unwrap_or_else(|e| panic!("{name}: {e}"));
            let expected: User = serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(user, expected, "{name}: parsed result");
        }
    }
}
