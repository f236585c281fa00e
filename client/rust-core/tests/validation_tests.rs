mod common;

use codequest_client::gateway::ops;
use codequest_client::models::CourseLanguage;
use codequest_client::Error;
use common::{anonymous_state, authed_state, MockGateway, TEST_TOKEN};
use serde_json::json;

#[tokio::test]
async fn authenticated_validation_delegates_to_the_backend() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::VALIDATE_CODE,
        json!({ "output": "Hello World", "isCorrect": true }),
    );
    let state = authed_state(gateway.clone());

    let outcome = state
        .validation
        .validate(CourseLanguage::Python, "print(\"Hello World\")", "Hello World")
        .await
        .unwrap();

    assert!(outcome.is_correct);
    assert_eq!(outcome.output, "Hello World");

    let args = gateway.last_args(ops::VALIDATE_CODE).unwrap();
    assert_eq!(args["code"], "print(\"Hello World\")");
    assert_eq!(args["language"], "python");
    assert_eq!(args["expectedOutput"], "Hello World");
    assert_eq!(args["accessToken"], TEST_TOKEN);
}

#[tokio::test]
async fn backend_error_field_is_surfaced_as_the_output() {
    let gateway = MockGateway::new();
    gateway.respond(
        ops::VALIDATE_CODE,
        json!({
            "output": null,
            "isCorrect": false,
            "error": "SyntaxError: unexpected EOF while parsing",
        }),
    );
    let state = authed_state(gateway);

    let outcome = state
        .validation
        .validate(CourseLanguage::Python, "print(", "Hello")
        .await
        .unwrap();

    assert!(!outcome.is_correct);
    assert_eq!(outcome.output, "SyntaxError: unexpected EOF while parsing");
}

#[tokio::test]
async fn remote_validation_failure_propagates() {
    let gateway = MockGateway::new();
    gateway.fail(ops::VALIDATE_CODE, 500, "runner unavailable");
    let state = authed_state(gateway);

    let result = state
        .validation
        .validate(CourseLanguage::Python, "print(\"x\")", "x")
        .await;

    assert!(matches!(
        result,
        Err(Error::Gateway {
            operation: "validate_code",
            ..
        })
    ));
}

#[tokio::test]
async fn anonymous_validation_uses_the_local_heuristic() {
    let gateway = MockGateway::new();
    let state = anonymous_state(gateway.clone());

    let outcome = state
        .validation
        .validate(CourseLanguage::Python, "print(\"Hello World\")", "Hello World")
        .await
        .unwrap();
    assert!(outcome.is_correct);

    let outcome = state
        .validation
        .validate(CourseLanguage::Python, "print(\"hello world\")", "Hello World")
        .await
        .unwrap();
    assert!(!outcome.is_correct);

    let outcome = state
        .validation
        .validate(CourseLanguage::Python, "x = 5", "Hello World")
        .await
        .unwrap();
    assert!(!outcome.is_correct);
    assert_eq!(outcome.output, "Error: No print statement found");

    assert_eq!(gateway.total_calls(), 0);
}

#[tokio::test]
async fn markup_is_checked_locally_even_with_a_session() {
    let gateway = MockGateway::new();
    let state = authed_state(gateway.clone());

    let outcome = state
        .validation
        .validate(
            CourseLanguage::Html,
            "<main><h1>Welcome to HTML</h1></main>",
            "<h1>Welcome to HTML</h1>",
        )
        .await
        .unwrap();

    assert!(outcome.is_correct);
    assert_eq!(gateway.total_calls(), 0);
}
