//! Google provider integration tests.
//!
//! These hit the live web endpoint and are opt-in:
//! ```bash
//! GOOGLE_LIVE_TESTS=1 \
//!     cargo test -p catalog-translator-provider --test google_test -- --ignored --nocapture
//! ```

mod common;

use common::TestContext;

#[tokio::test]
#[ignore]
async fn test_google_validate_credentials() {
    skip_if_no_credentials!("GOOGLE_LIVE_TESTS");

    let ctx = TestContext::google().expect("failed to create test context");
    let result = ctx.provider.validate_credentials().await;

    assert!(result.is_ok(), "validate_credentials failed: {result:?}");
    assert!(result.unwrap(), "endpoint probe should succeed");
}

#[tokio::test]
#[ignore]
async fn test_google_translate_plain_text() {
    skip_if_no_credentials!("GOOGLE_LIVE_TESTS");

    let ctx = TestContext::google().expect("failed to create test context");
    let result = ctx.provider.translate("good morning", &ctx.languages).await;

    assert!(result.is_ok(), "translate failed: {result:?}");
    let translated = result.unwrap();
    assert!(!translated.is_empty(), "translation should not be empty");
    println!("✓ translate: good morning -> {translated}");
}

#[tokio::test]
#[ignore]
async fn test_google_translate_multi_sentence() {
    skip_if_no_credentials!("GOOGLE_LIVE_TESTS");

    let ctx = TestContext::google().expect("failed to create test context");
    let result = ctx
        .provider
        .translate("The box is red. The cable is long.", &ctx.languages)
        .await;

    assert!(result.is_ok(), "translate failed: {result:?}");
    // Segment concatenation must keep both sentences.
    assert!(result.unwrap().len() > 10);
}
