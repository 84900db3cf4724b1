mod common;

use anyhow::Result;
use reqwest::StatusCode;

// The gate is one shared flag, so the whole sign-in/sign-out flow lives in a
// single test to keep ordering deterministic.

#[tokio::test]
async fn session_gate_full_flow() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // Signed out: the admin surface is rejected before any handler runs
    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], serde_json::json!(false));
    assert_eq!(payload["code"], serde_json::json!("UNAUTHORIZED"));

    let res = client
        .get(format!("{}/api/submissions", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Wrong password is rejected and leaves the gate closed
    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&serde_json::json!({ "password": "guess" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(
        payload["message"],
        serde_json::json!("Incorrect password. Please try again.")
    );

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    // Correct password opens the gate
    common::sign_in(server).await?;
    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let payload = res.json::<serde_json::Value>().await?;
    assert_eq!(payload["success"], serde_json::json!(true));
    assert_eq!(payload["data"]["authenticated"], serde_json::json!(true));

    // Sign out closes it again
    let res = client
        .delete(format!("{}/api/auth/session", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .get(format!("{}/api/auth/whoami", server.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
