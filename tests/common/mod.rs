use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::StatusCode;
use serde_json::json;

static SERVER: OnceLock<TestServer> = OnceLock::new();
static EMAIL_COUNTER: AtomicU32 = AtomicU32::new(0);

pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn() -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        // Assumes debug profile; adjust if you run tests with --release
        let mut cmd = Command::new("target/debug/invoicing-api");
        cmd.env("PORT", port.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        // Inherit environment so the server can see DATABASE_URL and JWT_SECRET from .env
        let child = cmd.spawn().context("failed to spawn server binary")?;

        Ok(Self { port, base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == StatusCode::OK
                    || resp.status() == StatusCode::SERVICE_UNAVAILABLE
                {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

pub async fn ensure_server() -> Result<&'static TestServer> {
    let server =
        SERVER.get_or_init(|| TestServer::spawn().expect("failed to spawn server binary"));
    server.wait_ready(Duration::from_secs(10)).await?;
    Ok(server)
}

/// Tests that touch the database are skipped when DATABASE_URL is unset.
pub fn database_available() -> bool {
    if std::env::var("DATABASE_URL").is_ok() {
        return true;
    }
    eprintln!("skipping: DATABASE_URL is not set");
    false
}

/// A process-unique email so repeated test runs never collide on the
/// users.email unique constraint.
#[allow(dead_code)]
pub fn unique_email(prefix: &str) -> String {
    let n = EMAIL_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!(
        "{}-{}-{}-{}@example.com",
        prefix,
        std::process::id(),
        now_nanos(),
        n
    )
}

fn now_nanos() -> u128 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0)
}

/// Creates a fresh user through the public create endpoint and logs in,
/// returning (user body, bearer token).
#[allow(dead_code)]
pub async fn create_user_and_login(
    server: &TestServer,
    prefix: &str,
) -> Result<(serde_json::Value, String)> {
    let client = reqwest::Client::new();
    let email = unique_email(prefix);
    let password = "s3cret-pass";

    let res = client
        .post(format!("{}/users/create", server.base_url))
        .json(&json!({
            "email": email,
            "password": password,
            "firstName": "Test",
            "lastName": "User",
        }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::CREATED,
        "user create failed: {}",
        res.status()
    );
    let user = res.json::<serde_json::Value>().await?;

    let res = client
        .post(format!("{}/users/login", server.base_url))
        .json(&json!({ "email": email, "password": password }))
        .send()
        .await?;
    anyhow::ensure!(
        res.status() == StatusCode::OK,
        "login failed: {}",
        res.status()
    );
    let body = res.json::<serde_json::Value>().await?;
    let token = body["token"]
        .as_str()
        .context("login response missing token")?
        .to_string();

    Ok((user, token))
}
