//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::Path;

use cors_serve::config::{ListenerConfig, ServerConfig};
use cors_serve::http::HttpServer;
use cors_serve::lifecycle::Shutdown;
use cors_serve::net;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::task::JoinHandle;

/// The four headers every response must carry.
pub const CORS_HEADERS: [(&str, &str); 4] = [
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, OPTIONS"),
    ("access-control-allow-headers", "*"),
    ("cache-control", "no-store, no-cache, must-revalidate"),
];

/// In-process server on an ephemeral loopback port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start a server rooted at `root`. The listener is bound before returning.
pub async fn spawn_server(root: &Path) -> TestServer {
    let config = ServerConfig {
        listener: ListenerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        root: root.to_path_buf(),
        ..ServerConfig::default()
    };

    let listener = net::bind(&config.listener).await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    let handle = tokio::spawn(server.run(listener, shutdown.wait()));

    TestServer {
        addr,
        shutdown,
        handle,
    }
}

/// Client that never goes through a system proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Send `request_line` verbatim (no client-side path normalization) and
/// return the whole response as text.
#[allow(dead_code)]
pub async fn raw_request(addr: SocketAddr, request_line: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!("{request_line}\r\nHost: {addr}\r\nConnection: close\r\n\r\n");
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut buf = Vec::new();
    stream.read_to_end(&mut buf).await.unwrap();
    String::from_utf8_lossy(&buf).into_owned()
}

/// Assert the exact CORS/cache header set on a reqwest response.
pub fn assert_cors(res: &reqwest::Response) {
    for (name, value) in CORS_HEADERS {
        let got: Vec<_> = res.headers().get_all(name).iter().collect();
        assert_eq!(got, vec![value], "header {name} on {}", res.status());
    }
}
