use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

type Routes = Arc<Mutex<HashMap<String, (u16, String)>>>;
/// Lower-cased request headers of the latest request, per path.
type Seen = Arc<Mutex<HashMap<String, HashMap<String, String>>>>;

/// Minimal HTTP/1.1 server answering GETs from a fixed route table.
pub struct TestServer {
    pub base: String,
    routes: Routes,
    seen: Seen,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let routes: Routes = Arc::default();
        let seen: Seen = Arc::default();

        let handle = tokio::spawn({
            let routes = Arc::clone(&routes);
            let seen = Arc::clone(&seen);
            async move {
                loop {
                    let Ok((stream, _)) = listener.accept().await else {
                        return;
                    };
                    tokio::spawn(answer(stream, Arc::clone(&routes), Arc::clone(&seen)));
                }
            }
        });

        TestServer {
            base,
            routes,
            seen,
            handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub fn route(&self, path: &str, status: u16, body: &str) {
        self.routes
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub fn request_header(&self, path: &str, name: &str) -> Option<String> {
        self.seen
            .lock()
            .unwrap()
            .get(path)
            .and_then(|headers| headers.get(&name.to_ascii_lowercase()).cloned())
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn answer(mut stream: TcpStream, routes: Routes, seen: Seen) {
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf).await {
            Ok(0) | Err(_) => return,
            Ok(n) => request.extend_from_slice(&buf[..n]),
        }
    }

    let request = String::from_utf8_lossy(&request);
    let mut lines = request.lines();
    let path = lines
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
        .to_string();
    let headers: HashMap<String, String> = lines
        .take_while(|line| !line.is_empty())
        .filter_map(|line| line.split_once(':'))
        .map(|(name, value)| (name.trim().to_ascii_lowercase(), value.trim().to_string()))
        .collect();
    seen.lock().unwrap().insert(path.clone(), headers);

    let (status, body) = routes
        .lock()
        .unwrap()
        .get(&path)
        .cloned()
        .unwrap_or((404, "not found".to_string()));

    let response = format!(
        "HTTP/1.1 {status} X\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

pub fn sitemap(urls: &[String]) -> String {
    let entries: String = urls
        .iter()
        .map(|url| format!("  <url><loc>{url}</loc></url>\n"))
        .collect();
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n{entries}</urlset>\n"
    )
}

pub fn course_page(name: &str, weeks: usize, rating: &str, start: &str) -> String {
    let weeks: String = (1..=weeks)
        .map(|week| format!("<div class=\"week\">Week {week}</div>"))
        .collect();
    format!(
        r#"<html><head>
<script type="application/ld+json">{{"@type":"Course","hasCourseInstance":[{{"startDate":"{start}"}}]}}</script>
</head><body>
<h1 class="title display-3-text">{name}</h1>
<div class="language-info">English</div>
<div class="rc-WeekView">{weeks}</div>
<script>window.App = {{"averageFiveStarRating":{rating}}};</script>
</body></html>"#
    )
}
