use std::{
    path::Path,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use tempfile::TempDir;
use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{TcpListener, TcpStream},
};
use url::Url;

use crate::{
    formatter::FontSource,
    llm_client::{LanguageServiceArguments, LlmClientBackend, LlmClientConnector, LlmClientError},
};

pub(crate) const TEST_API_KEY_VAR: &str = "CREATIVE_BACKEND_TEST_API_KEY";

type Seen = Arc<Mutex<Vec<LanguageServiceArguments>>>;

enum Script {
    Reply(String),
    ConnectFailure,
    CallFailure,
}

/// Connector whose backend answers from a fixed script and records every request.
pub(crate) struct ScriptedConnector {
    script: Script,
    connects: Arc<AtomicUsize>,
    seen: Seen,
}

impl ScriptedConnector {
    fn with_script(script: Script) -> Self {
        Self {
            script,
            connects: Arc::new(AtomicUsize::new(0)),
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub(crate) fn replying<S: Into<String>>(reply: S) -> Self {
        Self::with_script(Script::Reply(reply.into()))
    }

    pub(crate) fn failing_to_connect() -> Self {
        Self::with_script(Script::ConnectFailure)
    }

    pub(crate) fn failing_calls() -> Self {
        Self::with_script(Script::CallFailure)
    }

    pub(crate) fn connects(&self) -> Arc<AtomicUsize> {
        self.connects.clone()
    }

    pub(crate) fn seen(&self) -> Seen {
        self.seen.clone()
    }
}

impl LlmClientConnector for ScriptedConnector {
    fn connect(&self) -> Result<Box<dyn LlmClientBackend>, LlmClientError> {
        self.connects.fetch_add(1, Ordering::SeqCst);
        let reply = match &self.script {
            Script::ConnectFailure => {
                return Err(LlmClientError::MissingCredential(
                    TEST_API_KEY_VAR.to_string(),
                ))
            }
            Script::Reply(reply) => Some(reply.clone()),
            Script::CallFailure => None,
        };
        Ok(Box::new(ScriptedBackend {
            reply,
            seen: self.seen.clone(),
        }))
    }
}

struct ScriptedBackend {
    reply: Option<String>,
    seen: Seen,
}

#[async_trait]
impl LlmClientBackend for ScriptedBackend {
    async fn get_response(
        &self,
        arguments: LanguageServiceArguments,
    ) -> Result<String, LlmClientError> {
        self.seen.lock().unwrap().push(arguments);
        self.reply.clone().ok_or(LlmClientError::EmptyResponse)
    }
}

const DEJAVU_DIRECTORY: &str = "/usr/share/fonts/truetype/dejavu";

/// Stages the system DejaVu faces under the bundled font names.
pub(crate) fn staged_fonts() -> (TempDir, FontSource) {
    let regular = Path::new(DEJAVU_DIRECTORY).join("DejaVuSans.ttf");
    let bold = Path::new(DEJAVU_DIRECTORY).join("DejaVuSans-Bold.ttf");
    let dir = tempfile::tempdir().unwrap();
    let source = FontSource::new(dir.path());
    std::fs::copy(&regular, source.regular())
        .unwrap_or_else(|e| panic!("copying {}: {e}", regular.display()));
    std::fs::copy(&bold, source.bold())
        .unwrap_or_else(|e| panic!("copying {}: {e}", bold.display()));
    (dir, source)
}

/// Chat completion endpoint on a loopback port that answers every request
/// with the same status and JSON body, counting each hit.
pub(crate) struct MockProvider {
    url: Url,
    hits: Arc<AtomicUsize>,
}

impl MockProvider {
    pub(crate) async fn start(status: u16, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        let hits = Arc::new(AtomicUsize::new(0));

        let counter = hits.clone();
        tokio::spawn(async move {
            while let Ok((mut stream, _)) = listener.accept().await {
                if read_request(&mut stream).await.is_err() {
                    continue;
                }
                counter.fetch_add(1, Ordering::SeqCst);
                let response = format!(
                    "HTTP/1.1 {status} Mock\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                let _ = stream.write_all(response.as_bytes()).await;
                let _ = stream.shutdown().await;
            }
        });

        Self {
            url: Url::parse(&format!("http://{address}/v1")).unwrap(),
            hits,
        }
    }

    /// A base URL nothing is listening on.
    pub(crate) async fn unreachable() -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        Url::parse(&format!("http://{address}/v1")).unwrap()
    }

    pub(crate) fn url(&self) -> &Url {
        &self.url
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn read_request(stream: &mut TcpStream) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let read = stream.read(&mut chunk).await?;
        if read == 0 {
            return Err(std::io::ErrorKind::UnexpectedEof.into());
        }
        request.extend_from_slice(&chunk[..read]);

        let Some(head_end) = request.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&request[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if request.len() >= head_end + 4 + content_length {
            return Ok(());
        }
    }
}
