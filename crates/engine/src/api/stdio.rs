//! Newline-delimited JSON-RPC over a byte stream (stdin/stdout in production).

use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;

use securerand_shared::{JsonRpcError, JsonRpcResponse};

use super::mcp::McpHandler;

/// Buffer size for responses waiting on the writer task.
const RESPONSE_CHANNEL_BUFFER: usize = 256;

/// Serve MCP until `reader` reaches EOF.
///
/// Every request line is handled on its own task, so a slow request never
/// holds up the ones behind it. A single writer task owns `writer` and emits
/// one response per line. Responses to different requests may come back in
/// any order. A line that is not valid UTF-8 is answered with a parse error
/// and does not end the loop. Returns once every in-flight response has been
/// written.
pub async fn serve<R, W>(handler: McpHandler, reader: R, writer: W) -> io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin + Send + 'static,
{
    let (tx, rx) = mpsc::channel::<JsonRpcResponse>(RESPONSE_CHANNEL_BUFFER);
    let writer_task = tokio::spawn(write_responses(rx, writer));

    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }
        let line = match String::from_utf8(std::mem::take(&mut buf)) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!(error = %e, "Input line is not valid UTF-8");
                let response = JsonRpcResponse::failure(
                    None,
                    JsonRpcError::parse_error(format!("Parse error: {e}")),
                );
                if tx.send(response).await.is_err() {
                    tracing::warn!("Response writer closed, dropping response");
                }
                continue;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        let handler = handler.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            if let Some(response) = handler.handle_line(&line) {
                if tx.send(response).await.is_err() {
                    tracing::warn!("Response writer closed, dropping response");
                }
            }
        });
    }
    tracing::info!("Input closed, draining responses");

    // The writer finishes once the last in-flight request drops its sender
    drop(tx);
    writer_task.await.map_err(io::Error::other)?
}

async fn write_responses<W>(mut rx: mpsc::Receiver<JsonRpcResponse>, mut writer: W) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = rx.recv().await {
        let mut line = match serde_json::to_string(&response) {
            Ok(line) => line,
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize response");
                continue;
            }
        };
        line.push('\n');
        writer.write_all(line.as_bytes()).await?;
        writer.flush().await?;
    }
    writer.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::App;
    use crate::infrastructure::clock::{FixedClock, SeededRandom};
    use chrono::Utc;
    use securerand_shared::RequestId;
    use std::sync::Arc;
    use tokio::io::AsyncReadExt;

    fn handler() -> McpHandler {
        McpHandler::new(Arc::new(App::new(
            Arc::new(SeededRandom::new(3)),
            Arc::new(FixedClock(Utc::now())),
        )))
    }

    async fn run(input: &str) -> Vec<JsonRpcResponse> {
        let (writer, mut output) = tokio::io::duplex(1 << 20);
        serve(handler(), input.as_bytes(), writer)
            .await
            .expect("serve completes at EOF");
        let mut text = String::new();
        output
            .read_to_string(&mut text)
            .await
            .expect("output readable");
        text.lines()
            .map(|line| serde_json::from_str(line).expect("each line is one response"))
            .collect()
    }

    #[tokio::test]
    async fn test_one_response_per_request() {
        let input = concat!(
            r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2025-06-18","capabilities":{}}}"#,
            "\n",
            r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
            "\n",
            "\n",
            r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#,
            "\n",
            r#"{"jsonrpc":"2.0","id":3,"method":"tools/call","params":{"name":"generate_uuid","arguments":{"count":2}}}"#,
            "\n",
        );
        let mut responses = run(input).await;
        assert_eq!(responses.len(), 3);
        responses.sort_by_key(|r| match r.id {
            Some(RequestId::Number(n)) => n,
            _ => i64::MAX,
        });
        assert!(responses.iter().all(|r| !r.is_error()));
        let uuids = &responses[2].result.as_ref().expect("result")["structuredContent"]["values"];
        assert_eq!(uuids.as_array().map(Vec::len), Some(2));
    }

    #[tokio::test]
    async fn test_parse_error_does_not_stop_the_loop() {
        let input = "not json\n{\"jsonrpc\":\"2.0\",\"id\":\"after\",\"method\":\"ping\"}\n";
        let responses = run(input).await;
        assert_eq!(responses.len(), 2);
        let parse_error = responses
            .iter()
            .find(|r| r.id.is_none())
            .expect("parse error response");
        assert_eq!(
            parse_error.error.as_ref().map(|e| e.code),
            Some(securerand_shared::error_codes::PARSE_ERROR)
        );
        assert!(responses
            .iter()
            .any(|r| r.id == Some(RequestId::from("after")) && !r.is_error()));
    }

    #[tokio::test]
    async fn test_invalid_utf8_line_is_answered_and_skipped() {
        let (writer, mut output) = tokio::io::duplex(1 << 16);
        let input: &[u8] = b"\xff\xfe\n{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n";
        serve(handler(), input, writer)
            .await
            .expect("bad bytes do not end the loop");
        let mut text = String::new();
        output
            .read_to_string(&mut text)
            .await
            .expect("output readable");
        let responses: Vec<JsonRpcResponse> = text
            .lines()
            .map(|line| serde_json::from_str(line).expect("each line is one response"))
            .collect();
        assert_eq!(responses.len(), 2);
        let parse_error = responses
            .iter()
            .find(|r| r.id.is_none())
            .expect("bad line answered with null id");
        assert_eq!(
            parse_error.error.as_ref().map(|e| e.code),
            Some(securerand_shared::error_codes::PARSE_ERROR)
        );
        assert!(responses
            .iter()
            .any(|r| r.id == Some(RequestId::Number(1)) && !r.is_error()));
    }

    #[tokio::test]
    async fn test_last_line_without_newline_is_handled() {
        let responses = run("{\"jsonrpc\":\"2.0\",\"id\":9,\"method\":\"ping\"}").await;
        assert_eq!(responses.len(), 1);
        assert_eq!(responses[0].id, Some(RequestId::Number(9)));
    }

    #[tokio::test]
    async fn test_many_concurrent_requests_all_answered() {
        let input: String = (0..200)
            .map(|i| {
                format!(
                    "{{\"jsonrpc\":\"2.0\",\"id\":{i},\"method\":\"tools/call\",\"params\":{{\"name\":\"generate_random_bytes\",\"arguments\":{{\"length\":16}}}}}}\n"
                )
            })
            .collect();
        let responses = run(&input).await;
        assert_eq!(responses.len(), 200);
        let ids: std::collections::HashSet<_> = responses.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids.len(), 200);
    }

    #[tokio::test]
    async fn test_empty_input_writes_nothing() {
        assert!(run("").await.is_empty());
    }
}
