//! MCP Stdio Server
//!
//! Implements the stdio transport for MCP: reads JSON-RPC messages from stdin
//! and writes responses to stdout, one message per line.
//!
//! Every request runs in its own task, so a slow backend call never holds up
//! later requests. Responses are funnelled through a channel to a single
//! writer and may therefore arrive out of request order.

use std::sync::Arc;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::mcp::error::McpError;
use crate::mcp::handler::McpHandler;
use crate::mcp::protocol::{JsonRpcRequest, JsonRpcResponse};

/// Responses buffered between request tasks and the writer
const CHANNEL_CAPACITY: usize = 100;

pub struct McpStdioServer {
    handler: Arc<McpHandler>,
}

impl McpStdioServer {
    pub fn new(handler: McpHandler) -> Self {
        Self { handler: Arc::new(handler) }
    }

    /// Serve stdin/stdout until EOF
    pub async fn run(&self) -> anyhow::Result<()> {
        info!("Starting MCP stdio server");

        let reader = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.serve(reader, &mut stdout).await?;

        info!("MCP stdio server shutting down (EOF received)");
        Ok(())
    }

    /// Process line-delimited JSON-RPC from `reader`, writing responses to
    /// `writer`. Returns once input is exhausted and every in-flight request
    /// has been answered.
    pub async fn serve<R, W>(&self, reader: R, writer: &mut W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let (sender, receiver) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::try_join!(self.read_requests(reader, sender), write_responses(receiver, writer))?;
        Ok(())
    }

    async fn read_requests<R>(
        &self,
        reader: R,
        sender: mpsc::Sender<JsonRpcResponse>,
    ) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            debug!(line = %line, "Received input line");

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    warn!(error = %e, line = %line, "Failed to parse JSON-RPC request");

                    let error = McpError::ParseError(e.to_string()).to_json_rpc_error();
                    if sender.send(JsonRpcResponse::failure(None, error)).await.is_err() {
                        break;
                    }
                    continue;
                }
            };

            let handler = Arc::clone(&self.handler);
            let sender = sender.clone();
            tokio::spawn(async move {
                if let Some(response) = handler.handle_request(request).await {
                    if sender.send(response).await.is_err() {
                        warn!("Response writer closed, dropping response");
                    }
                }
            });
        }

        Ok(())
    }
}

/// Drain responses until every sender (reader and request tasks) is gone
async fn write_responses<W>(
    mut receiver: mpsc::Receiver<JsonRpcResponse>,
    writer: &mut W,
) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    while let Some(response) = receiver.recv().await {
        write_response(writer, &response).await?;
    }
    Ok(())
}

async fn write_response<W>(writer: &mut W, response: &JsonRpcResponse) -> anyhow::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let json = serde_json::to_string(response)?;
    debug!(response = %json, "Writing response");

    writer.write_all(json.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;

    Ok(())
}
