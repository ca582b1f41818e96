use crate::prelude::{eprintln, *};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

pub async fn run_stdio(global: crate::Global) -> Result<()> {
    log::info!("redditmcp {} serving on stdio", env!("CARGO_PKG_VERSION"));

    serve_lines(BufReader::new(tokio::io::stdin()), tokio::io::stdout(), &global).await
}

/// Answer one JSON-RPC message per input line until EOF.
///
/// Blank lines and notifications produce no output; every other line gets
/// exactly one response line.
async fn serve_lines<R, W>(input: R, mut output: W, global: &crate::Global) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    while let Some(line) = lines.next_line().await? {
        let message = line.trim();
        if message.is_empty() {
            continue;
        }

        if global.verbose {
            eprintln!("<- {message}");
        }

        let Some(response) = super::handle_request(message, global).await else {
            continue;
        };

        let mut encoded = serde_json::to_vec(&response)?;
        if global.verbose {
            eprintln!("-> {}", String::from_utf8_lossy(&encoded));
        }
        encoded.push(b'\n');

        output.write_all(&encoded).await?;
        output.flush().await?;
    }

    Ok(())
}
