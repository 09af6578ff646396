//! Streaming response handling: chunk extraction and accumulation.
//!
//! A streaming chat call yields a sequence of partial [`ChatResponse`]
//! events. Each event carrying at least one alternative contributes the first
//! alternative's message content as a text chunk; events with no alternatives
//! are skipped. The sequence ends with normal stream completion or the first
//! error, whichever comes first.

use futures::{future, Stream, StreamExt};
use std::io::Write as _;

use crate::proto::ChatResponse;
use crate::{Error, Result};

/// Caller-supplied chunk handler for [`accumulate`].
pub type ChunkHandler<'a> = &'a mut dyn FnMut(&str);

fn first_chunk(response: ChatResponse) -> Option<String> {
    response
        .alternatives
        .into_iter()
        .next()
        .map(|alt| alt.message.map(|m| m.content).unwrap_or_default())
}

/// Adapt a server stream of chat events into a stream of text chunks.
///
/// The returned stream is fused on error: the first failed event is yielded
/// as an `Err` and nothing follows it. Dropping the stream cancels the
/// underlying call.
pub fn chunks<S>(events: S) -> impl Stream<Item = Result<String>>
where
    S: Stream<Item = std::result::Result<ChatResponse, tonic::Status>>,
{
    events
        .scan(false, |failed, event| {
            if *failed {
                return future::ready(None);
            }
            let item = match event {
                Ok(response) => first_chunk(response).map(Ok),
                Err(status) => {
                    *failed = true;
                    Some(Err(Error::from(status)))
                }
            };
            future::ready(Some(item))
        })
        .filter_map(future::ready)
}

/// Drive a streaming call to completion, concatenating every chunk.
///
/// Each chunk goes to `on_chunk` when one is supplied, otherwise straight to
/// stdout together with a completion marker at the end (and the error on
/// stderr on failure). The accumulated string is returned only on clean
/// stream completion; an error event rejects the call and discards the
/// partial text.
pub async fn accumulate<S>(events: S, mut on_chunk: Option<ChunkHandler<'_>>) -> Result<String>
where
    S: Stream<Item = std::result::Result<ChatResponse, tonic::Status>>,
{
    futures::pin_mut!(events);
    let mut full = String::new();

    while let Some(event) = events.next().await {
        match event {
            Ok(response) => {
                let Some(chunk) = first_chunk(response) else {
                    continue;
                };
                match &mut on_chunk {
                    Some(handler) => handler(&chunk),
                    None => {
                        print!("{chunk}");
                        std::io::stdout().flush().ok();
                    }
                }
                full.push_str(&chunk);
            }
            Err(status) => {
                if on_chunk.is_none() {
                    eprintln!("\nstream error: {status}");
                }
                return Err(status.into());
            }
        }
    }

    if on_chunk.is_none() {
        println!("\n--- stream complete ---");
    }
    Ok(full)
}
