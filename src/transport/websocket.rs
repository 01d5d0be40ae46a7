//! WebSocket transport
//!
//! Responsibilities:
//! - Accept TCP/WebSocket connections
//! - Wrap each connection in a `Client` and register it with `Clients`
//! - Answer `ping` keepalives and apply tag registrations sent by the client
//!
//! Every connection gets a writer task that drains a channel into the socket
//! sink, so broadcasts never touch the socket directly.

use futures_util::stream::Stream;
use futures_util::{SinkExt, StreamExt};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};
use tokio::spawn;
use tokio::sync::mpsc;
use tokio_tungstenite::accept_async;
use tracing::{debug, error, info, warn};
use tungstenite::Error as WsError;
use tungstenite::protocol::Message as WsMessage;

use crate::client::{Client, WsConnection};
use crate::registry::Clients;
use crate::transport::message::{PING, PONG, registration_tags};
use crate::utils::RelayError;

/// Accepts connections forever, spawning one handler task per connection.
pub async fn start_websocket_server(
    listener: TcpListener,
    clients: Arc<Clients>,
) -> Result<(), RelayError> {
    info!("websocket server listening on ws://{}", listener.local_addr()?);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("Failed to accept connection: {e}");
                continue;
            }
        };
        spawn(handle_connection(stream, peer, clients.clone()));
    }
}

async fn handle_connection(stream: TcpStream, peer: SocketAddr, clients: Arc<Clients>) {
    let ws_stream = match accept_async(stream).await {
        Ok(ws) => ws,
        Err(e) => {
            warn!("WebSocket handshake error from {peer}: {e}");
            return;
        }
    };
    let (mut ws_sender, mut ws_receiver) = ws_stream.split();
    let (tx, mut rx) = mpsc::unbounded_channel::<WsMessage>();

    let writer = spawn(async move {
        while let Some(msg) = rx.recv().await {
            if let Err(e) = ws_sender.send(msg).await {
                debug!("Failed to write to {peer}: {e}");
                break;
            }
        }
    });

    let client = Arc::new(Client::new(WsConnection::new(tx)));
    if clients.add_client(client.clone()) {
        debug!("{} connected from {peer}", client.id());
    }

    receive_loop(&client, &mut ws_receiver).await;

    client.close();
    writer.abort();
    debug!("{} ({}) disconnected", client.id(), client.name());
}

/// Processes frames from one client until its connection ends.
///
/// Transport errors and close frames end the loop; a failure while handling a
/// single message is logged and the loop moves on to the next one.
pub async fn receive_loop<S>(client: &Client, incoming: &mut S)
where
    S: Stream<Item = Result<WsMessage, WsError>> + Unpin,
{
    while client.is_active() {
        let msg = match incoming.next().await {
            Some(Ok(msg)) => msg,
            Some(Err(WsError::ConnectionClosed | WsError::AlreadyClosed)) | None => break,
            Some(Err(e)) => {
                warn!("Connection error for {}: {e}", client.id());
                break;
            }
        };

        let text = match msg {
            WsMessage::Text(text) => text.as_str().to_owned(),
            WsMessage::Binary(data) => match String::from_utf8(data.to_vec()) {
                Ok(text) => text,
                Err(_) => {
                    debug!("Ignoring non-utf8 binary frame from {}", client.id());
                    continue;
                }
            },
            WsMessage::Close(_) => break,
            // ping/pong control frames are answered by tungstenite
            _ => continue,
        };

        if let Err(e) = process_message(client, &text).await {
            error!(
                "Failed to process message from {}: {e} | {}",
                client.name(),
                text.chars().take(100).collect::<String>()
            );
        }
    }
}

/// Handles one text payload received from `client`.
pub async fn process_message(client: &Client, text: &str) -> Result<(), RelayError> {
    if text == PING {
        debug!("ping from {}", client.name());
        client.send_text(PONG).await?;
    } else {
        info!("received: {text}");
    }

    if let Some(tags) = registration_tags(text)? {
        client.init_tags(tags);
    }
    Ok(())
}
