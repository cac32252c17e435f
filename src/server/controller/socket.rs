//! WebSocket endpoint for live band notifications.
//!
//! A connection starts with no rooms. The client sends `join`/`leave` frames naming a
//! band, and the server forwards every notification of the joined bands until the
//! client disconnects or the notification hub shuts down.

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{
    stream::{SplitSink, StreamExt},
    SinkExt,
};
use tokio::sync::broadcast::error::RecvError;
use tower_sessions::Session;

use crate::{
    model::notification::{SocketClientMessage, SocketServerMessage},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::User,
        service::notification::BandRooms,
        state::AppState,
    },
};

/// Upgrade to a notification socket for the logged in user.
pub async fn connect(
    State(state): State<AppState>,
    session: Session,
    ws: WebSocketUpgrade,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok(ws.on_upgrade(move |socket| handle_socket(socket, state, session, user)))
}

async fn handle_socket(socket: WebSocket, state: AppState, session: Session, user: User) {
    let user_id = user.id;
    let guard = AuthGuard::new(&state.db, &session);
    let (mut sender, mut receiver) = socket.split();
    let mut notifications = state.hub.subscribe();
    let mut rooms = BandRooms::new(user_id);

    tracing::debug!(user_id, "Notification socket opened");

    loop {
        tokio::select! {
            frame = receiver.next() => {
                let text = match frame {
                    Some(Ok(Message::Text(text))) => text,
                    Some(Ok(Message::Close(_))) | None => break,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => {
                        tracing::debug!(user_id, error = %e, "Notification socket receive error");
                        break;
                    }
                };

                let reply = handle_client_message(&guard, &user, &mut rooms, text.as_str()).await;

                if send_message(&mut sender, &reply).await.is_err() {
                    break;
                }
            }
            notification = notifications.recv() => {
                match notification {
                    Ok(notification) => {
                        if !rooms.apply(&notification) {
                            continue;
                        }

                        let message = SocketServerMessage::from(notification.as_ref().clone());
                        if send_message(&mut sender, &message).await.is_err() {
                            break;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        tracing::warn!(user_id, skipped, "Notification socket lagged behind");
                    }
                    Err(RecvError::Closed) => break,
                }
            }
        }
    }

    tracing::debug!(user_id, "Notification socket closed");
}

/// Applies a `join` or `leave` frame to the socket's rooms and builds the reply.
async fn handle_client_message(
    guard: &AuthGuard<'_>,
    user: &User,
    rooms: &mut BandRooms,
    text: &str,
) -> SocketServerMessage {
    let message = match serde_json::from_str::<SocketClientMessage>(text) {
        Ok(message) => message,
        Err(_) => {
            return SocketServerMessage::Error {
                message: "Invalid message".to_string(),
            }
        }
    };

    match message {
        SocketClientMessage::Join { band_id } => {
            let access = guard
                .check(user, &[Permission::BandMember(band_id)])
                .await;

            match access {
                Ok(()) => {
                    rooms.join(band_id);
                    SocketServerMessage::Joined { band_id }
                }
                Err(AppError::AuthErr(_)) => SocketServerMessage::Error {
                    message: "Not a member of this band".to_string(),
                },
                Err(e) => {
                    tracing::error!(user_id = user.id, band_id, error = %e, "Failed to join band room");
                    SocketServerMessage::Error {
                        message: "Internal server error".to_string(),
                    }
                }
            }
        }
        SocketClientMessage::Leave { band_id } => {
            rooms.leave(band_id);
            SocketServerMessage::Left { band_id }
        }
    }
}

async fn send_message(
    sender: &mut SplitSink<WebSocket, Message>,
    message: &SocketServerMessage,
) -> Result<(), axum::Error> {
    let json = serde_json::to_string(message).map_err(axum::Error::new)?;

    sender.send(Message::Text(json.into())).await
}
