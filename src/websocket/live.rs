use crate::websocket::hub::ReportHub;
use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    response::IntoResponse,
    Extension,
};
use futures_util::{SinkExt, StreamExt};

/// Live update subscription. Viewers connect and then only listen; every
/// report creation or status change is pushed as a JSON text frame.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Extension(hub): Extension<ReportHub>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, hub))
}

async fn handle_socket(socket: WebSocket, hub: ReportHub) {
    let (mut ws_sender, mut ws_receiver) = socket.split();
    let (conn_id, mut rx) = hub.subscribe();

    tracing::info!("Viewer connected (connection {})", conn_id);

    let send_task = tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if ws_sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    });

    let recv_task = tokio::spawn(async move {
        // Subscribers send nothing after connecting; drain until close.
        while let Some(Ok(msg)) = ws_receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }

    hub.unsubscribe(conn_id);
    tracing::info!("Viewer disconnected (connection {})", conn_id);
}
