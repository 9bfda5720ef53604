use axum::{
    extract::ws::{Message, WebSocket, WebSocketUpgrade},
    extract::State,
    response::IntoResponse,
    routing::get,
    Router,
};
use qix_core::GameConfig;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

mod session;
use session::{format_error, Session};

// Application State
struct AppState {
    config: GameConfig,
}

fn load_config() -> GameConfig {
    let Ok(path) = std::env::var("QIX_CONFIG") else {
        return GameConfig::default();
    };
    match std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|json| GameConfig::from_json(&json).map_err(|e| e.to_string()))
    {
        Ok(config) => {
            info!("loaded config from {}", path);
            config
        }
        Err(e) => {
            warn!("ignoring config {}: {}", path, e);
            GameConfig::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let shared_state = Arc::new(AppState {
        config: load_config(),
    });

    // build our application with a route
    let app = Router::new()
        .route("/", get(root))
        .route("/ws", get(ws_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn root() -> String {
    format!("Hello from QIX Backend {}!", qix_core::version())
}

async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: Arc<AppState>) {
    let mut session = match Session::new(state.config.clone()) {
        Ok(session) => session,
        Err(e) => {
            warn!("cannot start session: {}", e);
            let error_msg = format_error("GEOMETRY_ERROR", &e.to_string(), "error");
            let _ = socket.send(Message::Text(error_msg)).await;
            return;
        }
    };
    info!("Client connected, session {}", session.id);

    if socket.send(Message::Text(session.board_update())).await.is_err() {
        return;
    }

    while let Some(msg) = socket.recv().await {
        let msg = if let Ok(msg) = msg {
            msg
        } else {
            return;
        };

        if let Message::Text(text) = msg {
            tracing::debug!("[{}] received: {}", session.id, text);
            for reply in session.handle(&text) {
                if socket.send(Message::Text(reply)).await.is_err() {
                    return;
                }
            }
        }
    }

    info!("session {} closed", session.id);
}
