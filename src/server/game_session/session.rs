//! WebSocket session handler for one browser client.
//!
//! This actor is the presentation bridge: it owns a `GameSession` actor, forwards
//! parsed client commands to it and serializes session notifications back to the
//! client. Closing the socket shuts the game session down with all its timers.
use actix::prelude::*;
use actix_web::{Error, HttpRequest, HttpResponse, web};
use actix_web_actors::ws;
use log::{info, warn};
use uuid::Uuid;

use crate::server::anti_spam::AntiSpamState;
use crate::server::game_session::messages::{
    ClientWsMessage, KeyDown, KeyUp, Restart, SessionNotification, Shutdown, Start,
};
use crate::server::game_session::server::GameSession;
use crate::server::ws_actor_utils::WsActorUtils;
use crate::server::ws_error::ws_invalid_command_message;

pub struct GameSessionActor {
    pub session_id: Uuid,
    session_addr: Option<Addr<GameSession>>,
    anti_spam: AntiSpamState,
}

impl GameSessionActor {
    pub fn new(session_id: Uuid) -> Self {
        Self {
            session_id,
            session_addr: None,
            anti_spam: AntiSpamState::new(),
        }
    }

    fn forward(&self, msg: ClientWsMessage, ctx: &mut ws::WebsocketContext<Self>) {
        let Some(addr) = &self.session_addr else {
            warn!("[WsSession] No game session for session_id={}", self.session_id);
            ctx.stop();
            return;
        };
        match msg {
            ClientWsMessage::Start => addr.do_send(Start),
            ClientWsMessage::Restart => addr.do_send(Restart),
            ClientWsMessage::KeyDown(direction) => addr.do_send(KeyDown(direction)),
            ClientWsMessage::KeyUp(direction) => addr.do_send(KeyUp(direction)),
            ClientWsMessage::Ping => {}
        }
    }
}

impl WsActorUtils for GameSessionActor {
    fn anti_spam(&mut self) -> &mut AntiSpamState {
        &mut self.anti_spam
    }

    fn session_label(&self) -> String {
        self.session_id.to_string()
    }
}

impl Actor for GameSessionActor {
    type Context = ws::WebsocketContext<Self>;

    /// Spawns the game session that reports back to this socket.
    fn started(&mut self, ctx: &mut Self::Context) {
        let presenter = ctx.address().recipient();
        self.session_addr = Some(GameSession::new(self.session_id, presenter).start());
        info!("[WsSession] Connected: session_id={}", self.session_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        if let Some(addr) = self.session_addr.take() {
            addr.do_send(Shutdown);
        }
        info!("[WsSession] Disconnected: session_id={}", self.session_id);
    }
}

impl StreamHandler<Result<ws::Message, ws::ProtocolError>> for GameSessionActor {
    fn handle(&mut self, msg: Result<ws::Message, ws::ProtocolError>, ctx: &mut Self::Context) {
        match msg {
            Ok(ws::Message::Text(text)) => {
                let label = self.session_label();
                if self.anti_spam.record_request(&label) {
                    self.send_ban_and_close(ctx);
                    return;
                }
                match serde_json::from_str::<ClientWsMessage>(&text) {
                    Ok(command) => {
                        self.anti_spam.reset_on_valid_action();
                        self.forward(command, ctx);
                    }
                    Err(e) => {
                        warn!("[WsSession] Invalid frame from session_id={}: {}", self.session_id, e);
                        let frame = ws_invalid_command_message(self.error_context());
                        self.send_error_and_maybe_ban(ctx, frame, "INVALID_COMMAND");
                    }
                }
            }
            Ok(ws::Message::Ping(msg)) => ctx.pong(&msg),
            Ok(ws::Message::Close(reason)) => {
                ctx.close(reason);
                ctx.stop();
            }
            Err(e) => {
                warn!("[WsSession] Protocol error for session_id={}: {}", self.session_id, e);
                ctx.stop();
            }
            _ => (),
        }
    }
}

impl Handler<SessionNotification> for GameSessionActor {
    type Result = ();

    /// Serializes a game notification and sends it to the client.
    fn handle(&mut self, msg: SessionNotification, ctx: &mut Self::Context) {
        match serde_json::to_string(&msg.0) {
            Ok(text) => ctx.text(text),
            Err(e) => {
                warn!("[WsSession] Failed to serialize notification: {}", e);
                ctx.close(Some(ws::CloseReason {
                    code: ws::CloseCode::Error,
                    description: Some("Internal server error".into()),
                }));
                ctx.stop();
            }
        }
    }
}

/// WebSocket endpoint for a game. Every connection plays its own session.
pub async fn ws_game(req: HttpRequest, stream: web::Payload) -> Result<HttpResponse, Error> {
    let session_id = Uuid::new_v4();
    ws::start(GameSessionActor::new(session_id), &req, stream)
}
