use actix::ActorContext;
use actix_web_actors::ws;
use serde_json::Value;

use crate::server::anti_spam::AntiSpamState;
use crate::server::ws_error::ws_error_message;

/// Shared anti-spam plumbing for WebSocket actors.
pub trait WsActorUtils {
    fn anti_spam(&mut self) -> &mut AntiSpamState;
    fn session_label(&self) -> String;

    /// Send a ban notice, close the socket and stop the actor.
    fn send_ban_and_close<A>(&mut self, ctx: &mut ws::WebsocketContext<A>)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let context = serde_json::json!({
            "session": self.session_label(),
            "ban_remaining_secs": self.anti_spam().ban_remaining_secs(),
        });
        ctx.text(ws_error_message(
            "BANNED",
            "You have been banned for flooding. Please try again later.",
            Some(context),
        ));
        ctx.close(Some(ws::CloseReason {
            code: ws::CloseCode::Policy,
            description: Some("Banned for spam".into()),
        }));
        ctx.stop();
    }

    /// Send an error frame unless it repeats the previous one; ban on error floods.
    fn send_error_and_maybe_ban<A>(&mut self, ctx: &mut ws::WebsocketContext<A>, frame: String, code: &str)
    where
        A: actix::Actor<Context = ws::WebsocketContext<A>>,
    {
        let label = self.session_label();
        if !self.anti_spam().should_send_error(code, &label) {
            return;
        }
        if self.anti_spam().record_error(&label) {
            self.send_ban_and_close(ctx);
            return;
        }
        ctx.text(frame);
    }

    /// Context object attached to error frames.
    fn error_context(&self) -> Option<Value> {
        Some(serde_json::json!({ "session": self.session_label() }))
    }
}
