use actix::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::events::GameEvent;
use crate::game::state::SessionSnapshot;
use crate::game::types::Direction;

/// Client -> server frames on the game socket.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Start,
    Restart,
    KeyDown(Direction),
    KeyUp(Direction),
    Ping,
}

/// Session -> presentation notification. Serialized as the wrapped event.
#[derive(Message, Clone, Debug, PartialEq, Eq)]
#[rtype(result = "()")]
pub struct SessionNotification(pub GameEvent);

#[derive(Message)]
#[rtype(result = "()")]
pub struct Start;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Restart;

#[derive(Message)]
#[rtype(result = "()")]
pub struct KeyDown(pub Direction);

#[derive(Message)]
#[rtype(result = "()")]
pub struct KeyUp(pub Direction);

#[derive(Message)]
#[rtype(result = "SessionSnapshot")]
pub struct GetSnapshot;

/// Stop the session actor and every timer it owns.
#[derive(Message)]
#[rtype(result = "()")]
pub struct Shutdown;
