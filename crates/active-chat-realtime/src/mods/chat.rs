// active-chat-core/active-chat-realtime
//
// Copyright: 2025, Active Chat Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use crate::client::ModuleContext;
use crate::event::Event as ClientEvent;
use crate::frame::{ChannelId, Frame, FramePayload, MessagePayload, TypingPayload};
use crate::mods::Module;

#[derive(Default, Clone)]
pub struct Chat {
    ctx: ModuleContext,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Message {
        channel: ChannelId,
        message: MessagePayload,
    },
    ComposeStateChanged {
        channel: ChannelId,
        signal: TypingPayload,
    },
}

impl Module for Chat {
    fn register_with(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn handle_frame(&self, frame: &Frame) -> Result<()> {
        match &frame.payload {
            FramePayload::Message(message) => {
                self.ctx.schedule_event(ClientEvent::Chat(Event::Message {
                    channel: frame.channel.clone(),
                    message: message.clone(),
                }));
            }
            FramePayload::Typing(signal) => {
                self.ctx
                    .schedule_event(ClientEvent::Chat(Event::ComposeStateChanged {
                        channel: frame.channel.clone(),
                        signal: signal.clone(),
                    }));
            }
        }
        Ok(())
    }
}

impl Chat {
    pub fn send_message(&self, channel: ChannelId, message: MessagePayload) -> Result<()> {
        self.ctx.send_frame(Frame {
            channel,
            payload: FramePayload::Message(message),
        })
    }

    pub fn send_compose_state(&self, channel: ChannelId, signal: TypingPayload) -> Result<()> {
        self.ctx.send_frame(Frame {
            channel,
            payload: FramePayload::Typing(signal),
        })
    }
}
