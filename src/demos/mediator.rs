//! Mediator: chat users never talk to each other directly; the room relays a
//! message to every member except the sender.

use std::fmt::{self, Write};

use crate::capture::{DemoResult, Output};

/// Handle to a user registered with a mediator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(usize);

pub trait ChatMediator {
    fn add_user(&mut self, name: &str) -> UserId;
    fn send_message(&self, message: &str, sender: UserId, out: &mut Output) -> fmt::Result;
}

#[derive(Debug, Clone)]
pub struct ChatUser {
    id: UserId,
    name: String,
}

impl ChatUser {
    pub fn name(&self) -> &str {
        &self.name
    }

    fn receive(&self, message: &str, out: &mut Output) -> fmt::Result {
        writeln!(out, "{} receives: {}", self.name, message)
    }
}

#[derive(Debug, Default)]
pub struct ChatRoom {
    users: Vec<ChatUser>,
}

impl ChatRoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self, id: UserId) -> Option<&ChatUser> {
        self.users.get(id.0)
    }

    /// Announce and relay a message from `sender`.
    pub fn send(&self, sender: UserId, message: &str, out: &mut Output) -> fmt::Result {
        if let Some(user) = self.user(sender) {
            writeln!(out, "{} sends: {}", user.name, message)?;
        }
        self.send_message(message, sender, out)
    }
}

impl ChatMediator for ChatRoom {
    fn add_user(&mut self, name: &str) -> UserId {
        let id = UserId(self.users.len());
        self.users.push(ChatUser { id, name: name.to_string() });
        id
    }

    fn send_message(&self, message: &str, sender: UserId, out: &mut Output) -> fmt::Result {
        for user in self.users.iter().filter(|u| u.id != sender) {
            user.receive(message, out)?;
        }
        Ok(())
    }
}

pub fn run(out: &mut Output) -> DemoResult {
    let mut room = ChatRoom::new();
    let paulo = room.add_user("Paulo");
    room.add_user("Cesar");
    let italo = room.add_user("Italo");
    room.add_user("Diana");

    room.send(paulo, "Hello, everyone!", out)?;
    room.send(italo, "Hi, Paulo!", out)?;
    Ok(())
}
