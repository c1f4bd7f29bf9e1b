//! Scripted chat companion.
//!
//! Replies are picked from a fixed list by a seeded generator and delivered
//! after a fixed delay. The host event loop owns the clock: it passes `now`
//! to [`ChatSession::send`] and calls [`ChatSession::poll`] on each tick.

use crate::rng::SimpleRng;
use serde::Serialize;
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

// Use web_time for WASM compatibility
#[cfg(not(target_arch = "wasm32"))]
use std::time::Instant;
#[cfg(target_arch = "wasm32")]
use web_time::Instant;

/// Delay between a user message and the companion's reply.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// Emoji shown next to companion messages.
pub const BUDDY_EMOJI: &str = "🤖";

pub const GREETING: &str = "Hi there! I'm your MindMate buddy. I'm here to listen, support, and chat with you about anything on your mind. How are you feeling today? 🌸";

pub const RESPONSES: [&str; 7] = [
    "That sounds really meaningful. Tell me more about how that makes you feel. ✨",
    "I hear you, and I want you to know that your feelings are completely valid. 💜",
    "It takes courage to share that. Thank you for trusting me with your thoughts. 🌿",
    "That's a lot to process. Would you like to talk about what's been most challenging? 🌸",
    "I'm proud of you for reaching out and taking care of your mental health today. 🌟",
    "Sometimes it helps to take a deep breath together. You're doing great! 🧘‍♀️",
    "Your feelings matter, and so do you. What would help you feel supported right now? 💫",
];

/// Canned prompts offered as one-tap replies: (text, emoji).
pub const QUICK_REPLIES: [(&str, &str); 4] = [
    ("I'm feeling anxious", "😰"),
    ("I need encouragement", "💪"),
    ("I'm grateful today", "🙏"),
    ("Tell me something positive", "✨"),
];

/// Who wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sender {
    User,
    Buddy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub sender: Sender,
    pub emoji: Option<&'static str>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::User,
            emoji: None,
        }
    }

    pub fn buddy(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender: Sender::Buddy,
            emoji: Some(BUDDY_EMOJI),
        }
    }

    pub fn is_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Picks replies from [`RESPONSES`]. Equal seeds yield equal reply sequences.
#[derive(Debug, Clone)]
pub struct ScriptedResponder {
    rng: SimpleRng,
}

impl ScriptedResponder {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: SimpleRng::from_entropy(),
        }
    }

    pub fn next_reply(&mut self) -> &'static str {
        self.rng.choose(&RESPONSES).copied().unwrap_or(RESPONSES[0])
    }
}

/// Chat screen state: transcript, draft, and the pending reply timers.
#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    /// Text currently typed into the input box.
    pub draft: String,
    /// Deadlines of pending replies, one per user message, oldest first.
    replies_due: VecDeque<Instant>,
    delay: Duration,
    responder: ScriptedResponder,
}

impl ChatSession {
    pub fn new(responder: ScriptedResponder) -> Self {
        Self {
            messages: vec![ChatMessage::buddy(GREETING)],
            draft: String::new(),
            replies_due: VecDeque::new(),
            delay: REPLY_DELAY,
            responder,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether the companion is "typing" a reply.
    pub fn is_typing(&self) -> bool {
        !self.replies_due.is_empty()
    }

    /// Number of replies still to be delivered.
    pub fn pending_replies(&self) -> usize {
        self.replies_due.len()
    }

    /// Send `text` as the user. Blank text is ignored and returns false.
    ///
    /// Every message gets its own reply, due `delay` after it was sent.
    pub fn send(&mut self, text: &str, now: Instant) -> bool {
        if text.trim().is_empty() {
            return false;
        }

        self.messages.push(ChatMessage::user(text));
        self.replies_due.push_back(now + self.delay);
        log::debug!("Reply scheduled in {:?}", self.delay);
        true
    }

    /// Send the current draft and clear it.
    pub fn send_draft(&mut self, now: Instant) -> bool {
        let draft = std::mem::take(&mut self.draft);
        let sent = self.send(&draft, now);
        if !sent {
            self.draft = draft;
        }
        sent
    }

    /// Send one of the [`QUICK_REPLIES`] by index.
    pub fn send_quick_reply(&mut self, index: usize, now: Instant) -> bool {
        match QUICK_REPLIES.get(index) {
            Some((text, _)) => self.send(text, now),
            None => false,
        }
    }

    /// Deliver every reply that is due. Returns the new messages, which is
    /// empty when nothing was due.
    pub fn poll(&mut self, now: Instant) -> &[ChatMessage] {
        let start = self.messages.len();
        while self.replies_due.front().is_some_and(|due| *due <= now) {
            self.replies_due.pop_front();
            self.messages
                .push(ChatMessage::buddy(self.responder.next_reply()));
        }
        &self.messages[start..]
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(ScriptedResponder::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let chat = ChatSession::new(ScriptedResponder::new(1));
        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].text, GREETING);
        assert!(!chat.messages()[0].is_user());
    }

    #[test]
    fn test_blank_message_ignored() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        assert!(!chat.send("   ", Instant::now()));
        assert_eq!(chat.messages().len(), 1);
        assert!(!chat.is_typing());
    }

    #[test]
    fn test_reply_after_delay() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        let start = Instant::now();

        assert!(chat.send("Hello", start));
        assert!(chat.is_typing());
        assert!(chat.poll(start + Duration::from_millis(1000)).is_empty());

        let replies = chat.poll(start + REPLY_DELAY).to_vec();
        assert_eq!(replies.len(), 1);
        assert!(RESPONSES.contains(&replies[0].text.as_str()));
        assert_eq!(replies[0].emoji, Some(BUDDY_EMOJI));
        assert!(!chat.is_typing());
        assert_eq!(chat.messages().len(), 3);

        assert!(chat.poll(start + REPLY_DELAY * 2).is_empty());
    }

    #[test]
    fn test_every_message_gets_a_reply() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        let start = Instant::now();

        chat.send("One", start);
        chat.send("Two", start + Duration::from_millis(1000));
        assert_eq!(chat.pending_replies(), 2);

        assert_eq!(chat.poll(start + REPLY_DELAY).len(), 1);
        assert!(chat.is_typing());
        assert_eq!(chat.poll(start + Duration::from_millis(2500)).len(), 1);
        assert!(!chat.is_typing());
        assert_eq!(chat.messages().len(), 5);
    }

    #[test]
    fn test_late_poll_delivers_all_due_replies() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        let start = Instant::now();

        chat.send("One", start);
        chat.send("Two", start + Duration::from_millis(200));

        assert_eq!(chat.poll(start + Duration::from_secs(5)).len(), 2);
        assert!(chat.poll(start + Duration::from_secs(5)).is_empty());

        let replies = chat.messages().iter().filter(|m| !m.is_user()).count();
        assert_eq!(replies, 3);
    }

    #[test]
    fn test_seeded_responder_is_deterministic() {
        let mut a = ScriptedResponder::new(99);
        let mut b = ScriptedResponder::new(99);
        for _ in 0..10 {
            assert_eq!(a.next_reply(), b.next_reply());
        }
    }

    #[test]
    fn test_send_draft() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        chat.draft = "  ".to_string();
        assert!(!chat.send_draft(Instant::now()));
        assert_eq!(chat.draft, "  ");

        chat.draft = "Feeling okay".to_string();
        assert!(chat.send_draft(Instant::now()));
        assert!(chat.draft.is_empty());
        assert_eq!(chat.messages()[1].text, "Feeling okay");
    }

    #[test]
    fn test_quick_reply() {
        let mut chat = ChatSession::new(ScriptedResponder::new(1));
        assert!(chat.send_quick_reply(0, Instant::now()));
        assert_eq!(chat.messages()[1].text, "I'm feeling anxious");
        assert!(!chat.send_quick_reply(9, Instant::now()));
    }
}
