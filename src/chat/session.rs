//! Transcript state for the concierge widget. Pure append-only turn log plus
//! the loading guard; the network side lives in `chat::gemini`.

/// Greeting shown before any user input.
pub const GREETING: &str =
    "您好，歡迎來到品森居。我是您的專屬顧問，請問有什麼我可以為您介紹的嗎？";

/// Shown when no API key was configured at build time.
pub const MAINTENANCE_REPLY: &str = "目前系統維護中，請稍後再試。 (Missing API Key)";

/// Shown when the service answered but returned no usable text.
pub const INTERRUPTED_REPLY: &str = "連線中斷，請重新整理。";

/// Shown for any transport or service failure.
pub const UNAVAILABLE_REPLY: &str = "很抱歉，目前無法回應您的請求，請直接聯繫銷售中心。";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Clone, Debug, PartialEq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
    pub is_error: bool,
}

/// How a send attempt ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SendOutcome {
    Reply(String),
    MissingCredential,
    Failed,
}

/// Append-only conversation record. Turns are never reordered or truncated
/// within a session; every send appends exactly one user turn and, once the
/// attempt finishes, exactly one assistant turn.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcript {
    turns: Vec<Turn>,
    loading: bool,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            turns: vec![Turn {
                speaker: Speaker::Assistant,
                text: GREETING.to_string(),
                is_error: false,
            }],
            loading: false,
        }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Starts a send. Whitespace-only input is ignored, as is any call made
    /// while a previous send is still in flight (the disabled send button is
    /// the only other guard against overlap). On success the user turn is
    /// appended optimistically and the trimmed text to transmit is returned.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        let text = input.trim();
        if text.is_empty() || self.loading {
            return None;
        }
        self.turns.push(Turn {
            speaker: Speaker::User,
            text: text.to_string(),
            is_error: false,
        });
        self.loading = true;
        Some(text.to_string())
    }

    /// Finishes the in-flight send. Every outcome appends one assistant turn;
    /// failures become fixed fallback messages rather than surfaced errors,
    /// and the loading flag drops unconditionally.
    pub fn complete_send(&mut self, outcome: SendOutcome) {
        let (text, is_error) = match outcome {
            SendOutcome::Reply(reply) if reply.is_empty() => {
                (INTERRUPTED_REPLY.to_string(), false)
            }
            SendOutcome::Reply(reply) => (reply, false),
            SendOutcome::MissingCredential => (MAINTENANCE_REPLY.to_string(), false),
            SendOutcome::Failed => (UNAVAILABLE_REPLY.to_string(), true),
        };
        self.turns.push(Turn {
            speaker: Speaker::Assistant,
            text,
            is_error,
        });
        self.loading = false;
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_greeting_only() {
        let transcript = Transcript::new();
        assert_eq!(transcript.turns().len(), 1);
        assert_eq!(transcript.turns()[0].speaker, Speaker::Assistant);
        assert_eq!(transcript.turns()[0].text, GREETING);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn blank_input_appends_nothing() {
        let mut transcript = Transcript::new();
        assert_eq!(transcript.begin_send(""), None);
        assert_eq!(transcript.begin_send("   \n\t"), None);
        assert_eq!(transcript.turns().len(), 1);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn input_is_trimmed_and_appended_optimistically() {
        let mut transcript = Transcript::new();
        let sent = transcript.begin_send("  有哪些房型？  ");
        assert_eq!(sent.as_deref(), Some("有哪些房型？"));
        assert_eq!(transcript.turns().len(), 2);
        assert_eq!(transcript.turns()[1].speaker, Speaker::User);
        assert_eq!(transcript.turns()[1].text, "有哪些房型？");
        assert!(transcript.is_loading());
    }

    #[test]
    fn a_second_send_while_loading_is_rejected() {
        let mut transcript = Transcript::new();
        assert!(transcript.begin_send("first").is_some());
        assert_eq!(transcript.begin_send("second"), None);
        assert_eq!(transcript.turns().len(), 2);
    }

    #[test]
    fn missing_credential_yields_the_maintenance_reply() {
        let mut transcript = Transcript::new();
        transcript.begin_send("hello").unwrap();
        transcript.complete_send(SendOutcome::MissingCredential);
        let last = transcript.turns().last().unwrap();
        assert_eq!(last.speaker, Speaker::Assistant);
        assert_eq!(last.text, MAINTENANCE_REPLY);
        assert!(!last.is_error);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn transport_failure_yields_the_sales_fallback_and_clears_loading() {
        let mut transcript = Transcript::new();
        transcript.begin_send("hello").unwrap();
        transcript.complete_send(SendOutcome::Failed);
        let last = transcript.turns().last().unwrap();
        assert_eq!(last.text, UNAVAILABLE_REPLY);
        assert!(last.is_error);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn empty_reply_is_distinct_from_failure() {
        let mut transcript = Transcript::new();
        transcript.begin_send("hello").unwrap();
        transcript.complete_send(SendOutcome::Reply(String::new()));
        let last = transcript.turns().last().unwrap();
        assert_eq!(last.text, INTERRUPTED_REPLY);
        assert!(!last.is_error);
    }

    #[test]
    fn successful_reply_lands_after_the_user_turn() {
        let mut transcript = Transcript::new();
        transcript.begin_send("房價如何？").unwrap();
        transcript.complete_send(SendOutcome::Reply("歡迎預約賞屋了解詳情。".into()));
        let turns = transcript.turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[1].speaker, Speaker::User);
        assert_eq!(turns[1].text, "房價如何？");
        assert_eq!(turns[2].speaker, Speaker::Assistant);
        assert_eq!(turns[2].text, "歡迎預約賞屋了解詳情。");
    }

    #[test]
    fn consecutive_sends_interleave_strictly_and_keep_history() {
        let mut transcript = Transcript::new();
        transcript.begin_send("one").unwrap();
        transcript.complete_send(SendOutcome::Reply("answer one".into()));
        transcript.begin_send("two").unwrap();
        transcript.complete_send(SendOutcome::Reply("answer two".into()));

        let speakers: Vec<Speaker> = transcript.turns().iter().map(|t| t.speaker).collect();
        assert_eq!(
            speakers,
            vec![
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant,
                Speaker::User,
                Speaker::Assistant,
            ]
        );
        assert_eq!(transcript.turns()[0].text, GREETING);
        assert_eq!(transcript.turns()[1].text, "one");
        assert_eq!(transcript.turns()[2].text, "answer one");
    }
}
