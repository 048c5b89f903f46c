use std::sync::mpsc::Sender;

/// Notification emitted by a session, as a plain value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Overall completion percentage changed.
    Progress(i32),
    /// An answer was evaluated. `explanation` is empty for correct answers.
    Answered { correct: bool, explanation: String },
}

/// Sink for session notifications (progress, answer evaluations).
///
/// Callbacks run synchronously on the caller's stack, in the order the
/// session emits them. There is no queueing or delivery retry.
pub trait SessionObserver {
    /// Fired whenever overall progress changes. `percent` is the truncated
    /// completion percentage; sessions with no questions never fire this.
    fn progress_changed(&mut self, percent: i32);

    /// Fired once per answer evaluation, before the matching progress
    /// notification.
    fn answer_evaluated(&mut self, correct: bool, explanation: &str);
}

/// Default observer that discards every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl SessionObserver for NullObserver {
    fn progress_changed(&mut self, _percent: i32) {}

    fn answer_evaluated(&mut self, _correct: bool, _explanation: &str) {}
}

/// Observer that forwards each notification over an mpsc channel.
///
/// Useful in tests and for hosts that consume session events on their own
/// terms; the send itself is still synchronous.
pub struct ChannelObserver {
    tx: Sender<SessionEvent>,
}

impl ChannelObserver {
    pub fn new(tx: Sender<SessionEvent>) -> Self {
        Self { tx }
    }
}

impl SessionObserver for ChannelObserver {
    fn progress_changed(&mut self, percent: i32) {
        let _ = self.tx.send(SessionEvent::Progress(percent));
    }

    fn answer_evaluated(&mut self, correct: bool, explanation: &str) {
        let _ = self.tx.send(SessionEvent::Answered {
            correct,
            explanation: explanation.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn null_observer_accepts_everything() {
        let mut obs = NullObserver;
        obs.progress_changed(50);
        obs.answer_evaluated(false, "because");
    }

    #[test]
    fn channel_observer_forwards_in_order() {
        let (tx, rx) = mpsc::channel();
        let mut obs = ChannelObserver::new(tx);

        obs.answer_evaluated(true, "");
        obs.progress_changed(100);

        let events: Vec<SessionEvent> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                SessionEvent::Answered {
                    correct: true,
                    explanation: String::new()
                },
                SessionEvent::Progress(100),
            ]
        );
    }

    #[test]
    fn channel_observer_survives_dropped_receiver() {
        let (tx, rx) = mpsc::channel();
        let mut obs = ChannelObserver::new(tx);
        drop(rx);

        // Send errors are swallowed; the session must not care.
        obs.progress_changed(10);
    }
}
