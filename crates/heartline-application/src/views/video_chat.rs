//! Video chat page: a call stub without any media transport.

use serde::Serialize;

use heartline_core::{HeartlineError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CallState {
    Idle,
    Connecting,
    Connected,
    Ended,
}

#[derive(Debug, Clone)]
pub struct VideoChatView {
    state: CallState,
    peer: Option<String>,
    muted: bool,
    camera_on: bool,
}

impl Default for VideoChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoChatView {
    pub fn new() -> Self {
        Self {
            state: CallState::Idle,
            peer: None,
            muted: false,
            camera_on: true,
        }
    }

    pub fn state(&self) -> CallState {
        self.state
    }

    pub fn peer(&self) -> Option<&str> {
        self.peer.as_deref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_camera_on(&self) -> bool {
        self.camera_on
    }

    /// Dials `peer`. Allowed from `Idle` and `Ended`.
    pub fn call(&mut self, peer: &str) -> Result<CallState> {
        match self.state {
            CallState::Idle | CallState::Ended => {}
            _ => return Err(invalid("a call is already in progress")),
        }
        self.peer = Some(peer.to_string());
        self.muted = false;
        self.camera_on = true;
        self.transition(CallState::Connecting);
        Ok(self.state)
    }

    /// The other side picked up.
    pub fn connect(&mut self) -> Result<CallState> {
        if self.state != CallState::Connecting {
            return Err(invalid("no call is ringing"));
        }
        self.transition(CallState::Connected);
        Ok(self.state)
    }

    pub fn hang_up(&mut self) -> Result<CallState> {
        match self.state {
            CallState::Connecting | CallState::Connected => {
                self.transition(CallState::Ended);
                Ok(self.state)
            }
            _ => Err(invalid("no call to end")),
        }
    }

    pub fn toggle_mute(&mut self) -> Result<bool> {
        self.require_connected()?;
        self.muted = !self.muted;
        Ok(self.muted)
    }

    pub fn toggle_camera(&mut self) -> Result<bool> {
        self.require_connected()?;
        self.camera_on = !self.camera_on;
        Ok(self.camera_on)
    }

    fn require_connected(&self) -> Result<()> {
        if self.state == CallState::Connected {
            Ok(())
        } else {
            Err(invalid("only available during a call"))
        }
    }

    fn transition(&mut self, to: CallState) {
        tracing::debug!(from = ?self.state, to = ?to, peer = ?self.peer, "Call state changed");
        self.state = to;
    }
}

fn invalid(message: &str) -> HeartlineError {
    HeartlineError::validation("call", message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_lifecycle() {
        let mut view = VideoChatView::new();
        assert_eq!(view.call("Sarah").unwrap(), CallState::Connecting);
        assert!(view.call("Mike").is_err());
        assert_eq!(view.connect().unwrap(), CallState::Connected);
        assert_eq!(view.hang_up().unwrap(), CallState::Ended);
        assert_eq!(view.peer(), Some("Sarah"));

        assert_eq!(view.call("Mike").unwrap(), CallState::Connecting);
        assert_eq!(view.peer(), Some("Mike"));
    }

    #[test]
    fn test_toggles_only_while_connected() {
        let mut view = VideoChatView::new();
        assert!(view.toggle_mute().unwrap_err().is_validation());
        view.call("Emily").unwrap();
        assert!(view.toggle_camera().is_err());
        view.connect().unwrap();
        assert!(view.toggle_mute().unwrap());
        assert!(!view.toggle_camera().unwrap());
        view.hang_up().unwrap();
        assert!(view.toggle_mute().is_err());
    }

    #[test]
    fn test_invalid_transitions() {
        let mut view = VideoChatView::new();
        assert!(view.connect().is_err());
        assert!(view.hang_up().is_err());
        assert_eq!(view.state(), CallState::Idle);
    }
}
