use anyhow::{Context, Result};
use std::process::{Child, Command, Stdio};

use crate::config::PlayerConfig;
use crate::models::Recitation;

/// Something that can play an audio source in the background.
pub trait AudioOutput {
    fn play(&mut self, source: &str) -> Result<()>;
    fn stop(&mut self);
}

/// Plays audio by spawning an external program (mpv by default).
pub struct ExternalPlayer {
    command: String,
    args: Vec<String>,
    child: Option<Child>,
}

impl ExternalPlayer {
    pub fn new(config: &PlayerConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            child: None,
        }
    }
}

impl AudioOutput for ExternalPlayer {
    fn play(&mut self, source: &str) -> Result<()> {
        self.stop();
        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(source)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Starting player '{}'", self.command))?;
        log::debug!("Player started (pid {}) for {}", child.id(), source);
        self.child = Some(child);
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            let _ = child.kill();
            let _ = child.wait();
            log::debug!("Player stopped");
        }
    }
}

impl Drop for ExternalPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Playback {
    Playing(String),
    /// A source was configured but the player could not start.
    Unavailable,
    NoSource,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerModal {
    pub title: String,
    pub playback: Playback,
}

/// The recitation modal and the audio behind it.
pub struct Player {
    output: Box<dyn AudioOutput>,
    modal: Option<PlayerModal>,
}

impl Player {
    pub fn new(output: Box<dyn AudioOutput>) -> Self {
        Self {
            output,
            modal: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal(&self) -> Option<&PlayerModal> {
        self.modal.as_ref()
    }

    /// Open the modal for `recitation`, starting playback when it has an
    /// audio source. Playback failures leave the modal open.
    pub fn open(&mut self, recitation: &Recitation) {
        let title = match recitation.reciter.trim() {
            "" => "Player".to_string(),
            name => name.to_string(),
        };

        self.output.stop();
        let playback = match recitation.audio_source() {
            Some(src) => match self.output.play(src) {
                Ok(()) => Playback::Playing(src.to_string()),
                Err(e) => {
                    log::warn!("Could not play {}: {:#}", src, e);
                    Playback::Unavailable
                }
            },
            None => Playback::NoSource,
        };

        self.modal = Some(PlayerModal { title, playback });
    }

    pub fn close(&mut self) {
        if self.modal.take().is_some() {
            self.output.stop();
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records calls instead of playing anything.
    #[derive(Default, Clone)]
    pub(crate) struct FakeOutput {
        pub calls: Rc<RefCell<Vec<String>>>,
        pub fail: bool,
    }

    impl AudioOutput for FakeOutput {
        fn play(&mut self, source: &str) -> Result<()> {
            self.calls.borrow_mut().push(format!("play {}", source));
            if self.fail {
                anyhow::bail!("no player installed");
            }
            Ok(())
        }

        fn stop(&mut self) {
            self.calls.borrow_mut().push("stop".to_string());
        }
    }

    fn recitation(reciter: &str, audio: &str) -> Recitation {
        Recitation {
            reciter: reciter.to_string(),
            audio: audio.to_string(),
        }
    }

    #[test]
    fn test_open_with_source_plays() {
        let fake = FakeOutput::default();
        let calls = fake.calls.clone();
        let mut player = Player::new(Box::new(fake));

        player.open(&recitation("Saad Al-Ghamdi", "/audio/fatiha.mp3"));
        let modal = player.modal().unwrap();
        assert_eq!(modal.title, "Saad Al-Ghamdi");
        assert_eq!(modal.playback, Playback::Playing("/audio/fatiha.mp3".to_string()));
        assert_eq!(*calls.borrow(), vec!["stop", "play /audio/fatiha.mp3"]);

        player.close();
        assert!(!player.is_open());
        assert_eq!(calls.borrow().last().unwrap(), "stop");
    }

    #[test]
    fn test_open_without_source() {
        let fake = FakeOutput::default();
        let calls = fake.calls.clone();
        let mut player = Player::new(Box::new(fake));

        player.open(&recitation("  ", "   "));
        let modal = player.modal().unwrap();
        assert_eq!(modal.title, "Player");
        assert_eq!(modal.playback, Playback::NoSource);
        assert!(!calls.borrow().iter().any(|c| c.starts_with("play")));
    }

    #[test]
    fn test_playback_failure_keeps_modal_open() {
        let fake = FakeOutput {
            fail: true,
            ..Default::default()
        };
        let mut player = Player::new(Box::new(fake));
        player.open(&recitation("Mishary Rashid Alafasy", "https://example.org/a.mp3"));
        assert!(player.is_open());
        assert_eq!(player.modal().unwrap().playback, Playback::Unavailable);
    }

    #[test]
    fn test_close_when_closed_is_noop() {
        let fake = FakeOutput::default();
        let calls = fake.calls.clone();
        let mut player = Player::new(Box::new(fake));
        player.close();
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn test_external_player_missing_binary_errors() {
        let mut out = ExternalPlayer::new(&PlayerConfig {
            command: "mihrab-no-such-player".to_string(),
            args: vec![],
        });
        assert!(out.play("x.mp3").is_err());
        out.stop();
    }
}
