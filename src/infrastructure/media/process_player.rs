//! Plays pronunciation clips through an external audio player process.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::{Child, Command};
use tracing::{debug, warn};

use crate::domain::entities::SoundRef;
use crate::domain::errors::MediaError;
use crate::domain::ports::{ActivePlayback, MediaPort, PlaybackStatus};

/// Player binary used when none is configured.
pub const DEFAULT_PLAYER: &str = "ffplay";

/// Arguments for [`DEFAULT_PLAYER`]. `{file}` is replaced with the clip path.
pub const DEFAULT_PLAYER_ARGS: &[&str] = &["-nodisp", "-autoexit", "-loglevel", "quiet", "{file}"];

const FILE_PLACEHOLDER: &str = "{file}";

/// [`MediaPort`] backed by one child process per clip.
#[derive(Debug, Clone)]
pub struct ProcessPlayer {
    assets_dir: PathBuf,
    program: String,
    args: Vec<String>,
}

impl ProcessPlayer {
    /// Creates player resolving clips under `assets_dir`.
    #[must_use]
    pub fn new(assets_dir: impl Into<PathBuf>, program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            assets_dir: assets_dir.into(),
            program: program.into(),
            args,
        }
    }

    /// Creates player using [`DEFAULT_PLAYER`].
    #[must_use]
    pub fn with_defaults(assets_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            assets_dir,
            DEFAULT_PLAYER,
            DEFAULT_PLAYER_ARGS.iter().map(ToString::to_string).collect(),
        )
    }

    /// Returns assets root.
    #[must_use]
    pub fn assets_dir(&self) -> &Path {
        &self.assets_dir
    }

    fn resolve(&self, sound: &SoundRef) -> PathBuf {
        self.assets_dir.join(sound.as_str())
    }

    fn command_args(&self, file: &Path) -> Vec<String> {
        let file = file.to_string_lossy();
        let mut args: Vec<String> = self
            .args
            .iter()
            .map(|arg| arg.replace(FILE_PLACEHOLDER, &file))
            .collect();

        if !self.args.iter().any(|arg| arg.contains(FILE_PLACEHOLDER)) {
            args.push(file.into_owned());
        }

        args
    }
}

impl MediaPort for ProcessPlayer {
    fn load_and_play(&self, sound: &SoundRef) -> Result<Box<dyn ActivePlayback>, MediaError> {
        let path = self.resolve(sound);
        if !path.is_file() {
            return Err(MediaError::load(
                sound.as_str(),
                format!("no such file: {}", path.display()),
            ));
        }

        let child = Command::new(&self.program)
            .args(self.command_args(&path))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                MediaError::load(sound.as_str(), format!("failed to spawn {}: {e}", self.program))
            })?;

        debug!(sound = %sound.as_str(), pid = ?child.id(), "Started playback");

        Ok(Box::new(ProcessPlayback {
            sound: sound.clone(),
            child: Some(child),
        }))
    }
}

/// Handle owning the player process. Dropping it kills the process.
struct ProcessPlayback {
    sound: SoundRef,
    child: Option<Child>,
}

impl ActivePlayback for ProcessPlayback {
    fn sound(&self) -> &SoundRef {
        &self.sound
    }

    fn stop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                debug!(error = %e, "Player already exited");
            }
        }
    }

    fn status(&mut self) -> PlaybackStatus {
        let Some(child) = self.child.as_mut() else {
            return PlaybackStatus::Finished;
        };

        match child.try_wait() {
            Ok(None) => PlaybackStatus::Playing,
            Ok(Some(status)) => {
                self.child = None;
                if status.success() {
                    PlaybackStatus::Finished
                } else {
                    PlaybackStatus::Failed(MediaError::playback(
                        self.sound.as_str(),
                        format!("player exited with {status}"),
                    ))
                }
            }
            Err(e) => {
                warn!(error = %e, "Failed to poll player process");
                self.child = None;
                PlaybackStatus::Failed(MediaError::playback(self.sound.as_str(), e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Item, Language};

    #[test]
    fn test_placeholder_substitution() {
        let player = ProcessPlayer::with_defaults("/srv/assets");
        let args = player.command_args(Path::new("/srv/assets/audio/COLORS/ES-red.m4a"));

        assert_eq!(
            args,
            vec![
                "-nodisp",
                "-autoexit",
                "-loglevel",
                "quiet",
                "/srv/assets/audio/COLORS/ES-red.m4a"
            ]
        );
    }

    #[test]
    fn test_file_appended_without_placeholder() {
        let player = ProcessPlayer::new("/a", "paplay", vec!["--volume=40000".to_string()]);
        let args = player.command_args(Path::new("/a/x.m4a"));
        assert_eq!(args, vec!["--volume=40000", "/a/x.m4a"]);
    }

    #[tokio::test]
    async fn test_missing_clip_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let player = ProcessPlayer::with_defaults(dir.path());

        let result = player.load_and_play(&Item::Red.sound(Language::Es));

        assert!(matches!(result, Err(MediaError::LoadFailure { .. })));
    }

    #[tokio::test]
    async fn test_missing_player_binary_is_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        let sound = Item::Dog.sound(Language::En);
        let path = dir.path().join(sound.as_str());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, b"").unwrap();

        let player = ProcessPlayer::new(dir.path(), "lingotiles-no-such-player", Vec::new());

        assert!(matches!(
            player.load_and_play(&sound),
            Err(MediaError::LoadFailure { .. })
        ));
    }
}
