//! Sound cue players

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    engine::{SoundKind, SoundPlayer},
    error::EffectError,
};

use super::system::spawn_program;

/// Default command used to play the cue files
pub const DEFAULT_SOUND_COMMAND: &str = "mpg123 -q";

/// Plays cue files from a directory with an external audio command
#[derive(Debug, Clone)]
pub struct CommandSoundPlayer {
    program: String,
    args: Vec<String>,
    sound_dir: PathBuf,
}

impl CommandSoundPlayer {
    /// Build a player from a shell-style command line such as `mpg123 -q`
    pub fn from_command_line(command: &str, sound_dir: impl Into<PathBuf>) -> Result<Self, String> {
        let mut parts = shlex::split(command)
            .ok_or_else(|| format!("Invalid quoting in sound command: {}", command))?;
        if parts.is_empty() {
            return Err("Sound command is empty".to_string());
        }
        let program = parts.remove(0);

        Ok(Self {
            program,
            args: parts,
            sound_dir: sound_dir.into(),
        })
    }

    pub fn sound_dir(&self) -> &Path {
        &self.sound_dir
    }

    /// Location of the file played for `kind`
    pub fn path_for(&self, kind: SoundKind) -> PathBuf {
        self.sound_dir.join(kind.file_name())
    }
}

impl SoundPlayer for CommandSoundPlayer {
    fn play(&self, kind: SoundKind) -> Result<(), EffectError> {
        let path = self.path_for(kind);
        if !path.is_file() {
            return Err(EffectError::Sound(format!("missing sound file {}", path.display())));
        }

        debug!("Playing {} cue from {}", kind, path.display());
        let mut args = self.args.clone();
        args.push(path.to_string_lossy().into_owned());
        spawn_program(self.program.clone(), args).map_err(EffectError::Sound)
    }
}

/// Rings the terminal bell for every cue
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play(&self, kind: SoundKind) -> Result<(), EffectError> {
        debug!("Ringing terminal bell for {} cue", kind);
        let mut stdout = std::io::stdout();
        stdout
            .write_all(b"\x07")
            .and_then(|_| stdout.flush())
            .map_err(|e| EffectError::Sound(format!("failed to ring terminal bell: {}", e)))
    }
}
