//! Alert sound playback

use std::path::{Path, PathBuf};

use tokio::process::Command;
use tracing::{debug, info, warn};

/// Play `path` with `player` in the background.
///
/// Returns false without spawning anything when the sound file is missing.
pub fn play_sound(player: &str, path: &Path) -> bool {
    if !path.exists() {
        debug!("Sound file {} not found, skipping playback", path.display());
        return false;
    }

    let player = player.to_string();
    let path: PathBuf = path.to_path_buf();

    tokio::spawn(async move {
        match run_player(&player, &path).await {
            Ok(()) => debug!("Played {}", path.display()),
            Err(e) => warn!("{}", e),
        }
    });
    true
}

/// Run the player to completion
async fn run_player(player: &str, path: &Path) -> Result<(), String> {
    let output = Command::new(player)
        .arg(path)
        .output()
        .await
        .map_err(|e| format!("Failed to execute {}: {}", player, e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(format!("{} failed: {}", player, stderr.trim()));
    }

    Ok(())
}

/// Check whether the configured player can be launched at all
pub async fn check_sound_player(player: &str) -> Result<(), String> {
    Command::new("which")
        .arg(player)
        .output()
        .await
        .map_err(|e| format!("Failed to look up {}: {}", player, e))
        .and_then(|output| {
            if output.status.success() {
                info!("Sound player {} is available", player);
                Ok(())
            } else {
                Err(format!("Sound player {} not found, alerts will be silent", player))
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_sound_file_is_skipped() {
        assert!(!play_sound("true", Path::new("/nonexistent/chime.aiff")));
    }

    #[tokio::test]
    async fn failing_player_is_reported() {
        let result = run_player("false", Path::new("/")).await;
        assert!(result.is_err());
    }
}
