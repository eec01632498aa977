//! Shared test harness for integration tests.
//!
//! Provides [`FakeTools`], a temp directory holding shell-script stand-ins
//! for mplayer and ffmpeg plus a config file pointing at them. The fakes
//! append one line per invocation to `calls.log` so tests can see which tool
//! ran on which file.

#![allow(dead_code)]

use avi2mp4::config::{Config, ToolsConfig};
use avi2mp4_av::test_support::script;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Copies its input to `-dumpfile`, unless the input contains "corrupt".
const FAKE_MPLAYER: &str = r#"log="$(dirname "$0")/calls.log"
prev=""
for a in "$@"; do
  [ "$prev" = "-dumpfile" ] && dst="$a"
  prev="$a"
done
echo "mplayer $prev" >> "$log"
if grep -q corrupt "$prev"; then
  echo "MPlayer: no video stream found in $prev" >&2
  exit 1
fi
cp "$prev" "$dst"
"#;

/// Copies the `-i` input to the last argument, honouring `-n`.
const FAKE_FFMPEG: &str = r#"log="$(dirname "$0")/calls.log"
prev=""
no_clobber=0
for a in "$@"; do
  [ "$prev" = "-i" ] && src="$a"
  [ "$a" = "-n" ] && no_clobber=1
  prev="$a"
done
echo "ffmpeg $src" >> "$log"
if [ "$no_clobber" = 1 ] && [ -e "$prev" ]; then
  echo "File '$prev' already exists. Exiting." >&2
  exit 1
fi
cp "$src" "$prev"
"#;

pub struct FakeTools {
    pub dir: TempDir,
}

impl FakeTools {
    pub fn install() -> Self {
        Self::with_ffmpeg(FAKE_FFMPEG)
    }

    /// Install the default mplayer with a custom ffmpeg body.
    pub fn with_ffmpeg(ffmpeg_body: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        script(dir.path(), "mplayer", FAKE_MPLAYER);
        script(dir.path(), "ffmpeg", ffmpeg_body);

        let tools = Self { dir };
        fs::write(
            tools.config_path(),
            format!(
                "[tools]\nmplayer_path = {:?}\nffmpeg_path = {:?}\n",
                tools.mplayer().display().to_string(),
                tools.ffmpeg().display().to_string()
            ),
        )
        .unwrap();
        tools
    }

    pub fn mplayer(&self) -> PathBuf {
        self.dir.path().join("mplayer")
    }

    pub fn ffmpeg(&self) -> PathBuf {
        self.dir.path().join("ffmpeg")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("avi2mp4.toml")
    }

    pub fn config(&self) -> Config {
        Config {
            tools: ToolsConfig {
                mplayer_path: Some(self.mplayer()),
                ffmpeg_path: Some(self.ffmpeg()),
            },
            ..Default::default()
        }
    }

    /// Lines of `calls.log`, e.g. `"mplayer /videos/a.avi"`.
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls.log"))
            .map(|log| log.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn calls_to(&self, tool: &str) -> usize {
        self.calls()
            .iter()
            .filter(|line| line.starts_with(&format!("{tool} ")))
            .count()
    }
}

/// Create `path` (and its parents) holding `contents`.
pub fn video(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}
